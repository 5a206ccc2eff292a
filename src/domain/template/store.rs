//! Template storage with CRUD operations

use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::bindings::Bindings;
use super::substitution::{render_with_policy, unbound_placeholders};
use super::types::{
    RenderedTemplate, Template, TemplateError, TemplateResult, UnboundPolicy,
    UpdateTemplateRequest,
};

/// In-memory template storage
pub struct TemplateStore {
    templates: DashMap<String, Template>,
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateStore {
    /// Create a new template store
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }

    /// Create a new template
    pub fn create(&self, template: Template) -> TemplateResult<Template> {
        template.validate()?;

        match self.templates.entry(template.id.clone()) {
            Entry::Occupied(_) => Err(TemplateError::AlreadyExists(template.id)),
            Entry::Vacant(slot) => {
                tracing::debug!(template_id = %template.id, "Template created");
                slot.insert(template.clone());
                Ok(template)
            }
        }
    }

    /// Get a template by ID
    pub fn get(&self, id: &str) -> TemplateResult<Template> {
        self.templates
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// List all templates, ordered by ID
    pub fn list(&self) -> Vec<Template> {
        let mut templates: Vec<Template> = self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }

    /// Update an existing template
    ///
    /// The entry stays locked from read to write, so a concurrent delete or
    /// update cannot interleave with this one.
    pub fn update(&self, id: &str, updates: UpdateTemplateRequest) -> TemplateResult<Template> {
        let mut entry = self
            .templates
            .get_mut(id)
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))?;

        let mut candidate = entry.value().clone();

        if let Some(name) = updates.name {
            candidate.name = name;
        }

        if let Some(body) = updates.body {
            candidate.body = body;
        }

        if let Some(description) = updates.description {
            candidate.description = description;
        }

        candidate.updated_at = Utc::now();
        candidate.validate()?;

        *entry.value_mut() = candidate.clone();
        tracing::debug!(template_id = %id, "Template updated");

        Ok(candidate)
    }

    /// Delete a template by ID
    pub fn delete(&self, id: &str) -> TemplateResult<()> {
        self.templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    /// Check if a template exists
    pub fn exists(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// Get the number of templates
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// Render a stored template with the given bindings
    pub fn render(
        &self,
        id: &str,
        bindings: &Bindings,
        policy: UnboundPolicy,
    ) -> TemplateResult<RenderedTemplate> {
        let template = self.get(id)?;

        let text = render_with_policy(&template.body, bindings, policy)?;
        let unbound = unbound_placeholders(&template.body, bindings);

        if !unbound.is_empty() {
            tracing::debug!(
                template_id = %id,
                unbound = ?unbound,
                "Rendered with unbound placeholders"
            );
        }

        Ok(RenderedTemplate {
            template_id: template.id,
            text,
            unbound,
        })
    }
}
