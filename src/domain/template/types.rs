//! Template types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum accepted template body size in bytes
pub const MAX_BODY_LEN: usize = 64 * 1024;

/// Template-specific error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid template ID: {0}")]
    InvalidId(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Token already bound: {0}")]
    DuplicateToken(String),

    #[error("No binding for token: {0}")]
    UnboundToken(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// What to do with placeholders that have no binding at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnboundPolicy {
    /// Leave the placeholder verbatim in the output (fail-open)
    #[default]
    PassThrough,
    /// Refuse to render (fail-closed)
    Reject,
}

/// A stored template definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Unique template identifier (alphanumeric, dash, underscore)
    pub id: String,

    /// Human-readable template name
    pub name: String,

    /// Template text with {placeholder} tokens
    pub body: String,

    /// Template description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Build a template stamped with the current time
    pub fn new(id: impl Into<String>, name: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            body: body.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the template
    pub fn validate(&self) -> TemplateResult<()> {
        if self.id.is_empty() || self.id.len() > 64 {
            return Err(TemplateError::InvalidId(
                "ID must be 1-64 characters".to_string(),
            ));
        }

        if !self
            .id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(TemplateError::InvalidId(
                "ID must contain only alphanumeric, dash, or underscore".to_string(),
            ));
        }

        if self.name.is_empty() || self.name.len() > 256 {
            return Err(TemplateError::InvalidTemplate(
                "Name must be 1-256 characters".to_string(),
            ));
        }

        if self.body.len() > MAX_BODY_LEN {
            return Err(TemplateError::InvalidTemplate(format!(
                "Body must be at most {} bytes",
                MAX_BODY_LEN
            )));
        }

        Ok(())
    }
}

/// Request to create a new template
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    /// Unique template identifier
    pub id: String,

    /// Human-readable template name
    pub name: String,

    /// Template text with {placeholder} tokens
    pub body: String,

    /// Template description (optional)
    pub description: Option<String>,
}

impl From<CreateTemplateRequest> for Template {
    fn from(req: CreateTemplateRequest) -> Self {
        let mut template = Template::new(req.id, req.name, req.body);
        template.description = req.description;
        template
    }
}

/// Request to update an existing template
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTemplateRequest {
    /// Human-readable template name (optional)
    pub name: Option<String>,

    /// Template text (optional)
    pub body: Option<String>,

    /// Template description (optional, use null to clear)
    pub description: Option<Option<String>>,
}

/// Response for listing templates
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    /// List of templates
    pub templates: Vec<Template>,

    /// Total count
    pub total: usize,
}

/// Output of rendering a stored template
#[derive(Debug, Clone, Serialize)]
pub struct RenderedTemplate {
    /// Template that was rendered
    pub template_id: String,

    /// Rendered text
    pub text: String,

    /// Placeholders that had no binding and were left in place
    pub unbound: Vec<String>,
}
