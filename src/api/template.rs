//! Template CRUD and render endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::{AppJson, Result};
use crate::server::AppState;
use crate::template::{
    Bindings, CreateTemplateRequest, RenderedTemplate, Template, TemplateListResponse,
    UnboundPolicy, UpdateTemplateRequest,
};

/// Body of a render request. Binding keys are token literals such as `{name}`
/// and are applied in the order they appear.
#[derive(Debug, Default, Deserialize)]
pub struct RenderTemplateRequest {
    #[serde(default)]
    pub bindings: serde_json::Map<String, serde_json::Value>,
    /// Overrides the configured policy for this request
    pub policy: Option<UnboundPolicy>,
}

/// POST /api/v1/templates - Create a new template
#[tracing::instrument(
    name = "http.create_template",
    skip(state, request),
    fields(template_id = %request.id)
)]
pub async fn create_template(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateTemplateRequest>,
) -> Result<(StatusCode, Json<Template>)> {
    let template: Template = request.into();
    let created = state.template_store.create(template)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/templates - List all templates
#[tracing::instrument(name = "http.list_templates", skip(state))]
pub async fn list_templates(State(state): State<AppState>) -> Json<TemplateListResponse> {
    let templates = state.template_store.list();
    let total = templates.len();

    Json(TemplateListResponse { templates, total })
}

/// GET /api/v1/templates/{id} - Get a specific template
#[tracing::instrument(name = "http.get_template", skip(state))]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>> {
    Ok(Json(state.template_store.get(&id)?))
}

/// PUT /api/v1/templates/{id} - Update an existing template
#[tracing::instrument(name = "http.update_template", skip(state, request))]
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateTemplateRequest>,
) -> Result<Json<Template>> {
    Ok(Json(state.template_store.update(&id, request)?))
}

/// DELETE /api/v1/templates/{id} - Delete a template
#[tracing::instrument(name = "http.delete_template", skip(state))]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.template_store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/templates/{id}/render - Render a template with bindings
#[tracing::instrument(
    name = "http.render_template",
    skip(state, request),
    fields(bindings = request.bindings.len())
)]
pub async fn render_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<RenderTemplateRequest>,
) -> Result<Json<RenderedTemplate>> {
    let bindings = Bindings::from_json(&request.bindings)?;
    let policy = request.policy.unwrap_or_else(|| state.unbound_policy());

    let rendered = state.template_store.render(&id, &bindings, policy)?;
    Ok(Json(rendered))
}
