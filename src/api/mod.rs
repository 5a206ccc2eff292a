//! API layer - HTTP endpoint handlers organized by domain.

mod health;
mod profile;
mod routes;
mod template;

pub use health::{health, HealthResponse};
pub use profile::{render_profile, RenderProfileRequest, RenderProfileResponse};
pub use routes::api_routes;
pub use template::{
    create_template, delete_template, get_template, list_templates, render_template,
    update_template, RenderTemplateRequest,
};
