//! Profile card rendering endpoint.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppJson, Result};
use crate::profile::{normalize_locale, parse_locale, ProfileCard};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderProfileRequest {
    pub name: Option<String>,
    /// Calendar date, `YYYY-MM-DD`
    pub dob: Option<NaiveDate>,
    /// Locale for the month name; defaults to `rendering.locale`
    pub locale: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RenderProfileResponse {
    pub text: String,
    pub locale: String,
}

/// POST /api/v1/profiles/render - Render the profile sentence
#[tracing::instrument(name = "http.render_profile", skip(state, request))]
pub async fn render_profile(
    State(state): State<AppState>,
    AppJson(request): AppJson<RenderProfileRequest>,
) -> Result<Json<RenderProfileResponse>> {
    let (locale_name, locale) = match request.locale {
        Some(name) => {
            let locale = parse_locale(&name)?;
            (normalize_locale(&name), locale)
        }
        None => (
            normalize_locale(&state.settings.rendering.locale),
            state.default_locale,
        ),
    };

    let card = ProfileCard::from_fields(request.name, request.dob, locale)?;

    Ok(Json(RenderProfileResponse {
        text: card.to_string(),
        locale: locale_name,
    }))
}
