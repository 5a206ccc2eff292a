use std::sync::Arc;
use std::time::Instant;

use chrono::Locale;

use crate::config::Settings;
use crate::profile::{parse_locale, profile_template};
use crate::template::{TemplateResult, TemplateStore, UnboundPolicy};

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub template_store: Arc<TemplateStore>,
    pub default_locale: Locale,
    pub start_time: Instant,
}

impl AppState {
    /// Build state from settings, registering the built-in profile template.
    pub fn new(settings: Settings) -> TemplateResult<Self> {
        let default_locale = parse_locale(&settings.rendering.locale)?;

        let template_store = Arc::new(TemplateStore::new());
        template_store.create(profile_template())?;

        Ok(Self {
            settings: Arc::new(settings),
            template_store,
            default_locale,
            start_time: Instant::now(),
        })
    }

    /// Policy applied when a render request does not choose one
    pub fn unbound_policy(&self) -> UnboundPolicy {
        self.settings.rendering.unbound
    }
}
