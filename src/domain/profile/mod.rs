//! Profile cards: a person's name and birthday rendered through a fixed template.
//!
//! A [`ProfileCard`] formats its raw fields once at construction and keeps the
//! resulting bindings. Rendering is done through [`std::fmt::Display`] and can
//! be repeated freely.

mod format;

use std::fmt;

use chrono::{Locale, NaiveDate};

use crate::template::{render, Bindings, Template, TemplateError, TemplateResult};

pub use format::{format_date, normalize_locale, parse_locale, DatePattern};

/// Template shared by every profile card
pub const PROFILE_TEMPLATE: &str =
    "Her name is {name} and her birthday is on {dob}, which is in {month}.";

/// ID under which the profile template is registered in a template store
pub const PROFILE_TEMPLATE_ID: &str = "profile";

/// Store entry for [`PROFILE_TEMPLATE`]
pub fn profile_template() -> Template {
    let mut template = Template::new(PROFILE_TEMPLATE_ID, "Profile", PROFILE_TEMPLATE);
    template.description = Some("Name, birthday and birth month".to_string());
    template
}

#[derive(Debug, Clone)]
pub struct ProfileCard {
    name: String,
    dob: NaiveDate,
    locale: Locale,
    bindings: Bindings,
}

impl ProfileCard {
    /// Build a card, formatting the date under both patterns.
    ///
    /// Fails with [`TemplateError::InvalidArgument`] if `name` is blank.
    pub fn new(name: impl Into<String>, dob: NaiveDate, locale: Locale) -> TemplateResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TemplateError::InvalidArgument(
                "name must not be empty".to_string(),
            ));
        }

        let bindings = Bindings::new()
            .bind("name", name.as_str())?
            .bind("dob", format_date(dob, DatePattern::Numeric, locale))?
            .bind("month", format_date(dob, DatePattern::FullMonth, locale))?;

        Ok(Self {
            name,
            dob,
            locale,
            bindings,
        })
    }

    /// Build a card from optional fields, as they arrive from untyped input.
    pub fn from_fields(
        name: Option<String>,
        dob: Option<NaiveDate>,
        locale: Locale,
    ) -> TemplateResult<Self> {
        let name =
            name.ok_or_else(|| TemplateError::InvalidArgument("name is required".to_string()))?;
        let dob =
            dob.ok_or_else(|| TemplateError::InvalidArgument("dob is required".to_string()))?;
        Self::new(name, dob, locale)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn template(&self) -> &'static str {
        PROFILE_TEMPLATE
    }

    /// Same sentence produced with positional `format!` arguments.
    pub fn render_positional(&self) -> String {
        format!(
            "Her name is {0} and her birthday is on {1}, which is in {2}.",
            self.name,
            format_date(self.dob, DatePattern::Numeric, self.locale),
            format_date(self.dob, DatePattern::FullMonth, self.locale),
        )
    }
}

impl fmt::Display for ProfileCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(PROFILE_TEMPLATE, &self.bindings))
    }
}
