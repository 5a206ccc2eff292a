//! Locale-aware date formatting for profile fields

use chrono::{Locale, NaiveDate, NaiveTime};

use crate::template::{TemplateError, TemplateResult};

/// The two date renderings a profile needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// Two-digit month, two-digit day, four-digit year: `04/10/2000`
    Numeric,
    /// Full month name in the requested locale: `April`
    FullMonth,
}

impl DatePattern {
    /// strftime specification for the pattern
    pub fn strftime(self) -> &'static str {
        match self {
            DatePattern::Numeric => "%m/%d/%Y",
            DatePattern::FullMonth => "%B",
        }
    }
}

/// Format `date` under `pattern` using `locale` for names.
pub fn format_date(date: NaiveDate, pattern: DatePattern, locale: Locale) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(pattern.strftime(), locale)
        .to_string()
}

/// Canonical spelling of a locale name: `fr-FR` becomes `fr_FR`.
pub fn normalize_locale(name: &str) -> String {
    name.trim().replace('-', "_")
}

/// Parse a locale name such as `en_US` or `fr-FR`.
pub fn parse_locale(name: &str) -> TemplateResult<Locale> {
    Locale::try_from(normalize_locale(name).as_str())
        .map_err(|_| TemplateError::InvalidArgument(format!("unknown locale: {}", name)))
}
