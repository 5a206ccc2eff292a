//! Placeholder tokens and the ordered binding set

use std::fmt;

use serde::Serialize;

use super::types::{TemplateError, TemplateResult};

/// A placeholder as it appears in template text, delimiters included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wrap a literal token. Any non-empty string is accepted.
    pub fn new(literal: impl Into<String>) -> TemplateResult<Self> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(TemplateError::InvalidArgument(
                "token must not be empty".to_string(),
            ));
        }
        Ok(Self(literal))
    }

    /// Brace-delimited token for an identifier: `name` becomes `{name}`.
    ///
    /// The identifier must start with an ASCII letter or underscore and
    /// continue with ASCII letters, digits or underscores.
    pub fn named(identifier: &str) -> TemplateResult<Self> {
        if !is_identifier(identifier) {
            return Err(TemplateError::InvalidArgument(format!(
                "invalid token identifier: {:?}",
                identifier
            )));
        }
        Ok(Self(format!("{{{}}}", identifier)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether `s` is a placeholder identifier.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Ordered association of tokens to their rendered text.
///
/// Iteration follows insertion order. Substitution walks the entries in this
/// order, so when one token occurs inside another token (or inside a bound
/// value) the earlier entry is applied first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bindings {
    entries: Vec<(Token, String)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding. Fails if the token is already bound.
    pub fn insert(&mut self, token: Token, value: impl Into<String>) -> TemplateResult<()> {
        if self.contains(token.as_str()) {
            return Err(TemplateError::DuplicateToken(token.0));
        }
        self.entries.push((token, value.into()));
        Ok(())
    }

    /// Builder form of [`Bindings::insert`] for a `{identifier}` token.
    pub fn bind(mut self, identifier: &str, value: impl Into<String>) -> TemplateResult<Self> {
        self.insert(Token::named(identifier)?, value)?;
        Ok(self)
    }

    /// Value bound to a token literal, if any
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t.as_str() == token)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, &str)> {
        self.entries.iter().map(|(t, v)| (t, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build bindings from a JSON object whose keys are token literals.
    ///
    /// Key order is preserved. Strings are bound verbatim, numbers and
    /// booleans by their text, null as an empty string, and arrays or objects
    /// as compact JSON.
    pub fn from_json(map: &serde_json::Map<String, serde_json::Value>) -> TemplateResult<Self> {
        let mut bindings = Self::new();
        for (key, value) in map {
            let replacement = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                _ => value.to_string(),
            };
            bindings.insert(Token::new(key.as_str())?, replacement)?;
        }
        Ok(bindings)
    }
}

impl<'a> IntoIterator for &'a Bindings {
    type Item = &'a (Token, String);
    type IntoIter = std::slice::Iter<'a, (Token, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
