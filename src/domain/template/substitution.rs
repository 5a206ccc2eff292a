//! Placeholder substitution engine for templates

use super::bindings::{is_identifier, Bindings};
use super::types::{TemplateError, TemplateResult, UnboundPolicy};

/// Replace every occurrence of every bound token in `template`.
///
/// Bindings are applied one after another in insertion order, each pass
/// working on the output of the previous one. Tokens without a binding are
/// left untouched.
pub fn render(template: &str, bindings: &Bindings) -> String {
    bindings
        .iter()
        .fold(template.to_string(), |rendered, (token, value)| {
            rendered.replace(token.as_str(), value)
        })
}

/// Render under an explicit policy for unbound placeholders.
///
/// With [`UnboundPolicy::Reject`] the template is checked before any
/// substitution and the first `{identifier}` without a binding is reported.
pub fn render_with_policy(
    template: &str,
    bindings: &Bindings,
    policy: UnboundPolicy,
) -> TemplateResult<String> {
    if policy == UnboundPolicy::Reject {
        if let Some(missing) = unbound_placeholders(template, bindings).into_iter().next() {
            return Err(TemplateError::UnboundToken(missing));
        }
    }

    Ok(render(template, bindings))
}

/// Distinct `{identifier}` placeholders in order of first appearance.
///
/// An identifier starts with an ASCII letter or underscore and continues with
/// ASCII letters, digits or underscores.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = template[cursor..].find('{') {
        let open = cursor + offset;
        let rest = &template[open + 1..];
        let ident_len = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .count();

        if is_identifier(&rest[..ident_len]) && rest[ident_len..].starts_with('}') {
            let token = &template[open..open + ident_len + 2];
            if !found.contains(&token) {
                found.push(token);
            }
            cursor = open + ident_len + 2;
        } else {
            cursor = open + 1;
        }
    }

    found
}

/// Placeholders of `template` that have no entry in `bindings`.
pub fn unbound_placeholders(template: &str, bindings: &Bindings) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|token| !bindings.contains(token))
        .map(str::to_string)
        .collect()
}
