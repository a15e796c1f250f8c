//! Path template resolution.

use super::error::BuildError;
use super::params::Params;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Matches `{...}` placeholders, whatever is between the braces.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>[^{}]*)}").expect("a valid regex"));

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Names of all placeholders in `template`, in order of appearance. Repeated placeholders are
/// reported once.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    PLACEHOLDER
        .captures_iter(template)
        .filter_map(|caps| caps.name("name"))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Substitute every `{name}` in `template` with the encoded value of the matching parameter.
///
/// Every placeholder must be an identifier with a parameter, and every parameter must be
/// referenced by at least one placeholder.
pub fn resolve(template: &str, params: &Params) -> Result<String, BuildError> {
    let mut resolved = String::with_capacity(template.len());
    let mut used = HashSet::new();
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.name("name")) else {
            continue;
        };
        let name = name.as_str();
        if !is_identifier(name) {
            return Err(BuildError::InvalidPlaceholder(name.to_string()));
        }

        let value = params
            .get(name)
            .ok_or_else(|| BuildError::MissingPathParameter(name.to_string()))?;

        resolved.push_str(&template[last..whole.start()]);
        resolved.push_str(&value.encode());
        used.insert(name);
        last = whole.end();
    }
    resolved.push_str(&template[last..]);

    if let Some((name, _)) = params.iter().find(|(name, _)| !used.contains(name)) {
        return Err(BuildError::UnusedPathParameter(name.to_string()));
    }

    Ok(resolved)
}
