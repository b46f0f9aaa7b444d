// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

use super::config::SlugConfig;

/// A stored slug that satisfies the separator and allow-list rules of the
/// config it was parsed with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: impl Into<String>, config: &SlugConfig) -> DomainResult<Self> {
        let value = value.into();
        let separator = config.separator;
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.starts_with(separator) || value.ends_with(separator) {
            return Err(DomainError::Validation(
                "slug cannot start or end with a separator".into(),
            ));
        }
        let mut doubled = String::with_capacity(2 * separator.len_utf8());
        doubled.push(separator);
        doubled.push(separator);
        if value.contains(&doubled) {
            return Err(DomainError::Validation(
                "slug cannot contain repeated separators".into(),
            ));
        }
        let pattern = config.pattern();
        if let Some(ch) = value.chars().find(|ch| !pattern.allows(*ch, separator)) {
            return Err(DomainError::Validation(format!(
                "slug contains disallowed character {ch:?}"
            )));
        }
        if value.chars().count() > config.max_length {
            return Err(DomainError::Validation(format!(
                "slug exceeds {} characters",
                config.max_length
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
