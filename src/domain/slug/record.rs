// src/domain/slug/record.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

use super::config::SlugOverrides;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(pub i64);

impl RecordKey {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record key must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordKey> for i64 {
    fn from(value: RecordKey) -> Self {
        value.0
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capability a record type exposes so slugs can be generated for it.
pub trait Sluggable: Send {
    /// Reads a text field by name. Unknown fields read as `None`.
    fn field(&self, name: &str) -> Option<&str>;

    fn set_field(&mut self, name: &str, value: String) -> DomainResult<()>;

    fn key(&self) -> Option<RecordKey>;

    fn exists_in_store(&self) -> bool {
        self.key().is_some()
    }

    /// Whether the record's collection keeps soft-deleted rows around.
    fn supports_soft_delete(&self) -> bool {
        false
    }

    fn key_name(&self) -> &'static str {
        "id"
    }

    fn slug_overrides(&self) -> SlugOverrides {
        SlugOverrides::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_key_rejects_non_positive() {
        assert!(RecordKey::new(0).is_err());
        assert!(RecordKey::new(-3).is_err());
        assert_eq!(i64::from(RecordKey::new(7).unwrap()), 7);
    }
}
