// src/domain/slug/lookup.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

use super::record::RecordKey;

/// Exact-match existence probe against one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugQuery<'a> {
    pub field: &'a str,
    pub value: &'a str,
    /// Row excluded from the match, normally the record being updated.
    pub exclude: Option<RecordKey>,
    /// Count soft-deleted rows as collisions.
    pub with_trashed: bool,
}

#[async_trait]
pub trait SlugLookup: Send + Sync {
    async fn exists(&self, query: &SlugQuery<'_>) -> DomainResult<bool>;
}
