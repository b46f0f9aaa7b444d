// src/domain/slug/resolver.rs
use crate::domain::errors::{DomainError, DomainResult};

use super::lookup::{SlugLookup, SlugQuery};
use super::record::RecordKey;
use super::transformer::truncate;

/// Where and how a candidate slug is checked for collisions.
#[derive(Debug, Clone, Copy)]
pub struct ResolveScope<'a> {
    pub field: &'a str,
    pub separator: char,
    pub max_length: usize,
    pub exclude: Option<RecordKey>,
    pub with_trashed: bool,
}

impl ResolveScope<'_> {
    fn query<'q>(&'q self, value: &'q str) -> SlugQuery<'q> {
        SlugQuery {
            field: self.field,
            value,
            exclude: self.exclude,
            with_trashed: self.with_trashed,
        }
    }
}

/// Returns `candidate` if it is free, otherwise the first free
/// `candidate{sep}N` for N = 2, 3, ...
///
/// The base is shortened when a suffix would push the slug past
/// `max_length`. Store errors are returned as-is.
pub async fn resolve(
    candidate: &str,
    scope: &ResolveScope<'_>,
    lookup: &dyn SlugLookup,
) -> DomainResult<String> {
    if !lookup.exists(&scope.query(candidate)).await? {
        return Ok(candidate.to_string());
    }

    let mut counter: u64 = 2;
    loop {
        let next = with_suffix(candidate, counter, scope)?;
        if !lookup.exists(&scope.query(&next)).await? {
            tracing::debug!(candidate, resolved = %next, attempts = counter, "slug collision resolved");
            return Ok(next);
        }
        counter += 1;
    }
}

fn with_suffix(base: &str, counter: u64, scope: &ResolveScope<'_>) -> DomainResult<String> {
    let suffix = counter.to_string();
    if suffix.len() > scope.max_length {
        return Err(DomainError::Conflict(format!(
            "no free slug for `{base}` within {} characters",
            scope.max_length
        )));
    }

    let budget = scope.max_length.saturating_sub(suffix.len() + 1);
    let head = truncate(base, budget, scope.separator);
    if head.is_empty() {
        Ok(suffix)
    } else {
        Ok(format!("{head}{}{suffix}", scope.separator))
    }
}
