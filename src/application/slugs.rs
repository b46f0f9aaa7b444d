// src/application/slugs.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{error::ApplicationResult, hooks::SavingHook};
use crate::domain::slug::{
    ResolveScope, Slug, SlugConfig, SlugDefaults, SlugLookup, Sluggable, resolve, transform,
    truncate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A slug is already set and the config does not force regeneration.
    DestinationPresent,
    EmptySource,
    /// The source had no characters that survive the pipeline.
    EmptyResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugOutcome {
    Generated(String),
    Skipped(SkipReason),
}

/// Generates slugs for records right before they are saved.
///
/// Uniqueness is checked with one query per candidate. Two concurrent saves
/// can still pick the same slug between the check and the write, so the
/// destination column should also carry a unique index.
pub struct SlugService {
    lookup: Arc<dyn SlugLookup>,
    defaults: SlugDefaults,
}

impl SlugService {
    pub fn new(lookup: Arc<dyn SlugLookup>, defaults: SlugDefaults) -> Self {
        Self { lookup, defaults }
    }

    pub fn config_for(&self, record: &dyn Sluggable) -> SlugConfig {
        SlugConfig::resolve(&record.slug_overrides(), &self.defaults)
    }

    /// Field a router should match against when binding this record type.
    pub fn route_key_name(&self, record: &dyn Sluggable) -> String {
        self.config_for(record)
            .route_key_name(record.key_name())
            .to_string()
    }

    pub async fn generate_slug(&self, record: &mut dyn Sluggable) -> ApplicationResult<SlugOutcome> {
        let config = self.config_for(record);

        let current = record.field(&config.destination_field).unwrap_or_default();
        if !config.force_update && !current.is_empty() {
            if let Err(err) = Slug::parse(current, &config) {
                tracing::warn!(field = %config.destination_field, error = %err, "keeping non-conforming slug");
            }
            tracing::debug!(field = %config.destination_field, "slug already set, skipping");
            return Ok(SlugOutcome::Skipped(SkipReason::DestinationPresent));
        }

        let source = match record.field(&config.source_field) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                tracing::debug!(field = %config.source_field, "slug source is empty, skipping");
                return Ok(SlugOutcome::Skipped(SkipReason::EmptySource));
            }
        };

        let mut candidate = transform(source, &config);
        if config.lowercase {
            candidate.make_ascii_lowercase();
        }
        let candidate = truncate(&candidate, config.max_length, config.separator);
        if candidate.is_empty() {
            tracing::debug!(field = %config.source_field, "source produced an empty slug");
            return Ok(SlugOutcome::Skipped(SkipReason::EmptyResult));
        }

        let slug = if config.unique {
            let scope = ResolveScope {
                field: &config.destination_field,
                separator: config.separator,
                max_length: config.max_length,
                exclude: record.key().filter(|_| record.exists_in_store()),
                with_trashed: record.supports_soft_delete() && config.include_trashed,
            };
            resolve(&candidate, &scope, self.lookup.as_ref()).await?
        } else {
            candidate
        };

        record.set_field(&config.destination_field, slug.clone())?;
        tracing::info!(field = %config.destination_field, slug = %slug, "slug generated");
        Ok(SlugOutcome::Generated(slug))
    }
}

#[async_trait]
impl SavingHook for SlugService {
    async fn saving(&self, record: &mut dyn Sluggable) -> ApplicationResult<()> {
        self.generate_slug(record).await.map(|_| ())
    }
}
