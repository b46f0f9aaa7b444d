// src/domain/post/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{RecordKey, SlugOverrides, Sluggable};
use chrono::{DateTime, Utc};

/// Sample host record: a post whose slug is derived from its title.
#[derive(Debug, Clone, Default)]
pub struct Post {
    pub id: Option<RecordKey>,
    pub title: String,
    pub slug: String,
    pub deleted_at: Option<DateTime<Utc>>,
    pub overrides: SlugOverrides,
}

impl Post {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: SlugOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub const fn is_trashed(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn trash(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
    }
}

impl Sluggable for Post {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "slug" => Some(&self.slug),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: String) -> DomainResult<()> {
        match name {
            "title" => self.title = value,
            "slug" => self.slug = value,
            other => return Err(DomainError::unknown_field(other)),
        }
        Ok(())
    }

    fn key(&self) -> Option<RecordKey> {
        self.id
    }

    fn supports_soft_delete(&self) -> bool {
        true
    }

    fn slug_overrides(&self) -> SlugOverrides {
        self.overrides.clone()
    }
}
