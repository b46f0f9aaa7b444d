// tests/support/mocks.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sluggable::application::ports::time::Clock;
use sluggable::domain::errors::{DomainError, DomainResult};
use sluggable::domain::post::{Post, PostRepository};
use sluggable::domain::slug::{RecordKey, SlugLookup, SlugQuery, Sluggable};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

#[derive(Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// Post store backed by a map. Doubles as the slug lookup for its rows.
#[derive(Default)]
pub struct InMemoryPostRepo {
    rows: Mutex<BTreeMap<i64, Post>>,
    probes: Mutex<Vec<String>>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, id: i64, title: &str, slug: &str, trashed: bool) {
        let mut post = Post::new(title).with_slug(slug);
        post.id = Some(RecordKey::new(id).unwrap());
        if trashed {
            post.trash(fixed_now());
        }
        self.rows.lock().unwrap().insert(id, post);
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.rows.lock().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn insert(&self, post: &Post) -> DomainResult<Post> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
        let mut stored = post.clone();
        stored.id = Some(RecordKey::new(id)?);
        rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, post: &Post) -> DomainResult<Post> {
        let id = post
            .id
            .ok_or_else(|| DomainError::Validation("cannot update an unsaved post".into()))?;
        let mut rows = self.rows.lock().unwrap();
        let slot = rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        *slot = post.clone();
        Ok(post.clone())
    }

    async fn soft_delete(&self, id: RecordKey, at: DateTime<Utc>) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        let post = rows
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.trash(at);
        Ok(())
    }

    async fn find_by_id(&self, id: RecordKey) -> DomainResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_field(&self, field: &str, value: &str) -> DomainResult<Option<Post>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .values()
            .find(|post| !post.is_trashed() && post.field(field) == Some(value))
            .cloned())
    }
}

#[async_trait]
impl SlugLookup for InMemoryPostRepo {
    async fn exists(&self, query: &SlugQuery<'_>) -> DomainResult<bool> {
        self.probes.lock().unwrap().push(query.value.to_string());
        let rows = self.rows.lock().unwrap();
        Ok(rows.values().any(|post| {
            post.field(query.field) == Some(query.value)
                && (query.exclude.is_none() || post.id != query.exclude)
                && (query.with_trashed || !post.is_trashed())
        }))
    }
}

/// Lookup whose store is unreachable.
pub struct FailingLookup;

#[async_trait]
impl SlugLookup for FailingLookup {
    async fn exists(&self, _query: &SlugQuery<'_>) -> DomainResult<bool> {
        Err(DomainError::Persistence("database is locked".into()))
    }
}
