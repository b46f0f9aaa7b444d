// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::Post;
use crate::domain::slug::RecordKey;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persists a new post and returns it with its assigned key.
    async fn insert(&self, post: &Post) -> DomainResult<Post>;
    async fn update(&self, post: &Post) -> DomainResult<Post>;
    async fn soft_delete(&self, id: RecordKey, at: DateTime<Utc>) -> DomainResult<()>;
    async fn find_by_id(&self, id: RecordKey) -> DomainResult<Option<Post>>;
    /// Exact match on a named column, ignoring trashed rows.
    async fn find_by_field(&self, field: &str, value: &str) -> DomainResult<Option<Post>>;
}
