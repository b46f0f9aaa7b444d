// src/application/hooks.rs
use crate::application::error::ApplicationResult;
use crate::domain::slug::Sluggable;
use async_trait::async_trait;

/// Callback a save path runs on a record right before it is written.
#[async_trait]
pub trait SavingHook: Send + Sync {
    async fn saving(&self, record: &mut dyn Sluggable) -> ApplicationResult<()>;
}
