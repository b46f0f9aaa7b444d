// src/application/commands/posts.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        hooks::SavingHook,
        ports::ClockPort,
    },
    domain::{
        post::{Post, PostRepository},
        slug::{RecordKey, SlugOverrides, Sluggable},
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub slug: Option<String>,
    pub overrides: SlugOverrides,
}

pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub slug: Option<String>,
}

pub struct DeletePostCommand {
    pub id: i64,
}

pub struct PostCommandService {
    repo: Arc<dyn PostRepository>,
    clock: Arc<ClockPort>,
    hooks: Vec<Arc<dyn SavingHook>>,
    model_overrides: SlugOverrides,
}

impl PostCommandService {
    pub fn new(repo: Arc<dyn PostRepository>, clock: Arc<ClockPort>) -> Self {
        Self {
            repo,
            clock,
            hooks: Vec::new(),
            model_overrides: SlugOverrides::default(),
        }
    }

    /// Overrides shared by every post. A post's own stored overrides win.
    #[must_use]
    pub fn with_model_overrides(mut self, overrides: SlugOverrides) -> Self {
        self.model_overrides = overrides;
        self
    }

    /// Hooks run in registration order on every save.
    pub fn register_hook(&mut self, hook: Arc<dyn SavingHook>) {
        self.hooks.push(hook);
    }

    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<Post> {
        let CreatePostCommand {
            title,
            slug,
            overrides,
        } = command;
        let post = Post::new(title)
            .with_slug(slug.unwrap_or_default())
            .with_overrides(overrides);
        self.save_post(post).await
    }

    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<Post> {
        if command.title.is_none() && command.slug.is_none() {
            return Err(ApplicationError::validation("nothing to update"));
        }

        let id = RecordKey::new(command.id)?;
        let mut post = self
            .repo
            .find_by_id(id)
            .await?
            .filter(|post| !post.is_trashed())
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if let Some(title) = command.title {
            post.title = title;
        }
        if let Some(slug) = command.slug {
            post.slug = slug;
        }

        self.save_post(post).await
    }

    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<()> {
        let id = RecordKey::new(command.id)?;
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .filter(|post| !post.is_trashed())
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.repo.soft_delete(id, self.clock.now()).await?;
        tracing::debug!(id = %id, slug = %post.slug, "post moved to trash");
        Ok(())
    }

    pub async fn save_post(&self, mut post: Post) -> ApplicationResult<Post> {
        // Hooks see the effective overrides; only the post's own are stored.
        let own = std::mem::take(&mut post.overrides);
        post.overrides = own.over(&self.model_overrides);
        let hooked = self.run_hooks(&mut post).await;
        post.overrides = own;
        hooked?;

        let saved = if post.exists_in_store() {
            self.repo.update(&post).await
        } else {
            self.repo.insert(&post).await
        };

        saved.map_err(|err| {
            if err.is_conflict() {
                // Another save claimed the slug between the lookup and the write.
                tracing::warn!(slug = %post.slug, "slug taken by a concurrent save");
                ApplicationError::conflict(format!("slug `{}` is already taken", post.slug))
            } else {
                err.into()
            }
        })
    }

    async fn run_hooks(&self, post: &mut Post) -> ApplicationResult<()> {
        for hook in &self.hooks {
            hook.saving(&mut *post).await?;
        }
        Ok(())
    }
}
