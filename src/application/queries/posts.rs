// src/application/queries/posts.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        slugs::SlugService,
    },
    domain::{
        post::{Post, PostRepository},
        slug::{RecordKey, SlugOverrides, Sluggable},
    },
};

pub struct PostQueryService {
    repo: Arc<dyn PostRepository>,
    slugs: Arc<SlugService>,
    model_overrides: SlugOverrides,
}

impl PostQueryService {
    pub fn new(repo: Arc<dyn PostRepository>, slugs: Arc<SlugService>) -> Self {
        Self {
            repo,
            slugs,
            model_overrides: SlugOverrides::default(),
        }
    }

    /// Overrides shared by every post, used to decide the route key.
    #[must_use]
    pub fn with_model_overrides(mut self, overrides: SlugOverrides) -> Self {
        self.model_overrides = overrides;
        self
    }

    pub fn route_key_name(&self) -> String {
        let template = Post::default().with_overrides(self.model_overrides.clone());
        self.slugs.route_key_name(&template)
    }

    /// Binds a route segment to a post, by slug or by primary key depending
    /// on the route key. Trashed posts never match.
    pub async fn find_by_route_key(&self, value: &str) -> ApplicationResult<Post> {
        let field = self.route_key_name();
        let template = Post::default();

        let found = if field == template.key_name() {
            let id = value
                .parse::<i64>()
                .map_err(|_| ApplicationError::not_found("post not found"))
                .and_then(|raw| RecordKey::new(raw).map_err(ApplicationError::from))?;
            self.repo
                .find_by_id(id)
                .await?
                .filter(|post| !post.is_trashed())
        } else {
            self.repo.find_by_field(&field, value).await?
        };

        found.ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}
