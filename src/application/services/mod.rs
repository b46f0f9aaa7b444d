// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::posts::PostCommandService, hooks::SavingHook, ports::ClockPort,
        queries::posts::PostQueryService, slugs::SlugService,
    },
    domain::{
        post::PostRepository,
        slug::{SlugDefaults, SlugLookup, SlugOverrides},
    },
};

pub struct ApplicationServices {
    pub slugs: Arc<SlugService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        slug_lookup: Arc<dyn SlugLookup>,
        clock: Arc<ClockPort>,
        slug_defaults: SlugDefaults,
        post_overrides: SlugOverrides,
    ) -> Self {
        let slugs = Arc::new(SlugService::new(slug_lookup, slug_defaults));

        let mut post_commands = PostCommandService::new(Arc::clone(&post_repo), clock)
            .with_model_overrides(post_overrides.clone());
        let hook: Arc<dyn SavingHook> = slugs.clone();
        post_commands.register_hook(hook);

        let post_queries = PostQueryService::new(post_repo, Arc::clone(&slugs))
            .with_model_overrides(post_overrides);

        Self {
            slugs,
            post_commands: Arc::new(post_commands),
            post_queries: Arc::new(post_queries),
        }
    }
}
