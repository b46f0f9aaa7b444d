// tests/support/builders.rs
use std::sync::Arc;

use sluggable::application::services::ApplicationServices;
use sluggable::domain::post::PostRepository;
use sluggable::domain::slug::{SlugDefaults, SlugLookup, SlugOverrides};

use super::mocks::{FixedClock, InMemoryPostRepo};

pub struct ServicesBuilder {
    repo: Arc<InMemoryPostRepo>,
    lookup: Option<Arc<dyn SlugLookup>>,
    defaults: SlugDefaults,
    post_overrides: SlugOverrides,
}

impl ServicesBuilder {
    pub fn new(repo: Arc<InMemoryPostRepo>) -> Self {
        Self {
            repo,
            lookup: None,
            defaults: SlugDefaults::default(),
            post_overrides: SlugOverrides::default(),
        }
    }

    pub fn defaults(mut self, defaults: SlugDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn lookup(mut self, lookup: Arc<dyn SlugLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn post_overrides(mut self, overrides: SlugOverrides) -> Self {
        self.post_overrides = overrides;
        self
    }

    pub fn build(self) -> ApplicationServices {
        let post_repo: Arc<dyn PostRepository> = self.repo.clone();
        let lookup = self.lookup.unwrap_or_else(|| {
            let repo: Arc<dyn SlugLookup> = self.repo.clone();
            repo
        });
        ApplicationServices::new(
            post_repo,
            lookup,
            Arc::new(FixedClock),
            self.defaults,
            self.post_overrides,
        )
    }
}
