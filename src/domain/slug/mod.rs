// src/domain/slug/mod.rs
pub mod charset;
pub mod config;
pub mod lookup;
pub mod record;
pub mod resolver;
pub mod transformer;
pub mod value_objects;

#[cfg(test)]
mod transformer_tests;

pub use config::{Language, SlugConfig, SlugDefaults, SlugOverrides};
pub use lookup::{SlugLookup, SlugQuery};
pub use record::{RecordKey, Sluggable};
pub use resolver::{ResolveScope, resolve};
pub use transformer::{transform, truncate};
pub use value_objects::Slug;
