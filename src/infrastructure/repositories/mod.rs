// src/infrastructure/repositories/mod.rs
pub mod error;
mod sqlite_post;
mod sqlite_slug_lookup;

pub use sqlite_post::SqlitePostRepository;
pub use sqlite_slug_lookup::SqliteSlugLookup;
