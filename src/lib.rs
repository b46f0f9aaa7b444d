//! Automatic slug generation for persisted records.
//!
//! Records implement [`domain::slug::Sluggable`]; a host save path runs
//! [`application::slugs::SlugService`] as a [`application::hooks::SavingHook`]
//! before writing, which fills the destination field with a unique slug.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
