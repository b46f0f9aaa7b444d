// src/config.rs
use crate::domain::slug::{Language, SlugDefaults};
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    slug_defaults: SlugDefaults,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://sluggable.db?mode=rwc".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Every `SLUG_*` key is
    /// optional and falls back to the documented slug defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(default_database_url);
        if database_url.trim().is_empty() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let mut defaults = SlugDefaults::default();

        if let Some(field) = lookup("SLUG_SOURCE_FIELD") {
            defaults.source_field = field.trim().to_string();
        }
        if let Some(field) = lookup("SLUG_DESTINATION_FIELD") {
            defaults.destination_field = field.trim().to_string();
        }
        if let Some(raw) = lookup("SLUG_SEPARATOR") {
            defaults.separator = parse_separator(&raw)?;
        }
        if let Some(raw) = lookup("SLUG_LANGUAGE") {
            defaults.language = Language::from_code_or_default(&raw);
        }
        if let Some(raw) = lookup("SLUG_MAX_LENGTH") {
            defaults.max_length = parse_value::<usize>("SLUG_MAX_LENGTH", &raw)?;
        }

        let flag = |key: &'static str, fallback: bool| -> Result<bool, ConfigError> {
            lookup(key).map_or(Ok(fallback), |raw| parse_flag(key, &raw))
        };
        defaults.force_update = flag("SLUG_FORCE_UPDATE", defaults.force_update)?;
        defaults.unique = flag("SLUG_UNIQUE", defaults.unique)?;
        defaults.use_for_routes = flag("SLUG_USE_FOR_ROUTES", defaults.use_for_routes)?;
        defaults.transliterate = flag("SLUG_TRANSLITERATE", defaults.transliterate)?;
        defaults.lowercase = flag("SLUG_LOWERCASE", defaults.lowercase)?;
        defaults.include_trashed = flag("SLUG_INCLUDE_TRASHED", defaults.include_trashed)?;

        Ok(Self {
            database_url,
            slug_defaults: defaults,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn slug_defaults(&self) -> &SlugDefaults {
        &self.slug_defaults
    }
}

fn parse_separator(raw: &str) -> Result<char, ConfigError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(separator), None) => Ok(separator),
        _ => Err(ConfigError::Invalid(
            "SLUG_SEPARATOR must be a single character".into(),
        )),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value: {raw}")))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got {raw}"
        ))),
    }
}
