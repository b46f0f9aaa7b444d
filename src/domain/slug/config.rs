// src/domain/slug/config.rs
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::charset::CharacterClassPattern;

pub const DEFAULT_SOURCE_FIELD: &str = "title";
pub const DEFAULT_DESTINATION_FIELD: &str = "slug";
pub const DEFAULT_SEPARATOR: char = '-';
pub const DEFAULT_MAX_LENGTH: usize = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Fa,
    Ar,
    En,
}

impl Language {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fa => "fa",
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Lenient lookup: unsupported codes resolve to Persian.
    pub fn from_code_or_default(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            tracing::warn!(language = code, "unsupported slug language, using fa");
            Self::Fa
        })
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fa" => Ok(Self::Fa),
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            _ => Err(UnsupportedLanguage(s.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported slug language: {0}")]
pub struct UnsupportedLanguage(pub String);

/// Host-wide defaults. Records may override any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugDefaults {
    pub source_field: String,
    pub destination_field: String,
    pub separator: char,
    pub language: Language,
    pub max_length: usize,
    pub force_update: bool,
    pub unique: bool,
    pub use_for_routes: bool,
    pub transliterate: bool,
    pub lowercase: bool,
    pub include_trashed: bool,
}

impl Default for SlugDefaults {
    fn default() -> Self {
        Self {
            source_field: DEFAULT_SOURCE_FIELD.into(),
            destination_field: DEFAULT_DESTINATION_FIELD.into(),
            separator: DEFAULT_SEPARATOR,
            language: Language::default(),
            max_length: DEFAULT_MAX_LENGTH,
            force_update: false,
            unique: true,
            use_for_routes: false,
            transliterate: false,
            lowercase: true,
            include_trashed: true,
        }
    }
}

/// Named overrides for a record type or a single record. Unset fields fall
/// through to [`SlugDefaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SlugOverrides {
    #[serde(alias = "slugSourceField", skip_serializing_if = "Option::is_none")]
    pub source_field: Option<String>,
    #[serde(alias = "slugDestinationField", skip_serializing_if = "Option::is_none")]
    pub destination_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_for_routes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliterate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowercase: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_trashed: Option<bool>,
}

impl SlugOverrides {
    pub fn with_source_field(mut self, field: impl Into<String>) -> Self {
        self.source_field = Some(field.into());
        self
    }

    pub fn with_destination_field(mut self, field: impl Into<String>) -> Self {
        self.destination_field = Some(field.into());
        self
    }

    pub const fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub const fn with_force_update(mut self, force: bool) -> Self {
        self.force_update = Some(force);
        self
    }

    pub const fn with_unique(mut self, unique: bool) -> Self {
        self.unique = Some(unique);
        self
    }

    pub const fn with_use_for_routes(mut self, use_for_routes: bool) -> Self {
        self.use_for_routes = Some(use_for_routes);
        self
    }

    pub const fn with_transliterate(mut self, transliterate: bool) -> Self {
        self.transliterate = Some(transliterate);
        self
    }

    pub const fn with_include_trashed(mut self, include_trashed: bool) -> Self {
        self.include_trashed = Some(include_trashed);
        self
    }

    /// Layers `self` on top of `base`: fields set here win, unset ones are
    /// taken from `base`.
    #[must_use]
    pub fn over(&self, base: &Self) -> Self {
        Self {
            source_field: self.source_field.clone().or_else(|| base.source_field.clone()),
            destination_field: self
                .destination_field
                .clone()
                .or_else(|| base.destination_field.clone()),
            separator: self.separator.or(base.separator),
            language: self.language.clone().or_else(|| base.language.clone()),
            max_length: self.max_length.or(base.max_length),
            force_update: self.force_update.or(base.force_update),
            unique: self.unique.or(base.unique),
            use_for_routes: self.use_for_routes.or(base.use_for_routes),
            transliterate: self.transliterate.or(base.transliterate),
            lowercase: self.lowercase.or(base.lowercase),
            include_trashed: self.include_trashed.or(base.include_trashed),
        }
    }
}

/// Effective settings for one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConfig {
    pub source_field: String,
    pub destination_field: String,
    pub separator: char,
    pub language: Language,
    pub max_length: usize,
    pub force_update: bool,
    pub unique: bool,
    pub use_for_routes: bool,
    pub transliterate: bool,
    pub lowercase: bool,
    pub include_trashed: bool,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self::resolve(&SlugOverrides::default(), &SlugDefaults::default())
    }
}

impl SlugConfig {
    pub fn resolve(overrides: &SlugOverrides, defaults: &SlugDefaults) -> Self {
        let language = overrides
            .language
            .as_deref()
            .map_or(defaults.language, Language::from_code_or_default);

        let separator = overrides.separator.unwrap_or(defaults.separator);
        let separator = if is_valid_separator(separator, language) {
            separator
        } else {
            tracing::warn!(?separator, "invalid slug separator, using `-`");
            DEFAULT_SEPARATOR
        };

        let max_length = match overrides.max_length.unwrap_or(defaults.max_length) {
            0 => {
                tracing::warn!("slug max length must be positive, using default");
                DEFAULT_MAX_LENGTH
            }
            n => n,
        };

        Self {
            source_field: overrides
                .source_field
                .clone()
                .unwrap_or_else(|| defaults.source_field.clone()),
            destination_field: overrides
                .destination_field
                .clone()
                .unwrap_or_else(|| defaults.destination_field.clone()),
            separator,
            language,
            max_length,
            force_update: overrides.force_update.unwrap_or(defaults.force_update),
            unique: overrides.unique.unwrap_or(defaults.unique),
            use_for_routes: overrides.use_for_routes.unwrap_or(defaults.use_for_routes),
            transliterate: overrides.transliterate.unwrap_or(defaults.transliterate),
            lowercase: overrides.lowercase.unwrap_or(defaults.lowercase),
            include_trashed: overrides.include_trashed.unwrap_or(defaults.include_trashed),
        }
    }

    pub const fn pattern(&self) -> CharacterClassPattern {
        CharacterClassPattern::for_language(self.language)
    }

    /// Field used to look a record up from a route segment.
    pub fn route_key_name<'a>(&'a self, primary_key: &'a str) -> &'a str {
        if self.use_for_routes {
            &self.destination_field
        } else {
            primary_key
        }
    }
}

/// A separator must survive every pipeline stage unchanged and never be
/// mistaken for slug content.
pub fn is_valid_separator(separator: char, language: Language) -> bool {
    !(separator.is_alphanumeric()
        || separator.is_whitespace()
        || separator.is_control()
        || super::charset::is_invisible_format(separator)
        || CharacterClassPattern::for_language(language).contains(separator)
        || super::charset::fold_numeral(separator).is_some())
}
