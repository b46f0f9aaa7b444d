// src/domain/slug/transformer.rs
//! Text to slug pipeline. Every stage is total: odd input degrades to a
//! shorter (possibly empty) slug instead of failing.

use super::charset::{
    TATWEEL, ZERO_WIDTH_NON_JOINER, fold_numeral, is_invisible_format, transliterate_letter,
};
use super::config::{Language, SlugConfig};

/// Runs the full pipeline. Output is neither truncated nor case folded.
pub fn transform(value: &str, config: &SlugConfig) -> String {
    let separator = config.separator;

    let text: String = value
        .chars()
        .map(|ch| fold_numeral(ch).unwrap_or(ch))
        .filter(|ch| !is_language_artifact(*ch, config.language))
        .filter(|ch| !is_invisible_format(*ch))
        .collect();

    let text = if config.transliterate {
        transliterate(&text, separator)
    } else {
        text
    };

    let folded = fold_whitespace(&text, separator);
    let pattern = config.pattern();
    let filtered: String = folded
        .chars()
        .filter(|ch| pattern.allows(*ch, separator))
        .collect();

    normalize_separators(&filtered, separator)
}

fn is_language_artifact(ch: char, language: Language) -> bool {
    match language {
        Language::Fa => ch == ZERO_WIDTH_NON_JOINER || ch == TATWEEL,
        Language::Ar => ch == TATWEEL,
        Language::En => false,
    }
}

fn transliterate(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() || ch.is_whitespace() {
            out.push(ch);
        } else if let Some(latin) = transliterate_letter(ch) {
            out.push_str(latin);
        } else {
            // `slugify` joins the pieces of a multi-token rendering with `-`.
            let mut buf = [0u8; 4];
            let latin = ::slug::slugify(ch.encode_utf8(&mut buf));
            out.extend(latin.chars().map(|c| if c == '-' { separator } else { c }));
        }
    }
    out
}

/// Replaces each run of whitespace or underscores with one separator.
fn fold_whitespace(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for ch in text.chars() {
        if ch.is_whitespace() || ch == '_' {
            if !in_run {
                out.push(separator);
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Collapses repeated separators and trims them from both ends.
pub fn normalize_separators(text: &str, separator: char) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == separator && (out.is_empty() || out.ends_with(separator)) {
            continue;
        }
        out.push(ch);
    }
    if out.ends_with(separator) {
        out.pop();
    }
    out
}

/// Cuts `slug` to at most `max_chars` characters and re-trims separators.
pub fn truncate(slug: &str, max_chars: usize, separator: char) -> String {
    if slug.chars().count() <= max_chars {
        return slug.to_string();
    }
    let cut: String = slug.chars().take(max_chars).collect();
    normalize_separators(&cut, separator)
}
