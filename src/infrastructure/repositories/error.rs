// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const IDX_POST_SLUG: &str = "posts_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                let on_slug = db_err.constraint() == Some(IDX_POST_SLUG)
                    || db_err.message().contains("posts.slug");
                return if on_slug {
                    DomainError::Conflict("slug already exists".into())
                } else {
                    DomainError::Conflict("unique constraint violated".into())
                };
            }
            if db_err.is_check_violation() {
                return DomainError::Validation("check constraint violated".into());
            }
            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Accepts `name` only if it is a plain SQL identifier, since table and
/// column names cannot be bound as parameters.
pub fn ensure_identifier(name: &str) -> Result<&str, DomainError> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_');
    if valid {
        Ok(name)
    } else {
        Err(DomainError::Validation(format!(
            "`{name}` is not a valid column or table name"
        )))
    }
}
