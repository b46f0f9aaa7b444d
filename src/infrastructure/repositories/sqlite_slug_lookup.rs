// src/infrastructure/repositories/sqlite_slug_lookup.rs
use crate::domain::errors::DomainResult;
use crate::domain::slug::{SlugLookup, SlugQuery};
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use super::error::{ensure_identifier, map_sqlx};

/// Slug existence checks against any table in the pool.
#[derive(Clone)]
pub struct SqliteSlugLookup {
    pool: Arc<SqlitePool>,
    table: String,
    key_column: String,
    deleted_column: Option<String>,
}

impl SqliteSlugLookup {
    pub fn new(pool: Arc<SqlitePool>, table: &str) -> DomainResult<Self> {
        Ok(Self {
            pool,
            table: ensure_identifier(table)?.to_string(),
            key_column: "id".into(),
            deleted_column: None,
        })
    }

    pub fn for_posts(pool: Arc<SqlitePool>) -> Self {
        Self {
            pool,
            table: "posts".into(),
            key_column: "id".into(),
            deleted_column: Some("deleted_at".into()),
        }
    }

    pub fn with_key_column(mut self, column: &str) -> DomainResult<Self> {
        self.key_column = ensure_identifier(column)?.to_string();
        Ok(self)
    }

    /// Rows with a non-null `column` are treated as trashed.
    pub fn with_soft_deletes(mut self, column: &str) -> DomainResult<Self> {
        self.deleted_column = Some(ensure_identifier(column)?.to_string());
        Ok(self)
    }
}

#[async_trait]
impl SlugLookup for SqliteSlugLookup {
    async fn exists(&self, query: &SlugQuery<'_>) -> DomainResult<bool> {
        let field = ensure_identifier(query.field)?;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM ");
        builder
            .push(&self.table)
            .push(" WHERE ")
            .push(field)
            .push(" = ")
            .push_bind(query.value);

        if let Some(key) = query.exclude {
            builder
                .push(" AND ")
                .push(&self.key_column)
                .push(" <> ")
                .push_bind(i64::from(key));
        }

        if let (false, Some(column)) = (query.with_trashed, &self.deleted_column) {
            builder.push(" AND ").push(column).push(" IS NULL");
        }
        builder.push(")");

        let found: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(found != 0)
    }
}
