// src/infrastructure/repositories/sqlite_post.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{Post, PostRepository};
use crate::domain::slug::{RecordKey, SlugOverrides};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

use super::error::{ensure_identifier, map_sqlx};

const POST_COLUMNS: &str = "id, title, slug, deleted_at, slug_overrides";

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    deleted_at: Option<DateTime<Utc>>,
    slug_overrides: String,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        let overrides: SlugOverrides = serde_json::from_str(&row.slug_overrides).map_err(|err| {
            DomainError::Persistence(format!("invalid slug overrides for post {}: {err}", row.id))
        })?;
        Ok(Self {
            id: Some(RecordKey::new(row.id)?),
            title: row.title,
            slug: row.slug,
            deleted_at: row.deleted_at,
            overrides,
        })
    }
}

fn encode_overrides(overrides: &SlugOverrides) -> DomainResult<String> {
    serde_json::to_string(overrides)
        .map_err(|err| DomainError::Persistence(format!("cannot encode slug overrides: {err}")))
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn insert(&self, post: &Post) -> DomainResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, deleted_at, slug_overrides) VALUES (?, ?, ?, ?) RETURNING {POST_COLUMNS}"
        ))
        .bind(&post.title)
        .bind(&post.slug)
        .bind(post.deleted_at)
        .bind(encode_overrides(&post.overrides)?)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, post: &Post) -> DomainResult<Post> {
        let id = post
            .id
            .ok_or_else(|| DomainError::Validation("cannot update an unsaved post".into()))?;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "UPDATE posts SET title = ?, slug = ?, slug_overrides = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ? RETURNING {POST_COLUMNS}"
        ))
        .bind(&post.title)
        .bind(&post.slug)
        .bind(encode_overrides(&post.overrides)?)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn soft_delete(&self, id: RecordKey, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE posts SET deleted_at = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(at)
        .bind(i64::from(id))
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: RecordKey) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_field(&self, field: &str, value: &str) -> DomainResult<Option<Post>> {
        let column = ensure_identifier(field)?;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts WHERE "));
        builder
            .push(column)
            .push(" = ")
            .push_bind(value)
            .push(" AND deleted_at IS NULL");

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }
}
