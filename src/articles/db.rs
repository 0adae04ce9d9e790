//! Article persistence: one function per operation against the shared pool.

use sqlx::SqlitePool;

use super::models::{Article, ArticleChanges, NewArticle};
use crate::common::ApiError;

const ARTICLE_COLUMNS: &str = r#"
    id, title, slug, content, excerpt, category, image_url,
    author_id, author_name, status, featured, views,
    created_at, updated_at, published_at
"#;

pub async fn create_article(pool: &SqlitePool, article: NewArticle) -> Result<i64, ApiError> {
    let result = sqlx::query(
        r#"
        INSERT INTO articles (
            title, slug, content, excerpt, category, image_url,
            author_id, author_name, status, published_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&article.title)
    .bind(&article.slug)
    .bind(&article.content)
    .bind(article.excerpt.as_deref())
    .bind(&article.category)
    .bind(article.image_url.as_deref())
    .bind(article.author_id)
    .bind(article.author_name.as_deref())
    .bind(&article.status)
    .bind(article.published_at.as_deref())
    .execute(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(result.last_insert_rowid())
}

/// Apply a partial update. Absent fields keep their stored values; the
/// caller decides whether `slug` and `published_at` are part of the change
/// set (title-driven regeneration, first publish).
pub async fn update_article(
    pool: &SqlitePool,
    id: i64,
    changes: ArticleChanges,
) -> Result<(), ApiError> {
    sqlx::query(
        r#"
        UPDATE articles SET
            title = COALESCE(?, title),
            slug = COALESCE(?, slug),
            content = COALESCE(?, content),
            excerpt = COALESCE(?, excerpt),
            category = COALESCE(?, category),
            image_url = COALESCE(?, image_url),
            status = COALESCE(?, status),
            published_at = COALESCE(?, published_at),
            updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(changes.title.as_deref())
    .bind(changes.slug.as_deref())
    .bind(changes.content.as_deref())
    .bind(changes.excerpt.as_deref())
    .bind(changes.category.as_deref())
    .bind(changes.image_url.as_deref())
    .bind(changes.status.as_deref())
    .bind(changes.published_at.as_deref())
    .bind(id)
    .execute(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    Ok(())
}

pub async fn get_article_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Article>, ApiError> {
    sqlx::query_as::<_, Article>(&format!(
        "SELECT {} FROM articles WHERE id = ?",
        ARTICLE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(ApiError::DatabaseError)
}

pub async fn get_article_by_slug(
    pool: &SqlitePool,
    slug: &str,
) -> Result<Option<Article>, ApiError> {
    sqlx::query_as::<_, Article>(&format!(
        "SELECT {} FROM articles WHERE slug = ?",
        ARTICLE_COLUMNS
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await
    .map_err(ApiError::DatabaseError)
}

/// Published articles, newest publication first, capped at `limit`.
pub async fn get_published_articles(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<Article>, ApiError> {
    sqlx::query_as::<_, Article>(&format!(
        r#"
        SELECT {} FROM articles
        WHERE status = 'published'
        ORDER BY published_at DESC
        LIMIT ?
        "#,
        ARTICLE_COLUMNS
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(ApiError::DatabaseError)
}

/// Every article regardless of status, newest first. Admin listing.
pub async fn get_all_articles(pool: &SqlitePool) -> Result<Vec<Article>, ApiError> {
    sqlx::query_as::<_, Article>(&format!(
        "SELECT {} FROM articles ORDER BY created_at DESC, id DESC",
        ARTICLE_COLUMNS
    ))
    .fetch_all(pool)
    .await
    .map_err(ApiError::DatabaseError)
}

pub async fn delete_article(pool: &SqlitePool, id: i64) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM articles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(())
}

/// Bump the view counter in a single statement so concurrent readers
/// cannot lose increments.
pub async fn increment_article_views(pool: &SqlitePool, id: i64) -> Result<(), ApiError> {
    sqlx::query("UPDATE articles SET views = views + 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(ApiError::DatabaseError)?;

    Ok(())
}
