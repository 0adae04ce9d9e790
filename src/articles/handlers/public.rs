// src/articles/handlers/public.rs

use axum::{
    extract::{Extension, Path, Query},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::articles::db;
use crate::articles::models::*;
use crate::common::{ApiError, AppState};

/// GET /api/articles - List published articles, newest first
pub async fn list_published_articles(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(params): Query<ArticleListQuery>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let state = state_lock.read().await.clone();

    let limit = params.limit.unwrap_or(20).clamp(1, 100);

    let articles = db::get_published_articles(&state.db, limit).await?;

    debug!(count = articles.len(), limit = limit, "Listed published articles");

    Ok(Json(articles))
}

/// GET /api/articles/:slug - Fetch one article by slug
///
/// A hit counts as a read: the stored view counter goes up by one. The
/// response carries the row as fetched, so the returned `views` value is the
/// pre-increment count. A miss is JSON null, not an error.
pub async fn get_article_by_slug(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(slug): Path<String>,
) -> Result<Json<Option<Article>>, ApiError> {
    let state = state_lock.read().await.clone();

    let article = db::get_article_by_slug(&state.db, &slug).await?;

    match &article {
        Some(a) => {
            db::increment_article_views(&state.db, a.id).await?;
            debug!(slug = %slug, article_id = a.id, "Article served by slug");
        }
        None => {
            warn!(slug = %slug, "Article not found by slug");
        }
    }

    Ok(Json(article))
}
