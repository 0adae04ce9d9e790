// src/articles/handlers/admin.rs

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::articles::db;
use crate::articles::models::*;
use crate::articles::slug::generate_slug;
use crate::articles::validators::ArticleValidator;
use crate::auth::AdminUser;
use crate::common::{now_timestamp, ApiError, AppState, Validator};

/// GET /api/admin/articles - List every article, drafts included
pub async fn admin_list_articles(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    AdminUser(admin): AdminUser,
) -> Result<Json<Vec<Article>>, ApiError> {
    let state = state_lock.read().await.clone();

    let articles = db::get_all_articles(&state.db).await?;

    debug!(
        count = articles.len(),
        admin_id = admin.id,
        "Listed all articles for admin"
    );

    Ok(Json(articles))
}

/// POST /api/admin/articles - Create a new article
pub async fn admin_create_article(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    AdminUser(admin): AdminUser,
    Json(body): Json<CreateArticle>,
) -> Result<Json<CreatedArticle>, ApiError> {
    let validation = ArticleValidator.validate(&body);
    if !validation.is_valid {
        warn!(errors = ?validation.errors, "Article creation validation failed");
        return Err(ApiError::from(validation));
    }

    let state = state_lock.read().await.clone();

    let slug = generate_slug(&body.title);
    let published_at = if body.status == "published" {
        Some(now_timestamp())
    } else {
        None
    };

    let id = db::create_article(
        &state.db,
        NewArticle {
            title: body.title,
            slug: slug.clone(),
            content: body.content,
            excerpt: body.excerpt,
            category: body.category,
            image_url: body.image_url,
            author_id: admin.id,
            author_name: Some(admin.name.unwrap_or_else(|| "Anônimo".to_string())),
            status: body.status,
            published_at,
        },
    )
    .await?;

    info!(article_id = id, slug = %slug, admin_id = admin.id, "Article created");

    Ok(Json(CreatedArticle { id, slug }))
}

/// PUT /api/admin/articles/:id - Update an article
///
/// A title change regenerates the slug. The first transition into
/// `published` stamps `published_at`; later updates leave it alone.
pub async fn admin_update_article(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i64>,
    Json(body): Json<UpdateArticle>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let validation = ArticleValidator.validate(&body);
    if !validation.is_valid {
        warn!(errors = ?validation.errors, article_id = id, "Article update validation failed");
        return Err(ApiError::from(validation));
    }

    let state = state_lock.read().await.clone();

    let slug = body.title.as_deref().map(generate_slug);

    let published_at = if body.status.as_deref() == Some("published") {
        match db::get_article_by_id(&state.db, id).await? {
            Some(article) if article.published_at.is_none() => Some(now_timestamp()),
            _ => None,
        }
    } else {
        None
    };

    db::update_article(
        &state.db,
        id,
        ArticleChanges {
            title: body.title,
            slug,
            content: body.content,
            excerpt: body.excerpt,
            category: body.category,
            image_url: body.image_url,
            status: body.status,
            published_at,
        },
    )
    .await?;

    info!(article_id = id, admin_id = admin.id, "Article updated");

    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /api/admin/articles/:id - Delete an article permanently
pub async fn admin_delete_article(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    AdminUser(admin): AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    db::delete_article(&state.db, id).await?;

    info!(article_id = id, admin_id = admin.id, "Article deleted");

    Ok(Json(serde_json::json!({ "success": true })))
}
