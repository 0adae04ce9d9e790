// src/articles/handlers/ai.rs

use axum::{extract::Extension, response::Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::articles::models::GenerateContentRequest;
use crate::articles::validators::ContentRequestValidator;
use crate::auth::AdminUser;
use crate::common::{ApiError, AppState, Validator};
use crate::services::groq::{GenerateArticleParams, GeneratedArticle};

/// POST /api/admin/articles/ai/generate-content - Draft article text with AI
pub async fn generate_article_content(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    AdminUser(admin): AdminUser,
    Json(body): Json<GenerateContentRequest>,
) -> Result<Json<GeneratedArticle>, ApiError> {
    let validation = ContentRequestValidator.validate(&body);
    if !validation.is_valid {
        warn!(errors = ?validation.errors, "Content generation validation failed");
        return Err(ApiError::from(validation));
    }

    let state = state_lock.read().await.clone();

    let generated = state
        .groq
        .generate_article_content(&GenerateArticleParams {
            title: body.title.clone(),
            category: body.category.clone(),
            keywords: body.keywords.clone(),
        })
        .await?;

    info!(
        title = %body.title,
        category = %body.category,
        admin_id = admin.id,
        "Article content generated"
    );

    Ok(Json(generated))
}
