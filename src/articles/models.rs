// src/articles/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Article Models
// ============================================================================

#[derive(FromRow, Serialize, Deserialize, Debug, Clone)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    pub author_id: i64,
    pub author_name: Option<String>,
    pub status: String,
    pub featured: i64, // 0 or 1 in SQLite
    pub views: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub published_at: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(default = "default_article_status")]
    pub status: String,
}

fn default_article_status() -> String {
    "draft".to_string()
}

#[derive(Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
}

/// Response for a freshly created article
#[derive(Serialize, Debug)]
pub struct CreatedArticle {
    pub id: i64,
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct ArticleListQuery {
    pub limit: Option<i64>,
}

/// Request for AI-assisted article drafting
#[derive(Debug, Deserialize)]
pub struct GenerateContentRequest {
    pub title: String,
    pub category: String,
    pub keywords: Option<String>,
}

// ============================================================================
// Persistence-layer inputs
// ============================================================================

/// Full column set for an article insert; the handler has already derived
/// the slug and stamped the author.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub category: String,
    pub image_url: Option<String>,
    pub author_id: i64,
    pub author_name: Option<String>,
    pub status: String,
    pub published_at: Option<String>,
}

/// Partial update set; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<String>,
}
