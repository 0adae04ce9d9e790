// src/articles/routes.rs

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{self, ai};

/// Create the articles router with public and admin routes
pub fn articles_routes() -> Router {
    Router::new()
        // Public routes
        .route("/api/articles", get(handlers::list_published_articles))
        .route("/api/articles/:slug", get(handlers::get_article_by_slug))
        // Admin article management routes
        .route(
            "/api/admin/articles",
            get(handlers::admin_list_articles).post(handlers::admin_create_article),
        )
        .route(
            "/api/admin/articles/:id",
            put(handlers::admin_update_article).delete(handlers::admin_delete_article),
        )
        // AI-assisted drafting
        .route(
            "/api/admin/articles/ai/generate-content",
            post(ai::generate_article_content),
        )
}
