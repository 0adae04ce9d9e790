// Application state shared across all modules

use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::services::GroqService;

/// Application state containing the database pool, outbound HTTP client,
/// and configuration resolved at startup
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub http: Client,
    pub jwt_secret: String,
    pub google_client_id: Option<String>,
    /// open_id that is automatically granted the admin role on upsert
    pub owner_open_id: Option<String>,
    pub groq: Arc<GroqService>,
}
