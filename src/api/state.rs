use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::AppConfig;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Secret used to sign and verify session tokens
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt_secret
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
