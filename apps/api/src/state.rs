use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::LlmClient;
use crate::notify::Notifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Email delivery seam — `SmtpNotifier` in production, stubbed in tests.
    pub notifier: Arc<dyn Notifier>,
}
