pub mod analytics;
pub mod health;
pub mod jobs;
pub mod resumes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::agent::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route(
            "/api/v1/jobs",
            post(jobs::handle_create_job).get(jobs::handle_list_jobs),
        )
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route("/api/v1/jobs/:id/rankings", get(jobs::handle_job_rankings))
        // Resumes
        .route(
            "/api/v1/resumes",
            post(resumes::handle_upload_resume).get(resumes::handle_list_resumes),
        )
        // Screening agent
        .route("/api/v1/screen", post(handlers::handle_screen))
        .route(
            "/api/v1/questions",
            post(handlers::handle_generate_questions),
        )
        .route(
            "/api/v1/answers/evaluate",
            post(handlers::handle_evaluate_answer),
        )
        // Analytics
        .route("/api/v1/analytics", get(analytics::handle_analytics))
        .with_state(state)
}
