//! Summary counts across the screening pipeline.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsSummary {
    pub total_resumes: i64,
    pub total_jobs: i64,
    pub total_rankings: i64,
    pub avg_score: f64,
}

/// GET /api/v1/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let total_resumes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resumes")
        .fetch_one(&state.db)
        .await?;
    let total_jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
        .fetch_one(&state.db)
        .await?;
    let total_rankings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rankings")
        .fetch_one(&state.db)
        .await?;
    let avg_score: Option<f64> = sqlx::query_scalar("SELECT AVG(overall_score) FROM rankings")
        .fetch_one(&state.db)
        .await?;

    Ok(Json(AnalyticsSummary {
        total_resumes,
        total_jobs,
        total_rankings,
        avg_score: (avg_score.unwrap_or(0.0) * 100.0).round() / 100.0,
    }))
}
