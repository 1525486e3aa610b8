//! Job posting handlers: create, list, fetch, and per-job rankings.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::handlers::load_job_profile;
use crate::errors::AppError;
use crate::models::job::{JobProfile, JobRow};
use crate::models::ranking::RankingRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub must_have_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_experience: u32,
}

#[derive(Debug, Serialize)]
pub struct CreateJobResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRow>,
}

#[derive(Debug, Serialize)]
pub struct RankingsResponse {
    pub job_id: Uuid,
    pub rankings: Vec<RankingRow>,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<CreateJobResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let profile = JobProfile {
        title: request.title.clone(),
        required_skills: request.required_skills,
        must_have_skills: request.must_have_skills,
        preferred_skills: request.preferred_skills,
        min_experience: request.min_experience,
    };
    let job_data = serde_json::to_value(&profile)
        .map_err(|e| AppError::Internal(e.into()))?;

    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO job_postings (id, job_title, job_description, job_data, status, created_at)
         VALUES ($1, $2, $3, $4, 'active', NOW())",
    )
    .bind(id)
    .bind(&request.title)
    .bind(&request.description)
    .bind(job_data)
    .execute(&state.db)
    .await?;

    Ok(Json(CreateJobResponse { id }))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs =
        sqlx::query_as::<_, JobRow>("SELECT * FROM job_postings ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(JobListResponse { jobs }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let (row, _) = load_job_profile(&state.db, job_id).await?;
    Ok(Json(row))
}

/// GET /api/v1/jobs/:id/rankings
///
/// Rankings for a job, best overall score first.
pub async fn handle_job_rankings(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<RankingsResponse>, AppError> {
    // 404 on unknown jobs rather than an empty list
    load_job_profile(&state.db, job_id).await?;

    let rankings = sqlx::query_as::<_, RankingRow>(
        "SELECT * FROM rankings WHERE job_posting_id = $1 ORDER BY overall_score DESC",
    )
    .bind(job_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(RankingsResponse { job_id, rankings }))
}
