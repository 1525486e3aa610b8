//! Resume upload and listing handlers.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::models::ranking::ResumeRow;
use crate::parser::parse_resume;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub id: Uuid,
    pub filename: String,
    pub candidate: CandidateRecord,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeRow>,
}

/// POST /api/v1/resumes
///
/// Multipart upload: the `file` field is parsed into a CandidateRecord and
/// persisted. Parsing never fails — unreadable files yield an empty record
/// tagged `parsing_method: "empty"`.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let candidate = parse_resume(&state.llm, &data, &filename).await;
        let parsed_data =
            serde_json::to_value(&candidate).map_err(|e| AppError::Internal(e.into()))?;

        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO resumes (id, filename, parsed_data, upload_date)
             VALUES ($1, $2, $3, NOW())",
        )
        .bind(id)
        .bind(&filename)
        .bind(parsed_data)
        .execute(&state.db)
        .await?;

        return Ok(Json(UploadResumeResponse {
            id,
            filename,
            candidate,
        }));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes =
        sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes ORDER BY upload_date DESC")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(ResumeListResponse { resumes }))
}
