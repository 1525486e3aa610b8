use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub filename: String,
    pub parsed_data: Value,
    pub upload_date: DateTime<Utc>,
}

/// One screening outcome for a candidate against a job posting.
/// Re-screening the same candidate replaces the previous row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RankingRow {
    pub id: Uuid,
    pub job_posting_id: Uuid,
    pub candidate_name: String,
    pub candidate_email: String,
    pub overall_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub confidence_score: f64,
    pub decision: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: Value,
    pub created_at: DateTime<Utc>,
}
