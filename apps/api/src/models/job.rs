use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Structured requirements for an open position.
/// The canonical copy lives in the `job_data` JSONB column of `job_postings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub must_have_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub min_experience: u32,
}

impl JobProfile {
    /// Skills whose absence blocks auto-shortlisting: the union of required
    /// and must-have skills, deduplicated case-sensitively, first-insertion
    /// order preserved.
    pub fn critical_skills(&self) -> Vec<String> {
        let mut critical: Vec<String> = Vec::new();
        for skill in self.required_skills.iter().chain(&self.must_have_skills) {
            if !critical.contains(skill) {
                critical.push(skill.clone());
            }
        }
        critical
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub job_title: String,
    pub job_description: String,
    pub job_data: Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
