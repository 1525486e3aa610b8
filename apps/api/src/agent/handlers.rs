//! Axum route handlers for the Screening API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::agent::analyzer::{AgentDecision, CandidateAnalysis, CandidateAnalyzer};
use crate::agent::answers::{evaluate_answer, AnswerEvaluation};
use crate::agent::questions::{generate_questions, FollowUpQuestion};
use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::models::job::{JobProfile, JobRow};
use crate::models::scores::MatchScores;
use crate::notify::emails;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub job_id: Uuid,
    pub candidate: CandidateRecord,
    pub match_scores: MatchScores,
}

#[derive(Debug, Serialize)]
pub struct ScreenResponse {
    pub analysis: CandidateAnalysis,
    /// Populated only when the decision is `ask_questions`.
    pub questions: Vec<FollowUpQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub job_id: Uuid,
    pub candidate: CandidateRecord,
    pub analysis: CandidateAnalysis,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<FollowUpQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub job_id: Uuid,
    pub question: String,
    pub answer: String,
    pub gap_addressed: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateAnswerResponse {
    pub evaluation: AnswerEvaluation,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/screen
///
/// The full screening flow: analyze the candidate against the job, persist
/// the ranking, generate follow-up questions when the agent asks for them,
/// and notify the candidate. Analysis itself is pure; only the plumbing
/// around it touches the outside world.
pub async fn handle_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<ScreenResponse>, AppError> {
    let (_, profile) = load_job_profile(&state.db, request.job_id).await?;

    let analyzer = CandidateAnalyzer::new(&profile);
    let analysis = analyzer.analyze(&request.candidate, &request.match_scores);

    save_ranking(&state.db, request.job_id, &analysis, &request.match_scores).await?;

    let questions = if analysis.decision == AgentDecision::AskQuestions {
        generate_questions(&state.llm, &profile, &request.candidate, &analysis).await
    } else {
        Vec::new()
    };

    // Email failures are logged and absorbed; the screening result stands.
    if !analysis.candidate_email.is_empty() {
        let content = match analysis.decision {
            AgentDecision::AutoShortlist => {
                emails::shortlist_email(&analysis.candidate_name, &profile.title)
            }
            AgentDecision::AskQuestions => {
                emails::questions_email(&analysis.candidate_name, &profile.title, &questions)
            }
            AgentDecision::AutoReject => {
                emails::rejection_email(&analysis.candidate_name, &profile.title)
            }
        };
        if let Err(e) = state
            .notifier
            .send(
                &analysis.candidate_email,
                &content.subject,
                &content.html,
                &content.text,
            )
            .await
        {
            warn!(
                "Failed to send {} notification to {}: {e}",
                analysis.decision.as_str(),
                analysis.candidate_email
            );
        }
    }

    Ok(Json(ScreenResponse {
        analysis,
        questions,
    }))
}

/// POST /api/v1/questions
///
/// Generates follow-up questions for an existing analysis without
/// re-running the screening flow.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let (_, profile) = load_job_profile(&state.db, request.job_id).await?;

    let questions =
        generate_questions(&state.llm, &profile, &request.candidate, &request.analysis).await;

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/v1/answers/evaluate
///
/// Scores a candidate's answer to a follow-up question.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<EvaluateAnswerRequest>,
) -> Result<Json<EvaluateAnswerResponse>, AppError> {
    if request.answer.trim().is_empty() {
        return Err(AppError::Validation("answer cannot be empty".to_string()));
    }

    let (_, profile) = load_job_profile(&state.db, request.job_id).await?;

    let evaluation = evaluate_answer(
        &state.llm,
        &request.question,
        &request.answer,
        &request.gap_addressed,
        &profile,
    )
    .await;

    Ok(Json(EvaluateAnswerResponse { evaluation }))
}

// ────────────────────────────────────────────────────────────────────────────
// Shared plumbing
// ────────────────────────────────────────────────────────────────────────────

/// Loads a job posting and deserializes its stored JobProfile.
pub async fn load_job_profile(
    db: &PgPool,
    job_id: Uuid,
) -> Result<(JobRow, JobProfile), AppError> {
    let row = sqlx::query_as::<_, JobRow>("SELECT * FROM job_postings WHERE id = $1")
        .bind(job_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let profile: JobProfile = serde_json::from_value(row.job_data.clone())
        .map_err(|e| AppError::Validation(format!("Job {job_id} has malformed job_data: {e}")))?;

    Ok((row, profile))
}

/// Replace-then-insert: re-screening a candidate overwrites their previous
/// ranking for the job.
async fn save_ranking(
    db: &PgPool,
    job_id: Uuid,
    analysis: &CandidateAnalysis,
    scores: &MatchScores,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM rankings WHERE job_posting_id = $1 AND candidate_email = $2")
        .bind(job_id)
        .bind(&analysis.candidate_email)
        .execute(db)
        .await?;

    sqlx::query(
        "INSERT INTO rankings (
            id, job_posting_id, candidate_name, candidate_email,
            overall_score, skills_score, experience_score, education_score,
            confidence_score, decision, matched_skills, missing_skills,
            explanation, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, NOW())",
    )
    .bind(Uuid::new_v4())
    .bind(job_id)
    .bind(&analysis.candidate_name)
    .bind(&analysis.candidate_email)
    .bind(analysis.base_score)
    .bind(scores.skills_score)
    .bind(scores.experience_score)
    .bind(scores.education_score)
    .bind(analysis.confidence_score)
    .bind(analysis.decision.as_str())
    .bind(&analysis.matched_skills)
    .bind(&analysis.missing_skills)
    .bind(json!({
        "reasoning": analysis.reasoning,
        "missing_info": analysis.missing_info,
        "critical_gaps": analysis.critical_gaps,
        "confidence_level": analysis.confidence_level,
    }))
    .execute(db)
    .await?;

    Ok(())
}
