//! Answer Evaluator — scores a candidate's free-text answer to a follow-up
//! question. Judgment is delegated entirely to the LLM; on any failure the
//! evaluator returns a fixed neutral result instead of erroring.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::agent::prompts::{EVALUATION_PROMPT_TEMPLATE, EVALUATION_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::job::JobProfile;

const EVALUATION_TEMPERATURE: f32 = 0.2;

/// Bounds on how much a single answer may move the confidence score.
pub const MIN_CONFIDENCE_BOOST: f64 = -0.2;
pub const MAX_CONFIDENCE_BOOST: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEvaluation {
    pub satisfactory: bool,
    pub confidence_boost: f64,
    pub reasoning: String,
    pub follow_up_needed: bool,
}

impl AnswerEvaluation {
    /// The fallback when the LLM call or its parsing fails: unsatisfied,
    /// no confidence movement, another follow-up requested.
    pub fn neutral() -> Self {
        Self {
            satisfactory: false,
            confidence_boost: 0.0,
            reasoning: "Could not evaluate answer properly".to_string(),
            follow_up_needed: true,
        }
    }

    /// Clamps the boost into [-0.2, 0.3] regardless of what the model said.
    fn sanitized(mut self) -> Self {
        self.confidence_boost = self
            .confidence_boost
            .clamp(MIN_CONFIDENCE_BOOST, MAX_CONFIDENCE_BOOST);
        self
    }
}

/// Evaluates how well an answer addresses the gap it was asked about.
/// Never fails: LLM errors degrade to `AnswerEvaluation::neutral`.
pub async fn evaluate_answer(
    llm: &LlmClient,
    question: &str,
    answer: &str,
    gap_addressed: &str,
    job: &JobProfile,
) -> AnswerEvaluation {
    let job_json = serde_json::to_string_pretty(job).unwrap_or_default();
    let prompt = EVALUATION_PROMPT_TEMPLATE
        .replace("{question}", question)
        .replace("{gap_addressed}", gap_addressed)
        .replace("{job_json}", &job_json)
        .replace("{answer}", answer);

    match llm
        .call_json::<AnswerEvaluation>(&prompt, EVALUATION_SYSTEM, EVALUATION_TEMPERATURE)
        .await
    {
        Ok(evaluation) => evaluation.sanitized(),
        Err(e) => {
            warn!("Answer evaluation failed, returning neutral result: {e}");
            AnswerEvaluation::neutral()
        }
    }
}
