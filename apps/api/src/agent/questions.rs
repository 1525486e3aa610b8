//! Question Generator — turns identified gaps into follow-up questions.
//!
//! Composition is delegated to the LLM; any transport or parse failure falls
//! back to deterministic template questions so the screening flow never
//! stalls on the external API.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::agent::analyzer::CandidateAnalysis;
use crate::agent::prompts::{QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::candidate::CandidateRecord;
use crate::models::job::JobProfile;

const QUESTION_TEMPERATURE: f32 = 0.3;
/// At most this many template questions are produced on fallback.
const MAX_TEMPLATE_QUESTIONS: usize = 3;
/// Skill and gap lists are truncated to this many items in prompts.
const PROMPT_LIST_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub question: String,
    pub gap_addressed: String,
    pub priority: String,
}

/// Generates follow-up questions for a candidate whose analysis left gaps.
/// Never fails: LLM errors degrade to `template_questions`.
pub async fn generate_questions(
    llm: &LlmClient,
    job: &JobProfile,
    candidate: &CandidateRecord,
    analysis: &CandidateAnalysis,
) -> Vec<FollowUpQuestion> {
    let prompt = build_question_prompt(job, candidate, analysis);

    match llm
        .call_json::<Vec<FollowUpQuestion>>(&prompt, QUESTION_SYSTEM, QUESTION_TEMPERATURE)
        .await
    {
        Ok(questions) => questions,
        Err(e) => {
            warn!("Question generation failed, falling back to templates: {e}");
            template_questions(&analysis.critical_gaps)
        }
    }
}

fn build_question_prompt(
    job: &JobProfile,
    candidate: &CandidateRecord,
    analysis: &CandidateAnalysis,
) -> String {
    let required_skills: Vec<&str> = job
        .required_skills
        .iter()
        .take(PROMPT_LIST_LIMIT)
        .map(String::as_str)
        .collect();
    let candidate_skills: Vec<&str> = candidate
        .all_skills()
        .into_iter()
        .take(PROMPT_LIST_LIMIT)
        .collect();

    QUESTION_PROMPT_TEMPLATE
        .replace("{job_title}", &job.title)
        .replace("{required_skills}", &required_skills.join(", "))
        .replace("{min_experience}", &job.min_experience.to_string())
        .replace("{candidate_skills}", &candidate_skills.join(", "))
        .replace(
            "{experience_count}",
            &candidate.experience.len().to_string(),
        )
        .replace("{project_count}", &candidate.projects.len().to_string())
        .replace("{critical_gaps}", &analysis.critical_gaps.join(", "))
        .replace("{missing_info}", &analysis.missing_info.join(", "))
        .replace(
            "{confidence}",
            &format!("{:.2}", analysis.confidence_score),
        )
}

/// Deterministic fallback: one canned question per critical gap, capped at
/// three, all high priority.
pub fn template_questions(critical_gaps: &[String]) -> Vec<FollowUpQuestion> {
    critical_gaps
        .iter()
        .take(MAX_TEMPLATE_QUESTIONS)
        .map(|gap| match gap.as_str() {
            "work_experience" => FollowUpQuestion {
                question: "Could you provide details about your work experience? Include \
                           company names, roles, duration, and key responsibilities."
                    .to_string(),
                gap_addressed: "work_experience".to_string(),
                priority: "high".to_string(),
            },
            "projects" => FollowUpQuestion {
                question: "Could you describe 1-2 relevant projects you've worked on? Include \
                           technologies used and your specific contributions."
                    .to_string(),
                gap_addressed: "projects".to_string(),
                priority: "high".to_string(),
            },
            skill => FollowUpQuestion {
                question: format!(
                    "The job requires {skill}. Do you have experience with {skill}? \
                     If yes, please describe one project where you used it."
                ),
                gap_addressed: skill.to_string(),
                priority: "high".to_string(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::analyzer::{AgentDecision, ConfidenceLevel};

    fn analysis(critical_gaps: &[&str], missing_info: &[&str]) -> CandidateAnalysis {
        CandidateAnalysis {
            candidate_name: "Test".to_string(),
            candidate_email: "test@example.com".to_string(),
            base_score: 55.0,
            confidence_score: 0.55,
            confidence_level: ConfidenceLevel::Medium,
            decision: AgentDecision::AskQuestions,
            reasoning: vec![],
            missing_info: missing_info.iter().map(|s| s.to_string()).collect(),
            critical_gaps: critical_gaps.iter().map(|s| s.to_string()).collect(),
            matched_skills: vec![],
            missing_skills: vec![],
        }
    }

    #[test]
    fn test_template_questions_capped_at_three() {
        let gaps: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let questions = template_questions(&gaps);
        assert_eq!(questions.len(), 3);
    }

    #[test]
    fn test_template_questions_keyed_by_gap_type() {
        let gaps = vec![
            "work_experience".to_string(),
            "projects".to_string(),
            "FastAPI".to_string(),
        ];
        let questions = template_questions(&gaps);

        assert!(questions[0].question.contains("work experience"));
        assert_eq!(questions[0].gap_addressed, "work_experience");

        assert!(questions[1].question.contains("projects"));
        assert_eq!(questions[1].gap_addressed, "projects");

        assert!(questions[2].question.contains("FastAPI"));
        assert_eq!(questions[2].gap_addressed, "FastAPI");
    }

    #[test]
    fn test_template_questions_all_high_priority() {
        let gaps = vec!["Docker".to_string(), "work_experience".to_string()];
        for question in template_questions(&gaps) {
            assert_eq!(question.priority, "high");
        }
    }

    #[test]
    fn test_template_questions_empty_for_no_gaps() {
        assert!(template_questions(&[]).is_empty());
    }

    #[test]
    fn test_question_prompt_fills_placeholders() {
        let job = JobProfile {
            title: "Backend Developer".to_string(),
            required_skills: vec!["Python".to_string(), "FastAPI".to_string()],
            must_have_skills: vec![],
            preferred_skills: vec![],
            min_experience: 3,
        };
        let candidate = CandidateRecord::default();
        let analysis = analysis(&["FastAPI"], &["No evidence of FastAPI"]);

        let prompt = build_question_prompt(&job, &candidate, &analysis);
        assert!(prompt.contains("Backend Developer"));
        assert!(prompt.contains("Python, FastAPI"));
        assert!(prompt.contains("3 years"));
        assert!(prompt.contains("0.55"));
        assert!(!prompt.contains("{job_title}"));
        assert!(!prompt.contains("{confidence}"));
    }

    #[test]
    fn test_question_prompt_truncates_skill_lists() {
        let many: Vec<String> = (0..20).map(|i| format!("Skill{i}")).collect();
        let job = JobProfile {
            title: "Role".to_string(),
            required_skills: many,
            must_have_skills: vec![],
            preferred_skills: vec![],
            min_experience: 0,
        };
        let prompt =
            build_question_prompt(&job, &CandidateRecord::default(), &analysis(&[], &[]));
        assert!(prompt.contains("Skill9"));
        assert!(!prompt.contains("Skill10,"));
        assert!(!prompt.contains("Skill19"));
    }

    #[test]
    fn test_follow_up_question_deserializes() {
        let json = r#"[
            {"question": "Tell me about Docker.", "gap_addressed": "Docker", "priority": "high"}
        ]"#;
        let questions: Vec<FollowUpQuestion> = serde_json::from_str(json).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].gap_addressed, "Docker");
    }
}
