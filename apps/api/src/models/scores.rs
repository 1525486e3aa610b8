use serde::{Deserialize, Serialize};

/// Sub-scores produced by the upstream job/resume matcher. The analyzer
/// treats this as an immutable snapshot; all values are in [0, 100].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchScores {
    pub overall_score: f64,
    #[serde(default)]
    pub skills_score: f64,
    #[serde(default)]
    pub experience_score: f64,
    #[serde(default)]
    pub education_score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
}
