//! Candidate Analyzer — the decision-making core of the screening agent.
//!
//! Maps (JobProfile, CandidateRecord, MatchScores) to a CandidateAnalysis:
//! a confidence score, the information gaps that drove it, and one of three
//! actions. Pure and deterministic — no I/O, no randomness, no error paths.
//! Missing candidate fields degrade to empty defaults instead of failing.

use serde::{Deserialize, Serialize};

use crate::models::candidate::CandidateRecord;
use crate::models::job::JobProfile;
use crate::models::scores::MatchScores;

/// Confidence at or above this maps to HIGH.
const CONFIDENCE_THRESHOLD_HIGH: f64 = 0.75;
/// Confidence at or above this (but below HIGH) maps to MEDIUM.
const CONFIDENCE_THRESHOLD_LOW: f64 = 0.40;

/// Average experience-description length treated as "fully detailed".
const DETAILED_DESCRIPTION_CHARS: f64 = 200.0;
/// Experience descriptions shorter than this count as vague.
const VAGUE_DESCRIPTION_CHARS: usize = 50;

/// Discrete confidence bands. Thresholds are fixed constants of the
/// analyzer, not configurable per job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Lower-inclusive banding: 0.75 is HIGH, 0.40 is MEDIUM.
    pub fn from_score(confidence: f64) -> Self {
        if confidence >= CONFIDENCE_THRESHOLD_HIGH {
            ConfidenceLevel::High
        } else if confidence >= CONFIDENCE_THRESHOLD_LOW {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "HIGH",
            ConfidenceLevel::Medium => "MEDIUM",
            ConfidenceLevel::Low => "LOW",
        }
    }
}

/// The action the agent takes for a candidate. Each analysis computes one
/// decision independently; there are no transitions between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentDecision {
    AutoShortlist,
    AskQuestions,
    AutoReject,
}

impl AgentDecision {
    /// Stable tag used in the database and in log lines; matches the serde
    /// representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentDecision::AutoShortlist => "auto_shortlist",
            AgentDecision::AskQuestions => "ask_questions",
            AgentDecision::AutoReject => "auto_reject",
        }
    }
}

/// Complete analysis result for one candidate. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateAnalysis {
    pub candidate_name: String,
    pub candidate_email: String,
    pub base_score: f64,
    pub confidence_score: f64,
    pub confidence_level: ConfidenceLevel,
    pub decision: AgentDecision,
    pub reasoning: Vec<String>,
    pub missing_info: Vec<String>,
    pub critical_gaps: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Analyzer for one job posting. Holds the job's critical-skill set so
/// repeated candidate analyses don't recompute it.
pub struct CandidateAnalyzer {
    critical_skills: Vec<String>,
    min_experience: u32,
}

impl CandidateAnalyzer {
    pub fn new(job: &JobProfile) -> Self {
        Self {
            critical_skills: job.critical_skills(),
            min_experience: job.min_experience,
        }
    }

    /// Analyzes a candidate and decides what to do. Deterministic for
    /// identical inputs; absorbs missing fields, raises nothing.
    pub fn analyze(&self, candidate: &CandidateRecord, scores: &MatchScores) -> CandidateAnalysis {
        let confidence_score = self.confidence(candidate, scores);
        let (missing_info, critical_gaps) = self.identify_gaps(candidate, &scores.matched_skills);
        let confidence_level = ConfidenceLevel::from_score(confidence_score);
        let decision = Self::decide(confidence_level, &critical_gaps, scores.overall_score);
        let reasoning = build_reasoning(
            scores.overall_score,
            confidence_score,
            confidence_level,
            &missing_info,
            &critical_gaps,
            decision,
        );

        CandidateAnalysis {
            candidate_name: candidate.display_name().to_string(),
            candidate_email: candidate.email.clone(),
            base_score: scores.overall_score,
            confidence_score,
            confidence_level,
            decision,
            reasoning,
            missing_info,
            critical_gaps,
            matched_skills: scores.matched_skills.clone(),
            missing_skills: scores.missing_skills.clone(),
        }
    }

    /// Confidence is the agent's certainty in its own recommendation, not
    /// the match score. Four factors, unweighted arithmetic mean, upper
    /// clamp only.
    fn confidence(&self, candidate: &CandidateRecord, scores: &MatchScores) -> f64 {
        let mut factors: Vec<f64> = Vec::with_capacity(4);

        // Factor 1: information completeness across experience/skills/education
        let sections = [
            !candidate.experience.is_empty(),
            candidate.has_skills(),
            !candidate.education.is_empty(),
        ];
        let present = sections.iter().filter(|s| **s).count();
        factors.push(present as f64 / sections.len() as f64);

        // Factor 2: critical-skill coverage, weighted 1.5. The weight is
        // deliberately not clamped before averaging; full coverage pushes
        // this factor to 1.5 and skews the mean upward. Known scoring quirk,
        // pending product-owner confirmation before changing.
        if self.critical_skills.is_empty() {
            factors.push(1.0);
        } else {
            let matched_critical = scores
                .matched_skills
                .iter()
                .filter(|skill| {
                    let skill = skill.to_lowercase();
                    self.critical_skills
                        .iter()
                        .any(|critical| skill.contains(&critical.to_lowercase()))
                })
                .count();
            let coverage = matched_critical as f64 / self.critical_skills.len() as f64;
            factors.push(coverage * 1.5);
        }

        // Factor 3: experience detail
        if candidate.experience.is_empty() {
            factors.push(0.3);
        } else {
            let total_chars: usize = candidate
                .experience
                .iter()
                .map(|exp| exp.description.len())
                .sum();
            let avg_detail = total_chars as f64 / candidate.experience.len() as f64;
            factors.push((avg_detail / DETAILED_DESCRIPTION_CHARS).min(1.0));
        }

        // Factor 4: score consistency. Similar component scores mean the
        // upstream matcher saw a coherent profile.
        let components = [
            scores.skills_score,
            scores.experience_score,
            scores.education_score,
        ];
        factors.push((1.0 - std_dev(&components) / 50.0).max(0.0));

        let mean = factors.iter().sum::<f64>() / factors.len() as f64;
        mean.min(1.0)
    }

    /// Returns (missing_info, critical_gaps). Missing-info notes are
    /// human-readable; critical gaps are the labels severe enough to block
    /// auto-shortlisting.
    fn identify_gaps(
        &self,
        candidate: &CandidateRecord,
        matched_skills: &[String],
    ) -> (Vec<String>, Vec<String>) {
        let mut missing_info: Vec<String> = Vec::new();
        let mut critical_gaps: Vec<String> = Vec::new();

        // Every critical skill absent from the matched list is a gap
        for critical in &self.critical_skills {
            let critical_lower = critical.to_lowercase();
            let found = matched_skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(&critical_lower));
            if !found {
                missing_info.push(format!("No evidence of {critical}"));
                critical_gaps.push(critical.clone());
            }
        }

        if candidate.experience.is_empty() {
            missing_info.push("No work experience details".to_string());
            critical_gaps.push("work_experience".to_string());
        } else {
            let vague_count = candidate
                .experience
                .iter()
                .filter(|exp| exp.description.len() < VAGUE_DESCRIPTION_CHARS)
                .count();
            if vague_count as f64 > candidate.experience.len() as f64 / 2.0 {
                missing_info.push("Work experience lacks detail".to_string());
            }
        }

        // Entry-level roles are expected to show projects instead of tenure
        if self.min_experience < 2 && candidate.projects.is_empty() {
            missing_info.push("No projects mentioned".to_string());
            if candidate.experience.is_empty() {
                critical_gaps.push("projects".to_string());
            }
        }

        (missing_info, critical_gaps)
    }

    /// The three-way decision. HIGH shortlists unconditionally; MEDIUM asks
    /// unless the profile is gap-free and the base score is decent; LOW asks
    /// only when the gaps look clarifiable, otherwise rejects.
    fn decide(
        confidence_level: ConfidenceLevel,
        critical_gaps: &[String],
        base_score: f64,
    ) -> AgentDecision {
        match confidence_level {
            ConfidenceLevel::High => AgentDecision::AutoShortlist,
            ConfidenceLevel::Medium => {
                if !critical_gaps.is_empty() {
                    AgentDecision::AskQuestions
                } else if base_score >= 60.0 {
                    AgentDecision::AutoShortlist
                } else {
                    AgentDecision::AskQuestions
                }
            }
            ConfidenceLevel::Low => {
                if critical_gaps.len() <= 2 && base_score >= 40.0 {
                    AgentDecision::AskQuestions
                } else {
                    AgentDecision::AutoReject
                }
            }
        }
    }
}

/// Population standard deviation.
fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Ordered, human-readable explanation of the decision. Missing-info and
/// critical-gap lines list at most 3 items each — a hard cap.
fn build_reasoning(
    base_score: f64,
    confidence_score: f64,
    confidence_level: ConfidenceLevel,
    missing_info: &[String],
    critical_gaps: &[String],
    decision: AgentDecision,
) -> Vec<String> {
    let mut reasoning = Vec::new();

    reasoning.push(format!("Match score: {base_score:.1}%"));
    reasoning.push(format!(
        "Confidence: {confidence_score:.2} ({})",
        confidence_level.label()
    ));

    if !missing_info.is_empty() {
        let shown: Vec<&str> = missing_info.iter().take(3).map(String::as_str).collect();
        reasoning.push(format!("Missing information: {}", shown.join(", ")));
    }

    if !critical_gaps.is_empty() {
        let shown: Vec<&str> = critical_gaps.iter().take(3).map(String::as_str).collect();
        reasoning.push(format!("Critical gaps: {}", shown.join(", ")));
    }

    reasoning.push(match decision {
        AgentDecision::AutoShortlist => {
            "High confidence - automatically shortlisted".to_string()
        }
        AgentDecision::AskQuestions => {
            "Follow-up questions needed before a decision".to_string()
        }
        AgentDecision::AutoReject => "Does not meet the role requirements".to_string(),
    });

    reasoning
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{EducationEntry, ExperienceEntry, ProjectEntry};
    use std::collections::BTreeMap;

    fn job(required: &[&str], must_have: &[&str], min_experience: u32) -> JobProfile {
        JobProfile {
            title: "Senior Python Developer".to_string(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            must_have_skills: must_have.iter().map(|s| s.to_string()).collect(),
            preferred_skills: vec![],
            min_experience,
        }
    }

    fn skills(groups: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
        groups
            .iter()
            .map(|(category, list)| {
                (
                    category.to_string(),
                    list.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    fn experience(description: &str) -> ExperienceEntry {
        ExperienceEntry {
            title: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            duration: "2019 - 2023".to_string(),
            description: description.to_string(),
        }
    }

    fn education() -> EducationEntry {
        EducationEntry {
            degree: "BSc Computer Science".to_string(),
            institution: "State University".to_string(),
            year: "2018".to_string(),
        }
    }

    fn scores(
        overall: f64,
        skills: f64,
        experience: f64,
        education: f64,
        matched: &[&str],
        missing: &[&str],
    ) -> MatchScores {
        MatchScores {
            overall_score: overall,
            skills_score: skills,
            experience_score: experience,
            education_score: education,
            matched_skills: matched.iter().map(|s| s.to_string()).collect(),
            missing_skills: missing.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The worked example: Python/FastAPI/Docker role, candidate knows
    /// Python and Flask. Expect medium confidence, two critical gaps, and
    /// a request for follow-up questions.
    #[test]
    fn test_partial_match_asks_questions() {
        let job = job(&["Python", "FastAPI", "Docker"], &["Python", "FastAPI"], 3);
        let candidate = CandidateRecord {
            name: "Test Candidate".to_string(),
            email: "test@example.com".to_string(),
            skills: skills(&[("programming", &["Python"]), ("frameworks", &["Flask"])]),
            experience: vec![experience(
                "Built REST APIs using Flask and deployed them on AWS with microservices.",
            )],
            ..Default::default()
        };

        let scores = scores(
            65.0,
            60.0,
            70.0,
            65.0,
            &["Python", "Flask"],
            &["FastAPI", "Docker"],
        );

        let analyzer = CandidateAnalyzer::new(&job);
        let analysis = analyzer.analyze(&candidate, &scores);

        assert_eq!(analysis.critical_gaps, vec!["FastAPI", "Docker"]);
        assert!(analysis
            .missing_info
            .contains(&"No evidence of FastAPI".to_string()));
        assert!(analysis
            .missing_info
            .contains(&"No evidence of Docker".to_string()));
        assert_eq!(analysis.confidence_level, ConfidenceLevel::Medium);
        assert_eq!(analysis.decision, AgentDecision::AskQuestions);
        assert_eq!(analysis.candidate_name, "Test Candidate");
        assert_eq!(analysis.base_score, 65.0);
    }

    /// Full critical coverage, complete sections, strong scores: HIGH and
    /// auto-shortlisted. Full coverage overflows factor 2 to 1.5, so the
    /// mean exceeds 1.0 before the upper clamp.
    #[test]
    fn test_complete_strong_candidate_is_auto_shortlisted() {
        let job = job(&["Python", "SQL"], &["Python"], 3);
        let candidate = CandidateRecord {
            name: "Strong Candidate".to_string(),
            email: "strong@example.com".to_string(),
            skills: skills(&[("programming", &["Python", "SQL"])]),
            experience: vec![experience(&"x".repeat(250))],
            education: vec![education()],
            ..Default::default()
        };
        let scores = scores(80.0, 80.0, 80.0, 80.0, &["Python", "SQL"], &[]);

        let analysis = CandidateAnalyzer::new(&job).analyze(&candidate, &scores);

        assert_eq!(analysis.confidence_score, 1.0);
        assert_eq!(analysis.confidence_level, ConfidenceLevel::High);
        assert_eq!(analysis.decision, AgentDecision::AutoShortlist);
        assert!(analysis.critical_gaps.is_empty());
    }

    /// Zero experience, zero projects, zero matched critical skills: too
    /// many gaps to clarify, auto-rejected.
    #[test]
    fn test_empty_candidate_is_auto_rejected() {
        let job = job(&["Python", "FastAPI", "Docker"], &[], 0);
        let candidate = CandidateRecord::default();
        let scores = scores(20.0, 10.0, 30.0, 20.0, &[], &["Python", "FastAPI", "Docker"]);

        let analysis = CandidateAnalyzer::new(&job).analyze(&candidate, &scores);

        assert_eq!(analysis.decision, AgentDecision::AutoReject);
        assert_eq!(analysis.confidence_level, ConfidenceLevel::Low);
        // 3 skill gaps + work_experience + projects
        assert_eq!(analysis.critical_gaps.len(), 5);
        assert!(analysis
            .critical_gaps
            .contains(&"work_experience".to_string()));
        assert!(analysis.critical_gaps.contains(&"projects".to_string()));
        assert_eq!(analysis.candidate_name, "Unknown");
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let job = job(&["Python", "FastAPI"], &["Docker"], 1);
        let candidate = CandidateRecord {
            name: "Repeat".to_string(),
            skills: skills(&[("technical", &["Python"])]),
            experience: vec![experience("Short stint.")],
            ..Default::default()
        };
        let scores = scores(55.0, 50.0, 60.0, 40.0, &["Python"], &["FastAPI", "Docker"]);

        let analyzer = CandidateAnalyzer::new(&job);
        let first = analyzer.analyze(&candidate, &scores);
        let second = analyzer.analyze(&candidate, &scores);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reasoning_caps_listed_items_at_three() {
        let required: Vec<&str> = vec!["A", "B", "C", "D", "E", "F"];
        let job = job(&required, &[], 3);
        let candidate = CandidateRecord {
            experience: vec![experience(&"y".repeat(100))],
            skills: skills(&[("technical", &["Z"])]),
            education: vec![education()],
            ..Default::default()
        };
        let scores = scores(50.0, 50.0, 50.0, 50.0, &[], &required);

        let analysis = CandidateAnalyzer::new(&job).analyze(&candidate, &scores);
        assert_eq!(analysis.critical_gaps.len(), 6);

        let gaps_line = analysis
            .reasoning
            .iter()
            .find(|line| line.starts_with("Critical gaps:"))
            .expect("gaps line present");
        assert_eq!(gaps_line, "Critical gaps: A, B, C");

        let info_line = analysis
            .reasoning
            .iter()
            .find(|line| line.starts_with("Missing information:"))
            .expect("info line present");
        assert!(info_line.contains("No evidence of C"));
        assert!(!info_line.contains("No evidence of D"));
    }

    #[test]
    fn test_confidence_level_boundaries_are_lower_inclusive() {
        assert_eq!(ConfidenceLevel::from_score(0.75), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.749), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(0.40), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_score(0.399), ConfidenceLevel::Low);
        assert_eq!(ConfidenceLevel::from_score(1.0), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_score(0.0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_medium_confidence_decision_table() {
        let no_gaps: Vec<String> = vec![];
        let gaps = vec!["Docker".to_string()];

        assert_eq!(
            CandidateAnalyzer::decide(ConfidenceLevel::Medium, &gaps, 90.0),
            AgentDecision::AskQuestions
        );
        assert_eq!(
            CandidateAnalyzer::decide(ConfidenceLevel::Medium, &no_gaps, 60.0),
            AgentDecision::AutoShortlist
        );
        assert_eq!(
            CandidateAnalyzer::decide(ConfidenceLevel::Medium, &no_gaps, 59.9),
            AgentDecision::AskQuestions
        );
    }

    #[test]
    fn test_low_confidence_decision_table() {
        let two_gaps = vec!["Docker".to_string(), "FastAPI".to_string()];
        let three_gaps = vec![
            "Docker".to_string(),
            "FastAPI".to_string(),
            "Kubernetes".to_string(),
        ];

        assert_eq!(
            CandidateAnalyzer::decide(ConfidenceLevel::Low, &two_gaps, 40.0),
            AgentDecision::AskQuestions
        );
        assert_eq!(
            CandidateAnalyzer::decide(ConfidenceLevel::Low, &two_gaps, 39.9),
            AgentDecision::AutoReject
        );
        assert_eq!(
            CandidateAnalyzer::decide(ConfidenceLevel::Low, &three_gaps, 80.0),
            AgentDecision::AutoReject
        );
    }

    #[test]
    fn test_vague_experience_noted_but_not_critical() {
        let job = job(&[], &[], 3);
        let candidate = CandidateRecord {
            experience: vec![
                experience("Too short."),
                experience("Also short."),
                experience(&"z".repeat(120)),
            ],
            skills: skills(&[("technical", &["Python"])]),
            ..Default::default()
        };
        let scores = scores(50.0, 50.0, 50.0, 50.0, &["Python"], &[]);

        let analysis = CandidateAnalyzer::new(&job).analyze(&candidate, &scores);
        assert!(analysis
            .missing_info
            .contains(&"Work experience lacks detail".to_string()));
        assert!(analysis.critical_gaps.is_empty());
    }

    #[test]
    fn test_entry_level_without_projects_noted() {
        let job = job(&[], &[], 1);
        let candidate = CandidateRecord {
            experience: vec![experience(&"w".repeat(100))],
            ..Default::default()
        };
        let scores = scores(50.0, 50.0, 50.0, 50.0, &[], &[]);

        let analysis = CandidateAnalyzer::new(&job).analyze(&candidate, &scores);
        assert!(analysis
            .missing_info
            .contains(&"No projects mentioned".to_string()));
        // Projects only become critical when experience is also empty
        assert!(!analysis.critical_gaps.contains(&"projects".to_string()));
    }

    #[test]
    fn test_projects_present_suppresses_entry_level_note() {
        let job = job(&[], &[], 0);
        let candidate = CandidateRecord {
            projects: vec![ProjectEntry {
                name: "Side project".to_string(),
                description: "A CLI tool".to_string(),
                technologies: vec!["Rust".to_string()],
            }],
            ..Default::default()
        };
        let scores = scores(50.0, 50.0, 50.0, 50.0, &[], &[]);

        let analysis = CandidateAnalyzer::new(&job).analyze(&candidate, &scores);
        assert!(!analysis
            .missing_info
            .contains(&"No projects mentioned".to_string()));
    }

    #[test]
    fn test_empty_critical_set_fixes_coverage_factor_at_one() {
        let job = job(&[], &[], 3);
        let analyzer = CandidateAnalyzer::new(&job);
        let candidate = CandidateRecord {
            skills: skills(&[("technical", &["Python"])]),
            experience: vec![experience(&"v".repeat(200))],
            education: vec![education()],
            ..Default::default()
        };
        let scores = scores(70.0, 70.0, 70.0, 70.0, &[], &[]);

        // All four factors are 1.0: completeness, coverage, detail, consistency
        let analysis = analyzer.analyze(&candidate, &scores);
        assert_eq!(analysis.confidence_score, 1.0);
    }

    #[test]
    fn test_std_dev_population() {
        assert_eq!(std_dev(&[]), 0.0);
        assert_eq!(std_dev(&[50.0, 50.0, 50.0]), 0.0);
        // {60, 70, 65}: population variance 50/3
        let sd = std_dev(&[60.0, 70.0, 65.0]);
        assert!((sd - (50.0_f64 / 3.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_decision_serde_tags() {
        assert_eq!(
            serde_json::to_string(&AgentDecision::AutoShortlist).unwrap(),
            r#""auto_shortlist""#
        );
        assert_eq!(
            serde_json::to_string(&AgentDecision::AskQuestions).unwrap(),
            r#""ask_questions""#
        );
        assert_eq!(
            serde_json::to_string(&AgentDecision::AutoReject).unwrap(),
            r#""auto_reject""#
        );
        assert_eq!(
            serde_json::to_string(&ConfidenceLevel::Medium).unwrap(),
            r#""medium""#
        );
    }
}
