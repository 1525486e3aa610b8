use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A parsed resume. Every field degrades to an empty default rather than
/// failing — the analyzer never rejects a candidate for missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    /// Skill strings grouped by category (e.g. "technical", "soft", "tools").
    /// BTreeMap keeps category iteration order deterministic.
    #[serde(default)]
    pub skills: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub total_experience_years: f64,
    /// Which path produced this record: "openai_api", "basic_regex", or "empty".
    #[serde(default)]
    pub parsing_method: String,
}

impl CandidateRecord {
    /// All skill strings across categories, in category order.
    pub fn all_skills(&self) -> Vec<&str> {
        self.skills
            .values()
            .flat_map(|group| group.iter().map(String::as_str))
            .collect()
    }

    pub fn has_skills(&self) -> bool {
        self.skills.values().any(|group| !group.is_empty())
    }

    /// Candidate display name, "Unknown" when the resume carried none.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unknown"
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_skills_flattens_categories_in_order() {
        let mut skills = BTreeMap::new();
        skills.insert("frameworks".to_string(), vec!["Flask".to_string()]);
        skills.insert(
            "programming".to_string(),
            vec!["Python".to_string(), "JavaScript".to_string()],
        );
        let candidate = CandidateRecord {
            skills,
            ..Default::default()
        };
        // BTreeMap orders categories alphabetically
        assert_eq!(candidate.all_skills(), vec!["Flask", "Python", "JavaScript"]);
    }

    #[test]
    fn test_has_skills_false_for_empty_groups() {
        let mut skills = BTreeMap::new();
        skills.insert("technical".to_string(), Vec::new());
        let candidate = CandidateRecord {
            skills,
            ..Default::default()
        };
        assert!(!candidate.has_skills());
    }

    #[test]
    fn test_display_name_defaults_to_unknown() {
        let candidate = CandidateRecord::default();
        assert_eq!(candidate.display_name(), "Unknown");

        let named = CandidateRecord {
            name: "Ada Lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(named.display_name(), "Ada Lovelace");
    }

    #[test]
    fn test_record_deserializes_from_sparse_json() {
        let candidate: CandidateRecord =
            serde_json::from_str(r#"{"name": "Test", "email": "t@example.com"}"#).unwrap();
        assert_eq!(candidate.name, "Test");
        assert!(candidate.experience.is_empty());
        assert!(candidate.projects.is_empty());
        assert_eq!(candidate.total_experience_years, 0.0);
    }
}
