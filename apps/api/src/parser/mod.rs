//! Resume ingestion: text extraction from uploaded documents, LLM field
//! extraction, and a regex fallback when the LLM path fails. Parsing never
//! errors out — a resume that can't be read yields an empty record.

pub mod prompts;

use std::collections::BTreeMap;

use regex::Regex;
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::models::candidate::CandidateRecord;
use crate::parser::prompts::{PARSE_PROMPT_TEMPLATE, PARSE_SYSTEM};

const PARSE_TEMPERATURE: f32 = 0.1;
/// Below this much extracted text the file is treated as unreadable.
const MIN_PARSEABLE_CHARS: usize = 50;
/// More than this fraction of U+FFFD replacement characters means the upload
/// was binary, not text.
const MAX_REPLACEMENT_RATIO: f64 = 0.05;
/// Resume text is truncated to this many characters before prompting.
const MAX_PROMPT_CHARS: usize = 4000;
const SUMMARY_PREVIEW_CHARS: usize = 200;

/// Keywords scanned by the regex fallback parser.
const FALLBACK_SKILL_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node",
    "sql",
    "html",
    "css",
    "aws",
    "docker",
    "git",
];

/// Parses an uploaded resume into a CandidateRecord.
///
/// Pipeline: extract text (PDF or plain) → LLM extraction → regex fallback.
/// The `parsing_method` field records which path produced the record.
pub async fn parse_resume(llm: &LlmClient, file: &[u8], filename: &str) -> CandidateRecord {
    let text = extract_text(file, filename);

    if text.trim().chars().count() < MIN_PARSEABLE_CHARS {
        return CandidateRecord {
            parsing_method: "empty".to_string(),
            ..Default::default()
        };
    }

    match parse_with_llm(llm, &text).await {
        Ok(record) => record,
        Err(e) => {
            warn!("LLM resume parsing failed, using regex fallback: {e}");
            parse_basic(&text, filename)
        }
    }
}

/// Extracts raw text from the uploaded bytes. PDFs go through `pdf-extract`;
/// everything else is treated as UTF-8 with lossy decoding. Binary payloads
/// (including Word documents, which are ZIP containers) come back empty so
/// they land on the unreadable path instead of feeding mojibake to the LLM.
fn extract_text(file: &[u8], filename: &str) -> String {
    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        match pdf_extract::extract_text_from_mem(file) {
            Ok(text) => text,
            Err(e) => {
                warn!("PDF text extraction failed for {filename}: {e}");
                String::new()
            }
        }
    } else if lower.ends_with(".docx") || lower.ends_with(".doc") {
        // TODO: wire a DOCX extractor alongside pdf-extract
        warn!("No text extractor for {filename}, treating as unreadable");
        String::new()
    } else {
        let text = String::from_utf8_lossy(file).into_owned();
        if looks_binary(&text) {
            warn!("Upload {filename} is not text, treating as unreadable");
            String::new()
        } else {
            text
        }
    }
}

fn looks_binary(text: &str) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let replacements = text.chars().filter(|c| *c == '\u{FFFD}').count();
    replacements as f64 / total as f64 > MAX_REPLACEMENT_RATIO
}

async fn parse_with_llm(
    llm: &LlmClient,
    text: &str,
) -> Result<CandidateRecord, crate::llm_client::LlmError> {
    let truncated: String = text.chars().take(MAX_PROMPT_CHARS).collect();
    let prompt = PARSE_PROMPT_TEMPLATE.replace("{resume_text}", &truncated);

    let mut record: CandidateRecord = llm
        .call_json(&prompt, PARSE_SYSTEM, PARSE_TEMPERATURE)
        .await?;
    record.parsing_method = "openai_api".to_string();
    Ok(record)
}

/// Basic regex extraction: email, phone, name from the first line, a keyword
/// skill scan, and the largest "N years" mention. Good enough to keep a
/// candidate in the pipeline when the LLM is unavailable.
fn parse_basic(text: &str, filename: &str) -> CandidateRecord {
    let email_re =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("hardcoded regex");
    let phone_re = Regex::new(r"[+(]?[1-9][0-9 .\-()]{8,}[0-9]").expect("hardcoded regex");
    let years_re = Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)").expect("hardcoded regex");

    let email = email_re
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let phone = phone_re
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let name = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            filename
                .trim_end_matches(".pdf")
                .trim_end_matches(".docx")
                .to_string()
        });

    let text_lower = text.to_lowercase();
    let found_skills: Vec<String> = FALLBACK_SKILL_KEYWORDS
        .iter()
        .filter(|skill| text_lower.contains(*skill))
        .map(|skill| title_case(skill))
        .collect();

    let total_experience_years = years_re
        .captures_iter(&text_lower)
        .filter_map(|caps| caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()))
        .fold(0.0_f64, f64::max);

    let mut skills = BTreeMap::new();
    skills.insert("technical".to_string(), found_skills);

    let summary: String = text.chars().take(SUMMARY_PREVIEW_CHARS).collect();

    CandidateRecord {
        name,
        email,
        phone,
        summary: format!("{summary}..."),
        skills,
        total_experience_years,
        parsing_method: "basic_regex".to_string(),
        ..Default::default()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
