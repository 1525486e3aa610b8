// LLM prompt constants for resume field extraction.

/// System prompt for resume parsing — enforces JSON-only output.
pub const PARSE_SYSTEM: &str = "You are a resume data extractor. \
    Extract structured candidate data from resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT invent information not present in the resume.";

/// Resume parsing prompt template. Replace `{resume_text}` before sending.
pub const PARSE_PROMPT_TEMPLATE: &str = r#"Extract information from this resume.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Full name",
  "email": "Email address",
  "phone": "Phone number",
  "location": "City, State",
  "summary": "Professional summary",
  "skills": {
    "technical": ["skill1", "skill2"],
    "soft": ["skill1", "skill2"],
    "tools": ["tool1", "tool2"]
  },
  "experience": [
    {
      "title": "Job title",
      "company": "Company",
      "duration": "Start - End",
      "description": "Key responsibilities and achievements as one paragraph"
    }
  ],
  "education": [
    {
      "degree": "Degree name",
      "institution": "University",
      "year": "Year"
    }
  ],
  "certifications": ["Cert 1"],
  "projects": [
    {
      "name": "Project name",
      "description": "Description",
      "technologies": ["Tech 1"]
    }
  ],
  "languages": ["English"],
  "total_experience_years": 5
}

Use empty strings, empty arrays, or 0 for anything the resume does not state.

RESUME:
{resume_text}"#;
