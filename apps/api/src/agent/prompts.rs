// All LLM prompt constants for the agent module.

/// System prompt for question generation — enforces JSON-only output.
pub const QUESTION_SYSTEM: &str =
    "You are an expert technical recruiter. Generate targeted follow-up \
    questions to clarify candidate fit. \
    You MUST respond with valid JSON only — a JSON array of question objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Question generation prompt template.
/// Replace: {job_title}, {required_skills}, {min_experience},
///          {candidate_skills}, {experience_count}, {project_count},
///          {critical_gaps}, {missing_info}, {confidence}
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"You are evaluating a candidate for: {job_title}

**Job Requirements:**
- Required Skills: {required_skills}
- Minimum Experience: {min_experience} years

**Candidate Profile:**
- Skills Mentioned: {candidate_skills}
- Experience: {experience_count} positions
- Projects: {project_count} projects

**Identified Gaps:**
- Critical gaps: {critical_gaps}
- Missing information: {missing_info}

**Current Confidence:** {confidence}

**Your Task:**
Generate 2-4 targeted follow-up questions to clarify the candidate's fit.

**Requirements:**
1. Each question should address a specific gap
2. Questions should be open-ended but focused
3. Ask for specific examples or projects
4. Avoid yes/no questions
5. Be professional and clear

Return a JSON array with this EXACT schema (no extra fields):
[
  {
    "question": "The actual question",
    "gap_addressed": "Which gap this addresses",
    "priority": "high|medium|low"
  }
]"#;

/// System prompt for answer evaluation — enforces JSON-only output.
pub const EVALUATION_SYSTEM: &str =
    "You are an expert technical interviewer evaluating candidate responses. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Answer evaluation prompt template.
/// Replace: {question}, {gap_addressed}, {job_json}, {answer}
pub const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are evaluating a candidate's response to a follow-up question.

**Original Question:** {question}
**Gap Being Addressed:** {gap_addressed}
**Job Requirements:** {job_json}

**Candidate's Answer:**
{answer}

**Your Task:**
Evaluate this answer and determine:
1. Does it satisfactorily address the gap? (yes/no)
2. How much should this boost/reduce confidence? (-0.2 to +0.3)
3. Brief reasoning for your evaluation
4. Is another follow-up needed?

**Evaluation Criteria:**
- Specific examples with details = excellent (+0.2 to +0.3)
- Vague claims without evidence = poor (-0.1 to 0)
- Relevant experience clearly described = good (+0.1 to +0.2)
- Irrelevant tangents = bad (-0.2)
- No answer or "I don't know" = very poor (-0.2)

Return a JSON object with this EXACT schema (no extra fields):
{
  "satisfactory": true,
  "confidence_boost": 0.15,
  "reasoning": "Brief explanation",
  "follow_up_needed": false
}"#;
