// Prompt constants for the matching module. All model calls go through
// llm_client; this file only owns the text.

/// Match prompt template. Replace `{resume_text}` and `{jd_text}` before
/// sending. Sent as a single user-role message — the reconciler does not
/// trust the model to honor the JSON-only instruction and scans the reply
/// for an embedded object regardless.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are an expert AI recruiter.
Compare this Resume and Job Description and return the JSON result ONLY (no explanations):

Resume:
{resume_text}

Job Description:
{jd_text}

Return JSON in this exact format:
{
  "match_score": number (0-100),
  "resume_skills": list of matched skills,
  "missing_skills": list of missing skills,
  "explanation": string (1-2 sentences about overall fit)
}"#;

/// Builds the final match prompt from the raw request texts.
pub fn build_match_prompt(resume_text: &str, jd_text: &str) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{jd_text}", jd_text)
}
