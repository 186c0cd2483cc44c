//! Match Reconciler — the decision core of the service.
//!
//! Builds the match prompt, invokes the hosted model, tolerantly extracts a
//! JSON object from its free-text reply, and reconciles the fields against
//! locally computed keyword fallbacks. Degradation order is fixed:
//! model-provided fields → local keyword overlap → hard zero-score failure.
//!
//! The upstream is untrusted for STRUCTURE (it may wrap JSON in prose or
//! omit keys) but trusted for CONTENT when well-formed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::llm_client::{CompletionClient, LlmError};
use crate::matching::prompts::build_match_prompt;
use crate::matching::skills::extract_skills;

/// Score reported when the model replied but gave us nothing parseable to
/// score with. Signals "reply arrived, structure didn't" — a plausible fit,
/// not a failure.
pub const FALLBACK_SCORE: u32 = 75;

/// Explanation used when the model omits one of its own.
pub const FALLBACK_EXPLANATION: &str = "Automatic AI analysis completed.";

/// The structured match verdict returned to callers. Request-local, never
/// stored. All four fields are always present, including on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_score: u32,
    pub resume_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub explanation: String,
}

impl MatchResult {
    /// Uniform failure shape: zero score, empty lists, error text in the
    /// explanation. No partial success once an error escapes the pipeline.
    fn upstream_failure(err: &LlmError) -> Self {
        MatchResult {
            match_score: 0,
            resume_skills: vec![],
            missing_skills: vec![],
            explanation: format!("Error: {err}"),
        }
    }
}

/// Runs the full match pipeline for one request.
///
/// Infallible by contract: every upstream outcome — rich structured reply,
/// prose-wrapped JSON, missing keys, transport failure — maps to a
/// `MatchResult`. The caller never sees an error.
pub async fn reconcile_match(
    client: &dyn CompletionClient,
    resume_text: &str,
    jd_text: &str,
) -> MatchResult {
    // Catalog terms present in either document are candidates.
    let all_skills = extract_skills(&format!("{resume_text} {jd_text}"));

    let resume_lower = resume_text.to_lowercase();
    let jd_lower = jd_text.to_lowercase();

    let matched_fallback: Vec<String> = all_skills
        .iter()
        .filter(|s| resume_lower.contains(s.as_str()) && jd_lower.contains(s.as_str()))
        .cloned()
        .collect();
    let missing_fallback: Vec<String> = all_skills
        .iter()
        .filter(|s| jd_lower.contains(s.as_str()) && !resume_lower.contains(s.as_str()))
        .cloned()
        .collect();

    match query_model(client, resume_text, jd_text).await {
        Ok(fields) => reconcile_fields(&fields, matched_fallback, missing_fallback),
        Err(err) => {
            error!("match pipeline failed: {err}");
            MatchResult::upstream_failure(&err)
        }
    }
}

/// Calls the model and extracts whatever object it managed to produce.
///
/// A reply with no `{...}` at all yields an empty map (reconciled entirely
/// from fallbacks); a reply whose extracted object fails to parse is an
/// error — the model claimed structure and delivered garbage.
async fn query_model(
    client: &dyn CompletionClient,
    resume_text: &str,
    jd_text: &str,
) -> Result<Map<String, Value>, LlmError> {
    let prompt = build_match_prompt(resume_text, jd_text);
    let reply = client.complete(&prompt).await?;

    debug!("raw model reply: {reply}");

    match extract_json_object(&reply) {
        Some(payload) => Ok(serde_json::from_str(payload)?),
        None => Ok(Map::new()),
    }
}

/// Per-field reconciliation: model value if present and well-typed, local
/// fallback otherwise. A key of the wrong JSON type counts as absent.
fn reconcile_fields(
    data: &Map<String, Value>,
    matched_fallback: Vec<String>,
    missing_fallback: Vec<String>,
) -> MatchResult {
    MatchResult {
        match_score: data
            .get("match_score")
            .and_then(score_from_value)
            .unwrap_or(FALLBACK_SCORE),
        resume_skills: data
            .get("resume_skills")
            .and_then(string_list_from_value)
            .unwrap_or(matched_fallback),
        missing_skills: data
            .get("missing_skills")
            .and_then(string_list_from_value)
            .unwrap_or(missing_fallback),
        explanation: data
            .get("explanation")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| FALLBACK_EXPLANATION.to_string()),
    }
}

/// Accepts any JSON number (models sometimes emit floats for integer
/// fields), rounds, and clamps into 0–100.
fn score_from_value(v: &Value) -> Option<u32> {
    v.as_f64().map(|n| n.round().clamp(0.0, 100.0) as u32)
}

/// Accepts a JSON array, keeping only its string elements.
fn string_list_from_value(v: &Value) -> Option<Vec<String>> {
    v.as_array()
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
}

/// Locates the outermost balanced `{...}` in `text`, spanning newlines.
///
/// A bracket-counting scan rather than a greedy pattern: tracks string
/// literals (with escapes) so braces inside string values and nested objects
/// are handled. Returns `None` when no complete object exists.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + i + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
