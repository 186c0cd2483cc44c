//! Skill extraction — maps free text onto a fixed catalog of known skills.

/// The recognized skill vocabulary. Fixed at build time, lowercase, and
/// ordered — extraction output preserves this order, not input order.
pub const SKILL_CATALOG: &[&str] = &[
    "python",
    "java",
    "aws",
    "azure",
    "gcp",
    "machine learning",
    "deep learning",
    "nlp",
    "sql",
    "data analysis",
    "react",
    "node",
    "docker",
    "kubernetes",
    "spark",
    "pandas",
    "fastapi",
    "flask",
    "tensorflow",
    "pytorch",
    "hadoop",
    "powerbi",
];

/// Returns every catalog skill that occurs as a case-insensitive substring of
/// `text`, in catalog order.
///
/// Matching is substring-only with no word-boundary checks: "java" matches
/// inside "javascript". That imprecision is a documented property of the
/// catalog approach, not a bug — tightening it would change match semantics.
pub fn extract_skills(text: &str) -> Vec<String> {
    let haystack = text.to_lowercase();
    SKILL_CATALOG
        .iter()
        .filter(|skill| haystack.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_empty_result() {
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let skills = extract_skills("Expert in PYTHON and Docker");
        assert_eq!(skills, vec!["python", "docker"]);
    }

    #[test]
    fn test_output_preserves_catalog_order_not_input_order() {
        // Input mentions sql before python; catalog lists python first.
        let skills = extract_skills("SQL wizard, also knows Python");
        assert_eq!(skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_substring_match_java_inside_javascript() {
        // No word-boundary checks: "javascript" contains "java".
        let skills = extract_skills("5 years of JavaScript");
        assert_eq!(skills, vec!["java"]);
    }

    #[test]
    fn test_output_is_subset_of_catalog() {
        let skills = extract_skills("python rust go sql haskell kubernetes");
        for s in &skills {
            assert!(SKILL_CATALOG.contains(&s.as_str()), "{s} not in catalog");
        }
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Machine Learning engineer with PyTorch and AWS";
        let once = extract_skills(text);
        let twice = extract_skills(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_multiword_skills_match() {
        let skills = extract_skills("background in deep learning and data analysis");
        assert_eq!(skills, vec!["deep learning", "data analysis"]);
    }
}
