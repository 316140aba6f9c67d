//! Required-vs-candidate skill set matching

use crate::scoring::normalizer::normalize;
use serde::{Deserialize, Serialize};

/// Result of matching a required skill set against a candidate skill set.
/// Skill names are in normalized form; `matched` and `unmatched` preserve
/// the order of the required list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
    pub match_count: usize,
    pub total_required: usize,
    pub match_ratio: f32,
    pub match_percentage: f32,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            matched: Vec::new(),
            unmatched: Vec::new(),
            match_count: 0,
            total_required: 0,
            match_ratio: 0.0,
            match_percentage: 0.0,
        }
    }
}

/// Match required skills against candidate skills.
///
/// Both sides are normalized before comparison. A required skill counts as
/// matched when some candidate skill equals it exactly, or when either one
/// is a substring of the other. The first satisfying candidate wins; there
/// is no multi-match accounting.
///
/// An empty required list yields a ratio of 0.0, not 1.0: matching against
/// nothing carries no signal. Duplicate required skills count individually.
///
/// Known quirk, kept on purpose: substring containment lets "java" match
/// "javascript". The rule errs toward matching related skills.
pub fn match_skills(required: &[String], candidate: &[String]) -> MatchResult {
    if required.is_empty() {
        return MatchResult::empty();
    }

    let required: Vec<String> = required.iter().map(|s| normalize(s)).collect();
    let candidate: Vec<String> = candidate.iter().map(|s| normalize(s)).collect();

    let mut matched = Vec::new();
    let mut unmatched = Vec::new();

    for req in &required {
        let exact = candidate.iter().any(|c| c == req);
        let partial = exact
            || candidate
                .iter()
                .any(|c| req.contains(c.as_str()) || c.contains(req.as_str()));
        if partial {
            matched.push(req.clone());
        } else {
            unmatched.push(req.clone());
        }
    }

    let total_required = required.len();
    let match_count = matched.len();
    let match_ratio = match_count as f32 / total_required as f32;

    MatchResult {
        matched,
        unmatched,
        match_count,
        total_required,
        match_ratio,
        match_percentage: match_ratio * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_required_is_zero_signal() {
        let result = match_skills(&[], &skills(&["python", "rust"]));
        assert_eq!(result.match_ratio, 0.0);
        assert_eq!(result.total_required, 0);
        assert!(result.matched.is_empty());
        assert!(result.unmatched.is_empty());
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let result = match_skills(&skills(&["Python"]), &skills(&["python"]));
        assert_eq!(result.match_ratio, 1.0);
        assert_eq!(result.matched, vec!["python"]);
    }

    #[test]
    fn test_normalized_match() {
        let result = match_skills(&skills(&["postgres"]), &skills(&["PostgreSQL"]));
        assert_eq!(result.match_ratio, 1.0);
        assert_eq!(result.matched, vec!["postgresql"]);
    }

    #[test]
    fn test_substring_match_both_directions() {
        // required is substring of candidate
        let result = match_skills(&skills(&["java"]), &skills(&["javascript"]));
        assert_eq!(result.match_ratio, 1.0);

        // candidate is substring of required
        let result = match_skills(&skills(&["javascript"]), &skills(&["java"]));
        assert_eq!(result.match_ratio, 1.0);
    }

    #[test]
    fn test_partial_coverage() {
        let result = match_skills(
            &skills(&["python", "fastapi", "postgresql"]),
            &skills(&["Python", "Django", "PostgreSQL"]),
        );
        assert_eq!(result.match_count, 2);
        assert_eq!(result.total_required, 3);
        assert!((result.match_ratio - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(result.matched, vec!["python", "postgresql"]);
        assert_eq!(result.unmatched, vec!["fastapi"]);
    }

    #[test]
    fn test_duplicates_count_individually() {
        let result = match_skills(
            &skills(&["python", "python", "rust"]),
            &skills(&["python"]),
        );
        assert_eq!(result.match_count, 2);
        assert_eq!(result.total_required, 3);
        assert!((result.match_ratio - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_candidate_skills() {
        let result = match_skills(&skills(&["python", "rust"]), &[]);
        assert_eq!(result.match_ratio, 0.0);
        assert_eq!(result.unmatched, vec!["python", "rust"]);
    }

    #[test]
    fn test_ratio_bounds_and_percentage() {
        let result = match_skills(&skills(&["a", "b"]), &skills(&["a"]));
        assert!(result.match_ratio >= 0.0 && result.match_ratio <= 1.0);
        assert_eq!(result.match_percentage, result.match_ratio * 100.0);
    }

    #[test]
    fn test_order_stable() {
        let result = match_skills(
            &skills(&["rust", "go", "python"]),
            &skills(&["python", "rust"]),
        );
        assert_eq!(result.matched, vec!["rust", "python"]);
        assert_eq!(result.unmatched, vec!["go"]);
    }
}
