//! Experience-level comparison between job requirement and candidate

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceResult {
    pub score: f32,
    pub explanation: String,
}

/// Compare required years of experience against candidate years.
///
/// The rules are a fixed decision table, evaluated top to bottom:
/// no requirement is a lenient pass (0.7), a requirement with unknown
/// candidate experience scores low (0.3), and a present pair scores on
/// fixed 1.0 / 0.7x / 0.5x thresholds. `Some(0)` counts as present.
pub fn match_experience(
    required_years: Option<u32>,
    candidate_years: Option<u32>,
) -> ExperienceResult {
    let required = match required_years {
        None => {
            return ExperienceResult {
                score: 0.7,
                explanation: "No experience requirement specified".to_string(),
            }
        }
        Some(years) => years,
    };

    let candidate = match candidate_years {
        None => {
            return ExperienceResult {
                score: 0.3,
                explanation: "Candidate experience not found".to_string(),
            }
        }
        Some(years) => years,
    };

    if candidate >= required {
        ExperienceResult {
            score: 1.0,
            explanation: format!("Meets requirement ({} >= {} years)", candidate, required),
        }
    } else if candidate as f32 >= required as f32 * 0.7 {
        ExperienceResult {
            score: 0.7,
            explanation: format!("Close match ({} vs {} years)", candidate, required),
        }
    } else if candidate as f32 >= required as f32 * 0.5 {
        ExperienceResult {
            score: 0.5,
            explanation: format!("Partial match ({} vs {} years)", candidate, required),
        }
    } else {
        ExperienceResult {
            score: 0.2,
            explanation: format!("Below requirement ({} < {} years)", candidate, required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_requirement() {
        let result = match_experience(None, None);
        assert_eq!(result.score, 0.7);
        assert_eq!(result.explanation, "No experience requirement specified");

        // candidate years are irrelevant when nothing is required
        let result = match_experience(None, Some(10));
        assert_eq!(result.score, 0.7);
    }

    #[test]
    fn test_candidate_unknown() {
        let result = match_experience(Some(5), None);
        assert_eq!(result.score, 0.3);
        assert_eq!(result.explanation, "Candidate experience not found");
    }

    #[test]
    fn test_meets_requirement() {
        let result = match_experience(Some(5), Some(6));
        assert_eq!(result.score, 1.0);
        assert_eq!(result.explanation, "Meets requirement (6 >= 5 years)");

        let result = match_experience(Some(5), Some(5));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_close_match() {
        // 4 >= 5 * 0.7 = 3.5
        let result = match_experience(Some(5), Some(4));
        assert_eq!(result.score, 0.7);
        assert_eq!(result.explanation, "Close match (4 vs 5 years)");
    }

    #[test]
    fn test_partial_match() {
        // 3 >= 5 * 0.5 = 2.5 but 3 < 5 * 0.7 = 3.5
        let result = match_experience(Some(5), Some(3));
        assert_eq!(result.score, 0.5);
        assert!(result.explanation.contains("Partial"));
        assert_eq!(result.explanation, "Partial match (3 vs 5 years)");
    }

    #[test]
    fn test_below_requirement() {
        let result = match_experience(Some(10), Some(2));
        assert_eq!(result.score, 0.2);
        assert_eq!(result.explanation, "Below requirement (2 < 10 years)");
    }

    #[test]
    fn test_zero_years_counts_as_present() {
        // a requirement of zero years is met by anyone with known experience
        let result = match_experience(Some(0), Some(0));
        assert_eq!(result.score, 1.0);

        // zero candidate years against a real requirement is below, not missing
        let result = match_experience(Some(4), Some(0));
        assert_eq!(result.score, 0.2);
    }
}
