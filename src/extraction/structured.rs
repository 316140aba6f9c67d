//! Extraction from already-structured JSON attributes
//!
//! Stands in for any upstream producer of structured data (for example an
//! LLM returning JSON). The scorer treats these attributes exactly like
//! heuristically extracted ones.

use crate::error::{Result, TalentFitError};
use crate::extraction::{AttributeExtractor, ExtractedAttributes};
use serde::Deserialize;

/// Wire shape accepted from structured producers. Unknown fields are
/// rejected so that malformed payloads fail fast instead of being silently
/// accepted with missing data.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StructuredPayload {
    skills: Vec<String>,
    #[serde(default)]
    years_experience: Option<u32>,
}

#[derive(Debug, Default)]
pub struct StructuredExtractor;

impl StructuredExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl AttributeExtractor for StructuredExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedAttributes> {
        let payload: StructuredPayload = serde_json::from_str(text).map_err(|e| {
            TalentFitError::InvalidInput(format!("Malformed structured attributes: {}", e))
        })?;

        Ok(ExtractedAttributes {
            skills: payload.skills,
            years_experience: payload.years_experience,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_payload() {
        let extractor = StructuredExtractor::new();
        let attrs = extractor
            .extract(r#"{"skills": ["python", "rust"], "years_experience": 4}"#)
            .unwrap();

        assert_eq!(attrs.skills, vec!["python", "rust"]);
        assert_eq!(attrs.years_experience, Some(4));
    }

    #[test]
    fn test_missing_years_is_none() {
        let extractor = StructuredExtractor::new();
        let attrs = extractor.extract(r#"{"skills": []}"#).unwrap();

        assert!(attrs.skills.is_empty());
        assert_eq!(attrs.years_experience, None);
    }

    #[test]
    fn test_non_numeric_years_fails_fast() {
        let extractor = StructuredExtractor::new();
        let result = extractor.extract(r#"{"skills": [], "years_experience": "five"}"#);
        assert!(matches!(result, Err(TalentFitError::InvalidInput(_))));
    }

    #[test]
    fn test_negative_years_fails_fast() {
        let extractor = StructuredExtractor::new();
        let result = extractor.extract(r#"{"skills": [], "years_experience": -2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_skills_fail_fast() {
        let extractor = StructuredExtractor::new();
        let result = extractor.extract(r#"{"skills": [1, 2, 3]}"#);
        assert!(matches!(result, Err(TalentFitError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let extractor = StructuredExtractor::new();
        let result = extractor.extract(r#"{"skills": [], "skilz": ["typo"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_same_contract_as_heuristic_path() {
        use crate::extraction::HeuristicExtractor;
        use crate::scoring;

        let structured = StructuredExtractor::new()
            .extract(r#"{"skills": ["python", "docker"], "years_experience": 6}"#)
            .unwrap();
        let heuristic = HeuristicExtractor::new()
            .unwrap()
            .extract("Python and Docker, 6 years of experience")
            .unwrap();

        assert_eq!(structured, heuristic);

        // identical attributes must score identically regardless of provenance
        let job = ExtractedAttributes {
            skills: vec!["python".to_string()],
            years_experience: Some(5),
        };
        assert_eq!(
            scoring::score(&job, &structured),
            scoring::score(&job, &heuristic)
        );
    }
}
