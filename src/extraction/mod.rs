//! Structured attribute extraction from free text
//!
//! Extraction strategies are interchangeable providers behind one contract:
//! the scoring engine consumes [`ExtractedAttributes`] and behaves
//! identically regardless of how they were produced.

pub mod heuristic;
pub mod structured;

use crate::error::Result;
use serde::{Deserialize, Serialize};

pub use heuristic::{CandidateProfile, HeuristicExtractor, JobPosting};
pub use structured::StructuredExtractor;

/// The stable data contract every extraction strategy must satisfy before
/// anything reaches the scorer. For a job this is the required skill set and
/// required years; for a candidate it is the possessed skills and years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedAttributes {
    pub skills: Vec<String>,
    pub years_experience: Option<u32>,
}

/// An extraction strategy. Implementations must be deterministic for a given
/// input text; failures are boundary errors (malformed input), never scoring
/// decisions.
pub trait AttributeExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedAttributes>;
}
