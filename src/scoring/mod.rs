//! Deterministic matching and scoring engine
//!
//! Pure, stateless computation: safe to call concurrently, no I/O, no shared
//! state. Callers fan out scoring across (job, candidate) pairs freely.

pub mod experience;
pub mod fit;
pub mod normalizer;
pub mod skills;

pub use experience::{match_experience, ExperienceResult};
pub use fit::{score, FitDetails, FitResult};
pub use normalizer::normalize;
pub use skills::{match_skills, MatchResult};
