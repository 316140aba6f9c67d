//! Weighted fit scoring combining skill and experience matches

use crate::extraction::ExtractedAttributes;
use crate::scoring::experience::match_experience;
use crate::scoring::skills::{match_skills, MatchResult};
use serde::{Deserialize, Serialize};

/// Fixed design constants. The 70/30 split is part of the scoring contract
/// and deliberately not configurable.
const SKILL_WEIGHT: f32 = 0.7;
const EXPERIENCE_WEIGHT: f32 = 0.3;

/// Number of skills listed before the reasoning narrative truncates.
const REASONING_SKILL_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Weighted fit score in [0, 1]
    pub fit_score: f32,
    /// How well the underlying data supports the score, in [0.3, 1.0]
    pub confidence: f32,
    /// Human-readable explanation of the score
    pub reasoning: String,
    pub details: FitDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitDetails {
    pub skill_score: f32,
    pub experience_score: f32,
    pub skill_details: MatchResult,
    pub experience_reason: String,
}

/// Compute the overall fit between a job's requirements and a candidate's
/// attributes.
///
/// Missing or partial data never fails: absent skills and absent years are
/// scored edge cases that degrade the score and confidence instead. Given
/// identical inputs the function returns bit-identical results.
pub fn score(job: &ExtractedAttributes, candidate: &ExtractedAttributes) -> FitResult {
    let skill_result = match_skills(&job.skills, &candidate.skills);
    let skill_score = skill_result.match_ratio;

    let experience_result = match_experience(job.years_experience, candidate.years_experience);
    let experience_score = experience_result.score;

    let fit_score =
        (skill_score * SKILL_WEIGHT + experience_score * EXPERIENCE_WEIGHT).clamp(0.0, 1.0);

    let confidence = calculate_confidence(job, candidate, fit_score);
    let reasoning = build_reasoning(&skill_result, &experience_result.explanation);

    FitResult {
        fit_score,
        confidence,
        reasoning,
        details: FitDetails {
            skill_score,
            experience_score,
            skill_details: skill_result,
            experience_reason: experience_result.explanation,
        },
    }
}

/// Confidence starts from data-completeness indicators and is then nudged by
/// match quality. The 0.3 floor only applies to the downward adjustment;
/// together with the indicator weights it keeps confidence in [0.3, 1.0].
fn calculate_confidence(
    job: &ExtractedAttributes,
    candidate: &ExtractedAttributes,
    fit_score: f32,
) -> f32 {
    let mut confidence: f32 = 0.0;
    let mut any_factor = false;

    if !job.skills.is_empty() {
        confidence += 0.3;
        any_factor = true;
    }
    if !candidate.skills.is_empty() {
        confidence += 0.3;
        any_factor = true;
    }
    if job.years_experience.is_some() {
        confidence += 0.2;
        any_factor = true;
    }
    if candidate.years_experience.is_some() {
        confidence += 0.2;
        any_factor = true;
    }

    // No data at all falls back to a neutral midpoint, not zero
    if !any_factor {
        confidence = 0.5;
    }

    if fit_score >= 0.8 {
        confidence = (confidence + 0.2).min(1.0);
    } else if fit_score >= 0.6 {
        confidence = (confidence + 0.1).min(1.0);
    } else if fit_score < 0.4 {
        confidence = (confidence - 0.1).max(0.3);
    }

    confidence
}

fn build_reasoning(skill_result: &MatchResult, experience_explanation: &str) -> String {
    let mut parts = Vec::new();

    if !skill_result.matched.is_empty() {
        parts.push(format!(
            "Matched {}/{} required skills: {}",
            skill_result.match_count,
            skill_result.total_required,
            skill_result
                .matched
                .iter()
                .take(REASONING_SKILL_LIMIT)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    } else {
        parts.push("No matching skills found".to_string());
    }

    if !skill_result.unmatched.is_empty() {
        parts.push(format!(
            "Missing skills: {}",
            skill_result
                .unmatched
                .iter()
                .take(REASONING_SKILL_LIMIT)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    parts.push(experience_explanation.to_string());

    parts.join(". ")
}
