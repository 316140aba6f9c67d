//! Score report envelope for persistence and rendering

use crate::extraction::ExtractedAttributes;
use crate::scoring::FitResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a caller needs to persist or audit a scoring run: the inputs
/// as the engine saw them, the full result, and when it was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub job_path: String,
    pub candidate_path: String,
    pub job: ExtractedAttributes,
    pub candidate: ExtractedAttributes,
    pub result: FitResult,
}

impl ScoreReport {
    pub fn new(
        job_path: String,
        candidate_path: String,
        job: ExtractedAttributes,
        candidate: ExtractedAttributes,
        result: FitResult,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            job_path,
            candidate_path,
            job,
            candidate,
            result,
        }
    }

    /// Coarse verdict used by formatters for labeling and coloring.
    pub fn verdict(&self) -> Verdict {
        match self.result.fit_score {
            s if s >= 0.8 => Verdict::Strong,
            s if s >= 0.6 => Verdict::Good,
            s if s >= 0.4 => Verdict::Fair,
            _ => Verdict::Weak,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Strong,
    Good,
    Fair,
    Weak,
}

impl Verdict {
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Strong => "Strong fit",
            Verdict::Good => "Good fit",
            Verdict::Fair => "Fair fit",
            Verdict::Weak => "Weak fit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;

    fn report_with_fit(job_skills: &[&str], candidate_skills: &[&str]) -> ScoreReport {
        let job = ExtractedAttributes {
            skills: job_skills.iter().map(|s| s.to_string()).collect(),
            years_experience: Some(3),
        };
        let candidate = ExtractedAttributes {
            skills: candidate_skills.iter().map(|s| s.to_string()).collect(),
            years_experience: Some(5),
        };
        let result = scoring::score(&job, &candidate);
        ScoreReport::new("job.txt".into(), "resume.txt".into(), job, candidate, result)
    }

    #[test]
    fn test_verdict_thresholds() {
        // full match: fit 1.0
        let report = report_with_fit(&["python"], &["python"]);
        assert_eq!(report.verdict(), Verdict::Strong);

        // no skills matched, experience met: fit 0.3
        let report = report_with_fit(&["cobol"], &["python"]);
        assert_eq!(report.verdict(), Verdict::Weak);
    }

    #[test]
    fn test_report_serializes() {
        let report = report_with_fit(&["python"], &["python"]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("fit_score"));
        assert!(json.contains("generated_at"));
    }
}
