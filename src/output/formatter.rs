//! Output formatters: console, JSON, and markdown

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{ScoreReport, Verdict};
use colored::{Color, Colorize};

/// Trait for rendering score reports into a displayable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String>;
}

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping results into other tooling.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for written reports.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn verdict_color(verdict: Verdict) -> Color {
        match verdict {
            Verdict::Strong => Color::Green,
            Verdict::Good => Color::Cyan,
            Verdict::Fair => Color::Yellow,
            Verdict::Weak => Color::Red,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let mut out = String::new();
        let result = &report.result;
        let verdict = report.verdict();

        out.push_str("Candidate Fit Report\n");
        out.push_str("====================\n\n");
        out.push_str(&format!("Job:       {}\n", report.job_path));
        out.push_str(&format!("Candidate: {}\n\n", report.candidate_path));

        let headline = format!(
            "{} — fit {:.1}%, confidence {:.1}%",
            verdict.label(),
            result.fit_score * 100.0,
            result.confidence * 100.0
        );
        out.push_str(&self.paint(&headline, Self::verdict_color(verdict)));
        out.push('\n');

        out.push_str(&format!(
            "\nSkill match:      {:.1}% ({}/{} required skills)\n",
            result.details.skill_score * 100.0,
            result.details.skill_details.match_count,
            result.details.skill_details.total_required
        ));
        out.push_str(&format!(
            "Experience match: {:.1}% ({})\n",
            result.details.experience_score * 100.0,
            result.details.experience_reason
        ));

        out.push_str(&format!("\nReasoning: {}\n", result.reasoning));

        if self.detailed {
            let skills = &result.details.skill_details;
            if !skills.matched.is_empty() {
                out.push_str(&format!("\nMatched skills:  {}\n", skills.matched.join(", ")));
            }
            if !skills.unmatched.is_empty() {
                out.push_str(&format!("Missing skills:  {}\n", skills.unmatched.join(", ")));
            }
            out.push_str(&format!(
                "\nCandidate skills on file: {}\n",
                if report.candidate.skills.is_empty() {
                    "(none)".to_string()
                } else {
                    report.candidate.skills.join(", ")
                }
            ));
            out.push_str(&format!("Generated at: {}\n", report.generated_at));
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScoreReport) -> Result<String> {
        let result = &report.result;
        let skills = &result.details.skill_details;
        let mut out = String::new();

        out.push_str("# Candidate Fit Report\n\n");
        out.push_str(&format!("- **Job**: `{}`\n", report.job_path));
        out.push_str(&format!("- **Candidate**: `{}`\n", report.candidate_path));
        out.push_str(&format!("- **Generated**: {}\n\n", report.generated_at));

        out.push_str(&format!(
            "## {} — {:.1}%\n\n",
            report.verdict().label(),
            result.fit_score * 100.0
        ));
        out.push_str(&format!("Confidence: {:.1}%\n\n", result.confidence * 100.0));

        out.push_str("| Component | Score |\n|---|---|\n");
        out.push_str(&format!(
            "| Skills (70%) | {:.1}% |\n",
            result.details.skill_score * 100.0
        ));
        out.push_str(&format!(
            "| Experience (30%) | {:.1}% |\n\n",
            result.details.experience_score * 100.0
        ));

        if !skills.matched.is_empty() {
            out.push_str(&format!("**Matched skills**: {}\n\n", skills.matched.join(", ")));
        }
        if !skills.unmatched.is_empty() {
            out.push_str(&format!("**Missing skills**: {}\n\n", skills.unmatched.join(", ")));
        }

        out.push_str(&format!("> {}\n", result.reasoning));

        Ok(out)
    }
}

/// Pick the formatter for a requested output format.
pub fn formatter_for(
    format: &OutputFormat,
    use_colors: bool,
    detailed: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
    }
}
