//! Regex and keyword-scan based attribute extraction

use crate::error::{Result, TalentFitError};
use crate::extraction::{AttributeExtractor, ExtractedAttributes};
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Candidate contact and background details extracted alongside the
/// scoring attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub education: Vec<String>,
    pub attributes: ExtractedAttributes,
}

/// Job posting details extracted alongside the scoring attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub employment_type: Option<String>,
    pub attributes: ExtractedAttributes,
}

/// Heuristic extractor: a case-insensitive keyword scan for skills plus
/// regex patterns for years of experience and profile details.
pub struct HeuristicExtractor {
    skill_matcher: AhoCorasick,
    skill_keywords: Vec<String>,
    experience_patterns: Vec<Regex>,
    email_pattern: Regex,
    phone_pattern: Regex,
    linkedin_pattern: Regex,
    salary_pattern: Regex,
    labeled_patterns: Vec<(&'static str, Regex)>,
}

/// Skills recognized by the default keyword scan.
const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "c#",
    "react",
    "angular",
    "vue",
    "node.js",
    "django",
    "flask",
    "fastapi",
    "postgresql",
    "mysql",
    "mongodb",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "linux",
    "agile",
    "scrum",
    "machine learning",
    "data science",
    "sql",
    "nosql",
    "redis",
    "graphql",
    "rest api",
    "microservices",
    "devops",
    "ci/cd",
];

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "degree", "diploma", "b.sc", "m.sc", "b.s.", "m.s.",
];

const EMPLOYMENT_TYPES: &[&str] =
    &["full-time", "part-time", "contract", "internship", "freelance"];

impl HeuristicExtractor {
    pub fn new() -> Result<Self> {
        Self::with_custom_skills(Vec::new())
    }

    /// Create an extractor that also recognizes the given extra skills.
    pub fn with_custom_skills(additional_skills: Vec<String>) -> Result<Self> {
        let mut skill_keywords: Vec<String> =
            SKILL_KEYWORDS.iter().map(|s| s.to_string()).collect();
        skill_keywords.extend(additional_skills);

        // Standard match kind so overlapping hits are reported; the scan is
        // substring-based, so "sql" inside "postgresql" counts as both.
        let skill_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::Standard)
            .build(&skill_keywords)
            .map_err(|e| {
                TalentFitError::Extraction(format!("Failed to build skill matcher: {}", e))
            })?;

        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                TalentFitError::Extraction(format!("Invalid pattern '{}': {}", pattern, e))
            })
        };

        Ok(Self {
            skill_matcher,
            skill_keywords,
            experience_patterns: vec![
                compile(r"(\d+)\+?\s*years?\s*(?:of\s*)?experience")?,
                compile(r"experience[:\s]+(\d+)\+?\s*years?")?,
            ],
            email_pattern: compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?,
            phone_pattern: compile(r"\+?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}")?,
            linkedin_pattern: compile(r"linkedin\.com/in/[\w-]+")?,
            salary_pattern: compile(
                r"\$?(\d{1,3}(?:,\d{3})*(?:k|K)?)\s*[-–]\s*\$?(\d{1,3}(?:,\d{3})*(?:k|K)?)",
            )?,
            labeled_patterns: vec![
                ("company", compile(r"(?i)company[:\s]+([^\n]+)")?,),
                ("location", compile(r"(?i)location[:\s]+([^\n]+)")?,),
            ],
        })
    }

    /// Scan text for known skill keywords. Matches are substring-based and
    /// case-insensitive; each skill is reported once, in keyword-table order.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut found: Vec<usize> = Vec::new();

        for mat in self.skill_matcher.find_overlapping_iter(text) {
            let id = mat.pattern().as_usize();
            if seen.insert(id) {
                found.push(id);
            }
        }

        found.sort_unstable();
        found
            .into_iter()
            .map(|id| self.skill_keywords[id].clone())
            .collect()
    }

    /// Extract years of experience. The first pattern that matches anything
    /// wins; the largest number among its matches is taken.
    pub fn extract_years(&self, text: &str) -> Option<u32> {
        let text_lower = text.to_lowercase();
        for pattern in &self.experience_patterns {
            let years = pattern
                .captures_iter(&text_lower)
                .filter_map(|cap| cap.get(1))
                .filter_map(|m| m.as_str().parse::<u32>().ok())
                .max();
            if years.is_some() {
                return years;
            }
        }
        None
    }

    /// Parse a resume into a full candidate profile.
    pub fn extract_candidate_profile(&self, text: &str) -> Result<CandidateProfile> {
        let text_lower = text.to_lowercase();

        let email = self
            .email_pattern
            .find(text)
            .map(|m| m.as_str().to_string());
        let phone = self
            .phone_pattern
            .find(text)
            .map(|m| m.as_str().to_string());
        let linkedin_url = self
            .linkedin_pattern
            .find(&text_lower)
            .map(|m| format!("https://{}", m.as_str()));

        let education = self.extract_education(text);
        let (first_name, last_name) = extract_name_candidates(text);

        Ok(CandidateProfile {
            email,
            phone,
            linkedin_url,
            first_name,
            last_name,
            education,
            attributes: self.extract(text)?,
        })
    }

    /// Parse a job description into a full posting.
    pub fn extract_job_posting(&self, text: &str) -> Result<JobPosting> {
        let title = text
            .lines()
            .next()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| "Untitled Position".to_string());

        let mut company = None;
        let mut location = None;
        for (label, pattern) in &self.labeled_patterns {
            if let Some(cap) = pattern.captures(text) {
                let value = cap[1].trim().to_string();
                match *label {
                    "company" => company = Some(value),
                    "location" => location = Some(value),
                    _ => {}
                }
            }
        }

        let (salary_min, salary_max) = self.extract_salary_range(text);

        let text_lower = text.to_lowercase();
        let employment_type = EMPLOYMENT_TYPES
            .iter()
            .find(|t| text_lower.contains(*t))
            .map(|t| t.to_string());

        Ok(JobPosting {
            title,
            company,
            location,
            salary_min,
            salary_max,
            employment_type,
            attributes: self.extract(text)?,
        })
    }

    fn extract_education(&self, text: &str) -> Vec<String> {
        let lines: Vec<&str> = text.lines().collect();
        let mut education = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let line_lower = line.to_lowercase();
            if EDUCATION_KEYWORDS.iter().any(|k| line_lower.contains(k)) {
                // keep one line of context on either side
                let start = i.saturating_sub(1);
                let end = (i + 2).min(lines.len());
                let context = lines[start..end].join(" ");
                education.push(context.trim().to_string());
            }
            if education.len() == 3 {
                break;
            }
        }

        education
    }

    fn extract_salary_range(&self, text: &str) -> (Option<u32>, Option<u32>) {
        let text_lower = text.to_lowercase();
        if let Some(cap) = self.salary_pattern.captures(&text_lower) {
            let min = parse_salary(&cap[1]);
            let max = parse_salary(&cap[2]);
            if min.is_some() && max.is_some() {
                return (min, max);
            }
        }
        (None, None)
    }
}

impl AttributeExtractor for HeuristicExtractor {
    fn extract(&self, text: &str) -> Result<ExtractedAttributes> {
        Ok(ExtractedAttributes {
            skills: self.extract_skills(text),
            years_experience: self.extract_years(text),
        })
    }
}

/// The first non-empty line usually carries the candidate's name.
fn extract_name_candidates(text: &str) -> (String, String) {
    let first_line = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    let parts: Vec<&str> = first_line.split_whitespace().collect();

    let first_name = parts.first().map(|s| s.to_string()).unwrap_or_else(|| "Unknown".to_string());
    let last_name = if parts.len() > 1 {
        parts.last().map(|s| s.to_string()).unwrap_or_default()
    } else {
        String::new()
    };

    (first_name, last_name)
}

/// Parse "120,000", "$120,000" or "120k" style salary figures.
fn parse_salary(raw: &str) -> Option<u32> {
    let cleaned = raw.replace(',', "").replace('$', "");
    if let Some(stripped) = cleaned.strip_suffix(|c| c == 'k' || c == 'K') {
        stripped
            .parse::<u32>()
            .ok()
            .and_then(|v| v.checked_mul(1000))
    } else {
        cleaned.parse::<u32>().ok()
    }
}
