//! Skill name normalization for comparison

/// How a replacement rule is applied to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleKind {
    /// Replace every occurrence of the pattern anywhere in the string.
    Substring,
    /// Replace only when the whole string equals the pattern. Used for the
    /// two-letter aliases that would otherwise mangle unrelated skills
    /// ("ai" inside "fastapi").
    WholeString,
}

/// Ordered replacement table. Order matters: each rule sees the string as
/// left by the rules before it, so "postgres sql" can never fire after
/// "postgres" has already rewritten its prefix.
const REPLACEMENTS: &[(&str, &str, RuleKind)] = &[
    ("nodejs", "node.js", RuleKind::Substring),
    ("node js", "node.js", RuleKind::Substring),
    ("reactjs", "react", RuleKind::Substring),
    ("react js", "react", RuleKind::Substring),
    ("vuejs", "vue", RuleKind::Substring),
    ("vue js", "vue", RuleKind::Substring),
    ("angularjs", "angular", RuleKind::Substring),
    ("angular js", "angular", RuleKind::Substring),
    ("postgres", "postgresql", RuleKind::Substring),
    ("postgres sql", "postgresql", RuleKind::Substring),
    ("mongo", "mongodb", RuleKind::Substring),
    ("mongo db", "mongodb", RuleKind::Substring),
    ("ai", "machine learning", RuleKind::WholeString),
    ("ml", "machine learning", RuleKind::WholeString),
];

/// Normalize a skill name so that equivalent skills expressed differently
/// compare equal ("Postgres" and "PostgreSQL", "ReactJS" and "react").
///
/// Lower-cases and trims the input, then applies the replacement table once
/// per rule, in order. A self-expanding rule is skipped when the string
/// already contains its replacement, which keeps the function idempotent:
/// `normalize(normalize(s)) == normalize(s)` for all inputs.
pub fn normalize(skill: &str) -> String {
    let mut skill = skill.trim().to_lowercase();
    for (pattern, replacement, kind) in REPLACEMENTS {
        match kind {
            RuleKind::Substring => {
                // A self-expanding rule (its replacement contains its own
                // pattern, like postgres -> postgresql) would re-fire on its
                // own output; skip it when the replacement is already there.
                let self_expanding = replacement.contains(pattern);
                if skill.contains(pattern) && !(self_expanding && skill.contains(replacement)) {
                    skill = skill.replace(pattern, replacement);
                }
            }
            RuleKind::WholeString => {
                if skill == *pattern {
                    skill = (*replacement).to_string();
                }
            }
        }
    }
    skill
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  Python  "), "python");
        assert_eq!(normalize("PostgreSQL"), "postgresql");
    }

    #[test]
    fn test_synonym_replacements() {
        assert_eq!(normalize("NodeJS"), "node.js");
        assert_eq!(normalize("node js"), "node.js");
        assert_eq!(normalize("reactjs"), "react");
        assert_eq!(normalize("React JS"), "react");
        assert_eq!(normalize("vuejs"), "vue");
        assert_eq!(normalize("angularjs"), "angular");
        assert_eq!(normalize("postgres"), "postgresql");
        assert_eq!(normalize("mongo"), "mongodb");
    }

    #[test]
    fn test_short_aliases_whole_string_only() {
        assert_eq!(normalize("AI"), "machine learning");
        assert_eq!(normalize("ml"), "machine learning");
        // "ai" inside a longer skill must not be rewritten
        assert_eq!(normalize("fastapi"), "fastapi");
        assert_eq!(normalize("email marketing"), "email marketing");
        // "ml" inside a longer skill must not be rewritten
        assert_eq!(normalize("html"), "html");
    }

    #[test]
    fn test_non_self_expanding_rules_always_fire() {
        // "react" is a substring of "reactjs": the idempotence skip must not
        // suppress rules whose pattern merely contains the replacement
        assert_eq!(normalize("reactjs"), "react");
        assert_eq!(normalize("React JS"), "react");
        assert_eq!(normalize("vuejs"), "vue");
        assert_eq!(normalize("angularjs"), "angular");
        assert_eq!(normalize("angular js"), "angular");
    }

    #[test]
    fn test_self_expanding_rules_skip_when_expanded() {
        // postgres -> postgresql must not re-fire on its own output
        assert_eq!(normalize("postgresql"), "postgresql");
        assert_eq!(normalize("mongodb"), "mongodb");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "Python",
            "nodejs",
            "postgres",
            "PostgreSQL",
            "mongo",
            "mongodb",
            "AI",
            "fastapi",
            "react js",
            "",
            "  C++  ",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_substring_inside_larger_skill() {
        // substring rules do fire inside longer names
        assert_eq!(normalize("nodejs developer"), "node.js developer");
        assert_eq!(normalize("postgres admin"), "postgresql admin");
    }
}
