//! Skill Tokenizer — decomposes a skills section into discrete skill tokens.
//!
//! Splitting is parenthesis-aware: inside parentheses nothing splits, so a
//! phrase like "Microsoft (Excel, Word)" survives as one token.

use std::collections::BTreeSet;

use crate::parser::experience::{JOB_TITLE_RE, YEAR_RE};

/// Tokens longer than this are almost certainly sentences, not skills.
const MAX_SKILL_CHARS: usize = 40;

/// Generic section nouns and function words that sneak in as tokens.
/// Compared by lowercased equality.
const STOP_WORDS: &[&str] = &[
    "skills",
    "skill",
    "technologies",
    "technology",
    "knowledge",
    "include",
    "includes",
    "including",
    "following",
    "tools",
    "summary",
    "expertise",
    "various",
    "other",
    "and",
    "or",
    "the",
    "of",
    "in",
    "with",
    "etc",
];

/// Tokenizes the skills section's lines into a set of skill strings.
/// Duplicates collapse by exact string equality after trimming.
pub fn tokenize_skills(lines: &[String]) -> BTreeSet<String> {
    let text = lines.join("\n");

    let mut raw = Vec::new();
    let mut current = String::new();
    let mut depth: u32 = 0;

    for c in text.chars() {
        match c {
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                // Clamped at zero so a stray ')' cannot lock splitting off.
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if depth == 0 && is_delimiter(c) => raw.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    raw.push(current);

    raw.iter()
        .map(|t| t.trim())
        .filter(|t| keep(t))
        .map(str::to_string)
        .collect()
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ',' | '.' | ';' | ':' | '|' | '/' | '•' | '·' | '●' | '▪' | '\n')
}

fn keep(token: &str) -> bool {
    let len = token.chars().count();
    if len <= 1 || len > MAX_SKILL_CHARS {
        return false;
    }
    if token.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let lowered = token.to_lowercase();
    if STOP_WORDS.contains(&lowered.as_str()) {
        return false;
    }
    // URLs and year fragments are leftovers of contact or date lines.
    if looks_like_url(&lowered) || YEAR_RE.is_match(token) {
        return false;
    }
    // A job-title keyword means a misattributed heading line, not a skill.
    if JOB_TITLE_RE.is_match(token) {
        return false;
    }
    true
}

fn looks_like_url(lowered: &str) -> bool {
    lowered.contains("http")
        || lowered.contains("www.")
        || [".com", ".org", ".net", ".io"]
            .iter()
            .any(|tld| lowered.ends_with(tld))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_comma_inside_parentheses_never_splits() {
        let skills = tokenize_skills(&lines(&["Microsoft (Excel, Word), Python"]));
        let expected: BTreeSet<String> = ["Microsoft (Excel, Word)", "Python"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_splits_on_all_delimiters() {
        let skills = tokenize_skills(&lines(&["Python; Java / Go | Rust: C++", "SQL"]));
        for skill in ["Python", "Java", "Go", "Rust", "C++", "SQL"] {
            assert!(skills.contains(skill), "missing {skill}: {skills:?}");
        }
        assert_eq!(skills.len(), 6);
    }

    #[test]
    fn test_splits_on_bullet_glyphs() {
        let skills = tokenize_skills(&lines(&["• Python • Java · Go"]));
        assert_eq!(skills.len(), 3);
        assert!(skills.contains("Go"));
    }

    #[test]
    fn test_filters_noise_tokens() {
        let skills = tokenize_skills(&lines(&[
            "skills, Python, 123, a, www.example.com, 2019, etc",
        ]));
        let expected: BTreeSet<String> = ["Python".to_string()].into_iter().collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_filters_overlong_tokens() {
        let long = "a phrase that rambles on far past the forty character budget";
        let skills = tokenize_skills(&lines(&[&format!("Python, {long}")]));
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("Python"));
    }

    #[test]
    fn test_filters_job_title_fragments() {
        let skills = tokenize_skills(&lines(&["Project Manager, Python"]));
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("Python"));
    }

    #[test]
    fn test_duplicates_collapse_by_exact_equality() {
        let skills = tokenize_skills(&lines(&["Python, Java, Python"]));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_stray_close_paren_does_not_disable_splitting() {
        let skills = tokenize_skills(&lines(&["Excel), Python, Java"]));
        assert!(skills.contains("Python"));
        assert!(skills.contains("Java"));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(tokenize_skills(&[]).is_empty());
        assert!(tokenize_skills(&lines(&["", "  "])).is_empty());
    }
}
