//! Résumé Assembler — composes the per-section extractors into one record.
//!
//! Purely synchronous and deterministic. There are no fatal-error paths for
//! malformed input: an absent section yields an empty collection and absent
//! contact fields yield sentinel strings.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::{ResumeRecord, NOT_FOUND, UNKNOWN};
use crate::parser::education::segment_education;
use crate::parser::experience::segment_experience;
use crate::parser::lexicon::Section;
use crate::parser::section::locate;
use crate::parser::skills::tokenize_skills;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email pattern must compile")
});

/// Analyzes extracted résumé text into a structured record.
pub fn analyze(document: &str) -> ResumeRecord {
    ResumeRecord {
        name: extract_name(document),
        email: extract_email(document),
        skills: section_lines(document, Section::Skills)
            .map(|lines| tokenize_skills(&lines))
            .unwrap_or_default(),
        education: section_lines(document, Section::Education)
            .map(|lines| segment_education(&lines))
            .unwrap_or_default(),
        experience: section_lines(document, Section::Experience)
            .map(|lines| segment_experience(&lines))
            .unwrap_or_default(),
    }
}

fn section_lines(document: &str, section: Section) -> Option<Vec<String>> {
    locate(document, section).map(|slice| slice.lines)
}

fn extract_email(document: &str) -> String {
    EMAIL_RE
        .find(document)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

/// The first non-empty line is taken as the candidate name, unless it is a
/// "Resume"-style document title, in which case the second line is used.
fn extract_name(document: &str) -> String {
    let mut lines = document.lines().map(str::trim).filter(|l| !l.is_empty());
    let Some(first) = lines.next() else {
        return NOT_FOUND.to_string();
    };
    if first.to_lowercase().contains("resume") {
        lines
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN.to_string())
    } else {
        first.to_string()
    }
}
