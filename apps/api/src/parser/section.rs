//! Section Locator — finds where a named section starts and ends inside
//! free-form résumé text, and normalizes the slice into clean lines.
//!
//! Résumés carry no machine-readable structure, so the end of a section is
//! approximated by the nearest heading of any *other* section. A missing
//! section is a normal outcome, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::lexicon::Section;

/// Offset past the found heading before end-boundary scanning begins, so a
/// section is never terminated inside its own heading phrase.
const HEADING_SCAN_BUFFER: usize = 20;

/// A located section: byte offsets into the document plus its cleaned lines.
#[derive(Debug, Clone)]
pub struct SectionSlice {
    pub start: usize,
    pub end: usize,
    pub lines: Vec<String>,
}

struct HeadingPatterns {
    section: Section,
    /// Synonym anchored on a word boundary and immediately followed by a
    /// colon or line break ("Skills:" / "Skills\n").
    strict: Vec<Regex>,
    /// Bare case-insensitive synonym, for the lenient fallback.
    plain: Vec<Regex>,
    /// Synonym at the start of a line, for end-boundary scanning.
    line_start: Vec<Regex>,
}

// Indexed by `Section as usize` (declaration order of Section::ALL).
static HEADING_PATTERNS: Lazy<Vec<HeadingPatterns>> = Lazy::new(|| {
    Section::ALL
        .iter()
        .map(|&section| {
            let synonyms = section.synonyms();
            HeadingPatterns {
                section,
                strict: synonyms
                    .iter()
                    .map(|s| compile(&format!(r"(?i)\b{}[:\r\n]", regex::escape(s))))
                    .collect(),
                plain: synonyms
                    .iter()
                    .map(|s| compile(&format!(r"(?i){}", regex::escape(s))))
                    .collect(),
                line_start: synonyms
                    .iter()
                    .map(|s| compile(&format!(r"(?mi)^[ \t]*{}", regex::escape(s))))
                    .collect(),
            }
        })
        .collect()
});

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("lexicon heading pattern must compile")
}

/// Locates `section` inside `document`. Returns `None` when the résumé
/// simply does not contain that section.
pub fn locate(document: &str, section: Section) -> Option<SectionSlice> {
    let patterns = &HEADING_PATTERNS[section as usize];
    let start = find_start(document, patterns)?;
    let end = find_end(document, section, start);
    let lines = normalize_lines(&document[start..end], section);
    Some(SectionSlice { start, end, lines })
}

/// Strict search first (heading followed by a colon or line break), then a
/// lenient substring fallback. Synonym order is the tie-break: the first
/// synonym that matches anywhere wins, not the earliest offset.
fn find_start(document: &str, patterns: &HeadingPatterns) -> Option<usize> {
    for re in &patterns.strict {
        if let Some(m) = re.find(document) {
            return Some(m.start());
        }
    }
    for re in &patterns.plain {
        if let Some(m) = re.find(document) {
            return Some(m.start());
        }
    }
    None
}

/// Nearest start-of-line heading of any other section at or past the scan
/// buffer. Own synonyms are excluded so a repeated internal mention of the
/// section's heading never terminates it.
fn find_end(document: &str, section: Section, start: usize) -> usize {
    let scan_from = start.saturating_add(HEADING_SCAN_BUFFER);
    let mut end = document.len();
    for patterns in HEADING_PATTERNS.iter() {
        if patterns.section == section {
            continue;
        }
        for re in &patterns.line_start {
            if let Some(m) = re.find_iter(document).find(|m| m.start() >= scan_from) {
                end = end.min(m.start());
            }
        }
    }
    end
}

/// Trimmed, non-empty lines of the slice, with the heading line stripped
/// when the first line textually contains one of the section's synonyms.
fn normalize_lines(slice: &str, section: Section) -> Vec<String> {
    let mut lines: Vec<String> = slice
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(first) = lines.first() {
        let lowered = first.to_lowercase();
        if section.synonyms().iter().any(|s| lowered.contains(s)) {
            lines.remove(0);
        }
    }
    lines
}
