//! Education Segmenter — groups education-section lines into one record per
//! detected degree line.
//!
//! A degree-keyword line opens a new entry; follower lines fill the empty
//! sub-fields first-match-wins (university keyword, then a 4-digit period,
//! then a comma-and-no-digit location). Unmatched follower lines are
//! dropped: education sections carry no narrative worth keeping.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::EducationEntry;

const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "bsc",
    "msc",
    "phd",
    "diploma",
    "degree",
    "certificate",
    "foundation",
];

const UNIVERSITY_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "polytechnic",
    "school",
    "academy",
];

// Looser than the calendar-year pattern in the experience segmenter: a
// period line may carry any four-digit run ("Batch 0042").
static FOUR_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}").expect("period pattern must compile"));

/// Segments education-section lines into sealed entries.
pub fn segment_education(lines: &[String]) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut current: Option<EducationEntry> = None;

    for line in lines {
        let lowered = line.to_lowercase();

        if DEGREE_KEYWORDS.iter().any(|k| lowered.contains(k)) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(EducationEntry {
                course: line.clone(),
                ..EducationEntry::default()
            });
            continue;
        }

        // Follower lines only classify while an entry is open.
        let Some(entry) = current.as_mut() else {
            continue;
        };

        if entry.university.is_empty() && UNIVERSITY_KEYWORDS.iter().any(|k| lowered.contains(k))
        {
            entry.university = line.clone();
        } else if entry.period.is_empty() && FOUR_DIGIT_RE.is_match(line) {
            entry.period = line.clone();
        } else if entry.location.is_empty()
            && line.contains(',')
            && !line.chars().any(|c| c.is_ascii_digit())
        {
            entry.location = line.clone();
        }
    }

    if let Some(entry) = current {
        entries.push(entry);
    }
    entries
}
