//! Experience Segmenter — groups experience-section lines into one record
//! per detected job-title line.
//!
//! Experience sections are the most free-form part of a résumé, so each line
//! is classified by a set of signals first, then run through transition
//! rules in a fixed priority order: new entry, duration, company/location,
//! free-text content. Unclassified lines always fall through to content,
//! biasing toward over-inclusion in the narrative rather than mis-labeling
//! narrative as structure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ExperienceEntry;

/// Structural header lines (title, company, duration) are short; anything
/// at or past this length is narrative.
const SHORT_LINE_MAX_CHARS: usize = 100;

/// Whole-word keywords marking a line as job-title-shaped. Shared with the
/// skill tokenizer, which uses them to reject misattributed heading lines.
const JOB_TITLE_KEYWORDS: &[&str] = &[
    "manager",
    "engineer",
    "developer",
    "consultant",
    "analyst",
    "intern",
    "director",
    "executive",
    "assistant",
    "lead",
    "specialist",
    "officer",
    "designer",
    "architect",
    "administrator",
    "coordinator",
    "technician",
];

/// Company-name suffix abbreviations: the whitelisted exception to the
/// "ends with a period means sentence" rule ("Acme Corp." is a header).
const COMPANY_SUFFIXES: &[&str] = &[
    "inc.", "ltd.", "llc.", "llc", "corp.", "co.", "plc.", "gmbh", "pte.", "pvt.", "bhd.",
    "s.a.",
];

/// Action verbs opening narrative bullet lines; a line starting with one is
/// never reclassified as a header.
const ACTION_VERBS: &[&str] = &[
    "developed",
    "managed",
    "led",
    "created",
    "built",
    "designed",
    "implemented",
    "improved",
    "increased",
    "reduced",
    "delivered",
    "collaborated",
    "coordinated",
    "maintained",
    "supported",
    "analyzed",
    "conducted",
    "organized",
    "achieved",
    "worked",
    "responsible",
    "assisted",
    "handled",
    "performed",
    "oversaw",
    "drove",
    "spearheaded",
];

/// Calendar-year pattern shared by the date signal here and the skill
/// tokenizer's noise filter.
pub(crate) const YEAR_PATTERN: &str = r"(19|20)\d{2}";

pub(crate) static YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b{YEAR_PATTERN}\b")).expect("year pattern must compile")
});

pub(crate) static JOB_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = JOB_TITLE_KEYWORDS.join("|");
    Regex::new(&format!(r"(?i)\b({alternation})\b")).expect("job title pattern must compile")
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b({YEAR_PATTERN}|present|current|jan(uary)?|feb(ruary)?|mar(ch)?|apr(il)?|may|jun(e)?|jul(y)?|aug(ust)?|sep(tember)?|sept|oct(ober)?|nov(ember)?|dec(ember)?)\b"
    ))
    .expect("date pattern must compile")
});

/// Per-line classification signals, computed before the transition rules run.
struct LineSignals {
    short: bool,
    sentence_like: bool,
    company_suffix: bool,
    date_like: bool,
    job_like: bool,
    narrative_like: bool,
}

fn classify(line: &str) -> LineSignals {
    let lowered = line.to_lowercase();
    LineSignals {
        short: line.chars().count() < SHORT_LINE_MAX_CHARS,
        sentence_like: line.ends_with('.'),
        company_suffix: COMPANY_SUFFIXES.iter().any(|s| lowered.ends_with(s)),
        date_like: DATE_RE.is_match(line),
        job_like: JOB_TITLE_RE.is_match(line),
        narrative_like: lowered
            .split_whitespace()
            .next()
            .is_some_and(|first| ACTION_VERBS.contains(&first)),
    }
}

/// True when the current line grammatically continues the previous one:
/// the previous line ends with a comma or "and", or lacks terminal
/// punctuation, while the open entry already holds content. Suppresses
/// header reclassification of wrapped narrative text.
fn continues_previous(previous: Option<&str>, current: Option<&OpenEntry>) -> bool {
    let Some(prev) = previous else {
        return false;
    };
    if !current.is_some_and(|e| !e.content.is_empty()) {
        return false;
    }
    let trimmed = prev.trim_end();
    let lowered = trimmed.to_lowercase();
    trimmed.ends_with(',')
        || lowered.ends_with(" and")
        || lowered == "and"
        || !matches!(trimmed.chars().last(), Some('.' | '!' | '?'))
}

/// The single mutable "current entry" slot of the state machine.
#[derive(Default)]
struct OpenEntry {
    title: String,
    company: String,
    location: String,
    duration: String,
    content: Vec<String>,
}

impl OpenEntry {
    fn with_title(title: &str) -> Self {
        OpenEntry {
            title: title.to_string(),
            ..OpenEntry::default()
        }
    }

    /// Joins content lines and backfills company from location when company
    /// never got filled. Entries with neither a title nor content are never
    /// emitted.
    fn seal(mut self) -> Option<ExperienceEntry> {
        if self.company.is_empty() && !self.location.is_empty() {
            self.company = std::mem::take(&mut self.location);
        }
        let content = self.content.join(" ");
        if self.title.is_empty() && content.is_empty() {
            return None;
        }
        Some(ExperienceEntry {
            title: self.title,
            company: self.company,
            location: self.location,
            duration: self.duration,
            content,
        })
    }
}

/// Segments experience-section lines into sealed entries.
pub fn segment_experience(lines: &[String]) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current: Option<OpenEntry> = None;
    let mut previous: Option<&str> = None;

    for line in lines {
        let signals = classify(line);
        let continuation = continues_previous(previous, current.as_ref());
        let header_ok = !signals.narrative_like && !continuation;

        if signals.short && signals.job_like && header_ok && !signals.sentence_like {
            // Rule 1: a job-title-shaped line starts a new entry.
            if let Some(sealed) = current.take().and_then(OpenEntry::seal) {
                entries.push(sealed);
            }
            current = Some(OpenEntry::with_title(line));
        } else if let Some(entry) = current.as_mut() {
            let titled = !entry.title.is_empty();
            if titled
                && signals.short
                && signals.date_like
                && header_ok
                && !signals.sentence_like
            {
                // Rule 2: duration. Dates are the least ambiguous secondary
                // signal, so they outrank company/location.
                if entry.duration.is_empty() {
                    entry.duration = line.clone();
                } else {
                    entry.duration = format!("{} | {}", entry.duration, line);
                }
            } else if titled
                && signals.short
                && !signals.date_like
                && header_ok
                && (!signals.sentence_like || signals.company_suffix)
            {
                // Rule 3: company first, then location. Sentence-like lines
                // qualify only via the company-suffix whitelist.
                if entry.company.is_empty() {
                    entry.company = line.clone();
                } else if entry.location.is_empty() {
                    entry.location = line.clone();
                } else {
                    entry.content.push(line.clone());
                }
            } else {
                // Rule 4: everything else is narrative content.
                entry.content.push(line.clone());
            }
        } else {
            // Content ahead of any title line opens an anonymous entry.
            let mut entry = OpenEntry::default();
            entry.content.push(line.clone());
            current = Some(entry);
        }

        previous = Some(line.as_str());
    }

    if let Some(sealed) = current.and_then(OpenEntry::seal) {
        entries.push(sealed);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_entry_with_all_fields() {
        let entries = segment_experience(&lines(&[
            "Software Engineer",
            "Acme Corp.",
            "2019 - Present",
            "Built scalable systems for enterprise clients.",
        ]));
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title, "Software Engineer");
        // "Acme Corp." ends with a period but the suffix whitelist wins.
        assert_eq!(entry.company, "Acme Corp.");
        assert_eq!(entry.duration, "2019 - Present");
        assert_eq!(entry.content, "Built scalable systems for enterprise clients.");
    }

    #[test]
    fn test_consecutive_titles_seal_separate_entries() {
        let entries = segment_experience(&lines(&["Software Engineer", "Product Manager"]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Software Engineer");
        assert_eq!(entries[0].content, "");
        assert_eq!(entries[1].title, "Product Manager");
    }

    #[test]
    fn test_company_then_location() {
        let entries = segment_experience(&lines(&[
            "Software Engineer",
            "Acme Corp.",
            "Kuala Lumpur",
        ]));
        assert_eq!(entries[0].company, "Acme Corp.");
        assert_eq!(entries[0].location, "Kuala Lumpur");
    }

    #[test]
    fn test_multiple_date_lines_pipe_join() {
        let entries = segment_experience(&lines(&[
            "Data Engineer",
            "Jan 2020 - Dec 2020",
            "Mar 2021 - Present",
        ]));
        assert_eq!(entries[0].duration, "Jan 2020 - Dec 2020 | Mar 2021 - Present");
    }

    #[test]
    fn test_continuation_suppresses_title_split() {
        let entries = segment_experience(&lines(&[
            "Software Engineer",
            "Worked with clients and",
            "manager teams across the region.",
        ]));
        // "manager" is job-like, but the line continues the previous one.
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].content,
            "Worked with clients and manager teams across the region."
        );
    }

    #[test]
    fn test_narrative_verb_disqualifies_header() {
        let entries = segment_experience(&lines(&[
            "Software Engineer",
            "Led a team of engineers across two offices",
        ]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, "Led a team of engineers across two offices");
    }

    #[test]
    fn test_sentence_like_title_line_is_content() {
        let entries = segment_experience(&lines(&["Worked as a software engineer."]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "");
        assert_eq!(entries[0].content, "Worked as a software engineer.");
    }

    #[test]
    fn test_long_line_with_job_keyword_is_content() {
        let long = "the engineer role covered infrastructure, deployments, monitoring, \
                    incident response and long-term capacity planning for every product team";
        let entries = segment_experience(&lines(&["Site Reliability Engineer", long]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].content, long);
    }

    #[test]
    fn test_leading_content_without_title_is_emitted() {
        let entries = segment_experience(&lines(&["Responsible for regional shipments."]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "");
        assert!(!entries[0].content.is_empty());
    }

    #[test]
    fn test_year_regex_requires_calendar_years() {
        assert!(YEAR_RE.is_match("2019 - 2021"));
        assert!(!YEAR_RE.is_match("12019"));
        assert!(!YEAR_RE.is_match("1789"));
    }

    #[test]
    fn test_empty_input_yields_no_entries() {
        assert!(segment_experience(&[]).is_empty());
    }

    #[test]
    fn test_two_full_entries() {
        let entries = segment_experience(&lines(&[
            "Software Engineer",
            "Acme Corp.",
            "2019 - 2021",
            "Shipped the billing platform.",
            "Senior Developer",
            "Globex Inc.",
            "2021 - Present",
        ]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "Acme Corp.");
        assert_eq!(entries[0].content, "Shipped the billing platform.");
        assert_eq!(entries[1].title, "Senior Developer");
        assert_eq!(entries[1].company, "Globex Inc.");
        assert_eq!(entries[1].duration, "2021 - Present");
    }
}
