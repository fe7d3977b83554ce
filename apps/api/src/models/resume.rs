//! Structured output of the résumé analysis engine.
//!
//! Plain serde types, immutable once returned. Missing data is represented
//! by sentinel strings or empty collections, never by errors.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Sentinel for a field that could not be located in the extracted text.
pub const NOT_FOUND: &str = "Not Found";

/// Sentinel for a candidate name that could not be derived.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub course: String,
    pub university: String,
    pub location: String,
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    /// Free-text narrative lines, joined into one string at seal time.
    pub content: String,
}

/// The complete analysis result for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub skills: BTreeSet<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
}
