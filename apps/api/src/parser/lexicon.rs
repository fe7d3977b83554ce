//! Header Lexicon — section identities and the heading phrases that name them.
//!
//! Static data only. Loaded once, never mutated at runtime; the locator
//! compiles case-insensitive patterns from these phrases.

/// A résumé section identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Education,
    Experience,
    Skills,
    Projects,
    References,
    Languages,
    Summary,
    Certifications,
    Achievements,
}

impl Section {
    /// Declaration order; `section as usize` indexes tables built from this.
    pub const ALL: [Section; 9] = [
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::References,
        Section::Languages,
        Section::Summary,
        Section::Certifications,
        Section::Achievements,
    ];

    /// Heading phrases recognized as this section, in match-priority order.
    /// All lowercase.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            Section::Education => &[
                "education",
                "academic background",
                "academic history",
                "qualifications",
                "education & qualifications",
            ],
            Section::Experience => &[
                "experience",
                "work history",
                "employment",
                "work experience",
                "professional experience",
                "career history",
                "career summary",
            ],
            Section::Skills => &[
                "skills",
                "technologies",
                "technical skills",
                "core competencies",
                "technical proficiency",
                "software",
                "expertise",
            ],
            Section::Projects => &["projects", "personal projects", "academic projects"],
            Section::References => &["references", "referees"],
            Section::Languages => &["languages"],
            Section::Summary => &["summary", "profile", "objective", "about me"],
            Section::Certifications => &["certifications", "certificates", "licenses"],
            Section::Achievements => &["achievements", "awards", "honors", "accomplishments"],
        }
    }
}
