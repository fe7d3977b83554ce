//! Canned-response chat helper.
//!
//! Keyword-triggered fixed strings with no parsing logic of its own. Checks
//! are ordered; the first keyword hit wins.

const REPLY_UPLOAD: &str =
    "Choose a PDF and hit analyze. You can review the filename before submitting.";
const REPLY_FORMAT: &str = "Only PDF files are supported.";
const REPLY_SECTIONS: &str =
    "I split job titles, companies and dates apart and merge the descriptions into tidy paragraphs.";
const REPLY_GREETING: &str = "Hi! I'm the resume assistant.";
const REPLY_MANUAL: &str = "See the repository README for a walkthrough of the analysis flow.";
const REPLY_DEFAULT: &str =
    "I can help with uploading, supported formats, and how the analysis works.";

/// Picks a reply for a chat message.
pub fn reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    if ["upload", "start", "file"].iter().any(|k| message.contains(k)) {
        REPLY_UPLOAD
    } else if message.contains("format") || message.contains("pdf") {
        REPLY_FORMAT
    } else if message.contains("experience") || message.contains("education") {
        REPLY_SECTIONS
    } else if message.contains("hello") || message.contains("hi") {
        REPLY_GREETING
    } else if message.contains("manual") {
        REPLY_MANUAL
    } else {
        REPLY_DEFAULT
    }
}
