//! Heuristic résumé-text segmentation and field-extraction engine.
//!
//! Pure and stateless: one call to [`analyze`] per document, no shared
//! mutable state, safe for unlimited concurrent invocations. The only
//! process-wide data are the read-only header lexicon and keyword lists.

pub mod assembler;
pub mod education;
pub mod experience;
pub mod lexicon;
pub mod section;
pub mod skills;

pub use assembler::analyze;
