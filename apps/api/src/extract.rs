//! PDF text extraction glue.
//!
//! The parser core consumes plain text; this is the only place PDF bytes
//! are touched. Uploads are decoded in memory and never written to disk.

use crate::errors::AppError;

pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| AppError::PdfExtraction(e.to_string()))
}
