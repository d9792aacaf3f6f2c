//! Résumé text extraction. Parsing is delegated to a `DocumentParser`; this
//! module owns page concatenation, normalization and the minimum-length check.

use thiserror::Error;

use crate::errors::AppError;
use crate::portfolio::normalize::clean_resume_text;

/// Extracted text shorter than this is treated as an empty or scanned PDF.
pub const MIN_RESUME_CHARS: usize = 50;

const PDF_MAGIC: &[u8] = b"%PDF-";
const PAGE_BREAK: char = '\u{c}';

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("File is not a PDF document")]
    NotADocument,

    #[error("PDF text extraction failed: {0}")]
    Parse(String),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::NotADocument => AppError::Validation(err.to_string()),
            ExtractError::Parse(_) => AppError::Internal(err.into()),
        }
    }
}

/// Turns a binary document into per-page text.
pub trait DocumentParser: Send + Sync {
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError>;
}

/// `pdf-extract` backed parser.
pub struct PdfDocumentParser;

impl DocumentParser for PdfDocumentParser {
    fn page_texts(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(ExtractError::NotADocument);
        }
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        Ok(text.split(PAGE_BREAK).map(String::from).collect())
    }
}

/// Concatenates page text, collapses whitespace and enforces `MIN_RESUME_CHARS`.
pub fn extract_resume_text(
    parser: &dyn DocumentParser,
    bytes: &[u8],
) -> Result<String, AppError> {
    let pages = parser.page_texts(bytes)?;
    let text = clean_resume_text(&pages.concat());

    if text.chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(
            "PDF seems empty or scanned.".to_string(),
        ));
    }
    Ok(text)
}


#[cfg(test)]
mod tests {
    use super::fake::FixedPages;
    use super::*;

    #[test]
    fn test_pages_are_concatenated_and_normalized() {
        let parser = FixedPages(vec![
            "Jane Doe\nStaff Engineer at Example Corp ".to_string(),
            "\n\nBuilt   payment systems handling millions of requests.".to_string(),
        ]);
        let text = extract_resume_text(&parser, b"%PDF-").unwrap();
        assert_eq!(
            text,
            "Jane Doe Staff Engineer at Example Corp Built payment systems handling millions of requests."
        );
    }

    #[test]
    fn test_short_text_is_rejected() {
        let parser = FixedPages(vec!["   Jane Doe   ".to_string()]);
        let err = extract_resume_text(&parser, b"%PDF-").unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("empty or scanned")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_threshold_counts_normalized_chars() {
        // 49 visible characters padded with whitespace must still fail.
        let padded = format!("{}{}", "a".repeat(49), " ".repeat(200));
        let parser = FixedPages(vec![padded]);
        assert!(extract_resume_text(&parser, b"%PDF-").is_err());

        let parser = FixedPages(vec!["a".repeat(50)]);
        assert!(extract_resume_text(&parser, b"%PDF-").is_ok());
    }

    #[test]
    fn test_pdf_parser_rejects_non_pdf_bytes() {
        let err = PdfDocumentParser.page_texts(b"hello, not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::NotADocument));
        assert!(matches!(AppError::from(err), AppError::Validation(_)));
    }

    #[test]
    fn test_parse_failure_maps_to_internal() {
        let err = ExtractError::Parse("bad xref".to_string());
        assert!(matches!(AppError::from(err), AppError::Internal(_)));
    }
}
