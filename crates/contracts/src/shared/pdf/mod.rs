//! Printable documents (contracts, vouchers) rendered to PDF
//!
//! A document goes through three steps: a text template is filled with the
//! record's values, the text is laid out into lines and A4 pages, and the
//! pages are written as a PDF 1.4 file with the standard Helvetica fonts.
//! Only Latin-1 text can be drawn; other characters print as `?`.

mod layout;
mod template;
mod writer;

pub use layout::{layout_text, paginate, LineStyle, PageLayout, TextLine};
pub use template::render_template;
pub use writer::write_pdf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while generating a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdfError {
    #[error("template placeholder '{0}' has no value")]
    MissingField(String),

    #[error("unterminated placeholder at byte {0}")]
    UnterminatedPlaceholder(usize),

    #[error("document has no content")]
    EmptyDocument,
}

/// A generated document ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPdf {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Lay out `text` on A4 pages and write the PDF
pub fn generate(
    text: &str,
    title: &str,
    file_name: String,
) -> Result<GeneratedPdf, PdfError> {
    let page_layout = PageLayout::a4();
    let lines = layout_text(text, &page_layout);
    let pages = paginate(lines, page_layout.lines_per_page());
    if pages.is_empty() {
        return Err(PdfError::EmptyDocument);
    }
    let bytes = write_pdf(&pages, &page_layout, title);
    Ok(GeneratedPdf {
        file_name,
        page_count: pages.len(),
        bytes,
    })
}

/// Download name: `<name>_<YYYY-MM-DD>.pdf`, restricted to `[A-Za-z0-9_-]`
pub fn pdf_file_name(name: &str, date: NaiveDate) -> String {
    let mut stem = String::new();
    for c in name.chars() {
        let mapped = if c.is_ascii_alphanumeric() || c == '-' {
            Some(c)
        } else if c.is_whitespace() || c == '_' || c == '.' || c == '/' {
            Some('_')
        } else {
            None
        };
        if let Some(m) = mapped {
            if m == '_' && stem.ends_with('_') {
                continue;
            }
            stem.push(m);
        }
    }
    let stem = stem.trim_matches('_');
    let stem = if stem.is_empty() { "document" } else { stem };
    format!("{}_{}.pdf", stem, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_sanitized() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(
            pdf_file_name("Hilton Suites / Makkah", date),
            "Hilton_Suites_Makkah_2025-01-09.pdf"
        );
        assert_eq!(pdf_file_name("হোটেল", date), "document_2025-01-09.pdf");
        assert_eq!(pdf_file_name("a--b__c", date), "a--b_c_2025-01-09.pdf");
    }

    #[test]
    fn generate_counts_pages() {
        let text = (0..120).map(|i| format!("Line {}", i)).collect::<Vec<_>>().join("\n");
        let pdf = generate(&text, "Test", "t.pdf".into()).unwrap();
        assert_eq!(pdf.page_count, 3);
        assert!(pdf.bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn generate_rejects_empty_text() {
        assert_eq!(
            generate("  \n \n", "Empty", "e.pdf".into()),
            Err(PdfError::EmptyDocument)
        );
    }
}
