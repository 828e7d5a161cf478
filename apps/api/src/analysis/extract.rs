//! Text extraction from uploaded resume documents.
//!
//! PDF pages are concatenated with no separator. DOCX body paragraphs are
//! each followed by a newline; paragraphs inside tables and text boxes are
//! skipped.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parsing failed: {0}")]
    Pdf(String),

    #[error("DOCX archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("DOCX document part exceeds {limit} bytes")]
    DocumentTooLarge { limit: usize },

    #[error("DOCX XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Decides the document kind from the filename suffix, ignoring case.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

/// Extracts the raw text of a document. `max_xml_bytes` caps the inflated
/// size of a DOCX body part.
pub fn extract_text(
    kind: DocumentKind,
    bytes: &[u8],
    max_xml_bytes: usize,
) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => extract_pdf_text(bytes),
        DocumentKind::Docx => extract_docx_text(bytes, max_xml_bytes),
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    Ok(pages.concat())
}

fn extract_docx_text(bytes: &[u8], max_xml_bytes: usize) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut raw = Vec::new();
    archive
        .by_name(DOCX_BODY_PART)?
        .take(max_xml_bytes as u64 + 1)
        .read_to_end(&mut raw)?;
    if raw.len() > max_xml_bytes {
        return Err(ExtractionError::DocumentTooLarge {
            limit: max_xml_bytes,
        });
    }
    let xml = String::from_utf8(raw)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    paragraphs_from_document_xml(&xml)
}

/// Walks `word/document.xml`, emitting each body paragraph's text followed
/// by a newline.
///
/// Tables and text boxes are skipped whole. A text box sits inside a run of
/// its host paragraph, so the host's own text is still emitted.
fn paragraphs_from_document_xml(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut out = String::new();
    let mut paragraph = String::new();
    let mut skip_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => skip_depth += 1,
                _ if skip_depth > 0 => {}
                b"w:p" => {
                    in_paragraph = true;
                    paragraph.clear();
                }
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:tbl" | b"w:txbxContent" => skip_depth = skip_depth.saturating_sub(1),
                _ if skip_depth > 0 => {}
                b"w:p" if in_paragraph => {
                    out.push_str(&paragraph);
                    out.push('\n');
                    in_paragraph = false;
                }
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                _ => {}
            },
            // Outside a run, `w:tab` is a tab-stop definition in `w:pPr`.
            Event::Empty(e) if skip_depth == 0 => match e.name().as_ref() {
                b"w:p" => out.push('\n'),
                b"w:tab" if in_run => paragraph.push('\t'),
                b"w:br" | b"w:cr" if in_run => paragraph.push('\n'),
                _ => {}
            },
            Event::Text(t) if skip_depth == 0 && in_paragraph && in_text => {
                paragraph.push_str(&t.unescape()?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}
