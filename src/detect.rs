//! Output format detection.
//!
//! Recognises the artifacts this crate produces from their leading bytes.

use crate::convert::ExportFormat;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// ZIP local file header signature.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// Bytes read from the start of a file for detection.
const SNIFF_LEN: u64 = 64;

/// Detect the output format of a file.
///
/// # Example
/// ```no_run
/// use cvforge::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("resume.pdf").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ExportFormat> {
    let mut header = Vec::with_capacity(SNIFF_LEN as usize);
    File::open(path)?.take(SNIFF_LEN).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the output format of a byte sequence.
///
/// `%PDF-` is a PDF, a ZIP local file header is a DOCX package, and a
/// `{` after optional whitespace (and byte-order mark) is JSON.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ExportFormat> {
    if data.starts_with(PDF_MAGIC) {
        return Ok(ExportFormat::Pdf);
    }
    if data.starts_with(ZIP_MAGIC) {
        return Ok(ExportFormat::Docx);
    }

    let text = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match text.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(ExportFormat::Json),
        _ => Err(Error::UnknownFormat),
    }
}

/// PDF version from a header such as `%PDF-1.7`.
pub fn pdf_version(data: &[u8]) -> Option<String> {
    let version = data.strip_prefix(PDF_MAGIC)?.get(..VERSION_LEN)?;
    match version {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Some(String::from_utf8_lossy(version).into_owned())
        }
        _ => None,
    }
}
