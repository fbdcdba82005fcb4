//! Text decoding with a fixed encoding fallback chain.

use std::path::Path;

use encoding_rs::{Encoding, UTF_8, UTF_8_INIT, WINDOWS_1252_INIT};

use crate::error::{IngestError, Result};

/// Candidate encodings, tried in order until one decodes without errors.
///
/// The latin-1 and iso-8859-1 attempts use the windows-1252 decoder (the
/// WHATWG mapping for those labels), so every byte sequence decodes by the
/// second attempt at the latest. The labels stay distinct so the reported
/// encoding names the attempt that succeeded.
pub static ENCODING_CANDIDATES: [(&str, &Encoding); 4] = [
    ("utf-8", &UTF_8_INIT),
    ("latin-1", &WINDOWS_1252_INIT),
    ("iso-8859-1", &WINDOWS_1252_INIT),
    ("windows-1252", &WINDOWS_1252_INIT),
];

/// File content decoded to text, plus the encoding that produced it.
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    /// Label of the candidate encoding that decoded cleanly.
    pub encoding: &'static str,
}

/// Reads a file and decodes it with the candidate encodings in order.
///
/// UTF-16 content is rejected up front rather than mis-decoded byte by
/// byte through the single-byte fallbacks. A UTF-8 byte-order mark is
/// stripped.
pub fn decode_with_fallback(path: &Path) -> Result<DecodedText> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    for (label, encoding) in ENCODING_CANDIDATES {
        let (text, had_errors) = if encoding == UTF_8 {
            encoding.decode_with_bom_removal(&bytes)
        } else {
            encoding.decode_without_bom_handling(&bytes)
        };
        if had_errors {
            tracing::debug!(path = %path.display(), encoding = label, "decode attempt failed");
            continue;
        }
        return Ok(DecodedText {
            text: text.into_owned(),
            encoding: label,
        });
    }

    Err(IngestError::EncodingExhausted {
        path: path.to_path_buf(),
    })
}
