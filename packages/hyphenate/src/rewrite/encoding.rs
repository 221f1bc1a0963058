//! Decoding and encoding file contents with an explicit encoding.

use std::path::Path;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

use crate::error::{HyphenateError, Result};

/// Decode `bytes` strictly: no BOM sniffing, no replacement characters.
///
/// # Errors
/// Returns `HyphenateError::Encoding` on malformed input.
pub fn decode(bytes: &[u8], encoding: &'static Encoding, path: &Path) -> Result<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| encoding_error(path, encoding, "malformed byte sequence"))
}

/// Encode `text` into `encoding`.
///
/// UTF-16 is written in the requested byte order rather than falling back
/// to UTF-8.
///
/// # Errors
/// Returns `HyphenateError::Encoding` if a character cannot be represented.
pub fn encode(text: &str, encoding: &'static Encoding, path: &Path) -> Result<Vec<u8>> {
    if encoding == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if encoding == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }

    let (bytes, _, unmappable) = encoding.encode(text);
    if unmappable {
        return Err(encoding_error(
            path,
            encoding,
            "text contains characters the encoding cannot represent",
        ));
    }
    Ok(bytes.into_owned())
}

fn encoding_error(path: &Path, encoding: &'static Encoding, message: &str) -> HyphenateError {
    HyphenateError::Encoding {
        path: path.to_path_buf(),
        encoding: encoding.name(),
        message: message.to_string(),
    }
}
