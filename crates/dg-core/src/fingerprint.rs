//! SHA-256 content fingerprints for migration scripts.
//!
//! A fingerprint is taken over the raw file bytes with any leading
//! byte-order marks removed. Nothing else is normalized, so a changed line
//! ending or trailing space is a different migration.

use crate::error::{CoreError, CoreResult};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];

/// Lowercase hex SHA-256 digest of a migration's content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Wrap a digest string read back from the ledger.
    pub fn from_stored(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// Return the digest as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Fingerprint {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Remove every byte-order mark at the front of `content`.
///
/// Marks are stripped repeatedly, so a doubled mark leaves the same bytes as
/// a single one.
pub fn strip_bom(content: &[u8]) -> &[u8] {
    let mut rest = content;
    loop {
        let stripped = [BOM_UTF8, BOM_UTF16_LE, BOM_UTF16_BE]
            .iter()
            .find_map(|bom| rest.strip_prefix(*bom));
        match stripped {
            Some(tail) => rest = tail,
            None => return rest,
        }
    }
}

/// Compute the fingerprint of raw migration bytes.
pub fn compute_fingerprint(content: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(strip_bom(content));
    let result = hasher.finalize();
    Fingerprint(format!("{:x}", result))
}

/// Decode migration bytes into script text.
///
/// A UTF-16 byte-order mark selects UTF-16 in that byte order; everything
/// else must be UTF-8 (with or without its mark).
pub fn decode_script(name: &str, content: &[u8]) -> CoreResult<String> {
    if let Some(body) = content.strip_prefix(BOM_UTF16_LE) {
        return decode_utf16(name, body, u16::from_le_bytes, "UTF-16LE");
    }
    if let Some(body) = content.strip_prefix(BOM_UTF16_BE) {
        return decode_utf16(name, body, u16::from_be_bytes, "UTF-16BE");
    }

    let body = content.strip_prefix(BOM_UTF8).unwrap_or(content);
    String::from_utf8(body.to_vec()).map_err(|_| CoreError::ScriptEncoding {
        name: name.to_string(),
        encoding: "UTF-8",
    })
}

fn decode_utf16(
    name: &str,
    body: &[u8],
    to_unit: fn([u8; 2]) -> u16,
    encoding: &'static str,
) -> CoreResult<String> {
    let err = || CoreError::ScriptEncoding {
        name: name.to_string(),
        encoding,
    };

    let chunks = body.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        return Err(err());
    }
    let units: Vec<u16> = chunks.map(|pair| to_unit([pair[0], pair[1]])).collect();
    let text = String::from_utf16(&units).map_err(|_| err())?;

    // A second mark inside the text decodes to U+FEFF; drop it.
    Ok(text.trim_start_matches('\u{FEFF}').to_string())
}

#[cfg(test)]
#[path = "fingerprint_test.rs"]
mod tests;
