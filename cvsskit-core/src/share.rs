//! Shareable-link convention
//!
//! A score is shared as a URL query parameter holding the url-encoded
//! canonical vector string. The vector alphabet is ASCII; only the
//! characters with query-string meaning need escaping.

use crate::metrics::MetricsRecord;
use crate::vector::{self, VectorError};

/// Query parameter name carrying the vector
pub const VECTOR_PARAM: &str = "vector";

/// Encode a record as a `vector=...` query fragment
pub fn to_query(record: &MetricsRecord) -> String {
    format!("{}={}", VECTOR_PARAM, percent_encode(&vector::serialize(record)))
}

/// Extract and parse the vector parameter from a query string
///
/// Accepts the bare query (`vector=...&other=...`) with or without a
/// leading `?`. A missing parameter is an invalid format, same as a
/// missing version header.
pub fn from_query(query: &str) -> Result<MetricsRecord, VectorError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            if key == VECTOR_PARAM {
                return vector::parse(&percent_decode(value));
            }
        }
    }
    Err(VectorError::InvalidVectorFormat(format!(
        "no {VECTOR_PARAM} parameter in query"
    )))
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 3 <= bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(byte) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        // '+' as space is common in query strings
        out.push(if bytes[i] == b'+' { b' ' } else { bytes[i] });
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
