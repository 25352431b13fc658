//! Byte-level ingestion: turns raw bytes from a file, stdin, or an
//! arbitrary buffer into the `&str` the scanner expects, detecting a
//! leading BOM and the UTF-8/UTF-16 encoding it implies.
//!
//! This sits in front of the core parser, which only specifies BOM
//! handling for text already in memory; callers that already hold a
//! `&str` can skip this module entirely and call `parse_smart` directly.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::fs;
use std::io;
use std::path::Path;

/// Which encoding a leading BOM (or its absence) implies, and how many
/// bytes the mark itself occupies.
#[derive(Debug, Clone, Copy)]
pub struct EncodingInfo {
    pub encoding: &'static Encoding,
    pub has_bom: bool,
    pub bom_length: usize,
}

/// Inspects the first few bytes for a UTF-8, UTF-16LE, or UTF-16BE BOM.
/// Returns `None` if none is present.
pub fn detect_bom(bytes: &[u8]) -> Option<EncodingInfo> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Some(EncodingInfo {
            encoding: UTF_8,
            has_bom: true,
            bom_length: 3,
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Some(EncodingInfo {
            encoding: UTF_16BE,
            has_bom: true,
            bom_length: 2,
        });
    }
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Some(EncodingInfo {
            encoding: UTF_16LE,
            has_bom: true,
            bom_length: 2,
        });
    }
    None
}

/// Decodes `bytes` to a `String`, honoring a detected BOM and otherwise
/// assuming UTF-8 (invalid sequences are replaced, never an error: the
/// fault-tolerant reader downstream is meant to absorb malformed input,
/// not reject it at the encoding layer).
pub fn decode(bytes: &[u8]) -> String {
    match detect_bom(bytes) {
        Some(info) => {
            let (decoded, _, _) = info.encoding.decode(&bytes[info.bom_length..]);
            decoded.into_owned()
        }
        None => {
            let (decoded, _, _) = UTF_8.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Reads and decodes a file from disk.
pub fn read_file(path: impl AsRef<Path>) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode(&bytes))
}

/// Reads and decodes the whole of stdin.
pub fn read_stdin() -> io::Result<String> {
    use std::io::Read;
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    Ok(decode(&bytes))
}
