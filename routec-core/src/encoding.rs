//! Strict text decoding and encoding under one explicit encoding.
//!
//! The compiler uses a single caller-chosen encoding for every read and
//! every write. It is threaded as an explicit parameter rather than held in
//! global state.

use encoding_rs::Encoding;

/// Decode `bytes` strictly under `encoding`.
///
/// Returns `None` if the byte stream is not valid under the encoding. The
/// detector relies on this: the compiler always re-reads its own output
/// cleanly, so a malformed stream cannot be one of its files.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors { None } else { Some(text.into_owned()) }
}

/// Encode `text` under `encoding`.
pub fn encode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}
