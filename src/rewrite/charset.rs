//! Charset-aware percent-encoding for request-URI directories.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::CharsetError;

/// Everything except URL-unreserved characters and `/` gets escaped; the
/// input is a path, so segment separators must survive.
const PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes `path` using the response's declared character encoding.
///
/// Supported charsets are the ones servlet containers actually declare:
/// UTF-8, US-ASCII, and ISO-8859-1. Anything else fails with
/// [`CharsetError::Unsupported`]; a character outside the charset's
/// repertoire fails with [`CharsetError::Unrepresentable`].
pub fn encode_path(path: &str, charset: &str) -> Result<String, CharsetError> {
    let bytes = bytes_for_charset(path, charset)?;
    Ok(percent_encode(&bytes, PATH).to_string())
}

fn bytes_for_charset(path: &str, charset: &str) -> Result<Vec<u8>, CharsetError> {
    let name = charset.trim().to_ascii_lowercase();
    match name.as_str() {
        "utf-8" | "utf8" => Ok(path.as_bytes().to_vec()),
        "us-ascii" | "ascii" => match path.chars().find(|c| !c.is_ascii()) {
            Some(ch) => Err(CharsetError::Unrepresentable {
                ch,
                charset: "US-ASCII".to_string(),
            }),
            None => Ok(path.as_bytes().to_vec()),
        },
        "iso-8859-1" | "latin1" | "latin-1" | "l1" => path
            .chars()
            .map(|ch| {
                u8::try_from(u32::from(ch)).map_err(|_| CharsetError::Unrepresentable {
                    ch,
                    charset: "ISO-8859-1".to_string(),
                })
            })
            .collect(),
        _ => Err(CharsetError::Unsupported(charset.to_string())),
    }
}
