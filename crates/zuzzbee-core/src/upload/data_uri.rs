//! Data URIs
//!
//! `data:<mime>;base64,<payload>` encoding for images shown without a fetch.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const FALLBACK_MIME: &str = "application/octet-stream";

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a base64 data URI into MIME type and decoded bytes
pub fn parse_data_uri(uri: &str) -> Option<(String, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

/// Declared type when present, otherwise a guess from the file name
pub fn resolve_mime(declared: &str, file_name: &str) -> String {
    if !declared.trim().is_empty() {
        return declared.trim().to_string();
    }
    mime_guess::from_path(file_name)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| FALLBACK_MIME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_with_mime_prefix() {
        assert_eq!(to_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_parse_reverses_encoding() {
        let uri = to_data_uri("image/jpeg", &[0xff, 0xd8, 0xff]);
        let (mime, bytes) = parse_data_uri(&uri).expect("valid uri");
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, vec![0xff, 0xd8, 0xff]);
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(parse_data_uri("https://placehold.co/1.png").is_none());
        assert!(parse_data_uri("data:text/plain,hello").is_none());
    }

    #[test]
    fn test_resolve_mime() {
        assert_eq!(resolve_mime("image/webp", "x.png"), "image/webp");
        assert_eq!(resolve_mime("", "holiday.PNG"), "image/png");
        assert_eq!(resolve_mime("", "noext"), FALLBACK_MIME);
    }
}
