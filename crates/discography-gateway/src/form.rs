//! Strict `application/x-www-form-urlencoded` decoding.
//!
//! Values from the request body come first, followed by values from the
//! URL query string. Repeated keys are kept and [`FormValues::get`] returns
//! the first one. A `%` that is not followed by two hex digits, or a `;`
//! inside a pair, makes the whole form invalid.

use std::borrow::Cow;

use axum::http::HeaderValue;
use percent_encoding::percent_decode_str;
use thiserror::Error;

pub const URLENCODED: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("invalid percent escape in {0:?}")]
    InvalidEscape(String),
    #[error("invalid semicolon separator in {0:?}")]
    Semicolon(String),
    #[error("form data is not valid UTF-8")]
    InvalidUtf8,
}

/// Decoded key/value pairs in arrival order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    pub fn parse(input: &str) -> Result<Self, FormError> {
        let mut values = Self::default();
        values.extend_from(input)?;
        Ok(values)
    }

    /// Appends every pair found in `input`.
    pub fn extend_from(&mut self, input: &str) -> Result<(), FormError> {
        for segment in input.split('&') {
            if segment.is_empty() {
                continue;
            }
            if segment.contains(';') {
                return Err(FormError::Semicolon(segment.to_owned()));
            }
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            self.pairs.push((unescape(key)?, unescape(value)?));
        }
        Ok(())
    }

    /// Returns the first value submitted for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Builds the form of a request from its query string and body.
///
/// The body only contributes when it is declared as urlencoded; any other
/// content type (or none) leaves it out without failing.
pub fn parse_request_form(
    query: Option<&str>,
    content_type: Option<&HeaderValue>,
    body: &[u8],
) -> Result<FormValues, FormError> {
    let mut values = FormValues::default();

    if content_type.is_some_and(is_urlencoded) {
        let body = std::str::from_utf8(body).map_err(|_| FormError::InvalidUtf8)?;
        values.extend_from(body)?;
    }
    if let Some(query) = query {
        values.extend_from(query)?;
    }

    Ok(values)
}

fn is_urlencoded(content_type: &HeaderValue) -> bool {
    content_type
        .to_str()
        .ok()
        .and_then(|value| value.split(';').next())
        .is_some_and(|media_type| media_type.trim().eq_ignore_ascii_case(URLENCODED))
}

fn unescape(raw: &str) -> Result<String, FormError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return Err(FormError::InvalidEscape(raw.to_owned()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    // `+` is replaced before decoding so an escaped `%2B` survives as a plus.
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| FormError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urlencoded() -> HeaderValue {
        HeaderValue::from_static(URLENCODED)
    }

    #[test]
    fn decodes_escapes_and_plus() {
        let values = FormValues::parse("title=Kind+of%20Blue&price=1%2B1").unwrap();
        assert_eq!(values.get("title"), Some("Kind of Blue"));
        assert_eq!(values.get("price"), Some("1+1"));
    }

    #[test]
    fn repeated_key_keeps_first_value() {
        let values = FormValues::parse("title=a&title=b").unwrap();
        assert_eq!(values.get("title"), Some("a"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn key_without_value_is_empty() {
        let values = FormValues::parse("title&artist=").unwrap();
        assert_eq!(values.get("title"), Some(""));
        assert_eq!(values.get("artist"), Some(""));
        assert_eq!(values.get("price"), None);
    }

    #[test]
    fn empty_segments_are_skipped() {
        let values = FormValues::parse("&&title=a&").unwrap();
        assert_eq!(values.len(), 1);
        assert!(FormValues::parse("").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_escapes() {
        for input in ["title=%ZZ", "title=%4", "title=100%", "%G1=x"] {
            assert!(
                matches!(FormValues::parse(input), Err(FormError::InvalidEscape(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_semicolons() {
        assert!(matches!(
            FormValues::parse("title=a;artist=b"),
            Err(FormError::Semicolon(_))
        ));
    }

    #[test]
    fn rejects_escaped_invalid_utf8() {
        assert_eq!(FormValues::parse("title=%FF"), Err(FormError::InvalidUtf8));
    }

    #[test]
    fn body_values_precede_query_values() {
        let values =
            parse_request_form(Some("title=query&artist=q"), Some(&urlencoded()), b"title=body")
                .unwrap();
        assert_eq!(values.get("title"), Some("body"));
        assert_eq!(values.get("artist"), Some("q"));
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        let content_type = HeaderValue::from_static("Application/X-WWW-Form-Urlencoded; charset=utf-8");
        let values = parse_request_form(None, Some(&content_type), b"title=a").unwrap();
        assert_eq!(values.get("title"), Some("a"));
    }

    #[test]
    fn other_content_types_leave_the_body_out() {
        let json = HeaderValue::from_static("application/json");
        let values = parse_request_form(None, Some(&json), br#"{"title":"a"}"#).unwrap();
        assert!(values.is_empty());

        let values = parse_request_form(Some("title=q"), None, b"title=%ZZ").unwrap();
        assert_eq!(values.get("title"), Some("q"));
    }

    #[test]
    fn bad_query_fails_the_whole_form() {
        let err = parse_request_form(Some("title=%ZZ"), Some(&urlencoded()), b"title=a").unwrap_err();
        assert!(matches!(err, FormError::InvalidEscape(_)));
    }
}
