//! The header record and its version-one field layout.
//!
//! [`HeaderVersionOne`] is the raw layout. [`Header`] is the type the rest of
//! the crate works with: a distinct type over the same layout, so a future
//! layout can be swapped in behind it without touching callers.

use serde::{Deserialize, Serialize};

// ── Literals ────────────────────────────────────────────────────────

/// Text value of the sample header.
pub const SAMPLE_TEXT: &str = "foo";

/// Signed value of the sample header.
pub const SAMPLE_SIGNED: i64 = -2593;

/// Unsigned value of the sample header.
pub const SAMPLE_UNSIGNED: u64 = 29384;

// ── Layout ──────────────────────────────────────────────────────────

/// Version-one header layout: one text field and two integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderVersionOne {
    pub text: String,
    pub signed: i64,
    pub unsigned: u64,
}

// ── Header ──────────────────────────────────────────────────────────

/// A header record.
///
/// Fields are set once at construction and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header(HeaderVersionOne);

impl Header {
    /// Layout version backing this type.
    pub const VERSION: u32 = 1;

    pub fn new(text: impl Into<String>, signed: i64, unsigned: u64) -> Self {
        Self(HeaderVersionOne {
            text: text.into(),
            signed,
            unsigned,
        })
    }

    /// The header populated with [`SAMPLE_TEXT`], [`SAMPLE_SIGNED`] and
    /// [`SAMPLE_UNSIGNED`].
    pub fn sample() -> Self {
        Self::new(SAMPLE_TEXT, SAMPLE_SIGNED, SAMPLE_UNSIGNED)
    }

    pub fn text(&self) -> &str {
        &self.0.text
    }

    pub fn signed(&self) -> i64 {
        self.0.signed
    }

    pub fn unsigned(&self) -> u64 {
        self.0.unsigned
    }

    /// Borrow the underlying layout.
    pub fn layout(&self) -> &HeaderVersionOne {
        &self.0
    }
}

impl From<HeaderVersionOne> for Header {
    fn from(layout: HeaderVersionOne) -> Self {
        Self(layout)
    }
}

impl From<Header> for HeaderVersionOne {
    fn from(header: Header) -> Self {
        header.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_keeps_literal_values() {
        let header = Header::sample();
        assert_eq!(header.text(), "foo");
        assert_eq!(header.signed(), -2593);
        assert_eq!(header.unsigned(), 29384);
    }

    #[test]
    fn conversion_preserves_fields() {
        let layout = HeaderVersionOne {
            text: "bar".into(),
            signed: i64::MIN,
            unsigned: u64::MAX,
        };
        let header = Header::from(layout.clone());
        assert_eq!(header.layout(), &layout);
        assert_eq!(HeaderVersionOne::from(header), layout);
    }

    #[test]
    fn serializes_as_bare_layout() {
        let json = serde_json::to_value(Header::sample()).unwrap();
        assert_eq!(json["text"], "foo");
        assert_eq!(json["signed"], -2593);
        assert_eq!(json["unsigned"], 29384);
    }

    #[test]
    fn debug_names_both_types() {
        let rendered = format!("{:?}", Header::sample());
        assert!(rendered.starts_with("Header(HeaderVersionOne {"));
    }
}
