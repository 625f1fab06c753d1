//! # Testing Utilities
//!
//! Helpers for checking patterns, available to downstream crates
//! through the `testing` feature.

use crate::{
    offsets::IndexUnit,
    regex::MatchEngine,
    spans::{OffsetsMatch, check_coverage},
};

/// Static check that a type is `Send` and `Sync`.
pub fn static_is_send_sync_check<S: Send + Sync>(_: &S) {}

/// Assert that `spans` is a covering sequence for `text`,
/// and that every span lies on char boundaries.
///
/// ## Panics
/// Panics with a description of the first violation.
pub fn assert_covering(
    spans: &[OffsetsMatch],
    text: &str,
) {
    if let Err(violation) = check_coverage(spans, text.len()) {
        panic!("spans {spans:?} do not cover {text:?}: {violation:?}");
    }
    for span in spans {
        assert!(
            text.is_char_boundary(span.start) && text.is_char_boundary(span.end),
            "span {span:?} splits a char in {text:?}"
        );
    }
}

/// Re-reports a byte-unit engine's matches in char units.
///
/// Stands in for engines which natively count chars, to drive
/// the offset-translation path.
#[derive(Debug, Clone)]
pub struct CharUnitEngine<E> {
    inner: E,
}

impl<E: MatchEngine> CharUnitEngine<E> {
    /// Wrap a byte-unit engine.
    ///
    /// ## Panics
    /// Panics if `inner` does not report byte units.
    pub fn new(inner: E) -> Self {
        assert_eq!(inner.index_unit(), IndexUnit::Byte);
        Self { inner }
    }
}

fn char_to_byte(
    text: &str,
    idx: usize,
) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(core::iter::once(text.len()))
        .nth(idx)
}

fn byte_to_char(
    text: &str,
    byte: usize,
) -> usize {
    text[..byte].chars().count()
}

impl<E: MatchEngine> MatchEngine for CharUnitEngine<E> {
    fn index_unit(&self) -> IndexUnit {
        IndexUnit::Char
    }

    fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    fn find_at(
        &self,
        text: &str,
        start: usize,
    ) -> Option<(usize, usize)> {
        let (s, e) = self.inner.find_at(text, char_to_byte(text, start)?)?;
        Some((byte_to_char(text, s), byte_to_char(text, e)))
    }
}
