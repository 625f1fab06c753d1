//! # Predicate Pattern

use core::fmt::Debug;

use crate::{
    patterns::{Pattern, streaming::stream_char_matches},
    spans::OffsetsMatch,
};

/// A boxed char predicate, for patterns chosen at runtime.
pub type BoxedCharPredicate = Box<dyn Fn(char) -> bool + Send + Sync>;

/// Matches every char accepted by a predicate.
#[derive(Clone)]
pub struct FnPattern<F> {
    accept: F,
}

impl<F> FnPattern<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    /// Create a new [`FnPattern`].
    pub fn new(accept: F) -> Self {
        Self { accept }
    }
}

impl FnPattern<fn(char) -> bool> {
    /// Matches every whitespace char.
    pub fn whitespace() -> Self {
        Self::new(char::is_whitespace)
    }

    /// Matches every ASCII punctuation char.
    pub fn ascii_punctuation() -> Self {
        Self::new(|c| c.is_ascii_punctuation())
    }
}

impl FnPattern<BoxedCharPredicate> {
    /// Create a new [`FnPattern`] over a boxed predicate.
    pub fn boxed<F>(accept: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Self::new(Box::new(accept))
    }
}

impl<F> Debug for FnPattern<F> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("FnPattern").finish_non_exhaustive()
    }
}

impl<F> Pattern for FnPattern<F>
where
    F: Fn(char) -> bool + Send + Sync,
{
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, text)))]
    fn find_matches(
        &self,
        text: &str,
    ) -> Vec<OffsetsMatch> {
        stream_char_matches(text, &self.accept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace() {
        let pattern = FnPattern::whitespace();
        assert_eq!(
            pattern.find_matches("ab cd"),
            vec![
                OffsetsMatch::new(0, 2, false),
                OffsetsMatch::new(2, 3, true),
                OffsetsMatch::new(3, 5, false),
            ]
        );
        assert_eq!(
            pattern.find_matches(""),
            vec![OffsetsMatch::new(0, 0, false)]
        );
        assert_eq!(
            pattern.find_matches("ab "),
            vec![OffsetsMatch::new(0, 2, false), OffsetsMatch::new(2, 3, true)]
        );
    }

    #[test]
    fn test_unicode_whitespace() {
        // U+3000 is a 3-byte ideographic space.
        let text = "a\u{3000}\u{3000}b";
        assert_eq!(
            FnPattern::whitespace().find_matches(text),
            vec![
                OffsetsMatch::new(0, 1, false),
                OffsetsMatch::new(1, 4, true),
                OffsetsMatch::new(4, 7, true),
                OffsetsMatch::new(7, 8, false),
            ]
        );
    }

    #[test]
    fn test_closures() {
        let digits = FnPattern::new(|c: char| c.is_ascii_digit());
        assert_eq!(digits.match_ranges("a1b22"), vec![1..2, 3..4, 4..5]);

        let boxed = FnPattern::boxed(|c| c == 'x');
        assert_eq!(boxed.match_ranges("axbx"), vec![1..2, 3..4]);
        assert_eq!(format!("{boxed:?}"), "FnPattern { .. }");

        let punct = FnPattern::ascii_punctuation();
        assert_eq!(
            punct.split("hi, you!"),
            vec![("hi", false), (",", true), (" you", false), ("!", true)]
        );
    }
}
