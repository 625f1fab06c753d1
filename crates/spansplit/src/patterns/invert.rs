//! # Inverting Pattern

use crate::{
    patterns::Pattern,
    spans::{OffsetsMatch, invert_spans},
};

/// Flips the match flag of every span produced by the wrapped pattern.
///
/// This turns a pattern matching words into one matching the
/// delimiters between them, and vice versa. Offsets are unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Invert<P> {
    inner: P,
}

impl<P> Invert<P> {
    /// Wrap `inner`.
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }

    /// The wrapped pattern.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwrap the inner pattern.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Pattern> Pattern for Invert<P> {
    fn find_matches(
        &self,
        text: &str,
    ) -> Vec<OffsetsMatch> {
        let mut spans = self.inner.find_matches(text);
        invert_spans(&mut spans);
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{CharPattern, RegexPattern};

    #[test]
    fn test_invert() {
        let words = RegexPattern::new(r"\w+").unwrap();
        let delims = Invert::new(&words);

        assert_eq!(
            delims.find_matches("ab, cd"),
            vec![
                OffsetsMatch::new(0, 2, false),
                OffsetsMatch::new(2, 4, true),
                OffsetsMatch::new(4, 6, false),
            ]
        );
        assert_eq!(
            delims.find_matches(""),
            vec![OffsetsMatch::new(0, 0, true)]
        );
        assert_eq!(delims.inner().as_str(), r"\w+");
    }

    #[test]
    fn test_double_invert() {
        let pattern = CharPattern::new('a');
        let twice = pattern.invert().invert();

        for text in ["", "a", "aa", "banana", "\u{e9}a\u{e9}"] {
            assert_eq!(twice.find_matches(text), pattern.find_matches(text));
        }

        assert_eq!(twice.into_inner().into_inner(), pattern);
    }
}
