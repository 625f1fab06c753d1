//! # Exact Char Pattern

use crate::{
    patterns::{Pattern, streaming::stream_char_matches},
    spans::OffsetsMatch,
};

/// Matches every occurrence of one exact char.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharPattern {
    target: char,
}

impl From<char> for CharPattern {
    fn from(target: char) -> Self {
        Self::new(target)
    }
}

impl CharPattern {
    /// Create a new [`CharPattern`].
    pub const fn new(target: char) -> Self {
        Self { target }
    }

    /// The char this pattern matches.
    pub const fn char(&self) -> char {
        self.target
    }
}

impl Pattern for CharPattern {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, text)))]
    fn find_matches(
        &self,
        text: &str,
    ) -> Vec<OffsetsMatch> {
        stream_char_matches(text, |c| c == self.target)
    }
}
