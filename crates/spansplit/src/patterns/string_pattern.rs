//! # Literal String Pattern

use crate::{
    patterns::Pattern,
    regex::{RegexWrapper, literal_regex_pattern},
    spans::{OffsetsMatch, build_covering_spans},
};

/// Matches every non-overlapping occurrence of a literal string, left to right.
///
/// The literal is matched verbatim; regex metacharacters have no meaning.
/// An empty literal matches nothing: every input is one unmatched span.
#[derive(Debug, Clone)]
pub struct StringPattern {
    literal: String,

    /// `None` for the empty literal, or when the escaped literal is
    /// too large for the regex engine; then `str::match_indices` is used.
    literal_re: Option<RegexWrapper>,
}

impl StringPattern {
    /// Create a new [`StringPattern`].
    pub fn new<S: Into<String>>(literal: S) -> Self {
        let literal = literal.into();

        let literal_re = if literal.is_empty() {
            None
        } else {
            match literal_regex_pattern(&literal).compile() {
                Ok(re) => Some(re),
                Err(err) => {
                    log::warn!(
                        "literal of {} bytes not compiled ({err}); using substring search",
                        literal.len()
                    );
                    None
                }
            }
        };

        Self {
            literal,
            literal_re,
        }
    }

    /// The literal this pattern matches.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    fn raw_matches(
        &self,
        text: &str,
    ) -> Vec<(usize, usize)> {
        match &self.literal_re {
            Some(re) => re.find_iter(text).map(|r| (r.start, r.end)).collect(),
            None => text
                .match_indices(self.literal.as_str())
                .map(|(idx, m)| (idx, idx + m.len()))
                .collect(),
        }
    }
}

impl From<&str> for StringPattern {
    fn from(literal: &str) -> Self {
        Self::new(literal)
    }
}

impl From<String> for StringPattern {
    fn from(literal: String) -> Self {
        Self::new(literal)
    }
}

impl Pattern for StringPattern {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, text)))]
    fn find_matches(
        &self,
        text: &str,
    ) -> Vec<OffsetsMatch> {
        if self.literal.is_empty() {
            return vec![OffsetsMatch::unmatched(0..text.len())];
        }

        build_covering_spans(text.len(), &self.raw_matches(text))
    }
}
