//! # Span Model
//!
//! An [`OffsetsMatch`] is a half-open byte range of the input, tagged as
//! matched or unmatched by a [`Pattern`](crate::patterns::Pattern).
//!
//! A span sequence for one input is *covering* when:
//! * the first span starts at `0`;
//! * each span starts where the previous one ends;
//! * the last span ends at the input's byte length.
//!
//! Every pattern returns a covering sequence; see [`check_coverage`].

use core::ops::Range;

/// A half-open `[start, end)` byte range, tagged matched/unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetsMatch {
    /// Start byte offset (inclusive).
    pub start: usize,

    /// End byte offset (exclusive).
    pub end: usize,

    /// Whether the pattern matched this range.
    pub is_match: bool,
}

impl OffsetsMatch {
    /// Create a new span.
    ///
    /// ## Arguments
    /// * `start` - start byte offset, inclusive.
    /// * `end` - end byte offset, exclusive; must be `>= start`.
    /// * `is_match` - whether the range was matched.
    pub const fn new(
        start: usize,
        end: usize,
        is_match: bool,
    ) -> Self {
        debug_assert!(start <= end);
        Self {
            start,
            end,
            is_match,
        }
    }

    /// Create a matched span.
    pub fn matched(range: Range<usize>) -> Self {
        Self::new(range.start, range.end, true)
    }

    /// Create an unmatched span.
    pub fn unmatched(range: Range<usize>) -> Self {
        Self::new(range.start, range.end, false)
    }

    /// The byte range of this span.
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The byte length of this span.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Is this a zero-length span?
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the text covered by this span.
    ///
    /// ## Panics
    /// Panics if the span is not on `text`'s char boundaries.
    pub fn slice<'a>(
        &self,
        text: &'a str,
    ) -> &'a str {
        &text[self.range()]
    }

    /// Return a copy with the match flag negated.
    pub const fn inverted(self) -> Self {
        Self {
            is_match: !self.is_match,
            ..self
        }
    }
}

impl From<OffsetsMatch> for Range<usize> {
    fn from(span: OffsetsMatch) -> Self {
        span.range()
    }
}

/// Build the covering span sequence for a list of raw byte-range matches.
///
/// The `matches` must be sorted by start, mutually non-overlapping, and
/// each must lie within `[0, len]`. Adjacent matches never produce a
/// zero-length unmatched filler between them.
///
/// ## Arguments
/// * `len` - the byte length of the input.
/// * `matches` - the matched `(start, end)` byte ranges.
///
/// ## Returns
/// The covering sequence; a single unmatched `[0, len)` span when
/// there are no matches.
pub fn build_covering_spans(
    len: usize,
    matches: &[(usize, usize)],
) -> Vec<OffsetsMatch> {
    let Some(&(first, _)) = matches.first() else {
        return vec![OffsetsMatch::unmatched(0..len)];
    };

    let mut spans = Vec::with_capacity(matches.len() * 2 + 1);

    if first > 0 {
        spans.push(OffsetsMatch::unmatched(0..first));
    }

    for (idx, &(start, end)) in matches.iter().enumerate() {
        spans.push(OffsetsMatch::matched(start..end));

        match matches.get(idx + 1) {
            Some(&(next, _)) if next != end => {
                spans.push(OffsetsMatch::unmatched(end..next));
            }
            _ => {}
        }
    }

    let last = spans.last().map_or(0, |s| s.end);
    if last < len {
        spans.push(OffsetsMatch::unmatched(last..len));
    }

    debug_assert!(check_coverage(&spans, len).is_ok());
    spans
}

/// Negate the match flag of every span, leaving offsets unchanged.
pub fn invert_spans(spans: &mut [OffsetsMatch]) {
    for span in spans.iter_mut() {
        span.is_match = !span.is_match;
    }
}

/// A violation of the covering-sequence invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageViolation {
    /// The sequence was empty.
    Empty,

    /// The span at `index` does not start where the previous span ended.
    Discontinuous {
        /// Index of the offending span.
        index: usize,

        /// Where the span was expected to start.
        expected: usize,
    },

    /// The span at `index` ends before it starts.
    Reversed {
        /// Index of the offending span.
        index: usize,
    },

    /// The final span does not end at the input length.
    Short {
        /// The end of the final span.
        end: usize,
    },
}

/// Check that `spans` is a covering sequence of `[0, len)`.
///
/// ## Returns
/// The first [`CoverageViolation`] found, if any.
pub fn check_coverage(
    spans: &[OffsetsMatch],
    len: usize,
) -> Result<(), CoverageViolation> {
    if spans.is_empty() {
        return Err(CoverageViolation::Empty);
    }

    let mut cursor = 0;
    for (index, span) in spans.iter().enumerate() {
        if span.start != cursor {
            return Err(CoverageViolation::Discontinuous {
                index,
                expected: cursor,
            });
        }
        if span.end < span.start {
            return Err(CoverageViolation::Reversed { index });
        }
        cursor = span.end;
    }

    if cursor != len {
        return Err(CoverageViolation::Short { end: cursor });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_match() {
        let span = OffsetsMatch::new(2, 5, true);
        assert_eq!(span.range(), 2..5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert_eq!(span.slice("abcdefg"), "cde");
        assert_eq!(span.inverted(), OffsetsMatch::new(2, 5, false));
        assert_eq!(Range::<usize>::from(span), 2..5);

        assert!(OffsetsMatch::unmatched(0..0).is_empty());
    }

    #[test]
    fn test_build_no_matches() {
        assert_eq!(
            build_covering_spans(7, &[]),
            vec![OffsetsMatch::unmatched(0..7)]
        );
        assert_eq!(
            build_covering_spans(0, &[]),
            vec![OffsetsMatch::unmatched(0..0)]
        );
    }

    #[test]
    fn test_build_gaps() {
        // "abab", matching "b"
        assert_eq!(
            build_covering_spans(4, &[(1, 2), (3, 4)]),
            vec![
                OffsetsMatch::new(0, 1, false),
                OffsetsMatch::new(1, 2, true),
                OffsetsMatch::new(2, 3, false),
                OffsetsMatch::new(3, 4, true),
            ]
        );

        assert_eq!(
            build_covering_spans(10, &[(0, 3), (5, 6)]),
            vec![
                OffsetsMatch::new(0, 3, true),
                OffsetsMatch::new(3, 5, false),
                OffsetsMatch::new(5, 6, true),
                OffsetsMatch::new(6, 10, false),
            ]
        );
    }

    #[test]
    fn test_build_adjacent() {
        assert_eq!(
            build_covering_spans(3, &[(0, 1), (1, 2), (2, 3)]),
            vec![
                OffsetsMatch::new(0, 1, true),
                OffsetsMatch::new(1, 2, true),
                OffsetsMatch::new(2, 3, true),
            ]
        );
    }

    #[test]
    fn test_build_empty_match() {
        assert_eq!(
            build_covering_spans(2, &[(1, 1)]),
            vec![
                OffsetsMatch::new(0, 1, false),
                OffsetsMatch::new(1, 1, true),
                OffsetsMatch::new(1, 2, false),
            ]
        );
    }

    #[test]
    fn test_invert_spans() {
        let mut spans = build_covering_spans(4, &[(1, 2)]);
        invert_spans(&mut spans);
        assert_eq!(
            spans,
            vec![
                OffsetsMatch::new(0, 1, true),
                OffsetsMatch::new(1, 2, false),
                OffsetsMatch::new(2, 4, true),
            ]
        );
    }

    #[test]
    fn test_check_coverage() {
        assert_eq!(check_coverage(&[], 0), Err(CoverageViolation::Empty));
        assert_eq!(check_coverage(&[OffsetsMatch::unmatched(0..0)], 0), Ok(()));
        assert_eq!(
            check_coverage(
                &[
                    OffsetsMatch::unmatched(0..2),
                    OffsetsMatch::matched(3..4)
                ],
                4
            ),
            Err(CoverageViolation::Discontinuous {
                index: 1,
                expected: 2
            })
        );
        assert_eq!(
            check_coverage(&[OffsetsMatch::unmatched(0..2)], 4),
            Err(CoverageViolation::Short { end: 2 })
        );
        assert_eq!(
            check_coverage(
                &[
                    OffsetsMatch::new(0, 0, true),
                    OffsetsMatch::new(0, 3, false)
                ],
                3
            ),
            Ok(())
        );
    }
}
