//! # Split Patterns
//!
//! A [`Pattern`] partitions an input string into a covering sequence of
//! [`OffsetsMatch`] spans; see [`crate::spans`] for the covering invariant.
//!
//! There are two algorithmic shapes:
//! * streamed, char-at-a-time matchers, which never look ahead:
//!   * [`CharPattern`] - one exact char.
//!   * [`FnPattern`] - any char accepted by a predicate.
//! * batch-then-build matchers, which collect every raw match first and then
//!   run the covering-span builder ([`crate::spans::build_covering_spans`]):
//!   * [`StringPattern`] - a verbatim literal substring.
//!   * [`RegexPattern`] - an (extended) regular expression.
//!
//! [`Invert`] decorates any pattern, flipping every match flag.
//!
//! ## Implementation Notes
//!
//! Smart pointer types that implement `Deref<Target: Pattern>` (such as
//! `Arc<T>`, `Box<T>`, and `Box<dyn Pattern>`) automatically implement
//! `Pattern` through a blanket implementation.

mod char_pattern;
mod fn_pattern;
mod invert;
pub mod known;
mod regex_pattern;
mod streaming;
mod string_pattern;

use core::ops::{Deref, Range};

#[doc(inline)]
pub use char_pattern::*;
#[doc(inline)]
pub use fn_pattern::*;
#[doc(inline)]
pub use invert::*;
#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use string_pattern::*;

use crate::spans::OffsetsMatch;

/// A pattern which splits text into matched and unmatched spans.
///
/// Patterns are immutable after construction, and may be shared
/// across threads.
pub trait Pattern: Send + Sync {
    /// Split `text` into a covering sequence of spans.
    ///
    /// The spans are ordered, contiguous, and cover exactly
    /// `[0, text.len())`; empty input yields a single `[0, 0)` unmatched span.
    fn find_matches(
        &self,
        text: &str,
    ) -> Vec<OffsetsMatch>;

    /// The byte ranges of the matched spans only.
    fn match_ranges(
        &self,
        text: &str,
    ) -> Vec<Range<usize>> {
        self.find_matches(text)
            .into_iter()
            .filter(|span| span.is_match)
            .map(|span| span.range())
            .collect()
    }

    /// Split `text` into `(piece, is_match)` pairs.
    fn split<'a>(
        &self,
        text: &'a str,
    ) -> Vec<(&'a str, bool)> {
        self.find_matches(text)
            .into_iter()
            .map(|span| (span.slice(text), span.is_match))
            .collect()
    }

    /// Wrap this pattern in an [`Invert`].
    fn invert(self) -> Invert<Self>
    where
        Self: Sized,
    {
        Invert::new(self)
    }
}

// Blanket implementation for any type that derefs to a Pattern.
// This allows Arc<T>, Box<T>, &T, etc. to automatically implement Pattern.
impl<D> Pattern for D
where
    D: Deref + Send + Sync,
    D::Target: Pattern,
{
    fn find_matches(
        &self,
        text: &str,
    ) -> Vec<OffsetsMatch> {
        self.deref().find_matches(text)
    }
}
