//! # `spansplit` Pattern Splitting Core
//!
//! This is the pattern-splitting engine underneath text normalization and
//! pre-tokenization in an LLM tokenizer pipeline.
//!
//! Given an input string and a [`patterns::Pattern`], the pattern partitions
//! the string into an ordered, contiguous, gap-free sequence of
//! [`spans::OffsetsMatch`] byte ranges, each tagged as matched or unmatched.
//!
//! See:
//! * [`patterns`] for the matcher variants.
//! * [`spans`] for the span model and the covering-span builder.
//! * [`offsets`] for character-to-byte offset translation.
//! * [`scratch`] for the pooled scratch buffers used on the regex path.
//! * [`regex`] for the compiled regex wrappers and the [`regex::MatchEngine`] trait.
//!
//! ## Crate Features
//!
#![doc = document_features::document_features!()]
//!
//! ## Splitting Text
//!
//! ```rust
//! use spansplit::patterns::{CharPattern, Pattern, RegexPattern};
//! use spansplit::spans::OffsetsMatch;
//!
//! let spaces = CharPattern::new(' ');
//! assert_eq!(
//!     spaces.find_matches("ab cd"),
//!     vec![
//!         OffsetsMatch::new(0, 2, false),
//!         OffsetsMatch::new(2, 3, true),
//!         OffsetsMatch::new(3, 5, false),
//!     ]
//! );
//!
//! // Patterns with lookaround fall up to `fancy_regex`.
//! let words = RegexPattern::new(r"\s+(?!\S)|\s+|\w+").unwrap();
//! let pieces = words.split("hello  world");
//! assert_eq!(pieces, vec![("hello", true), (" ", true), (" ", true), ("world", true)]);
//! ```
#![warn(missing_docs, unused)]

pub mod errors;
pub mod offsets;
pub mod patterns;
pub mod regex;
pub mod scratch;
pub mod spans;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use errors::{SSResult, SpanSplitError};
#[doc(inline)]
pub use patterns::{CharPattern, FnPattern, Invert, Pattern, RegexPattern, StringPattern};
#[doc(inline)]
pub use spans::OffsetsMatch;
