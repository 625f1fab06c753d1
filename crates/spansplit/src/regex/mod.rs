//! # Regex Utilities
//!
//! Real-world tokenizer split patterns often need lookaround and other
//! extended constructs provided by the [`fancy_regex`] crate; but naturally,
//! this has performance costs. We'd prefer to avoid [`fancy_regex`] when
//! possible, falling back on the linear-time [`regex`] crate when patterns permit.
//!
//! This recurses into three problems:
//!
//! * Labeling Patterns - [`RegexWrapperPattern`]
//!   * [`RegexWrapperPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`RegexWrapperPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`RegexWrapperPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//! * Finding successive matches - [`MatchEngine`]

mod literal;
mod match_engine;
mod regex_wrapper;

#[doc(inline)]
pub use literal::*;
#[doc(inline)]
pub use match_engine::*;
#[doc(inline)]
pub use regex_wrapper::*;
