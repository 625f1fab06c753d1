//! # Literal Patterns

use crate::regex::regex_wrapper::RegexWrapperPattern;

/// Create a pattern matching `literal` verbatim.
///
/// This will always be a [`RegexWrapperPattern::Basic`] variant;
/// all regex metacharacters in `literal` are escaped.
pub fn literal_regex_pattern(literal: &str) -> RegexWrapperPattern {
    RegexWrapperPattern::Basic(regex::escape(literal))
}

/// Concatenate string literals with "|" to form an alternation pattern.
///
/// ```rust
/// use spansplit::join_patterns;
///
/// assert_eq!(join_patterns!(r"\s+", r"\w+"), r"\s+|\w+");
/// assert_eq!(join_patterns!("a"), "a");
/// ```
#[macro_export]
macro_rules! join_patterns {
    ($first:literal $(, $rest:literal)* $(,)?) => {
        concat!($first $(, "|", $rest)*)
    };
}
