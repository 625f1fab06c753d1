//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from spansplit operations.
///
/// Matching itself is total; errors only arise when building a pattern.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SpanSplitError {
    /// A regex pattern failed to compile.
    #[error("failed to compile pattern {pattern:?}: {source}")]
    PatternCompile {
        /// The pattern source text.
        pattern: String,

        /// The underlying regex engine error.
        #[source]
        source: ErrorWrapper,
    },
}

/// Result type for spansplit operations.
pub type SSResult<T> = core::result::Result<T, SpanSplitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regex::RegexWrapperPattern;

    #[test]
    fn test_pattern_compile_display() {
        let source = RegexWrapperPattern::Fancy("(".to_string())
            .compile()
            .unwrap_err();
        let err = SpanSplitError::PatternCompile {
            pattern: "(".to_string(),
            source,
        };

        let msg = err.to_string();
        assert!(msg.starts_with("failed to compile pattern \"(\": "), "{msg}");
        assert!(core::error::Error::source(&err).is_some());
    }
}
