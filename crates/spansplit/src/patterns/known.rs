//! # Known Tokenizer Split Patterns
//!
//! Pre-tokenizer split patterns used by widely deployed LLM tokenizers.
//! All of them need lookahead, and so compile under `fancy_regex`.

use crate::{join_patterns, regex::ConstRegexWrapperPattern};

/// The GPT-2 ("`r50k_base`") split pattern.
pub const GPT2_SPLIT_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(join_patterns!(
    r"'s",
    r"'t",
    r"'re",
    r"'ve",
    r"'m",
    r"'ll",
    r"'d",
    r" ?\p{L}+",
    r" ?\p{N}+",
    r" ?[^\s\p{L}\p{N}]+",
    r"\s+(?!\S)",
    r"\s+",
));

/// The GPT-4 ("`cl100k_base`") split pattern; also used by Llama 3.
pub const CL100K_SPLIT_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(join_patterns!(
    r"'(?i:[sdmt]|ll|ve|re)",
    r"[^\r\n\p{L}\p{N}]?\p{L}+",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]+[\r\n]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+",
));

/// The GPT-4o ("`o200k_base`") split pattern.
pub const O200K_SPLIT_PATTERN: ConstRegexWrapperPattern = ConstRegexWrapperPattern::Fancy(join_patterns!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+",
));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{Pattern, RegexPattern};

    #[test]
    fn test_patterns_compile() {
        for p in [GPT2_SPLIT_PATTERN, CL100K_SPLIT_PATTERN, O200K_SPLIT_PATTERN] {
            assert!(p.compile().unwrap().is_fancy());
        }
    }

    #[test]
    fn test_gpt2_split() {
        let pattern = RegexPattern::new(GPT2_SPLIT_PATTERN).unwrap();
        let pieces = pattern
            .split("I'll pay $50  now")
            .into_iter()
            .map(|(piece, is_match)| {
                assert!(is_match, "{piece:?}");
                piece
            })
            .collect::<Vec<_>>();
        assert_eq!(pieces, vec!["I", "'ll", " pay", " $", "50", " ", " now"]);
    }

    #[test]
    fn test_cl100k_split() {
        let pattern = RegexPattern::new(CL100K_SPLIT_PATTERN).unwrap();
        assert_eq!(
            pattern
                .split("hello 12345 w\u{f6}rld\n")
                .into_iter()
                .map(|(piece, _)| piece)
                .collect::<Vec<_>>(),
            vec!["hello", " ", "123", "45", " w\u{f6}rld", "\n"]
        );
    }
}
