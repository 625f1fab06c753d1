//! # Streamed Char Matching

use crate::spans::OffsetsMatch;

/// Split `text` by testing each char in turn.
///
/// Every accepted char becomes a one-char matched span; each run of
/// rejected chars becomes one unmatched span.
pub(crate) fn stream_char_matches<F>(
    text: &str,
    mut accept: F,
) -> Vec<OffsetsMatch>
where
    F: FnMut(char) -> bool,
{
    if text.is_empty() {
        return vec![OffsetsMatch::unmatched(0..0)];
    }

    let mut spans = Vec::new();
    // Start of the pending unmatched run.
    let mut pending = 0;

    for (idx, c) in text.char_indices() {
        if !accept(c) {
            continue;
        }

        if pending < idx {
            spans.push(OffsetsMatch::unmatched(pending..idx));
        }

        let next = idx + c.len_utf8();
        spans.push(OffsetsMatch::matched(idx..next));
        pending = next;
    }

    if pending < text.len() {
        spans.push(OffsetsMatch::unmatched(pending..text.len()));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_char_matches() {
        assert_eq!(
            stream_char_matches("", |_| true),
            vec![OffsetsMatch::unmatched(0..0)]
        );
        assert_eq!(
            stream_char_matches("abc", |_| false),
            vec![OffsetsMatch::unmatched(0..3)]
        );
        assert_eq!(
            stream_char_matches("ab", |_| true),
            vec![OffsetsMatch::matched(0..1), OffsetsMatch::matched(1..2)]
        );
        assert_eq!(
            stream_char_matches("x\u{e9}yz\u{e9}", |c| c == '\u{e9}'),
            vec![
                OffsetsMatch::unmatched(0..1),
                OffsetsMatch::matched(1..3),
                OffsetsMatch::unmatched(3..5),
                OffsetsMatch::matched(5..7),
            ]
        );
    }
}
