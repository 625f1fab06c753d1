//! # Match Engine Trait

use crate::{offsets::IndexUnit, regex::RegexWrapper};

/// A compiled regex which can find successive matches.
///
/// Engines report positions in their declared [`IndexUnit`];
/// the caller translates them to byte offsets.
///
/// ## Implementation Notes
///
/// Smart pointer types that implement `Deref<Target: MatchEngine>` (such as
/// `Arc<T>` and `Box<T>`) automatically implement `MatchEngine` through a
/// blanket implementation.
pub trait MatchEngine: Send + Sync {
    /// The unit positions are reported in.
    fn index_unit(&self) -> IndexUnit;

    /// The source pattern text.
    fn as_str(&self) -> &str;

    /// Find the leftmost match starting at or after position `start`.
    ///
    /// Text before `start` is visible to lookbehind and anchors.
    ///
    /// ## Returns
    /// The `(start, end)` position pair, in [`Self::index_unit`] units.
    fn find_at(
        &self,
        text: &str,
        start: usize,
    ) -> Option<(usize, usize)>;

    /// Collect all successive non-overlapping matches into `dst`.
    ///
    /// Each search resumes at the end of the previous match. After an empty
    /// match the search steps one char forward, and an empty match at the
    /// end of the previous match is not reported.
    ///
    /// ## Arguments
    /// * `text` - the input.
    /// * `dst` - the output buffer; matches are appended.
    fn collect_matches(
        &self,
        text: &str,
        dst: &mut Vec<(usize, usize)>,
    ) {
        let unit = self.index_unit();
        let limit = match unit {
            IndexUnit::Byte => text.len(),
            IndexUnit::Char if text.is_ascii() => text.len(),
            IndexUnit::Char => text.chars().count(),
        };
        let step = |pos: usize| match unit {
            IndexUnit::Byte => pos + text[pos..].chars().next().map_or(1, char::len_utf8),
            IndexUnit::Char => pos + 1,
        };

        let mut pos = 0;
        let mut last_end = None;
        while pos <= limit {
            let Some((start, end)) = self.find_at(text, pos) else {
                break;
            };

            if start == end {
                pos = step(end);
                if last_end == Some(end) {
                    continue;
                }
            } else {
                pos = end;
            }

            dst.push((start, end));
            last_end = Some(end);
        }
    }
}

impl<D> MatchEngine for D
where
    D: core::ops::Deref + Send + Sync,
    D::Target: MatchEngine,
{
    fn index_unit(&self) -> IndexUnit {
        self.deref().index_unit()
    }

    fn as_str(&self) -> &str {
        self.deref().as_str()
    }

    fn find_at(
        &self,
        text: &str,
        start: usize,
    ) -> Option<(usize, usize)> {
        self.deref().find_at(text, start)
    }

    fn collect_matches(
        &self,
        text: &str,
        dst: &mut Vec<(usize, usize)>,
    ) {
        self.deref().collect_matches(text, dst)
    }
}

impl MatchEngine for RegexWrapper {
    fn index_unit(&self) -> IndexUnit {
        IndexUnit::Byte
    }

    fn as_str(&self) -> &str {
        RegexWrapper::as_str(self)
    }

    fn find_at(
        &self,
        text: &str,
        start: usize,
    ) -> Option<(usize, usize)> {
        RegexWrapper::find_at(self, text, start).map(|r| (r.start, r.end))
    }
}
