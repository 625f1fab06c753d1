//! # Offset Translation
//!
//! Some regex engines report match positions in character (Unicode scalar)
//! units, while spans are addressed in UTF-8 byte units. The
//! [`OffsetTranslator`] reconciles the two.
//!
//! For ASCII input the two units coincide, and no table is built. Otherwise
//! a char-index to byte-offset table is drawn from a [`ScratchPool`], filled
//! in one pass, and closed with a sentinel entry equal to the byte length.

use crate::scratch::{Scratch, ScratchPool};

/// The unit in which an engine reports match positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexUnit {
    /// UTF-8 byte offsets.
    #[default]
    Byte,

    /// Unicode scalar value (char) indices.
    Char,
}

/// Is `text` pure ASCII, so that char and byte indices coincide?
pub fn is_ascii_fast(text: &str) -> bool {
    text.is_ascii()
}

/// Translates engine positions to byte offsets for one input.
///
/// Holds a pooled offset table only when the input needs one;
/// the table returns to its pool when the translator drops.
pub struct OffsetTranslator<'p> {
    len: usize,
    table: Option<Scratch<'p, usize>>,
}

impl<'p> OffsetTranslator<'p> {
    /// Build a translator for `text`.
    ///
    /// ## Arguments
    /// * `text` - the input the positions refer to.
    /// * `unit` - the unit the positions are reported in.
    /// * `offsets_pool` - the pool to draw an offset table from.
    pub fn new(
        text: &str,
        unit: IndexUnit,
        offsets_pool: &'p ScratchPool<usize>,
    ) -> Self {
        let len = text.len();
        if unit == IndexUnit::Byte || is_ascii_fast(text) {
            return Self { len, table: None };
        }

        let mut table = offsets_pool.checkout(text.chars().count() + 1);
        table.extend(text.char_indices().map(|(idx, _)| idx));
        table.push(len);

        Self {
            len,
            table: Some(table),
        }
    }

    /// Is this translator on the identity fast path?
    pub fn is_identity(&self) -> bool {
        self.table.is_none()
    }

    /// The byte length of the input.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the input empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Translate an engine position to a byte offset.
    ///
    /// Positions past the end of the input clamp to its byte length.
    pub fn to_byte(
        &self,
        idx: usize,
    ) -> usize {
        match &self.table {
            None => idx.min(self.len),
            Some(table) => table.get(idx).copied().unwrap_or(self.len),
        }
    }

    /// Translate a byte offset back to an engine position.
    ///
    /// `byte` must lie on a char boundary.
    pub fn to_unit(
        &self,
        byte: usize,
    ) -> usize {
        match &self.table {
            None => byte.min(self.len),
            Some(table) => table.partition_point(|&b| b < byte),
        }
    }

    /// Translate engine-unit `(start, end)` ranges to byte ranges, in place.
    pub fn translate_ranges(
        &self,
        ranges: &mut [(usize, usize)],
    ) {
        for range in ranges.iter_mut() {
            *range = (self.to_byte(range.0), self.to_byte(range.1));
        }
    }
}
