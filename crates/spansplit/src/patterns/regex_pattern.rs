//! # Extended Regex Pattern

use std::sync::Arc;

use crate::{
    errors::{SSResult, SpanSplitError},
    offsets::OffsetTranslator,
    patterns::Pattern,
    regex::{MatchEngine, RegexWrapper, RegexWrapperPattern},
    scratch::ScratchPools,
    spans::{OffsetsMatch, build_covering_spans},
};

/// Initial capacity requested for the raw match list.
const RAW_MATCH_CAPACITY: usize = 8;

/// Matches every successive non-overlapping match of a regex.
///
/// The default engine is a [`RegexWrapper`], which supports lookaround
/// (through `fancy_regex`) when the pattern needs it. Any [`MatchEngine`]
/// may be used; engines reporting char positions are translated to byte
/// offsets through a pooled offset table.
///
/// The offset table and raw match list are drawn from [`ScratchPools`],
/// and returned before each call completes.
#[derive(Debug, Clone)]
pub struct RegexPattern<E = RegexWrapper> {
    engine: E,
    scratch: Arc<ScratchPools>,
}

impl RegexPattern<RegexWrapper> {
    /// Compile `pattern`, preferring `regex` and falling up to `fancy_regex`.
    ///
    /// ## Returns
    /// [`SpanSplitError::PatternCompile`] if the pattern does not compile.
    pub fn new<P>(pattern: P) -> SSResult<Self>
    where
        P: Into<RegexWrapperPattern>,
    {
        let pattern = pattern.into();
        match pattern.compile() {
            Ok(re) => Ok(Self::from_engine(re)),
            Err(source) => Err(SpanSplitError::PatternCompile {
                pattern: pattern.as_str().to_string(),
                source,
            }),
        }
    }

    /// Compile `pattern` with `fancy_regex`.
    pub fn fancy<S: AsRef<str>>(pattern: S) -> SSResult<Self> {
        Self::new(RegexWrapperPattern::Fancy(pattern.as_ref().to_string()))
    }

    /// Compile `pattern` with `regex`.
    pub fn basic<S: AsRef<str>>(pattern: S) -> SSResult<Self> {
        Self::new(RegexWrapperPattern::Basic(pattern.as_ref().to_string()))
    }
}

impl<E: MatchEngine> RegexPattern<E> {
    /// Build a pattern over an already-compiled engine, with its own scratch pools.
    pub fn from_engine(engine: E) -> Self {
        Self {
            engine,
            scratch: Default::default(),
        }
    }

    /// Replace the scratch pools.
    ///
    /// Share one [`ScratchPools`] between patterns to bound pooled memory
    /// per process or per worker.
    pub fn with_scratch_pools(
        self,
        scratch: Arc<ScratchPools>,
    ) -> Self {
        Self { scratch, ..self }
    }

    /// The scratch pools.
    pub fn scratch_pools(&self) -> &Arc<ScratchPools> {
        &self.scratch
    }

    /// The match engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The source pattern text.
    pub fn as_str(&self) -> &str {
        self.engine.as_str()
    }
}

impl<E: MatchEngine> Pattern for RegexPattern<E> {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip(self, text)))]
    fn find_matches(
        &self,
        text: &str,
    ) -> Vec<OffsetsMatch> {
        if text.is_empty() {
            return vec![OffsetsMatch::unmatched(0..0)];
        }

        let translator = OffsetTranslator::new(
            text,
            self.engine.index_unit(),
            &self.scratch.offsets_pool,
        );

        let mut ranges = self.scratch.ranges_pool.checkout(RAW_MATCH_CAPACITY);
        self.engine.collect_matches(text, &mut ranges);
        if ranges.is_empty() {
            return vec![OffsetsMatch::unmatched(0..text.len())];
        }

        translator.translate_ranges(&mut ranges);
        build_covering_spans(text.len(), &ranges)
    }
}
