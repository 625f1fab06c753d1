#![allow(missing_docs)]

use std::sync::Arc;

use divan::{Bencher, black_box, counter::BytesCount};
use spansplit::{
    CharPattern,
    FnPattern,
    Pattern,
    RegexPattern,
    StringPattern,
    patterns::known::{CL100K_SPLIT_PATTERN, GPT2_SPLIT_PATTERN, O200K_SPLIT_PATTERN},
    regex::RegexWrapperPattern,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

static ENGLISH_CORPUS: &str = "\
The quick brown fox jumps over the lazy dog. It's 3:45pm and we've got \
12 more miles to go; they'll meet us at the station around 6.\n\
Numbers like 1234567 and 3.14159 are split into short digit runs, \
while   runs of    whitespace   are kept together.\r\n";

static DIVERSE_CORPUS: &str = "\
Caf\u{e9} na\u{ef}ve r\u{e9}sum\u{e9} \u{2014} \u{4f60}\u{597d}\u{4e16}\u{754c} \
\u{3053}\u{3093}\u{306b}\u{3061}\u{306f} \u{41f}\u{440}\u{438}\u{432}\u{435}\u{442} \
\u{645}\u{631}\u{62d}\u{628}\u{627} \u{1f600}\u{1f680} \u{2581}meta\u{2581}space \
\u{cd5c}\u{ace0}\u{c785}\u{b2c8}\u{b2e4}!\n";

fn english_text() -> String {
    ENGLISH_CORPUS.repeat(100)
}

fn diverse_text() -> String {
    DIVERSE_CORPUS.repeat(100)
}

fn run(
    bencher: Bencher,
    text: String,
    pattern: Arc<dyn Pattern>,
) {
    bencher
        .counter(BytesCount::new(text.len()))
        .bench(|| pattern.find_matches(black_box(&text)));
}

fn regex(pattern: impl Into<RegexWrapperPattern>) -> Arc<dyn Pattern> {
    Arc::new(RegexPattern::new(pattern).unwrap())
}

mod english {
    use super::*;

    #[divan::bench]
    fn char_space(bencher: Bencher) {
        run(bencher, english_text(), Arc::new(CharPattern::new(' ')));
    }

    #[divan::bench]
    fn fn_whitespace(bencher: Bencher) {
        run(bencher, english_text(), Arc::new(FnPattern::whitespace()));
    }

    #[divan::bench]
    fn string_the(bencher: Bencher) {
        run(bencher, english_text(), Arc::new(StringPattern::new("the")));
    }

    #[divan::bench]
    fn gpt2(bencher: Bencher) {
        run(bencher, english_text(), regex(GPT2_SPLIT_PATTERN));
    }

    #[divan::bench]
    fn cl100k(bencher: Bencher) {
        run(bencher, english_text(), regex(CL100K_SPLIT_PATTERN));
    }

    #[divan::bench]
    fn o200k(bencher: Bencher) {
        run(bencher, english_text(), regex(O200K_SPLIT_PATTERN));
    }
}

mod diverse {
    use super::*;

    #[divan::bench]
    fn char_metaspace(bencher: Bencher) {
        run(bencher, diverse_text(), Arc::new(CharPattern::new('\u{2581}')));
    }

    #[divan::bench]
    fn fn_whitespace(bencher: Bencher) {
        run(bencher, diverse_text(), Arc::new(FnPattern::whitespace()));
    }

    #[divan::bench]
    fn gpt2(bencher: Bencher) {
        run(bencher, diverse_text(), regex(GPT2_SPLIT_PATTERN));
    }

    #[divan::bench]
    fn cl100k(bencher: Bencher) {
        run(bencher, diverse_text(), regex(CL100K_SPLIT_PATTERN));
    }

    #[divan::bench]
    fn o200k(bencher: Bencher) {
        run(bencher, diverse_text(), regex(O200K_SPLIT_PATTERN));
    }
}
