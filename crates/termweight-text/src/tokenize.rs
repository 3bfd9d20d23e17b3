//! Treebank-style word tokenization.
//!
//! Follows the Penn Treebank conventions: punctuation is split from words, clitics
//! such as `n't`, `'ll` and `'s` become their own tokens, and a handful of fused
//! forms (`cannot`, `gonna`, `'tis`) are separated. The rules are an ordered list of
//! regex rewrites over the whole document followed by a whitespace split.

use std::sync::LazyLock;

use regex::Regex;

/// A regex rewrite applied to the whole document.
struct Rewrite {
    /// Pattern to replace.
    pattern: Regex,
    /// Replacement text with `$n` group references.
    replacement: &'static str,
}

impl Rewrite {
    /// Applies the rewrite to every non-overlapping match.
    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

/// Compiles a static rule table.
fn compile(rules: &[(&str, &'static str)]) -> Vec<Rewrite> {
    rules
        .iter()
        .map(|&(pattern, replacement)| Rewrite {
            pattern: Regex::new(pattern).expect("tokenizer pattern should compile"),
            replacement,
        })
        .collect()
}

/// Quote, punctuation, bracket and dash rules, applied before padding.
static LEADING_RULES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    compile(&[
        // Opening double quotes
        (r#"^""#, "``"),
        (r"(``)", " $1 "),
        (r#"([ (\[{<])("|'')"#, "$1 `` "),
        // Colons and commas not inside numbers
        (r"([:,])([^\d])", " $1 $2"),
        (r"([:,])$", " $1 "),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " $0 "),
        // Only the sentence-final period is split
        (r#"([^.])(\.)([\])}>"']*)\s*$"#, "$1 $2$3 "),
        (r"[?!]", " $0 "),
        (r"([^'])' ", "$1 ' "),
        // Brackets
        (r"[\]\[(){}<>]", " $0 "),
        (r"--", " -- "),
    ])
});

/// Closing quote and contraction rules, applied to the space-padded text.
static TRAILING_RULES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    compile(&[
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
        (r"(?i)\b(can)(not)\b", " $1 $2 "),
        (r"(?i)\b(d)('ye)\b", " $1 $2 "),
        (r"(?i)\b(gim)(me)\b", " $1 $2 "),
        (r"(?i)\b(gon)(na)\b", " $1 $2 "),
        (r"(?i)\b(got)(ta)\b", " $1 $2 "),
        (r"(?i)\b(lem)(me)\b", " $1 $2 "),
        (r"(?i)\b(more)('n)\b", " $1 $2 "),
        (r"(?i)\b(wan)(na)(\s)", " $1 $2 $3"),
        (r"(?i) ('t)(is)\b", " $1 $2 "),
        (r"(?i) ('t)(was)\b", " $1 $2 "),
    ])
});

/// Splits a document into lowercase Treebank tokens.
///
/// Lowercasing happens here regardless of whether the document was normalized.
pub fn tokenize(text: &str) -> Vec<String> {
    let leading = LEADING_RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc));

    let padded = format!(" {leading} ");
    let rewritten = TRAILING_RULES
        .iter()
        .fold(padded, |acc, rule| rule.apply(&acc));

    rewritten
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
