//! Stopword filtering.
//!
//! The standard lexicon is a fixed list of English function words and contractions.
//! The extended lexicon adds the ISO English list from the `stop-words` crate.
//! Typographic apostrophes are folded to `'` on both sides of the lookup, so
//! `don’t` and `don't` are treated alike.

use std::{collections::HashSet, sync::LazyLock};

use stop_words::LANGUAGE;
use termweight_config::StopwordLexicon;

/// A stopword filter over one lexicon.
///
/// All words are stored lowercased with ASCII apostrophes.
#[derive(Clone)]
pub struct Stopwords {
    /// Folded lexicon entries.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a filter over the standard lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(StopwordLexicon::Standard)
    }

    /// Creates a filter over the given lexicon.
    pub fn with_lexicon(lexicon: StopwordLexicon) -> Self {
        let mut words = STANDARD_SET.clone();
        if lexicon == StopwordLexicon::Extended {
            words.extend(stop_words::get(LANGUAGE::English).iter().map(|w| fold(w)));
        }
        Self { words }
    }

    /// Checks if a token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&fold(token))
    }

    /// Removes stopwords, keeping the remaining tokens in order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lowercases and replaces typographic single quotes with `'`.
fn fold(word: &str) -> String {
    word.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

/// The standard lexicon, folded once per process.
static STANDARD_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| STANDARD.iter().map(|w| fold(w)).collect());

/// English function words and contractions.
static STANDARD: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's", "me",
    "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such",
    "than", "that", "that’s", "the", "their", "theirs", "them", "themselves", "then", "there",
    "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't", "would",
    "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours", "yourself",
    "yourselves",
];
