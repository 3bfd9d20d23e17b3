//! Text preprocessing for termweight.
//!
//! A document passes through up to four stages before it is counted:
//!
//! 1. **Normalization** (optional): lowercase and strip ASCII punctuation
//! 2. **Tokenization**: Penn Treebank rules, always lowercased
//! 3. **Stopword removal** (optional): drop function words and contractions
//! 4. **Stemming** (optional): classic Porter suffix stripping
//!
//! [`Preprocessor`] composes the stages selected by a [`PipelineSettings`]. The
//! individual stages are also exported for callers that need only one of them.

#![warn(missing_docs)]

mod normalize;
mod stem;
mod stopwords;
mod tokenize;

pub use normalize::normalize;
pub use stem::{PorterMode, PorterStemmer};
pub use stopwords::Stopwords;
use termweight_config::PipelineSettings;
pub use tokenize::tokenize;

/// Runs the enabled preprocessing stages over documents.
#[derive(Clone)]
pub struct Preprocessor {
    /// Whether documents are normalized before tokenizing.
    normalize: bool,
    /// Stopword filter, when stopword removal is enabled.
    stopwords: Option<Stopwords>,
    /// Stemmer, when stemming is enabled.
    stemmer: Option<PorterStemmer>,
}

impl Preprocessor {
    /// Builds a preprocessor for the given stage selection.
    pub fn new(settings: &PipelineSettings) -> Self {
        Self {
            normalize: settings.normalize,
            stopwords: settings
                .remove_stopwords
                .then(|| Stopwords::with_lexicon(settings.stopwords)),
            stemmer: settings.stem.then(PorterStemmer::new),
        }
    }

    /// Turns one document into its final token sequence.
    pub fn process(&self, document: &str) -> Vec<String> {
        let mut tokens = if self.normalize {
            tokenize(&normalize(document))
        } else {
            tokenize(document)
        };
        if let Some(stopwords) = &self.stopwords {
            tokens = stopwords.filter(tokens);
        }
        if let Some(stemmer) = &self.stemmer {
            tokens = stemmer.stem_tokens(tokens);
        }
        tokens
    }

    /// Processes documents in order, one token sequence per document.
    pub fn process_all<'a, I>(&self, documents: I) -> Vec<Vec<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        documents.into_iter().map(|doc| self.process(doc)).collect()
    }
}
