//! Pipeline stage selection.
//!
//! Normalization, stopword removal and stemming are optional. Which of them run
//! is decided once per invocation by [`PipelineSettings`], which also derives the
//! file-name suffix that keeps outputs from different stage combinations apart.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An optional preprocessing stage, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Lowercase and strip ASCII punctuation before tokenizing.
    Normalize,
    /// Drop tokens found in the stopword lexicon.
    RemoveStopwords,
    /// Reduce tokens to their Porter stems.
    Stem,
}

impl Stage {
    /// All optional stages, in the order they run.
    pub const ALL: [Self; 3] = [Self::Normalize, Self::RemoveStopwords, Self::Stem];

    /// Short code used in output file-name suffixes.
    pub fn code(self) -> &'static str {
        match self {
            Self::Normalize => "c",
            Self::RemoveStopwords => "sw",
            Self::Stem => "st",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normalize => write!(f, "normalize"),
            Self::RemoveStopwords => write!(f, "remove-stopwords"),
            Self::Stem => write!(f, "stem"),
        }
    }
}

/// Which stopword lexicon the filter loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwordLexicon {
    /// Fixed list of English function words and contractions.
    #[default]
    Standard,
    /// The standard list plus the ISO English stopword list.
    Extended,
}

impl FromStr for StopwordLexicon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(format!(
                "unknown stopword lexicon '{other}' (expected 'standard' or 'extended')"
            )),
        }
    }
}

impl fmt::Display for StopwordLexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

/// Stage toggles for one pipeline run.
///
/// Tokenization, counting and weighting always run; these flags only control the
/// optional stages around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Lowercase and strip punctuation before tokenizing.
    pub normalize: bool,
    /// Remove stopwords after tokenizing.
    pub remove_stopwords: bool,
    /// Apply the Porter stemmer after stopword removal.
    pub stem: bool,
    /// Lexicon used when `remove_stopwords` is set.
    pub stopwords: StopwordLexicon,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            normalize: true,
            remove_stopwords: true,
            stem: true,
            stopwords: StopwordLexicon::Standard,
        }
    }
}

impl PipelineSettings {
    /// Settings with every optional stage turned off.
    pub fn tokenize_only() -> Self {
        Self {
            normalize: false,
            remove_stopwords: false,
            stem: false,
            stopwords: StopwordLexicon::Standard,
        }
    }

    /// Returns true if the given stage is enabled.
    pub fn is_enabled(&self, stage: Stage) -> bool {
        match stage {
            Stage::Normalize => self.normalize,
            Stage::RemoveStopwords => self.remove_stopwords,
            Stage::Stem => self.stem,
        }
    }

    /// Enabled stages in pipeline order.
    pub fn enabled_stages(&self) -> Vec<Stage> {
        Stage::ALL
            .into_iter()
            .filter(|stage| self.is_enabled(*stage))
            .collect()
    }

    /// File-name suffix identifying this stage combination.
    ///
    /// Empty when no optional stage runs, otherwise `_` followed by the enabled
    /// stage codes joined with `_` (for example `_c_st`). The extended lexicon
    /// is marked as `swx` so its outputs never overwrite standard-lexicon runs.
    pub fn suffix(&self) -> String {
        let codes: Vec<&str> = self
            .enabled_stages()
            .into_iter()
            .map(|stage| match (stage, self.stopwords) {
                (Stage::RemoveStopwords, StopwordLexicon::Extended) => "swx",
                _ => stage.code(),
            })
            .collect();

        if codes.is_empty() {
            String::new()
        } else {
            format!("_{}", codes.join("_"))
        }
    }
}
