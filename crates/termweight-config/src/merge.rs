//! Configuration merging.
//!
//! Folds discovered layers into a single `Config`. Layers are applied from lowest
//! precedence to highest, so for every setting the closest file that mentions it wins.

use crate::{
    Config, DEFAULT_OUTPUT_DIR, OutputSettings, PipelineSettings, PreviewSettings,
    discovery::{ConfigLayer, ConfigScope},
    parse::{RawPipelineSettings, RawPreviewSettings},
};

/// Merges layers, given closest first, into the effective configuration.
///
/// The closest project file sets the config root. Without an explicit `[output] dir`,
/// tables go to `outputs/` there, or under the working directory when only the global
/// file applies.
pub fn merge_layers(layers: &[ConfigLayer]) -> Config {
    let config_root = layers
        .iter()
        .find(|layer| layer.source.scope == ConfigScope::Project)
        .map(|layer| layer.dir().to_path_buf());

    let mut config = Config {
        output: config_root
            .as_ref()
            .map(|root| OutputSettings {
                dir: root.join(DEFAULT_OUTPUT_DIR),
            })
            .unwrap_or_default(),
        config_root,
        sources: layers.iter().map(|layer| layer.source.clone()).collect(),
        ..Config::default()
    };

    for layer in layers.iter().rev() {
        layer.apply(&mut config);
    }

    config
}

impl ConfigLayer {
    /// Overwrites every setting this layer defines.
    fn apply(&self, config: &mut Config) {
        if let Some(ref pipeline) = self.raw.pipeline {
            apply_pipeline(&mut config.pipeline, pipeline);
        }
        if let Some(ref path) = self.corpus_path {
            config.corpus.path = Some(path.clone());
        }
        if let Some(format) = self.raw.corpus.as_ref().and_then(|c| c.format) {
            config.corpus.format = format;
        }
        if let Some(ref dir) = self.output_dir {
            config.output.dir = dir.clone();
        }
        if let Some(ref preview) = self.raw.preview {
            apply_preview(&mut config.preview, preview);
        }
    }
}

/// Applies the stage toggles a layer sets.
fn apply_pipeline(result: &mut PipelineSettings, raw: &RawPipelineSettings) {
    if let Some(v) = raw.normalize {
        result.normalize = v;
    }
    if let Some(v) = raw.remove_stopwords {
        result.remove_stopwords = v;
    }
    if let Some(v) = raw.stem {
        result.stem = v;
    }
    if let Some(v) = raw.stopwords {
        result.stopwords = v;
    }
}

/// Applies the preview counts a layer sets.
fn apply_preview(result: &mut PreviewSettings, raw: &RawPreviewSettings) {
    if let Some(v) = raw.top {
        result.top = v;
    }
    if let Some(v) = raw.bottom {
        result.bottom = v;
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{CorpusFormat, StopwordLexicon, parse::parse_config};

    /// Builds a project layer from TOML text at a fake path.
    fn layer(path: &str, toml: &str) -> ConfigLayer {
        ConfigLayer::from_raw(
            PathBuf::from(path),
            ConfigScope::Project,
            parse_config(toml).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn no_layers_gives_defaults() {
        let config = merge_layers(&[]);
        assert!(config.config_root.is_none());
        assert!(config.sources.is_empty());
        assert_eq!(config.output.dir, PathBuf::from("outputs"));
    }

    #[test]
    fn single_layer_sets_root_and_output() {
        let config = merge_layers(&[layer("/project/.termweight.toml", "")]);
        assert_eq!(config.config_root, Some(PathBuf::from("/project")));
        assert_eq!(config.output.dir, PathBuf::from("/project/outputs"));
        assert_eq!(config.pipeline, PipelineSettings::default());
        assert_eq!(config.sources.len(), 1);
    }

    #[test]
    fn closer_layer_wins_per_field() {
        let config = merge_layers(&[
            layer("/project/sub/.termweight.toml", "[pipeline]\nstem = false\n"),
            layer(
                "/project/.termweight.toml",
                "[pipeline]\nstem = true\nnormalize = false\nstopwords = \"extended\"\n",
            ),
        ]);
        assert!(!config.pipeline.stem);
        assert!(!config.pipeline.normalize);
        assert!(config.pipeline.remove_stopwords);
        assert_eq!(config.pipeline.stopwords, StopwordLexicon::Extended);
    }

    #[test]
    fn corpus_path_keeps_declaring_directory() {
        let config = merge_layers(&[
            layer("/project/sub/.termweight.toml", "[preview]\ntop = 3\n"),
            layer(
                "/project/.termweight.toml",
                "[corpus]\npath = \"data/corpus.txt\"\nformat = \"lines\"\n",
            ),
        ]);
        assert_eq!(
            config.corpus.path,
            Some(PathBuf::from("/project/data/corpus.txt"))
        );
        assert_eq!(config.corpus.format, CorpusFormat::Lines);
        assert_eq!(config.preview.top, 3);
        assert_eq!(config.preview.bottom, 5);
        assert_eq!(config.config_root, Some(PathBuf::from("/project/sub")));
    }

    #[test]
    fn output_dir_override() {
        let config = merge_layers(&[layer(
            "/project/.termweight.toml",
            "[output]\ndir = \"/tmp/tables\"\n",
        )]);
        assert_eq!(config.output.dir, PathBuf::from("/tmp/tables"));
    }

    /// Builds the home-directory layer from TOML text.
    fn global(toml: &str) -> ConfigLayer {
        ConfigLayer::from_raw(
            PathBuf::from("/home/me/.termweight.toml"),
            ConfigScope::Global,
            parse_config(toml).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn global_layer_yields_to_project() {
        let config = merge_layers(&[
            layer("/project/.termweight.toml", "[preview]\nbottom = 1\n"),
            global("[preview]\ntop = 9\nbottom = 9\n"),
        ]);
        assert_eq!(config.preview, PreviewSettings { top: 9, bottom: 1 });
        assert_eq!(config.sources[1].scope, ConfigScope::Global);
        assert_eq!(config.config_root, Some(PathBuf::from("/project")));
    }

    #[test]
    fn global_alone_keeps_outputs_local() {
        let config = merge_layers(&[global("[pipeline]\nstem = false\n")]);
        assert!(config.config_root.is_none());
        assert_eq!(config.output.dir, PathBuf::from("outputs"));
        assert!(!config.pipeline.stem);
        assert_eq!(config.sources.len(), 1);
    }
}
