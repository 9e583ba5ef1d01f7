// ============================================================
// Layer 6 - Artifact Store
// ============================================================
// Saves what a later run needs to frame reviews exactly the way
// the training data was framed.
//
// Files per output directory:
//   out/
//     vocab.json             ← tokens in id order, with counts
//     pipeline_config.json   ← seq_len, split fractions, batch size
//
// Why save the vocabulary?
//   Ids depend on the corpus. A review framed with a vocabulary
//   rebuilt from different text would map words to the wrong
//   embedding rows, so the exact mapping is kept on disk.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::pipeline::PipelineConfig;
use crate::data::vocabulary::{VocabEntry, Vocabulary};

const VOCAB_FILE:  &str = "vocab.json";
const CONFIG_FILE: &str = "pipeline_config.json";

/// On-disk layout of vocab.json
#[derive(Debug, Serialize, Deserialize)]
struct VocabFile {
    /// Number of real tokens; ids run 1..=size and 0 is padding
    size:    usize,
    entries: Vec<VocabEntry>,
}

pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Write vocab.json, creating the directory if needed.
    pub fn save_vocabulary(&self, vocab: &Vocabulary) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.dir.join(VOCAB_FILE);
        let file = VocabFile {
            size:    vocab.len(),
            entries: vocab.entries().to_vec(),
        };

        fs::write(&path, serde_json::to_string_pretty(&file)?)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))?;

        tracing::info!("Saved {} tokens to '{}'", vocab.len(), path.display());
        Ok(path)
    }

    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        let path = self.dir.join(VOCAB_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read vocabulary from '{}'. \
                     Make sure you have run 'prepare' first.",
                    path.display()
                )
            })?;

        let file: VocabFile = serde_json::from_str(&json)
            .with_context(|| format!("Malformed vocabulary file '{}'", path.display()))?;

        if file.size != file.entries.len() {
            anyhow::bail!(
                "'{}' declares {} tokens but lists {}",
                path.display(),
                file.size,
                file.entries.len()
            );
        }

        Ok(Vocabulary::from_entries(file.entries)?)
    }

    /// Save the pipeline configuration to JSON.
    pub fn save_config(&self, cfg: &PipelineConfig) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create '{}'", self.dir.display()))?;

        let path = self.dir.join(CONFIG_FILE);
        fs::write(&path, serde_json::to_string_pretty(cfg)?)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved pipeline config to '{}'", path.display());
        Ok(path)
    }

    /// Load and re-validate the saved configuration.
    pub fn load_config(&self) -> Result<PipelineConfig> {
        let path = self.dir.join(CONFIG_FILE);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg: PipelineConfig = serde_json::from_str(&json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
