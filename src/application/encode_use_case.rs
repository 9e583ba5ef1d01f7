// ============================================================
// Layer 2 - EncodeUseCase
// ============================================================
// Frames reviews that were not part of the prepared corpus, using
// the vocabulary and row length saved by `prepare`.
//
//   Step 1: Load vocab.json + pipeline_config.json   (Layer 6)
//   Step 2: Clean the review text                    (Layer 4)
//   Step 3: Map known words to ids, skip the rest    (Layer 4)
//   Step 4: Truncate / left-pad to seq_len           (Layer 4)
//
// Unknown words are expected here (the review is new text), so they
// are skipped and counted rather than treated as an error.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::data::{
    encoder::SequenceEncoder,
    framer::Framer,
    preprocessor::Preprocessor,
    vocabulary::{VocabEntry, Vocabulary},
};
use crate::infra::artifact_store::ArtifactStore;

/// A framed review plus how much of it the vocabulary covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedText {
    pub row:     Vec<u32>,
    pub words:   usize,
    pub unknown: usize,
}

pub struct EncodeUseCase {
    vocabulary:   Vocabulary,
    framer:       Framer,
    preprocessor: Preprocessor,
}

impl EncodeUseCase {
    /// Load the artifacts written by a previous `prepare` run.
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let store  = ArtifactStore::new(out_dir);
        let config = store.load_config()?;
        let vocab  = store.load_vocabulary()?;

        tracing::info!(
            "Loaded vocabulary of {} tokens (seq_len={}) from '{}'",
            vocab.len(),
            config.seq_len,
            store.dir().display()
        );

        Ok(Self::from_parts(vocab, Framer::new(config.seq_len)?))
    }

    pub fn from_parts(vocabulary: Vocabulary, framer: Framer) -> Self {
        Self {
            vocabulary,
            framer,
            preprocessor: Preprocessor::new(),
        }
    }

    pub fn encode(&self, text: &str) -> EncodedText {
        let words          = self.preprocessor.words(text);
        let encoder        = SequenceEncoder::new(&self.vocabulary);
        let (ids, unknown) = encoder.encode_lenient(&words);

        if unknown > 0 {
            tracing::debug!("{} of {} words not in vocabulary", unknown, words.len());
        }

        EncodedText {
            row: self.framer.frame_one(&ids),
            words: words.len(),
            unknown,
        }
    }

    /// The `n` most frequent vocabulary entries
    pub fn top_tokens(&self, n: usize) -> &[VocabEntry] {
        self.vocabulary.most_common(n)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}
