// ============================================================
// Layer 4 - Preprocessing Pipeline
// ============================================================
// Runs the data stages in order and returns everything the
// training loop needs:
//
//   raw reviews + raw labels
//       │
//       ▼
//   Preprocessor      -> per-review word lists
//       │
//       ▼
//   Vocabulary        -> token -> id, most frequent first
//       │
//       ▼
//   SequenceEncoder   -> id sequences, empty reviews dropped
//       │                (labels dropped with them)
//       ▼
//   Framer            -> [rows, seq_len] matrix
//       │
//       ▼
//   split_dataset     -> train / valid / test
//       │
//       ▼
//   BatchLoader       -> fixed-size batches, on demand
//
// All configuration is checked when the Pipeline is built, before
// any text is touched. The vocabulary and config are plain values
// returned to the caller; nothing is stored globally.

use serde::{Deserialize, Serialize};

use crate::data::{
    batcher::BatchLoader,
    encoder::{EncodedReviews, SequenceEncoder},
    framer::{Framer, DEFAULT_SEQ_LEN},
    preprocessor::{split_records, Preprocessor},
    splitter::{split_dataset, DatasetSplits, SplitFractions, SplitKind},
    vocabulary::Vocabulary,
};
use crate::domain::{corpus::RawCorpus, sentiment::Sentiment};
use crate::error::{PipelineError, Result};

// ─── PipelineConfig ───────────────────────────────────────────────────────────
/// Everything that shapes the prepared data.
/// Serialisable so it can be saved next to the vocabulary and reused
/// when framing new reviews later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Length of every framed row
    pub seq_len: usize,

    /// Train / validation / test proportions
    pub split: SplitFractions,

    /// Rows per batch. There is deliberately no default.
    pub batch_size: usize,
}

impl PipelineConfig {
    /// Config with the default row length (200) and split (0.8/0.1/0.1).
    pub fn new(batch_size: usize) -> Result<Self> {
        let cfg = Self {
            seq_len: DEFAULT_SEQ_LEN,
            split:   SplitFractions::default(),
            batch_size,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_seq_len(mut self, seq_len: usize) -> Result<Self> {
        self.seq_len = seq_len;
        self.validate()?;
        Ok(self)
    }

    pub fn with_split(mut self, split: SplitFractions) -> Result<Self> {
        self.split = split;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        Framer::new(self.seq_len)?;
        self.split.validate()?;
        if self.batch_size == 0 {
            return Err(PipelineError::Config(
                "batch size must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

// ─── Labels ───────────────────────────────────────────────────────────────────
/// Parse the labels text into 1/0 values, one per line.
/// Returns the labels and how many lines were neither label word.
pub fn parse_labels(text: &str) -> (Vec<u8>, usize) {
    let mut unrecognised = 0usize;
    let labels = split_records(text)
        .map(|line| {
            if !Sentiment::is_recognised(line) {
                unrecognised += 1;
            }
            Sentiment::from_line(line).as_label()
        })
        .collect();
    (labels, unrecognised)
}

// ─── PreparedData ─────────────────────────────────────────────────────────────
/// Output of a pipeline run.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub vocabulary: Vocabulary,
    pub splits:     DatasetSplits,
    pub config:     PipelineConfig,

    /// Reviews removed because nothing was left after cleaning
    pub dropped_reviews: usize,
}

impl PreparedData {
    /// Batches over one split, using the configured batch size.
    pub fn batches(&self, kind: SplitKind) -> Result<BatchLoader<'_>> {
        BatchLoader::new(self.splits.get(kind), self.config.batch_size)
    }

    /// Rows across all three splits
    pub fn total_rows(&self) -> usize {
        self.splits.total_rows()
    }
}

// ─── Pipeline ─────────────────────────────────────────────────────────────────
pub struct Pipeline {
    config:       PipelineConfig,
    framer:       Framer,
    preprocessor: Preprocessor,
}

impl Pipeline {
    /// Validate `config` and build the pipeline.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            framer: Framer::new(config.seq_len)?,
            config,
            preprocessor: Preprocessor::new(),
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run_corpus(&self, corpus: &RawCorpus) -> Result<PreparedData> {
        self.run(&corpus.reviews, &corpus.labels)
    }

    /// Run every stage over the review and label texts.
    pub fn run(&self, reviews_text: &str, labels_text: &str) -> Result<PreparedData> {
        // ── Step 1: Normalise ─────────────────────────────────────────────────
        let corpus = self.preprocessor.normalize(reviews_text);
        let (labels, unrecognised) = parse_labels(labels_text);

        // Must hold before the empty-review filter, or alignment is lost
        if corpus.review_count() != labels.len() {
            return Err(PipelineError::LabelCountMismatch {
                reviews: corpus.review_count(),
                labels:  labels.len(),
            });
        }
        if unrecognised > 0 {
            tracing::warn!(
                "{} label lines were neither 'positive' nor 'negative'; treated as negative",
                unrecognised
            );
        }

        // ── Step 2: Vocabulary ────────────────────────────────────────────────
        let vocabulary = Vocabulary::build(corpus.tokens())?;
        tracing::info!(
            "Vocabulary: {} distinct tokens from {} reviews",
            vocabulary.len(),
            corpus.review_count()
        );

        // ── Step 3: Encode and drop empty reviews ─────────────────────────────
        let encoder   = SequenceEncoder::new(&vocabulary);
        let sequences = encoder.encode_all(&corpus.reviews)?;
        let mut encoded = EncodedReviews::new(sequences, labels)?;
        let dropped     = encoded.drop_empty();
        if dropped > 0 {
            tracing::warn!("Dropped {} empty reviews and their labels", dropped);
        }

        // ── Step 4: Frame ─────────────────────────────────────────────────────
        let (sequences, labels) = encoded.into_parts();
        let features = self.framer.frame(&sequences);

        // ── Step 5: Split ─────────────────────────────────────────────────────
        let splits = split_dataset(features, labels, &self.config.split)?;
        tracing::info!(
            "Prepared {} rows of length {}: {} train, {} valid, {} test",
            splits.total_rows(),
            self.config.seq_len,
            splits.train.len(),
            splits.valid.len(),
            splits.test.len(),
        );

        Ok(PreparedData {
            vocabulary,
            splits,
            config: self.config,
            dropped_reviews: dropped,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> PipelineConfig {
        PipelineConfig::new(1).unwrap().with_seq_len(4).unwrap()
    }

    #[test]
    fn test_parse_labels() {
        let (labels, unrecognised) = parse_labels("positive\nnegative\nmeh\n");
        assert_eq!(labels, vec![1, 0, 0]);
        assert_eq!(unrecognised, 1);
    }

    #[test]
    fn test_config_rejects_zero_values() {
        assert!(PipelineConfig::new(0).is_err());
        assert!(PipelineConfig::new(10).unwrap().with_seq_len(0).is_err());
    }

    #[test]
    fn test_config_rejects_bad_split() {
        let bad = SplitFractions { train: 0.9, valid: 0.2, test: 0.1 };
        assert!(PipelineConfig::new(10).unwrap().with_split(bad).is_err());
    }

    #[test]
    fn test_label_count_mismatch() {
        let pipeline = Pipeline::new(small_config()).unwrap();
        let err = pipeline.run("a\nb\nc", "positive\nnegative").unwrap_err();
        assert!(matches!(err, PipelineError::LabelCountMismatch { reviews: 3, labels: 2 }));
    }

    #[test]
    fn test_empty_reviews_dropped_with_labels() {
        let pipeline = Pipeline::new(small_config()).unwrap();
        let reviews  = "great fun\n...\nawful\n!!\nfun fun\nok\nmeh\nbad\nfine\ngood";
        let labels   = "positive\nnegative\nnegative\npositive\npositive\npositive\nnegative\nnegative\npositive\npositive";
        let data     = pipeline.run(reviews, labels).unwrap();

        assert_eq!(data.dropped_reviews, 2);
        assert_eq!(data.total_rows(), 8);

        // Train keeps corpus order: great fun, awful, fun fun, ok, meh, bad
        let fun = data.vocabulary.id("fun").unwrap();
        assert_eq!(data.splits.train.labels(), &[1, 0, 1, 1, 0, 0]);
        assert_eq!(data.splits.train.features().row(2), &[0, 0, fun, fun]);
    }

    #[test]
    fn test_batches_use_configured_size() {
        let cfg      = PipelineConfig::new(2).unwrap().with_seq_len(3).unwrap();
        let pipeline = Pipeline::new(cfg).unwrap();
        let reviews  = (0..10).map(|i| format!("w{i}")).collect::<Vec<_>>().join("\n");
        let labels   = vec!["positive"; 10].join("\n");
        let data     = pipeline.run(&reviews, &labels).unwrap();

        let loader = data.batches(SplitKind::Train).unwrap();
        assert_eq!(loader.batch_size(), 2);
        assert_eq!(loader.num_batches(), 4);
    }
}
