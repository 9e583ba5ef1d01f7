// ============================================================
// Layer 4 - Train/Validation/Test Splitter
// ============================================================
// Cuts the framed dataset into three consecutive pieces:
//   - Training set:   used to update model weights
//   - Validation set: used to watch for overfitting during training
//   - Test set:       held back for the final evaluation
//
// How the cut points are computed (n = number of rows):
//   train_rows = floor(train * n)
//   remainder  = n - train_rows
//   valid_rows = floor(valid / (valid + test) * remainder)
//   test_rows  = remainder - valid_rows
//
// With the default 0.8 / 0.1 / 0.1 the remainder is halved, and any
// odd row left over by flooring lands in the test set. Nothing is
// lost and nothing overlaps.
//
// There is NO shuffling. The splits follow corpus order, so if the
// corpus is sorted (say all positive reviews first) the splits will
// be skewed the same way. Shuffle the corpus file beforehand if that
// matters.
//
// Reference: Rust Book §8 (Vectors)

use serde::{Deserialize, Serialize};

use crate::data::framer::FramedMatrix;
use crate::error::{PipelineError, Result};

/// Tolerance when checking that the three fractions add up to 1
const FRACTION_SUM_EPSILON: f64 = 1e-6;

// ─── SplitFractions ───────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitFractions {
    pub train: f64,
    pub valid: f64,
    pub test:  f64,
}

impl Default for SplitFractions {
    fn default() -> Self {
        Self { train: 0.8, valid: 0.1, test: 0.1 }
    }
}

impl SplitFractions {
    pub fn new(train: f64, valid: f64, test: f64) -> Result<Self> {
        let fractions = Self { train, valid, test };
        fractions.validate()?;
        Ok(fractions)
    }

    /// Each fraction must lie strictly between 0 and 1, and together
    /// they must cover the whole dataset.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("train", self.train), ("valid", self.valid), ("test", self.test)] {
            if !(value > 0.0 && value < 1.0) {
                return Err(PipelineError::Config(format!(
                    "{name} fraction must be in (0, 1), got {value}"
                )));
            }
        }

        let sum = self.train + self.valid + self.test;
        if (sum - 1.0).abs() > FRACTION_SUM_EPSILON {
            return Err(PipelineError::Config(format!(
                "split fractions must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }

    /// Row counts (train, valid, test) for a dataset of `n` rows.
    pub fn sizes(&self, n: usize) -> (usize, usize, usize) {
        let train     = ((n as f64) * self.train).floor() as usize;
        let train     = train.min(n);
        let remainder = n - train;

        let valid_share = self.valid / (self.valid + self.test);
        let valid       = ((remainder as f64) * valid_share).floor() as usize;
        let valid       = valid.min(remainder);

        (train, valid, remainder - valid)
    }
}

// ─── Split ────────────────────────────────────────────────────────────────────
/// One partition: features and the labels for the same rows.
/// Row count and label count always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    features: FramedMatrix,
    labels:   Vec<u8>,
}

impl Split {
    /// Pair `features` with `labels`, one label per framed row.
    pub fn new(features: FramedMatrix, labels: Vec<u8>) -> Result<Self> {
        if features.rows() != labels.len() {
            return Err(PipelineError::LabelCountMismatch {
                reviews: features.rows(),
                labels:  labels.len(),
            });
        }
        Ok(Self { features, labels })
    }

    pub fn features(&self) -> &FramedMatrix {
        &self.features
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&l| l == 1).count()
    }

    /// Move rows [at, len) into a new Split.
    fn split_off(&mut self, at: usize) -> Split {
        Split {
            features: self.features.split_off(at),
            labels:   self.labels.split_off(at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitKind {
    Train,
    Valid,
    Test,
}

impl SplitKind {
    pub const ALL: [SplitKind; 3] = [SplitKind::Train, SplitKind::Valid, SplitKind::Test];

    pub fn name(self) -> &'static str {
        match self {
            SplitKind::Train => "train",
            SplitKind::Valid => "valid",
            SplitKind::Test  => "test",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSplits {
    pub train: Split,
    pub valid: Split,
    pub test:  Split,
}

impl DatasetSplits {
    pub fn get(&self, kind: SplitKind) -> &Split {
        match kind {
            SplitKind::Train => &self.train,
            SplitKind::Valid => &self.valid,
            SplitKind::Test  => &self.test,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.train.len() + self.valid.len() + self.test.len()
    }
}

/// Partition `features`/`labels` into train, validation and test sets,
/// preserving row order.
pub fn split_dataset(
    features:  FramedMatrix,
    labels:    Vec<u8>,
    fractions: &SplitFractions,
) -> Result<DatasetSplits> {
    let mut train = Split::new(features, labels)?;
    let total     = train.len();
    let (n_train, n_valid, n_test) = fractions.sizes(total);

    let mut valid = train.split_off(n_train);
    let test      = valid.split_off(n_valid);

    tracing::debug!(
        "Dataset split: {} train, {} validation, {} test (of {})",
        n_train,
        n_valid,
        n_test,
        total,
    );

    Ok(DatasetSplits { train, valid, test })
}
