// ============================================================
// Layer 4 - Batch Iterator
// ============================================================
// Hands a split to the training loop in fixed-size pieces.
//
// How batching works here:
//   Input:  a split with N rows of length S, and batch_size B
//   Output: floor(N / B) batches, each exactly B rows
//
//   Rows past floor(N / B) * B never appear. A short final batch
//   would change tensor shapes mid-epoch, so it is dropped.
//
// Example: N = 7, B = 3
//   batch 0 -> rows 0..3
//   batch 1 -> rows 3..6
//   row 6 is dropped
//
// A `BatchLoader` is only a view over the split plus a batch size.
// Every call to `iter()` starts again from row 0 and yields the
// same batches, so the loader can be reused every epoch.
//
// `Batch::to_tensors` stacks a batch into Burn Int tensors the
// same way for any backend:
//   features: flat Vec<i32> -> [B * S] -> reshape [B, S]
//   labels:   Vec<i32>      -> [B]
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §13 (Iterators)

use burn::prelude::*;

use crate::data::splitter::Split;
use crate::error::{PipelineError, Result};

// ─── Batch ────────────────────────────────────────────────────────────────────
/// A borrowed slice of exactly `batch_size` rows and their labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch<'a> {
    /// Row-major ids, length = rows * seq_len
    pub features: &'a [u32],
    /// One label per row
    pub labels:   &'a [u8],
    pub seq_len:  usize,
}

impl<'a> Batch<'a> {
    pub fn rows(&self) -> usize {
        self.labels.len()
    }

    pub fn row(&self, i: usize) -> &'a [u32] {
        &self.features[i * self.seq_len..(i + 1) * self.seq_len]
    }

    /// Build Burn tensors for the forward pass on `device`.
    /// Fails if an id does not fit in an i32 tensor element.
    pub fn to_tensors<B: Backend>(&self, device: &B::Device) -> Result<SentimentBatch<B>> {
        let flat = self
            .features
            .iter()
            .map(|&id| {
                i32::try_from(id).map_err(|_| {
                    PipelineError::Config(format!("token id {id} does not fit in an i32 tensor"))
                })
            })
            .collect::<Result<Vec<i32>>>()?;
        let targets: Vec<i32> = self.labels.iter().map(|&l| i32::from(l)).collect();

        let reviews = Tensor::<B, 1, Int>::from_ints(flat.as_slice(), device)
            .reshape([self.rows(), self.seq_len]);

        let targets = Tensor::<B, 1, Int>::from_ints(targets.as_slice(), device);

        Ok(SentimentBatch { reviews, targets })
    }
}

// ─── SentimentBatch ───────────────────────────────────────────────────────────
/// A batch ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct SentimentBatch<B: Backend> {
    /// Framed review ids - shape: [batch_size, seq_len]
    pub reviews: Tensor<B, 2, Int>,

    /// 1 = positive, 0 = negative - shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── BatchLoader ──────────────────────────────────────────────────────────────
/// Restartable source of full batches over one split.
#[derive(Debug, Clone, Copy)]
pub struct BatchLoader<'a> {
    split:      &'a Split,
    batch_size: usize,
}

impl<'a> BatchLoader<'a> {
    /// A zero batch size is a configuration error.
    pub fn new(split: &'a Split, batch_size: usize) -> Result<Self> {
        if batch_size == 0 {
            return Err(PipelineError::Config(
                "batch size must be greater than zero".into(),
            ));
        }
        Ok(Self { split, batch_size })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// The split being batched
    pub fn split(&self) -> &'a Split {
        self.split
    }

    /// Number of full batches
    pub fn num_batches(&self) -> usize {
        self.split.len() / self.batch_size
    }

    /// Rows actually served: floor(n / batch_size) * batch_size
    pub fn usable_rows(&self) -> usize {
        self.num_batches() * self.batch_size
    }

    /// Rows left over at the end that never make a full batch
    pub fn dropped_rows(&self) -> usize {
        self.split.len() - self.usable_rows()
    }

    /// Start a fresh pass from the first row.
    pub fn iter(&self) -> Batches<'a> {
        Batches {
            split:      self.split,
            batch_size: self.batch_size,
            next:       0,
            remaining:  self.num_batches(),
        }
    }
}

impl<'a> IntoIterator for &BatchLoader<'a> {
    type Item     = Batch<'a>;
    type IntoIter = Batches<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Batches ──────────────────────────────────────────────────────────────────
/// One pass over a split. Created by [`BatchLoader::iter`].
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    split:      &'a Split,
    batch_size: usize,
    /// First row of the next batch
    next:       usize,
    remaining:  usize,
}

impl<'a> Iterator for Batches<'a> {
    type Item = Batch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let start = self.next;
        let end   = start + self.batch_size;
        self.next       = end;
        self.remaining -= 1;

        Some(Batch {
            features: self.split.features().rows_slice(start, end),
            labels:   &self.split.labels()[start..end],
            seq_len:  self.split.features().seq_len(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Batches<'_> {}
