use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::splitter::Split;

/// One framed review and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub tokens: Vec<u32>,
    pub label:  u8,
}

/// A split exposed through Burn's `Dataset` trait, so a Burn
/// `DataLoader` can pull items from it directly.
pub struct ReviewDataset {
    split: Split,
}

impl ReviewDataset {
    pub fn new(split: Split) -> Self { Self { split } }

    pub fn seq_len(&self) -> usize { self.split.features().seq_len() }
}

impl Dataset<ReviewItem> for ReviewDataset {
    fn get(&self, index: usize) -> Option<ReviewItem> {
        let label = *self.split.labels().get(index)?;
        Some(ReviewItem {
            tokens: self.split.features().row(index).to_vec(),
            label,
        })
    }

    fn len(&self) -> usize {
        self.split.len()
    }
}
