// ============================================================
// Layer 3 - Raw Corpus
// ============================================================
// The two text files exactly as they were read from disk.
// Nothing here has been cleaned or split yet: the corpus is
// newline-delimited reviews and the labels are newline-delimited
// label words, one line per review.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCorpus {
    /// Newline-delimited review text
    pub reviews: String,

    /// Newline-delimited "positive"/"negative" lines
    pub labels: String,
}

impl RawCorpus {
    pub fn new(reviews: impl Into<String>, labels: impl Into<String>) -> Self {
        Self {
            reviews: reviews.into(),
            labels:  labels.into(),
        }
    }
}
