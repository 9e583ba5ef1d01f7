// ============================================================
// Layer 4 - Sequence Encoder
// ============================================================
// Maps each review's words to vocabulary ids.
//
// The vocabulary is built from the same corpus it encodes, so every
// lookup must succeed. A miss means the caller paired a vocabulary
// with reviews it was not built from; that is reported as
// `LookupInconsistency` instead of being papered over with a
// default id.
//
// After encoding, reviews that came out empty are removed together
// with the label at the same position:
//
//   sequences: [ [3,1], [],  [2] ]      labels: [1, 0, 1]
//                        ^ drop                    ^ drop
//   sequences: [ [3,1], [2] ]           labels: [1, 1]
//
// Reference: Rust Book §8 (Vectors)
//            Rust Book §9 (Recoverable Errors with Result)

use crate::data::vocabulary::Vocabulary;
use crate::error::{PipelineError, Result};

pub struct SequenceEncoder<'v> {
    vocab: &'v Vocabulary,
}

impl<'v> SequenceEncoder<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self { vocab }
    }

    /// Encode one review. `review` is only used in the error message.
    pub fn encode(&self, review: usize, words: &[String]) -> Result<Vec<u32>> {
        words
            .iter()
            .map(|w| {
                self.vocab.id(w).ok_or_else(|| PipelineError::LookupInconsistency {
                    token: w.clone(),
                    review,
                })
            })
            .collect()
    }

    /// Encode every review, keeping order and one output per input
    /// (empty reviews included).
    pub fn encode_all(&self, reviews: &[Vec<String>]) -> Result<Vec<Vec<u32>>> {
        reviews
            .iter()
            .enumerate()
            .map(|(i, words)| self.encode(i, words))
            .collect()
    }

    /// Encode text that did not come from the vocabulary's corpus.
    /// Unknown words are skipped; the second value counts them.
    pub fn encode_lenient(&self, words: &[String]) -> (Vec<u32>, usize) {
        let ids: Vec<u32> = words.iter().filter_map(|w| self.vocab.id(w)).collect();
        let unknown       = words.len() - ids.len();
        (ids, unknown)
    }
}

// ─── EncodedReviews ───────────────────────────────────────────────────────────
/// Encoded reviews and their labels, always the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedReviews {
    sequences: Vec<Vec<u32>>,
    labels:    Vec<u8>,
}

impl EncodedReviews {
    /// Pair sequences with labels. The counts must match.
    pub fn new(sequences: Vec<Vec<u32>>, labels: Vec<u8>) -> Result<Self> {
        if sequences.len() != labels.len() {
            return Err(PipelineError::LabelCountMismatch {
                reviews: sequences.len(),
                labels:  labels.len(),
            });
        }
        Ok(Self { sequences, labels })
    }

    /// Remove empty sequences and their labels in lock-step.
    /// Returns the number of reviews removed.
    pub fn drop_empty(&mut self) -> usize {
        let before = self.sequences.len();

        let (sequences, labels): (Vec<Vec<u32>>, Vec<u8>) = std::mem::take(&mut self.sequences)
            .into_iter()
            .zip(std::mem::take(&mut self.labels))
            .filter(|(seq, _)| !seq.is_empty())
            .unzip();

        self.sequences = sequences;
        self.labels    = labels;
        before - self.sequences.len()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn sequences(&self) -> &[Vec<u32>] {
        &self.sequences
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn into_parts(self) -> (Vec<Vec<u32>>, Vec<u8>) {
        (self.sequences, self.labels)
    }
}
