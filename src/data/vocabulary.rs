// ============================================================
// Layer 4 - Vocabulary Builder
// ============================================================
// Assigns every distinct token an integer id.
//
// How ids are assigned:
//   1. Count how often each token appears in the whole corpus
//   2. Sort by count, most frequent first
//   3. Break ties alphabetically so the result never depends on
//      hash map iteration order
//   4. Number the sorted tokens 1, 2, 3, ...
//
// Id 0 is never handed out. It is the padding value the framer
// uses to fill short reviews, so a 0 in a framed row always means
// "no token here".
//
// Ids end up in Burn Int tensors as i32, so the largest id is
// i32::MAX. A corpus with more distinct tokens is rejected.
//
// Example:
//   tokens: the movie the end the movie
//   counts: the=3, movie=2, end=1
//   ids:    the=1, movie=2, end=3
//
// Reference: Rust Book §8 (Hash Maps)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Reserved id for padding positions
pub const PAD_ID: u32 = 0;

/// Largest number of real tokens; ids run 1..=MAX_VOCAB_SIZE
pub const MAX_VOCAB_SIZE: usize = i32::MAX as usize;

/// One vocabulary entry as stored on disk.
/// Entries are kept in id order, so entry i has id i + 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub token: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    /// Tokens in id order (index 0 holds id 1)
    entries: Vec<VocabEntry>,
    /// Reverse lookup: token -> id
    index: HashMap<String, u32>,
}

impl Vocabulary {
    /// Count `tokens` and assign ids by descending frequency.
    pub fn build<'a, I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut freq: HashMap<&str, usize> = HashMap::new();
        for token in tokens {
            *freq.entry(token).or_insert(0) += 1;
        }

        let mut words: Vec<(&str, usize)> = freq.into_iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let entries = words
            .into_iter()
            .map(|(token, count)| VocabEntry { token: token.to_string(), count })
            .collect();

        Self::index_entries(entries)
    }

    /// Rebuild a vocabulary from entries in id order (e.g. loaded from disk).
    /// Fails if the same token appears twice, since ids would no longer
    /// be a bijection.
    pub fn from_entries(entries: Vec<VocabEntry>) -> Result<Self> {
        let vocab = Self::index_entries(entries)?;
        if vocab.index.len() != vocab.entries.len() {
            return Err(PipelineError::Config(format!(
                "vocabulary has {} entries but only {} distinct tokens",
                vocab.entries.len(),
                vocab.index.len()
            )));
        }
        Ok(vocab)
    }

    fn index_entries(entries: Vec<VocabEntry>) -> Result<Self> {
        let index: HashMap<String, u32> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| Ok((e.token.clone(), id_for_position(i)?)))
            .collect::<Result<_>>()?;
        Ok(Self { entries, index })
    }

    /// Id of `token`, if it is in the vocabulary
    pub fn id(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    /// Token for `id`. Returns None for the padding id and for
    /// ids past the end.
    pub fn token(&self, id: u32) -> Option<&str> {
        if id == PAD_ID {
            return None;
        }
        self.entries
            .get(id as usize - 1)
            .map(|e| e.token.as_str())
    }

    /// Number of real tokens (V). Ids run from 1 to V inclusive.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent entries
    pub fn most_common(&self, n: usize) -> &[VocabEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }
}

/// Id of the entry at `position` in id order
fn id_for_position(position: usize) -> Result<u32> {
    if position >= MAX_VOCAB_SIZE {
        return Err(PipelineError::Config(format!(
            "vocabulary exceeds {MAX_VOCAB_SIZE} distinct tokens"
        )));
    }
    u32::try_from(position + 1)
        .map_err(|_| PipelineError::Config(format!("token position {position} has no id")))
}
