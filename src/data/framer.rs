// ============================================================
// Layer 4 - Fixed-Length Framer
// ============================================================
// Every encoded review becomes exactly `seq_len` ids so the whole
// dataset fits in one rectangular matrix.
//
//   Long review  (len >= seq_len): keep the FIRST seq_len ids,
//                                  drop the tail.
//   Short review (len <  seq_len): left-pad with zeros so the
//                                  real ids sit at the end.
//
// Example with seq_len = 4:
//   [7, 3]             -> [0, 0, 7, 3]
//   [5, 6, 7, 8, 9, 1] -> [5, 6, 7, 8]
//
// The matrix is stored row-major in one flat Vec so batches can be
// handed out as plain slices.
//
// Reference: Rust Book §8 (Slices)

use crate::data::vocabulary::PAD_ID;
use crate::error::{PipelineError, Result};

/// Row length used when nothing else is configured
pub const DEFAULT_SEQ_LEN: usize = 200;

// ─── FramedMatrix ─────────────────────────────────────────────────────────────
/// Rectangular id matrix, shape [rows, seq_len], row-major.
/// Only a `Framer` builds one, so `seq_len` is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedMatrix {
    seq_len: usize,
    data:    Vec<u32>,
}

impl FramedMatrix {
    pub fn rows(&self) -> usize {
        self.data.len() / self.seq_len
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// Shape as [rows, seq_len]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows(), self.seq_len]
    }

    pub fn row(&self, i: usize) -> &[u32] {
        &self.data[i * self.seq_len..(i + 1) * self.seq_len]
    }

    pub fn iter_rows(&self) -> std::slice::ChunksExact<'_, u32> {
        self.data.chunks_exact(self.seq_len)
    }

    /// Flat view over rows `start..end`
    pub fn rows_slice(&self, start: usize, end: usize) -> &[u32] {
        &self.data[start * self.seq_len..end * self.seq_len]
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// Split into rows [0, at) and [at, rows), like `Vec::split_off`.
    pub fn split_off(&mut self, at: usize) -> FramedMatrix {
        let tail = self.data.split_off(at * self.seq_len);
        FramedMatrix { seq_len: self.seq_len, data: tail }
    }
}

// ─── Framer ───────────────────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy)]
pub struct Framer {
    seq_len: usize,
}

impl Framer {
    /// A zero row length is a configuration error.
    pub fn new(seq_len: usize) -> Result<Self> {
        if seq_len == 0 {
            return Err(PipelineError::Config(
                "sequence length must be greater than zero".into(),
            ));
        }
        Ok(Self { seq_len })
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// Frame a single sequence into a fresh row
    pub fn frame_one(&self, seq: &[u32]) -> Vec<u32> {
        let mut row = vec![PAD_ID; self.seq_len];
        self.fill_row(&mut row, seq);
        row
    }

    /// Frame every sequence, keeping their order.
    pub fn frame(&self, sequences: &[Vec<u32>]) -> FramedMatrix {
        let mut data = vec![PAD_ID; sequences.len() * self.seq_len];

        for (row, seq) in data.chunks_exact_mut(self.seq_len).zip(sequences) {
            self.fill_row(row, seq);
        }

        tracing::debug!(
            "Framed {} reviews to length {}",
            sequences.len(),
            self.seq_len
        );

        FramedMatrix { seq_len: self.seq_len, data }
    }

    /// `row` is already zeroed and exactly seq_len long
    fn fill_row(&self, row: &mut [u32], seq: &[u32]) {
        let keep = seq.len().min(self.seq_len);
        row[self.seq_len - keep..].copy_from_slice(&seq[..keep]);
    }
}
