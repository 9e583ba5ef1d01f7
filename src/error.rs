// ============================================================
// Error Types
// ============================================================
// Every fallible step of the pipeline reports one of these.
//
// Two families matter to callers:
//   - Configuration errors: bad lengths, bad fractions, or a
//     corpus/labels pair that does not line up. These are
//     raised before any data is transformed.
//   - Lookup inconsistency: a token reached the encoder that the
//     vocabulary has never seen. This only happens when the
//     caller mixed a vocabulary from one corpus with reviews
//     from another, so it is never silently defaulted.
//
// The CLI and application layers wrap these in anyhow.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    // --- Config ---
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Corpus has {reviews} reviews but labels file has {labels} lines")]
    LabelCountMismatch { reviews: usize, labels: usize },

    // --- Encoding ---
    #[error("Token '{token}' in review {review} is not in the vocabulary")]
    LookupInconsistency { token: String, review: usize },

    // --- I/O ---
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
