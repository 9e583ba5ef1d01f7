// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// This layer handles everything from the raw text files all the
// way to fixed-size batches for the training loop.
//
// The pipeline flows in this order:
//
//   reviews.txt + labels.txt
//       │
//       ▼
//   TextFileLoader    → reads both files into memory
//       │
//       ▼
//   Preprocessor      → strips punctuation, splits into words
//       │
//       ▼
//   Vocabulary        → assigns ids by frequency
//       │
//       ▼
//   SequenceEncoder   → words to ids, drops empty reviews
//       │
//       ▼
//   Framer            → truncates / left-pads to seq_len
//       │
//       ▼
//   split_dataset     → train / valid / test
//       │
//       ▼
//   BatchLoader       → feeds batches to the training loop
//
// Each module is responsible for exactly one step; `pipeline`
// wires them together.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Reads the reviews and labels files
pub mod loader;

/// Cleans raw text into per-review word lists
pub mod preprocessor;

/// Frequency-ordered token ids
pub mod vocabulary;

/// Maps words to ids and filters empty reviews
pub mod encoder;

/// Truncates / left-pads sequences to a fixed length
pub mod framer;

/// Splits data into train/validation/test sets in order
pub mod splitter;

/// Fixed-size batch iteration and tensor conversion
pub mod batcher;

/// Implements Burn's Dataset trait over a split
pub mod dataset;

/// Runs all of the above end to end
pub mod pipeline;
