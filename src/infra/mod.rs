// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Files written next to the prepared data:
//
//   artifact_store.rs - vocabulary and pipeline config as JSON,
//                       so reviews framed later use the same ids
//                       and row length as the training data.
//
//   report.rs         - per-split row/label/batch counts as CSV.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Vocabulary and config persistence
pub mod artifact_store;

/// Split summary CSV writer
pub mod report;
