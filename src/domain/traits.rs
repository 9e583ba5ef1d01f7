// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer only asks for "a corpus"; where the
// text comes from is an implementation detail.
//
// Implementations:
//   - TextFileLoader -> reads a reviews file and a labels file
//   - tests use in-memory sources

use crate::domain::corpus::RawCorpus;
use crate::error::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the raw review/label text pair.
pub trait CorpusSource {
    /// Read the whole corpus into memory.
    fn load(&self) -> Result<RawCorpus>;
}

/// A corpus already held in memory is trivially a source.
impl CorpusSource for RawCorpus {
    fn load(&self) -> Result<RawCorpus> {
        Ok(self.clone())
    }
}
