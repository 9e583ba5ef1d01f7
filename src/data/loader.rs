// ============================================================
// Layer 4 - Corpus Loader
// ============================================================
// Reads the two input files into memory:
//
//   reviews.txt   one review per line
//   labels.txt    "positive" or "negative", one per line
//
// Line i of one file belongs to line i of the other. Both files
// are read whole; the pipeline checks that their line counts agree
// before anything is filtered, because once empty reviews start
// being dropped a mismatch can no longer be detected.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::{fs, path::{Path, PathBuf}};

use crate::domain::corpus::RawCorpus;
use crate::domain::traits::CorpusSource;
use crate::error::{PipelineError, Result};

/// Loads a reviews file and its labels file.
/// Implements the CorpusSource trait from Layer 3.
pub struct TextFileLoader {
    reviews_path: PathBuf,
    labels_path:  PathBuf,
}

impl TextFileLoader {
    pub fn new(reviews_path: impl Into<PathBuf>, labels_path: impl Into<PathBuf>) -> Self {
        Self {
            reviews_path: reviews_path.into(),
            labels_path:  labels_path.into(),
        }
    }
}

impl CorpusSource for TextFileLoader {
    fn load(&self) -> Result<RawCorpus> {
        let reviews = read_text(&self.reviews_path)?;
        let labels  = read_text(&self.labels_path)?;

        tracing::info!(
            "Read {} bytes of reviews from '{}' and {} bytes of labels from '{}'",
            reviews.len(),
            self.reviews_path.display(),
            labels.len(),
            self.labels_path.display(),
        );

        Ok(RawCorpus { reviews, labels })
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PipelineError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_reads_both_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("reviews.txt"), "good movie\nbad film.\n").unwrap();
        fs::write(dir.path().join("labels.txt"), "positive\nnegative\n").unwrap();

        let loader = TextFileLoader::new(dir.path().join("reviews.txt"), dir.path().join("labels.txt"));
        let corpus = loader.load().unwrap();
        assert_eq!(corpus.reviews, "good movie\nbad film.\n");
        assert_eq!(corpus.labels, "positive\nnegative\n");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir    = tempdir().unwrap();
        let loader = TextFileLoader::new(dir.path().join("nope.txt"), dir.path().join("labels.txt"));
        match loader.load() {
            Err(PipelineError::FileRead { path, .. }) => assert!(path.ends_with("nope.txt")),
            other => panic!("expected FileRead error, got {other:?}"),
        }
    }
}
