// ============================================================
// Layer 6 - Split Report
// ============================================================
// Records what each split looks like after preparation, one CSV
// row per split.
//
// Columns:
//   - split:    train / valid / test
//   - rows:     framed reviews in the split
//   - positive: rows labelled 1
//   - negative: rows labelled 0
//   - batches:  full batches at the configured batch size
//   - dropped:  trailing rows that never fill a batch
//
// Output file: <out-dir>/split_report.csv
//
// Example CSV output:
//   split,rows,positive,negative,batches,dropped
//   train,20000,10003,9997,40,0
//   valid,2500,1240,1260,5,0
//   test,2500,1257,1243,5,0
//
// A heavily skewed positive/negative ratio in one split usually
// means the corpus file is sorted by label; the splitter does not
// shuffle.

use anyhow::Result;
use std::{
    fs,
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

use crate::data::batcher::BatchLoader;
use crate::data::splitter::SplitKind;

const REPORT_FILE: &str = "split_report.csv";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    pub split:    String,
    pub rows:     usize,
    pub positive: usize,
    pub negative: usize,
    pub batches:  usize,
    pub dropped:  usize,
}

impl SplitReport {
    /// Summarise the split behind `loader`.
    pub fn new(kind: SplitKind, loader: &BatchLoader<'_>) -> Self {
        let rows     = loader.split().len();
        let positive = loader.split().positives();
        Self {
            split:    kind.name().to_string(),
            rows,
            positive,
            negative: rows - positive,
            batches:  loader.num_batches(),
            dropped:  loader.dropped_rows(),
        }
    }

    /// Share of positive rows, 0.0 for an empty split
    pub fn positive_ratio(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.positive as f64 / self.rows as f64
        }
    }
}

pub struct ReportWriter {
    csv_path: PathBuf,
}

impl ReportWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { csv_path: dir.join(REPORT_FILE) })
    }

    /// Write all rows, replacing any report from an earlier run.
    pub fn write(&self, reports: &[SplitReport]) -> Result<()> {
        let mut f = fs::File::create(&self.csv_path)?;
        writeln!(f, "split,rows,positive,negative,batches,dropped")?;

        for r in reports {
            writeln!(
                f,
                "{},{},{},{},{},{}",
                r.split, r.rows, r.positive, r.negative, r.batches, r.dropped,
            )?;
        }

        tracing::debug!("Wrote split report to '{}'", self.csv_path.display());
        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::framer::Framer;
    use crate::data::splitter::Split;
    use tempfile::tempdir;

    fn split() -> Split {
        let features = Framer::new(1).unwrap().frame(&[vec![1], vec![2], vec![3], vec![4], vec![5]]);
        Split::new(features, vec![1, 0, 1, 1, 0]).unwrap()
    }

    #[test]
    fn test_report_counts() {
        let s      = split();
        let loader = BatchLoader::new(&s, 2).unwrap();
        let r      = SplitReport::new(SplitKind::Train, &loader);

        assert_eq!(r.split, "train");
        assert_eq!((r.rows, r.positive, r.negative), (5, 3, 2));
        assert_eq!((r.batches, r.dropped), (2, 1));
        assert!((r.positive_ratio() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_csv_written() {
        let dir    = tempdir().unwrap();
        let writer = ReportWriter::new(dir.path()).unwrap();
        let s      = split();
        let loader = BatchLoader::new(&s, 5).unwrap();
        let r      = SplitReport::new(SplitKind::Test, &loader);

        writer.write(&[r]).unwrap();
        let text = fs::read_to_string(writer.csv_path()).unwrap();
        assert_eq!(text, "split,rows,positive,negative,batches,dropped\ntest,5,3,2,1,0\n");
    }
}
