// ============================================================
// Layer 2 - PrepareUseCase
// ============================================================
// Orchestrates a full preparation run:
//
//   Step 1: Load reviews + labels      (Layer 4 - data)
//   Step 2: Run the pipeline           (Layer 4 - data)
//   Step 3: Save vocabulary + config   (Layer 6 - infra)
//   Step 4: Summarise each split       (Layer 4 + 6)
//
// The prepared splits are returned to the caller; a training loop
// takes them from here through `PreparedData::batches`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::TextFileLoader,
    pipeline::{Pipeline, PipelineConfig, PreparedData},
    splitter::SplitKind,
};
use crate::domain::traits::CorpusSource;
use crate::infra::{
    artifact_store::ArtifactStore,
    report::{ReportWriter, SplitReport},
};

// ─── Prepare Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub reviews_path: PathBuf,
    pub labels_path:  PathBuf,
    pub out_dir:      PathBuf,
    pub pipeline:     PipelineConfig,
}

/// What a run produced, for the CLI to print.
pub struct PrepareOutcome {
    pub data:    PreparedData,
    pub reports: Vec<SplitReport>,
}

pub struct PrepareUseCase {
    config: PrepareConfig,
}

impl PrepareUseCase {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<PrepareOutcome> {
        let cfg = &self.config;

        // Fail on bad settings before reading anything
        let pipeline = Pipeline::new(cfg.pipeline).context("Invalid pipeline settings")?;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let loader = TextFileLoader::new(&cfg.reviews_path, &cfg.labels_path);
        let corpus = loader.load()?;

        // ── Step 2: Run the pipeline ──────────────────────────────────────────
        let data = pipeline
            .run_corpus(&corpus)
            .with_context(|| {
                format!(
                    "Cannot prepare '{}' with labels '{}'",
                    cfg.reviews_path.display(),
                    cfg.labels_path.display()
                )
            })?;

        // ── Step 3: Persist vocabulary and config ─────────────────────────────
        let store = ArtifactStore::new(&cfg.out_dir);
        store.save_vocabulary(&data.vocabulary)?;
        store.save_config(&data.config)?;

        // ── Step 4: Split report ──────────────────────────────────────────────
        let reports = SplitKind::ALL
            .iter()
            .map(|&kind| -> Result<SplitReport> {
                Ok(SplitReport::new(kind, &data.batches(kind)?))
            })
            .collect::<Result<Vec<_>>>()?;

        for r in &reports {
            tracing::info!(
                "{:<5} rows={} positive={:.1}% batches={} dropped={}",
                r.split,
                r.rows,
                r.positive_ratio() * 100.0,
                r.batches,
                r.dropped,
            );
        }

        ReportWriter::new(&cfg.out_dir)?.write(&reports)?;

        Ok(PrepareOutcome { data, reports })
    }
}
