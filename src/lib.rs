//! Preprocessing for sentiment classification of movie reviews.
//!
//! Raw review text and `positive`/`negative` labels go in; fixed-length
//! id matrices split into train/validation/test, plus a restartable
//! batch iterator, come out. Model code is left to the caller, which
//! consumes batches through [`data::batcher::BatchLoader`] or the Burn
//! [`data::dataset::ReviewDataset`].
//!
//! ```no_run
//! use review_prep::{Pipeline, PipelineConfig, SplitKind};
//!
//! # fn main() -> review_prep::Result<()> {
//! let config   = PipelineConfig::new(500)?;
//! let pipeline = Pipeline::new(config)?;
//! let data     = pipeline.run("good movie\nbad film.", "positive\nnegative")?;
//!
//! for batch in &data.batches(SplitKind::Train)? {
//!     assert_eq!(batch.rows(), 500);
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;

pub use data::batcher::{Batch, BatchLoader, SentimentBatch};
pub use data::pipeline::{Pipeline, PipelineConfig, PreparedData};
pub use data::splitter::{SplitFractions, SplitKind};
pub use data::vocabulary::{Vocabulary, PAD_ID};
pub use error::{PipelineError, Result};
