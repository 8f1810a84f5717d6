//! Core library entry point.
//! Scores OCR text from activity certificates against a points catalog and
//! re-exports the public types.

pub mod aggregate;
pub mod api;
pub mod catalog;
pub mod certificate;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod matching;
pub mod ocr;
pub mod pipeline;
pub mod progress;

pub use api::{CertificateScorer, MatchedCategorySet, ScoreResult, ScoreTrace};
pub use catalog::{CatalogError, CategoryCatalog, PointValue};
pub use certificate::CertificateProcessor;
#[cfg(feature = "cli")]
pub use cli::CertscoreArgs;
pub use config::{ConfigError, ScoringConfig};
pub use ocr::{TesseractOcr, TextExtractor};
pub use pipeline::ScoringPipeline;
pub use progress::ActivityProgress;
