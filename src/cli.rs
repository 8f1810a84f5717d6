//! CLI argument types and layered configuration for the `certscore` binary.
//! Loads from CLI args, environment (prefix `CERTSCORE_`), and optional
//! config files.

use crate::{
    ActivityProgress, CertificateScorer, ScoreResult, ScoringPipeline,
    catalog::CatalogError,
    certificate::CertificateProcessor,
    config::{ConfigError, ScoringConfig},
    ocr::TesseractOcr,
    progress::DEFAULT_REQUIRED_POINTS,
};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use ortho_config::OrthoError;
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

fn default_required_points() -> u32 {
    DEFAULT_REQUIRED_POINTS
}

fn default_ocr_timeout_secs() -> u64 {
    30
}

/// Command-line arguments for the `certscore` binary.
///
/// Text is read from `text_path`, recognised from `image_path`, or read from
/// stdin when neither is given.
///
/// # Examples
///
/// ```
/// use activity_points::cli::CertscoreArgs;
/// use ortho_config::OrthoConfig;
///
/// let args = CertscoreArgs::load_from_iter(["certscore", "--required-points", "120"])
///     .expect("load args from CLI iterator");
/// assert_eq!(args.required_points, 120);
/// ```
#[derive(Debug, Deserialize, ortho_config::OrthoConfig)]
#[ortho_config(prefix = "CERTSCORE")]
pub struct CertscoreArgs {
    /// File holding OCR text to score.
    #[serde(default)]
    pub text_path: Option<PathBuf>,

    /// Certificate image to recognise with tesseract.
    #[serde(default)]
    pub image_path: Option<PathBuf>,

    /// OCR executable used for `image_path`; defaults to `tesseract`.
    #[serde(default)]
    pub ocr_program: Option<PathBuf>,

    /// TOML file replacing the standard catalog or compound rules.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Points needed to complete the programme.
    #[ortho_config(default = 100)]
    #[serde(default = "default_required_points")]
    pub required_points: u32,

    /// Seconds to wait for tesseract before treating the image as blank.
    #[ortho_config(default = 30)]
    #[serde(default = "default_ocr_timeout_secs")]
    pub ocr_timeout_secs: u64,

    /// Pretty-print the JSON report.
    #[ortho_config(default = false)]
    #[serde(default)]
    pub pretty: bool,

    /// Optional path to a configuration file.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl CertscoreArgs {
    /// Load configuration solely from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an [`OrthoError`] if any variable cannot be parsed.
    pub fn load_from_env() -> Result<Self, OrthoError> {
        Figment::new()
            .merge(Env::prefixed("CERTSCORE_"))
            .extract()
            .map_err(Into::into)
    }

    /// Load configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an [`OrthoError`] if the file cannot be read or parsed.
    pub fn load_from_config(path: &str) -> Result<Self, OrthoError> {
        Figment::new()
            .merge(Toml::file(path))
            .extract()
            .map_err(Into::into)
    }

    /// Load configuration from environment variables and a file path.
    ///
    /// # Errors
    ///
    /// Returns an [`OrthoError`] if either source contains invalid values.
    pub fn load_from_env_and_config(path: &str) -> Result<Self, OrthoError> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("CERTSCORE_"))
            .extract()
            .map_err(Into::into)
    }
}

/// Errors returned by [`run`].
#[derive(Debug, Error)]
pub enum CliError {
    #[error("text_path and image_path cannot both be set")]
    ConflictingInputs,
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// JSON document printed by `certscore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertscoreReport {
    #[serde(flatten)]
    pub result: ScoreResult,
    pub progress: ActivityProgress,
}

impl CertscoreReport {
    /// Render the report as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Render`] if serialisation fails.
    pub fn render(&self, pretty: bool) -> Result<String, CliError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Score one certificate as described by `args`.
///
/// `stdin` is only read when no input path is configured.
///
/// # Errors
///
/// Returns a [`CliError`] if inputs conflict, cannot be read, or the catalog
/// configuration is invalid.
pub fn run(args: &CertscoreArgs, mut stdin: impl Read) -> Result<CertscoreReport, CliError> {
    let config = match &args.catalog_path {
        Some(path) => ScoringConfig::load_from_file(path)?,
        None => ScoringConfig::default(),
    };
    let pipeline = ScoringPipeline::from_config(config)?;

    let result = match (&args.text_path, &args.image_path) {
        (Some(_), Some(_)) => return Err(CliError::ConflictingInputs),
        (Some(path), None) => {
            let bytes = read_file(path)?;
            pipeline.score(&String::from_utf8_lossy(&bytes))
        }
        (None, Some(path)) => {
            let image = read_file(path)?;
            let mut ocr =
                TesseractOcr::new().with_timeout(Duration::from_secs(args.ocr_timeout_secs));
            if let Some(program) = &args.ocr_program {
                ocr = ocr.with_program(program.clone());
            }
            CertificateProcessor::new(ocr, pipeline).process(&image)
        }
        (None, None) => {
            let mut text = String::new();
            stdin.read_to_string(&mut text).map_err(CliError::Stdin)?;
            pipeline.score(&text)
        }
    };
    info!(
        total_points = result.total_points,
        categories = result.matched_categories.len(),
        "certificate scored"
    );

    let progress = ActivityProgress::new(result.total_points, args.required_points);
    Ok(CertscoreReport { result, progress })
}
