//! OCR collaborator producing text from certificate images.
//!
//! [`TesseractOcr`] shells out to the `tesseract` executable, streaming the
//! image through stdin and reading recognised text from stdout. The child is
//! killed if it outlives the configured timeout.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::warn;

const DEFAULT_PROGRAM: &str = "tesseract";
const DEFAULT_LANG: &str = "eng";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Produces text from raw image bytes.
///
/// Implementations return an empty string when the image cannot be read,
/// rather than signalling failure.
pub trait TextExtractor {
    fn extract_text(&self, image: &[u8]) -> String;
}

/// Errors returned by [`TesseractOcr::run`].
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("failed to launch {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to communicate with OCR process: {0}")]
    Io(#[from] io::Error),
    #[error("OCR process pipe was not captured")]
    MissingPipe,
    #[error("OCR reader thread panicked")]
    ReaderPanicked,
    #[error("OCR process exceeded {0:?}")]
    Timeout(Duration),
    #[error("OCR process exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// [`TextExtractor`] backed by the Tesseract command-line tool.
///
/// # Examples
///
/// ```
/// use activity_points::ocr::TesseractOcr;
/// use std::time::Duration;
///
/// let ocr = TesseractOcr::new()
///     .with_lang("eng")
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(ocr.lang(), "eng");
/// ```
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    program: PathBuf,
    lang: String,
    timeout: Duration,
}

impl Default for TesseractOcr {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM),
            lang: DEFAULT_LANG.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl TesseractOcr {
    #[must_use]
    #[rustfmt::skip]
    pub fn new() -> Self { Self::default() }

    /// Use a different executable, such as an absolute path to `tesseract`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Recognise text in `image`.
    ///
    /// # Errors
    ///
    /// Returns an [`OcrError`] if the process cannot be launched, exits
    /// unsuccessfully, or exceeds the timeout.
    pub fn run(&self, image: &[u8]) -> Result<String, OcrError> {
        let mut child = Command::new(&self.program)
            .args(["stdin", "stdout", "-l"])
            .arg(&self.lang)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| OcrError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        match self.communicate(&mut child, image) {
            Ok(output) => Ok(output),
            Err(err) => {
                // The child may still be running; never leave it behind.
                let _ = child.kill();
                let _ = child.wait();
                Err(err)
            }
        }
    }

    fn communicate(&self, child: &mut Child, image: &[u8]) -> Result<String, OcrError> {
        let mut stdin = child.stdin.take().ok_or(OcrError::MissingPipe)?;
        let stdout = child.stdout.take().ok_or(OcrError::MissingPipe)?;
        let stderr = child.stderr.take().ok_or(OcrError::MissingPipe)?;
        let bytes = image.to_vec();
        // Pump every pipe on its own thread so none of them fills up.
        let writer = thread::spawn(move || stdin.write_all(&bytes));
        let reader = drain(stdout);
        let errors = drain(stderr);

        let status = self.wait(child)?;

        // A process that exits without draining stdin breaks the pipe; the
        // exit status decides the outcome.
        let _ = writer.join();
        let output = reader.join().map_err(|_| OcrError::ReaderPanicked)??;
        let diagnostics = errors.join().map_err(|_| OcrError::ReaderPanicked)??;
        if !status.success() {
            return Err(OcrError::Failed {
                status,
                stderr: String::from_utf8_lossy(&diagnostics).trim().to_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    /// Wait for `child` to exit. A timeout too large to represent as an
    /// instant means no deadline.
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, OcrError> {
        let deadline = Instant::now().checked_add(self.timeout);
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Err(OcrError::Timeout(self.timeout));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf).map(|_| buf)
    })
}

impl TextExtractor for TesseractOcr {
    fn extract_text(&self, image: &[u8]) -> String {
        self.run(image).unwrap_or_else(|err| {
            warn!(error = %err, "OCR failed; treating certificate as blank");
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let ocr = TesseractOcr::new().with_program("activity-points-no-such-ocr");
        assert!(matches!(ocr.run(b"png"), Err(OcrError::Spawn { .. })));
    }

    #[test]
    fn failures_extract_as_empty_text() {
        let ocr = TesseractOcr::new().with_program("activity-points-no-such-ocr");
        assert_eq!(ocr.extract_text(b"png"), "");
    }

    #[cfg(unix)]
    #[test]
    fn unsuccessful_exit_is_reported() {
        let ocr = TesseractOcr::new().with_program("false");
        assert!(matches!(ocr.run(b"png"), Err(OcrError::Failed { .. })));
    }

    #[test]
    fn builder_sets_fields() {
        let ocr = TesseractOcr::new()
            .with_lang("eng+hin")
            .with_timeout(Duration::from_secs(1));
        assert_eq!(ocr.lang(), "eng+hin");
        assert_eq!(ocr.timeout, Duration::from_secs(1));
    }
}
