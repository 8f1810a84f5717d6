//! Certificate processing: OCR followed by scoring.

use crate::{CertificateScorer, ScoreResult, ocr::TextExtractor};

/// Runs a certificate image through an extractor and a scorer.
///
/// An unreadable image extracts as empty text and therefore scores zero.
///
/// # Examples
///
/// ```
/// use activity_points::certificate::CertificateProcessor;
/// use activity_points::ocr::TextExtractor;
/// use activity_points::{CategoryCatalog, ScoringPipeline};
///
/// struct Canned;
///
/// impl TextExtractor for Canned {
///     fn extract_text(&self, _image: &[u8]) -> String {
///         "NSS volunteer".to_owned()
///     }
/// }
///
/// let pipeline = ScoringPipeline::new(CategoryCatalog::standard()).unwrap();
/// let processor = CertificateProcessor::new(Canned, pipeline);
/// assert_eq!(processor.process(b"image").total_points, 60);
/// ```
#[derive(Debug, Clone)]
pub struct CertificateProcessor<E, S> {
    extractor: E,
    scorer: S,
}

impl<E: TextExtractor, S: CertificateScorer> CertificateProcessor<E, S> {
    #[must_use]
    pub fn new(extractor: E, scorer: S) -> Self {
        Self { extractor, scorer }
    }

    /// Extract text from `image` and score it.
    pub fn process(&self, image: &[u8]) -> ScoreResult {
        let text = self.extractor.extract_text(image);
        self.scorer.score(&text)
    }

    #[must_use]
    pub fn scorer(&self) -> &S {
        &self.scorer
    }
}
