//! Resume Loader — resolves the resume text from the plain-text cache or the source PDF.
//!
//! Resolution order:
//! 1. cache file exists → its contents, untouched
//! 2. source PDF missing → `SOURCE_MISSING_MESSAGE`
//! 3. otherwise extract every page, concatenate with no separator,
//!    write the result to the cache path, return it
//!
//! `load()` never fails: every error becomes the text of an unavailable `ResumeText`.

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::resume::extract::{PageExtractor, PdfPageExtractor};
use crate::resume::{ResumeError, ResumeText};

pub struct ResumeLoader<E = PdfPageExtractor> {
    pdf_path: PathBuf,
    txt_path: PathBuf,
    extractor: E,
}

impl ResumeLoader<PdfPageExtractor> {
    pub fn new(pdf_path: impl Into<PathBuf>, txt_path: impl Into<PathBuf>) -> Self {
        Self::with_extractor(pdf_path, txt_path, PdfPageExtractor)
    }
}

impl<E: PageExtractor> ResumeLoader<E> {
    pub fn with_extractor(
        pdf_path: impl Into<PathBuf>,
        txt_path: impl Into<PathBuf>,
        extractor: E,
    ) -> Self {
        Self {
            pdf_path: pdf_path.into(),
            txt_path: txt_path.into(),
            extractor,
        }
    }

    /// Resolves the resume text. Failures are folded into the returned value.
    pub fn load(&self) -> ResumeText {
        match self.try_load() {
            Ok(resume) => {
                info!(
                    "Resume loaded ({} chars, status: {:?})",
                    resume.as_str().len(),
                    resume.status()
                );
                resume
            }
            Err(e) => {
                warn!("Resume unavailable: {e}");
                ResumeText::unavailable(&e)
            }
        }
    }

    fn try_load(&self) -> Result<ResumeText, ResumeError> {
        if self.txt_path.exists() {
            let text = fs::read_to_string(&self.txt_path)?;
            return Ok(ResumeText::cached(text));
        }

        if !self.pdf_path.exists() {
            return Err(ResumeError::SourceMissing);
        }

        info!(
            "No cache at {}, extracting {}",
            self.txt_path.display(),
            self.pdf_path.display()
        );
        let pages = self.extractor.extract_pages(&self.pdf_path)?;
        let page_count = pages.len();
        let text = pages.concat();

        fs::write(&self.txt_path, &text)?;
        info!("Wrote extracted resume to {}", self.txt_path.display());

        Ok(ResumeText::extracted(text, page_count))
    }
}
