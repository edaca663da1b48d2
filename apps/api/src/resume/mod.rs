// Resume ingestion: resolves the single resume document into the text that
// every chat prompt embeds. Runs once at startup.

pub mod extract;
pub mod loader;

use std::io;

use serde::Serialize;
use thiserror::Error;

/// Shown in place of the resume when neither the cache nor the PDF exists.
/// This text ends up inside every prompt, so its wording is observable.
pub const SOURCE_MISSING_MESSAGE: &str =
    "Error: resume.pdf not found. Please place your resume PDF in the project directory.";

/// Why the resume could not be produced. `Display` renders the exact text
/// that replaces the resume content.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResumeError {
    #[error("{}", SOURCE_MISSING_MESSAGE)]
    SourceMissing,

    #[error("Error processing resume: {0}")]
    Processing(String),
}

impl From<io::Error> for ResumeError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => ResumeError::SourceMissing,
            _ => ResumeError::Processing(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnavailableReason {
    SourceMissing,
    ProcessingFailed,
}

/// How the resume text was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeStatus {
    Cached,
    Extracted { pages: usize },
    Unavailable { reason: UnavailableReason },
}

/// The canonical resume content, computed once and never refreshed.
///
/// When the resume could not be loaded, `text` holds the human-readable
/// failure message instead, and `status` says so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText {
    text: String,
    status: ResumeStatus,
}

impl ResumeText {
    pub fn cached(text: String) -> Self {
        Self {
            text,
            status: ResumeStatus::Cached,
        }
    }

    pub fn extracted(text: String, pages: usize) -> Self {
        Self {
            text,
            status: ResumeStatus::Extracted { pages },
        }
    }

    pub fn unavailable(err: &ResumeError) -> Self {
        let reason = match err {
            ResumeError::SourceMissing => UnavailableReason::SourceMissing,
            ResumeError::Processing(_) => UnavailableReason::ProcessingFailed,
        };
        Self {
            text: err.to_string(),
            status: ResumeStatus::Unavailable { reason },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> &ResumeStatus {
        &self.status
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.status, ResumeStatus::Unavailable { .. })
    }
}
