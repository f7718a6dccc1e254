//! PDF rendering of optimized CVs.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::agents::FULL_VERSION_URL;
use crate::models::OptimizedCv;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF generation is only available in the full version. Get it at {}", FULL_VERSION_URL)]
    NotImplemented,
}

/// Turns an `OptimizedCv` into a formatted PDF document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfGenerator;

impl PdfGenerator {
    /// Writes the PDF to `output_path` and returns the path written.
    ///
    /// Always fails in this build; no file is created.
    pub fn generate(&self, _cv: &OptimizedCv, _output_path: &Path) -> Result<PathBuf, PdfError> {
        Err(PdfError::NotImplemented)
    }
}
