//! Request and response bodies of the optimization endpoint.

use serde::{Deserialize, Serialize};

use super::cv::OptimizedCv;
use super::role::RoleType;
use super::validation::{require_min_chars, ValidationError};

/// Minimum length, in characters, of both the CV and the job description.
pub const MIN_TEXT_CHARS: usize = 50;

/// Input of one optimization: raw CV text, target job description and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OptimizeRequestPayload")]
pub struct OptimizeRequest {
    cv_text: String,
    jd_text: String,
    role_type: RoleType,
}

#[derive(Debug, Deserialize)]
struct OptimizeRequestPayload {
    cv_text: String,
    jd_text: String,
    #[serde(default)]
    role_type: RoleType,
}

impl TryFrom<OptimizeRequestPayload> for OptimizeRequest {
    type Error = ValidationError;

    fn try_from(p: OptimizeRequestPayload) -> Result<Self, Self::Error> {
        OptimizeRequest::new(p.cv_text, p.jd_text, p.role_type)
    }
}

impl OptimizeRequest {
    pub fn new(
        cv_text: impl Into<String>,
        jd_text: impl Into<String>,
        role_type: RoleType,
    ) -> Result<Self, ValidationError> {
        let cv_text = cv_text.into();
        let jd_text = jd_text.into();

        require_min_chars("cv_text", &cv_text, MIN_TEXT_CHARS)?;
        require_min_chars("jd_text", &jd_text, MIN_TEXT_CHARS)?;

        Ok(Self {
            cv_text,
            jd_text,
            role_type,
        })
    }

    pub fn cv_text(&self) -> &str {
        &self.cv_text
    }

    pub fn jd_text(&self) -> &str {
        &self.jd_text
    }

    pub fn role_type(&self) -> RoleType {
        self.role_type
    }
}

/// Envelope returned by the optimization endpoint.
///
/// `data` is set only on success and `error` only on failure. The
/// constructors keep that pairing; the fields themselves do not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<OptimizedCv>,
    #[serde(default)]
    pub error: Option<String>,
    pub processing_ms: u64,
}

impl OptimizeResponse {
    pub fn succeeded(cv: OptimizedCv, processing_ms: u64) -> Self {
        Self {
            success: true,
            data: Some(cv),
            error: None,
            processing_ms,
        }
    }

    pub fn failed(error: impl Into<String>, processing_ms: u64) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            processing_ms,
        }
    }
}
