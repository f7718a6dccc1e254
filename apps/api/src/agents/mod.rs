#![allow(dead_code)]

//! CV optimization agents: pluggable, trait-based engines behind one contract.
//!
//! `AppState` holds an `Arc<dyn CvAgent>`, chosen at startup by `build_agent`.
//! This build ships no optimization engine: every agent fails with
//! `AgentError::NotImplemented`.

pub mod finance;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{OptimizedCv, RoleType, ValidationError};

pub use finance::FinanceCvAgent;

/// Where the full implementation can be obtained.
pub const FULL_VERSION_URL: &str = "https://assam3.gumroad.com/";

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(
        "{} is not available in the demo build. Get the full implementation at {}",
        .feature,
        FULL_VERSION_URL
    )]
    NotImplemented { feature: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("AI provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Optimization timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Contract every CV optimization engine implements.
///
/// An engine takes raw CV text and a target job description and returns a
/// structured, ATS-optimized `OptimizedCv`. Implementations may fail with
/// `InvalidInput` when either text is too short and with
/// `ProviderUnavailable` when the upstream AI provider cannot be reached.
///
/// The default `optimize` body is the demo behavior: it fails immediately
/// without looking at its input.
#[async_trait]
pub trait CvAgent: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    async fn optimize(
        &self,
        _cv_text: &str,
        _jd_text: &str,
        _role_type: RoleType,
    ) -> Result<OptimizedCv, AgentError> {
        Err(AgentError::NotImplemented {
            feature: "CV optimization",
        })
    }
}

/// Agent that relies on the contract's default body.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCvAgent;

#[async_trait]
impl CvAgent for DemoCvAgent {
    fn name(&self) -> &'static str {
        "demo"
    }
}

/// Picks the agent for this process.
///
/// With a provider key configured, `FinanceCvAgent` is attempted first.
/// Any construction failure falls back to `DemoCvAgent`.
pub fn build_agent(config: &Config) -> Arc<dyn CvAgent> {
    let Some(api_key) = config.openai_api_key.as_deref() else {
        info!("OPENAI_API_KEY not set, using demo agent");
        return Arc::new(DemoCvAgent);
    };

    match FinanceCvAgent::new(api_key, &config.openai_model) {
        Ok(agent) => {
            info!("Finance CV agent initialized (model: {})", config.openai_model);
            Arc::new(agent)
        }
        Err(e) => {
            warn!("Finance CV agent unavailable, falling back to demo agent: {e}");
            Arc::new(DemoCvAgent)
        }
    }
}
