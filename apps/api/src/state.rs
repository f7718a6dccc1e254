use std::sync::Arc;

use crate::agents::CvAgent;
use crate::config::Config;
use crate::pdf::PdfGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable optimization engine, picked by `agents::build_agent`.
    pub agent: Arc<dyn CvAgent>,
    pub pdf: PdfGenerator,
    pub config: Config,
}
