//! Axum route handlers for the Optimization API.

use std::time::{Duration, Instant};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::agents::AgentError;
use crate::errors::AppError;
use crate::models::{OptimizeRequest, OptimizeResponse, OptimizedCv, RoleType};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct RoleInfo {
    pub role_type: RoleType,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub path: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/roles
///
/// Lists the role categories an optimization can target.
pub async fn handle_list_roles() -> Json<Vec<RoleInfo>> {
    Json(
        RoleType::ALL
            .into_iter()
            .map(|role_type| RoleInfo {
                role_type,
                description: role_type.description(),
            })
            .collect(),
    )
}

/// POST /api/v1/optimize
///
/// Validates the request, runs the configured agent under the optimization
/// deadline and wraps the outcome in an `OptimizeResponse`. Invalid bodies are
/// rejected with 400 before the agent runs; agent failures still return the
/// envelope, with the status code chosen by `failure_status`.
pub async fn handle_optimize(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<OptimizeResponse>), AppError> {
    let Json(request) = payload?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        role = %request.role_type(),
        agent = state.agent.name(),
        cv_chars = request.cv_text().chars().count(),
        jd_chars = request.jd_text().chars().count(),
        "Optimizing CV"
    );

    let deadline = Duration::from_secs(state.config.optimize_timeout_secs);
    let started = Instant::now();

    // Dropping the agent future on timeout cancels the in-flight optimization.
    let outcome = tokio::time::timeout(
        deadline,
        state
            .agent
            .optimize(request.cv_text(), request.jd_text(), request.role_type()),
    )
    .await
    .unwrap_or_else(|_| Err(AgentError::Timeout(deadline)));

    let processing_ms = elapsed_ms(started);

    match outcome {
        Ok(cv) => {
            info!(
                %request_id,
                ats_score = cv.ats_score(),
                processing_ms,
                "CV optimized"
            );
            Ok((
                StatusCode::OK,
                Json(OptimizeResponse::succeeded(cv, processing_ms)),
            ))
        }
        Err(e) => {
            warn!(%request_id, processing_ms, "CV optimization failed: {e}");
            Ok((
                failure_status(&e),
                Json(OptimizeResponse::failed(e.to_string(), processing_ms)),
            ))
        }
    }
}

/// POST /api/v1/render
///
/// Renders an optimized CV to `<PDF_OUTPUT_DIR>/<uuid>.pdf`.
/// Rendering is blocking work and runs on the blocking pool.
pub async fn handle_render(
    State(state): State<AppState>,
    payload: Result<Json<OptimizedCv>, JsonRejection>,
) -> Result<Json<RenderResponse>, AppError> {
    let Json(cv) = payload?;

    let output_path = state
        .config
        .pdf_output_dir
        .join(format!("{}.pdf", Uuid::new_v4()));
    info!(
        "Rendering PDF for {} to {}",
        cv.candidate_name(),
        output_path.display()
    );

    let generator = state.pdf;
    let path = tokio::task::spawn_blocking(move || generator.generate(&cv, &output_path))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF render task failed: {e}")))??;

    Ok(Json(RenderResponse {
        path: path.display().to_string(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn failure_status(error: &AgentError) -> StatusCode {
    match error {
        AgentError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
        AgentError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AgentError::ProviderUnavailable(_) => StatusCode::BAD_GATEWAY,
        AgentError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
