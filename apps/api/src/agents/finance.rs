#![allow(dead_code)]

//! Finance & banking CV agent.
//!
//! Targets finance, credit and risk roles in the MENA / Egypt job market.
//! The demo build cannot construct it and its `optimize` always fails.

use async_trait::async_trait;

use super::{AgentError, CvAgent};
use crate::models::{OptimizedCv, RoleType};

pub const DEFAULT_MODEL: &str = "gpt-4o";

pub struct FinanceCvAgent {
    api_key: String,
    model: String,
}

impl FinanceCvAgent {
    /// Always fails in this build. Neither the key nor the model is checked.
    pub fn new(_api_key: &str, _model: &str) -> Result<Self, AgentError> {
        Err(AgentError::NotImplemented {
            feature: "FinanceCvAgent",
        })
    }

    pub fn with_default_model(api_key: &str) -> Result<Self, AgentError> {
        Self::new(api_key, DEFAULT_MODEL)
    }
}

#[async_trait]
impl CvAgent for FinanceCvAgent {
    fn name(&self) -> &'static str {
        "finance"
    }

    async fn optimize(
        &self,
        _cv_text: &str,
        _jd_text: &str,
        _role_type: RoleType,
    ) -> Result<OptimizedCv, AgentError> {
        Err(AgentError::NotImplemented {
            feature: "Finance CV optimization",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_always_fails() {
        for (key, model) in [
            ("sk-live-123", "gpt-4o"),
            ("", ""),
            ("anything", "gpt-4o-mini"),
        ] {
            let result = FinanceCvAgent::new(key, model);
            assert!(matches!(
                result,
                Err(AgentError::NotImplemented {
                    feature: "FinanceCvAgent"
                })
            ));
        }
    }

    #[test]
    fn test_default_model_constructor_fails() {
        assert!(FinanceCvAgent::with_default_model("sk-live-123").is_err());
    }

    #[tokio::test]
    async fn test_optimize_always_fails() {
        // Built directly: the public constructor never succeeds
        let agent = FinanceCvAgent {
            api_key: "sk-live-123".to_string(),
            model: DEFAULT_MODEL.to_string(),
        };

        let cv = "Credit Analyst, 6 years at National Bank of Egypt, IFRS 9 staging.".repeat(2);
        let jd = "Senior Credit Analyst: corporate lending, CBE regulations, EGP portfolios.".repeat(2);

        for role in RoleType::ALL {
            let result = agent.optimize(&cv, &jd, role).await;
            assert!(matches!(result, Err(AgentError::NotImplemented { .. })));
        }
    }
}
