use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Supported finance and banking role categories.
///
/// Serialized as snake_case strings (`"finance"`, `"credit_analyst"`,
/// `"risk_manager"`). Any other value fails deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    #[default]
    Finance,
    CreditAnalyst,
    RiskManager,
}

impl RoleType {
    pub const ALL: [RoleType; 3] = [
        RoleType::Finance,
        RoleType::CreditAnalyst,
        RoleType::RiskManager,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Finance => "finance",
            RoleType::CreditAnalyst => "credit_analyst",
            RoleType::RiskManager => "risk_manager",
        }
    }

    /// Which job titles the role category covers.
    pub fn description(&self) -> &'static str {
        match self {
            RoleType::Finance => {
                "General finance roles: Analyst, Controller, Treasury, Accountant"
            }
            RoleType::CreditAnalyst => {
                "Credit and lending roles: Credit Analyst, Loan Officer, Underwriter"
            }
            RoleType::RiskManager => {
                "Risk and compliance roles: Risk Analyst, Compliance Officer, Auditor"
            }
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleType::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownRoleType(s.to_string()))
    }
}
