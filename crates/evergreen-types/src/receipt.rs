use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for compliance receipts.
pub const SCHEMA_COMPLIANCE_V1: &str = "evergreen.compliance.v1";

/// Implementation state for a single PRD requirement.
///
/// `details` is always chosen from the same condition that decided
/// `implemented`, so the two never disagree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RequirementStatus {
    identifier: String,
    implemented: bool,
    details: String,
}

impl RequirementStatus {
    pub fn new(identifier: impl Into<String>, implemented: bool, details: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            implemented,
            details: details.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn implemented(&self) -> bool {
        self.implemented
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Counts and gap list derived from the requirement statuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ComplianceSummary {
    pub requirements_total: u32,
    pub requirements_implemented: u32,
    /// Identifiers of missing requirements, in evaluation order.
    #[serde(default)]
    pub missing: Vec<String>,
}

impl ComplianceSummary {
    pub fn from_statuses(statuses: &[RequirementStatus]) -> Self {
        let missing: Vec<String> = statuses
            .iter()
            .filter(|s| !s.implemented())
            .map(|s| s.identifier().to_string())
            .collect();
        Self {
            requirements_total: statuses.len() as u32,
            requirements_implemented: (statuses.len() - missing.len()) as u32,
            missing,
        }
    }
}

/// Serialized compliance report written by `evergreen report`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceReceipt {
    /// Versioned schema identifier for the receipt shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    /// One entry per tracked requirement, in evaluation order.
    pub requirements: Vec<RequirementStatus>,
    pub data: ComplianceSummary,
}
