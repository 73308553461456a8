//! Stable DTOs and IDs used across the EvergreenOS image workspace.
//!
//! This crate is intentionally boring:
//! - requirement and success-metric identifiers
//! - the per-requirement status record and the emitted compliance receipt
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use receipt::{
    ComplianceReceipt, ComplianceSummary, RequirementStatus, SCHEMA_COMPLIANCE_V1, ToolMeta,
    Verdict,
};
