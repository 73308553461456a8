//! PRD compliance evaluation.
//!
//! Input: a [`RepositoryState`] snapshot read from disk.
//! Output: one [`RequirementStatus`] per requirement, in a fixed order.

#![forbid(unsafe_code)]

mod checks;
mod report;
mod state;

#[cfg(test)]
mod test_support;

pub use evergreen_types::RequirementStatus;
pub use report::PrdComplianceReport;
pub use state::RepositoryState;
