use crate::checks;
use crate::state::RepositoryState;
use evergreen_config::{ConfigError, RepoLayout};
use evergreen_prd::EvergreenOsPrd;
use evergreen_types::RequirementStatus;
use tracing::info;

/// How the repository fares against the PRD, one status per requirement.
#[derive(Clone, Debug, PartialEq)]
pub struct PrdComplianceReport {
    prd: EvergreenOsPrd,
    statuses: Vec<RequirementStatus>,
}

impl PrdComplianceReport {
    /// Evaluate the canonical repository.
    pub fn current_state() -> Result<Self, ConfigError> {
        Self::current_state_in(&RepoLayout::canonical())
    }

    /// Evaluate the repository described by `layout`. Reads every artifact afresh.
    pub fn current_state_in(layout: &RepoLayout) -> Result<Self, ConfigError> {
        let state = RepositoryState::load(layout)?;
        let report = Self::evaluate(state);
        info!(
            root = %layout.root,
            implemented = report.implemented_requirements().len(),
            missing = report.missing_requirements().len(),
            "evaluated PRD compliance"
        );
        Ok(report)
    }

    /// Pure evaluation of an already-loaded snapshot.
    pub fn evaluate(state: RepositoryState) -> Self {
        let statuses = checks::run_all(&state);
        Self {
            prd: state.prd,
            statuses,
        }
    }

    pub fn prd(&self) -> &EvergreenOsPrd {
        &self.prd
    }

    /// Statuses in evaluation order.
    pub fn statuses(&self) -> &[RequirementStatus] {
        &self.statuses
    }

    pub fn fully_compliant(&self) -> bool {
        self.statuses.iter().all(RequirementStatus::implemented)
    }

    pub fn missing_requirements(&self) -> Vec<&RequirementStatus> {
        self.statuses.iter().filter(|s| !s.implemented()).collect()
    }

    pub fn implemented_requirements(&self) -> Vec<&RequirementStatus> {
        self.statuses.iter().filter(|s| s.implemented()).collect()
    }

    /// Identifier/status pairs in evaluation order.
    pub fn requirement_map(&self) -> Vec<(&str, &RequirementStatus)> {
        self.statuses.iter().map(|s| (s.identifier(), s)).collect()
    }

    pub fn status(&self, identifier: &str) -> Option<&RequirementStatus> {
        self.statuses.iter().find(|s| s.identifier() == identifier)
    }
}
