//! The `report` use case: evaluate PRD compliance and produce a receipt.

use anyhow::Context;
use camino::Utf8Path;
use evergreen_compliance::{PrdComplianceReport, RepositoryState};
use evergreen_render::{RenderableData, RenderableReport, RenderableRequirement, RenderableVerdict};
use evergreen_settings::{ArtifactKind, EvergreenConfigV1, Overrides, RepoLayout};
use evergreen_types::{
    ComplianceReceipt, ComplianceSummary, SCHEMA_COMPLIANCE_V1, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;
use tracing::info;

/// Input for the report use case.
#[derive(Clone, Debug)]
pub struct ReportInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// `evergreen.toml` contents (empty string if not found).
    pub config_text: &'a str,
    pub overrides: Overrides,
}

/// Output from the report use case.
#[derive(Clone, Debug)]
pub struct ReportOutput {
    pub receipt: ComplianceReceipt,
    /// The layout the artifacts were read from.
    pub layout: RepoLayout,
    /// Human-readable CI workflow gaps, empty when the workflow meets expectations.
    pub workflow_gaps: Vec<String>,
}

/// Parse the config text (empty means defaults) and resolve artifact locations under `repo_root`.
pub fn resolve_repo_layout(
    repo_root: &Utf8Path,
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<RepoLayout> {
    let cfg = if config_text.trim().is_empty() {
        EvergreenConfigV1::default()
    } else {
        evergreen_settings::parse_config_toml(config_text).context("parse config")?
    };
    evergreen_settings::resolve_layout(repo_root, cfg, overrides).context("resolve layout")
}

pub fn run_report(input: ReportInput<'_>) -> anyhow::Result<ReportOutput> {
    let started_at = OffsetDateTime::now_utc();

    let layout = resolve_repo_layout(input.repo_root, input.config_text, input.overrides)?;
    let state = RepositoryState::load(&layout).context("load repository state")?;
    let workflow_gaps = state
        .workflow
        .expectation_gaps()
        .iter()
        .map(ToString::to_string)
        .collect();
    let report = PrdComplianceReport::evaluate(state);

    let verdict = if report.fully_compliant() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    let requirements = report.statuses().to_vec();
    let data = ComplianceSummary::from_statuses(&requirements);
    info!(
        ?verdict,
        implemented = data.requirements_implemented,
        total = data.requirements_total,
        "compliance report ready"
    );

    let receipt = ComplianceReceipt {
        schema: SCHEMA_COMPLIANCE_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        requirements,
        data,
    };

    Ok(ReportOutput {
        receipt,
        layout,
        workflow_gaps,
    })
}

pub fn serialize_receipt(receipt: &ComplianceReceipt) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(receipt).context("serialize compliance receipt")
}

/// Map verdict to exit code: 0 = every requirement implemented, 2 = something missing.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

pub fn to_renderable(
    receipt: &ComplianceReceipt,
    layout: &RepoLayout,
    notes: &[String],
) -> RenderableReport {
    RenderableReport {
        verdict: match receipt.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        requirements: receipt
            .requirements
            .iter()
            .map(|s| RenderableRequirement {
                identifier: s.identifier().to_string(),
                implemented: s.implemented(),
                details: s.details().to_string(),
                location: evidence_kind(s.identifier())
                    .map(|kind| layout.relative_path(kind).to_string()),
            })
            .collect(),
        data: RenderableData {
            requirements_implemented: receipt.data.requirements_implemented,
            requirements_total: receipt.data.requirements_total,
            notes: notes.to_vec(),
        },
    }
}

/// The artifact a requirement is primarily judged on.
fn evidence_kind(identifier: &str) -> Option<ArtifactKind> {
    match identifier {
        ids::REQ_BASE_IMAGE_COMPOSITION
        | ids::REQ_DEVICE_AGENT_INTEGRATION
        | ids::REQ_UPDATE_CHANNELS => Some(ArtifactKind::ComposeManifest),
        ids::REQ_ENROLLMENT_UI => Some(ArtifactKind::GreeterSource),
        ids::REQ_FLATPAK_REMOTES => Some(ArtifactKind::FlatpakRemotes),
        ids::REQ_SECURITY_HARDENING => Some(ArtifactKind::SecurityPolicies),
        ids::REQ_CI_PIPELINE => Some(ArtifactKind::Workflow),
        _ => None,
    }
}
