use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# EvergreenOS PRD compliance\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Requirements: {} implemented / {} total\n\n",
        verdict, report.data.requirements_implemented, report.data.requirements_total
    ));

    if report.requirements.is_empty() {
        out.push_str("No requirements evaluated.\n");
        return out;
    }

    out.push_str("## Requirements\n\n");
    out.push_str("| Requirement | Status | Details |\n");
    out.push_str("|---|---|---|\n");
    for r in &report.requirements {
        let status = if r.implemented { "implemented" } else { "missing" };
        out.push_str(&format!(
            "| `{}` | {} | {} |\n",
            r.identifier,
            status,
            r.details.replace('|', "\\|")
        ));
    }

    if !report.data.notes.is_empty() {
        out.push_str("\n## Notes\n\n");
        for note in &report.data.notes {
            out.push_str(&format!("- {}\n", note));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableRequirement};

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            requirements: Vec::new(),
            data: RenderableData {
                requirements_implemented: 0,
                requirements_total: 0,
                notes: Vec::new(),
            },
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No requirements evaluated"));
    }

    #[test]
    fn renders_table_rows_and_notes() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Fail,
            requirements: vec![
                RenderableRequirement {
                    identifier: "update_channels".to_string(),
                    implemented: true,
                    details: "rpm-ostree manifest declares stable, beta, and dev channels.".to_string(),
                    location: Some("configs/manifest.yaml".to_string()),
                },
                RenderableRequirement {
                    identifier: "ci_pipeline".to_string(),
                    implemented: false,
                    details: "a | b".to_string(),
                    location: None,
                },
            ],
            data: RenderableData {
                requirements_implemented: 1,
                requirements_total: 2,
                notes: vec!["job `smoke-test` is missing step `Checkout`".to_string()],
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("1 implemented / 2 total"));
        assert!(md.contains("| `update_channels` | implemented |"));
        assert!(md.contains("| `ci_pipeline` | missing | a \\| b |"));
        assert!(md.contains("## Notes"));
        assert!(md.contains("- job `smoke-test` is missing step `Checkout`"));
    }
}
