//! Render use cases: markdown and GitHub annotations from in-memory reports.

use evergreen_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    evergreen_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    evergreen_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use evergreen_render::{RenderableData, RenderableRequirement, RenderableVerdict};

    fn sample_report() -> RenderableReport {
        let missing = |id: &str| RenderableRequirement {
            identifier: id.to_string(),
            implemented: false,
            details: "absent".to_string(),
            location: None,
        };
        RenderableReport {
            verdict: RenderableVerdict::Fail,
            requirements: vec![missing("enrollment_ui"), missing("chromebook_support")],
            data: RenderableData {
                requirements_implemented: 0,
                requirements_total: 2,
                notes: Vec::new(),
            },
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let report = sample_report();
        assert_eq!(render_annotations(&report, 1).len(), 1);
        assert_eq!(render_annotations(&report, 10).len(), 2);
    }

    #[test]
    fn render_markdown_smoke() {
        let markdown = render_markdown(&sample_report());
        assert!(markdown.contains("`chromebook_support`"));
    }
}
