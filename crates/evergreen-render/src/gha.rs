use crate::RenderableReport;

/// Render missing requirements as GitHub Actions workflow command annotations.
///
/// Format:
/// `::error file={path},title={id}::{details}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for r in report.requirements.iter().filter(|r| !r.implemented) {
        let mut meta = String::new();
        if let Some(path) = &r.location {
            meta.push_str(&format!("file={},", escape_property(path)));
        }
        meta.push_str(&format!("title={}", escape_property(&r.identifier)));

        let message = escape_data(&format!("[{}] {}", r.identifier, r.details));
        out.push(format!("::error {}::{}", meta, message));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
