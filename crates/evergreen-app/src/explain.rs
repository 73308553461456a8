//! The `explain` use case: look up requirement documentation.

use evergreen_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the known requirement ids.
    NotFound {
        identifier: String,
        available: &'static [&'static str],
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: explain::all_requirement_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (missing):\n");
    out.push_str("```\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (implemented):\n");
    out.push_str("```\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

pub fn format_not_found(identifier: &str, available: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown requirement: {}\n\n", identifier));
    out.push_str("Available requirements:\n");
    for id in available {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_requirement() {
        let output = run_explain("security_hardening");
        let ExplainOutput::Found(exp) = output else {
            panic!("expected Found");
        };
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with("Security Hardening\n=================="));
        assert!(formatted.contains("Remediation"));
        assert!(formatted.contains("Before (missing):"));
    }

    #[test]
    fn explain_unknown_lists_requirements() {
        let ExplainOutput::NotFound {
            identifier,
            available,
        } = run_explain("kernel_hardening")
        else {
            panic!("expected NotFound");
        };
        assert_eq!(identifier, "kernel_hardening");
        assert_eq!(available.len(), 8);

        let formatted = format_not_found(&identifier, available);
        assert!(formatted.contains("Unknown requirement: kernel_hardening"));
        assert!(formatted.contains("  - chromebook_support\n"));
    }
}
