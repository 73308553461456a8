//! The `metrics` use case: validate observed success metrics against the PRD.

use anyhow::Context;
use evergreen_prd::EvergreenOsPrd;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricsOutput {
    /// Failing metric ids in canonical order.
    pub failures: Vec<&'static str>,
}

impl MetricsOutput {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// `observed_text` must be a JSON object of metric id to measured value.
pub fn run_metrics(observed_text: &str) -> anyhow::Result<MetricsOutput> {
    let observed: Value = serde_json::from_str(observed_text).context("parse observed metrics")?;
    let Value::Object(observed) = observed else {
        anyhow::bail!("observed metrics must be a JSON object");
    };
    let failures = EvergreenOsPrd::default().validate_success_metrics(&observed);
    Ok(MetricsOutput { failures })
}

pub fn format_metrics(output: &MetricsOutput) -> String {
    if output.passed() {
        return "All success metrics meet the PRD thresholds.\n".to_string();
    }
    let mut out = String::from("Success metrics below PRD thresholds:\n");
    for metric in &output.failures {
        out.push_str(&format!("  - {}\n", metric));
    }
    out
}
