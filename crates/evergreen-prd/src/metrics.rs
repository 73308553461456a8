use serde_json::Value;

/// How an observed success metric is judged.
#[derive(Clone, Debug, PartialEq)]
pub enum MetricThreshold {
    /// Observed value must be exactly this boolean.
    Flag(bool),
    /// Observed value must be a number no greater than this.
    Max(f64),
    /// Observed value must be this exact string.
    Exact(String),
}

impl MetricThreshold {
    /// `observed` is `None` when the metric was not reported, which never satisfies a threshold.
    pub fn is_met(&self, observed: Option<&Value>) -> bool {
        match (self, observed) {
            (MetricThreshold::Flag(want), Some(Value::Bool(got))) => want == got,
            (MetricThreshold::Max(limit), Some(Value::Number(n))) => {
                n.as_f64().is_some_and(|v| v <= *limit)
            }
            (MetricThreshold::Exact(want), Some(Value::String(got))) => want == got,
            _ => false,
        }
    }
}
