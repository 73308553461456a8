#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRequirement {
    pub identifier: String,
    pub implemented: bool,
    pub details: String,
    /// Repo-relative file that holds the evidence, when there is one.
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub requirements_implemented: u32,
    pub requirements_total: u32,
    /// Extra context lines (e.g. missing workflow steps).
    pub notes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub requirements: Vec<RenderableRequirement>,
    pub data: RenderableData,
}
