use camino::Utf8Path;
use evergreen_config::{Artifact, ArtifactKind, ConfigError, RepoLayout, json};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A single step of a job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowStep {
    name: String,
    uses: Option<String>,
    run: Option<String>,
}

impl WorkflowStep {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uses(&self) -> Option<&str> {
        self.uses.as_deref()
    }

    pub fn run(&self) -> Option<&str> {
        self.run.as_deref()
    }
}

/// A job: ordered steps plus the ids of the jobs it waits for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkflowJob {
    identifier: String,
    runs_on: String,
    steps: Vec<WorkflowStep>,
    needs: Vec<String>,
}

impl WorkflowJob {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn runs_on(&self) -> &str {
        &self.runs_on
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    pub fn needs(&self) -> &[String] {
        &self.needs
    }

    /// Step names in declaration order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(WorkflowStep::name).collect()
    }

    pub fn has_step(&self, name: &str) -> bool {
        self.steps.iter().any(|s| s.name == name)
    }
}

/// The build workflow, keyed by job id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GitHubWorkflow {
    name: String,
    triggers: Value,
    jobs: BTreeMap<String, WorkflowJob>,
}

#[derive(Deserialize)]
struct RawWorkflow {
    #[serde(default)]
    name: String,
    #[serde(default = "empty_object", rename = "on")]
    triggers: Value,
    #[serde(default)]
    jobs: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawJob {
    #[serde(default, rename = "runs-on")]
    runs_on: String,
    #[serde(default)]
    steps: Vec<RawStep>,
    #[serde(default)]
    needs: Needs,
}

#[derive(Deserialize)]
struct RawStep {
    #[serde(default)]
    name: String,
    #[serde(default)]
    uses: Option<String>,
    #[serde(default)]
    run: Option<String>,
}

/// `needs: build` and `needs: [build]` mean the same thing.
#[derive(Deserialize)]
#[serde(untagged)]
enum Needs {
    One(String),
    Many(Vec<String>),
}

impl Default for Needs {
    fn default() -> Self {
        Needs::Many(Vec::new())
    }
}

impl From<Needs> for Vec<String> {
    fn from(needs: Needs) -> Self {
        match needs {
            Needs::One(id) => vec![id],
            Needs::Many(ids) => ids,
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl Artifact for GitHubWorkflow {
    const KIND: ArtifactKind = ArtifactKind::Workflow;

    fn parse(path: &Utf8Path, text: &str) -> Result<Self, ConfigError> {
        let doc = json::parse_document(path, text)?;
        json::require_keys(path, &doc, &[])?;
        let raw: RawWorkflow = json::decode(path, doc)?;

        let mut jobs = BTreeMap::new();
        for (identifier, job) in raw.jobs {
            let job: RawJob = serde_json::from_value(job).map_err(|e| ConfigError::Schema {
                path: path.to_path_buf(),
                message: format!("job `{identifier}`: {e}"),
            })?;
            let steps = job
                .steps
                .into_iter()
                .map(|s| WorkflowStep {
                    name: s.name,
                    uses: s.uses,
                    run: s.run,
                })
                .collect();
            jobs.insert(
                identifier.clone(),
                WorkflowJob {
                    identifier,
                    runs_on: job.runs_on,
                    steps,
                    needs: job.needs.into(),
                },
            );
        }

        Ok(GitHubWorkflow {
            name: raw.name,
            triggers: raw.triggers,
            jobs,
        })
    }
}

impl GitHubWorkflow {
    /// Load from `path`, or from `.github/workflows/build.yml` in the canonical repository.
    pub fn load_default(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        Self::load(path)
    }

    /// Load from `path`, or from the workflow location in `layout`.
    pub fn load_default_in(layout: &RepoLayout, path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        Self::load_in(layout, path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `on` block, uninterpreted.
    pub fn triggers(&self) -> &Value {
        &self.triggers
    }

    pub fn jobs(&self) -> &BTreeMap<String, WorkflowJob> {
        &self.jobs
    }

    pub fn job(&self, identifier: &str) -> Option<&WorkflowJob> {
        self.jobs.get(identifier)
    }
}
