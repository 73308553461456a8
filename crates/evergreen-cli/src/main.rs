//! CLI entry point for `evergreen`.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, I/O, and exit
//! codes. All business logic lives in the `evergreen-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use evergreen_app::{
    BuildStep, ExplainOutput, ReportInput, format_explanation, format_metrics, format_not_found,
    render_annotations, render_markdown, run_build_step, run_explain, run_metrics, run_report,
    serialize_receipt, to_renderable, verdict_exit_code, write_text_file,
};
use evergreen_settings::Overrides;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "evergreen",
    version,
    about = "EvergreenOS image configuration, PRD compliance, and placeholder build steps"
)]
struct Cli {
    /// Repository root (directory containing `configs/`).
    #[arg(long, default_value = ".", global = true)]
    repo_root: Utf8PathBuf,

    /// Path to the evergreen config TOML, relative to the repository root.
    #[arg(long, default_value = "evergreen.toml", global = true)]
    config: Utf8PathBuf,

    /// Log output format on stderr. Verbosity comes from `EVERGREEN_LOG` (default `warn`).
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Json,
    Md,
    Annotations,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the repository against the PRD. Exits 2 when a requirement is missing.
    Report {
        #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,

        /// Where to write the report (stdout if not specified).
        #[arg(long)]
        out: Option<Utf8PathBuf>,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max_annotations: usize,

        /// Override the compose manifest location (repo-relative).
        #[arg(long)]
        manifest: Option<String>,

        /// Override the security policies location (repo-relative).
        #[arg(long)]
        security_policies: Option<String>,

        /// Override the Flatpak remote defaults location (repo-relative).
        #[arg(long)]
        flatpak_remotes: Option<String>,

        /// Override the enrollment greeter pointer location (repo-relative).
        #[arg(long)]
        greeter_source: Option<String>,

        /// Override the CI workflow location (repo-relative).
        #[arg(long)]
        workflow: Option<String>,

        /// Override the device-agent unit location (repo-relative).
        #[arg(long)]
        device_agent_unit: Option<String>,
    },

    /// Validate observed success metrics (JSON object) against the PRD thresholds.
    Metrics {
        #[arg(long)]
        observed: Utf8PathBuf,
    },

    /// Explain a requirement with remediation guidance.
    Explain {
        /// Requirement id (e.g. "security_hardening").
        identifier: String,
    },

    /// Simulate an rpm-ostree compose.
    Compose {
        #[arg(long)]
        manifest: Utf8PathBuf,
        #[arg(long)]
        output: Utf8PathBuf,
    },

    /// Write a placeholder installer ISO.
    CreateIso {
        #[arg(long)]
        kickstart: Utf8PathBuf,
        #[arg(long)]
        output: Utf8PathBuf,
    },

    /// Write a placeholder QEMU test image.
    CreateQemuImage {
        #[arg(long)]
        ostree: Utf8PathBuf,
        #[arg(long)]
        output: Utf8PathBuf,
    },

    /// Record a passing QEMU smoke test.
    QemuSmoke {
        #[arg(long)]
        image: Utf8PathBuf,
        #[arg(long)]
        enroll_url: String,
        /// Results directory (defaults to the image's directory).
        #[arg(long)]
        output: Option<Utf8PathBuf>,
    },

    /// Publish an OSTree commit into the stable, beta, and dev channels.
    PublishOstree {
        #[arg(long)]
        source: Utf8PathBuf,
        #[arg(long)]
        destination: Utf8PathBuf,
        #[arg(long)]
        version: String,
        #[arg(long)]
        gpg_key: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match run(&cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("evergreen error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_env("EVERGREEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.cmd {
        Commands::Report {
            format,
            out,
            max_annotations,
            manifest,
            security_policies,
            flatpak_remotes,
            greeter_source,
            workflow,
            device_agent_unit,
        } => {
            let overrides = Overrides {
                manifest: manifest.clone(),
                security_policies: security_policies.clone(),
                flatpak_remotes: flatpak_remotes.clone(),
                greeter_source: greeter_source.clone(),
                workflow: workflow.clone(),
                device_agent_unit: device_agent_unit.clone(),
            };
            cmd_report(cli, *format, out.as_deref(), *max_annotations, overrides)
        }
        Commands::Metrics { observed } => cmd_metrics(observed),
        Commands::Explain { identifier } => Ok(cmd_explain(identifier)),
        Commands::Compose { manifest, output } => build(BuildStep::Compose { manifest, output }),
        Commands::CreateIso { kickstart, output } => {
            build(BuildStep::CreateIso { kickstart, output })
        }
        Commands::CreateQemuImage { ostree, output } => {
            build(BuildStep::CreateQemuImage { ostree, output })
        }
        Commands::QemuSmoke {
            image,
            enroll_url,
            output,
        } => build(BuildStep::QemuSmoke {
            image,
            enroll_url,
            output: output.as_deref(),
        }),
        Commands::PublishOstree {
            source,
            destination,
            version,
            gpg_key,
        } => build(BuildStep::PublishOstree {
            source,
            destination,
            version,
            gpg_key: gpg_key.as_deref(),
        }),
    }
}

fn cmd_report(
    cli: &Cli,
    format: ReportFormat,
    out: Option<&Utf8Path>,
    max_annotations: usize,
    overrides: Overrides,
) -> anyhow::Result<i32> {
    if !cli.repo_root.is_dir() {
        anyhow::bail!("repo root does not exist: {}", cli.repo_root);
    }
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    // Missing config file is allowed (defaults apply).
    let cfg_path = repo_root.join(&cli.config);
    let cfg_text = std::fs::read_to_string(&cfg_path).unwrap_or_default();
    debug!(config = %cfg_path, found = !cfg_text.is_empty(), "resolved config file");

    let output = run_report(ReportInput {
        repo_root: &repo_root,
        config_text: &cfg_text,
        overrides,
    })?;

    let rendered = match format {
        ReportFormat::Json => {
            let mut bytes = serialize_receipt(&output.receipt)?;
            bytes.push(b'\n');
            bytes
        }
        ReportFormat::Md => {
            let renderable = to_renderable(&output.receipt, &output.layout, &output.workflow_gaps);
            render_markdown(&renderable).into_bytes()
        }
        ReportFormat::Annotations => {
            let renderable = to_renderable(&output.receipt, &output.layout, &output.workflow_gaps);
            let mut text = String::new();
            for annotation in render_annotations(&renderable, max_annotations) {
                text.push_str(&annotation);
                text.push('\n');
            }
            text.into_bytes()
        }
    };

    match out {
        Some(path) => write_text_file(path, &rendered).context("write report")?,
        None => print!("{}", String::from_utf8_lossy(&rendered)),
    }

    Ok(verdict_exit_code(output.receipt.verdict))
}

fn cmd_metrics(observed: &Utf8Path) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(observed)
        .with_context(|| format!("read observed metrics: {}", observed))?;
    let output = run_metrics(&text)?;
    print!("{}", format_metrics(&output));
    Ok(if output.passed() { 0 } else { 2 })
}

fn cmd_explain(identifier: &str) -> i32 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", format_not_found(&identifier, available));
            1
        }
    }
}

fn build(step: BuildStep<'_>) -> anyhow::Result<i32> {
    let artifact = run_build_step(step)?;
    println!("{}", artifact);
    Ok(0)
}
