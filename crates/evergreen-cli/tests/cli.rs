//! End-to-end tests for the `evergreen` binary against the checked-in configuration.

use assert_cmd::Command;
use evergreen_test_util::{
    TIMESTAMP_PLACEHOLDER, VERSION_PLACEHOLDER, normalize_generated_lines, normalize_nondeterministic,
};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn evergreen_cmd() -> Command {
    Command::cargo_bin("evergreen").expect("evergreen binary not found")
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("evergreen-cli should have parent")
        .parent()
        .expect("crates should have parent")
        .to_path_buf()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

/// Copy the artifacts the compliance report reads into `dest`, optionally renaming them.
fn copy_artifact(from_rel: &str, dest: &Path, to_rel: &str) {
    let target = dest.join(to_rel);
    fs::create_dir_all(target.parent().expect("parent")).expect("create dirs");
    fs::copy(workspace_root().join(from_rel), target).expect("copy artifact");
}

#[test]
fn report_json_flags_only_chromebook_support() {
    let root = workspace_root();
    let output = evergreen_cmd()
        .args(["--repo-root", path_arg(&root), "report"])
        .output()
        .expect("run evergreen");

    assert_eq!(
        output.status.code(),
        Some(2),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let receipt: Value = serde_json::from_slice(&output.stdout).expect("json receipt");
    let receipt = normalize_nondeterministic(receipt);

    assert_eq!(receipt["schema"], "evergreen.compliance.v1");
    assert_eq!(receipt["tool"]["name"], "evergreen");
    assert_eq!(receipt["tool"]["version"], VERSION_PLACEHOLDER);
    assert_eq!(receipt["started_at"], TIMESTAMP_PLACEHOLDER);
    assert_eq!(receipt["verdict"], "fail");
    assert_eq!(receipt["data"]["requirements_total"], 8);
    assert_eq!(receipt["data"]["requirements_implemented"], 7);
    assert_eq!(receipt["data"]["missing"], serde_json::json!(["chromebook_support"]));

    let ids: Vec<&str> = receipt["requirements"]
        .as_array()
        .expect("requirements array")
        .iter()
        .map(|r| r["identifier"].as_str().expect("identifier"))
        .collect();
    assert_eq!(
        ids,
        vec![
            "base_image_composition",
            "device_agent_integration",
            "enrollment_ui",
            "flatpak_remotes",
            "security_hardening",
            "update_channels",
            "ci_pipeline",
            "chromebook_support",
        ]
    );
}

#[test]
fn report_markdown_is_written_to_out() {
    let tmp = TempDir::new().expect("temp dir");
    let out = tmp.path().join("reports").join("compliance.md");

    evergreen_cmd()
        .args([
            "--repo-root",
            path_arg(&workspace_root()),
            "report",
            "--format",
            "md",
            "--out",
            path_arg(&out),
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());

    let md = fs::read_to_string(&out).expect("read markdown");
    assert!(md.starts_with("# EvergreenOS PRD compliance"));
    assert!(md.contains("chromebook_support"));
    assert!(md.contains("security_hardening"));
}

#[test]
fn report_annotations_cover_missing_requirements_only() {
    evergreen_cmd()
        .args([
            "--repo-root",
            path_arg(&workspace_root()),
            "report",
            "--format",
            "annotations",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("title=chromebook_support::"))
        .stdout(predicate::str::contains("security_hardening").not());
}

#[test]
fn report_follows_config_file_paths() {
    let tmp = TempDir::new().expect("temp dir");
    let repo = tmp.path();
    copy_artifact("configs/manifest.yaml", repo, "image/compose.json");
    copy_artifact("configs/security/policies.yaml", repo, "configs/security/policies.yaml");
    copy_artifact(
        "configs/defaults/flatpak-remotes.conf",
        repo,
        "configs/defaults/flatpak-remotes.conf",
    );
    copy_artifact(
        "enrollment-ui/greeter/source.json",
        repo,
        "enrollment-ui/greeter/source.json",
    );
    copy_artifact(".github/workflows/build.yml", repo, ".github/workflows/build.yml");
    copy_artifact(
        "configs/services/evergreen-device-agent.service",
        repo,
        "configs/services/evergreen-device-agent.service",
    );
    fs::write(
        repo.join("evergreen.toml"),
        "schema = \"evergreen.config.v1\"\n\n[paths]\nmanifest = \"image/compose.json\"\n",
    )
    .expect("write config");

    let output = evergreen_cmd()
        .args(["--repo-root", path_arg(repo), "report"])
        .output()
        .expect("run evergreen");
    assert_eq!(
        output.status.code(),
        Some(2),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let receipt: Value = serde_json::from_slice(&output.stdout).expect("json receipt");
    assert_eq!(receipt["data"]["requirements_implemented"], 7);
}

#[test]
fn report_without_unit_file_flags_device_agent() {
    let tmp = TempDir::new().expect("temp dir");
    let repo = tmp.path();
    for rel in [
        "configs/manifest.yaml",
        "configs/security/policies.yaml",
        "configs/defaults/flatpak-remotes.conf",
        "enrollment-ui/greeter/source.json",
        ".github/workflows/build.yml",
    ] {
        copy_artifact(rel, repo, rel);
    }

    let output = evergreen_cmd()
        .args(["--repo-root", path_arg(repo), "report"])
        .output()
        .expect("run evergreen");
    assert_eq!(output.status.code(), Some(2));

    let receipt: Value = serde_json::from_slice(&output.stdout).expect("json receipt");
    assert_eq!(
        receipt["data"]["missing"],
        serde_json::json!(["device_agent_integration", "chromebook_support"])
    );
}

#[test]
fn report_on_empty_repo_is_an_error() {
    let tmp = TempDir::new().expect("temp dir");
    evergreen_cmd()
        .args(["--repo-root", path_arg(tmp.path()), "report"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("evergreen error:"))
        .stderr(predicate::str::contains("manifest.yaml"));
}

#[test]
fn report_rejects_escaping_override() {
    evergreen_cmd()
        .args([
            "--repo-root",
            path_arg(&workspace_root()),
            "report",
            "--manifest",
            "../outside.json",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("escapes the repository root"));
}

#[test]
fn explain_known_requirement() {
    evergreen_cmd()
        .args(["explain", "chromebook_support"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chromebook Support"))
        .stdout(predicate::str::contains("Remediation"));
}

#[test]
fn explain_unknown_requirement_lists_available() {
    evergreen_cmd()
        .args(["explain", "not_a_requirement"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown requirement: not_a_requirement"))
        .stderr(predicate::str::contains("security_hardening"));
}

#[test]
fn metrics_pass_and_fail() {
    let tmp = TempDir::new().expect("temp dir");
    let passing = tmp.path().join("passing.json");
    fs::write(
        &passing,
        r#"{
  "fresh_install_boot_seconds": 42.5,
  "enrollment_completion_seconds": 120,
  "policy_application_seconds": 90,
  "ci_pipeline_artifacts": true,
  "update_rollback_verified": true,
  "artifact_signatures_status": "verified"
}"#,
    )
    .expect("write passing");

    evergreen_cmd()
        .args(["metrics", "--observed", path_arg(&passing)])
        .assert()
        .success();

    let failing = tmp.path().join("failing.json");
    fs::write(&failing, "{}").expect("write failing");
    evergreen_cmd()
        .args(["metrics", "--observed", path_arg(&failing)])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("fresh_install_boot_seconds"));

    let not_object = tmp.path().join("array.json");
    fs::write(&not_object, "[1, 2]").expect("write array");
    evergreen_cmd()
        .args(["metrics", "--observed", path_arg(&not_object)])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("evergreen error:"));
}

#[test]
fn build_steps_chain_through_publish() {
    let tmp = TempDir::new().expect("temp dir");
    let work = tmp.path();
    let root = workspace_root();

    let compose_out = work.join("compose");
    evergreen_cmd()
        .args([
            "compose",
            "--manifest",
            path_arg(&root.join("configs/manifest.yaml")),
            "--output",
            path_arg(&compose_out),
        ])
        .assert()
        .success();
    let compose: Value =
        serde_json::from_str(&fs::read_to_string(compose_out.join("compose.json")).expect("read"))
            .expect("compose json");
    assert!(
        compose["packages"]
            .as_array()
            .expect("packages")
            .iter()
            .any(|p| p == "evergreen-device-agent")
    );

    let iso_out = work.join("iso");
    evergreen_cmd()
        .args([
            "create-iso",
            "--kickstart",
            path_arg(&root.join("build/iso/evergreen.ks")),
            "--output",
            path_arg(&iso_out),
        ])
        .assert()
        .success();
    let kickstart = root.join("build/iso/evergreen.ks");
    let iso = fs::read_to_string(iso_out.join("EvergreenOS.iso")).expect("read iso");
    assert_eq!(
        normalize_generated_lines(&iso),
        format!(
            "EvergreenOS ISO placeholder\nKickstart: {}\nGenerated: {TIMESTAMP_PLACEHOLDER}\n",
            kickstart.display()
        )
    );

    let qemu_out = work.join("qemu");
    evergreen_cmd()
        .args([
            "create-qemu-image",
            "--ostree",
            path_arg(&compose_out),
            "--output",
            path_arg(&qemu_out),
        ])
        .assert()
        .success();
    let image = qemu_out.join("evergreenos.qcow2");
    assert!(image.is_file());

    evergreen_cmd()
        .args([
            "qemu-smoke",
            "--image",
            path_arg(&image),
            "--enroll-url",
            "https://enroll.example.test",
        ])
        .assert()
        .success();
    assert!(qemu_out.join("smoke-results.json").is_file());

    let repo_out = work.join("repo");
    evergreen_cmd()
        .args([
            "publish-ostree",
            "--source",
            path_arg(&compose_out),
            "--destination",
            path_arg(&repo_out),
            "--version",
            "39.20240101",
        ])
        .assert()
        .success();
    for channel in ["stable", "beta", "dev"] {
        assert!(repo_out.join(channel).is_dir(), "{channel} channel directory");
    }
    assert!(repo_out.join("summary.json").is_file());
}

#[test]
fn build_steps_fail_on_missing_inputs() {
    let tmp = TempDir::new().expect("temp dir");
    let missing = tmp.path().join("missing");
    let out = tmp.path().join("out");

    let cases: [Vec<&str>; 5] = [
        vec!["compose", "--manifest", path_arg(&missing), "--output", path_arg(&out)],
        vec!["create-iso", "--kickstart", path_arg(&missing), "--output", path_arg(&out)],
        vec!["create-qemu-image", "--ostree", path_arg(&missing), "--output", path_arg(&out)],
        vec!["qemu-smoke", "--image", path_arg(&missing), "--enroll-url", "https://e.test"],
        vec![
            "publish-ostree",
            "--source",
            path_arg(&missing),
            "--destination",
            path_arg(&out),
            "--version",
            "1",
        ],
    ];

    for args in cases {
        evergreen_cmd()
            .args(&args)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("evergreen error:"))
            .stderr(predicate::str::contains("not found"));
    }
    assert!(!out.exists());
}
