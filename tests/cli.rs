//! CLI integration tests: run the built binary against config files in a
//! temp directory.
//!
//! Run with: `cargo test --test cli`

#![cfg(not(target_arch = "wasm32"))]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_site-interactions");
    Command::new(bin).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_config(dir: &Path, content: &str) -> String {
    let path = dir.join("interactions.toml");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

// ===========================================================================
// gen-config
// ===========================================================================

#[test]
fn gen_config_prints_every_section() {
    let out = run(&["gen-config"]);
    assert!(out.status.success());
    let text = stdout(&out);
    for section in [
        "[scroll]",
        "[notifications]",
        "[counter]",
        "[fade_in]",
        "[parallax]",
        "[selectors]",
        "[branding]",
        "[logging]",
    ] {
        assert!(text.contains(section), "missing {section}");
    }
}

#[test]
fn gen_config_output_passes_check() {
    let tmp = TempDir::new().unwrap();
    let generated = stdout(&run(&["gen-config"]));
    let path = write_config(tmp.path(), &generated);

    let out = run(&["check", "--config", &path]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stdout(&out).contains("==> Config is valid"));
}

// ===========================================================================
// check
// ===========================================================================

#[test]
fn check_without_config_uses_defaults() {
    let out = run(&["check"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Config: stock defaults"));
    assert!(text.contains("header: scrolled past 50px"));
}

#[test]
fn check_reports_overridden_values() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        tmp.path(),
        "[scroll]\nanchor_offset = 96.0\n\n[selectors]\nheader = \"header.site\"\n",
    );

    let out = run(&["check", "--config", &path]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("anchor offset: 96px"));
    assert!(text.contains("header-scroll: header.site"));
    // Untouched values keep their defaults
    assert!(text.contains("scroll-to-top: visible past 300px"));
}

#[test]
fn check_json_prints_resolved_config() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "[notifications]\nvisible_ms = 3000\n");

    let out = run(&["check", "--config", &path, "--json"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let value: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(value["notifications"]["visible_ms"], 3000);
    assert_eq!(value["notifications"]["exit_ms"], 500);
    assert_eq!(value["selectors"]["stats_container"], ".stats-inline");
}

#[test]
fn check_rejects_unknown_keys() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "[scroll]\nheader_treshold = 10.0\n");

    let out = run(&["check", "--config", &path]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("header_treshold"));
}

#[test]
fn check_rejects_invalid_values() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "[counter]\ntick_ms = 0\n");

    let out = run(&["check", "--config", &path]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("counter.tick_ms"));
}

#[test]
fn check_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.toml");

    let out = run(&["check", "--config", missing.to_str().unwrap()]);
    assert!(!out.status.success());
}

#[test]
fn unknown_log_level_is_rejected() {
    let out = run(&["--log-level", "chatty", "check"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("chatty"));
}
