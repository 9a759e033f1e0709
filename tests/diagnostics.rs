#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

fn run_demo_with_config(name: &str, conf: &str) -> Output {
    let dir = std::env::temp_dir().join(format!("rustylog_diag_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    let conf_path: PathBuf = dir.join("rustylog.conf");
    fs::write(&conf_path, conf).expect("failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_rustylog-demo"))
        .arg(&conf_path)
        .output()
        .expect("demo binary runs");

    let _ = fs::remove_dir_all(&dir);
    output
}

#[cfg(feature = "log-error")]
#[test]
fn unresolved_levels_are_reported_on_stderr_only() {
    let output = run_demo_with_config(
        "nolevels",
        "[Logging]\ndefaults = false\n\n[sink.console]\ntarget = stdout\n",
    );
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stdout.is_empty(), "stdout: {stdout}");
    assert!(
        stderr
            .lines()
            .any(|l| l == "[rustylog] no level registered for flag 0x2"),
        "stderr: {stderr}"
    );
    assert!(
        stderr
            .lines()
            .filter(|l| l.starts_with("[rustylog]"))
            .all(|l| l.starts_with("[rustylog] no level registered for flag ")),
        "stderr: {stderr}"
    );
}

#[test]
fn diagnostics_can_be_silenced_from_config() {
    let output = run_demo_with_config(
        "silent",
        "[Logging]\ndefaults = false\ndiagnostics = false\n\n[sink.console]\ntarget = stdout\n",
    );
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(output.status.success(), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
    assert!(!stderr.contains("[rustylog]"), "stderr: {stderr}");
}

#[test]
fn bad_config_fails_with_readable_error() {
    let output = run_demo_with_config("plaid", "[levels]\nX = plaid\n");
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("Unknown color name: plaid"), "stderr: {stderr}");
}
