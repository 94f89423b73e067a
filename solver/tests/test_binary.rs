//! End-to-end tests for the `estimate-pi` binary.

use std::process::Command;

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_estimate-pi"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn estimate-pi")
}

#[test]
fn test_prints_exactly_one_line() {
    let out = run_binary(&[]);
    assert!(out.status.success(), "status={:?}", out.status);

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("estimate of pi is 3.14"), "stdout={stdout:?}");
    assert!(stdout.ends_with(" \n"), "stdout={stdout:?}");
    assert_eq!(stdout.matches('\n').count(), 1, "stdout={stdout:?}");
    assert!(out.stderr.is_empty(), "stderr={:?}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn test_arguments_ignored() {
    let plain = run_binary(&[]);
    let with_args = run_binary(&["--games", "5", "extra"]);
    assert!(with_args.status.success());
    assert_eq!(plain.stdout, with_args.stdout);
}

#[test]
fn test_diagnostics_stay_off_stdout() {
    let out = Command::new(env!("CARGO_BIN_EXE_estimate-pi"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to spawn estimate-pi");
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "stdout={stdout:?}");
    assert!(stdout.starts_with("estimate of pi is "));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("estimate complete"), "stderr={stderr:?}");
}
