//! End-to-end checks of the `rscc` binary.

use std::process::Command;

fn rscc(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_rscc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run rscc")
}

fn rscc_with_log(args: &[&str], rust_log: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_rscc"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("Failed to run rscc")
}

#[test]
fn test_default_text_report() {
    let output = rscc(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Total Credits: 38.0 tonnes CO2e"));
    assert!(stdout.contains("Effective Conversion Factor = 141.48"));
    assert!(stdout.contains("Comparison over 5-year period"));
}

#[test]
fn test_json_output() {
    let output = rscc(&["--format", "json", "--time-horizon", "20"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["scenario"]["rfp"]["time_horizon"], 20.0);
    assert_eq!(value["gwp100"]["total_credits"], 38.0);

    let factor = value["rfp"]["conversion_factor"]
        .as_f64()
        .unwrap();
    approx::assert_relative_eq!(factor, 84.19, epsilon = 0.01);
}

#[test]
fn test_negative_emissions_refused() {
    let output = rscc(&["--ch4=-1"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ch4_avoided"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_explain_prints_derivation() {
    let output = rscc(&["--explain"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Why 173?"));
    assert!(stdout.contains("Radiative Forcing Protocol (RfP)"));
}

#[test]
fn test_overflowing_totals_refused() {
    let output = rscc(&["--ch4", "1e308", "--format", "json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ch4_contribution"));
}

#[test]
fn test_rust_log_enables_debug_events() {
    let output = rscc_with_log(&[], "debug");
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Computed RfP credits"));
    assert!(stderr.contains("Computed GWP100 credits"));
}

#[test]
fn test_quiet_by_default() {
    let output = rscc(&[]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_saturation_warned_once() {
    let output = rscc(&["--time-horizon", "1000"]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("fully decayed").count(), 1);
    assert_eq!(stderr.matches("Computed RfP credits").count(), 0);

    let debug = rscc_with_log(&["--time-horizon", "1000"], "debug");
    let stderr = String::from_utf8(debug.stderr).unwrap();
    assert_eq!(stderr.matches("Computed RfP credits").count(), 1);
}
