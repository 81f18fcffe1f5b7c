use std::path::PathBuf;
use std::process::Command;

fn get_cli_binary() -> PathBuf {
    // Try to find the built binary
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push("launch-cli");

    if !path.exists() {
        // Try release build
        path.pop();
        path.pop();
        path.push("release");
        path.push("launch-cli");
    }

    path
}

#[test]
fn test_cli_solve_table_output() {
    let output = Command::new(get_cli_binary())
        .args([
            "solve",
            "--gravity", "9.8",
            "--known", "initial-speed=20",
            "--known", "angle=30",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("17.3205"), "Should contain the solved vx");
    assert!(stdout.contains("Time of Flight"), "Should contain derived parameters");
}

#[test]
fn test_cli_solve_json_output() {
    let output = Command::new(get_cli_binary())
        .args([
            "solve",
            "--gravity", "9.8",
            "--known", "time-of-flight=2.0",
            "--known", "range=30.0",
            "--output", "json",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("Output should be valid JSON");
    assert!((parsed["vx"].as_f64().unwrap() - 15.0).abs() < 1e-9);
    assert!((parsed["vy"].as_f64().unwrap() - 9.8).abs() < 1e-9);
}

#[test]
fn test_cli_solve_accepts_numeric_ranks() {
    let output = Command::new(get_cli_binary())
        .args([
            "solve",
            "--known", "1=20",
            "--known", "4=30",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Rank identifiers should be accepted");
}

#[test]
fn test_cli_rejects_impossible_inputs() {
    let output = Command::new(get_cli_binary())
        .args([
            "solve",
            "--gravity", "9.8",
            "--known", "initial-speed=10",
            "--known", "max-height=10",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Physically impossible inputs should fail");
}

#[test]
fn test_cli_rejects_non_positive_values() {
    let output = Command::new(get_cli_binary())
        .args([
            "solve",
            "--known", "initial-speed=-5",
            "--known", "angle=30",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Negative magnitudes should be rejected");
}

#[test]
fn test_cli_pairs_command() {
    let output = Command::new(get_cli_binary())
        .args(["pairs"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let listed = stdout.lines().filter(|line| line.contains(" + ")).count();
    assert_eq!(listed, 10, "All ten parameter pairs should be listed");
}
