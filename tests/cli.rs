use std::process::Command;

fn vigil() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vigil"))
}

#[test]
fn missing_filename_prints_usage_and_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = vigil().current_dir(dir.path()).output().unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: vigil --filename <path> [--preset <name>]"));
}

#[test]
fn missing_file_reports_error_and_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let output = vigil()
        .arg("definitely-not-here.rs")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("🔍 Reviewing definitely-not-here.rs..."));
    assert!(stdout.contains("❌ Error reviewing definitely-not-here.rs:"));
    assert!(stdout.contains("File not found: definitely-not-here.rs"));
}

#[test]
fn malformed_config_fails_before_reviewing() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("broken.toml");
    std::fs::write(&config_path, "{{not toml}}").unwrap();

    let output = vigil()
        .args(["--config", &config_path.to_string_lossy(), "whatever.rs"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid config"));
}

#[test]
fn unreachable_endpoint_surfaces_an_ai_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("sample.ts"), "console.log('x')").unwrap();
    // Port 1 is essentially never listening; the connection fails fast.
    std::fs::write(
        dir.path().join(".vigil.toml"),
        "[llm]\napi_key = \"test-key\"\nbase_url = \"http://127.0.0.1:1\"\n",
    )
    .unwrap();

    let output = vigil()
        .arg("sample.ts")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ Error reviewing sample.ts:"));
    assert!(stdout.contains("AI analysis failed:"));
}
