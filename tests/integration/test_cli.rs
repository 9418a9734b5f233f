// バイナリのコマンドライン動作テスト
use crate::fixtures::get_binary_path;
use std::io::Write;
use std::process::Command;

#[test]
fn test_cli_help() {
    let output = Command::new(get_binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("linalg_bench"));
    assert!(stdout.contains("--preset"));
    assert!(stdout.contains("--backend"));
    assert!(stdout.contains("--verify"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(get_binary_path())
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("linalg_bench"));
}

#[test]
fn test_cli_list() {
    let output = Command::new(get_binary_path())
        .args(["--list", "--filter", "transpose"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("transpose_in_place"));
    assert!(stdout.contains("2048x2048"));
    assert!(stdout.contains("nalgebra, ndarray, dense"));
    assert!(!stdout.contains("vector_add"));
}

#[test]
fn test_cli_unknown_backend_fails() {
    let output = Command::new(get_binary_path())
        .args(["--list", "--backend", "eigen"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("eigen"));
}

#[test]
fn test_cli_invalid_repeat_fails() {
    let output = Command::new(get_binary_path())
        .args(["--repeat", "0", "--list"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
}

#[test]
fn test_cli_quick_run_with_json() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.json");

    let output = Command::new(get_binary_path())
        .args([
            "--preset",
            "quick",
            "--filter",
            "r = a + b + c + d",
            "--warmup",
            "1",
            "--repeat",
            "2",
            "--seed",
            "7",
            "--no-color",
            "--json",
        ])
        .arg(&report)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("| Case"));
    assert!(stdout.contains("500000"));
    assert!(!stdout.contains('\x1b'));

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["seed"], 7);
    assert_eq!(value["rows"].as_array().unwrap().len(), 2);
    assert_eq!(value["rows"][0]["verification"]["status"], "agreed");
}

#[test]
fn test_cli_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "filter": "vector_scale", "backends": ["dense"], "max_shapes_per_case": 1, "measured_iterations": 1, "warmup_iterations": 0 }}"#
    )
    .unwrap();

    let output = Command::new(get_binary_path())
        .arg("--config")
        .arg(file.path())
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("r *= 3.3"));
    assert!(stdout.contains("dense"));
    assert!(!stdout.contains("nalgebra"));
}

#[test]
fn test_cli_duplicate_backend_fails() {
    let output = Command::new(get_binary_path())
        .args(["--list", "--backend", "dense", "--backend", "Dense"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("dense"));
}

#[test]
fn test_cli_redirected_output_has_no_color() {
    let output = Command::new(get_binary_path())
        .args([
            "--preset",
            "quick",
            "--filter",
            "vector_scale",
            "--warmup",
            "0",
            "--repeat",
            "1",
        ])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("r *= 3.3"));
    assert!(!stdout.contains('\x1b'));
}
