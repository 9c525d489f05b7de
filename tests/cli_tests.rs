use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use tempfile::NamedTempFile;

/// Helper function to get the path to the built binary.
/// Always builds the binary to ensure we're using the latest version;
/// cargo handles incremental builds, so this is fast if nothing changed.
fn get_binary_path() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let status = Command::new("cargo")
        .args(["build", "--bin", "legisbot"])
        .current_dir(&manifest_dir)
        .status()
        .expect("Failed to run cargo build");

    if !status.success() {
        panic!("Failed to build binary");
    }

    let debug_path = manifest_dir.join("target").join("debug").join("legisbot");

    if !debug_path.exists() {
        panic!(
            "Binary was not created at expected path: {}",
            debug_path.display()
        );
    }

    debug_path
}

/// Run the binary with the given arguments and capture its output
fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn write_dataset() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(
        file,
        "Tipo de documento,Aspectos,Elementos,Esfera de Governo,Local,Ano,Tipo de Legislação,Descrição,Trecho da Lei,Link"
    )
    .unwrap();
    writeln!(
        file,
        "Lei,Qualidade,A;B,Federal,Brasil,2001,Lei Federal,Descrição A,Trecho A,https://example.com/a"
    )
    .unwrap();
    writeln!(
        file,
        "Decreto,,B,Estadual,São Paulo,1999,Decreto Estadual,Descrição B,Trecho B,https://example.com/b"
    )
    .unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn no_subcommand_prints_available_commands() {
    let (stdout, _stderr, exit_code) = run_command(&[]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Available commands:"));
    assert!(stdout.contains("options"));
    assert!(stdout.contains("filter"));
    assert!(stdout.contains("validate"));
}

#[test]
fn filter_command_applies_selections_as_json() {
    let file = write_dataset();
    let data = file.path().to_str().unwrap();

    let (stdout, stderr, exit_code) = run_command(&[
        "filter", "--data", data, "--select", "elemento=B", "--select", "ano=1999",
        "--format", "json",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stderr.contains("1 of 2 records match"), "stderr: {}", stderr);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(parsed["id"], 1);
    assert_eq!(parsed["fields"]["Tipo de documento"], "Decreto");
}

#[test]
fn filter_command_renders_text_cards_by_default() {
    let file = write_dataset();
    let data = file.path().to_str().unwrap();

    let (stdout, stderr, exit_code) =
        run_command(&["filter", "--data", data, "--select", "ano=2001"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("#0 Lei"));
    assert!(stdout.contains("elementos: A, B"));
    assert!(stdout.contains("saiba mais: https://example.com/a"));
    assert!(!stdout.contains("Decreto"));
}

#[test]
fn options_command_lists_sentinel_and_derived_values() {
    let file = write_dataset();
    let data = file.path().to_str().unwrap();

    let (stdout, stderr, exit_code) = run_command(&["options", "--data", data]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("elemento (elemento)"));
    assert!(stdout.contains("esfera de governo (esfera-de-governo)"));
    assert!(stdout.contains("  _all"));

    // Year options come out descending
    let pos_2001 = stdout.find("2001").expect("2001 missing from options");
    let pos_1999 = stdout.find("1999").expect("1999 missing from options");
    assert!(pos_2001 < pos_1999);
}

#[test]
fn validate_command_prints_a_summary() {
    let file = write_dataset();
    let data = file.path().to_str().unwrap();

    let (stdout, stderr, exit_code) = run_command(&["validate", "--data", data]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Valid legislation dataset"));
    assert!(stdout.contains("Records: 2"));
    assert!(stdout.contains("ano: 2 options"));
}

#[test]
fn malformed_selection_aborts_with_an_error() {
    let file = write_dataset();
    let data = file.path().to_str().unwrap();

    let (_stdout, stderr, exit_code) =
        run_command(&["filter", "--data", data, "--select", "elemento"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("expected NAME=VALUE"), "stderr: {}", stderr);
}

#[test]
fn unknown_filter_name_aborts_with_an_error() {
    let file = write_dataset();
    let data = file.path().to_str().unwrap();

    let (_stdout, stderr, exit_code) =
        run_command(&["filter", "--data", data, "--select", "estado=SP"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Unknown filter"), "stderr: {}", stderr);
}

#[test]
fn missing_data_file_aborts_before_filtering() {
    let (_stdout, stderr, exit_code) =
        run_command(&["filter", "--data", "no/such/data.csv"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("does not exist"), "stderr: {}", stderr);
}
