//! Integration tests for the staff binary

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use staff_records::Staff;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn staff_bin(temp: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_staff"));
    cmd.arg("--log-file")
        .arg(temp.path().join("workers.log"))
        .arg("--as-of")
        .arg("2024")
        .env_remove("RUST_LOG");
    cmd
}

fn add(temp: &TempDir, file: &Path, name: &str, post: &str, year: &str) -> Output {
    staff_bin(temp)
        .args(["add", "--file"])
        .arg(file)
        .args(["--name", name, "--post", post, "--year", year])
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

// =============================================================================
// One-shot Tests
// =============================================================================

#[test]
fn test_add_creates_file_and_list_shows_it() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("workers.xml");

    assert!(add(&temp, &file, "Petrov P.P.", "Manager", "2010").status.success());
    assert!(add(&temp, &file, "Ivanov I.I.", "Engineer", "2015").status.success());

    let mut staff = Staff::new();
    staff.load(&file).unwrap();
    assert_eq!(staff.len(), 2);

    let output = staff_bin(&temp)
        .args(["list", "--file"])
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), format!("{}\n", staff.render()));
}

#[test]
fn test_add_invalid_year_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("workers.xml");

    let output = add(&temp, &file, "Future F.F.", "Oracle", "2030");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("2030 -> Illegal year number"));
    assert!(!file.exists());
}

#[test]
fn test_select_by_tenure() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("workers.xml");
    add(&temp, &file, "Old O.O.", "Veteran", "2000");
    add(&temp, &file, "New N.N.", "Intern", "2023");

    let output = staff_bin(&temp)
        .args(["select", "--file"])
        .arg(&file)
        .args(["--period", "10"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "   1: Old O.O.\n");
}

#[test]
fn test_list_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    let output = staff_bin(&temp)
        .args(["list", "--file"])
        .arg(temp.path().join("absent.xml"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot access file"));
}

// =============================================================================
// Interactive Tests
// =============================================================================

#[test]
fn test_interactive_session_saves_and_logs() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("workers.xml");

    let mut child = staff_bin(&temp)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let script = format!(
        "add\nIvanov I.I.\nEngineer\n2015\nbogus\nsave {}\nexit\n",
        file.display()
    );
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr).trim(),
        "bogus -> Unknown command"
    );

    let mut staff = Staff::new();
    staff.load(&file).unwrap();
    assert_eq!(staff.workers()[0].name(), "Ivanov I.I.");

    let log = std::fs::read_to_string(temp.path().join("workers.log")).unwrap();
    assert!(log.contains("added worker"));
    assert!(log.contains("request rejected"));
}
