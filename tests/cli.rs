use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_cli_general_report() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Setup: a tiny tree with one empty text file and one binary file
    let source_dir = tempdir()?;
    fs::write(source_dir.path().join("a.txt"), b"")?;
    fs::write(source_dir.path().join("b.bin"), vec![0u8; 200])?;

    // 2. Default run prints only the General section
    let mut cmd = Command::cargo_bin("treestat")?;
    cmd.arg(source_dir.path());
    cmd.assert()
        .success()
        .stdout(
            predicate::str::contains("General:")
                .and(predicate::str::contains("  Total size: 200\n"))
                .and(predicate::str::contains("  Total files: 2\n"))
                .and(predicate::str::contains("  Empty files: 1\n"))
                .and(predicate::str::contains("  Non-empty files: 1\n"))
                .and(predicate::str::contains("Types:").not())
                .and(predicate::str::contains("Links:").not()),
        )
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn test_cli_all_sections_with_human_sizes() -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = tempdir()?;
    fs::write(source_dir.path().join("data.bin"), vec![1u8; 1536])?;
    fs::write(source_dir.path().join("run.py"), b"print(1)\n")?;

    let mut cmd = Command::cargo_bin("treestat")?;
    cmd.arg("-a").arg("-h").arg(source_dir.path());
    cmd.assert().success().stdout(
        predicate::str::contains("\nTypes:\n")
            .and(predicate::str::contains("  Text files: 1\n"))
            .and(predicate::str::contains("  Script files: 1\n"))
            .and(predicate::str::contains("  Max file size: 1.5K\n"))
            .and(predicate::str::contains("\nDates:\n"))
            .and(predicate::str::contains("data.bin"))
            .and(predicate::str::contains("\nLinks:\n  Symbolic links: 0\n  Hard links: 0\n")),
    );

    let mut cmd = Command::cargo_bin("treestat")?;
    cmd.arg("--size").arg(source_dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  Max file size: 1536\n"));

    Ok(())
}

#[test]
fn test_cli_unknown_flag_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("treestat")?;
    cmd.arg("--frobnicate");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage: ").and(predicate::str::contains("[directory] [options]")));
    Ok(())
}

#[test]
fn test_cli_missing_root_is_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let parent = tempdir()?;
    let missing = parent.path().join("does-not-exist");

    // Quiet by default.
    let mut cmd = Command::cargo_bin("treestat")?;
    cmd.arg(&missing);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  Total files: 0\n"))
        .stderr(predicate::str::is_empty());

    // Verbose names the failing path.
    let mut cmd = Command::cargo_bin("treestat")?;
    cmd.arg("--verbose").arg(&missing);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error opening").and(predicate::str::contains("does-not-exist")));
    Ok(())
}

#[test]
fn test_cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let source_dir = tempdir()?;
    fs::create_dir(source_dir.path().join("sub"))?;
    fs::write(source_dir.path().join("sub/x.md"), b"# x")?;

    let output = Command::cargo_bin("treestat")?
        .arg("--json")
        .arg(source_dir.path())
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["file_count"], 1);
    assert_eq!(json["dir_count"], 1);
    assert_eq!(json["text_files"], 1);
    assert_eq!(json["total_size"], 3);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_cli_unreadable_subdirectory() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let source_dir = tempdir()?;
    let locked = source_dir.path().join("locked");
    fs::create_dir(&locked)?;
    fs::write(locked.join("inside.txt"), b"hidden")?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    if fs::read_dir(&locked).is_ok() {
        // Running with privileges that ignore permission bits.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
        eprintln!("skipped: permission bits are not enforced for this user");
        return Ok(());
    }

    let quiet = Command::cargo_bin("treestat")?.arg(source_dir.path()).output();
    let verbose = Command::cargo_bin("treestat")?
        .arg("-v")
        .arg(source_dir.path())
        .output();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;
    let (quiet, verbose) = (quiet?, verbose?);

    assert!(quiet.status.success());
    assert!(quiet.stderr.is_empty());
    let stdout = String::from_utf8(quiet.stdout)?;
    assert!(stdout.contains("  Total files: 0\n"));
    assert!(stdout.contains("  Total directories: 1\n"));

    assert!(verbose.status.success());
    let stderr = String::from_utf8(verbose.stderr)?;
    assert!(stderr.contains("Error opening"));
    assert!(stderr.contains("locked"));
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn test_cli_json_with_non_utf8_file_name() -> Result<(), Box<dyn std::error::Error>> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let source_dir = tempdir()?;
    fs::write(source_dir.path().join(OsStr::from_bytes(b"bad\xff.bin")), b"abc")?;

    let output = Command::cargo_bin("treestat")?
        .arg("--json")
        .arg(source_dir.path())
        .output()?;
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["file_count"], 1);
    let oldest = json["oldest_file"].as_str().ok_or("oldest_file is not a string")?;
    assert!(oldest.ends_with("bad\u{fffd}.bin"));
    Ok(())
}

#[test]
fn test_cli_version_flag_is_unknown() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("treestat")?;
    cmd.arg("-V");
    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[directory] [options]"));
    Ok(())
}
