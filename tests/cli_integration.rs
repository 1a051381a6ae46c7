//! Tests driving the compiled `fio-summary` binary

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, NamedTempFile};

fn fio_summary(args: &[&str], home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fio-summary"))
        .args(args)
        // keep any real user settings out of the run
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch fio-summary")
}

fn write_settings(home: &Path, content: &str) {
    let dir = home.join("fio-summary");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("fio-summary.toml"), content).unwrap();
}

fn single_read_job() -> NamedTempFile {
    let mut report = NamedTempFile::new().unwrap();
    writeln!(report, "  read : io=1536KB, bw=1536KB/s, iops=7, runt= 1000msec").unwrap();
    report
}

#[test]
fn test_prints_summary() {
    let home = tempdir().unwrap();
    let mut report = NamedTempFile::new().unwrap();
    writeln!(report, "  read : io=1024000KB, bw=102400KB/s, iops=500, runt= 10000msec").unwrap();
    writeln!(report, "   READ: io=1024000KB, aggrb=102400KB/s, minb=102400KB/s,").unwrap();

    let path = report.path().to_str().unwrap();
    let output = fio_summary(&["--file", path], home.path());

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Avg Read Bandwidth Per Job = 100.00 MB/s, StDev = 0.00\n\
         Avg Read IOPS = 500.00, StDev = 0.00\n\
         Aggregate Read Bandwidth for this fio run = 100.00 MB/s\n"
    );

    let short = fio_summary(&["-f", path], home.path());
    assert_eq!(short.stdout, output.stdout);
}

#[test]
fn test_empty_file_exits_cleanly() {
    let home = tempdir().unwrap();
    let report = NamedTempFile::new().unwrap();

    let output = fio_summary(&["-f", report.path().to_str().unwrap()], home.path());
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_file_fails() {
    let home = tempdir().unwrap();
    let missing = home.path().join("nope.log");

    let output = fio_summary(&["-f", missing.to_str().unwrap()], home.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot find file"));
}

#[test]
fn test_file_flag_is_required() {
    let home = tempdir().unwrap();

    let output = fio_summary(&[], home.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--file"));
}

#[test]
fn test_malformed_iops_fails() {
    let home = tempdir().unwrap();
    let mut report = NamedTempFile::new().unwrap();
    writeln!(report, "  read : io=1KB, bw=1KB/s, iops=many, runt= 1msec").unwrap();

    let output = fio_summary(&["-f", report.path().to_str().unwrap()], home.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("iops=many,"));
}

#[test]
fn test_settings_do_not_change_number_format() {
    let home = tempdir().unwrap();
    write_settings(home.path(), "precision = 0\n");
    let report = single_read_job();

    let output = fio_summary(&["-f", report.path().to_str().unwrap()], home.path());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Avg Read Bandwidth Per Job = 1.50 MB/s, StDev = 0.00\n\
         Avg Read IOPS = 7.00, StDev = 0.00\n"
    );
}

#[test]
fn test_invalid_settings_fall_back_to_defaults() {
    let home = tempdir().unwrap();
    write_settings(home.path(), "log_level = \"loud\"\n");
    let report = single_read_job();

    let output = fio_summary(&["-f", report.path().to_str().unwrap()], home.path());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout)
        .starts_with("Avg Read Bandwidth Per Job = 1.50 MB/s"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("using default settings"));
}

#[test]
fn test_missing_file_reported_despite_invalid_settings() {
    let home = tempdir().unwrap();
    write_settings(home.path(), "log_level = 9\n");
    let missing = home.path().join("nope.log");

    let output = fio_summary(&["-f", missing.to_str().unwrap()], home.path());
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Cannot find file"));
}
