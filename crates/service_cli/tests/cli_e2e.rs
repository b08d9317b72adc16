//! End-to-end tests for the `mcvol` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const EXACT: f64 = 2.0 * std::f64::consts::PI / 5.0;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(input: impl AsRef<[u8]>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("in.txt"), input).unwrap();
        Self { dir }
    }

    fn input(&self) -> PathBuf {
        self.dir.path().join("in.txt")
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("out.txt")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

fn mcvol(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mcvol"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MCVOL_CHUNK_SIZE")
        .env_remove("MCVOL_SEED")
        .env_remove("MCVOL_LOG_LEVEL")
        .output()
        .unwrap()
}

fn s(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

#[test]
fn test_estimates_reference_volume() {
    let ws = Workspace::new("2000000\n");
    let output = mcvol(&[
        "--omp-threads", "4", "--input", s(&ws.input()), "--output", s(&ws.output()),
        "--seed", "11",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let written = fs::read_to_string(ws.output()).unwrap();
    assert!(written.ends_with('\n'));
    let volume: f64 = written.trim().parse().unwrap();
    assert!((volume - EXACT).abs() / EXACT < 0.01, "volume {volume}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Time (4 thread(s)): "), "{stdout}");
    assert!(stdout.trim_end().ends_with(" ms"));
}

#[test]
fn test_timing_has_three_decimals() {
    let ws = Workspace::new("10000\n");
    let output = mcvol(&["--omp-threads", "2", "--input", s(&ws.input()), "--output", s(&ws.output())]);
    assert!(output.status.success(), "{}", stderr(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let millis = stdout
        .trim_end()
        .strip_prefix("Time (2 thread(s)): ")
        .and_then(|rest| rest.strip_suffix(" ms"))
        .unwrap_or_else(|| panic!("unexpected timing line {stdout:?}"));
    let (whole, fraction) = millis.split_once('.').unwrap();
    assert!(whole.parse::<u64>().is_ok(), "{millis}");
    assert_eq!(fraction.len(), 3, "{millis}");
    assert!(fraction.bytes().all(|b| b.is_ascii_digit()), "{millis}");
}

#[test]
fn test_no_omp_reports_zero_threads() {
    let ws = Workspace::new("100000");
    let output = mcvol(&["--no-omp", "--input", s(&ws.input()), "--output", s(&ws.output())]);
    assert!(output.status.success(), "{}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Time (0 thread(s)): "), "{stdout}");
}

#[test]
fn test_seeded_runs_write_identical_output() {
    let ws = Workspace::new("200000\n");
    let first = ws.path("a.txt");
    let second = ws.path("b.txt");
    for out in [&first, &second] {
        let output = mcvol(&[
            "--omp-threads", "3", "--seed", "5", "--input", s(&ws.input()), "--output", s(out),
        ]);
        assert!(output.status.success());
    }
    assert_eq!(fs::read_to_string(first).unwrap(), fs::read_to_string(second).unwrap());
}

#[test]
fn test_zero_samples_rejected() {
    let ws = Workspace::new("0\n");
    let output = mcvol(&["--input", s(&ws.input()), "--output", s(&ws.output())]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr(&output), "Invalid Iterations Number");
    assert!(!ws.output().exists());
}

#[test]
fn test_garbage_sample_count_rejected() {
    let ws = Workspace::new("lots\n");
    let output = mcvol(&["--input", s(&ws.input()), "--output", s(&ws.output())]);
    assert_eq!(output.status.code(), Some(3));
    assert!(!ws.output().exists());
}

#[test]
fn test_non_utf8_after_first_line_is_ignored() {
    let ws = Workspace::new(b"1000\n\xff\xff\n");
    let output = mcvol(&["--input", s(&ws.input()), "--output", s(&ws.output())]);
    assert!(output.status.success(), "{}", stderr(&output));
    let volume: f64 = fs::read_to_string(ws.output()).unwrap().trim().parse().unwrap();
    assert!(volume > 0.0);
}

#[test]
fn test_non_utf8_sample_count_rejected() {
    let ws = Workspace::new(b"\xff\xfe\n");
    let output = mcvol(&["--input", s(&ws.input()), "--output", s(&ws.output())]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stderr(&output), "Invalid Iterations Number");
    assert!(!ws.output().exists());
}

#[test]
fn test_missing_input_file() {
    let ws = Workspace::new("10");
    let missing = ws.path("missing.txt");
    let output = mcvol(&["--input", s(&missing), "--output", s(&ws.output())]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stderr(&output), "Invalid Input Filename");
}

#[test]
fn test_missing_output_flag() {
    let ws = Workspace::new("10");
    let output = mcvol(&["--input", s(&ws.input())]);
    assert_eq!(output.status.code(), Some(254));
    assert_eq!(stderr(&output), "Too Few Arguments");
}

#[test]
fn test_repeated_flag() {
    let ws = Workspace::new("10");
    let output = mcvol(&[
        "--input", s(&ws.input()), "--input", s(&ws.input()), "--output", s(&ws.output()),
    ]);
    assert_eq!(output.status.code(), Some(255));
    assert_eq!(stderr(&output), "Too Many Arguments");
}

#[test]
fn test_unknown_flag() {
    let ws = Workspace::new("10");
    let output = mcvol(&[
        "--turbo", "--input", s(&ws.input()), "--output", s(&ws.output()),
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(stderr(&output), "Unknown Argument");
}

#[test]
fn test_invalid_thread_counts() {
    let ws = Workspace::new("10");
    for bad in ["0", "-2", "many"] {
        let output = mcvol(&[
            "--omp-threads", bad, "--input", s(&ws.input()), "--output", s(&ws.output()),
        ]);
        assert_eq!(output.status.code(), Some(1), "--omp-threads {bad}");
        assert_eq!(stderr(&output), "Invalid Threads Number");
    }
    assert!(!ws.output().exists());
}

#[test]
fn test_no_omp_ignores_bad_thread_count() {
    let ws = Workspace::new("1000");
    let output = mcvol(&[
        "--no-omp", "--omp-threads", "0", "--input", s(&ws.input()), "--output", s(&ws.output()),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
}

#[test]
fn test_config_file_applied() {
    let ws = Workspace::new("50000");
    let config = ws.path("mcvol.toml");
    fs::write(&config, "chunk_size = 128\nseed = 3\n").unwrap();

    let input = ws.input();
    let run = |out: &Path, extra: &[&str]| {
        let mut args = vec!["--omp-threads", "2", "--input", s(&input), "--output", s(out)];
        args.extend_from_slice(extra);
        assert!(mcvol(&args).status.success());
        fs::read_to_string(out).unwrap()
    };

    let from_file = run(&ws.path("a.txt"), &["--config", s(&config)]);
    let from_cli = run(&ws.path("b.txt"), &["--chunk-size", "128", "--seed", "3"]);
    assert_eq!(from_file, from_cli);
}

#[test]
fn test_bad_config_file() {
    let ws = Workspace::new("10");
    let config = ws.path("mcvol.toml");
    fs::write(&config, "chunk_size = 0\n").unwrap();
    let output = mcvol(&[
        "--config", s(&config), "--input", s(&ws.input()), "--output", s(&ws.output()),
    ]);
    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).starts_with("Configuration error:"));
    assert!(!ws.output().exists());
}

#[test]
fn test_help_exits_cleanly() {
    let output = mcvol(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--omp-threads"));
}
