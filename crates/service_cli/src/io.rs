//! Input and output files

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CliError, Result};

/// Reads the raw bytes of the first line of the input file.
///
/// Only the first line is read; the rest of the file is never loaded or
/// decoded. Failing to open or read the file is an invalid input filename.
pub fn read_first_line(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path).map_err(|_| CliError::InvalidInput)?;
    let mut line = Vec::new();
    BufReader::new(file)
        .read_until(b'\n', &mut line)
        .map_err(|_| CliError::InvalidInput)?;
    Ok(line)
}

/// Parses the sample count from the first line of the input.
///
/// Surrounding whitespace is ignored. Non-UTF-8, empty, non-numeric and zero
/// counts are rejected.
pub fn parse_sample_count(line: &[u8]) -> Result<u64> {
    let text = std::str::from_utf8(line).map_err(|_| CliError::InvalidIterations)?;
    let first = text.lines().next().unwrap_or_default().trim();
    match first.parse::<u64>() {
        Ok(0) | Err(_) => Err(CliError::InvalidIterations),
        Ok(count) => Ok(count),
    }
}

/// Writes the estimate as a decimal number followed by a newline.
pub fn write_estimate(path: &Path, volume: f64) -> Result<()> {
    fs::write(path, format!("{volume}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_line() {
        assert_eq!(parse_sample_count(b"10000000\n").unwrap(), 10_000_000);
        assert_eq!(parse_sample_count(b"  42  \nignored\n").unwrap(), 42);
        assert_eq!(parse_sample_count(b"7").unwrap(), 7);
        assert_eq!(parse_sample_count(b"5\r\n").unwrap(), 5);
    }

    #[test]
    fn test_parse_rejects_bad_counts() {
        for bad in ["", "\n", "0", "-5", "abc", "1e6", "12 34"] {
            assert!(
                matches!(parse_sample_count(bad.as_bytes()), Err(CliError::InvalidIterations)),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn test_non_utf8_count_is_invalid_iterations() {
        for bad in [&b"\xff\xfe\n"[..], b"\xff\xfe\x00garbage\n", b"12\xff\n"] {
            assert!(
                matches!(parse_sample_count(bad), Err(CliError::InvalidIterations)),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_first_line(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(CliError::InvalidInput)));
    }

    #[test]
    fn test_first_line_ignores_trailing_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, b"1000\n\xff\xff\n").unwrap();
        let line = read_first_line(&path).unwrap();
        assert_eq!(line, b"1000\n");
        assert_eq!(parse_sample_count(&line).unwrap(), 1000);
    }

    #[test]
    fn test_first_line_without_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, b"250").unwrap();
        assert_eq!(parse_sample_count(&read_first_line(&path).unwrap()).unwrap(), 250);
    }

    #[test]
    fn test_write_estimate_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_estimate(&path, 1.25).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1.25\n");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_estimate(&dir.path().join("no/such/dir/out.txt"), 1.0);
        assert!(matches!(result, Err(CliError::Output(_))));
    }
}
