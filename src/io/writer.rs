//! Result writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::models::AssignmentResult;

/// Writes results in submission format.
pub fn write_results<W: Write>(results: &[AssignmentResult], mut out: W) -> io::Result<()> {
    writeln!(out, "{}", results.len())?;
    for result in results {
        writeln!(out, "{}", result.project)?;
        writeln!(out, "{}", result.contributors.join(" "))?;
    }
    out.flush()
}

/// Renders results in submission format.
pub fn format_results(results: &[AssignmentResult]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_results(results, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Writes results to a file, replacing it if present.
pub fn write_results_file(path: impl AsRef<Path>, results: &[AssignmentResult]) -> io::Result<()> {
    let file = File::create(path)?;
    write_results(results, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<AssignmentResult> {
        vec![
            AssignmentResult::new("WebServer", vec!["Bob".into(), "Anna".into()]),
            AssignmentResult::new("Logging", vec!["Anna".into()]),
        ]
    }

    #[test]
    fn test_format_results() {
        assert_eq!(
            format_results(&sample()),
            "2\nWebServer\nBob Anna\nLogging\nAnna\n"
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_results(&[]), "0\n");
    }

    #[test]
    fn test_write_results_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_results_file(&path, &sample()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("2\nWebServer\n"));
    }
}
