//! Bulk processing of SVG files
//!
//! Reads many documents at once and rewrites a directory of `.svg` files
//! through the typed model. With the `parallel` feature the files are
//! processed on the rayon thread pool; every document is still parsed and
//! rendered on a single thread.

use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{SvgError, SvgResult};
use crate::xml::RenderConfig;

/// Prefix of rewritten files; inputs carrying it are skipped
pub const OUTPUT_PREFIX: &str = "X";

/// Outcome of [`rewrite_dir`]
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files written, in input order
    pub written: Vec<PathBuf>,
    /// Inputs that could not be read or written
    pub failed: Vec<(PathBuf, SvgError)>,
}

impl BatchReport {
    /// Number of inputs processed
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Read and parse every path. Results are in input order.
pub fn read_all<P>(paths: &[P]) -> Vec<SvgResult<Document>>
where
    P: AsRef<Path> + Sync,
{
    map_paths(paths, |path| {
        let path: &Path = path.as_ref();
        let result = Document::read(path);
        if let Err(e) = &result {
            tracing::debug!(path = %path.display(), error = %e, "failed to read document");
        }
        result
    })
}

/// Re-serialize every `*.svg` file in `dir`.
///
/// Each `name.svg` is parsed and written back as `X<name>.svg` in the same
/// directory. Files whose name already starts with the prefix are skipped,
/// so running twice does not compound. Only listing the directory can fail
/// as a whole; per-file failures are collected in the report.
pub fn rewrite_dir(dir: impl AsRef<Path>, config: &RenderConfig) -> SvgResult<BatchReport> {
    let dir = dir.as_ref();
    let inputs = list_inputs(dir)?;
    tracing::debug!(dir = %dir.display(), files = inputs.len(), "rewriting directory");

    let results = map_paths(&inputs, |input| {
        let output = output_path(input);
        Document::read(input)
            .and_then(|doc| doc.write_with(&output, config))
            .map(|()| output)
    });

    let mut report = BatchReport::default();
    for (input, result) in inputs.into_iter().zip(results) {
        match result {
            Ok(output) => report.written.push(output),
            Err(e) => {
                tracing::debug!(path = %input.display(), error = %e, "failed to rewrite document");
                report.failed.push((input, e));
            }
        }
    }
    Ok(report)
}

/// `*.svg` files in `dir` without the output prefix, sorted by name
fn list_inputs(dir: &Path) -> SvgResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| SvgError::io(dir, e))?;

    let mut inputs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SvgError::io(dir, e))?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if path.is_file()
            && !name.starts_with(OUTPUT_PREFIX)
            && path.extension().is_some_and(|ext| ext == "svg")
        {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

fn output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{OUTPUT_PREFIX}{name}"))
}

#[cfg(feature = "parallel")]
fn map_paths<P, T, F>(paths: &[P], f: F) -> Vec<T>
where
    P: Sync,
    T: Send,
    F: Fn(&P) -> T + Sync + Send,
{
    use rayon::prelude::*;
    paths.par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn map_paths<P, T, F>(paths: &[P], f: F) -> Vec<T>
where
    F: Fn(&P) -> T,
{
    paths.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4">
<circle r="1" cx="2" cy="2"/></svg>"#;

    #[test]
    fn test_read_all_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.svg");
        let bad = dir.path().join("bad.svg");
        std::fs::write(&good, SAMPLE).unwrap();
        std::fs::write(&bad, "<html/>").unwrap();
        let missing = dir.path().join("missing.svg");

        let results = read_all(&[&good, &bad, &missing]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(Document::element_count).ok(), Some(1));
        assert!(matches!(results[1], Err(SvgError::UnexpectedRoot { .. })));
        assert!(matches!(results[2], Err(SvgError::Io { .. })));
    }

    #[test]
    fn test_rewrite_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.svg"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("b.svg"), "not xml").unwrap();
        std::fs::write(dir.path().join("Xold.svg"), SAMPLE).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let report = rewrite_dir(dir.path(), &RenderConfig::PRETTY).unwrap();
        assert_eq!(report.total(), 2);
        assert_eq!(report.written, [dir.path().join("Xa.svg")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, dir.path().join("b.svg"));
        assert!(!report.is_success());

        let original = Document::parse(SAMPLE).unwrap();
        assert_eq!(Document::read(dir.path().join("Xa.svg")).unwrap(), original);
        assert!(!dir.path().join("XXold.svg").exists());
        assert!(!dir.path().join("Xb.svg").exists());

        // Outputs are skipped on a second run
        let again = rewrite_dir(dir.path(), &RenderConfig::COMPACT).unwrap();
        assert_eq!(again.total(), 2);
    }

    #[test]
    fn test_rewrite_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = rewrite_dir(dir.path().join("nope"), &RenderConfig::PRETTY).unwrap_err();
        assert!(matches!(err, SvgError::Io { .. }));
    }
}
