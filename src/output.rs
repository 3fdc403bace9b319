/// Fixture document serialization.
///
/// Each fixture table is written as one self-contained document — a YAML
/// sequence by default, or a pretty-printed JSON array. Writers take any
/// `Write` sink so the same path serves stdout and the fixture files.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialization format for fixture documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureFormat {
    /// YAML sequence (default, what the test suite's loader reads).
    Yaml,
    /// Pretty-printed JSON array.
    Json,
}

impl FixtureFormat {
    /// File extension used for fixture files in this format.
    pub fn extension(self) -> &'static str {
        match self {
            FixtureFormat::Yaml => "yml",
            FixtureFormat::Json => "json",
        }
    }
}

/// Serialize `rows` as a single document into `out`.
pub fn write_document<W: Write, T: Serialize>(
    out: &mut W,
    rows: &[T],
    format: FixtureFormat,
) -> Result<()> {
    match format {
        FixtureFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, rows).context("failed to serialize YAML document")?;
        }
        FixtureFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)
                .context("failed to serialize JSON document")?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Path of the fixture file for `table` under `dir`.
pub fn fixture_path(dir: &Path, table: &str, format: FixtureFormat) -> PathBuf {
    dir.join(format!("{table}.{}", format.extension()))
}

/// Create `<dir>/<table>.<ext>` and write `rows` into it.
pub fn write_fixture_file<T: Serialize>(
    dir: &Path,
    table: &str,
    rows: &[T],
    format: FixtureFormat,
) -> Result<PathBuf> {
    let path = fixture_path(dir, table, format);
    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_document(&mut out, rows, format)?;
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
