use serde::Serialize;
use stanza_model::{poet_slug, PoemRecord};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Column order of the exported file. The body comes before the poet.
pub const HEADERS: [&str; 3] = ["title", "poem", "poet"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no records to export")]
    NoRecords,

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Summary of a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: usize,
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Finished writing {} poems to: {}", self.rows, self.path.display())
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    title: &'a str,
    poem: &'a str,
    poet: &'a str,
}

impl<'a> From<&'a PoemRecord> for CsvRow<'a> {
    fn from(record: &'a PoemRecord) -> Self {
        Self {
            title: &record.title,
            poem: &record.body,
            poet: &record.poet,
        }
    }
}

/// Path of the CSV file for a set of records: `{slug of first poet}.csv`
/// inside `output_dir`. The byline is trimmed first; scraped ones usually
/// carry surrounding newlines.
pub fn csv_path(records: &[PoemRecord], output_dir: &Path) -> Result<PathBuf, ExportError> {
    let first = records.first().ok_or(ExportError::NoRecords)?;
    Ok(output_dir.join(format!("{}.csv", poet_slug(first.poet.trim()))))
}

/// Write the header row and one row per record to `writer`.
pub fn write_csv<W: io::Write>(records: &[PoemRecord], writer: W) -> io::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(HEADERS)?;
    for record in records {
        csv_writer.serialize(CsvRow::from(record))?;
    }
    csv_writer.flush()
}

/// Export all records to a CSV file in `output_dir`, replacing any file of
/// the same name.
///
/// The directory is created if it doesn't exist. The file name is derived
/// from the first record's poet.
pub fn export(records: &[PoemRecord], output_dir: impl AsRef<Path>) -> Result<ExportReport, ExportError> {
    let dir = output_dir.as_ref();
    let path = csv_path(records, dir)?;

    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };
    fs::create_dir_all(dir).map_err(io_err)?;
    let file = fs::File::create(&path).map_err(io_err)?;
    write_csv(records, io::BufWriter::new(file)).map_err(io_err)?;

    tracing::info!(path = %path.display(), rows = records.len(), "Wrote CSV");

    Ok(ExportReport {
        path,
        rows: records.len(),
    })
}
