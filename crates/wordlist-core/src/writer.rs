use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use wordlist_types::Entry;

use crate::error::{ConvertError, Result};

/// Header row, always written even when there are no entries
pub const HEADER: [&str; 3] = ["word", "pronunciation", "translation"];

fn new_csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer)
}

fn write_rows<W: Write>(csv_writer: &mut csv::Writer<W>, entries: &[Entry]) -> Result<()> {
    csv_writer.write_record(HEADER)?;
    for entry in entries {
        csv_writer.serialize(entry)?;
    }
    Ok(())
}

/// Write the header and one row per entry to any writer.
///
/// Fields holding a comma, a quote or a line break are quoted. Rows end in CRLF.
pub fn write_csv<W: Write>(writer: W, entries: &[Entry]) -> Result<()> {
    let mut csv_writer = new_csv_writer(writer);
    write_rows(&mut csv_writer, entries)?;
    csv_writer.flush().map_err(csv::Error::from)?;

    Ok(())
}

/// Create or truncate `path` and write the entries to it as CSV
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    let write_err = |source: io::Error| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut csv_writer = new_csv_writer(file);
    write_rows(&mut csv_writer, entries)?;
    csv_writer.flush().map_err(write_err)?;

    tracing::info!("Wrote {} rows to {}", entries.len(), path.display());
    Ok(())
}
