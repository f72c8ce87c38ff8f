use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::WriteError;
use crate::extract::ExtractedSequenceRecord;

/// Default residues per line, as most FASTA writers use.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Formats records as FASTA and writes them to the provided writer.
///
/// # Arguments
///
/// * `writer` - Anything implementing `std::io::Write`. A `std::io::Cursor` or `Vec<u8>` works for
///   in-memory output.
/// * `records` - The records to write, in order.
/// * `line_width` - Residues per sequence line. `0` writes each sequence on a single line.
pub fn write_fasta(
    writer: &mut impl Write,
    records: &[ExtractedSequenceRecord],
    line_width: usize,
) -> std::io::Result<()> {
    for record in records {
        writeln!(writer, ">{} {}", record.identifier, record.description)?;

        if record.residues.is_empty() {
            continue;
        }

        if line_width == 0 {
            writer.write_all(&record.residues)?;
            writer.write_all(b"\n")?;
        } else {
            for line in record.residues.chunks(line_width) {
                writer.write_all(line)?;
                writer.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

/// Writes every record to `path`. Output goes to a temporary file next to `path` first and is
/// only moved into place once it has been completely written, so a failure never leaves a
/// truncated file behind.
pub fn write_output(
    path: &Path,
    records: &[ExtractedSequenceRecord],
    line_width: usize,
) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let io_err = |source| WriteError::Io { path: path.to_path_buf(), source };

    let tmp = NamedTempFile::new_in(&dir).map_err(|source| WriteError::Create { dir, source })?;

    let mut writer = BufWriter::new(tmp);
    write_fasta(&mut writer, records, line_width).map_err(io_err)?;
    let tmp = writer.into_inner().map_err(|e| io_err(e.into_error()))?;
    tmp.as_file().sync_all().map_err(io_err)?;

    tmp.persist(path).map_err(|e| WriteError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
