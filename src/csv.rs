// src/csv.rs
use std::io::{self, Write};

use crate::config::options::ExportFormat;
use crate::error::Result;
use crate::sic::{Record, RECORD_HEADERS};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write records as delimited rows, optionally preceded by the header row.
pub fn write_records<W: Write>(
    mut w: W,
    records: &[Record],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &RECORD_HEADERS, sep)?;
    }
    for r in records {
        write_row(&mut w, &[r.full_desc.as_str(), r.parent_desc.as_str()], sep)?;
    }
    Ok(())
}

/// Render records in `format` (Copy / stdout / Export).
/// JSON ignores `include_headers`: keys name the fields already.
pub fn records_to_string(
    records: &[Record],
    format: ExportFormat,
    include_headers: bool,
) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();

    match format.delim() {
        Some(sep) => write_records(&mut buf, records, include_headers, sep)?,
        None => {
            serde_json::to_writer_pretty(&mut buf, records)?;
            buf.push(b'\n');
        }
    }

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_fields_with_separator() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a,b", "say \"hi\"", "plain"], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"a,b\",\"say \"\"hi\"\"\",plain\n");
    }

    #[test]
    fn tsv_leaves_commas_alone() {
        let mut buf = Vec::new();
        write_row(&mut buf, &["a,b", "c"], '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\tc\n");
    }
}
