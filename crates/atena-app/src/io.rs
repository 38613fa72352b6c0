use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use atena_config::output::Delimiter;
use atena_core::ContactRecord;
use atena_types::{AtenaRecord, COLUMNS};

const BOM: char = '\u{FEFF}';

/// Read a contacts export, sniffing comma vs tab from the header line
pub fn read_contacts(path: &Path) -> anyhow::Result<Vec<ContactRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read contacts from {}", path.display()))?;
    let text = text.trim_start_matches(BOM);

    let delimiter = sniff_delimiter(text);
    tracing::info!("Reading {} as {:?}-delimited", path.display(), delimiter);

    let records = parse_contacts(text, delimiter)
        .with_context(|| format!("Malformed contacts file {}", path.display()))?;
    tracing::info!("Read {} contacts", records.len());
    Ok(records)
}

/// Header row becomes the keys of every following row.
///
/// Short rows leave the missing columns absent; blank rows are skipped.
pub fn parse_contacts(text: &str, delimiter: Delimiter) -> csv::Result<Vec<ContactRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .flexible(true)
        .from_reader(text.as_bytes());

    let header: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut contacts = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let contact: ContactRecord = header
            .iter()
            .zip(row.iter())
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect();
        contacts.push(contact);
    }
    Ok(contacts)
}

/// More tabs than commas in the first line means TSV
pub fn sniff_delimiter(text: &str) -> Delimiter {
    let first_line = text.lines().next().unwrap_or("");
    let tabs = first_line.matches('\t').count();
    let commas = first_line.matches(',').count();
    if tabs > commas {
        Delimiter::Tab
    } else {
        Delimiter::Comma
    }
}

/// Header plus one CRLF-terminated line per record, fields quoted only when needed
pub fn write_records<W: Write>(
    mut out: W,
    records: &[AtenaRecord],
    delimiter: Delimiter,
    bom: bool,
) -> csv::Result<()> {
    if bom {
        write!(out, "{BOM}")?;
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write to a file, or stdout when no path is given
pub fn write_output(
    path: Option<&Path>,
    records: &[AtenaRecord],
    delimiter: Delimiter,
    bom: bool,
) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_records(io::BufWriter::new(file), records, delimiter, bom)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} records to {}", records.len(), path.display());
        }
        None => {
            write_records(io::stdout().lock(), records, delimiter, bom)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
