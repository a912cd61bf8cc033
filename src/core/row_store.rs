//! CSV-backed storage for word lists.
//!
//! Every list is a UTF-8 file with a header row. The to-learn and favorites
//! lists are rewritten through a temp file and a rename so a crash can never
//! leave a truncated list behind; the learned list only ever grows, so it is
//! written in append mode with the header emitted once.

use std::{
    fs,
    io,
    path::Path,
};

use tracing::debug;

use super::{
    errors::TarjetaError,
    models::WordRecord,
};

pub const WORD_COLUMN: &str = "word";
pub const TRANSLATION_COLUMN: &str = "English Word Translation";

/// Reads all records from `path`. Fails when the header lacks the word or
/// translation column; extra columns are preserved on each record.
pub fn load(path: &Path) -> Result<Vec<WordRecord>, TarjetaError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let word_idx = headers
        .iter()
        .position(|name| name == WORD_COLUMN)
        .ok_or_else(|| TarjetaError::MissingColumn(WORD_COLUMN.to_string()))?;
    let translation_idx = headers
        .iter()
        .position(|name| name == TRANSLATION_COLUMN)
        .ok_or_else(|| TarjetaError::MissingColumn(TRANSLATION_COLUMN.to_string()))?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = WordRecord::new(
            row.get(word_idx).unwrap_or_default(),
            row.get(translation_idx).unwrap_or_default(),
        );
        for (idx, field) in row.iter().enumerate() {
            if idx != word_idx && idx != translation_idx {
                let name = headers.get(idx).unwrap_or_default();
                record.extra.push((name.to_string(), field.to_string()));
            }
        }
        records.push(record);
    }

    debug!(count = records.len(), path = %path.display(), "loaded word list");
    Ok(records)
}

/// Atomically replaces the list at `path` with `records`: the new content is
/// written next to the final file and renamed over it.
pub fn replace(path: &Path, records: &[WordRecord]) -> Result<(), TarjetaError> {
    let tmp = path.with_extension("tmp.csv");
    {
        let mut writer = csv::Writer::from_path(&tmp)?;
        write_rows(&mut writer, &header_for(records), records, true)?;
    }
    fs::rename(&tmp, path)?;

    debug!(count = records.len(), path = %path.display(), "replaced word list");
    Ok(())
}

/// Appends `records` to the list at `path`, writing the header only when the
/// file does not exist yet. When the file already has a header, appended rows
/// are ordered against it so the file stays readable.
pub fn append(path: &Path, records: &[WordRecord]) -> Result<(), TarjetaError> {
    let existing_header = existing_header(path)?;
    let needs_header = existing_header.is_none();
    let header = existing_header.unwrap_or_else(|| header_for(records));

    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::Writer::from_writer(file);
    write_rows(&mut writer, &header, records, needs_header)?;

    debug!(count = records.len(), path = %path.display(), "appended to word list");
    Ok(())
}

fn existing_header(path: &Path) -> Result<Option<Vec<String>>, TarjetaError> {
    if !path.exists() {
        return Ok(None);
    }
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?;
    if headers.is_empty() {
        return Ok(None);
    }
    Ok(Some(headers.iter().map(str::to_string).collect()))
}

fn header_for(records: &[WordRecord]) -> Vec<String> {
    let mut header = vec![WORD_COLUMN.to_string(), TRANSLATION_COLUMN.to_string()];
    for record in records {
        for (name, _) in &record.extra {
            if !header.iter().any(|existing| existing == name) {
                header.push(name.clone());
            }
        }
    }
    header
}

fn write_rows<W: io::Write>(
    writer: &mut csv::Writer<W>,
    header: &[String],
    records: &[WordRecord],
    include_header: bool,
) -> Result<(), TarjetaError> {
    if include_header {
        writer.write_record(header)?;
    }

    for record in records {
        let row: Vec<&str> = header
            .iter()
            .map(|column| match column.as_str() {
                WORD_COLUMN => record.word.as_str(),
                TRANSLATION_COLUMN => record.translation.as_str(),
                other => record
                    .extra
                    .iter()
                    .find(|(name, _)| name == other)
                    .map(|(_, value)| value.as_str())
                    .unwrap_or_default(),
            })
            .collect();
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
