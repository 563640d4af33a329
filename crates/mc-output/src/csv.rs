//! CSV output backend.
//!
//! One file per series: header row first, then one record per
//! [`append`](SeriesWriter::append).

use std::fs::File;
use std::marker::PhantomData;
use std::path::Path;

use csv::Writer;

use crate::error::OutputResult;
use crate::row::SeriesRow;

/// Writes one time series to a CSV file.
///
/// The row type fixes the header and the column order at compile time, so a
/// walk series cannot receive an epidemic row by accident.
pub struct SeriesWriter<T: SeriesRow> {
    writer:   Writer<File>,
    rows:     usize,
    finished: bool,
    _row:     PhantomData<T>,
}

impl<T: SeriesRow> SeriesWriter<T> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(T::HEADER)?;
        Ok(Self { writer, rows: 0, finished: false, _row: PhantomData })
    }

    /// Append one record.
    pub fn append(&mut self, row: &T) -> OutputResult<()> {
        self.writer.write_record(row.fields())?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far (the header row is not counted).
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush the underlying file.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
