//! Reporting collaborator: labeled numeric rows produced by the
//! computation crates, rendered to text, CSV, or JSON.
//!
//! The computation core hands over (label, format hint, values) rows and
//! never performs text layout itself; every front-end renders through the
//! writers here.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// A single report value: numeric, or a short text annotation such as a
/// material name or a `[sum]` column marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Num(f64),
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Num(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// Numeric format hint for a row, mirroring fixed-width printf-style
/// columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumFmt {
    pub width: usize,
    pub precision: usize,
}

impl NumFmt {
    /// Fixed-point format with the given column width and precision.
    pub const fn fixed(width: usize, precision: usize) -> Self {
        Self { width, precision }
    }
}

/// A labeled report row carrying one or more values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: String,
    #[serde(skip)]
    pub fmt: NumFmt,
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(label: impl Into<String>, fmt: NumFmt, values: Vec<Value>) -> Self {
        Self {
            label: label.into(),
            fmt,
            values,
        }
    }

    /// Convenience constructor for all-numeric rows.
    pub fn numeric(label: impl Into<String>, fmt: NumFmt, values: &[f64]) -> Self {
        Self::new(label, fmt, values.iter().map(|&v| Value::Num(v)).collect())
    }
}

/// A titled group of rows; one report is a sequence of sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(title: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }
}

/// Fixed-width text renderer: a title line per section, indented rows with
/// a common label column.
pub struct TextWriter<W: Write> {
    out: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a single unindented line.
    pub fn put_item(&mut self, item: &str) -> io::Result<()> {
        writeln!(self.out, "{item}")
    }

    /// Write one labeled row with fixed-width value columns.
    pub fn put_row(&mut self, row: &Row) -> io::Result<()> {
        write!(self.out, "    {:<24}", row.label)?;
        for value in &row.values {
            match value {
                Value::Num(v) => write!(
                    self.out,
                    " {:>width$.precision$}",
                    v,
                    width = row.fmt.width,
                    precision = row.fmt.precision
                )?,
                Value::Text(s) => write!(self.out, " {:>width$}", s, width = row.fmt.width)?,
            }
        }
        writeln!(self.out)
    }

    /// Write a full sequence of sections.
    pub fn put_sections(&mut self, sections: &[Section]) -> io::Result<()> {
        for section in sections {
            self.put_item(&section.title)?;
            for row in &section.rows {
                self.put_row(row)?;
            }
        }
        Ok(())
    }
}

/// Write sections as CSV records of `section,label,value...`; rows are
/// ragged so the writer runs in flexible mode.
pub fn write_csv<W: Write>(out: W, sections: &[Section]) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(out);
    writer.write_record(["section", "label", "values"])?;
    for section in sections {
        for row in &section.rows {
            let mut record = vec![section.title.clone(), row.label.clone()];
            for value in &row.values {
                record.push(match value {
                    Value::Num(v) => format!("{:.precision$}", v, precision = row.fmt.precision),
                    Value::Text(s) => s.clone(),
                });
            }
            writer.write_record(&record)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write sections as pretty-printed JSON.
pub fn write_json<W: Write>(out: W, sections: &[Section]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, sections)
}

/// Create a buffered writer for the target path, with `-` meaning stdout.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}
