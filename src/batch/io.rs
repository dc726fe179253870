//! CSV reading and writing for batch runs.

use crate::error::{AssignError, Result};
use crate::matrix::DenseMatrix;
use crate::scenario::ScenarioResult;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Loads a gain matrix.
///
/// The first line is a header; its first cell names the row-label column
/// and the remaining cells name the primaries. Every following non-empty
/// line is one secondary: a row label (ignored) followed by one value per
/// primary.
///
/// # Example file content
/// ```csv
/// ,MUE_1,MUE_2
/// 0,0.81,0.12
/// 1,0.33,0.97
/// ```
///
/// # Errors
///
/// Returns [`AssignError::Io`] if the file cannot be read and
/// [`AssignError::Parse`] for a missing header, a short or long row, or a
/// non-numeric cell.
pub fn read_gain_matrix(path: &Path) -> Result<DenseMatrix> {
    let mut lines = records(path)?;

    let (_, header) = match lines.next() {
        Some(line) => line?,
        None => return Err(parse_error(path, 1, "missing header row")),
    };
    let cols = header.len().saturating_sub(1);

    let mut rows = 0usize;
    let mut data = Vec::new();
    for line in lines {
        let (line_no, fields) = line?;
        if fields.len() != cols + 1 {
            return Err(parse_error(
                path,
                line_no,
                format!("expected {} fields, got {}", cols + 1, fields.len()),
            ));
        }
        for field in &fields[1..] {
            data.push(parse_value(path, line_no, field)?);
        }
        rows += 1;
    }

    DenseMatrix::from_vec(rows, cols, data)
}

/// Loads the benefit column named `column`.
///
/// # Errors
///
/// Returns [`AssignError::MissingColumn`] if the header has no such column,
/// and [`AssignError::Parse`] if a row lacks it or holds a non-numeric value.
pub fn read_benefit_vector(path: &Path, column: &str) -> Result<Vec<f64>> {
    let mut lines = records(path)?;

    let (_, header) = match lines.next() {
        Some(line) => line?,
        None => return Err(parse_error(path, 1, "missing header row")),
    };
    let index = header
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| AssignError::MissingColumn {
            column: column.to_string(),
            path: path.to_path_buf(),
            found: header.clone(),
        })?;

    let mut values = Vec::new();
    for line in lines {
        let (line_no, fields) = line?;
        let field = fields.get(index).ok_or_else(|| {
            parse_error(
                path,
                line_no,
                format!("row has {} fields, '{column}' is field {}", fields.len(), index + 1),
            )
        })?;
        values.push(parse_value(path, line_no, field)?);
    }
    Ok(values)
}

/// Writes a scenario's pairing as `Primary User,Secondary User`.
pub fn write_pairing(path: &Path, result: &ScenarioResult) -> Result<()> {
    write_file(path, |w| {
        writeln!(w, "Primary User,Secondary User")?;
        for (primary, secondary) in &result.pairing {
            writeln!(w, "{primary},{secondary}")?;
        }
        Ok(())
    })
}

/// Writes one summary metric as `CSV_File,Optimal_Gain`.
pub fn write_summary<'a, I>(path: &Path, rows: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    write_file(path, |w| {
        writeln!(w, "CSV_File,Optimal_Gain")?;
        for (scenario, value) in rows {
            writeln!(w, "{},{:?}", quote_field(scenario), value)?;
        }
        Ok(())
    })
}

fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| AssignError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    body(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| AssignError::io(path, e))
}

/// Iterates over non-empty lines as `(line number, fields)`, one-based.
fn records(path: &Path) -> Result<impl Iterator<Item = Result<(usize, Vec<String>)>> + '_> {
    let file = File::open(path).map_err(|e| AssignError::io(path, e))?;
    let reader = BufReader::new(file);

    Ok(reader
        .lines()
        .enumerate()
        .filter_map(move |(i, line)| match line {
            Err(e) => Some(Err(AssignError::io(path, e))),
            Ok(line) => {
                let line = line.trim_start_matches('\u{feff}').trim_end_matches('\r');
                if line.trim().is_empty() {
                    None
                } else {
                    Some(Ok((i + 1, split_record(line))))
                }
            }
        }))
}

/// Splits one CSV line, honouring double-quoted fields with `""` escapes.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());
    fields
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn parse_value(path: &Path, line: usize, field: &str) -> Result<f64> {
    field
        .parse::<f64>()
        .map_err(|_| parse_error(path, line, format!("invalid number '{field}'")))
}

fn parse_error(path: &Path, line: usize, message: impl Into<String>) -> AssignError {
    AssignError::Parse {
        path: path.to_path_buf(),
        line,
        message: message.into(),
    }
}
