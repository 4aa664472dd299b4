use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use super::model::{CellValue, Column, ColumnType, Datasets, Table};
use crate::config::Config;
use crate::error::LoadError;

pub const TRAIN_FILE: &str = "train.csv";
pub const TEST_FILE: &str = "test.csv";
pub const TEST_2_FILE: &str = "test_2.csv";

/// Cell texts read as missing values (the usual pandas NA set).
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Resolve `user` to its base directory and load the train / test / test_2
/// tables from it.
///
/// An unmapped user fails with [`LoadError::UnknownUser`] before the
/// filesystem is touched.
pub fn load_datasets(config: &Config, user: &str) -> Result<Datasets, LoadError> {
    let dir = config.resolve(user).ok_or_else(|| LoadError::UnknownUser {
        user: user.to_string(),
    })?;
    log::debug!("user '{user}' resolved to {}", dir.display());
    load_dir(dir)
}

/// Load the three dataset files from `dir`, in order. The first failure
/// aborts the whole load.
pub fn load_dir(dir: &Path) -> Result<Datasets, LoadError> {
    let train = load_table(&dir.join(TRAIN_FILE))?;
    let test_1 = load_table(&dir.join(TEST_FILE))?;
    let test_2 = load_table(&dir.join(TEST_2_FILE))?;
    Ok(Datasets { train, test_1, test_2 })
}

/// Load a single CSV file (header row required) into a [`Table`].
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    log::debug!("reading {}", path.display());
    let table = read_table(file).map_err(|e| map_csv_error(path, e))?;
    let table = table.ok_or_else(|| LoadError::Malformed {
        path: path.to_path_buf(),
        reason: "no columns to parse from file".to_string(),
    })?;

    log::debug!("{}: {table}, dtypes {:?}", path.display(), table.dtypes());
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV from any reader. `Ok(None)` means there was no header row.
fn read_table<R: Read>(rdr: R) -> Result<Option<Table>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);
    let headers = dedupe_headers(reader.headers()?.iter());
    if headers.is_empty() {
        return Ok(None);
    }

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in reader.records() {
        let record = result?;
        for (col_idx, value) in record.iter().enumerate() {
            raw[col_idx].push(value.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw)
        .map(|(name, values)| infer_column(name, values))
        .collect();

    // Non-flexible reader: every record matched the header width.
    Ok(Table::from_columns(columns))
}

/// Rename repeated header names to `name.1`, `name.2`, ... so every
/// column is reachable by name.
fn dedupe_headers<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        let mut candidate = name.to_string();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out
}

fn map_csv_error(path: &Path, err: csv::Error) -> LoadError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
        _ => LoadError::Malformed {
            path: path.to_path_buf(),
            reason,
        },
    }
}

// ---------------------------------------------------------------------------
// Type inference
// ---------------------------------------------------------------------------

fn is_na(s: &str) -> bool {
    NA_VALUES.contains(&s)
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

/// Pick the narrowest dtype that fits every non-null cell, then convert.
///
/// Precedence: integer, float (integers promoted), bool, string. A column
/// with only nulls is float. Surrounding whitespace is ignored when parsing
/// numbers and booleans; string cells keep their raw text.
fn infer_column(name: String, raw: Vec<String>) -> Column {
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;

    for s in raw.iter().filter(|s| !is_na(s)).map(|s| s.trim()) {
        all_int = all_int && s.parse::<i64>().is_ok();
        all_float = all_float && s.parse::<f64>().is_ok();
        all_bool = all_bool && parse_bool(s).is_some();
    }

    let dtype = if all_int && raw.iter().any(|s| !is_na(s)) {
        ColumnType::Integer
    } else if all_float {
        ColumnType::Float
    } else if all_bool {
        ColumnType::Bool
    } else {
        ColumnType::String
    };

    let values = raw
        .into_iter()
        .map(|s| {
            if is_na(&s) {
                return CellValue::Null;
            }
            let text = s.trim();
            match dtype {
                ColumnType::Integer => text.parse().map(CellValue::Integer).unwrap_or(CellValue::Null),
                ColumnType::Float => text.parse().map(CellValue::Float).unwrap_or(CellValue::Null),
                ColumnType::Bool => parse_bool(text).map(CellValue::Bool).unwrap_or(CellValue::Null),
                ColumnType::String => CellValue::String(s),
            }
        })
        .collect();

    Column { name, dtype, values }
}
