//! Problem file parsing.
//!
//! A problem file is whitespace-separated columns with a header line:
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-50.1,80.0) (90.1,12.2)
//! 2 (-24.5,-19.2) (98.5,1.8)
//! ```
//!
//! Coordinates are parsed by a narrowly-scoped `(x,y)` parser that accepts
//! exactly two finite reals; anything else is a typed error. Parsing fails
//! fast — no partial load list is ever returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Load, Point};

/// A problem-file parse failure.
#[derive(Debug, Error)]
pub enum ParseError {
    /// File could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A data line did not have exactly three columns.
    #[error("line {line}: expected 3 columns (loadNumber pickup dropoff), found {found}")]
    ColumnCount {
        /// 1-based line number.
        line: usize,
        /// Number of columns found.
        found: usize,
    },
    /// The load number column was not a positive integer.
    #[error("line {line}: invalid load number {value:?}: expected a positive integer")]
    LoadNumber {
        /// 1-based line number.
        line: usize,
        /// Offending column text.
        value: String,
    },
    /// A coordinate column was not a `(x,y)` pair of finite reals.
    #[error("line {line}: invalid {field} coordinate {value:?}: expected (x,y)")]
    Coordinate {
        /// 1-based line number.
        line: usize,
        /// Which column: `"pickup"` or `"dropoff"`.
        field: &'static str,
        /// Offending column text.
        value: String,
    },
    /// The same load number appeared twice.
    #[error("line {line}: duplicate load number {id}")]
    DuplicateLoad {
        /// 1-based line number.
        line: usize,
        /// The repeated load number.
        id: u64,
    },
}

/// Reads and parses a problem file.
pub fn read_loads(path: &Path) -> Result<Vec<Load>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_loads(BufReader::new(file)).map_err(|err| match err {
        ParseError::Io { source, .. } => ParseError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Parses loads from a reader.
///
/// The first line is a header and is skipped; blank lines are ignored.
///
/// # Examples
///
/// ```
/// use load_dispatch::input::parse_loads;
///
/// let text = "loadNumber pickup dropoff\n1 (0.0,0.0) (10.0,0.0)\n";
/// let loads = parse_loads(text.as_bytes()).unwrap();
/// assert_eq!(loads.len(), 1);
/// assert_eq!(loads[0].id(), 1);
/// ```
pub fn parse_loads<R: BufRead>(reader: R) -> Result<Vec<Load>, ParseError> {
    let mut loads = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| ParseError::Io {
            path: PathBuf::new(),
            source,
        })?;

        // header
        if line_number == 1 {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() != 3 {
            return Err(ParseError::ColumnCount {
                line: line_number,
                found: columns.len(),
            });
        }

        let id: u64 = columns[0].parse().ok().filter(|&id| id > 0).ok_or_else(|| {
            ParseError::LoadNumber {
                line: line_number,
                value: columns[0].to_string(),
            }
        })?;
        if !seen_ids.insert(id) {
            return Err(ParseError::DuplicateLoad {
                line: line_number,
                id,
            });
        }

        let pickup = parse_point(columns[1]).ok_or_else(|| ParseError::Coordinate {
            line: line_number,
            field: "pickup",
            value: columns[1].to_string(),
        })?;
        let dropoff = parse_point(columns[2]).ok_or_else(|| ParseError::Coordinate {
            line: line_number,
            field: "dropoff",
            value: columns[2].to_string(),
        })?;

        loads.push(Load::new(id, pickup, dropoff));
    }

    Ok(loads)
}

/// Parses a `(x,y)` pair of finite reals. Returns `None` for anything else.
fn parse_point(text: &str) -> Option<Point> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    let (x_text, y_text) = inner.split_once(',')?;
    let x: f64 = x_text.trim().parse().ok()?;
    let y: f64 = y_text.trim().parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_file() {
        let text = "loadNumber pickup dropoff\n\
                    1 (-50.1,80.0) (90.1,12.2)\n\
                    2 (-24.5,-19.2) (98.5,1.8)\n";
        let loads = parse_loads(text.as_bytes()).expect("valid input");
        assert_eq!(loads.len(), 2);
        assert_eq!(loads[0].id(), 1);
        assert!((loads[0].pickup().x() + 50.1).abs() < 1e-10);
        assert!((loads[1].dropoff().y() - 1.8).abs() < 1e-10);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "loadNumber pickup dropoff\n\n3 (1.0,2.0) (3.0,4.0)\n\n";
        let loads = parse_loads(text.as_bytes()).expect("valid input");
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].id(), 3);
    }

    #[test]
    fn test_parse_header_only() {
        let loads = parse_loads("loadNumber pickup dropoff\n".as_bytes()).expect("valid input");
        assert!(loads.is_empty());
    }

    #[test]
    fn test_error_column_count() {
        let text = "loadNumber pickup dropoff\n1 (1.0,2.0)\n";
        match parse_loads(text.as_bytes()) {
            Err(ParseError::ColumnCount { line: 2, found: 2 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_error_bad_load_number() {
        for bad in ["abc", "-1", "0", "1.5"] {
            let text = format!("loadNumber pickup dropoff\n{bad} (1.0,2.0) (3.0,4.0)\n");
            match parse_loads(text.as_bytes()) {
                Err(ParseError::LoadNumber { line: 2, value }) => assert_eq!(value, bad),
                other => panic!("unexpected result for {bad:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_error_bad_coordinate() {
        for bad in ["1.0,2.0", "(1.0)", "(1.0,2.0,3.0)", "(a,b)", "(nan,1.0)", "(inf,1.0)"] {
            let text = format!("loadNumber pickup dropoff\n1 {bad} (3.0,4.0)\n");
            match parse_loads(text.as_bytes()) {
                Err(ParseError::Coordinate {
                    line: 2,
                    field: "pickup",
                    value,
                }) => assert_eq!(value, bad),
                other => panic!("unexpected result for {bad:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_error_dropoff_field_named() {
        let text = "loadNumber pickup dropoff\n1 (1.0,2.0) oops\n";
        match parse_loads(text.as_bytes()) {
            Err(ParseError::Coordinate {
                field: "dropoff", ..
            }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_error_duplicate_load_number() {
        let text = "loadNumber pickup dropoff\n\
                    7 (1.0,2.0) (3.0,4.0)\n\
                    7 (5.0,6.0) (7.0,8.0)\n";
        match parse_loads(text.as_bytes()) {
            Err(ParseError::DuplicateLoad { line: 3, id: 7 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_point_forms() {
        assert!(parse_point("(1.5,-2)").is_some());
        assert!(parse_point("( 3.0 , 4.0 )").is_some());
        assert!(parse_point("(1e3,-2e-2)").is_some());
        assert!(parse_point("1.0,2.0").is_none());
        assert!(parse_point("(1.0;2.0)").is_none());
        assert!(parse_point("()").is_none());
    }

    #[test]
    fn test_read_loads_missing_file() {
        let err = read_loads(Path::new("/nonexistent/problem.txt")).unwrap_err();
        match err {
            ParseError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/problem.txt"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
