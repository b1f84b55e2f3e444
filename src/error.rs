//! Load error taxonomy. Field names and positions stay structured here;
//! the final message string is only composed in `Display`.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The logical unit being parsed when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rows,
    Cols,
    Element,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Rows => "number of rows",
            Field::Cols => "number of columns",
            Field::Element => "matrix element",
        };
        f.write_str(name)
    }
}

/// Why a load attempt failed. Every variant is terminal for that call;
/// the caller decides whether to retry with another source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("unexpected end of input while reading {field}")]
    UnexpectedEnd { field: Field },

    #[error("invalid value for {field}: \"{token}\"")]
    InvalidValue { field: Field, token: String },

    #[error("invalid dimensions: {rows} x {cols}")]
    InvalidDimensions { rows: i64, cols: i64 },

    /// An element-phase failure, augmented with the zero-based position
    /// that was being filled.
    #[error("{source} (position {row},{col})")]
    Element {
        row: usize,
        col: usize,
        source: Box<LoadError>,
    },

    #[error("read failure: {source}")]
    Stream { source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_display_appends_position() {
        let err = LoadError::Element {
            row: 1,
            col: 1,
            source: Box::new(LoadError::UnexpectedEnd {
                field: Field::Element,
            }),
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of input while reading matrix element (position 1,1)"
        );
    }

    #[test]
    fn invalid_value_names_field_and_token() {
        let err = LoadError::InvalidValue {
            field: Field::Rows,
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for number of rows: \"abc\"");
    }

    #[test]
    fn invalid_dimensions_reports_both_values() {
        let err = LoadError::InvalidDimensions { rows: -1, cols: 2 };
        assert_eq!(err.to_string(), "invalid dimensions: -1 x 2");
    }
}
