//! Read a whitespace-delimited integer matrix from a text source.
//!
//! The input is a flat token stream: the first two tokens declare rows and
//! columns, the next `rows * cols` tokens are the entries in row-major
//! order. Whitespace (including newlines) is an unstructured separator, so
//! how many entries appear per physical line never matters.

use crate::error::{Field, LoadError};
use crate::types::Matrix;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// Open `path` and read a matrix from it. The handle is dropped on every
/// exit path.
pub fn load_matrix(path: &Path) -> Result<Matrix, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_matrix(BufReader::new(file))
}

/// Read a matrix from any buffered source. No partial matrix is ever
/// returned: the result is either fully populated or an error.
/// Upper bound on total cells, so a bogus header cannot trigger a huge
/// allocation before any element is read.
const MAX_CELLS: usize = 1 << 24;

pub fn read_matrix<R: BufRead>(reader: R) -> Result<Matrix, LoadError> {
    let mut tokens = Tokenizer::new(reader);

    let rows = tokens.read_dimension(Field::Rows)?;
    let cols = tokens.read_dimension(Field::Cols)?;
    if rows <= 0 || cols <= 0 {
        return Err(LoadError::InvalidDimensions { rows, cols });
    }
    let (rows, cols) = (rows as usize, cols as usize);
    match rows.checked_mul(cols) {
        Some(cells) if cells <= MAX_CELLS => {}
        _ => {
            return Err(LoadError::InvalidDimensions {
                rows: rows as i64,
                cols: cols as i64,
            });
        }
    }

    // Transient working copy; every cell is overwritten before return.
    let mut data = vec![vec![0i64; cols]; rows];
    for r in 0..rows {
        for c in 0..cols {
            data[r][c] = match tokens.read_int(Field::Element) {
                Ok(v) => v,
                Err(e @ (LoadError::UnexpectedEnd { .. } | LoadError::InvalidValue { .. })) => {
                    return Err(LoadError::Element {
                        row: r,
                        col: c,
                        source: Box::new(e),
                    });
                }
                Err(e) => return Err(e),
            };
        }
    }

    Ok(Matrix { rows, cols, data })
}

/// Pulls maximal runs of non-whitespace bytes out of a reader.
struct Tokenizer<R> {
    reader: R,
}

impl<R: BufRead> Tokenizer<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Next token, or `None` on clean end of stream.
    fn next_token(&mut self) -> Result<Option<String>, LoadError> {
        let mut token = Vec::new();
        loop {
            let (used, terminated) = {
                let buf = self
                    .reader
                    .fill_buf()
                    .map_err(|source| LoadError::Stream { source })?;
                if buf.is_empty() {
                    break;
                }
                let mut used = 0;
                let mut terminated = false;
                for &b in buf {
                    used += 1;
                    if b.is_ascii_whitespace() {
                        if !token.is_empty() {
                            // The terminating separator is consumed too.
                            terminated = true;
                            break;
                        }
                    } else {
                        token.push(b);
                    }
                }
                (used, terminated)
            };
            self.reader.consume(used);
            if terminated {
                return Ok(Some(Self::into_token(token)));
            }
        }
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Self::into_token(token)))
        }
    }

    fn into_token(bytes: Vec<u8>) -> String {
        // Non-UTF-8 bytes can't form a valid integer anyway; keep them
        // readable for the error message.
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Next token parsed as a base-10 integer for `field`.
    fn read_int(&mut self, field: Field) -> Result<i64, LoadError> {
        let token = self
            .next_token()?
            .ok_or(LoadError::UnexpectedEnd { field })?;
        token
            .parse::<i64>()
            .map_err(|_| LoadError::InvalidValue { field, token })
    }

    /// Like `read_int` but for the dimension header. Dimensions parse
    /// through `i32`, so an over-range count is an invalid value rather
    /// than a later allocation of absurd size.
    fn read_dimension(&mut self, field: Field) -> Result<i64, LoadError> {
        let token = self
            .next_token()?
            .ok_or(LoadError::UnexpectedEnd { field })?;
        token
            .parse::<i32>()
            .map(i64::from)
            .map_err(|_| LoadError::InvalidValue { field, token })
    }
}
