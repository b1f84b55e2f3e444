//! Shared types. A `Matrix` is only ever produced fully populated by the
//! loader and is replaced wholesale on reload, never mutated in place.

/// A dense integer matrix with its declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    /// Row-major: `data[r][c]`, exactly `rows` rows of `cols` entries each.
    pub data: Vec<Vec<i64>>,
}
