//! Render a matrix as a tab-separated textual grid.

use crate::types::Matrix;
use std::fmt::Write;

/// Header line with the dimensions, then one line per row with entries
/// separated by a single tab. Pure function; the caller decides where the
/// text goes.
pub fn format_matrix(matrix: &Matrix) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Matriz ({} x {}):", matrix.rows, matrix.cols);
    for row in &matrix.data {
        for (c, value) in row.iter().enumerate() {
            if c > 0 {
                out.push('\t');
            }
            let _ = write!(out, "{value}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_matrix;

    #[test]
    fn formats_header_and_rows() {
        let m = Matrix {
            rows: 2,
            cols: 3,
            data: vec![vec![1, 2, 3], vec![4, 5, 6]],
        };
        assert_eq!(format_matrix(&m), "Matriz (2 x 3):\n1\t2\t3\n4\t5\t6\n");
    }

    #[test]
    fn single_cell_has_no_tabs() {
        let m = read_matrix("1 1\n42".as_bytes()).unwrap();
        assert_eq!(format_matrix(&m), "Matriz (1 x 1):\n42\n");
    }

    #[test]
    fn load_then_format_is_deterministic() {
        let input = "2 2\n-1 0\n7 12\n";
        let a = format_matrix(&read_matrix(input.as_bytes()).unwrap());
        let b = format_matrix(&read_matrix(input.as_bytes()).unwrap());
        assert_eq!(a, b);
        assert_eq!(a, "Matriz (2 x 2):\n-1\t0\n7\t12\n");
    }
}
