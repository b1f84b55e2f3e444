mod loader;
mod printer;

pub use loader::{load_matrix, read_matrix};
pub use printer::format_matrix;
