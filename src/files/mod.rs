//! File I/O helpers for source input and saved output.

pub mod input;
pub mod output;

pub use input::{read_file, read_input};
pub use output::{write_output, write_output_path};
