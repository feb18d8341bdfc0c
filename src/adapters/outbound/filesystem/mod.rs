/// Filesystem adapters for chart output
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
