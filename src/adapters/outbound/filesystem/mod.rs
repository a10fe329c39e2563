/// Filesystem adapters for output delivery
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
