//! Copy engine.
//!
//! Opens both files, transfers the source's bytes into the truncated
//! destination and releases both handles.

mod file;
mod utils;

pub use file::{CopyStats, copy_file, copy_file_with_stats};
