//! # mycopy
//!
//! Validated, byte-exact copying of one file over another.
//!
//! ## Core Features
//!
//! - **Exact copies**: binary-safe transfer, no newline or encoding translation
//! - **Overwrite by truncation**: a longer destination never keeps trailing bytes
//! - **Up-front validation**: argument count, existence checks and a same-file check
//! - **Distinct failures**: a failed existence check ([`Error::FileNotFound`]) is reported
//!   differently from a failed copy-time open ([`Error::FileOpen`])
//! - **Zero-copy on Linux**: uses `copy_file_range(2)` where the kernel allows it
//!
//! ## Quick Start
//!
//! ```no_run
//! use mycopy::{CopyOptions, copy_file, validate_pair};
//! use std::path::Path;
//!
//! let (src, dst) = (Path::new("a.txt"), Path::new("b.txt"));
//! let options = CopyOptions::default();
//!
//! validate_pair(src, dst, &options)?;
//! let bytes = copy_file(src, dst, &options)?;
//! println!("Copied {bytes} bytes");
//! # Ok::<(), mycopy::Error>(())
//! ```
//!
//! ## Known Limitation
//!
//! [`check_distinct`] compares the two paths as strings. Copying `a.txt`
//! onto `./a.txt`, or onto a symlink to it, is not caught and truncates the
//! source before it is read.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod check;
mod copy;
mod error;
mod options;

pub use check::{check_arg_count, check_distinct, check_file_exists, guard_open, validate_pair};
pub use copy::{CopyStats, copy_file, copy_file_with_stats};
pub use error::{Error, ErrorCode, Result, is_no_space_error};
pub use options::CopyOptions;
