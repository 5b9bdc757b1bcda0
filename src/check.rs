//! Pre-copy validation.
//!
//! These checks run in a fixed order before any byte is written:
//! argument count, existence of each path, then the identity check.
//! [`guard_open`] is the odd one out: it wraps the opens performed by the
//! copy engine itself.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs::File;
use std::io;
use std::path::Path;

/// Check that the user supplied exactly `required` arguments.
///
/// # Errors
///
/// Returns [`Error::ArgumentCount`] carrying both counts if they differ.
///
/// # Example
///
/// ```
/// use mycopy::check_arg_count;
///
/// assert!(check_arg_count(2, 2).is_ok());
/// let err = check_arg_count(1, 2).unwrap_err();
/// assert_eq!(err.to_string(), "1 arguments provided, please provide 2");
/// ```
pub fn check_arg_count(provided: usize, required: usize) -> Result<()> {
    if provided != required {
        return Err(Error::ArgumentCount { provided, required });
    }
    Ok(())
}

/// Check that `path` can be opened for reading.
///
/// The handle is closed before returning. A successful check says
/// nothing about the file at copy time.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] naming `path` if the open fails for any
/// reason.
pub fn check_file_exists(path: &Path) -> Result<()> {
    match File::open(path) {
        Ok(_file) => Ok(()),
        Err(source) => Err(Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Reject a source and destination that are spelled the same.
///
/// Comparison is on the raw OS strings, so `a//b` and `a/b` count as
/// different even though [`Path`] equality would call them equal.
///
/// # Errors
///
/// Returns [`Error::IdenticalFile`] if both strings are equal.
pub fn check_distinct(src: &Path, dst: &Path) -> Result<()> {
    if src.as_os_str() == dst.as_os_str() {
        return Err(Error::IdenticalFile {
            path: src.to_path_buf(),
        });
    }
    Ok(())
}

/// Turn the outcome of a copy-time open into a handle or a [`Error::FileOpen`].
///
/// # Errors
///
/// Returns [`Error::FileOpen`] naming `path` if `opened` is an error.
pub fn guard_open(opened: io::Result<File>, path: &Path) -> Result<File> {
    opened.map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the existence checks (unless disabled) and the identity check.
///
/// This is the validation sequence of the `mycopy` command after the
/// argument count has been checked.
///
/// # Errors
///
/// Returns the first failing check's error: [`Error::FileNotFound`] for
/// `src`, then for `dst`, then [`Error::IdenticalFile`].
pub fn validate_pair(src: &Path, dst: &Path, options: &CopyOptions) -> Result<()> {
    if options.check_existence {
        check_file_exists(src)?;
        check_file_exists(dst)?;
    }
    check_distinct(src, dst)
}
