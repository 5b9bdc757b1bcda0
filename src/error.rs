//! Error types for mycopy.
//!
//! This module provides the [`Error`] enum containing every failure that can
//! stop a copy, the [`Result`] type alias, and [`ErrorCode`] for
//! machine-readable classification.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Validation | [`Error::ArgumentCount`], [`Error::IdenticalFile`], [`Error::IsADirectory`] |
//! | Access | [`Error::FileNotFound`], [`Error::FileOpen`] |
//! | Transfer | [`Error::Copy`], [`Error::NoSpace`] |
//!
//! All errors are fatal for the command line tool: none are retried and
//! a partially written destination is left as-is.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for mycopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error indicates "no space left on device".
///
/// # Platform Support
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
///
/// # Example
///
/// ```
/// use std::io;
/// use mycopy::is_no_space_error;
///
/// let error = io::Error::new(io::ErrorKind::StorageFull, "disk full");
/// assert!(is_no_space_error(&error));
/// ```
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ENOSPC: i32 = 28;
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ERROR_DISK_FULL: i32 = 112;
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}

/// Stable, machine-readable classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad invocation: wrong argument count, same file twice, a directory
    InvalidInput,
    /// Existence check failed
    FileNotFound,
    /// Copy-time open was refused by the OS
    PermissionDenied,
    /// Copy-time open failed for another reason
    FileOpen,
    /// Destination ran out of space
    NoSpace,
    /// Read or write failed mid-transfer
    IoError,
}

impl ErrorCode {
    /// Snake-case name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::FileNotFound => "file_not_found",
            Self::PermissionDenied => "permission_denied",
            Self::FileOpen => "file_open",
            Self::NoSpace => "no_space",
            Self::IoError => "io_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while validating or copying.
///
/// Path-carrying variants keep the path exactly as the caller supplied it,
/// so messages echo the user's own spelling.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Wrong number of command line arguments
    #[error("{provided} arguments provided, please provide {required}")]
    ArgumentCount {
        /// Number of arguments the user gave
        provided: usize,
        /// Number of arguments required
        required: usize,
    },

    /// A path could not be opened by the pre-copy existence check
    #[error("File '{}' does not exist.", .path.display())]
    FileNotFound {
        /// The checked path
        path: PathBuf,
        /// Underlying open error
        source: io::Error,
    },

    /// Both arguments are the same string
    ///
    /// The comparison is textual. Two different spellings of one file
    /// (a symlink, `./a` and `a`) are not detected.
    #[error("The two files provided are the same file.")]
    IdenticalFile {
        /// The repeated path
        path: PathBuf,
    },

    /// A path could not be opened for the copy itself
    ///
    /// Distinct from [`Error::FileNotFound`]: the file may have vanished or
    /// become unwritable after the existence check, or the read-only check
    /// passed but opening for writing did not.
    #[error("Connection with file '{}' failed.", .path.display())]
    FileOpen {
        /// The path that failed to open
        path: PathBuf,
        /// Underlying open error
        source: io::Error,
    },

    /// Source is a directory
    #[error("File '{}' is a directory.", .0.display())]
    IsADirectory(PathBuf),

    /// Reading the source or writing the destination failed mid-transfer
    #[error("Failed to copy '{}' to '{}': {source}", .src.display(), .dst.display())]
    Copy {
        /// Source path
        src: PathBuf,
        /// Destination path
        dst: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// No space left on device while writing the destination
    ///
    /// The destination holds whatever was written before the device filled.
    #[error("No space left on device while writing '{}'.", .path.display())]
    NoSpace {
        /// Destination path
        path: PathBuf,
    },
}

impl Error {
    /// Classify this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ArgumentCount { .. } | Self::IdenticalFile { .. } | Self::IsADirectory(_) => {
                ErrorCode::InvalidInput
            }
            Self::FileNotFound { .. } => ErrorCode::FileNotFound,
            Self::FileOpen { source, .. } => {
                if source.kind() == io::ErrorKind::PermissionDenied {
                    ErrorCode::PermissionDenied
                } else {
                    ErrorCode::FileOpen
                }
            }
            Self::NoSpace { .. } => ErrorCode::NoSpace,
            Self::Copy { .. } => ErrorCode::IoError,
        }
    }
}
