//! Single file copy.
//!
//! The destination is truncated in place and written sequentially. There is
//! no temp file and no rollback: an interrupted copy leaves whatever had
//! been written so far.

use crate::check::guard_open;
use crate::error::{Error, Result, is_no_space_error};
use crate::options::CopyOptions;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use super::utils::copy_file_contents;

/// Statistics from a completed copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Bytes written to the destination
    pub bytes_copied: u64,
    /// Wall-clock time spent opening, transferring and syncing
    pub duration: Duration,
}

/// Overwrite `dst` with the exact bytes of `src`.
///
/// Returns the number of bytes copied.
///
/// # Arguments
///
/// * `src` - Source file path, opened read-only
/// * `dst` - Destination file path, created if missing and truncated if not
/// * `options` - Copy options
///
/// # Errors
///
/// Returns an error if:
/// - Either path cannot be opened ([`Error::FileOpen`])
/// - Source is a directory ([`Error::IsADirectory`])
/// - The device fills up ([`Error::NoSpace`])
/// - Reading, writing or syncing fails ([`Error::Copy`])
///
/// # Example
///
/// ```no_run
/// use mycopy::{CopyOptions, copy_file};
/// use std::path::Path;
///
/// let bytes = copy_file(Path::new("a.txt"), Path::new("b.txt"), &CopyOptions::default())?;
/// println!("copied {bytes} bytes");
/// # Ok::<(), mycopy::Error>(())
/// ```
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<u64> {
    copy_file_with_stats(src, dst, options).map(|stats| stats.bytes_copied)
}

/// Like [`copy_file`], but also reports how long the copy took.
pub fn copy_file_with_stats(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let start = Instant::now();

    let src_file = guard_open(File::open(src), src)?;

    // Checked on the open handle, before the destination is truncated
    let src_meta = src_file
        .metadata()
        .map_err(|e| transfer_error(src, dst, e))?;
    if src_meta.is_dir() {
        return Err(Error::IsADirectory(src.to_path_buf()));
    }

    let dst_file = guard_open(
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(dst),
        dst,
    )?;

    #[cfg(feature = "tracing")]
    tracing::debug!(src = %src.display(), dst = %dst.display(), size = src_meta.len(), "copying");

    let bytes_copied =
        copy_file_contents(&src_file, &dst_file).map_err(|e| transfer_error(src, dst, e))?;

    if options.fsync {
        dst_file
            .sync_all()
            .map_err(|e| transfer_error(src, dst, e))?;
    }

    let stats = CopyStats {
        bytes_copied,
        duration: start.elapsed(),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = stats.bytes_copied, duration = ?stats.duration, "copy finished");

    Ok(stats)
}

fn transfer_error(src: &Path, dst: &Path, source: io::Error) -> Error {
    if is_no_space_error(&source) {
        Error::NoSpace {
            path: dst.to_path_buf(),
        }
    } else {
        Error::Copy {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
