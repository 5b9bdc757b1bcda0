//! Byte transfer between two open handles.

use std::fs::File;
use std::io::{self, BufReader};

/// Copy everything left in `src` to `dst`, returning the byte count.
///
/// On Linux 4.5+, uses `copy_file_range` for kernel-to-kernel transfer.
/// Falls back to a buffered `io::copy` on other platforms or when the
/// kernel refuses.
pub(crate) fn copy_file_contents(src: &File, dst: &File) -> io::Result<u64> {
    #[cfg(target_os = "linux")]
    {
        copy_file_range_all(src, dst)
    }
    #[cfg(not(target_os = "linux"))]
    {
        buffered_copy(src, dst)
    }
}

fn buffered_copy(src: &File, dst: &File) -> io::Result<u64> {
    io::copy(&mut BufReader::new(src), &mut &*dst)
}

/// Linux-specific: copy using copy_file_range(2) until end of file.
///
/// Falls back to [`buffered_copy`] if nothing has been transferred yet and
/// the kernel either rejects the call (cross-device, unsupported fs, not a
/// regular file) or reports EOF straight away. Some pseudo-filesystems
/// (procfs, sysfs) report a zero size and make copy_file_range return 0 even
/// though a plain read returns data.
#[cfg(target_os = "linux")]
fn copy_file_range_all(src: &File, dst: &File) -> io::Result<u64> {
    use std::os::unix::io::AsRawFd;

    // Chunked so the kernel does not hold the files for one huge call
    const CHUNK_SIZE: usize = 128 * 1024 * 1024;

    let src_fd = src.as_raw_fd();
    let dst_fd = dst.as_raw_fd();
    let mut copied: u64 = 0;

    loop {
        // SAFETY: both descriptors are owned by live `File`s for the whole
        // call, and null offsets mean "use and advance the file position".
        let result = unsafe {
            libc::copy_file_range(
                src_fd,
                std::ptr::null_mut(),
                dst_fd,
                std::ptr::null_mut(),
                CHUNK_SIZE,
                0,
            )
        };

        if result < 0 {
            let err = io::Error::last_os_error();
            if copied == 0
                && matches!(
                    err.raw_os_error(),
                    Some(libc::EXDEV)
                        | Some(libc::ENOSYS)
                        | Some(libc::EINVAL)
                        | Some(libc::EOPNOTSUPP)
                        | Some(libc::EBADF)
                )
            {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %err, "copy_file_range unavailable, using buffered copy");
                return buffered_copy(src, dst);
            }
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(err);
        }

        if result == 0 {
            if copied == 0 {
                return buffered_copy(src, dst);
            }
            break;
        }

        copied += result as u64;
    }

    Ok(copied)
}
