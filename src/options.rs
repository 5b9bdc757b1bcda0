//! Configuration options for copy operations.
//!
//! # Example
//!
//! ```
//! use mycopy::CopyOptions;
//!
//! let options = CopyOptions::default()
//!     .with_fsync()
//!     .without_existence_check();
//! assert!(options.fsync);
//! assert!(!options.check_existence);
//! ```

/// Options for copy operations.
///
/// Use [`Default::default()`] to get the behaviour of the `mycopy` command,
/// then customize using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `fsync` | `false` | Sync destination to disk after write |
/// | `check_existence` | `true` | Check both paths before copying |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOptions {
    /// Whether to sync the destination to disk after writing (default: false)
    pub fsync: bool,

    /// Whether [`validate_pair`](crate::validate_pair) opens both paths for
    /// reading before the copy (default: true)
    ///
    /// The copy itself still guards its own opens, so turning this off only
    /// changes which error is reported for a missing file.
    pub check_existence: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            fsync: false,
            check_existence: true,
        }
    }
}

impl CopyOptions {
    /// Sync the destination to disk before returning
    #[must_use]
    pub fn with_fsync(mut self) -> Self {
        self.fsync = true;
        self
    }

    /// Skip the pre-copy existence check
    #[must_use]
    pub fn without_existence_check(mut self) -> Self {
        self.check_existence = false;
        self
    }
}
