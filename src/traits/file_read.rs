//! Byte-stream reads.

use crate::Errno;

/// Positional reads from a node's byte stream.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FileRead`.
pub trait FileRead: Send + Sync {
    /// Read into `buf` starting at `offset`.
    ///
    /// Returns the number of bytes read; `0` means end of file.
    ///
    /// # Errors
    ///
    /// - [`Errno::IsADirectory`] if the node is a directory
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Errno>;
}
