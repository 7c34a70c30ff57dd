//! Byte-stream writes.

use crate::Errno;

/// Positional writes to a node's byte stream.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FileWrite`.
pub trait FileWrite: Send + Sync {
    /// Write `data` starting at `offset`.
    ///
    /// Returns the number of bytes written. A failed write writes nothing.
    ///
    /// # Errors
    ///
    /// - [`Errno::ReadOnlyFilesystem`] if the node is read-only
    /// - [`Errno::IsADirectory`] if the node is a directory
    fn write_at(&self, data: &[u8], offset: u64) -> Result<usize, Errno>;
}
