//! Directory operations.

use crate::{Dirents, Errno, File, FileMode, Gid, OpenFlags, Qid, Uid};

/// Operations that treat a node as a directory: creating, linking, renaming
/// and removing entries, and listing them.
///
/// A node that is not a directory answers every method with
/// [`Errno::NotADirectory`]. A directory on a read-only filesystem answers
/// with [`Errno::ReadOnlyFilesystem`] instead; the two must not be confused.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FileDir`.
pub trait FileDir: Send + Sync {
    /// Create and open a regular file `name` in this directory (`Tlcreate`).
    ///
    /// Returns the opened node, its qid and the I/O unit (`0` for "use the
    /// negotiated message size").
    ///
    /// # Errors
    ///
    /// - [`Errno::NotADirectory`] if this node is not a directory
    /// - [`Errno::ReadOnlyFilesystem`] if the directory is read-only
    fn create(
        &self,
        name: &str,
        flags: OpenFlags,
        permissions: FileMode,
        uid: Uid,
        gid: Gid,
    ) -> Result<(Box<dyn File>, Qid, u32), Errno>;

    /// Create subdirectory `name` (`Tmkdir`).
    ///
    /// # Errors
    ///
    /// - [`Errno::NotADirectory`] if this node is not a directory
    /// - [`Errno::ReadOnlyFilesystem`] if the directory is read-only
    fn mkdir(&self, name: &str, permissions: FileMode, uid: Uid, gid: Gid) -> Result<Qid, Errno>;

    /// Create symlink `newname` pointing at `oldname` (`Tsymlink`).
    ///
    /// # Errors
    ///
    /// - [`Errno::NotADirectory`] if this node is not a directory
    /// - [`Errno::ReadOnlyFilesystem`] if the directory is read-only
    fn symlink(&self, oldname: &str, newname: &str, uid: Uid, gid: Gid) -> Result<Qid, Errno>;

    /// Create hard link `newname` to `target` (`Tlink`).
    ///
    /// # Errors
    ///
    /// - [`Errno::NotADirectory`] if this node is not a directory
    /// - [`Errno::ReadOnlyFilesystem`] if the directory is read-only
    fn link(&self, target: &dyn File, newname: &str) -> Result<(), Errno>;

    /// Create special file `name` (`Tmknod`).
    ///
    /// # Errors
    ///
    /// - [`Errno::NotADirectory`] if this node is not a directory
    /// - [`Errno::ReadOnlyFilesystem`] if the directory is read-only
    fn mknod(
        &self,
        name: &str,
        mode: FileMode,
        major: u32,
        minor: u32,
        uid: Uid,
        gid: Gid,
    ) -> Result<Qid, Errno>;

    /// Move entry `oldname` to `newname` in `newdir` (`Trenameat`).
    ///
    /// # Errors
    ///
    /// - [`Errno::NotADirectory`] if this node is not a directory
    /// - [`Errno::ReadOnlyFilesystem`] if the directory is read-only
    fn rename_at(&self, oldname: &str, newdir: &dyn File, newname: &str) -> Result<(), Errno>;

    /// Remove entry `name` (`Tunlinkat`). `flags` may carry `AT_REMOVEDIR`.
    ///
    /// # Errors
    ///
    /// - [`Errno::NotADirectory`] if this node is not a directory
    /// - [`Errno::ReadOnlyFilesystem`] if the directory is read-only
    fn unlink_at(&self, name: &str, flags: u32) -> Result<(), Errno>;

    /// List up to `count` bytes worth of entries after `offset` (`Treaddir`).
    ///
    /// # Errors
    ///
    /// - [`Errno::NotADirectory`] if this node is not a directory
    /// - [`Errno::ReadOnlyFilesystem`] if the directory is read-only
    fn readdir(&self, offset: u64, count: u32) -> Result<Dirents, Errno>;
}
