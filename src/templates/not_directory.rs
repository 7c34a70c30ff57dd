//! Default for nodes that are not directories.

use crate::{Dirents, Errno, File, FileDir, FileMode, Gid, OpenFlags, Qid, Uid};

/// Denies every [`FileDir`] operation with [`Errno::NotADirectory`].
///
/// Those operations are `create`, `mkdir`, `symlink`, `link`, `mknod`,
/// `rename_at`, `unlink_at` and `readdir`. Compose it into regular files and
/// symlinks; a directory on a read-only filesystem wants
/// [`ReadOnlyDir`](crate::ReadOnlyDir) instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotDirectoryFile;

impl FileDir for NotDirectoryFile {
    fn create(
        &self,
        _name: &str,
        _flags: OpenFlags,
        _permissions: FileMode,
        _uid: Uid,
        _gid: Gid,
    ) -> Result<(Box<dyn File>, Qid, u32), Errno> {
        Err(Errno::NotADirectory)
    }

    fn mkdir(&self, _name: &str, _permissions: FileMode, _uid: Uid, _gid: Gid) -> Result<Qid, Errno> {
        Err(Errno::NotADirectory)
    }

    fn symlink(&self, _oldname: &str, _newname: &str, _uid: Uid, _gid: Gid) -> Result<Qid, Errno> {
        Err(Errno::NotADirectory)
    }

    fn link(&self, _target: &dyn File, _newname: &str) -> Result<(), Errno> {
        Err(Errno::NotADirectory)
    }

    fn mknod(
        &self,
        _name: &str,
        _mode: FileMode,
        _major: u32,
        _minor: u32,
        _uid: Uid,
        _gid: Gid,
    ) -> Result<Qid, Errno> {
        Err(Errno::NotADirectory)
    }

    fn rename_at(&self, _oldname: &str, _newdir: &dyn File, _newname: &str) -> Result<(), Errno> {
        Err(Errno::NotADirectory)
    }

    fn unlink_at(&self, _name: &str, _flags: u32) -> Result<(), Errno> {
        Err(Errno::NotADirectory)
    }

    fn readdir(&self, _offset: u64, _count: u32) -> Result<Dirents, Errno> {
        Err(Errno::NotADirectory)
    }
}
