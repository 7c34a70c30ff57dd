//! Default for directories on a read-only filesystem.

use crate::{
    Dirents, Errno, File, FileDir, FileMode, FileMutate, FileXattr, Gid, OpenFlags, Qid, SetAttr,
    SetAttrMask, Uid, XattrFlags,
};

/// Denies directory and file mutations with [`Errno::ReadOnlyFilesystem`].
///
/// Those operations are every [`FileDir`] method (`create`, `mkdir`,
/// `symlink`, `link`, `mknod`, `rename_at`, `unlink_at`, `readdir`) and every
/// [`FileMutate`] method (`rename`, `set_attr`, `fsync`, `remove`).
/// [`FileXattr`] fails with [`Errno::NotImplemented`].
///
/// The node *is* a directory, so nothing here answers
/// [`Errno::NotADirectory`]; that is [`NotDirectoryFile`](crate::NotDirectoryFile)'s job.
/// A directory that can list its entries implements [`FileDir`] itself and
/// only delegates [`FileMutate`] and [`FileXattr`] here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReadOnlyDir;

impl FileDir for ReadOnlyDir {
    fn create(
        &self,
        _name: &str,
        _flags: OpenFlags,
        _permissions: FileMode,
        _uid: Uid,
        _gid: Gid,
    ) -> Result<(Box<dyn File>, Qid, u32), Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }

    fn mkdir(&self, _name: &str, _permissions: FileMode, _uid: Uid, _gid: Gid) -> Result<Qid, Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }

    fn symlink(&self, _oldname: &str, _newname: &str, _uid: Uid, _gid: Gid) -> Result<Qid, Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }

    fn link(&self, _target: &dyn File, _newname: &str) -> Result<(), Errno> {
        Err(Errno::ReadOnlyFilesystem)
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
        Err(Errno::ReadOnlyFilesystem)
    }

    fn rename_at(&self, _oldname: &str, _newdir: &dyn File, _newname: &str) -> Result<(), Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }

    fn unlink_at(&self, _name: &str, _flags: u32) -> Result<(), Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }

    fn readdir(&self, _offset: u64, _count: u32) -> Result<Dirents, Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }
}

impl FileMutate for ReadOnlyDir {
    fn fsync(&self) -> Result<(), Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }

    fn set_attr(&self, _valid: SetAttrMask, _attr: SetAttr) -> Result<(), Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }

    fn remove(&self) -> Result<(), Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }

    fn rename(&self, _directory: &dyn File, _name: &str) -> Result<(), Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }
}

impl FileXattr for ReadOnlyDir {
    fn set_xattr(&self, _name: &str, _data: &[u8], _flags: XattrFlags) -> Result<(), Errno> {
        Err(Errno::NotImplemented)
    }

    fn get_xattr(&self, _name: &str) -> Result<Vec<u8>, Errno> {
        Err(Errno::NotImplemented)
    }

    fn list_xattrs(&self) -> Result<Vec<String>, Errno> {
        Err(Errno::NotImplemented)
    }

    fn remove_xattr(&self, _name: &str) -> Result<(), Errno> {
        Err(Errno::NotImplemented)
    }
}
