//! Default for files on a read-only filesystem.

use crate::{
    Errno, File, FileFlush, FileMutate, FileWrite, FileXattr, SetAttr, SetAttrMask, XattrFlags,
};

/// Read-only file behavior.
///
/// - [`FileMutate`] (`fsync`, `set_attr`, `remove`, `rename`) and
///   [`FileWrite`] fail with [`Errno::ReadOnlyFilesystem`].
/// - [`FileFlush`] succeeds: flushing buffers never writes anything.
/// - [`FileXattr`] fails with [`Errno::NotImplemented`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReadOnlyFile;

impl FileMutate for ReadOnlyFile {
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

impl FileWrite for ReadOnlyFile {
    fn write_at(&self, _data: &[u8], _offset: u64) -> Result<usize, Errno> {
        Err(Errno::ReadOnlyFilesystem)
    }
}

impl FileFlush for ReadOnlyFile {
    fn flush(&self) -> Result<(), Errno> {
        Ok(())
    }
}

impl FileXattr for ReadOnlyFile {
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
