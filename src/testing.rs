//! Test doubles shared by the unit tests.

use crate::{Errno, FileRead, NotDirectoryFile, NotSymlinkFile, ReadOnlyFile};

/// An empty read-only file, used where an operation needs some other node.
pub(crate) struct Scratch;

impl FileRead for Scratch {
    fn read_at(&self, _buf: &mut [u8], _offset: u64) -> Result<usize, Errno> {
        Ok(0)
    }
}

crate::delegate_file!(Scratch {
    NotSymlinkFile => FileReadlink;
    NotDirectoryFile => FileDir;
    ReadOnlyFile => FileMutate, FileFlush, FileWrite, FileXattr;
});
