//! Default for nodes that are never symlinks.

use crate::{Errno, FileReadlink};

/// Denies [`readlink`](FileReadlink::readlink) with [`Errno::InvalidArgument`].
///
/// `EINVAL` is what `readlink(2)` returns when the file is not a symlink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotSymlinkFile;

impl FileReadlink for NotSymlinkFile {
    fn readlink(&self) -> Result<String, Errno> {
        Err(Errno::InvalidArgument)
    }
}
