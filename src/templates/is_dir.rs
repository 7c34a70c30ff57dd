//! Default for directories read or written as byte streams.

use crate::{Errno, FileRead, FileWrite};

/// Denies [`read_at`](FileRead::read_at) and [`write_at`](FileWrite::write_at)
/// with [`Errno::IsADirectory`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IsDir;

impl FileWrite for IsDir {
    fn write_at(&self, _data: &[u8], _offset: u64) -> Result<usize, Errno> {
        Err(Errno::IsADirectory)
    }
}

impl FileRead for IsDir {
    fn read_at(&self, _buf: &mut [u8], _offset: u64) -> Result<usize, Errno> {
        Err(Errno::IsADirectory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_is_eisdir() {
        assert_eq!(IsDir.write_at(&[1, 2, 3], 0), Err(Errno::IsADirectory));
    }

    #[test]
    fn read_is_eisdir_and_leaves_buffer() {
        let mut buf = [0xAA; 16];
        assert_eq!(IsDir.read_at(&mut buf, 0), Err(Errno::IsADirectory));
        assert_eq!(buf, [0xAA; 16]);
    }

    #[test]
    fn empty_buffers_and_any_offset() {
        for offset in [0, 1, 4096, u64::MAX] {
            assert_eq!(IsDir.read_at(&mut [], offset), Err(Errno::IsADirectory));
            assert_eq!(IsDir.write_at(&[], offset), Err(Errno::IsADirectory));
        }
    }
}
