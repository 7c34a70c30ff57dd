//! Buffer flushing on clunk.

use crate::Errno;

/// Flush in-memory buffers, as requested by `Tflush`/clunk.
///
/// Weaker than [`FileMutate::fsync`](crate::FileMutate::fsync): it does not
/// ask for anything to reach stable storage.
pub trait FileFlush: Send + Sync {
    /// Flush pending buffered state.
    fn flush(&self) -> Result<(), Errno>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_flush_is_object_safe() {
        fn _check(_: &dyn FileFlush) {}
    }
}
