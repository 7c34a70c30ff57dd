//! Symbolic link target resolution.

use crate::Errno;

/// Resolve a node as a symbolic link.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FileReadlink`.
pub trait FileReadlink: Send + Sync {
    /// Return the link target.
    ///
    /// # Errors
    ///
    /// - [`Errno::InvalidArgument`] if the node is not a symlink
    fn readlink(&self) -> Result<String, Errno>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_readlink_is_object_safe() {
        fn _check(_: &dyn FileReadlink) {}
    }

    #[test]
    fn file_readlink_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync>() {}
        fn _check<T: FileReadlink>() {
            _assert_send_sync::<T>();
        }
    }

    #[test]
    fn real_symlink_returns_target() {
        struct Link(&'static str);

        impl FileReadlink for Link {
            fn readlink(&self) -> Result<String, Errno> {
                Ok(self.0.to_string())
            }
        }

        assert_eq!(Link("../target").readlink(), Ok("../target".to_string()));
    }
}
