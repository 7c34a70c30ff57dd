//! Mutations of a node as a whole.

use crate::{Errno, File, SetAttr, SetAttrMask};

/// Operations that change a node itself rather than its contents or
/// children: syncing, attribute changes, removal and renaming.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`. Methods use `&self`; nodes that
/// really mutate use interior mutability.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn FileMutate`.
pub trait FileMutate: Send + Sync {
    /// Flush data and metadata to stable storage, like `fsync(2)`.
    ///
    /// # Errors
    ///
    /// - [`Errno::ReadOnlyFilesystem`] on a read-only node
    fn fsync(&self) -> Result<(), Errno>;

    /// Change the attributes selected by `valid` to the values in `attr`.
    ///
    /// # Errors
    ///
    /// - [`Errno::ReadOnlyFilesystem`] on a read-only node
    fn set_attr(&self, valid: SetAttrMask, attr: SetAttr) -> Result<(), Errno>;

    /// Remove this node from its parent (`Tremove`).
    ///
    /// # Errors
    ///
    /// - [`Errno::ReadOnlyFilesystem`] on a read-only node
    fn remove(&self) -> Result<(), Errno>;

    /// Move this node into `directory` under `name` (`Trename`).
    ///
    /// # Errors
    ///
    /// - [`Errno::ReadOnlyFilesystem`] on a read-only node
    fn rename(&self, directory: &dyn File, name: &str) -> Result<(), Errno>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_mutate_is_object_safe() {
        fn _check(_: &dyn FileMutate) {}
    }

    #[test]
    fn file_mutate_requires_send_sync() {
        fn _assert_send_sync<T: Send + Sync>() {}
        fn _check<T: FileMutate>() {
            _assert_send_sync::<T>();
        }
    }
}
