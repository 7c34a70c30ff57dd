//! Extended attribute operations on a node.
//!
//! Extended attributes are name-value pairs attached to a node, independent
//! of its byte stream. Names follow the Linux namespace convention:
//!
//! - `user.*` - User-defined attributes
//! - `system.*` - System-defined attributes
//! - `security.*` - Security-related attributes
//! - `trusted.*` - Trusted attributes (require privileges)
//!
//! Nodes that do not support them at all report [`Errno::NotImplemented`],
//! as the read-only templates do.

use crate::{Errno, XattrFlags};

/// Extended attribute operations (`Txattrwalk`/`Txattrcreate`).
///
/// # Example
///
/// ```rust
/// use ninep_templates::{Errno, FileXattr};
///
/// fn user_tag<N: FileXattr>(node: &N) -> Result<String, Errno> {
///     let value = node.get_xattr("user.tag")?;
///     Ok(String::from_utf8_lossy(&value).into_owned())
/// }
/// ```
pub trait FileXattr: Send + Sync {
    /// Set attribute `name` to `data`.
    ///
    /// `flags` may ask for create-only or replace-only semantics.
    ///
    /// # Errors
    ///
    /// - [`Errno::NotImplemented`] if the node has no xattr support
    fn set_xattr(&self, name: &str, data: &[u8], flags: XattrFlags) -> Result<(), Errno>;

    /// Get the value of attribute `name`.
    ///
    /// # Errors
    ///
    /// - [`Errno::NotImplemented`] if the node has no xattr support
    fn get_xattr(&self, name: &str) -> Result<Vec<u8>, Errno>;

    /// List all attribute names.
    ///
    /// # Errors
    ///
    /// - [`Errno::NotImplemented`] if the node has no xattr support
    fn list_xattrs(&self) -> Result<Vec<String>, Errno>;

    /// Remove attribute `name`.
    ///
    /// # Errors
    ///
    /// - [`Errno::NotImplemented`] if the node has no xattr support
    fn remove_xattr(&self, name: &str) -> Result<(), Errno>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReadOnlyDir, ReadOnlyFile};

    #[test]
    fn file_xattr_is_object_safe() {
        fn _check(_: &dyn FileXattr) {}
    }

    #[test]
    fn read_only_nodes_have_no_xattrs() {
        let nodes: [&dyn FileXattr; 2] = [&ReadOnlyFile, &ReadOnlyDir];
        for node in nodes {
            assert_eq!(
                node.set_xattr("user.tag", b"test", XattrFlags::CREATE),
                Err(Errno::NotImplemented)
            );
            assert_eq!(node.get_xattr("user.tag"), Err(Errno::NotImplemented));
            assert_eq!(node.list_xattrs(), Err(Errno::NotImplemented));
            assert_eq!(node.remove_xattr("user.tag"), Err(Errno::NotImplemented));
        }
    }

    #[test]
    fn xattr_helpers_propagate_denial() {
        fn user_tag<N: FileXattr + ?Sized>(node: &N) -> Result<String, Errno> {
            let value = node.get_xattr("user.tag")?;
            Ok(String::from_utf8_lossy(&value).into_owned())
        }

        assert_eq!(user_tag(&ReadOnlyFile), Err(Errno::NotImplemented));
    }
}
