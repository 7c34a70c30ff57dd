//! # Node Contract
//!
//! The operations a 9P2000.L server performs on a node, split into component
//! traits.
//!
//! ## Components
//!
//! The split follows the default templates: each template implements whole
//! component traits, never half of one.
//!
//! | Trait | Operations | Default templates |
//! |-------|------------|-------------------|
//! | [`FileReadlink`] | `readlink` | `NotSymlinkFile` |
//! | [`FileDir`] | `create`, `mkdir`, `symlink`, `link`, `mknod`, `rename_at`, `unlink_at`, `readdir` | `NotDirectoryFile`, `ReadOnlyDir` |
//! | [`FileMutate`] | `fsync`, `set_attr`, `remove`, `rename` | `ReadOnlyFile`, `ReadOnlyDir` |
//! | [`FileFlush`] | `flush` | `ReadOnlyFile` |
//! | [`FileRead`] | `read_at` | `IsDir` |
//! | [`FileWrite`] | `write_at` | `ReadOnlyFile`, `IsDir` |
//! | [`FileXattr`] | `set_xattr`, `get_xattr`, `list_xattrs`, `remove_xattr` | `ReadOnlyFile`, `ReadOnlyDir` |
//!
//! ## Blanket Implementation
//!
//! [`File`] is implemented for every type implementing all seven components.
//! You never implement it directly.
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`.
//!
//! ## Object Safety
//!
//! All traits are object-safe. The protocol layer holds nodes as
//! `Box<dyn File>`:
//!
//! ```rust
//! use ninep_templates::File;
//!
//! fn target(node: &dyn File) -> Option<String> {
//!     node.readlink().ok()
//! }
//! ```

mod file_dir;
mod file_flush;
mod file_mutate;
mod file_read;
mod file_readlink;
mod file_write;
mod file_xattr;

pub use file_dir::FileDir;
pub use file_flush::FileFlush;
pub use file_mutate::FileMutate;
pub use file_read::FileRead;
pub use file_readlink::FileReadlink;
pub use file_write::FileWrite;
pub use file_xattr::FileXattr;

/// A complete protocol node.
///
/// Combines every component trait. Implement the components, by hand for
/// operations the node really supports and through [`delegate_file!`] for the
/// rest, and `File` follows.
///
/// # Example
///
/// ```rust
/// use ninep_templates::{delegate_file, Errno, File, FileFlush};
/// use ninep_templates::{IsDir, NotSymlinkFile, ReadOnlyDir};
///
/// /// An empty directory on a read-only export.
/// struct Empty;
///
/// impl FileFlush for Empty {
///     fn flush(&self) -> Result<(), Errno> {
///         Ok(())
///     }
/// }
///
/// delegate_file!(Empty {
///     NotSymlinkFile => FileReadlink;
///     ReadOnlyDir => FileDir, FileMutate, FileXattr;
///     IsDir => FileRead, FileWrite;
/// });
///
/// fn check(node: &dyn File) {
///     assert_eq!(node.readlink(), Err(Errno::InvalidArgument));
///     assert_eq!(node.read_at(&mut [0; 4], 0), Err(Errno::IsADirectory));
///     assert_eq!(node.flush(), Ok(()));
/// }
/// check(&Empty);
/// ```
pub trait File:
    FileReadlink + FileDir + FileMutate + FileFlush + FileRead + FileWrite + FileXattr
{
}

// Blanket implementation - any type implementing all components gets File for free
impl<T> File for T where
    T: FileReadlink + FileDir + FileMutate + FileFlush + FileRead + FileWrite + FileXattr
{
}
