//! # ninep-templates
//!
//! Composable default behaviors for **9P2000.L file server nodes**.
//!
//! A 9P server exposes one uniform node interface (read, write, create, link,
//! rename, extended attributes, directory listing, ...) for every kind of
//! node, even though most node kinds support few of those operations. This
//! crate provides the node contract as a set of component traits and small
//! stateless templates that answer the unsupported parts with the errno a
//! POSIX client expects.
//!
//! It contains no I/O, no wire encoding and no session handling; those belong
//! to the protocol layer that drives the nodes.
//!
//! ---
//!
//! ## Quick Start
//!
//! Implement the operations your node really supports and delegate the rest:
//!
//! ```rust
//! use ninep_templates::{delegate_file, Errno, File, FileMode, FileRead, Gid, Uid};
//! use ninep_templates::{NotDirectoryFile, NotSymlinkFile, ReadOnlyFile};
//!
//! /// A read-only file serving a static string.
//! struct Version;
//!
//! impl FileRead for Version {
//!     fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Errno> {
//!         let data = b"9P2000.L\n";
//!         let start = usize::try_from(offset).unwrap_or(usize::MAX).min(data.len());
//!         let n = buf.len().min(data.len() - start);
//!         buf[..n].copy_from_slice(&data[start..start + n]);
//!         Ok(n)
//!     }
//! }
//!
//! delegate_file!(Version {
//!     NotSymlinkFile => FileReadlink;
//!     NotDirectoryFile => FileDir;
//!     ReadOnlyFile => FileMutate, FileFlush, FileWrite, FileXattr;
//! });
//!
//! fn serve(node: &dyn File) {
//!     let mkdir = node.mkdir("x", FileMode(0o755), Uid(0), Gid(0));
//!     assert_eq!(mkdir, Err(Errno::NotADirectory));
//!     assert_eq!(node.write_at(b"x", 0), Err(Errno::ReadOnlyFilesystem));
//!     assert_eq!(node.flush(), Ok(()));
//! }
//! serve(&Version);
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`File`] | The complete node contract (all component traits) |
//! | [`Errno`] | Closed error vocabulary with Linux wire codes |
//! | [`NotSymlinkFile`] | `readlink` fails with `EINVAL` |
//! | [`NotDirectoryFile`] | Directory operations fail with `ENOTDIR` |
//! | [`ReadOnlyFile`] | File mutations fail with `EROFS`, flush succeeds, xattrs `ENOSYS` |
//! | [`ReadOnlyDir`] | Directory and self mutations fail with `EROFS`, xattrs `ENOSYS` |
//! | [`IsDir`] | Byte-stream reads and writes fail with `EISDIR` |
//! | [`delegate_file!`] | Attach templates to a node type |
//! | [`TraceLayer`] | Log every operation outcome |
//!
//! ---
//!
//! ## Error Selection
//!
//! The errno says *why* an operation is illegal:
//!
//! | Operation | Condition | Error |
//! |-----------|-----------|-------|
//! | `readlink` | node is not a symlink | `EINVAL` |
//! | `create`, `mkdir`, `symlink`, `link`, `mknod`, `rename_at`, `unlink_at`, `readdir` | node is not a directory | `ENOTDIR` |
//! | same operations | directory on a read-only filesystem | `EROFS` |
//! | `fsync`, `set_attr`, `remove`, `rename`, `write_at` | read-only file | `EROFS` |
//! | `flush` | read-only file | success |
//! | xattr operations | read-only file or directory | `ENOSYS` |
//! | `read_at`, `write_at` | node is a directory | `EISDIR` |
//!
//! ---
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` and take `&self`. The templates hold no
//! state and can be called from any number of threads at once.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`Errno`], [`Qid`], [`Dirent`], [`SetAttr`], etc. |

// Private modules
mod delegate;
mod error;
mod layer;
mod templates;
mod traits;
mod types;

#[cfg(test)]
mod testing;

// Public re-exports - error types
pub use error::{Errno, UnknownErrno};

// Public re-exports - protocol value types
pub use types::{
    Dirent, Dirents, FileMode, Gid, OpenFlags, Qid, QidType, SetAttr, SetAttrMask, Uid, XattrFlags,
};

// Public re-exports - node contract
pub use traits::{
    File, FileDir, FileFlush, FileMutate, FileRead, FileReadlink, FileWrite, FileXattr,
};

// Public re-exports - default templates
pub use templates::{IsDir, NotDirectoryFile, NotSymlinkFile, ReadOnlyDir, ReadOnlyFile};

// Public re-exports - middleware
pub use layer::{Layer, LayerExt, TraceLayer, Traced};
