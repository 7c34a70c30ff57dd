//! # Default Templates
//!
//! Stateless building blocks that answer node operations a node kind does not
//! support, each with the errno a POSIX client expects for that situation.
//!
//! | Template | Covers | Error |
//! |----------|--------|-------|
//! | [`NotSymlinkFile`] | [`FileReadlink`](crate::FileReadlink) | `EINVAL` |
//! | [`NotDirectoryFile`] | [`FileDir`](crate::FileDir) | `ENOTDIR` |
//! | [`ReadOnlyFile`] | [`FileMutate`](crate::FileMutate), [`FileWrite`](crate::FileWrite) | `EROFS` |
//! | | [`FileFlush`](crate::FileFlush) | success |
//! | | [`FileXattr`](crate::FileXattr) | `ENOSYS` |
//! | [`ReadOnlyDir`] | [`FileDir`](crate::FileDir), [`FileMutate`](crate::FileMutate) | `EROFS` |
//! | | [`FileXattr`](crate::FileXattr) | `ENOSYS` |
//! | [`IsDir`] | [`FileRead`](crate::FileRead), [`FileWrite`](crate::FileWrite) | `EISDIR` |
//!
//! ## Choosing Templates
//!
//! Pick the templates matching the node's real kind and the filesystem's
//! policy:
//!
//! ```text
//! read-only regular file:  NotSymlinkFile + NotDirectoryFile + ReadOnlyFile
//! read-only directory:     NotSymlinkFile + ReadOnlyDir + IsDir (+ flush)
//! read-only symlink:       NotDirectoryFile + ReadOnlyFile
//! ```
//!
//! Never put `NotDirectoryFile` on a directory or `ReadOnlyDir` on a file.
//! Templates are attached with [`delegate_file!`](crate::delegate_file).

mod is_dir;
mod not_directory;
mod not_symlink;
mod read_only_dir;
mod read_only_file;

pub use is_dir::IsDir;
pub use not_directory::NotDirectoryFile;
pub use not_symlink::NotSymlinkFile;
pub use read_only_dir::ReadOnlyDir;
pub use read_only_file::ReadOnlyFile;
