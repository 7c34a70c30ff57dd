//! # Layers
//!
//! Tower-style middleware composition for nodes.
//!
//! ## Overview
//!
//! A [`Layer`] wraps a node to add behavior around its operations without
//! changing what they return. The crate ships one layer, [`TraceLayer`],
//! which records every operation outcome through the [`log`] facade.
//!
//! ```text
//! Node ──▶ Layer::layer() ──▶ Wrapped Node
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ninep_templates::{delegate_file, Errno, FileMutate, FileRead, LayerExt, TraceLayer};
//! use ninep_templates::{NotDirectoryFile, NotSymlinkFile, ReadOnlyFile};
//!
//! struct Empty;
//!
//! impl FileRead for Empty {
//!     fn read_at(&self, _: &mut [u8], _: u64) -> Result<usize, Errno> {
//!         Ok(0)
//!     }
//! }
//!
//! delegate_file!(Empty {
//!     NotSymlinkFile => FileReadlink;
//!     NotDirectoryFile => FileDir;
//!     ReadOnlyFile => FileMutate, FileFlush, FileWrite, FileXattr;
//! });
//!
//! let node = Empty.layer(TraceLayer::new("/empty"));
//! // logs "/empty: remove -> EROFS" at debug level
//! assert_eq!(node.remove(), Err(Errno::ReadOnlyFilesystem));
//! ```

use crate::{
    Dirents, Errno, File, FileDir, FileFlush, FileMode, FileMutate, FileRead, FileReadlink,
    FileWrite, FileXattr, Gid, OpenFlags, Qid, SetAttr, SetAttrMask, Uid, XattrFlags,
};

/// A layer that wraps a node to add functionality.
///
/// Inspired by Tower's `Layer` trait, this enables composable middleware.
///
/// # Design Notes
///
/// - `layer(self, node)` consumes both the layer and the node
/// - Layers are compile-time composition; `Layer` is not object-safe
/// - Middleware implements each component trait its inner node implements,
///   so a wrapped [`File`] is still a [`File`]
pub trait Layer<N> {
    /// The resulting node type after applying this layer.
    type Node;

    /// Wrap the given node with this layer's functionality.
    fn layer(self, node: N) -> Self::Node;
}

/// Extension trait for fluent layer composition.
///
/// # Example
///
/// ```rust
/// use ninep_templates::{File, Layer, LayerExt};
///
/// fn add_middleware<N, L>(node: N, layer: L) -> L::Node
/// where
///     N: File,
///     L: Layer<N>,
/// {
///     node.layer(layer)
/// }
/// ```
pub trait LayerExt: File + Sized {
    /// Apply a layer to this node.
    fn layer<L: Layer<Self>>(self, layer: L) -> L::Node {
        layer.layer(self)
    }
}

// Blanket implementation - any File gets LayerExt for free
impl<N: File> LayerExt for N {}

/// Layer that logs every operation on the wrapped node.
///
/// Denials are logged at `debug` with the errno name, successes at `trace`.
/// Each record starts with the layer's label, typically the node's path.
#[derive(Debug, Clone)]
pub struct TraceLayer {
    label: String,
}

impl TraceLayer {
    /// Create a layer whose records are prefixed with `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl<N> Layer<N> for TraceLayer {
    type Node = Traced<N>;

    fn layer(self, node: N) -> Self::Node {
        Traced {
            inner: node,
            label: self.label,
        }
    }
}

/// A node wrapped by [`TraceLayer`].
///
/// Results are passed through unchanged.
#[derive(Debug)]
pub struct Traced<N> {
    inner: N,
    label: String,
}

impl<N> Traced<N> {
    /// The label prefixing this node's log records.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The wrapped node.
    pub fn inner(&self) -> &N {
        &self.inner
    }

    /// Unwrap, discarding the label.
    pub fn into_inner(self) -> N {
        self.inner
    }

    fn record<T>(&self, op: &'static str, result: Result<T, Errno>) -> Result<T, Errno> {
        match &result {
            Ok(_) => log::trace!("{}: {} ok", self.label, op),
            Err(errno) => log::debug!("{}: {} -> {}", self.label, op, errno.name()),
        }
        result
    }
}

impl<N: FileReadlink> FileReadlink for Traced<N> {
    fn readlink(&self) -> Result<String, Errno> {
        self.record("readlink", self.inner.readlink())
    }
}

impl<N: FileDir> FileDir for Traced<N> {
    fn create(
        &self,
        name: &str,
        flags: OpenFlags,
        permissions: FileMode,
        uid: Uid,
        gid: Gid,
    ) -> Result<(Box<dyn File>, Qid, u32), Errno> {
        self.record(
            "create",
            self.inner.create(name, flags, permissions, uid, gid),
        )
    }

    fn mkdir(&self, name: &str, permissions: FileMode, uid: Uid, gid: Gid) -> Result<Qid, Errno> {
        self.record("mkdir", self.inner.mkdir(name, permissions, uid, gid))
    }

    fn symlink(&self, oldname: &str, newname: &str, uid: Uid, gid: Gid) -> Result<Qid, Errno> {
        self.record("symlink", self.inner.symlink(oldname, newname, uid, gid))
    }

    fn link(&self, target: &dyn File, newname: &str) -> Result<(), Errno> {
        self.record("link", self.inner.link(target, newname))
    }

    fn mknod(
        &self,
        name: &str,
        mode: FileMode,
        major: u32,
        minor: u32,
        uid: Uid,
        gid: Gid,
    ) -> Result<Qid, Errno> {
        self.record(
            "mknod",
            self.inner.mknod(name, mode, major, minor, uid, gid),
        )
    }

    fn rename_at(&self, oldname: &str, newdir: &dyn File, newname: &str) -> Result<(), Errno> {
        self.record("rename_at", self.inner.rename_at(oldname, newdir, newname))
    }

    fn unlink_at(&self, name: &str, flags: u32) -> Result<(), Errno> {
        self.record("unlink_at", self.inner.unlink_at(name, flags))
    }

    fn readdir(&self, offset: u64, count: u32) -> Result<Dirents, Errno> {
        self.record("readdir", self.inner.readdir(offset, count))
    }
}

impl<N: FileMutate> FileMutate for Traced<N> {
    fn fsync(&self) -> Result<(), Errno> {
        self.record("fsync", self.inner.fsync())
    }

    fn set_attr(&self, valid: SetAttrMask, attr: SetAttr) -> Result<(), Errno> {
        self.record("set_attr", self.inner.set_attr(valid, attr))
    }

    fn remove(&self) -> Result<(), Errno> {
        self.record("remove", self.inner.remove())
    }

    fn rename(&self, directory: &dyn File, name: &str) -> Result<(), Errno> {
        self.record("rename", self.inner.rename(directory, name))
    }
}

impl<N: FileFlush> FileFlush for Traced<N> {
    fn flush(&self) -> Result<(), Errno> {
        self.record("flush", self.inner.flush())
    }
}

impl<N: FileRead> FileRead for Traced<N> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Errno> {
        self.record("read_at", self.inner.read_at(buf, offset))
    }
}

impl<N: FileWrite> FileWrite for Traced<N> {
    fn write_at(&self, data: &[u8], offset: u64) -> Result<usize, Errno> {
        self.record("write_at", self.inner.write_at(data, offset))
    }
}

impl<N: FileXattr> FileXattr for Traced<N> {
    fn set_xattr(&self, name: &str, data: &[u8], flags: XattrFlags) -> Result<(), Errno> {
        self.record("set_xattr", self.inner.set_xattr(name, data, flags))
    }

    fn get_xattr(&self, name: &str) -> Result<Vec<u8>, Errno> {
        self.record("get_xattr", self.inner.get_xattr(name))
    }

    fn list_xattrs(&self) -> Result<Vec<String>, Errno> {
        self.record("list_xattrs", self.inner.list_xattrs())
    }

    fn remove_xattr(&self, name: &str) -> Result<(), Errno> {
        self.record("remove_xattr", self.inner.remove_xattr(name))
    }
}
