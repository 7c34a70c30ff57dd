//! Protocol value types used by the node contract.
//!
//! These are thin newtypes over the integers 9P2000.L puts on the wire. They
//! carry no behavior beyond constant lookups; encoding and decoding belong to
//! the protocol layer.

/// Bits of a [`Qid`] type byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QidType(pub u8);

impl QidType {
    /// Directory.
    pub const DIR: Self = Self(0x80);
    /// Append-only file.
    pub const APPEND_ONLY: Self = Self(0x40);
    /// Exclusive-use file.
    pub const EXCLUSIVE: Self = Self(0x20);
    /// Mounted channel.
    pub const MOUNT: Self = Self(0x10);
    /// Authentication file.
    pub const AUTH: Self = Self(0x08);
    /// Not backed up.
    pub const TEMPORARY: Self = Self(0x04);
    /// Symbolic link.
    pub const SYMLINK: Self = Self(0x02);
    /// Hard link.
    pub const LINK: Self = Self(0x01);
    /// Plain file.
    pub const REGULAR: Self = Self(0x00);

    /// Returns `true` if every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` for directories.
    #[inline]
    pub const fn is_dir(self) -> bool {
        self.contains(Self::DIR)
    }

    /// Returns `true` for symbolic links.
    #[inline]
    pub const fn is_symlink(self) -> bool {
        self.contains(Self::SYMLINK)
    }
}

/// Server-side unique identity of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qid {
    /// Kind of node.
    pub typ: QidType,
    /// Version, bumped when the node changes.
    pub version: u32,
    /// Unique path number.
    pub path: u64,
}

/// Open mode flags from `Tlopen`/`Tlcreate` (Linux `O_*` values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenFlags(pub u32);

impl OpenFlags {
    /// Open for reading only.
    pub const READ_ONLY: Self = Self(0);
    /// Open for writing only.
    pub const WRITE_ONLY: Self = Self(1);
    /// Open for reading and writing.
    pub const READ_WRITE: Self = Self(2);
    /// Mask selecting the access mode.
    pub const MODE_MASK: Self = Self(3);
    /// Truncate on open.
    pub const TRUNCATE: Self = Self(0o1000);
}

/// File type and permission bits (Linux `st_mode`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileMode(pub u32);

impl FileMode {
    /// Mask selecting the file type.
    pub const TYPE_MASK: Self = Self(0o170000);
    /// Socket.
    pub const SOCKET: Self = Self(0o140000);
    /// Symbolic link.
    pub const SYMLINK: Self = Self(0o120000);
    /// Regular file.
    pub const REGULAR: Self = Self(0o100000);
    /// Block device.
    pub const BLOCK_DEVICE: Self = Self(0o060000);
    /// Directory.
    pub const DIRECTORY: Self = Self(0o040000);
    /// Character device.
    pub const CHARACTER_DEVICE: Self = Self(0o020000);
    /// Named pipe.
    pub const NAMED_PIPE: Self = Self(0o010000);
    /// Mask selecting permission, setuid, setgid and sticky bits.
    pub const PERMISSIONS_MASK: Self = Self(0o7777);
}

/// User identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(pub u32);

impl Uid {
    /// "No user", used when the client leaves the field unset.
    pub const NONE: Self = Self(u32::MAX);
}

/// Group identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gid(pub u32);

impl Gid {
    /// "No group", used when the client leaves the field unset.
    pub const NONE: Self = Self(u32::MAX);
}

/// Which fields of a [`SetAttr`] are valid (the `Tsetattr` `valid` word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetAttrMask(pub u32);

impl SetAttrMask {
    /// Change permissions.
    pub const MODE: Self = Self(0x0001);
    /// Change owner.
    pub const UID: Self = Self(0x0002);
    /// Change group.
    pub const GID: Self = Self(0x0004);
    /// Truncate or extend.
    pub const SIZE: Self = Self(0x0008);
    /// Set access time to now.
    pub const ATIME: Self = Self(0x0010);
    /// Set modification time to now.
    pub const MTIME: Self = Self(0x0020);
    /// Set change time to now.
    pub const CTIME: Self = Self(0x0040);
    /// Set access time to the given value.
    pub const ATIME_SET: Self = Self(0x0080);
    /// Set modification time to the given value.
    pub const MTIME_SET: Self = Self(0x0100);

    /// Returns `true` if every bit of `other` is set.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no field is selected.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Union of two masks.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// New attribute values carried by `Tsetattr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetAttr {
    /// New permission bits.
    pub permissions: FileMode,
    /// New owner.
    pub uid: Option<Uid>,
    /// New group.
    pub gid: Option<Gid>,
    /// New size in bytes.
    pub size: u64,
    /// Access time, seconds part.
    pub atime_seconds: u64,
    /// Access time, nanoseconds part.
    pub atime_nanoseconds: u64,
    /// Modification time, seconds part.
    pub mtime_seconds: u64,
    /// Modification time, nanoseconds part.
    pub mtime_nanoseconds: u64,
}

/// Flags for `Txattrcreate` (Linux `XATTR_*` values).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct XattrFlags(pub u32);

impl XattrFlags {
    /// Fail if the attribute already exists.
    pub const CREATE: Self = Self(1);
    /// Fail if the attribute does not exist.
    pub const REPLACE: Self = Self(2);
}

/// One directory entry returned by `readdir`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dirent {
    /// Identity of the entry.
    pub qid: Qid,
    /// Offset to pass to the next `readdir` to continue after this entry.
    pub offset: u64,
    /// Kind of entry, duplicated from the qid for `d_type`.
    pub typ: QidType,
    /// Entry name, without any path separators.
    pub name: String,
}

/// A batch of directory entries.
pub type Dirents = Vec<Dirent>;
