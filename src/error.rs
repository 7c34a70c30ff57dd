//! Error vocabulary for node operations.

use std::io;

/// Errors a node operation can report to the protocol layer.
///
/// Each variant carries the Linux errno value the 9P2000.L `Rlerror` message
/// puts on the wire. The variant records *why* an operation is illegal, not
/// only *that* it is:
///
/// | Variant | Code | Meaning |
/// |---------|------|---------|
/// | [`InvalidArgument`](Errno::InvalidArgument) | `EINVAL` (22) | wrong node kind for a symlink query |
/// | [`NotADirectory`](Errno::NotADirectory) | `ENOTDIR` (20) | directory operation on a non-directory |
/// | [`IsADirectory`](Errno::IsADirectory) | `EISDIR` (21) | byte-stream operation on a directory |
/// | [`ReadOnlyFilesystem`](Errno::ReadOnlyFilesystem) | `EROFS` (30) | right kind, but mutation is forbidden |
/// | [`NotImplemented`](Errno::NotImplemented) | `ENOSYS` (38) | the node does not implement the operation |
///
/// # Examples
///
/// ```rust
/// use ninep_templates::Errno;
///
/// let err = Errno::ReadOnlyFilesystem;
/// assert_eq!(err.code(), 30);
/// assert_eq!(err.to_string(), "read-only file system");
/// assert_eq!(Errno::from_code(30), Some(err));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Errno {
    /// `EINVAL`: the argument is invalid for this object.
    #[error("invalid argument")]
    InvalidArgument,

    /// `ENOTDIR`: the node is not a directory.
    #[error("not a directory")]
    NotADirectory,

    /// `EISDIR`: the node is a directory.
    #[error("is a directory")]
    IsADirectory,

    /// `EROFS`: the filesystem is read-only.
    #[error("read-only file system")]
    ReadOnlyFilesystem,

    /// `ENOSYS`: the operation is not implemented.
    #[error("function not implemented")]
    NotImplemented,
}

impl Errno {
    /// Every variant, in wire-code order.
    pub const ALL: [Errno; 5] = [
        Errno::NotADirectory,
        Errno::IsADirectory,
        Errno::InvalidArgument,
        Errno::ReadOnlyFilesystem,
        Errno::NotImplemented,
    ];

    /// The Linux errno value sent in `Rlerror`.
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            Errno::InvalidArgument => 22,
            Errno::NotADirectory => 20,
            Errno::IsADirectory => 21,
            Errno::ReadOnlyFilesystem => 30,
            Errno::NotImplemented => 38,
        }
    }

    /// Map a wire errno value back to a variant.
    ///
    /// Returns `None` for codes outside this vocabulary.
    pub const fn from_code(code: u32) -> Option<Errno> {
        match code {
            22 => Some(Errno::InvalidArgument),
            20 => Some(Errno::NotADirectory),
            21 => Some(Errno::IsADirectory),
            30 => Some(Errno::ReadOnlyFilesystem),
            38 => Some(Errno::NotImplemented),
            _ => None,
        }
    }

    /// The symbolic constant name, e.g. `"EROFS"`.
    pub const fn name(self) -> &'static str {
        match self {
            Errno::InvalidArgument => "EINVAL",
            Errno::NotADirectory => "ENOTDIR",
            Errno::IsADirectory => "EISDIR",
            Errno::ReadOnlyFilesystem => "EROFS",
            Errno::NotImplemented => "ENOSYS",
        }
    }
}

impl From<Errno> for io::Error {
    fn from(errno: Errno) -> Self {
        // Codes are all small positive values, so the cast is lossless.
        io::Error::from_raw_os_error(errno.code() as i32)
    }
}

/// An [`io::Error`] that carries no errno from the node vocabulary.
///
/// Holds the raw OS code, if the error had one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("errno outside the node vocabulary: {0:?}")]
pub struct UnknownErrno(pub Option<i32>);

impl TryFrom<&io::Error> for Errno {
    type Error = UnknownErrno;

    /// Recover the variant from an OS-level error carrying one of our codes.
    fn try_from(error: &io::Error) -> Result<Self, Self::Error> {
        let raw = error.raw_os_error();
        raw.and_then(|code| u32::try_from(code).ok())
            .and_then(Errno::from_code)
            .ok_or(UnknownErrno(raw))
    }
}
