//! # Template Composition
//!
//! [`delegate_file!`] attaches default templates to a node type by
//! generating forwarding implementations of whole component traits.
//!
//! A forwarded component is an ordinary trait impl, so the compiler rejects
//! a node that both forwards a component and implements it by hand
//! (`E0119`, conflicting implementations). A template can therefore never
//! shadow a real implementation, and the precedence is visible at the
//! definition site:
//!
//! ```compile_fail
//! use ninep_templates::{delegate_file, Errno, FileReadlink, NotSymlinkFile};
//!
//! struct Link;
//!
//! impl FileReadlink for Link {
//!     fn readlink(&self) -> Result<String, Errno> {
//!         Ok("target".to_string())
//!     }
//! }
//!
//! // error[E0119]: conflicting implementations of trait `FileReadlink`
//! delegate_file!(Link {
//!     NotSymlinkFile => FileReadlink;
//! });
//! ```

/// Forward component traits of a node type to default templates.
///
/// Each line names a template (any unit struct path) followed by the
/// component traits it should answer for the node:
///
/// ```rust
/// use ninep_templates::{delegate_file, Errno, FileRead, File};
/// use ninep_templates::{NotDirectoryFile, NotSymlinkFile, ReadOnlyFile};
///
/// /// A read-only file whose contents are fixed at build time.
/// struct Motd(&'static [u8]);
///
/// impl FileRead for Motd {
///     fn read_at(&self, buf: &mut [u8], offset: u64) -> Result<usize, Errno> {
///         let start = usize::try_from(offset).unwrap_or(usize::MAX).min(self.0.len());
///         let n = buf.len().min(self.0.len() - start);
///         buf[..n].copy_from_slice(&self.0[start..start + n]);
///         Ok(n)
///     }
/// }
///
/// delegate_file!(Motd {
///     NotSymlinkFile => FileReadlink;
///     NotDirectoryFile => FileDir;
///     ReadOnlyFile => FileMutate, FileFlush, FileWrite, FileXattr;
/// });
///
/// let node: Box<dyn File> = Box::new(Motd(b"hello"));
/// let mut buf = [0; 8];
/// assert_eq!(node.read_at(&mut buf, 0), Ok(5));
/// assert_eq!(node.write_at(b"x", 0), Err(Errno::ReadOnlyFilesystem));
/// assert_eq!(node.readdir(0, 4096), Err(Errno::NotADirectory));
/// ```
///
/// Component names are matched literally: `FileReadlink`, `FileDir`,
/// `FileMutate`, `FileFlush`, `FileRead`, `FileWrite` and `FileXattr`. They
/// do not need to be in scope. Forwarding a component the template does not
/// implement fails to compile.
#[macro_export]
macro_rules! delegate_file {
    (@component FileReadlink, $node:ty, $block:path) => {
        impl $crate::FileReadlink for $node {
            fn readlink(&self) -> ::core::result::Result<::std::string::String, $crate::Errno> {
                <$block as $crate::FileReadlink>::readlink(&$block)
            }
        }
    };
    (@component FileDir, $node:ty, $block:path) => {
        impl $crate::FileDir for $node {
            fn create(
                &self,
                name: &str,
                flags: $crate::OpenFlags,
                permissions: $crate::FileMode,
                uid: $crate::Uid,
                gid: $crate::Gid,
            ) -> ::core::result::Result<
                (::std::boxed::Box<dyn $crate::File>, $crate::Qid, u32),
                $crate::Errno,
            > {
                <$block as $crate::FileDir>::create(&$block, name, flags, permissions, uid, gid)
            }

            fn mkdir(
                &self,
                name: &str,
                permissions: $crate::FileMode,
                uid: $crate::Uid,
                gid: $crate::Gid,
            ) -> ::core::result::Result<$crate::Qid, $crate::Errno> {
                <$block as $crate::FileDir>::mkdir(&$block, name, permissions, uid, gid)
            }

            fn symlink(
                &self,
                oldname: &str,
                newname: &str,
                uid: $crate::Uid,
                gid: $crate::Gid,
            ) -> ::core::result::Result<$crate::Qid, $crate::Errno> {
                <$block as $crate::FileDir>::symlink(&$block, oldname, newname, uid, gid)
            }

            fn link(
                &self,
                target: &dyn $crate::File,
                newname: &str,
            ) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileDir>::link(&$block, target, newname)
            }

            fn mknod(
                &self,
                name: &str,
                mode: $crate::FileMode,
                major: u32,
                minor: u32,
                uid: $crate::Uid,
                gid: $crate::Gid,
            ) -> ::core::result::Result<$crate::Qid, $crate::Errno> {
                <$block as $crate::FileDir>::mknod(&$block, name, mode, major, minor, uid, gid)
            }

            fn rename_at(
                &self,
                oldname: &str,
                newdir: &dyn $crate::File,
                newname: &str,
            ) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileDir>::rename_at(&$block, oldname, newdir, newname)
            }

            fn unlink_at(&self, name: &str, flags: u32) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileDir>::unlink_at(&$block, name, flags)
            }

            fn readdir(
                &self,
                offset: u64,
                count: u32,
            ) -> ::core::result::Result<$crate::Dirents, $crate::Errno> {
                <$block as $crate::FileDir>::readdir(&$block, offset, count)
            }
        }
    };
    (@component FileMutate, $node:ty, $block:path) => {
        impl $crate::FileMutate for $node {
            fn fsync(&self) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileMutate>::fsync(&$block)
            }

            fn set_attr(
                &self,
                valid: $crate::SetAttrMask,
                attr: $crate::SetAttr,
            ) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileMutate>::set_attr(&$block, valid, attr)
            }

            fn remove(&self) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileMutate>::remove(&$block)
            }

            fn rename(
                &self,
                directory: &dyn $crate::File,
                name: &str,
            ) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileMutate>::rename(&$block, directory, name)
            }
        }
    };
    (@component FileFlush, $node:ty, $block:path) => {
        impl $crate::FileFlush for $node {
            fn flush(&self) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileFlush>::flush(&$block)
            }
        }
    };
    (@component FileRead, $node:ty, $block:path) => {
        impl $crate::FileRead for $node {
            fn read_at(
                &self,
                buf: &mut [u8],
                offset: u64,
            ) -> ::core::result::Result<usize, $crate::Errno> {
                <$block as $crate::FileRead>::read_at(&$block, buf, offset)
            }
        }
    };
    (@component FileWrite, $node:ty, $block:path) => {
        impl $crate::FileWrite for $node {
            fn write_at(&self, data: &[u8], offset: u64) -> ::core::result::Result<usize, $crate::Errno> {
                <$block as $crate::FileWrite>::write_at(&$block, data, offset)
            }
        }
    };
    (@component FileXattr, $node:ty, $block:path) => {
        impl $crate::FileXattr for $node {
            fn set_xattr(
                &self,
                name: &str,
                data: &[u8],
                flags: $crate::XattrFlags,
            ) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileXattr>::set_xattr(&$block, name, data, flags)
            }

            fn get_xattr(
                &self,
                name: &str,
            ) -> ::core::result::Result<::std::vec::Vec<u8>, $crate::Errno> {
                <$block as $crate::FileXattr>::get_xattr(&$block, name)
            }

            fn list_xattrs(
                &self,
            ) -> ::core::result::Result<::std::vec::Vec<::std::string::String>, $crate::Errno> {
                <$block as $crate::FileXattr>::list_xattrs(&$block)
            }

            fn remove_xattr(&self, name: &str) -> ::core::result::Result<(), $crate::Errno> {
                <$block as $crate::FileXattr>::remove_xattr(&$block, name)
            }
        }
    };
    (@component $other:ident, $node:ty, $block:path) => {
        ::core::compile_error!(::core::concat!(
            "unknown node component `",
            ::core::stringify!($other),
            "`"
        ));
    };
    ($node:ty { $($block:path => $($component:ident),+ $(,)?);+ $(;)? }) => {
        $( $( $crate::delegate_file!(@component $component, $node, $block); )+ )+
    };
}

#[cfg(test)]
mod tests {
    use crate::{
        Errno, File, FileDir, FileMutate, FileRead, FileWrite, FileXattr, IsDir, NotDirectoryFile,
        ReadOnlyDir,
    };

    struct Root;

    impl crate::FileReadlink for Root {
        fn readlink(&self) -> Result<String, Errno> {
            Err(Errno::InvalidArgument)
        }
    }

    impl crate::FileFlush for Root {
        fn flush(&self) -> Result<(), Errno> {
            Ok(())
        }
    }

    delegate_file!(Root {
        ReadOnlyDir => FileDir, FileMutate, FileXattr;
        IsDir => FileRead, FileWrite;
    });

    #[test]
    fn forwarded_components_use_template_errors() {
        let root = Root;
        assert_eq!(root.readdir(0, 4096), Err(Errno::ReadOnlyFilesystem));
        assert_eq!(root.remove(), Err(Errno::ReadOnlyFilesystem));
        assert_eq!(root.read_at(&mut [0; 1], 0), Err(Errno::IsADirectory));
        assert_eq!(root.write_at(&[1, 2, 3], 0), Err(Errno::IsADirectory));
        assert_eq!(root.list_xattrs(), Err(Errno::NotImplemented));
    }

    #[test]
    fn hand_written_components_are_kept() {
        let root: &dyn File = &Root;
        assert_eq!(root.flush(), Ok(()));
        assert_eq!(root.readlink(), Err(Errno::InvalidArgument));
    }

    #[test]
    fn single_component_lines() {
        struct Stream;

        impl FileRead for Stream {
            fn read_at(&self, _buf: &mut [u8], _offset: u64) -> Result<usize, Errno> {
                Ok(0)
            }
        }

        delegate_file!(Stream {
            NotDirectoryFile => FileDir;
        });

        fn _takes_dir<T: FileDir>(_: &T) {}
        _takes_dir(&Stream);
        assert_eq!(Stream.unlink_at("x", 0), Err(Errno::NotADirectory));
        assert_eq!(Stream.read_at(&mut [], 0), Ok(0));
    }
}
