//! Fixed-layout system metadata record

use crate::constants::{
    SYSMD_ID_SIZE, SYSMD_MASK_ATIME, SYSMD_MASK_FTYPE, SYSMD_MASK_ID, SYSMD_MASK_MTIME,
    SYSMD_MASK_PARENT_ID, SYSMD_MASK_SIZE,
};
use crate::types::FileType;

/// Object identifier stored in a fixed-capacity buffer
///
/// Text longer than [`SYSMD_ID_SIZE`] bytes is truncated on a character
/// boundary.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedId {
    buf: [u8; SYSMD_ID_SIZE],
    len: usize,
}

impl FixedId {
    /// Copy `text`, truncating it to fit
    pub fn new(text: &str) -> Self {
        let mut len = text.len().min(SYSMD_ID_SIZE);
        while !text.is_char_boundary(len) {
            len -= 1;
        }

        let mut buf = [0u8; SYSMD_ID_SIZE];
        buf[..len].copy_from_slice(&text.as_bytes()[..len]);
        Self { buf, len }
    }

    /// Stored text
    pub fn as_str(&self) -> &str {
        // buf[..len] was copied from a &str up to a char boundary
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }
}

impl Default for FixedId {
    fn default() -> Self {
        Self {
            buf: [0u8; SYSMD_ID_SIZE],
            len: 0,
        }
    }
}

impl std::fmt::Debug for FixedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FixedId").field(&self.as_str()).finish()
    }
}

/// Bitfield recording which [`SysMd`] fields are populated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SysMdMask(pub u32);

impl SysMdMask {
    /// `size` is populated
    pub const SIZE: SysMdMask = SysMdMask(SYSMD_MASK_SIZE);
    /// `atime` is populated
    pub const ATIME: SysMdMask = SysMdMask(SYSMD_MASK_ATIME);
    /// `mtime` is populated
    pub const MTIME: SysMdMask = SysMdMask(SYSMD_MASK_MTIME);
    /// `id` is populated
    pub const ID: SysMdMask = SysMdMask(SYSMD_MASK_ID);
    /// `parent_id` is populated
    pub const PARENT_ID: SysMdMask = SysMdMask(SYSMD_MASK_PARENT_ID);
    /// `ftype` is populated
    pub const FTYPE: SysMdMask = SysMdMask(SYSMD_MASK_FTYPE);

    /// Empty mask
    pub const fn empty() -> Self {
        SysMdMask(0)
    }

    /// True when every bit of `other` is set
    pub fn contains(&self, other: SysMdMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the bits of `other`
    pub fn insert(&mut self, other: SysMdMask) {
        self.0 |= other.0;
    }

    /// True when no bit is set
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for SysMdMask {
    type Output = SysMdMask;

    fn bitor(self, rhs: SysMdMask) -> SysMdMask {
        SysMdMask(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for SysMdMask {
    fn bitor_assign(&mut self, rhs: SysMdMask) {
        self.0 |= rhs.0;
    }
}

/// System metadata extracted from a reply
///
/// Only fields whose bit is set in `mask` are meaningful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SysMd {
    /// Populated fields
    pub mask: SysMdMask,
    /// Object identifier
    pub id: FixedId,
    /// Parent object identifier
    pub parent_id: FixedId,
    /// Entity kind
    pub ftype: FileType,
    /// Last modification time (Unix seconds)
    pub mtime: i64,
    /// Last access time (Unix seconds)
    pub atime: i64,
    /// Size in bytes
    pub size: u64,
}

impl SysMd {
    /// Object identifier, if populated
    pub fn id(&self) -> Option<&str> {
        self.mask.contains(SysMdMask::ID).then(|| self.id.as_str())
    }

    /// Parent object identifier, if populated
    pub fn parent_id(&self) -> Option<&str> {
        self.mask
            .contains(SysMdMask::PARENT_ID)
            .then(|| self.parent_id.as_str())
    }

    /// Entity kind, if populated
    pub fn ftype(&self) -> Option<FileType> {
        self.mask.contains(SysMdMask::FTYPE).then_some(self.ftype)
    }

    /// Last modification time, if populated
    pub fn mtime(&self) -> Option<i64> {
        self.mask.contains(SysMdMask::MTIME).then_some(self.mtime)
    }

    /// Last access time, if populated
    pub fn atime(&self) -> Option<i64> {
        self.mask.contains(SysMdMask::ATIME).then_some(self.atime)
    }

    /// Size in bytes, if populated
    pub fn size(&self) -> Option<u64> {
        self.mask.contains(SysMdMask::SIZE).then_some(self.size)
    }
}
