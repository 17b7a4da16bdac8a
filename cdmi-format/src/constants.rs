//! Constants and well-known member names for CDMI replies

/// Content type of a CDMI data object.
pub const CONTENT_TYPE_OBJECT: &str = "application/cdmi-object";
/// Content type of a CDMI container.
pub const CONTENT_TYPE_CONTAINER: &str = "application/cdmi-container";
/// Content type of a CDMI capability object.
pub const CONTENT_TYPE_CAPABILITY: &str = "application/cdmi-capability";
/// Content type of a CDMI domain object.
pub const CONTENT_TYPE_DOMAIN: &str = "application/cdmi-domain";

/// Header prefix carrying user-defined object metadata.
pub const OBJECT_META_PREFIX: &str = "X-Object-Meta-";

/// Path delimiter used to infer common prefixes in listings.
pub const PATH_DELIMITER: char = '/';

/// Listing member holding the child names.
pub const MEMBER_CHILDREN: &str = "children";
/// Member holding user and storage-system metadata.
pub const MEMBER_METADATA: &str = "metadata";
/// Member holding the object identifier.
pub const MEMBER_OBJECT_ID: &str = "objectID";
/// Member holding the parent object identifier.
pub const MEMBER_PARENT_ID: &str = "parentID";
/// Member holding the object content type.
pub const MEMBER_OBJECT_TYPE: &str = "objectType";
/// Metadata member holding the last modification time.
pub const METADATA_MTIME: &str = "cdmi_mtime";
/// Metadata member holding the last access time.
pub const METADATA_ATIME: &str = "cdmi_atime";
/// Metadata member holding the object size in bytes.
pub const METADATA_SIZE: &str = "cdmi_size";

/// Maximum stored length of an object identifier, in bytes.
pub const SYSMD_ID_SIZE: usize = 64;

/// Mask bit: `size` is populated.
pub const SYSMD_MASK_SIZE: u32 = 1 << 2;
/// Mask bit: `atime` is populated.
pub const SYSMD_MASK_ATIME: u32 = 1 << 3;
/// Mask bit: `mtime` is populated.
pub const SYSMD_MASK_MTIME: u32 = 1 << 4;
/// Mask bit: `id` is populated.
pub const SYSMD_MASK_ID: u32 = 1 << 11;
/// Mask bit: `parent_id` is populated.
pub const SYSMD_MASK_PARENT_ID: u32 = 1 << 12;
/// Mask bit: `ftype` is populated.
pub const SYSMD_MASK_FTYPE: u32 = 1 << 13;

/// Bucket-count hint for dictionaries built from replies.
pub const DICT_BUCKET_HINT: usize = 13;
/// Initial capacity of vectors built from JSON arrays.
pub const VEC_INITIAL_CAPACITY: usize = 2;

/// Dictionary entry flag: emit the value verbatim, without escaping.
pub const DICT_VAR_FLAG_NO_ESCAPE: u32 = 1 << 0;
