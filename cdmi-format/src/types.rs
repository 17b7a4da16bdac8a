//! File types and listing entries

use crate::constants::{
    CONTENT_TYPE_CAPABILITY, CONTENT_TYPE_CONTAINER, CONTENT_TYPE_DOMAIN, CONTENT_TYPE_OBJECT,
};
use serde::{Serialize, Serializer};

/// Kind of a stored entity, derived from its CDMI content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    /// Unknown or unrecognized content type
    #[default]
    Undefined,
    /// Data object
    Regular,
    /// Container
    Directory,
    /// Capability object
    Capability,
    /// Domain object
    Domain,
}

impl FileType {
    /// Map a content-type string to a file type (exact, case-sensitive match)
    pub fn from_content_type(content_type: &str) -> Self {
        match content_type {
            CONTENT_TYPE_OBJECT => FileType::Regular,
            CONTENT_TYPE_CONTAINER => FileType::Directory,
            CONTENT_TYPE_CAPABILITY => FileType::Capability,
            CONTENT_TYPE_DOMAIN => FileType::Domain,
            _ => FileType::Undefined,
        }
    }

    /// Lowercase name, as printed and serialized
    pub fn name(&self) -> &'static str {
        match self {
            FileType::Undefined => "undefined",
            FileType::Regular => "regular",
            FileType::Directory => "directory",
            FileType::Capability => "capability",
            FileType::Domain => "domain",
        }
    }

    /// Content-type string for this file type, if it has one
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            FileType::Regular => Some(CONTENT_TYPE_OBJECT),
            FileType::Directory => Some(CONTENT_TYPE_CONTAINER),
            FileType::Capability => Some(CONTENT_TYPE_CAPABILITY),
            FileType::Domain => Some(CONTENT_TYPE_DOMAIN),
            FileType::Undefined => None,
        }
    }
}

impl Serialize for FileType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Non-directory entry of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Object {
    /// Full path of the entry
    pub path: String,
}

impl Object {
    /// Create a new object entry
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Directory-like grouping entry of a listing (path ends with `/`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonPrefix {
    /// Full prefix, including the trailing delimiter
    pub prefix: String,
}

impl CommonPrefix {
    /// Create a new common prefix entry
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}
