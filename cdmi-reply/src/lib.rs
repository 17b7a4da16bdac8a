//! CDMI Reply - Parsers for CDMI JSON replies
//!
//! This crate turns raw CDMI reply buffers into the types of `cdmi-format`:
//!
//! - Generic conversion of a JSON document into a value tree
//! - Listing classification into objects and common prefixes
//! - User metadata extraction from headers and metadata replies
//! - System metadata extraction
//!
//! All parsers take a [`ReplyContext`], which carries the decoding limits and
//! the lock serializing scalar formatting.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod convert;
pub mod listing;
pub mod metadata;
pub mod sysmd;

// Re-export commonly used types
pub use cdmi_format::{
    CdmiError, CommonPrefix, Dict, DictVar, ErrorKind, FileType, Limits, Object, Result, SysMd,
    SysMdMask, Value, ValueVec,
};

// Re-export our own types
pub use context::ReplyContext;
pub use convert::{convert_value, parse_value};
pub use listing::{parse_list_bucket, Listing};
pub use metadata::{
    metadata_from_headers, metadata_from_json_metadata, metadata_subdict, parse_metadata,
};
pub use sysmd::sysmd_from_json_metadata;
