//! CDMI Format - Core primitives for CDMI reply decoding
//!
//! This crate provides the protocol-agnostic data model that decoded CDMI
//! replies are expressed in, with no JSON parsing of its own. It includes:
//!
//! - The generic value tree (`Value`, `ValueVec`)
//! - String-keyed dictionaries with case-insensitive lookup
//! - Listing entries and file types
//! - The fixed-layout system metadata record
//! - Timestamp and size parsing for text-form scalars
//! - Error types
//! - Decoding limits

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod dict;
pub mod error;
pub mod limits;
pub mod scalar;
pub mod sysmd;
pub mod types;
pub mod value;

// Re-export commonly used types
pub use dict::{Dict, DictVar};
pub use error::{CdmiError, ErrorKind, Result};
pub use limits::Limits;
pub use sysmd::{FixedId, SysMd, SysMdMask};
pub use types::{CommonPrefix, FileType, Object};
pub use value::{Value, ValueVec};
