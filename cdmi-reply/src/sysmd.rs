//! System metadata extraction from metadata replies

use crate::metadata::metadata_subdict;
use cdmi_format::constants::{
    MEMBER_OBJECT_ID, MEMBER_OBJECT_TYPE, MEMBER_PARENT_ID, METADATA_ATIME, METADATA_MTIME,
    METADATA_SIZE,
};
use cdmi_format::scalar::{parse_iso8601, parse_u64_auto};
use cdmi_format::{CdmiError, Dict, FileType, FixedId, Result, SysMd, SysMdMask, Value};
use tracing::{debug, warn};

/// Text of an optional member; present members must be strings
fn string_member<'a>(dict: &'a Dict, key: &str) -> Result<Option<&'a str>> {
    match dict.get_value(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(CdmiError::InvalidValue(format!(
            "'{}' is a {}, expected a string",
            key,
            other.kind_name()
        ))),
    }
}

/// Unix seconds of an optional timestamp member
///
/// A string that is not a timestamp is logged and treated as absent.
fn timestamp_member(dict: &Dict, key: &str) -> Result<Option<i64>> {
    let Some(text) = string_member(dict, key)? else {
        return Ok(None);
    };
    match parse_iso8601(text) {
        Ok(secs) => Ok(Some(secs)),
        Err(err) => {
            warn!(member = key, error = %err, "ignoring unparsable timestamp");
            Ok(None)
        }
    }
}

/// Fill `sysmd` from a parsed metadata reply
///
/// `objectID`, `parentID` and `objectType` are optional top-level members.
/// The `metadata` member is required; `cdmi_mtime`, `cdmi_atime` and
/// `cdmi_size` inside it are optional. Each field found sets its mask bit,
/// except a timestamp that does not parse, which leaves its bit unset. The
/// size is read from the leading digits of its text and never fails.
///
/// The mask of `sysmd` is cleared before anything is read and the record is
/// only written on success. Passing `None` makes the call a no-op.
pub fn sysmd_from_json_metadata(json_metadata: &Dict, sysmd: Option<&mut SysMd>) -> Result<()> {
    let Some(sysmd) = sysmd else {
        return Ok(());
    };
    sysmd.mask = SysMdMask::empty();

    let mut extracted = SysMd::default();

    if let Some(id) = string_member(json_metadata, MEMBER_OBJECT_ID)? {
        extracted.mask |= SysMdMask::ID;
        extracted.id = FixedId::new(id);
    }

    if let Some(parent_id) = string_member(json_metadata, MEMBER_PARENT_ID)? {
        extracted.mask |= SysMdMask::PARENT_ID;
        extracted.parent_id = FixedId::new(parent_id);
    }

    if let Some(content_type) = string_member(json_metadata, MEMBER_OBJECT_TYPE)? {
        extracted.mask |= SysMdMask::FTYPE;
        extracted.ftype = FileType::from_content_type(content_type);
        if extracted.ftype == FileType::Undefined {
            warn!(content_type, "unrecognized objectType");
        }
    }

    // timestamps and size live in the metadata sub-dictionary
    let metadata = metadata_subdict(json_metadata)?;

    if let Some(mtime) = timestamp_member(metadata, METADATA_MTIME)? {
        extracted.mask |= SysMdMask::MTIME;
        extracted.mtime = mtime;
    }

    if let Some(atime) = timestamp_member(metadata, METADATA_ATIME)? {
        extracted.mask |= SysMdMask::ATIME;
        extracted.atime = atime;
    }

    if let Some(size) = string_member(metadata, METADATA_SIZE)? {
        extracted.mask |= SysMdMask::SIZE;
        extracted.size = parse_u64_auto(size);
    }

    debug!(mask = extracted.mask.0, "extracted system metadata");
    *sysmd = extracted;
    Ok(())
}
