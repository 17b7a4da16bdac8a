//! User metadata extraction from headers and metadata replies

use crate::context::ReplyContext;
use crate::convert::parse_value;
use cdmi_format::constants::{MEMBER_METADATA, OBJECT_META_PREFIX};
use cdmi_format::{CdmiError, Dict, Result, Value};
use tracing::debug;

/// Collect the `X-Object-Meta-*` headers into `metadata`
///
/// The prefix is stripped from the stored keys. `metadata` is replaced only
/// on success; passing `None` makes the call a no-op.
pub fn metadata_from_headers(headers: &Dict, metadata: Option<&mut Dict>) -> Result<()> {
    let Some(metadata) = metadata else {
        return Ok(());
    };

    let filtered = headers.filter_prefix(OBJECT_META_PREFIX)?;
    debug!(
        headers = headers.len(),
        metadata = filtered.len(),
        "filtered metadata headers"
    );
    *metadata = filtered;
    Ok(())
}

/// Parse a metadata reply into its top-level dictionary
///
/// The reply must be a JSON object. Its converted sub-dictionary is moved
/// out of the value tree rather than copied.
pub fn parse_metadata(ctx: &ReplyContext, buf: &[u8]) -> Result<Dict> {
    debug!(len = buf.len(), "parsing metadata reply");

    let mut value = parse_value(ctx, buf)?;
    value.take_subdict().ok_or_else(|| {
        CdmiError::InvalidValue(format!(
            "metadata reply is a {}, expected an object",
            value.kind_name()
        ))
    })
}

/// Locate the `metadata` sub-dictionary (member name matched ignoring case)
pub fn metadata_subdict(json_metadata: &Dict) -> Result<&Dict> {
    let var = json_metadata.get_lowered(MEMBER_METADATA)?;
    match &var.value {
        Value::SubDict(subdict) => Ok(subdict),
        other => Err(CdmiError::InvalidValue(format!(
            "'{}' is a {}, expected an object",
            MEMBER_METADATA,
            other.kind_name()
        ))),
    }
}

/// Copy of the `metadata` sub-dictionary of a parsed metadata reply
pub fn metadata_from_json_metadata(json_metadata: &Dict) -> Result<Dict> {
    metadata_subdict(json_metadata)?.dup()
}
