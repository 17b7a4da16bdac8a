//! Listing classification into objects and common prefixes

use crate::context::ReplyContext;
use cdmi_format::constants::{MEMBER_CHILDREN, PATH_DELIMITER};
use cdmi_format::{CdmiError, CommonPrefix, Object, Result};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Classify the `children` of a listing reply
///
/// Each child name is joined to `prefix` and appended to `common_prefixes`
/// when it ends with `/`, or to `objects` otherwise, in reply order. The
/// output vectors belong to the caller: they are neither cleared first nor
/// rolled back when an error stops the walk part-way.
pub fn parse_list_bucket(
    ctx: &ReplyContext,
    buf: &[u8],
    prefix: Option<&str>,
    objects: &mut Vec<Object>,
    common_prefixes: &mut Vec<CommonPrefix>,
) -> Result<()> {
    debug!(len = buf.len(), prefix = ?prefix, "parsing listing reply");

    let document = ctx.parse_document(buf)?;
    let children = match document.get(MEMBER_CHILDREN) {
        Some(JsonValue::Array(children)) => children,
        Some(_) => {
            return Err(CdmiError::MalformedInput(format!(
                "'{}' is not an array",
                MEMBER_CHILDREN
            )))
        }
        None => {
            return Err(CdmiError::MalformedInput(format!(
                "listing has no '{}' member",
                MEMBER_CHILDREN
            )))
        }
    };

    let prefix = prefix.unwrap_or("");
    for (idx, child) in children.iter().enumerate() {
        let name = child.as_str().ok_or_else(|| {
            CdmiError::MalformedInput(format!("child {} is not a string", idx))
        })?;

        let mut full_name = String::new();
        full_name.try_reserve(prefix.len() + name.len())?;
        full_name.push_str(prefix);
        full_name.push_str(name);

        if full_name.ends_with(PATH_DELIMITER) {
            common_prefixes.try_reserve(1)?;
            common_prefixes.push(CommonPrefix::new(full_name));
        } else {
            objects.try_reserve(1)?;
            objects.push(Object::new(full_name));
        }
    }

    debug!(
        children = children.len(),
        objects = objects.len(),
        common_prefixes = common_prefixes.len(),
        "classified listing"
    );
    Ok(())
}

/// Classified listing owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    /// Non-directory entries
    pub objects: Vec<Object>,
    /// Directory-like entries
    pub common_prefixes: Vec<CommonPrefix>,
}

impl Listing {
    /// Classify a listing reply into fresh collections
    pub fn parse(ctx: &ReplyContext, buf: &[u8], prefix: Option<&str>) -> Result<Self> {
        let mut listing = Listing::default();
        parse_list_bucket(
            ctx,
            buf,
            prefix,
            &mut listing.objects,
            &mut listing.common_prefixes,
        )?;
        Ok(listing)
    }
}
