//! JSON document to value tree conversion

use crate::context::ReplyContext;
use cdmi_format::constants::{DICT_BUCKET_HINT, VEC_INITIAL_CAPACITY};
use cdmi_format::{CdmiError, Dict, Result, Value, ValueVec};
use serde_json::Value as JsonValue;
use tracing::trace;

/// Convert a parsed JSON document into a value tree
///
/// Arrays become vectors, objects become sub-dictionaries (members in
/// document order) and every scalar becomes a string leaf holding its
/// canonical text. `null` anywhere in the document fails the whole
/// conversion with [`CdmiError::NotSupported`]; nothing built before the
/// failure is returned.
pub fn convert_value(ctx: &ReplyContext, node: &JsonValue) -> Result<Value> {
    convert_node(ctx, node, 0)
}

/// Parse a reply buffer and convert the whole document
pub fn parse_value(ctx: &ReplyContext, buf: &[u8]) -> Result<Value> {
    let document = ctx.parse_document(buf)?;
    convert_value(ctx, &document)
}

fn convert_node(ctx: &ReplyContext, node: &JsonValue, depth: usize) -> Result<Value> {
    trace!(depth, kind = json_kind(node), "converting node");

    let max_depth = ctx.limits().max_depth;
    if depth > max_depth {
        return Err(CdmiError::LimitExceeded(format!(
            "document nesting exceeds max_depth {}",
            max_depth
        )));
    }

    let value = match node {
        JsonValue::Null => {
            return Err(CdmiError::NotSupported(format!(
                "null value at depth {}",
                depth
            )))
        }
        JsonValue::Array(items) => {
            let mut vector = ValueVec::with_capacity(VEC_INITIAL_CAPACITY)?;
            for item in items {
                vector.push(convert_node(ctx, item, depth + 1)?)?;
            }
            Value::Vector(vector)
        }
        JsonValue::Object(members) => {
            let mut subdict = Dict::with_bucket_hint(DICT_BUCKET_HINT)?;
            for (key, child) in members {
                let subval = convert_node(ctx, child, depth + 1)?;
                subdict.add_value(key.as_str(), subval, 0)?;
            }
            Value::SubDict(subdict)
        }
        JsonValue::String(s) => {
            let mut text = String::new();
            text.try_reserve(s.len())?;
            text.push_str(s);
            Value::String(text)
        }
        JsonValue::Number(_) | JsonValue::Bool(_) => Value::String(ctx.stringify(node)?),
    };

    trace!(depth, kind = value.kind_name(), "converted node");
    Ok(value)
}

fn json_kind(node: &JsonValue) -> &'static str {
    match node {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
