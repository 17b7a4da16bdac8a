//! Decoding context shared by the reply parsers

use cdmi_format::{CdmiError, Limits, Result};
use serde_json::{Deserializer, Value as JsonValue};
use std::fmt::Write;
use std::sync::{Mutex, PoisonError};

/// Renders non-string scalars into a reusable text buffer
#[derive(Debug, Default)]
struct ScalarFormatter {
    buf: String,
}

impl ScalarFormatter {
    fn render(&mut self, node: &JsonValue) -> Result<String> {
        self.buf.clear();
        let written = match node {
            JsonValue::Number(n) => write!(self.buf, "{}", n),
            JsonValue::Bool(b) => write!(self.buf, "{}", b),
            _ => {
                return Err(CdmiError::MalformedInput(
                    "only numbers and booleans are formatted as scalars".to_string(),
                ))
            }
        };
        written.map_err(|_| CdmiError::InvalidValue("scalar could not be formatted".to_string()))?;

        let mut text = String::new();
        text.try_reserve(self.buf.len())?;
        text.push_str(&self.buf);
        Ok(text)
    }
}

/// Per-client decoding context
///
/// Holds the decoding limits and the scalar formatter. The formatter is
/// shared by every conversion running against this context, so each use is
/// serialized by the context lock; the lock covers a single scalar and is
/// never held while descending into a document.
#[derive(Debug, Default)]
pub struct ReplyContext {
    limits: Limits,
    scalar: Mutex<ScalarFormatter>,
}

impl ReplyContext {
    /// Create a context with validated limits
    pub fn new(limits: Limits) -> Result<Self> {
        limits.validate()?;
        Ok(Self {
            limits,
            scalar: Mutex::new(ScalarFormatter::default()),
        })
    }

    /// Decoding limits
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Canonical text of a number or boolean node
    pub(crate) fn stringify(&self, node: &JsonValue) -> Result<String> {
        // the formatter holds no invariant across calls, so a poisoned lock is reusable
        let mut formatter = self.scalar.lock().unwrap_or_else(PoisonError::into_inner);
        formatter.render(node)
    }

    /// Parse the first JSON document of a reply buffer
    ///
    /// Bytes after the first complete document (padding, a trailing NUL) are
    /// ignored.
    pub(crate) fn parse_document(&self, buf: &[u8]) -> Result<JsonValue> {
        self.limits.check_document_len(buf.len())?;
        let mut documents = Deserializer::from_slice(buf).into_iter::<JsonValue>();
        match documents.next() {
            Some(Ok(document)) => Ok(document),
            Some(Err(e)) => Err(CdmiError::MalformedInput(format!(
                "reply is not valid JSON ({:?} error at line {} column {})",
                e.classify(),
                e.line(),
                e.column()
            ))),
            None => Err(CdmiError::MalformedInput(
                "reply holds no JSON document".to_string(),
            )),
        }
    }
}
