//! Element decoding for present collections.
//!
//! An [`ElementDecoder`] turns one attribute element into the string a
//! downstream API expects. Decoders are pure and stateless.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("element {index} is null")]
    Null { index: usize },
    #[error("element {index}: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl DecodeError {
    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            DecodeError::Null { index } | DecodeError::TypeMismatch { index, .. } => *index,
        }
    }
}

/// Extracts a string from a single collection element.
pub trait ElementDecoder {
    fn decode(&self, index: usize, value: &Value) -> Result<String, DecodeError>;
}

impl<D: ElementDecoder + ?Sized> ElementDecoder for &D {
    fn decode(&self, index: usize, value: &Value) -> Result<String, DecodeError> {
        (**self).decode(index, value)
    }
}

/// Accepts string elements only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringDecoder;

impl ElementDecoder for StringDecoder {
    fn decode(&self, index: usize, value: &Value) -> Result<String, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Null => Err(DecodeError::Null { index }),
            other => Err(DecodeError::TypeMismatch {
                index,
                expected: "string",
                found: kind_name(other),
            }),
        }
    }
}

/// Accepts strings, numbers and booleans. Numbers and booleans render as their JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarDecoder;

impl ElementDecoder for ScalarDecoder {
    fn decode(&self, index: usize, value: &Value) -> Result<String, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Err(DecodeError::Null { index }),
            other => Err(DecodeError::TypeMismatch {
                index,
                expected: "scalar",
                found: kind_name(other),
            }),
        }
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// What expansion does when an element fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodePolicy {
    /// Collapse the failure into "no sequence", like an absent collection.
    #[default]
    Omit,
    /// Surface the failure as a [`DecodeError`].
    Reject,
}

impl DecodePolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DecodePolicy::Omit => "omit",
            DecodePolicy::Reject => "reject",
        }
    }

    /// Parse a policy name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "omit" => Some(DecodePolicy::Omit),
            "reject" => Some(DecodePolicy::Reject),
            _ => None,
        }
    }
}
