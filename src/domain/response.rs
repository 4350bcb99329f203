use crate::error::{AnvilError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A response body from the transaction service.
///
/// No schema is assumed beyond a top-level JSON object; `null` is also
/// accepted and mirrored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse(pub Value);

impl ApiResponse {
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(AnvilError::decode)?;
        match value {
            Value::Object(_) | Value::Null => Ok(Self(value)),
            other => Err(AnvilError::decode(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
