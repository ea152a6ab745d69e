//! JSON snapshot of the extraction result.

use crate::error::Result;
use crate::model::ExtractResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a full extraction result to JSON.
pub fn to_json(result: &ExtractResult, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(result)?,
        JsonFormat::Compact => serde_json::to_string(result)?,
    };
    Ok(json)
}
