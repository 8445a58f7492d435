//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`; output is then a single [`JsonOutput`]
//! document on stdout instead of colored text.

use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Configuration errors pass through their own `C0xx` codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Malformed JSON in a config file
    pub const JSON_PARSE: &str = "CLI_003";
    /// Unknown preset name
    pub const UNKNOWN_PRESET: &str = "CLI_004";
    /// Render request rejected
    pub const RENDER: &str = "CLI_005";
    /// Seed store could not be read or written
    pub const STORE: &str = "CLI_006";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "C002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Configuration field at fault (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
            suggestion: None,
        }
    }

    /// Sets the configuration field for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Envelope shared by every command's `--json` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> JsonOutput<T> {
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// Print a command outcome as pretty JSON and map it to an exit code.
pub fn emit<T: Serialize>(outcome: Result<T, JsonError>) -> Result<ExitCode> {
    let (output, code) = match outcome {
        Ok(result) => (JsonOutput::success(result), ExitCode::SUCCESS),
        Err(error) => (JsonOutput::failure(vec![error]), ExitCode::from(1)),
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_shape() {
        let output: JsonOutput<()> = JsonOutput::failure(vec![JsonError::new(
            error_codes::UNKNOWN_PRESET,
            "unknown preset 'x'",
        )]);
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errors"][0]["code"], "CLI_004");
        assert!(json.get("result").is_none());
        assert!(json["errors"][0].get("file").is_none());
    }

    #[test]
    fn test_success_shape() {
        let json = serde_json::to_value(JsonOutput::success(7u32)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"], 7);
    }
}
