//! Result payload written to standard output.
//!
//! Exactly one of two shapes is ever emitted, as a single JSON line:
//!
//! - `{"result":"Example detection","confidence":0.95}`
//! - `{"error":"<message>"}`

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::detect::DetectionResult;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectionPayload {
    pub result: String,
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorPayload {
    pub error: String,
}

/// Payload produced by a single processor invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Detection(DetectionPayload),
    Error(ErrorPayload),
}

impl Payload {
    pub fn error(message: impl Into<String>) -> Self {
        Payload::Error(ErrorPayload {
            error: message.into(),
        })
    }

    /// Error payload carrying the full context chain of `err`.
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::error(format!("{:#}", err))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Payload::Error(_))
    }

    /// Serialize as compact single-line JSON (no trailing newline).
    pub fn to_line(&self) -> Result<String> {
        serde_json::to_string(self).context("serialize payload")
    }

    /// Parse one line of processor output.
    ///
    /// Surrounding whitespace is ignored. Anything that is not exactly one of
    /// the two payload shapes is rejected.
    pub fn from_line(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("empty processor output"));
        }
        if trimmed.contains('\n') {
            return Err(anyhow!("processor output spans multiple lines"));
        }
        serde_json::from_str(trimmed).map_err(|e| anyhow!("invalid processor output: {}", e))
    }
}

impl From<DetectionResult> for Payload {
    fn from(detection: DetectionResult) -> Self {
        Payload::Detection(DetectionPayload {
            result: detection.label,
            confidence: detection.confidence,
        })
    }
}
