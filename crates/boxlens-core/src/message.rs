#![forbid(unsafe_code)]

//! Panel → page wire messages.
//!
//! Messages travel as structured objects over the extension runtime's
//! messaging channel. On the Rust side they are decoded from JSON into
//! [`Command`], tagged by the `command` field:
//!
//! ```json
//! {"command":"setMode","mode":"hover","showDimensions":true,"showBorders":true,"maxDepth":10}
//! {"command":"updateSettings","showDimensions":false,"showBorders":true,"maxDepth":4}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mode::{Mode, VisualOptions};

/// Wire names of the known commands.
pub const SET_MODE: &str = "setMode";
pub const UPDATE_SETTINGS: &str = "updateSettings";

/// A command sent from the control panel to a page inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    /// Switch mode and apply options atomically.
    SetMode {
        mode: Mode,
        #[serde(flatten)]
        options: VisualOptions,
    },
    /// Refresh options for the active mode. No-op while disabled.
    UpdateSettings {
        #[serde(flatten)]
        options: VisualOptions,
    },
}

impl Command {
    /// Options carried by any command.
    #[inline]
    pub const fn options(&self) -> VisualOptions {
        match *self {
            Self::SetMode { options, .. } | Self::UpdateSettings { options } => options,
        }
    }

    /// Wire name of the command tag.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetMode { .. } => SET_MODE,
            Self::UpdateSettings { .. } => UPDATE_SETTINGS,
        }
    }

    /// Encode as a JSON object string.
    pub fn to_json_string(&self) -> Result<String, MessageError> {
        serde_json::to_string(self).map_err(|err| MessageError::Json(err.to_string()))
    }

    /// Decode from a JSON object string.
    pub fn from_json_str(json: &str) -> Result<Self, MessageError> {
        let value: Value =
            serde_json::from_str(json).map_err(|err| MessageError::Json(err.to_string()))?;
        Self::from_value(value)
    }

    /// Decode from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, MessageError> {
        match value.get("command").and_then(Value::as_str) {
            Some(SET_MODE) | Some(UPDATE_SETTINGS) => {}
            Some(other) => return Err(MessageError::UnknownCommand(other.to_owned())),
            None => return Err(MessageError::MissingCommand),
        }
        serde_json::from_value(value).map_err(|err| MessageError::InvalidField(err.to_string()))
    }
}

/// Message decoding errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    /// Payload is not valid JSON.
    Json(String),
    /// Payload has no string `command` tag.
    MissingCommand,
    /// Tag names a command this inspector does not know.
    UnknownCommand(String),
    /// A field is missing or has the wrong shape.
    InvalidField(String),
}

impl std::fmt::Display for MessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "invalid message json: {msg}"),
            Self::MissingCommand => write!(f, "message has no command tag"),
            Self::UnknownCommand(name) => write!(f, "unknown command: {name}"),
            Self::InvalidField(msg) => write!(f, "invalid message field: {msg}"),
        }
    }
}

impl std::error::Error for MessageError {}
