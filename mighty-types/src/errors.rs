use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stable error codes shared with the web front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ErrorCode {
    #[serde(rename = "CE000")]
    InternalServerError,
    #[serde(rename = "CE001")]
    MethodNotAllowed,
    #[serde(rename = "CE002")]
    ValidationFailed,
    #[serde(rename = "CE003")]
    NoPermission,
    #[serde(rename = "KE002")]
    RoomEnded,
    #[serde(rename = "KE003")]
    RoomNotEnded,
    #[serde(rename = "KE004")]
    NoSuchRoom,
    #[serde(rename = "KE005")]
    NoSuchGame,
}

impl ErrorCode {
    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::InternalServerError => "Internal server error",
            ErrorCode::MethodNotAllowed => "Bad request method",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NoPermission => "No permission",
            ErrorCode::RoomEnded => "Room ended",
            ErrorCode::RoomNotEnded => "Room not ended",
            ErrorCode::NoSuchRoom => "No such room",
            ErrorCode::NoSuchGame => "No such game",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCode::InternalServerError => "Unhandled error occurred.",
            ErrorCode::MethodNotAllowed => "Check request host and/or method.",
            ErrorCode::ValidationFailed => "Check your request's validity.",
            ErrorCode::NoPermission => "No permission to execute the operation.",
            ErrorCode::RoomEnded => "The room no longer accepts changes.",
            ErrorCode::RoomNotEnded => "The room must be ended first.",
            ErrorCode::NoSuchRoom => "No room with the given id.",
            ErrorCode::NoSuchGame => "No game with the given id.",
        }
    }
}

/// JSON body of every error reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub name: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            name: code.name().to_string(),
            message: code.default_message().to_string(),
        }
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            name: code.name().to_string(),
            message: message.into(),
        }
    }
}
