// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde_json::Value;
use thiserror::Error;

/// What a failed response body had to say, in the order the dashboard prefers
/// to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorBody {
    #[default]
    Empty,
    Text(String),
    Message(String),
    Errors(Vec<String>),
    /// An `errors` value that is not an array, kept as its JSON text.
    RawErrors(String),
}

impl ErrorBody {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::String(text)) if text.is_empty() => Self::Empty,
            Ok(Value::String(text)) => Self::Text(text),
            Ok(Value::Object(object)) => {
                if let Some(Value::String(message)) = object.get("message")
                    && !message.is_empty()
                {
                    return Self::Message(message.clone());
                }
                match object.get("errors") {
                    Some(Value::Array(items)) => {
                        Self::Errors(items.iter().map(json_item_text).collect())
                    }
                    Some(Value::Null) | None => Self::Empty,
                    Some(other) => Self::RawErrors(other.to_string()),
                }
            }
            Ok(_) => Self::Empty,
            Err(_) => Self::Text(trimmed.to_owned()),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(text) | Self::Message(text) | Self::RawErrors(text) => Some(text.clone()),
            Self::Errors(items) => Some(items.join(", ")),
        }
    }
}

fn json_item_text(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Unexpected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{}", describe_response(.status, .body))]
    Validation { status: u16, body: ErrorBody },
    #[error("network error: {0}")]
    Network(String),
    #[error("{detail}")]
    Unexpected {
        status: Option<u16>,
        body: ErrorBody,
        detail: String,
    },
}

impl ApiError {
    pub fn from_response(status: u16, raw_body: &str) -> Self {
        let body = ErrorBody::parse(raw_body);
        if (400..500).contains(&status) {
            Self::Validation { status, body }
        } else {
            let detail = describe_response(&status, &body);
            Self::Unexpected {
                status: Some(status),
                body,
                detail,
            }
        }
    }

    pub fn unexpected(detail: impl Into<String>) -> Self {
        Self::Unexpected {
            status: None,
            body: ErrorBody::Empty,
            detail: detail.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Network(_) => ErrorKind::Network,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation { status, .. } => Some(*status),
            Self::Network(_) => None,
            Self::Unexpected { status, .. } => *status,
        }
    }

    /// Message carried by the response body, if the backend sent one.
    pub fn body_message(&self) -> Option<String> {
        match self {
            Self::Validation { body, .. } | Self::Unexpected { body, .. } => body.message(),
            Self::Network(_) => None,
        }
    }
}

fn describe_response(status: &u16, body: &ErrorBody) -> String {
    match body.message() {
        Some(message) => format!("{message} (status {status})"),
        None => format!("request failed with status code {status}"),
    }
}
