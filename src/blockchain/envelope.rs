// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JSON-RPC response envelopes.
//!
//! The gateway reports failures in-band: a body carrying an `error` key is a
//! failure no matter what else it contains or which HTTP status came with it.
//! Bodies are decoded exactly once, here, into [`Envelope`] so callers never
//! probe raw JSON for keys. A success whose `result` is missing or does not
//! fit the expected type is still a delivered answer, and is kept as
//! [`Envelope::Malformed`] so the wallet can tag it with the step it came from.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// A decoded gateway response.
#[derive(Debug, Clone)]
pub enum Envelope<T> {
    /// The operation's payload.
    Success(T),
    /// The raw `error` object.
    Failure(RemoteErrorPayload),
    /// No `error`, and no `result` of the expected shape.
    Malformed(String),
}

/// The untouched `error` value of a failed call.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteErrorPayload(pub Value);

impl RemoteErrorPayload {
    /// The `message` field when the gateway provided one.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// The JSON-RPC `code` field when the gateway provided one.
    pub fn code(&self) -> Option<i64> {
        self.0.get("code").and_then(Value::as_i64)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for RemoteErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Reasons a body could not be decoded as an envelope at all.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EnvelopeError {
    #[error("response body is not a JSON object")]
    NotAnObject,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a JSON-RPC response body.
    pub fn from_value(value: Value) -> Result<Self, EnvelopeError> {
        let Value::Object(mut body) = value else {
            return Err(EnvelopeError::NotAnObject);
        };

        if let Some(error) = body.remove("error") {
            return Ok(Envelope::Failure(RemoteErrorPayload(error)));
        }

        let Some(result) = body.remove("result") else {
            return Ok(Envelope::Malformed(
                "response has neither `result` nor `error`".to_string(),
            ));
        };

        Ok(match serde_json::from_value(result) {
            Ok(result) => Envelope::Success(result),
            Err(e) => Envelope::Malformed(format!("unexpected `result` shape: {e}")),
        })
    }
}
