// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typed values read from the user.

use std::fmt;

use thiserror::Error;

/// The shape a prompt expects its answer to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Integer,
    Float,
    Boolean,
    Text,
}

/// A parsed answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

/// A token that does not fit the requested [`ValueKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{token}' is not a valid {kind}")]
pub struct ParseValueError {
    pub token: String,
    pub kind: ValueKind,
}

impl ValueKind {
    /// Parse a trimmed token into a [`Value`] of this kind.
    ///
    /// Text accepts anything non-empty. Booleans accept `true`/`false` and
    /// `yes`/`no`, case-insensitively.
    pub fn parse(self, token: &str) -> Result<Value, ParseValueError> {
        let token = token.trim();
        let invalid = || ParseValueError {
            token: token.to_string(),
            kind: self,
        };

        match self {
            ValueKind::Integer => token.parse().map(Value::Integer).map_err(|_| invalid()),
            ValueKind::Float => token.parse().map(Value::Float).map_err(|_| invalid()),
            ValueKind::Boolean => match token.to_ascii_lowercase().as_str() {
                "true" | "yes" => Ok(Value::Boolean(true)),
                "false" | "no" => Ok(Value::Boolean(false)),
                _ => Err(invalid()),
            },
            ValueKind::Text if token.is_empty() => Err(invalid()),
            ValueKind::Text => Ok(Value::Text(token.to_string())),
        }
    }

    /// Text answers consume the rest of the input line; the others one token.
    pub fn is_line(self) -> bool {
        matches!(self, ValueKind::Text)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "number"),
            ValueKind::Boolean => write!(f, "yes/no value"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}
