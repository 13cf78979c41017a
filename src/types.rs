// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records kept in the pilot register.
//!
//! A pilot is a person with a national id (CPF), a name, and optionally a
//! license. Equality is by value over all three fields, which is what
//! [`Register::remove`](crate::Register::remove) and
//! [`Register::contains`](crate::Register::contains) compare with.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anything identified by a CPF and a name.
pub trait Person {
    fn cpf(&self) -> &str;
    fn name(&self) -> &str;
}

/// A registered pilot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pilot {
    pub cpf: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl Pilot {
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
            license: None,
        }
    }

    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }
}

impl Person for Pilot {
    fn cpf(&self) -> &str {
        &self.cpf
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Pilot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{cpf={}, name={}, license={}}}",
            self.cpf,
            self.name,
            self.license.as_deref().unwrap_or("none")
        )
    }
}
