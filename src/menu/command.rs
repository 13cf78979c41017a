// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Menu commands: a description, the inputs to ask for, and what to do with them.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::debug;

use super::scanner::Scanner;
use super::value::{Value, ValueKind};
use crate::register::{Register, RegisterError};

/// Initial prompt capacity of a command; grows on demand.
pub const PROMPT_CAPACITY: usize = 5;

/// What the menu loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Terminate,
}

/// One input a command asks for before running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub key: String,
    pub message: String,
    pub kind: ValueKind,
}

impl Prompt {
    pub fn new(key: impl Into<String>, message: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            kind,
        }
    }
}

/// Answers collected for a command, keyed by [`Prompt::key`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<String, Value>,
}

impl Answers {
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_text)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_integer)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Handler run with the collected answers.
pub type Action<C> = Box<dyn Fn(&C, &Answers, &mut dyn Write) -> io::Result<Control>>;

/// A menu entry operating on a context `C`.
pub struct Command<C> {
    description: Option<String>,
    prompts: Register<Prompt>,
    action: Option<Action<C>>,
}

impl<C> Command<C> {
    /// A displayable command.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            prompts: Register::new(PROMPT_CAPACITY),
            action: None,
        }
    }

    /// A command that is selectable but not listed in the menu.
    pub fn hidden() -> Self {
        Self {
            description: None,
            prompts: Register::new(PROMPT_CAPACITY),
            action: None,
        }
    }

    /// Append a prompt, asked in insertion order.
    pub fn prompt(self, prompt: Prompt) -> Result<Self, RegisterError> {
        self.prompts.add_dynamic(prompt)?;
        Ok(self)
    }

    /// Set the handler. Without one the command just continues the loop.
    pub fn on_ok<F>(mut self, action: F) -> Self
    where
        F: Fn(&C, &Answers, &mut dyn Write) -> io::Result<Control> + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_displayable(&self) -> bool {
        self.description.is_some()
    }

    pub fn prompts(&self) -> &Register<Prompt> {
        &self.prompts
    }

    /// Ask every prompt in order, re-asking until each answer parses.
    pub fn collect<R: BufRead, W: Write>(
        &self,
        input: &mut Scanner<R>,
        out: &mut W,
    ) -> io::Result<Answers> {
        let mut prompts = Vec::with_capacity(self.prompts.size());
        self.prompts.for_each(|prompt| prompts.push(prompt.clone()));

        let mut answers = Answers::default();
        for prompt in prompts {
            writeln!(out, "{}", prompt.message)?;
            let value = ask(input, out, prompt.kind)?;
            answers.insert(prompt.key, value);
        }
        Ok(answers)
    }

    /// Collect the answers and hand them to the handler.
    pub fn execute<R: BufRead, W: Write>(
        &self,
        context: &C,
        input: &mut Scanner<R>,
        out: &mut W,
    ) -> io::Result<Control> {
        let answers = self.collect(input, out)?;
        match &self.action {
            Some(action) => action(context, &answers, out),
            None => Ok(Control::Continue),
        }
    }
}

impl<C> fmt::Debug for Command<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("description", &self.description)
            .field("prompts", &self.prompts.size())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

/// Read one value of `kind`, repeating until the user enters a valid one.
pub fn ask<R: BufRead, W: Write>(
    input: &mut Scanner<R>,
    out: &mut W,
    kind: ValueKind,
) -> io::Result<Value> {
    loop {
        match input.read_value(kind)? {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!(%err, "rejected input");
                writeln!(out, "{}, please try again.", err)?;
            }
        }
    }
}
