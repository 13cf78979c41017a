// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The interactive layer: commands, typed prompts, and the input scanner.
//!
//! A [`Command`] owns its [`Prompt`]s in a [`Register`](crate::Register) and an
//! optional handler. Running it asks each prompt in order, re-asking until the
//! answer parses as the prompt's [`ValueKind`], then passes the [`Answers`] to
//! the handler, whose [`Control`] tells the menu loop whether to keep going.

mod command;
mod scanner;
mod value;

pub use command::{ask, Action, Answers, Command, Control, Prompt, PROMPT_CAPACITY};
pub use scanner::Scanner;
pub use value::{ParseValueError, Value, ValueKind};
