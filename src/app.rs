// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The pilot registry application.
//!
//! Two independent registers: the menu's commands and the registered pilots.
//! The loop shows the menu, reads an index, runs the chosen command and repeats
//! until a command returns [`Control::Terminate`] or the input ends.
//!
//! Pilot storage is bounded: registering into a full list tells the user to
//! expand it rather than growing silently. The menu itself grows on demand.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::display::Styler;
use crate::menu::{ask, Answers, Command, Control, Prompt, Scanner, ValueKind};
use crate::register::{Register, RegisterError, DEFAULT_CAPACITY};
use crate::types::{Person, Pilot};
use crate::utils::join;

/// Largest growth accepted from a single expand request.
pub const EXPANSION_LIMIT: usize = 10;

/// Prompt keys used by the built-in commands.
pub mod keys {
    pub const CPF: &str = "cpf";
    pub const NAME: &str = "name";
    pub const LICENSE: &str = "license";
    pub const EXPAND: &str = "expand";
}

/// Start-up settings for an [`Application`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Initial pilot capacity.
    pub capacity: usize,
    /// Largest growth accepted per expand request.
    pub expansion_limit: usize,
    pub styler: Styler,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            expansion_limit: EXPANSION_LIMIT,
            styler: Styler::plain(),
        }
    }
}

/// State the commands operate on.
#[derive(Debug)]
pub struct Fleet {
    pilots: Register<Pilot>,
    expansion_limit: usize,
    styler: Styler,
}

impl Fleet {
    pub fn pilots(&self) -> &Register<Pilot> {
        &self.pilots
    }

    /// Index of the first pilot with `cpf`, by linear scan over `0..size()`.
    pub fn position_of(&self, cpf: &str) -> Option<usize> {
        (0..self.pilots.size()).find(|&index| {
            self.pilots
                .get(index)
                .is_ok_and(|pilot| pilot.cpf() == cpf)
        })
    }

    /// Clone of the first pilot with `cpf`.
    pub fn find(&self, cpf: &str) -> Option<Pilot> {
        let index = self.position_of(cpf)?;
        self.pilots.get(index).ok().map(|pilot| Pilot::clone(&pilot))
    }
}

/// The interactive menu over a pilot register.
pub struct Application<R, W> {
    commands: Register<Command<Fleet>>,
    fleet: Fleet,
    input: Scanner<R>,
    out: W,
}

impl<R: BufRead, W: Write> Application<R, W> {
    /// Build the application with the built-in commands registered.
    pub fn new(input: R, out: W, settings: Settings) -> Result<Self, RegisterError> {
        let app = Self {
            commands: Register::with_default_capacity(),
            fleet: Fleet {
                pilots: Register::new(settings.capacity),
                expansion_limit: settings.expansion_limit,
                styler: settings.styler,
            },
            input: Scanner::new(input),
            out,
        };

        for command in builtin_commands()? {
            app.register_command(command)?;
        }
        Ok(app)
    }

    /// Append a command to the menu, growing the menu if needed.
    pub fn register_command(&self, command: Command<Fleet>) -> Result<(), RegisterError> {
        debug!(description = ?command.description(), "registering command");
        self.commands.add_dynamic(command)
    }

    /// Preload pilots, growing the register as needed. Returns how many were added.
    pub fn seed<I>(&self, pilots: I) -> Result<usize, RegisterError>
    where
        I: IntoIterator<Item = Pilot>,
    {
        let mut added = 0;
        for pilot in pilots {
            self.fleet.pilots.add_dynamic(pilot)?;
            added += 1;
        }
        info!(added, capacity = self.fleet.pilots.capacity(), "seeded pilots");
        Ok(added)
    }

    /// Run the menu loop until a command terminates it or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;
            match self.select() {
                Ok(Control::Continue) => {}
                Ok(Control::Terminate) => return Ok(()),
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("input closed, leaving menu");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn commands(&self) -> &Register<Command<Fleet>> {
        &self.commands
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn pilots(&self) -> &Register<Pilot> {
        &self.fleet.pilots
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let mut lines = Vec::new();
        let mut index = 0;
        self.commands.for_each(|command| {
            if let Some(description) = command.description() {
                lines.push(format!("{} - {}", index, description));
            }
            index += 1;
        });

        let styler = self.fleet.styler;
        writeln!(self.out)?;
        styler.section_top(&mut self.out, "MENU")?;
        for line in &lines {
            styler.row(&mut self.out, line)?;
        }
        styler.section_mid(&mut self.out)?;
        styler.row(
            &mut self.out,
            &format!(
                "Storage: {}/{}",
                self.fleet.pilots.size(),
                self.fleet.pilots.capacity()
            ),
        )?;
        styler.section_bot(&mut self.out)?;
        self.out.flush()
    }

    fn select(&mut self) -> io::Result<Control> {
        let choice = ask(&mut self.input, &mut self.out, ValueKind::Integer)?
            .as_integer()
            .and_then(|value| usize::try_from(value).ok());

        let Some(index) = choice.filter(|&index| self.commands.valid(index)) else {
            warn!(?choice, "invalid menu option");
            let message = self.fleet.styler.error("Invalid option.");
            writeln!(self.out, "{}", message)?;
            return Ok(Control::Continue);
        };

        let command = self.commands.get(index).map_err(io::Error::other)?;
        debug!(index, description = ?command.description(), "running command");
        command.execute(&self.fleet, &mut self.input, &mut self.out)
    }
}

// ============================================================================
// BUILT-IN COMMANDS
// ============================================================================

fn builtin_commands() -> Result<Vec<Command<Fleet>>, RegisterError> {
    Ok(vec![
        Command::new("Register a new pilot")
            .prompt(Prompt::new(keys::NAME, "Pilot name:", ValueKind::Text))?
            .prompt(Prompt::new(keys::CPF, "Pilot CPF:", ValueKind::Text))?
            .prompt(Prompt::new(keys::LICENSE, "Pilot license:", ValueKind::Text))?
            .on_ok(register_pilot),
        Command::new("List pilots").on_ok(list_pilots),
        Command::new("Find pilot by CPF")
            .prompt(Prompt::new(keys::CPF, "CPF to look up:", ValueKind::Text))?
            .on_ok(find_pilot),
        Command::new("Remove pilot by CPF")
            .prompt(Prompt::new(keys::CPF, "CPF to remove:", ValueKind::Text))?
            .on_ok(remove_pilot),
        Command::new("Expand pilot storage")
            .prompt(Prompt::new(
                keys::EXPAND,
                "How many slots to add:",
                ValueKind::Integer,
            ))?
            .on_ok(expand_storage),
        Command::new("Quit").on_ok(quit),
    ])
}

fn register_pilot(fleet: &Fleet, answers: &Answers, out: &mut dyn Write) -> io::Result<Control> {
    let (Some(name), Some(cpf), Some(license)) = (
        answers.text(keys::NAME),
        answers.text(keys::CPF),
        answers.text(keys::LICENSE),
    ) else {
        writeln!(out, "{}", fleet.styler.error("Missing pilot details."))?;
        return Ok(Control::Continue);
    };

    let pilot = Pilot::new(cpf, name).with_license(license);
    match fleet.pilots.add(pilot) {
        Ok(()) => {
            info!(cpf, "pilot registered");
            let message = format!("New pilot added [{}].", cpf);
            writeln!(out, "{}", fleet.styler.success(&message))?;
        }
        Err(err @ RegisterError::Full { .. }) => {
            warn!(cpf, %err, "pilot storage full");
            let message = format!("{}. Expand the storage to add more pilots.", err);
            writeln!(out, "{}", fleet.styler.warning(&message))?;
        }
        Err(err) => {
            warn!(cpf, %err, "could not register pilot");
            writeln!(out, "{}", fleet.styler.error(&err.to_string()))?;
        }
    }
    Ok(Control::Continue)
}

fn list_pilots(fleet: &Fleet, _answers: &Answers, out: &mut dyn Write) -> io::Result<Control> {
    if fleet.pilots.is_empty() {
        writeln!(out, "No pilots registered.")?;
    } else {
        writeln!(out, "[{}]", join(&fleet.pilots, ", "))?;
    }
    Ok(Control::Continue)
}

fn find_pilot(fleet: &Fleet, answers: &Answers, out: &mut dyn Write) -> io::Result<Control> {
    let cpf = answers.text(keys::CPF).unwrap_or_default();
    match fleet.find(cpf) {
        Some(pilot) => writeln!(out, "{}", pilot)?,
        None => {
            debug!(cpf, "pilot lookup missed");
            writeln!(out, "No pilot with CPF {}.", cpf)?;
        }
    }
    Ok(Control::Continue)
}

fn remove_pilot(fleet: &Fleet, answers: &Answers, out: &mut dyn Write) -> io::Result<Control> {
    let cpf = answers.text(keys::CPF).unwrap_or_default();
    let Some(pilot) = fleet.find(cpf) else {
        writeln!(out, "No pilot with CPF {}.", cpf)?;
        return Ok(Control::Continue);
    };

    match fleet.pilots.remove(&pilot) {
        Ok(()) => {
            info!(cpf, "pilot removed");
            writeln!(out, "{}", fleet.styler.success(&format!("Removed {}.", pilot)))?;
        }
        Err(err) => {
            warn!(cpf, %err, "pilot removal failed");
            writeln!(out, "{}", fleet.styler.error(&err.to_string()))?;
        }
    }
    Ok(Control::Continue)
}

fn expand_storage(fleet: &Fleet, answers: &Answers, out: &mut dyn Write) -> io::Result<Control> {
    let Some(extra) = answers.integer(keys::EXPAND) else {
        writeln!(out, "{}", fleet.styler.error("Invalid value."))?;
        return Ok(Control::Continue);
    };

    if extra > fleet.expansion_limit as i64 {
        let message = format!(
            "You cannot expand by more than {} at once.",
            fleet.expansion_limit
        );
        writeln!(out, "{}", fleet.styler.warning(&message))?;
        return Ok(Control::Continue);
    }

    // Negative requests wrap to their unsigned image, which the register rejects.
    match fleet.pilots.expand(extra as usize) {
        Ok(()) => {
            info!(extra, capacity = fleet.pilots.capacity(), "pilot storage expanded");
            let message = format!("Storage expanded to {} slots.", fleet.pilots.capacity());
            writeln!(out, "{}", fleet.styler.success(&message))?;
        }
        Err(err) => {
            warn!(extra, %err, "expansion rejected");
            writeln!(out, "{}", fleet.styler.error(&err.to_string()))?;
        }
    }
    Ok(Control::Continue)
}

fn quit(_fleet: &Fleet, _answers: &Answers, out: &mut dyn Write) -> io::Result<Control> {
    writeln!(out, "Application closed.")?;
    Ok(Control::Terminate)
}
