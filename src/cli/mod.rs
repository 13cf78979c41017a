// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pilot-registry command-line interface.
//!
//! No subcommands: the binary always opens the interactive menu. Flags size the
//! pilot storage, cap single expansions, and optionally preload pilots from a
//! JSON array before the first menu is shown.

use std::path::PathBuf;

use clap::Parser;
use pilot_registry::{DEFAULT_CAPACITY, EXPANSION_LIMIT};

#[derive(Parser, Debug)]
#[command(
    name = "pilot-registry",
    about = "Interactive registry of pilots backed by a fixed-capacity register",
    version
)]
pub struct Cli {
    /// Initial number of pilot slots
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Largest number of slots a single expand request may add
    #[arg(long, default_value_t = EXPANSION_LIMIT)]
    pub expansion_limit: usize,

    /// JSON file with an array of pilots to load at start-up
    ///
    /// Each entry has `cpf`, `name` and an optional `license`. The pilot
    /// storage grows as needed to fit the whole file.
    #[arg(long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// Log at debug level (logs go to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
