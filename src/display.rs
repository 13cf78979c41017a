// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling for the menu screens.
//!
//! OneDark for dark terminals, One Light for light ones. The detection tries
//! `PILOT_REGISTRY_THEME` first, then `COLORFGBG`, then macOS system appearance,
//! then defaults to dark. Colors are off when `NO_COLOR` is set or stdout is not
//! a TTY; a [`Styler`] with colors off renders plain text, which is what tests
//! and pipelines see.
//!
//! # Theme detection order
//!
//! 1. `PILOT_REGISTRY_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::io::{self, Write};
use std::sync::OnceLock;

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 44;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("PILOT_REGISTRY_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background colors 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used on stdout
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLER
// ═══════════════════════════════════════════════════════════════════════════

/// Renders styled text and boxes into any writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Styler {
    colors: bool,
}

impl Styler {
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Plain output, never emits escape codes.
    pub fn plain() -> Self {
        Self { colors: false }
    }

    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Apply theme color with optional modifiers
    pub fn themed(&self, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
        if self.colors {
            format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.themed(GREEN, &[], text)
    }

    pub fn warning(&self, text: &str) -> String {
        self.themed(YELLOW, &[], text)
    }

    pub fn error(&self, text: &str) -> String {
        self.themed(RED, &[BOLD], text)
    }

    /// Content line: │ content          │
    pub fn row(&self, out: &mut dyn Write, content: &str) -> io::Result<()> {
        let pad = BOX_WIDTH.saturating_sub(visible_len(content));
        let border = self.themed(GRAY, &[], "│");
        writeln!(out, "{}{}{}{}", border, content, " ".repeat(pad), border)
    }

    /// Section header: ┌─ LABEL ──────────┐
    pub fn section_top(&self, out: &mut dyn Write, label: &str) -> io::Result<()> {
        let label_part = format!("─ {} ", self.themed(CYAN, &[BOLD], label));
        let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
        writeln!(
            out,
            "{}{}{}",
            self.themed(GRAY, &[], "┌"),
            label_part,
            self.themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
        )
    }

    /// Section divider: ├──────────────────┤
    pub fn section_mid(&self, out: &mut dyn Write) -> io::Result<()> {
        let line = format!("├{}┤", "─".repeat(BOX_WIDTH));
        writeln!(out, "{}", self.themed(GRAY, &[], &line))
    }

    /// Section footer: └──────────────────┘
    pub fn section_bot(&self, out: &mut dyn Write) -> io::Result<()> {
        let line = format!("└{}┘", "─".repeat(BOX_WIDTH));
        writeln!(out, "{}", self.themed(GRAY, &[], &line))
    }

    /// Centered bold title inside a double-line box.
    pub fn banner(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        let border = |s: &str| self.themed(BLUE, &[], s);
        let colored = self.themed(BRIGHT_CYAN, &[BOLD], text);
        let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
        let left_pad = total_pad / 2;
        let right_pad = total_pad - left_pad;

        writeln!(out, "{}", border(&format!("╔{}╗", "═".repeat(BOX_WIDTH))))?;
        writeln!(
            out,
            "{}{}{}{}{}",
            border("║"),
            " ".repeat(left_pad),
            colored,
            " ".repeat(right_pad),
            border("║")
        )?;
        writeln!(out, "{}", border(&format!("╚{}╝", "═".repeat(BOX_WIDTH))))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
