//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::io::Cursor;

use pilot_registry::{Application, Pilot, Register, Settings};

// Re-export canonical test utilities from pilot_registry::testing
pub use pilot_registry::testing::{cpfs, make_pilot, sample_pilots, sample_register, SAMPLE_CPFS};

// ============================================================================
// SCRIPTED SESSIONS
// ============================================================================

/// Outcome of running the menu over a fixed script.
pub struct Session {
    pub pilots: Vec<Pilot>,
    pub capacity: usize,
    pub output: String,
}

/// Run the application over `script` with plain output.
pub fn run_session(script: &str) -> Session {
    run_session_with(script, Settings::default())
}

/// Run the application over `script` with custom settings.
pub fn run_session_with(script: &str, settings: Settings) -> Session {
    let mut app = Application::new(Cursor::new(script.to_string()), Vec::new(), settings)
        .expect("built-in commands register");
    app.run().expect("in-memory session does not fail");

    let mut pilots = Vec::new();
    app.pilots().for_each(|pilot| pilots.push(pilot.clone()));
    let capacity = app.pilots().capacity();
    let output = String::from_utf8(app.into_output()).expect("output is UTF-8");

    Session {
        pilots,
        capacity,
        output,
    }
}

/// Script lines that register one pilot through menu option 0.
pub fn register_script(name: &str, cpf: &str, license: &str) -> String {
    format!("0\n{}\n{}\n{}\n", name, cpf, license)
}

// ============================================================================
// REGISTER ASSERTIONS
// ============================================================================

/// Every index below `size()` resolves and nothing past it does.
pub fn assert_contiguous<T>(register: &Register<T>) {
    let size = register.size();
    for index in 0..size {
        assert!(register.get(index).is_ok(), "hole at index {}", index);
        assert!(register.valid(index), "slot {} not valid", index);
    }
    for index in size..register.capacity() {
        assert!(!register.valid(index), "slot {} occupied past size", index);
    }
}
