//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::register::Register;
use crate::types::Pilot;

/// CPFs of the canonical six-pilot fixture, in insertion order.
pub const SAMPLE_CPFS: [&str; 6] = ["10913", "95220", "42819", "58219", "69710", "64921"];

const SAMPLE_NAMES: [&str; 6] = ["A", "D", "B", "E", "C", "F"];

/// Create a pilot without a license.
pub fn make_pilot(cpf: &str, name: &str) -> Pilot {
    Pilot::new(cpf, name)
}

/// The six canonical pilots.
pub fn sample_pilots() -> Vec<Pilot> {
    SAMPLE_CPFS
        .iter()
        .zip(SAMPLE_NAMES)
        .map(|(cpf, name)| make_pilot(cpf, name))
        .collect()
}

/// A register of `capacity` slots holding every sample pilot.
///
/// Grows past `capacity` if it is smaller than the fixture.
pub fn sample_register(capacity: usize) -> Register<Pilot> {
    let register = Register::new(capacity);
    for pilot in sample_pilots() {
        register
            .add_dynamic(pilot)
            .expect("fresh register accepts the fixture");
    }
    register
}

/// CPFs of the register's logical elements in index order.
pub fn cpfs(register: &Register<Pilot>) -> Vec<String> {
    let mut out = Vec::with_capacity(register.size());
    register.for_each(|pilot| out.push(pilot.cpf.clone()));
    out
}
