//! Rendering helpers for registers.

use std::fmt::Display;

use crate::register::Register;

/// Join the logical elements of `register` with `separator`.
///
/// Elements are rendered with `Display` in index order; the result is trimmed.
pub fn join<T: Display>(register: &Register<T>, separator: &str) -> String {
    let mut parts = Vec::with_capacity(register.size());
    register.for_each(|element| parts.push(element.to_string()));
    parts.join(separator).trim().to_string()
}
