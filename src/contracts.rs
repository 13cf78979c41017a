// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the register's slot layout.
//!
//! Debug-mode assertions that verify the invariants every successful
//! mutation must leave behind. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Run only on success paths; a failed mutation reports an error instead
//!
//! # Invariants
//!
//! | Contract Function          | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_count_consistent`   | `count` equals the number of occupied slots     |
//! | `check_capacity_bound`     | `count <= capacity`                             |
//! | `check_compacted`          | slots `[0, count)` occupied, `[count, cap)` empty |
//!
//! # Usage
//!
//! ```ignore
//! use pilot_registry::contracts::*;
//!
//! // In debug builds, this panics if the layout is broken
//! check_layout(&slots, count);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    use crate::register::{DEFAULT_CAPACITY, GROWTH_INCREMENT};

    // add_dynamic on a full register must make room for at least one element
    assert!(GROWTH_INCREMENT > 0);
    assert!(DEFAULT_CAPACITY > 0);
};

// ============================================================================
// SLOT LAYOUT CONTRACTS
// ============================================================================

/// Count occupied slots.
#[inline]
pub fn occupied<T>(slots: &[Option<T>]) -> usize {
    slots.iter().filter(|slot| slot.is_some()).count()
}

/// Check whether the occupied slots form the prefix `[0, count)`.
///
/// Non-panicking counterpart of [`check_compacted`], usable from tests.
pub fn is_compacted<T>(slots: &[Option<T>], count: usize) -> bool {
    count <= slots.len()
        && slots[..count].iter().all(Option::is_some)
        && slots[count..].iter().all(Option::is_none)
}

/// Check that the tracked count matches the occupied slots.
///
/// # Panics (debug builds only)
/// Panics if `count` differs from the number of `Some` slots.
#[inline]
pub fn check_count_consistent<T>(slots: &[Option<T>], count: usize) {
    debug_assert_eq!(
        occupied(slots),
        count,
        "Contract violation: count {} does not match occupied slots",
        count
    );
}

/// Check that capacity never drops below the element count.
///
/// # Panics (debug builds only)
/// Panics if `count > slots.len()`.
#[inline]
pub fn check_capacity_bound<T>(slots: &[Option<T>], count: usize) {
    debug_assert!(
        count <= slots.len(),
        "Contract violation: count {} exceeds capacity {}",
        count,
        slots.len()
    );
}

/// Check that no empty slot sits before an occupied one.
///
/// # Panics (debug builds only)
/// Panics if any slot in `[0, count)` is empty or any slot at or past
/// `count` is occupied.
#[inline]
pub fn check_compacted<T>(slots: &[Option<T>], count: usize) {
    if let Some(hole) = slots.iter().take(count).position(Option::is_none) {
        debug_assert!(
            false,
            "Contract violation: empty slot {} inside occupied prefix [0, {})",
            hole,
            count
        );
    }
    if let Some(stray) = slots.iter().skip(count).position(Option::is_some) {
        debug_assert!(
            false,
            "Contract violation: occupied slot {} past count {}",
            stray + count,
            count
        );
    }
}

/// Run every layout contract.
#[inline]
pub fn check_layout<T>(slots: &[Option<T>], count: usize) {
    check_capacity_bound(slots, count);
    check_count_consistent(slots, count);
    check_compacted(slots, count);
}
