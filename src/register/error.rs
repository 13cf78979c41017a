// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failure kinds surfaced by [`Register`](super::Register).
//!
//! All of these are value-level and recoverable. The register never retries
//! and never reports anything itself; the caller decides what to tell the user.

use std::fmt;

use thiserror::Error;

/// Which mutation triggered a failed compaction pass.
///
/// An expansion failure means the growth was aborted and the old slots are
/// still in place. A removal failure means the element was already cleared
/// when the pass gave up, so the caller should treat the contents as suspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevalidationCause {
    Expansion,
    Removal,
}

impl RevalidationCause {
    /// Stable numeric sub-code (`0` for expansion, `1` for removal).
    pub const fn code(self) -> u8 {
        match self {
            RevalidationCause::Expansion => 0,
            RevalidationCause::Removal => 1,
        }
    }
}

impl fmt::Display for RevalidationCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevalidationCause::Expansion => write!(f, "expansion"),
            RevalidationCause::Removal => write!(f, "removal"),
        }
    }
}

/// Error type for register operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// An absent element was offered where a concrete value was required.
    #[error("cannot store or remove an absent element")]
    NullElement,

    /// No empty slot is left and growth was not requested.
    #[error("register is full ({capacity} slots)")]
    Full { capacity: usize },

    /// The growth amount is negative when read as a signed integer.
    #[error("cannot expand by {requested} slots: growth must not be negative")]
    NegativeExpansion { requested: isize },

    /// The allocator refused the enlarged backing store.
    #[error("could not allocate {requested} additional slots")]
    AllocationFailed { requested: usize },

    /// The compaction pass could not complete.
    #[error("revalidation failed during {} [{}]", .cause, .cause.code())]
    RevalidationFailed { cause: RevalidationCause },

    /// Index outside `[0, size)`.
    #[error("index {index} out of range for {size} elements")]
    IndexOutOfRange { index: usize, size: usize },

    /// Traversal was requested without a visitor.
    #[error("traversal requires a visitor")]
    NullVisitor,
}
