// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A fixed-capacity register of slots with first-fit insertion.
//!
//! The register owns a row of slots, each either empty or holding one element.
//! New elements go into the lowest empty slot. Removing an element leaves a hole
//! that a single left-to-right compaction pass ("revalidation") closes again, so
//! after every successful mutation the elements sit contiguously in `[0, size)`.
//! Capacity only grows: explicitly through [`Register::expand`] or implicitly by
//! [`GROWTH_INCREMENT`] slots in [`Register::add_dynamic`].
//!
//! # Compaction
//!
//! The pass visits indices `1..capacity` once. Whenever an occupied slot follows
//! an empty one, its element moves one position left. A single hole therefore
//! travels to the end in one pass, but two holes are only partially closed.
//! That is enough because every mutation runs the pass and removals happen one
//! at a time.
//!
//! ```text
//!   remove(C)         [A][B][ ][D][E]
//!   pass i=3          [A][B][D][ ][E]
//!   pass i=4          [A][B][D][E][ ]
//! ```
//!
//! # Locking
//!
//! The slots live behind a `parking_lot::RwLock`. Mutators hold the write lock
//! for their whole duration, readers hold the read lock, and an expansion is
//! published only after compaction succeeded. Views returned by [`Register::get`]
//! keep the read lock until dropped, and [`Register::for_each`] holds it while
//! visiting. Mutating the same register from inside either one blocks forever.

mod error;

pub use error::{RegisterError, RevalidationCause};

use std::fmt;

use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};

use crate::contracts;

/// Capacity used by [`Register::with_default_capacity`].
pub const DEFAULT_CAPACITY: usize = 2;

/// Slots added by [`Register::add_dynamic`] when the register is full.
pub const GROWTH_INCREMENT: usize = 2;

/// Backing store guarded by the register's lock.
struct Slots<T> {
    slots: Vec<Option<T>>,
    count: usize,
}

impl<T> Slots<T> {
    fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, count: 0 }
    }

    fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    fn insert_first_fit(&mut self, element: T) -> Result<(), RegisterError> {
        let index = self.first_free().ok_or(RegisterError::Full {
            capacity: self.slots.len(),
        })?;
        self.slots[index] = Some(element);
        self.count += 1;
        Ok(())
    }

    /// Single forward compaction pass.
    ///
    /// Fails without moving anything when the tracked count disagrees with the
    /// occupied slots, since shifting on top of a broken layout would only hide
    /// the damage.
    fn revalidate(&mut self, cause: RevalidationCause) -> Result<(), RegisterError> {
        if contracts::occupied(&self.slots) != self.count {
            return Err(RegisterError::RevalidationFailed { cause });
        }

        for i in 1..self.slots.len() {
            if self.slots[i].is_some() && self.slots[i - 1].is_none() {
                self.slots[i - 1] = self.slots[i].take();
            }
        }

        Ok(())
    }

    /// Grow by `extra` empty slots at the high end.
    ///
    /// Allocation happens first, then compaction of the current layout, and only
    /// then do the new slots become visible. Any failure leaves `len()` as it was.
    fn grow(&mut self, extra: usize) -> Result<(), RegisterError> {
        if isize::try_from(extra).is_err() {
            return Err(RegisterError::NegativeExpansion {
                requested: extra as isize,
            });
        }

        self.slots
            .try_reserve_exact(extra)
            .map_err(|_| RegisterError::AllocationFailed { requested: extra })?;

        self.revalidate(RevalidationCause::Expansion)?;

        let capacity = self.slots.len() + extra;
        self.slots.resize_with(capacity, || None);
        Ok(())
    }

    fn check(&self) {
        contracts::check_layout(&self.slots, self.count);
    }
}

/// A lock-guarded, growable row of optional slots.
///
/// See the [module docs](self) for the layout and locking rules.
pub struct Register<T> {
    inner: RwLock<Slots<T>>,
}

impl<T> Register<T> {
    /// Create a register with `capacity` empty slots.
    ///
    /// A zero-capacity register is permanently full until expanded.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Slots::with_capacity(capacity)),
        }
    }

    /// Create a register with [`DEFAULT_CAPACITY`] slots.
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Place `element` in the lowest empty slot.
    ///
    /// Fails with [`RegisterError::Full`] when no slot is free; the register is
    /// never grown here.
    pub fn add(&self, element: T) -> Result<(), RegisterError> {
        let mut slots = self.inner.write();
        slots.insert_first_fit(element)?;
        slots.check();
        Ok(())
    }

    /// Like [`add`](Self::add), but grows by [`GROWTH_INCREMENT`] slots first
    /// when the register is full.
    pub fn add_dynamic(&self, element: T) -> Result<(), RegisterError> {
        let mut slots = self.inner.write();
        if slots.first_free().is_none() {
            slots.grow(GROWTH_INCREMENT)?;
        }
        slots.insert_first_fit(element)?;
        slots.check();
        Ok(())
    }

    /// Add `extra` empty slots after the existing ones.
    ///
    /// `extra` values that would be negative as a signed integer are rejected
    /// with [`RegisterError::NegativeExpansion`]. On any failure the capacity
    /// and contents are unchanged.
    pub fn expand(&self, extra: usize) -> Result<(), RegisterError> {
        let mut slots = self.inner.write();
        slots.grow(extra)?;
        slots.check();
        Ok(())
    }

    /// Borrow the element at `index`.
    ///
    /// Accepts `index < size()`. The returned view holds the read lock.
    pub fn get(&self, index: usize) -> Result<MappedRwLockReadGuard<'_, T>, RegisterError> {
        let slots = self.inner.read();
        if index >= slots.count {
            return Err(RegisterError::IndexOutOfRange {
                index,
                size: slots.count,
            });
        }

        RwLockReadGuard::try_map(slots, |s| s.slots.get(index).and_then(Option::as_ref)).map_err(
            |s| RegisterError::IndexOutOfRange {
                index,
                size: s.count,
            },
        )
    }

    /// Visit the occupied slots among the first `size()` indices, in order.
    ///
    /// The visitor must not mutate this register.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let slots = self.inner.read();
        for element in slots.slots.iter().take(slots.count).flatten() {
            visit(element);
        }
    }

    /// Empty every slot. Capacity is kept.
    pub fn clear(&self) -> Result<(), RegisterError> {
        let mut guard = self.inner.write();
        let slots = &mut *guard;
        for slot in slots.slots.iter_mut() {
            if slot.take().is_some() {
                slots.count -= 1;
            }
        }
        slots.check();
        Ok(())
    }

    /// Whether `index` is inside capacity and its slot is occupied.
    pub fn valid(&self, index: usize) -> bool {
        self.inner
            .read()
            .slots
            .get(index)
            .is_some_and(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of occupied slots.
    pub fn size(&self) -> usize {
        self.inner.read().count
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.inner.read().slots.len()
    }

    // ------------------------------------------------------------------------
    // Nullable entry points
    // ------------------------------------------------------------------------

    /// [`add`](Self::add) for callers holding a possibly-absent element.
    pub fn add_nullable(&self, element: Option<T>) -> Result<(), RegisterError> {
        self.add(element.ok_or(RegisterError::NullElement)?)
    }

    /// [`add_dynamic`](Self::add_dynamic) for callers holding a possibly-absent element.
    pub fn add_dynamic_nullable(&self, element: Option<T>) -> Result<(), RegisterError> {
        self.add_dynamic(element.ok_or(RegisterError::NullElement)?)
    }

    /// [`for_each`](Self::for_each) for callers holding a possibly-absent visitor.
    pub fn for_each_nullable<F>(&self, visit: Option<F>) -> Result<(), RegisterError>
    where
        F: FnMut(&T),
    {
        self.for_each(visit.ok_or(RegisterError::NullVisitor)?);
        Ok(())
    }
}

impl<T: PartialEq> Register<T> {
    /// Remove the first element equal to `element`, then compact.
    ///
    /// Only one instance is removed even when duplicates exist. A miss is not an
    /// error; the compaction pass still runs.
    pub fn remove(&self, element: &T) -> Result<(), RegisterError> {
        let mut slots = self.inner.write();
        if let Some(index) = slots
            .slots
            .iter()
            .position(|slot| slot.as_ref() == Some(element))
        {
            slots.slots[index] = None;
            slots.count -= 1;
        }

        slots.revalidate(RevalidationCause::Removal)?;
        slots.check();
        Ok(())
    }

    /// Linear scan over every slot for an equal element.
    pub fn contains(&self, element: &T) -> bool {
        self.inner
            .read()
            .slots
            .iter()
            .flatten()
            .any(|stored| stored == element)
    }

    /// [`remove`](Self::remove) for callers holding a possibly-absent element.
    pub fn remove_nullable(&self, element: Option<&T>) -> Result<(), RegisterError> {
        self.remove(element.ok_or(RegisterError::NullElement)?)
    }

    /// [`contains`](Self::contains); an absent element is never contained.
    pub fn contains_nullable(&self, element: Option<&T>) -> bool {
        element.is_some_and(|element| self.contains(element))
    }
}

impl<T> Default for Register<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T> fmt::Debug for Register<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.inner.read();
        f.debug_struct("Register")
            .field("size", &slots.count)
            .field("capacity", &slots.slots.len())
            .finish()
    }
}
