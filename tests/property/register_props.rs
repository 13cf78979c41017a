//! Register property tests.
//!
//! - Adds succeed exactly up to capacity
//! - Removal drops one instance and keeps the rest contiguous and ordered
//! - Expansion preserves contents and adds exactly the requested slots
//! - Dynamic adds grow by the fixed increment only when full

use proptest::prelude::*;
use pilot_registry::{Register, RegisterError, GROWTH_INCREMENT};

use crate::common::assert_contiguous;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small values so duplicates show up often.
fn values_strategy(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 0..max_len)
}

fn filled(values: &[u8], capacity: usize) -> Register<u8> {
    let register = Register::new(capacity);
    for &value in values {
        register.add(value).unwrap();
    }
    register
}

fn contents(register: &Register<u8>) -> Vec<u8> {
    let mut out = Vec::new();
    register.for_each(|v| out.push(*v));
    out
}

// ============================================================================
// ADD PROPERTIES
// ============================================================================

proptest! {
    /// Property: add succeeds for the first `capacity` elements and then fails with Full.
    #[test]
    fn prop_add_until_full(capacity in 0usize..16, extra in 1usize..4) {
        let register = Register::new(capacity);
        for i in 0..capacity {
            prop_assert!(register.add(i).is_ok());
        }
        for i in 0..extra {
            prop_assert_eq!(register.add(i), Err(RegisterError::Full { capacity }));
        }
        prop_assert_eq!(register.size(), capacity);
        prop_assert_eq!(register.capacity(), capacity);
    }

    /// Property: add_dynamic never fails and grows by GROWTH_INCREMENT only when full.
    #[test]
    fn prop_add_dynamic_growth(capacity in 0usize..8, count in 0usize..40) {
        let register = Register::new(capacity);
        for i in 0..count {
            let before = register.capacity();
            let was_full = register.size() == before;
            register.add_dynamic(i).unwrap();
            let expected = if was_full { before + GROWTH_INCREMENT } else { before };
            prop_assert_eq!(register.capacity(), expected);
        }
        prop_assert_eq!(register.size(), count);
        assert_contiguous(&register);
    }
}

// ============================================================================
// REMOVE PROPERTIES
// ============================================================================

proptest! {
    /// Property: removing a present value drops exactly its first instance.
    #[test]
    fn prop_remove_first_instance(
        values in values_strategy(20).prop_filter("non-empty", |v| !v.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let register = filled(&values, values.len());
        let target = values[pick.index(values.len())];

        register.remove(&target).unwrap();

        let mut expected = values.clone();
        let at = expected.iter().position(|&v| v == target).unwrap();
        expected.remove(at);

        prop_assert_eq!(register.size(), values.len() - 1);
        prop_assert_eq!(contents(&register), expected);
        assert_contiguous(&register);
    }

    /// Property: removing an absent value changes nothing.
    #[test]
    fn prop_remove_absent_is_noop(values in values_strategy(20), slack in 0usize..4) {
        let register = filled(&values, values.len() + slack);
        register.remove(&200).unwrap();
        prop_assert_eq!(contents(&register), values);
    }

    /// Property: get(i) resolves for every i < size() after any removal sequence.
    #[test]
    fn prop_contiguous_after_removals(
        values in values_strategy(20),
        removals in values_strategy(20),
    ) {
        let register = filled(&values, values.len());
        for value in &removals {
            register.remove(value).unwrap();
        }
        for i in 0..register.size() {
            prop_assert!(register.get(i).is_ok());
        }
        prop_assert!(register.get(register.size()).is_err());
    }
}

// ============================================================================
// EXPAND / CLEAR PROPERTIES
// ============================================================================

proptest! {
    /// Property: expand adds exactly `extra` slots and keeps contents and order.
    #[test]
    fn prop_expand_preserves_contents(values in values_strategy(12), extra in 0usize..32) {
        let register = filled(&values, values.len());
        register.expand(extra).unwrap();
        prop_assert_eq!(register.capacity(), values.len() + extra);
        prop_assert_eq!(contents(&register), values);
    }

    /// Property: negative requests are rejected and leave capacity unchanged.
    #[test]
    fn prop_negative_expand_rejected(values in values_strategy(12), requested in isize::MIN..0) {
        let register = filled(&values, values.len());
        prop_assert_eq!(
            register.expand(requested as usize),
            Err(RegisterError::NegativeExpansion { requested })
        );
        prop_assert_eq!(register.capacity(), values.len());
    }

    /// Property: clear empties the register without shrinking it.
    #[test]
    fn prop_clear_keeps_capacity(values in values_strategy(12), slack in 0usize..4) {
        let register = filled(&values, values.len() + slack);
        register.clear().unwrap();
        prop_assert!(register.is_empty());
        prop_assert_eq!(register.capacity(), values.len() + slack);
    }
}
