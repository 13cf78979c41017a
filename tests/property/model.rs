//! Model-based test: the register against a plain `Vec` plus a capacity.

use proptest::prelude::*;
use pilot_registry::{Register, RegisterError, GROWTH_INCREMENT};

use crate::common::assert_contiguous;

#[derive(Debug, Clone)]
enum Op {
    Add(u8),
    AddDynamic(u8),
    Remove(u8),
    Expand(usize),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..6).prop_map(Op::Add),
        3 => (0u8..6).prop_map(Op::AddDynamic),
        4 => (0u8..6).prop_map(Op::Remove),
        1 => (0usize..4).prop_map(Op::Expand),
        1 => Just(Op::Clear),
    ]
}

#[derive(Debug)]
struct Model {
    items: Vec<u8>,
    capacity: usize,
}

impl Model {
    fn apply(&mut self, op: &Op) -> Result<(), RegisterError> {
        match *op {
            Op::Add(v) => {
                if self.items.len() == self.capacity {
                    return Err(RegisterError::Full {
                        capacity: self.capacity,
                    });
                }
                self.items.push(v);
            }
            Op::AddDynamic(v) => {
                if self.items.len() == self.capacity {
                    self.capacity += GROWTH_INCREMENT;
                }
                self.items.push(v);
            }
            Op::Remove(v) => {
                if let Some(at) = self.items.iter().position(|&x| x == v) {
                    self.items.remove(at);
                }
            }
            Op::Expand(extra) => self.capacity += extra,
            Op::Clear => self.items.clear(),
        }
        Ok(())
    }
}

fn apply(register: &Register<u8>, op: &Op) -> Result<(), RegisterError> {
    match *op {
        Op::Add(v) => register.add(v),
        Op::AddDynamic(v) => register.add_dynamic(v),
        Op::Remove(v) => register.remove(&v),
        Op::Expand(extra) => register.expand(extra),
        Op::Clear => register.clear(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: every operation sequence leaves the register equal to the model.
    #[test]
    fn prop_register_matches_model(
        capacity in 0usize..6,
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let register = Register::new(capacity);
        let mut model = Model { items: Vec::new(), capacity };

        for op in &ops {
            prop_assert_eq!(apply(&register, op), model.apply(op), "op {:?}", op);

            let mut seen = Vec::new();
            register.for_each(|v| seen.push(*v));
            prop_assert_eq!(&seen, &model.items);
            prop_assert_eq!(register.size(), model.items.len());
            prop_assert_eq!(register.capacity(), model.capacity);
            for item in &model.items {
                prop_assert!(register.contains(item));
            }
        }
        assert_contiguous(&register);
    }
}
