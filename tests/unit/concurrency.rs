//! Shared-register behavior under concurrent callers.

use std::sync::Arc;
use std::thread;

use pilot_registry::{Register, RegisterError, GROWTH_INCREMENT};

use crate::common::assert_contiguous;

const THREADS: usize = 8;
const PER_THREAD: usize = 50;

#[test]
fn test_concurrent_add_dynamic_loses_nothing() {
    let register = Register::new(0);

    thread::scope(|scope| {
        for t in 0..THREADS {
            let register = &register;
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    register.add_dynamic(t * PER_THREAD + i).unwrap();
                }
            });
        }
    });

    assert_eq!(register.size(), THREADS * PER_THREAD);
    assert_eq!(register.capacity() % GROWTH_INCREMENT, 0);
    assert_contiguous(&register);

    let mut seen = Vec::new();
    register.for_each(|value| seen.push(*value));
    seen.sort_unstable();
    assert_eq!(seen, (0..THREADS * PER_THREAD).collect::<Vec<_>>());
}

#[test]
fn test_concurrent_add_respects_capacity() {
    let register = Arc::new(Register::new(100));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let register = Arc::clone(&register);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .filter(|i| register.add(t * PER_THREAD + i).is_ok())
                    .count()
            })
        })
        .collect();

    let accepted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

    assert_eq!(accepted, 100);
    assert_eq!(register.size(), 100);
    assert_eq!(register.capacity(), 100);
    assert_eq!(register.add(0), Err(RegisterError::Full { capacity: 100 }));
}

#[test]
fn test_removals_and_readers_interleave() {
    let register = Register::new(THREADS * PER_THREAD);
    for value in 0..THREADS * PER_THREAD {
        register.add(value).unwrap();
    }

    thread::scope(|scope| {
        for t in 0..THREADS {
            let register = &register;
            scope.spawn(move || {
                // Even threads remove their own block, odd threads only read.
                if t % 2 == 0 {
                    for i in 0..PER_THREAD {
                        register.remove(&(t * PER_THREAD + i)).unwrap();
                    }
                } else {
                    for _ in 0..PER_THREAD {
                        let size = register.size();
                        assert!(size <= register.capacity());
                        let _ = register.get(0);
                    }
                }
            });
        }
    });

    assert_eq!(register.size(), THREADS * PER_THREAD / 2);
    assert_contiguous(&register);
    register.for_each(|value| assert_eq!((value / PER_THREAD) % 2, 1));
}
