//! A console pilot registry built on a fixed-capacity slot register.
//!
//! The heart of the crate is [`Register`], a lock-guarded row of optional
//! slots with first-fit insertion, removal followed by a single compaction
//! pass, and explicit or on-demand growth. The menu and the pilot list of the
//! interactive application are both plain clients of it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   menu.rs    │────▶│    app.rs    │◀────│   types.rs   │
//! │ (Command,    │     │ (Application,│     │   (Pilot,    │
//! │  Prompt,     │     │  Fleet)      │     │    Person)   │
//! │  Scanner)    │     │              │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      register.rs                         │
//! │  (Register<T>: first-fit add, remove + revalidate,       │
//! │   expand, get, for_each; checked by contracts.rs)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Property            | Statement                                             |
//! |---------------------|-------------------------------------------------------|
//! | Count               | `size()` equals the number of occupied slots          |
//! | Compaction          | after a successful mutation, slots `[0, size)` are full |
//! | Monotone capacity   | `capacity() >= size()` and capacity never shrinks     |
//!
//! # Usage
//!
//! ```
//! use pilot_registry::{Pilot, Register, RegisterError};
//!
//! let pilots = Register::new(2);
//! pilots.add(Pilot::new("10913", "Ana")).unwrap();
//! pilots.add(Pilot::new("95220", "Bia")).unwrap();
//! assert_eq!(
//!     pilots.add(Pilot::new("42819", "Caio")),
//!     Err(RegisterError::Full { capacity: 2 })
//! );
//!
//! pilots.add_dynamic(Pilot::new("42819", "Caio")).unwrap();
//! assert_eq!(pilots.capacity(), 4);
//!
//! pilots.remove(&Pilot::new("10913", "Ana")).unwrap();
//! assert_eq!(pilots.get(0).unwrap().cpf, "95220");
//! ```

pub mod app;
pub mod contracts;
pub mod display;
pub mod menu;
pub mod register;
pub mod testing;
mod types;
mod utils;

pub use app::{Application, Fleet, Settings, EXPANSION_LIMIT};
pub use menu::{Answers, Command, Control, Prompt, Scanner, Value, ValueKind};
pub use register::{
    Register, RegisterError, RevalidationCause, DEFAULT_CAPACITY, GROWTH_INCREMENT,
};
pub use types::{Person, Pilot};
pub use utils::join;
