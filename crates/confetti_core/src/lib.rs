//! Confetti Core Runtime
//!
//! Foundational primitives shared by the confetti crates:
//!
//! - **State Machines**: flat, enum-keyed machines for component lifecycles
//! - **Event Dispatch**: lifecycle notifications with borrowed payloads
//!
//! # Example
//!
//! ```rust
//! use confetti_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum State { Idle, Running }
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Event { Start }
//!
//! let mut fsm = StateMachine::builder(State::Idle)
//!     .on(State::Idle, Event::Start, State::Running)
//!     .build();
//!
//! assert_eq!(fsm.send(Event::Start), Some(State::Running));
//! assert_eq!(fsm.send(Event::Start), None);
//! ```

pub mod events;
pub mod fsm;

pub use events::{AnimationEvent, EventDispatcher, Listener};
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
