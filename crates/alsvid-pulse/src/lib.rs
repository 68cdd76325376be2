//! Alsvid pulse-program intermediate representation.
//!
//! This crate provides the value types for low-level pulse programs: hardware
//! [`Channel`]s, parametric [`Envelope`]s, timed [`Instruction`]s and ordered
//! [`Schedule`]s. It carries no numerics — integration and amplitude solving
//! live in `alsvid-scale`, which consumes these types read-only.
//!
//! # Example: a one-qubit drive program
//!
//! ```rust
//! use alsvid_pulse::{Channel, Envelope, Instruction, Schedule};
//! use num_complex::Complex64;
//!
//! let x90 = Envelope::drag(160.0, Complex64::new(0.08, 0.001), 40.0, 1.2).unwrap();
//!
//! let mut sched = Schedule::new("h_gate");
//! sched
//!     .insert(0.0, Instruction::shift_phase(std::f64::consts::FRAC_PI_2, Channel::Drive(0)))
//!     .insert(0.0, Instruction::play(x90, Channel::Drive(0)));
//!
//! assert_eq!(sched.stop_time(), 160.0);
//! assert_eq!(sched.channels().len(), 1);
//! ```

pub mod channel;
pub mod envelope;
pub mod error;
pub mod instruction;
pub mod schedule;

pub use channel::Channel;
pub use envelope::Envelope;
pub use error::{PulseError, PulseResult};
pub use instruction::{Instruction, InstructionKind};
pub use schedule::{Schedule, ScheduleEntry};
