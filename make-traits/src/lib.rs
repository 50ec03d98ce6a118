//! # Make Bridge Traits
//!
//! Manufacturer abstraction traits for the fleet demo.
//!
//! ## Overview
//!
//! This crate defines the contract between the vehicle-category core and
//! manufacturer-specific implementations. [`Make`] is the implementation side
//! of the bridge: each manufacturer supplies its own start procedure, and the
//! core delegates to whichever `Make` was injected without knowing which one
//! it holds.
//!
//! ## Traits
//!
//! - [`Make`](make::Make) - A manufacturer's start procedure and display name
//! - [`InstructionSink`](sink::InstructionSink) - Destination for start-procedure instruction lines
//!
//! ## Manufacturer Requirements
//!
//! Each supported manufacturer ships a concrete `Make` in its own provider
//! crate:
//!
//! | Manufacturer | Implementation Crate |
//! |--------------|----------------------|
//! | Subaru       | `provider-subaru`    |
//! | Ford         | `provider-ford`      |
//!
//! Only the outermost binary wires providers into the core; nothing in the
//! core depends on a concrete manufacturer.
//!
//! ## Thread Safety
//!
//! Both traits require `Send + Sync` bounds so implementations can be shared
//! behind `Arc` across threads. All shipped implementations are immutable
//! after construction (the [`BufferSink`](sink::BufferSink) uses interior
//! mutability for its record of emissions).
//!
//! ## Examples
//!
//! ### Implementing Make
//!
//! ```
//! use make_traits::{BufferSink, InstructionSink, Make};
//!
//! struct TeslaMake;
//!
//! impl Make for TeslaMake {
//!     fn name(&self) -> &'static str {
//!         "Tesla"
//!     }
//!
//!     fn start(&self, sink: &dyn InstructionSink) {
//!         sink.emit("Step on brake");
//!         sink.emit("Shift into gear");
//!     }
//! }
//!
//! let sink = BufferSink::default();
//! TeslaMake.start(&sink);
//! assert_eq!(sink.snapshot(), vec!["Step on brake", "Shift into gear"]);
//! ```

pub mod make;
pub mod sink;

pub use make::Make;
pub use sink::{BufferSink, ConsoleSink, InstructionSink};
