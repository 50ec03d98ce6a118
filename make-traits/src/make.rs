//! Manufacturer start-procedure contract.

use crate::sink::InstructionSink;

/// Implementation side of the make/vehicle bridge.
///
/// A `Make` encapsulates everything manufacturer-specific about getting a
/// vehicle running. Vehicle categories hold a `Make` and delegate to it, so
/// adding a manufacturer never multiplies the category types.
///
/// # Example
///
/// ```ignore
/// use make_traits::{ConsoleSink, Make};
///
/// fn demo_start(make: &dyn Make) {
///     println!("Starting a {}:", make.name());
///     make.start(&ConsoleSink);
/// }
/// ```
pub trait Make: Send + Sync {
    /// Manufacturer display name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Emit the manufacturer's start instructions to `sink`, in order.
    ///
    /// The sequence is fixed per manufacturer. The operation takes no other
    /// input, mutates no state, and cannot fail.
    fn start(&self, sink: &dyn InstructionSink);
}
