//! Subaru start procedure implementation.

use make_traits::{InstructionSink, Make};
use tracing::debug;

/// Start instructions for a Subaru, in cabin order
const START_SEQUENCE: [&str; 3] = ["Grab key fob", "Hold brake", "Press start button"];

/// Subaru's `Make` implementation.
///
/// Stateless; a single instance can back any number of vehicles.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubaruMake;

impl Make for SubaruMake {
    fn name(&self) -> &'static str {
        "Subaru"
    }

    fn start(&self, sink: &dyn InstructionSink) {
        debug!(make = self.name(), steps = START_SEQUENCE.len(), "emitting start procedure");

        for instruction in START_SEQUENCE {
            sink.emit(instruction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use make_traits::BufferSink;

    #[test]
    fn test_start_emits_subaru_sequence() {
        let sink = BufferSink::default();
        SubaruMake.start(&sink);

        assert_eq!(
            sink.snapshot(),
            vec!["Grab key fob", "Hold brake", "Press start button"]
        );
    }

    #[test]
    fn test_repeated_start_appends_full_sequence() {
        let sink = BufferSink::default();
        SubaruMake.start(&sink);
        SubaruMake.start(&sink);

        let lines = sink.snapshot();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[..3], lines[3..]);
    }

    #[test]
    fn test_name() {
        assert_eq!(SubaruMake.name(), "Subaru");
    }
}
