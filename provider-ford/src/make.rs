//! Ford start procedure implementation.

use make_traits::{InstructionSink, Make};
use tracing::debug;

/// Start instructions for a Ford, in cabin order
const START_SEQUENCE: [&str; 3] = ["Unlock door", "Turn key", "Get out of Park"];

/// Ford's `Make` implementation.
///
/// Stateless; a single instance can back any number of vehicles.
#[derive(Debug, Clone, Copy, Default)]
pub struct FordMake;

impl Make for FordMake {
    fn name(&self) -> &'static str {
        "Ford"
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
    fn test_start_emits_ford_sequence() {
        let sink = BufferSink::default();
        FordMake.start(&sink);

        assert_eq!(
            sink.snapshot(),
            vec!["Unlock door", "Turn key", "Get out of Park"]
        );
    }

    #[test]
    fn test_repeated_start_appends_full_sequence() {
        let sink = BufferSink::default();
        FordMake.start(&sink);
        FordMake.start(&sink);

        let lines = sink.snapshot();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[..3], lines[3..]);
    }

    #[test]
    fn test_name() {
        assert_eq!(FordMake.name(), "Ford");
    }
}
