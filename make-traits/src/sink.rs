//! Instruction Output Abstractions
//!
//! Provides an injectable destination for start-procedure instructions so the
//! same `Make` can print to the console in the demo binary and be observed in
//! memory by tests.

use std::sync::Mutex;

/// Destination for start-procedure instruction lines.
///
/// Emission is infallible: sinks that could fail to record a line (there are
/// none shipped) would have to swallow the failure rather than surface it,
/// since `Make::start` has no error path.
pub trait InstructionSink: Send + Sync {
    /// Record or display a single instruction line.
    fn emit(&self, instruction: &str);
}

/// Sink that writes each instruction to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl InstructionSink for ConsoleSink {
    fn emit(&self, instruction: &str) {
        println!("{}", instruction);
    }
}

/// In-memory sink implementation for testing/development.
///
/// Records every emission in order; [`snapshot`](BufferSink::snapshot)
/// returns a copy of the record.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    /// Everything emitted so far, in emission order.
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.lock().expect("instruction buffer poisoned").clone()
    }
}

impl InstructionSink for BufferSink {
    fn emit(&self, instruction: &str) {
        self.lines
            .lock()
            .expect("instruction buffer poisoned")
            .push(instruction.to_string());
    }
}
