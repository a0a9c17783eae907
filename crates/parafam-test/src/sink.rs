//! Capturing diagnostic sink.

use std::sync::Mutex;

use parafam_core::DiagnosticSink;

/// Sink that stores every message for later assertions.
#[derive(Debug, Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Snapshot of the messages received so far.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl DiagnosticSink for MemorySink {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}
