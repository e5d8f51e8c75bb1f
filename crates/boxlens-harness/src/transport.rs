#![forbid(unsafe_code)]

//! Panel transport that records instead of delivering.

use boxlens_core::{Command, PanelTransport};

/// Collects every command the panel sends, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingTransport {
    sent: Vec<Command>,
}

impl RecordingTransport {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands sent so far.
    pub fn sent(&self) -> &[Command] {
        &self.sent
    }

    /// Most recent command.
    pub fn last(&self) -> Option<&Command> {
        self.sent.last()
    }

    /// Take all recorded commands, leaving the recorder empty.
    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.sent)
    }
}

impl PanelTransport for RecordingTransport {
    fn send_to_active_tab(&mut self, command: Command) {
        self.sent.push(command);
    }
}
