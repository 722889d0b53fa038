//! Scripted frame source for deterministic tests.
//!
//! [`FixtureSource`] replaces the live transport with an in-memory script
//! of frames and failures, so decoder behavior can be pinned down without
//! a network in sight.

use std::collections::VecDeque;

use bytes::Bytes;

use crate::error::TransportError;
use crate::frame::{Frame, FrameSource};

/// In-memory [`FrameSource`] fed from a script of frames and failures.
///
/// Steps are replayed in push order. Once the script runs out every
/// subsequent pull reports [`TransportError::Closed`], matching a
/// transport that has gone away and keeps saying so.
///
/// # Example
///
/// ```ignore
/// use eventfeed::{FixtureSource, FrameDecoder};
///
/// let mut source = FixtureSource::new();
/// source.push_frame("event", r#"{"event": {"type": "log", "payload": "hi"}}"#);
/// source.push_frame("end", "");
///
/// let mut decoder = FrameDecoder::<_, MyEvent>::new(source);
/// ```
#[derive(Debug, Default)]
pub struct FixtureSource {
    script: VecDeque<Result<Frame, TransportError>>,
}

impl FixtureSource {
    /// Create an empty fixture. With no steps pushed, every pull reports
    /// [`TransportError::Closed`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a frame to be yielded.
    pub fn push_frame(&mut self, name: impl Into<String>, data: impl Into<Bytes>) {
        self.script.push_back(Ok(Frame::new(name, data)));
    }

    /// Queue a failure to be reported.
    pub fn push_error(&mut self, error: TransportError) {
        self.script.push_back(Err(error));
    }

    /// Number of steps left in the script.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl FrameSource for FixtureSource {
    fn next_frame(&mut self) -> Result<Frame, TransportError> {
        match self.script.pop_front() {
            Some(step) => step,
            None => Err(TransportError::Closed),
        }
    }
}
