//! Frame primitives and the transport pull abstraction.
//!
//! A [`Frame`] is one named, payload-bearing unit delivered by the
//! transport. [`FrameSource`] abstracts where frames come from, enabling
//! dependency injection and mocking in tests: the decoder runs the same
//! way over a live response body or a scripted fixture.

use bytes::Bytes;

use crate::error::TransportError;

/// One named frame from the transport.
///
/// Frames have no identity beyond arrival order. The payload is opaque at
/// this layer; interpretation happens in the decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Short discriminator, e.g. `"event"` or `"end"`.
    pub name: String,
    /// Raw payload bytes as delivered.
    pub data: Bytes,
}

impl Frame {
    /// Build a frame from a name and payload.
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Blocking pull interface over a frame-delivering transport.
///
/// Implementations must preserve delivery order, and once they have
/// reported end-of-stream or a failure they must keep reporting that
/// terminal condition on subsequent pulls.
///
/// Cancellation is the transport's concern: a source whose underlying read
/// can be interrupted surfaces the interruption as a [`TransportError`].
pub trait FrameSource: Send {
    /// Pull the next frame, blocking until one is available.
    ///
    /// Returns [`TransportError::Closed`] when the transport ends. The
    /// source does not know whether the protocol considers the stream
    /// finished; that judgment belongs to the decoder.
    fn next_frame(&mut self) -> Result<Frame, TransportError>;
}
