//! Error taxonomy for stream decoding.
//!
//! Three classes surface from the decoder: transport failures passed
//! through from the frame source, protocol errors for frame names outside
//! the dispatch table, and decode errors when an event payload does not
//! deserialize into the envelope shape. Nothing is retried or swallowed
//! here; reconnect-or-abort policy belongs to the caller.

use thiserror::Error;

/// Failure reported by a [`FrameSource`](crate::frame::FrameSource).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport ended. Ordinary EOF lands here on purpose: the
    /// protocol marks a clean finish with an explicit `"end"` frame, so a
    /// close without one means the stream was truncated, not finished.
    #[error("stream closed before end-of-stream frame")]
    Closed,

    /// Read failure below the framing layer.
    #[error("stream read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure outcome of a decoder pull.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The frame source failed; passed through verbatim.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Frame name outside the protocol's dispatch table. Indicates version
    /// skew between client and server, or a corrupted stream.
    #[error("unknown frame name: {0}")]
    UnknownFrame(String),

    /// An event-bearing frame whose payload did not deserialize into the
    /// envelope shape.
    #[error("invalid JSON in {name} frame: {source}")]
    Decode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StreamError {
    /// Whether the failure originated below the framing layer.
    ///
    /// Protocol and decode errors are never retryable by reconnecting; a
    /// transport failure might be, at the caller's discretion.
    pub fn is_transport(&self) -> bool {
        matches!(self, StreamError::Transport(_))
    }
}
