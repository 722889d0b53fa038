//! Frame-to-event decoding.
//!
//! [`FrameDecoder`] pulls one frame per call from a [`FrameSource`] and
//! maps it to exactly one outcome: a decoded domain event, normal
//! termination, or an error. Frame-level mechanics never reach the caller.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::envelope::EventEnvelope;
use crate::error::StreamError;
use crate::frame::FrameSource;

/// Frame name carrying a serialized domain event.
const EVENT_FRAME: &str = "event";
/// Frame name marking the protocol-sanctioned end of the stream.
const END_FRAME: &str = "end";

/// Pull interface for decoded event streams.
///
/// Abstracts the decoder so callers can accept either the production
/// [`FrameDecoder`] or a test double.
pub trait EventStream {
    /// The externally-owned domain event type.
    type Event;

    /// Get the next outcome.
    ///
    /// # Returns
    /// - `Ok(Some(event))` - one decoded domain event
    /// - `Ok(None)` - normal termination; the server said the stream is done
    /// - `Err(error)` - transport, protocol, or decode failure
    fn next_event(&mut self) -> Result<Option<Self::Event>, StreamError>;
}

/// Decodes frames from a [`FrameSource`] into typed domain events.
///
/// Each call to [`next_event`](FrameDecoder::next_event) consumes at most
/// one frame and produces exactly one outcome. Events come back in arrival
/// order; nothing is buffered ahead, reordered, or silently dropped. The
/// decoder exclusively owns its source and is not meant to be shared
/// across threads without external synchronization.
pub struct FrameDecoder<S, E> {
    source: S,
    /// Set once the end-of-stream frame has been seen; later calls return
    /// normal termination without touching the source.
    ended: bool,
    _event: PhantomData<E>,
}

impl<S, E> FrameDecoder<S, E>
where
    S: FrameSource,
    E: DeserializeOwned,
{
    /// Wrap a live frame source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            ended: false,
            _event: PhantomData,
        }
    }

    /// Pull and decode the next frame.
    ///
    /// Dispatches on the frame name: `"event"` frames have their payload
    /// deserialized as an [`EventEnvelope`] and yield the wrapped event,
    /// `"end"` yields `Ok(None)`, and anything else is a protocol error
    /// naming the unrecognized frame. Source failures pass through
    /// verbatim.
    pub fn next_event(&mut self) -> Result<Option<E>, StreamError> {
        if self.ended {
            return Ok(None);
        }

        let frame = self.source.next_frame()?;
        match frame.name.as_str() {
            EVENT_FRAME => match serde_json::from_slice::<EventEnvelope<E>>(&frame.data) {
                Ok(envelope) => Ok(Some(envelope.event)),
                Err(source) => Err(StreamError::Decode {
                    name: frame.name.clone(),
                    source,
                }),
            },
            END_FRAME => {
                tracing::debug!("server marked end of stream");
                self.ended = true;
                Ok(None)
            }
            other => {
                tracing::warn!(frame = other, "unrecognized frame name");
                Err(StreamError::UnknownFrame(other.to_string()))
            }
        }
    }

    /// Consume the decoder and hand the source back.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S, E> EventStream for FrameDecoder<S, E>
where
    S: FrameSource,
    E: DeserializeOwned,
{
    type Event = E;

    fn next_event(&mut self) -> Result<Option<E>, StreamError> {
        FrameDecoder::next_event(self)
    }
}
