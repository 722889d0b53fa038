//! eventfeed - pull-based client decoder for server-push event streams.
//!
//! A server pushes domain events over a long-lived, text-framed transport;
//! this crate sits on the client side of that boundary. It pulls one named
//! frame at a time from a [`FrameSource`], dispatches on the frame name,
//! and hands back strongly-typed domain events, keeping "another event",
//! "finished cleanly", and "broke" strictly apart.
//!
//! The domain event type is owned by the caller: [`FrameDecoder`] is
//! generic over any `serde`-deserializable event, and only ever peels the
//! [`EventEnvelope`] wrapper off the wire payload.
//!
//! ```ignore
//! use std::io::BufReader;
//! use eventfeed::{sse::SseFrameSource, FrameDecoder};
//!
//! let source = SseFrameSource::new(BufReader::new(response_body));
//! let mut stream = FrameDecoder::<_, BuildEvent>::new(source);
//!
//! while let Some(event) = stream.next_event()? {
//!     handle(event);
//! }
//! ```
//!
//! No connections are opened here, nothing is retried, and a transport
//! that closes without the protocol's explicit `end` frame is an error,
//! not a normal finish. Reconnection and rendering belong to the caller.

pub mod decoder;
pub mod envelope;
pub mod error;
pub mod fixture;
pub mod frame;
pub mod sse;

pub use decoder::{EventStream, FrameDecoder};
pub use envelope::EventEnvelope;
pub use error::{StreamError, TransportError};
pub use fixture::FixtureSource;
pub use frame::{Frame, FrameSource};
