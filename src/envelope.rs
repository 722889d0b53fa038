//! Envelope shape for event-bearing frame payloads.

use serde::Deserialize;

/// JSON wrapper around one serialized domain event.
///
/// The wrapped type is owned by the domain model; this crate only peels
/// the wrapper off. Sibling fields the server may add next to `event` are
/// ignored, so the envelope can grow without breaking older clients.
#[derive(Debug, Clone, Deserialize)]
pub struct EventEnvelope<E> {
    /// The wrapped domain event.
    pub event: E,
}
