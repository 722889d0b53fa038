//! Frame source over a buffered SSE reader.

use std::io::BufRead;

use crate::error::TransportError;
use crate::frame::{Frame, FrameSource};
use crate::sse::parser::FrameAssembler;

/// [`FrameSource`] that reads SSE blocks from any `io::BufRead`.
///
/// The reader is typically a persistent HTTP response body, but anything
/// line-oriented works; this type never opens connections itself. Each
/// pull blocks until a complete frame has been assembled or the reader
/// ends or fails.
///
/// End of input is always [`TransportError::Closed`], even at a block
/// boundary: whether the stream is *finished* is signaled in-band by an
/// explicit end-of-stream frame, and only the decoder above knows about
/// that. Treating a bare close as an error is what keeps truncated
/// streams from passing for complete ones.
pub struct SseFrameSource<R> {
    reader: R,
    assembler: FrameAssembler,
    /// Latched once end of input is observed; later pulls report
    /// [`TransportError::Closed`] without touching the reader.
    closed: bool,
}

impl<R: BufRead + Send> SseFrameSource<R> {
    /// Wrap a buffered reader positioned at the start of the stream.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            assembler: FrameAssembler::new(),
            closed: false,
        }
    }
}

impl<R: BufRead + Send> FrameSource for SseFrameSource<R> {
    fn next_frame(&mut self) -> Result<Frame, TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }

        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                if self.assembler.is_mid_frame() {
                    tracing::debug!("stream ended mid-frame");
                }
                self.closed = true;
                return Err(TransportError::Closed);
            }

            // Lines arrive with their terminator; the format allows both
            // LF and CRLF.
            let stripped = line.strip_suffix('\n').unwrap_or(&line);
            let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);

            if let Some(frame) = self.assembler.feed_line(stripped) {
                tracing::trace!(name = %frame.name, bytes = frame.data.len(), "assembled frame");
                return Ok(frame);
            }
        }
    }
}
