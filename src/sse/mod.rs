//! Server-Sent Events framing.
//!
//! Turns a line-oriented SSE byte stream into [`Frame`](crate::frame::Frame)s.
//! The wire format:
//! - `event: <name>` - frame name line
//! - `data: <payload>` - payload line(s), joined with newlines
//! - Empty line - terminates the frame
//! - Lines starting with `:` - comments / keep-alives (ignored)
//!
//! # Module structure
//! - `parser` - line classification and the blank-line-terminated assembler
//! - `source` - [`SseFrameSource`], a [`FrameSource`](crate::frame::FrameSource)
//!   over any `io::BufRead`

mod parser;
mod source;

pub use parser::{parse_sse_line, FrameAssembler, SseLine};
pub use source::SseFrameSource;
