//! SSE line classification and frame assembly.

use bytes::Bytes;

use crate::frame::Frame;

/// Frame name used when a block carries data but no `event:` field, per
/// the SSE wire default.
const DEFAULT_FRAME_NAME: &str = "message";

/// One classified line of an SSE stream.
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// `name: value` field line. A line with no colon is a field with an
    /// empty value.
    Field { name: String, value: String },
    /// Comment / keep-alive line (starts with `:`).
    Comment,
    /// Empty line, terminates the pending frame.
    Blank,
}

/// Classify a single SSE line (without its trailing newline).
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Blank;
    }

    if line.starts_with(':') {
        return SseLine::Comment;
    }

    match line.split_once(':') {
        Some((name, value)) => SseLine::Field {
            name: name.to_string(),
            // The spec strips exactly one leading space from the value.
            value: value.strip_prefix(' ').unwrap_or(value).to_string(),
        },
        None => SseLine::Field {
            name: line.to_string(),
            value: String::new(),
        },
    }
}

/// Stateful assembler that accumulates lines and emits complete frames.
///
/// Feed lines one at a time; a frame comes out on the blank line that
/// closes a block with an `event:` field or at least one `data:` line.
/// A blank line with nothing accumulated emits nothing, so leading
/// keep-alive blocks are harmless.
#[derive(Debug, Default)]
pub struct FrameAssembler {
    /// Frame name from the `event:` field, if one was seen.
    event_name: Option<String>,
    /// Accumulated `data:` lines (the format allows several per frame).
    data: Vec<String>,
}

impl FrameAssembler {
    /// Create an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line, possibly completing a frame.
    pub fn feed_line(&mut self, line: &str) -> Option<Frame> {
        match parse_sse_line(line) {
            SseLine::Field { name, value } => {
                match name.as_str() {
                    "event" => self.event_name = Some(value),
                    "data" => self.data.push(value),
                    // id and retry belong to the reconnect layer above
                    // this crate; other fields are reserved.
                    _ => {}
                }
                None
            }
            SseLine::Comment => None,
            SseLine::Blank => self.emit(),
        }
    }

    fn emit(&mut self) -> Option<Frame> {
        if self.event_name.is_none() && self.data.is_empty() {
            return None;
        }

        let name = self
            .event_name
            .take()
            .unwrap_or_else(|| DEFAULT_FRAME_NAME.to_string());
        let payload = self.data.join("\n");
        self.data.clear();

        Some(Frame::new(name, Bytes::from(payload)))
    }

    /// Whether a frame is partially accumulated.
    pub fn is_mid_frame(&self) -> bool {
        self.event_name.is_some() || !self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_classifies_as_blank() {
        assert_eq!(parse_sse_line(""), SseLine::Blank);
    }

    #[test]
    fn test_comment_lines_classify_as_comments() {
        assert_eq!(parse_sse_line(": keep-alive"), SseLine::Comment);
        assert_eq!(parse_sse_line(":"), SseLine::Comment);
    }

    #[test]
    fn test_field_lines_split_on_the_first_colon() {
        assert_eq!(
            parse_sse_line("event: end"),
            SseLine::Field {
                name: "event".to_string(),
                value: "end".to_string()
            }
        );
        assert_eq!(
            parse_sse_line(r#"data: {"url": "http://x"}"#),
            SseLine::Field {
                name: "data".to_string(),
                value: r#"{"url": "http://x"}"#.to_string()
            }
        );
    }

    #[test]
    fn test_only_one_leading_space_is_stripped() {
        assert_eq!(
            parse_sse_line("data:  two spaces"),
            SseLine::Field {
                name: "data".to_string(),
                value: " two spaces".to_string()
            }
        );
        assert_eq!(
            parse_sse_line("data:no space"),
            SseLine::Field {
                name: "data".to_string(),
                value: "no space".to_string()
            }
        );
    }

    #[test]
    fn test_line_without_colon_is_a_field_with_empty_value() {
        assert_eq!(
            parse_sse_line("data"),
            SseLine::Field {
                name: "data".to_string(),
                value: String::new()
            }
        );
    }

    #[test]
    fn test_assembler_emits_on_the_blank_line() {
        let mut assembler = FrameAssembler::new();
        assert!(assembler.feed_line("event: event").is_none());
        assert!(assembler.feed_line(r#"data: {"event": {}}"#).is_none());

        let frame = assembler.feed_line("").unwrap();
        assert_eq!(frame.name, "event");
        assert_eq!(frame.data, Bytes::from(r#"{"event": {}}"#));
    }

    #[test]
    fn test_assembler_joins_multiple_data_lines_with_newlines() {
        let mut assembler = FrameAssembler::new();
        assembler.feed_line("event: event");
        assembler.feed_line("data: line one");
        assembler.feed_line("data: line two");

        let frame = assembler.feed_line("").unwrap();
        assert_eq!(frame.data, Bytes::from("line one\nline two"));
    }

    #[test]
    fn test_assembler_defaults_the_frame_name_to_message() {
        let mut assembler = FrameAssembler::new();
        assembler.feed_line("data: nameless");

        let frame = assembler.feed_line("").unwrap();
        assert_eq!(frame.name, "message");
    }

    #[test]
    fn test_event_only_blocks_emit_an_empty_payload() {
        let mut assembler = FrameAssembler::new();
        assembler.feed_line("event: end");

        let frame = assembler.feed_line("").unwrap();
        assert_eq!(frame.name, "end");
        assert!(frame.data.is_empty());
    }

    #[test]
    fn test_blank_line_with_nothing_pending_emits_nothing() {
        let mut assembler = FrameAssembler::new();
        assert!(assembler.feed_line("").is_none());
        assert!(assembler.feed_line(": keep-alive").is_none());
        assert!(assembler.feed_line("").is_none());
    }

    #[test]
    fn test_id_and_retry_fields_are_consumed_without_effect() {
        let mut assembler = FrameAssembler::new();
        assembler.feed_line("id: 42");
        assembler.feed_line("retry: 3000");
        assert!(!assembler.is_mid_frame());

        assembler.feed_line("event: event");
        assembler.feed_line("id: 43");
        assembler.feed_line("data: {}");
        let frame = assembler.feed_line("").unwrap();
        assert_eq!(frame.name, "event");
        assert_eq!(frame.data, Bytes::from("{}"));
    }

    #[test]
    fn test_comments_inside_a_block_do_not_break_it() {
        let mut assembler = FrameAssembler::new();
        assembler.feed_line("event: event");
        assembler.feed_line(": still alive");
        assembler.feed_line("data: {}");

        let frame = assembler.feed_line("").unwrap();
        assert_eq!(frame.name, "event");
    }

    #[test]
    fn test_assembler_resets_between_frames() {
        let mut assembler = FrameAssembler::new();
        assembler.feed_line("event: event");
        assembler.feed_line("data: first");
        let first = assembler.feed_line("").unwrap();
        assert_eq!(first.name, "event");

        // The next block must not inherit the previous name.
        assembler.feed_line("data: second");
        let second = assembler.feed_line("").unwrap();
        assert_eq!(second.name, "message");
        assert_eq!(second.data, Bytes::from("second"));
    }

    #[test]
    fn test_mid_frame_tracking() {
        let mut assembler = FrameAssembler::new();
        assert!(!assembler.is_mid_frame());
        assembler.feed_line("event: event");
        assert!(assembler.is_mid_frame());
        assembler.feed_line("data: {}");
        assembler.feed_line("");
        assert!(!assembler.is_mid_frame());
    }
}
