//! Classification of individual runtime log lines.
//!
//! Only two structural shapes are recognized:
//! - `Program <id> invoke [<depth>]`
//! - `Program <id> success`
//!
//! Everything else is opaque content.

const PROGRAM_PREFIX: &str = "Program ";
const INVOKE_MARKER: &str = " invoke [";
const SUCCESS_MARKER: &str = " success";

/// A classified log line, borrowing from the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLine<'a> {
    /// Call opened at the given stack depth (1 = top-level instruction)
    Invoke { program_id: &'a str, depth: u32 },

    /// Call returned successfully
    Success { program_id: &'a str },

    /// Free-form diagnostic text
    Content,
}

impl<'a> LogLine<'a> {
    /// Classify an already-trimmed line
    ///
    /// Invoke markers take priority over success markers. The program id is
    /// the longest prefix that still leaves a valid marker after it, so ids
    /// containing the marker words are handled the same way a greedy pattern
    /// would. Text after the marker is ignored.
    pub fn parse(line: &'a str) -> Self {
        let Some(rest) = line.strip_prefix(PROGRAM_PREFIX) else {
            return LogLine::Content;
        };

        if let Some((program_id, depth)) = parse_invoke(rest) {
            return LogLine::Invoke { program_id, depth };
        }

        if let Some(program_id) = parse_success(rest) {
            return LogLine::Success { program_id };
        }

        LogLine::Content
    }

    pub fn is_marker(&self) -> bool {
        !matches!(self, LogLine::Content)
    }
}

impl<'a> From<&'a str> for LogLine<'a> {
    fn from(line: &'a str) -> Self {
        LogLine::parse(line)
    }
}

/// Split `<id> invoke [<digits>]...` into id and depth
///
/// **Private** - internal helper for LogLine::parse
fn parse_invoke(rest: &str) -> Option<(&str, u32)> {
    rest.rmatch_indices(INVOKE_MARKER)
        .filter(|(idx, _)| *idx > 0)
        .find_map(|(idx, marker)| {
            let tail = &rest[idx + marker.len()..];
            let digits_len = tail.bytes().take_while(u8::is_ascii_digit).count();

            if digits_len == 0 || !tail[digits_len..].starts_with(']') {
                return None;
            }

            // Oversized depths are still "not 1", which is all the scan looks at
            let depth = tail[..digits_len].parse::<u32>().unwrap_or(u32::MAX);
            Some((&rest[..idx], depth))
        })
}

/// Extract `<id>` from `<id> success...`
///
/// **Private** - internal helper for LogLine::parse
fn parse_success(rest: &str) -> Option<&str> {
    rest.rfind(SUCCESS_MARKER)
        .filter(|idx| *idx > 0)
        .map(|idx| &rest[..idx])
}
