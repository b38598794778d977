use chrono::{DateTime, Local};

/// RFC 822 with a numeric zone, e.g. `02 Jan 06 15:04 -0700`. This is the
/// format the `X-Clipboard-Timestamp` header carries.
pub const TIMESTAMP_FORMAT: &str = "%d %b %y %H:%M %z";

/// The value held by the store: the clipboard text and when it was written.
///
/// Entries are replaced wholesale, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardEntry {
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ClipboardEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: Local::now(),
        }
    }

    /// What a fresh store holds, and what expiry resets it to.
    pub fn empty() -> Self {
        Self::new(String::new())
    }

    pub fn header_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
