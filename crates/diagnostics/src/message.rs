//! Diagnostic line formatting
//!
//! Messages are bounded at [`MAX_MESSAGE_LEN`] bytes; anything longer is cut
//! on a char boundary and marked with [`TRUNCATION_MARKER`].

use std::borrow::Cow;

/// Maximum message length in bytes, marker included
pub const MAX_MESSAGE_LEN: usize = 255;

/// Appended to messages that were cut
pub const TRUNCATION_MARKER: &str = "...";

/// Bound a message to [`MAX_MESSAGE_LEN`] bytes
pub fn bound(message: &str) -> Cow<'_, str> {
    if message.len() <= MAX_MESSAGE_LEN {
        return Cow::Borrowed(message);
    }
    let mut end = MAX_MESSAGE_LEN - TRUNCATION_MARKER.len();
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    Cow::Owned(format!("{}{}", &message[..end], TRUNCATION_MARKER))
}

/// Message body without program prefix: `"<message>[: <errno text>]"`
pub fn body(message: &str, errno_text: Option<&str>) -> String {
    let message = bound(message);
    match errno_text {
        Some(text) => format!("{message}: {text}"),
        None => message.into_owned(),
    }
}

/// Full line: `"<program>: <message>[: <errno text>]"`
pub fn line(program: &str, message: &str, errno_text: Option<&str>) -> String {
    format!("{program}: {}", body(message, errno_text))
}

/// `"fatal error: <message>: <file>::<line>"`
pub fn fatal_error(file: &str, line_no: u32, message: &str) -> String {
    format!("fatal error: {message}: {file}::{line_no}")
}

/// `"out of memory: <message>: <file>::<line>"`
pub fn out_of_memory(file: &str, line_no: u32, message: &str) -> String {
    format!("out of memory: {message}: {file}::{line_no}")
}
