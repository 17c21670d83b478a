//! Error types for cursor and node operations

use std::str::Utf8Error;
use thiserror::Error;

/// Error type for cursor and node operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("read out of bounds: {start}..{end} exceeds buffer length {len}")]
    ReadOutOfBounds { start: usize, end: usize, len: usize },
    #[error("invalid range: {count} bytes at offset {position} overflows")]
    InvalidRange { position: usize, count: usize },
    #[error("invalid utf-8 at offset {offset}: {source}")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: Utf8Error,
    },
    #[error("text too long: {len} bytes > {size} bytes")]
    TextTooLong { len: usize, size: usize },
    #[error("length exceeded: {0} > {1}")]
    LengthExceeded(usize, usize), // found, max
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
}
