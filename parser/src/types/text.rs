//! Leaf node for UTF-8 text stored in a fixed number of bytes.

use crate::{ByteCursor, Error, Node};
use tracing::debug;

/// UTF-8 text occupying exactly `size` bytes on the wire.
///
/// The size is chosen at construction and never changes, regardless of the length of the value.
/// Text shorter than the size is padded with NUL bytes, and trailing NUL bytes are stripped
/// when reading. Text longer than the size is truncated to the longest prefix of whole
/// characters that fits.
///
/// There is no default size, so [`crate::Decode`] does not apply. Build a leaf with
/// [`FixedText::with_size`] and call [`Node::read`] on it instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedText {
    pub value: String,
    size: usize,
}

impl FixedText {
    /// Creates a leaf holding `value` in `size` bytes.
    pub fn new(value: impl Into<String>, size: usize) -> Self {
        Self {
            value: value.into(),
            size,
        }
    }

    /// Creates a leaf holding empty text in `size` bytes.
    pub fn with_size(size: usize) -> Self {
        Self::new(String::new(), size)
    }

    /// Returns the number of bytes this leaf occupies.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the prefix of the value that fits in `size` bytes.
    fn truncated(&self) -> &str {
        if self.value.len() <= self.size {
            return &self.value;
        }
        let mut end = self.size;
        while !self.value.is_char_boundary(end) {
            end -= 1;
        }
        debug!(len = self.value.len(), size = self.size, end, "truncating text");
        &self.value[..end]
    }
}

impl Node for FixedText {
    fn encode_size(&self) -> usize {
        self.size
    }

    fn read(&mut self, cursor: &mut ByteCursor) -> Result<(), Error> {
        let text = cursor.read_text(self.size)?;
        self.value = text.trim_end_matches('\0').to_owned();
        Ok(())
    }

    fn write(&self, cursor: &mut ByteCursor) -> Result<(), Error> {
        cursor.write_text(self.truncated(), self.size)
    }
}
