//! Core node traits

use crate::{ByteCursor, CursorCfg, Error};
use bytes::Bytes;

/// A field or aggregate that knows its encoded size and can read or write itself.
///
/// # Size
///
/// [`Node::encode_size`] MUST return the exact number of bytes consumed by [`Node::read`] and
/// produced by [`Node::write`] for the node in its current state. Composites and arrays rely on
/// this to lay children out in sequential, non-overlapping ranges.
///
/// # Failure
///
/// If [`Node::read`] returns an error, the cursor is left where it was before the call and
/// the node is left unchanged.
pub trait Node {
    /// Returns the number of bytes this node occupies on the wire.
    fn encode_size(&self) -> usize;

    /// Replaces the value(s) of this node with the bytes at the cursor position.
    fn read(&mut self, cursor: &mut ByteCursor) -> Result<(), Error>;

    /// Writes this node at the cursor position.
    fn write(&self, cursor: &mut ByteCursor) -> Result<(), Error>;
}

/// Extension trait for writing a node to a fresh buffer.
pub trait Encode: Node {
    /// Encodes this node into a new buffer using the default configuration.
    ///
    /// (Provided method).
    fn encode(&self) -> Result<Bytes, Error> {
        self.encode_cfg(CursorCfg::default())
    }

    /// Encodes this node into a new buffer using the provided configuration.
    ///
    /// (Provided method).
    fn encode_cfg(&self, cfg: CursorCfg) -> Result<Bytes, Error> {
        let mut cursor = ByteCursor::with_cfg(b"", cfg);
        self.write(&mut cursor)?;
        Ok(cursor.into_bytes())
    }
}

// Automatically implement `Encode` for all nodes.
impl<T: Node + ?Sized> Encode for T {}

/// Extension trait for constructing a node from encoded bytes.
pub trait Decode: Node + Default {
    /// Creates a default node and reads it from the cursor.
    ///
    /// (Provided method).
    fn read_from(cursor: &mut ByteCursor) -> Result<Self, Error> {
        let mut node = Self::default();
        node.read(cursor)?;
        Ok(node)
    }

    /// Decodes a node from `bytes` using the default configuration, ensuring all bytes are
    /// consumed.
    ///
    /// (Provided method).
    fn decode(bytes: impl AsRef<[u8]>) -> Result<Self, Error> {
        Self::decode_cfg(bytes, CursorCfg::default())
    }

    /// Decodes a node from `bytes` using the provided configuration, ensuring all bytes are
    /// consumed.
    ///
    /// (Provided method).
    fn decode_cfg(bytes: impl AsRef<[u8]>, cfg: CursorCfg) -> Result<Self, Error> {
        let mut cursor = ByteCursor::with_cfg(bytes, cfg);
        let node = Self::read_from(&mut cursor)?;

        // Check that the buffer is fully consumed.
        let remaining = cursor.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }
        Ok(node)
    }
}

// Automatically implement `Decode` for nodes with a default value.
impl<T: Node + Default> Decode for T {}
