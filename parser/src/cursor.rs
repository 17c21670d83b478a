//! Bounds-checked, auto-growing byte buffer with a movable position.
//!
//! # Reads
//!
//! A read takes the next `n` bytes starting at [`ByteCursor::position`]. If that range does
//! not lie entirely within the buffer, [`Error::ReadOutOfBounds`] is returned. A failed read
//! never moves the position (this includes text that is not valid UTF-8).
//!
//! # Writes
//!
//! A write overwrites the next `n` bytes starting at the position. If the range extends past
//! the end of the buffer, the buffer is first zero-extended to cover it, so writes only fail
//! when the range cannot be represented or the configured [`CursorCfg::max_len`] would be
//! exceeded.

use crate::{
    config::{ByteOrder, CursorCfg},
    types::primitives::Primitive,
    Error,
};
use bytes::{Bytes, BytesMut};
use std::ops::Range;
use tracing::trace;

/// An owned byte buffer plus the offset of the next read or write.
///
/// The position always satisfies `0 <= position <= len`. Successful operations advance it by
/// the number of bytes read or written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteCursor {
    buf: BytesMut,
    position: usize,
    cfg: CursorCfg,
}

impl ByteCursor {
    /// Creates a cursor over a copy of `data`, positioned at offset 0.
    pub fn new(data: impl AsRef<[u8]>) -> Self {
        Self::with_cfg(data, CursorCfg::default())
    }

    /// Creates a cursor over a copy of `data` using the provided configuration.
    pub fn with_cfg(data: impl AsRef<[u8]>, cfg: CursorCfg) -> Self {
        Self {
            buf: BytesMut::from(data.as_ref()),
            position: 0,
            cfg,
        }
    }

    /// Creates an empty cursor with room for `capacity` bytes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            position: 0,
            cfg: CursorCfg::default(),
        }
    }

    /// Returns the offset of the next read or write.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `position`, clamped to the length of the buffer.
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.buf.len());
    }

    /// Returns the length of the buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of bytes between the position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    /// Returns the whole buffer, regardless of position.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the cursor, returning the buffer.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    /// Returns the configuration of this cursor.
    pub fn cfg(&self) -> &CursorCfg {
        &self.cfg
    }

    /// Returns the byte order used by [`Self::read_fixed`] and [`Self::write_fixed`].
    pub fn byte_order(&self) -> ByteOrder {
        self.cfg.byte_order
    }

    /// Changes the byte order used for subsequent fixed-width reads and writes.
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.cfg.byte_order = byte_order;
    }

    /// Returns the `count` bytes following the position.
    fn range(&self, count: usize) -> Result<Range<usize>, Error> {
        let end = self
            .position
            .checked_add(count)
            .ok_or(Error::InvalidRange {
                position: self.position,
                count,
            })?;
        Ok(self.position..end)
    }

    /// Returns the next `count` bytes if they lie within the buffer.
    fn readable(&self, count: usize) -> Result<Range<usize>, Error> {
        let range = self.range(count)?;
        if range.end > self.buf.len() {
            return Err(Error::ReadOutOfBounds {
                start: range.start,
                end: range.end,
                len: self.buf.len(),
            });
        }
        Ok(range)
    }

    /// Returns the next `count` bytes, zero-extending the buffer to cover them.
    fn writable(&mut self, count: usize) -> Result<Range<usize>, Error> {
        let range = self.range(count)?;
        if range.end > self.cfg.max_len {
            return Err(Error::LengthExceeded(range.end, self.cfg.max_len));
        }
        if range.end > self.buf.len() {
            trace!(from = self.buf.len(), to = range.end, "extending buffer");
            self.buf.resize(range.end, 0);
        }
        Ok(range)
    }

    /// Reads the next `count` bytes without copying them.
    pub fn read_slice(&mut self, count: usize) -> Result<&[u8], Error> {
        let range = self.readable(count)?;
        self.position = range.end;
        Ok(&self.buf[range])
    }

    /// Reads the next `count` bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>, Error> {
        self.read_slice(count).map(<[u8]>::to_vec)
    }

    /// Writes `bytes` at the position.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let range = self.writable(bytes.len())?;
        self.buf[range.clone()].copy_from_slice(bytes);
        self.position = range.end;
        Ok(())
    }

    /// Reads a fixed-width value in the configured byte order.
    pub fn read_fixed<T: Primitive>(&mut self) -> Result<T, Error> {
        let order = self.cfg.byte_order;
        let mut bytes = self.read_slice(T::SIZE)?;
        Ok(T::get(&mut bytes, order))
    }

    /// Writes a fixed-width value in the configured byte order.
    pub fn write_fixed<T: Primitive>(&mut self, value: T) -> Result<(), Error> {
        let order = self.cfg.byte_order;
        let range = self.writable(T::SIZE)?;
        let mut dst = &mut self.buf[range.clone()];
        value.put(&mut dst, order);
        self.position = range.end;
        Ok(())
    }

    /// Reads the next `count` bytes as UTF-8 text.
    ///
    /// If the bytes are not valid UTF-8, nothing is consumed.
    pub fn read_text(&mut self, count: usize) -> Result<String, Error> {
        let range = self.readable(count)?;
        let text = std::str::from_utf8(&self.buf[range.clone()])
            .map_err(|source| Error::InvalidUtf8 {
                offset: range.start,
                source,
            })?
            .to_owned();
        self.position = range.end;
        Ok(text)
    }

    /// Writes `text` into exactly `count` bytes, zero-padding any bytes the text does not fill.
    ///
    /// Returns [`Error::TextTooLong`] (without writing anything) if the UTF-8 encoding of `text`
    /// is longer than `count`.
    pub fn write_text(&mut self, text: &str, count: usize) -> Result<(), Error> {
        let encoded = text.as_bytes();
        if encoded.len() > count {
            return Err(Error::TextTooLong {
                len: encoded.len(),
                size: count,
            });
        }
        let range = self.writable(count)?;
        let (head, tail) = self.buf[range.clone()].split_at_mut(encoded.len());
        head.copy_from_slice(encoded);
        tail.fill(0);
        self.position = range.end;
        Ok(())
    }
}

impl From<Vec<u8>> for ByteCursor {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for ByteCursor {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}
