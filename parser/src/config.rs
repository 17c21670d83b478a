//! Types for use as [crate::ByteCursor] configuration.

/// Byte order used to encode and decode fixed-width numeric values.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Configuration of a [crate::ByteCursor].
///
/// # Examples
///
/// ```
/// use binary_parser::{ByteCursor, ByteOrder, CursorCfg};
///
/// // Big-endian cursor that never grows past 16 bytes
/// let cfg = CursorCfg::default().with_byte_order(ByteOrder::Big).with_max_len(16);
/// let mut cursor = ByteCursor::with_cfg(b"", cfg);
/// cursor.write_fixed(0x0102u16).unwrap();
/// assert_eq!(cursor.as_slice(), &[0x01, 0x02]);
///
/// cursor.write_bytes(&[0; 13]).unwrap();
/// assert_eq!(cursor.len(), 15);
/// assert!(cursor.write_fixed(0u16).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CursorCfg {
    /// Byte order of fixed-width numeric values.
    pub byte_order: ByteOrder,

    /// Maximum length the buffer may be extended to by a write.
    pub max_len: usize,
}

impl Default for CursorCfg {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::default(),
            max_len: usize::MAX,
        }
    }
}

impl CursorCfg {
    /// Returns a copy of this configuration using `byte_order`.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Returns a copy of this configuration limiting the buffer to `max_len` bytes.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }
}
