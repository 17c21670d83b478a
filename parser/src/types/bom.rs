//! Leaf node for Unicode byte-order marks.
//!
//! Reading a [`ByteOrderMark`] compares the next 2 (UTF-16) or 4 (UTF-32) bytes with the
//! canonical big-endian and little-endian marks and records which one matched. A mismatch is
//! not an error: it yields [`Endianness::Unknown`].
//!
//! ```text
//!            read()                       write()
//! Unknown ---------> Big | Little | Unknown ---------> mark bytes (or nothing if Unknown)
//! ```
//!
//! The detected endianness does not change how the cursor decodes anything. Callers that want
//! subsequent fields decoded accordingly pass [`ByteOrderMark::byte_order`] to
//! [`ByteCursor::set_byte_order`].

use crate::{ByteCursor, ByteOrder, Error, Node};
use tracing::debug;

const UTF16_BE: [u8; 2] = [0xFE, 0xFF];
const UTF16_LE: [u8; 2] = [0xFF, 0xFE];
const UTF32_BE: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
const UTF32_LE: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];

/// Width of the UTF code unit whose byte-order mark is expected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UtfWidth {
    Utf16,
    Utf32,
}

impl UtfWidth {
    /// Returns the length of the byte-order mark.
    pub const fn size(self) -> usize {
        match self {
            Self::Utf16 => 2,
            Self::Utf32 => 4,
        }
    }

    /// Returns the mark for `order`.
    fn mark(self, order: ByteOrder) -> &'static [u8] {
        match (self, order) {
            (Self::Utf16, ByteOrder::Big) => &UTF16_BE,
            (Self::Utf16, ByteOrder::Little) => &UTF16_LE,
            (Self::Utf32, ByteOrder::Big) => &UTF32_BE,
            (Self::Utf32, ByteOrder::Little) => &UTF32_LE,
        }
    }
}

/// Endianness derived from a byte-order mark.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Endianness {
    Big,
    Little,
    #[default]
    Unknown,
}

impl From<ByteOrder> for Endianness {
    fn from(order: ByteOrder) -> Self {
        match order {
            ByteOrder::Big => Self::Big,
            ByteOrder::Little => Self::Little,
        }
    }
}

/// A byte-order mark of fixed width.
///
/// [`Node::encode_size`] is always the width of the mark, but writing a mark whose endianness
/// is [`Endianness::Unknown`] produces no bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ByteOrderMark {
    width: UtfWidth,
    endianness: Endianness,
}

impl ByteOrderMark {
    /// Creates a mark of unknown endianness.
    pub fn new(width: UtfWidth) -> Self {
        Self::with_endianness(width, Endianness::Unknown)
    }

    /// Creates a mark with the provided endianness.
    pub fn with_endianness(width: UtfWidth, endianness: Endianness) -> Self {
        Self { width, endianness }
    }

    pub fn width(&self) -> UtfWidth {
        self.width
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns the byte order to use for what follows the mark, if one was detected.
    pub fn byte_order(&self) -> Option<ByteOrder> {
        match self.endianness {
            Endianness::Big => Some(ByteOrder::Big),
            Endianness::Little => Some(ByteOrder::Little),
            Endianness::Unknown => None,
        }
    }
}

impl Node for ByteOrderMark {
    fn encode_size(&self) -> usize {
        self.width.size()
    }

    fn read(&mut self, cursor: &mut ByteCursor) -> Result<(), Error> {
        let bytes = cursor.read_slice(self.width.size())?;
        self.endianness = if bytes == self.width.mark(ByteOrder::Big) {
            Endianness::Big
        } else if bytes == self.width.mark(ByteOrder::Little) {
            Endianness::Little
        } else {
            Endianness::Unknown
        };
        debug!(width = ?self.width, endianness = ?self.endianness, "read byte-order mark");
        Ok(())
    }

    fn write(&self, cursor: &mut ByteCursor) -> Result<(), Error> {
        match self.byte_order() {
            Some(order) => cursor.write_bytes(self.width.mark(order)),
            None => Ok(()),
        }
    }
}
