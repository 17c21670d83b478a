//! Describe binary record layouts as typed fields and encode or decode them.
//!
//! # Overview
//!
//! A layout is a composition of [`Node`]s. Every node knows its encoded size and can read or
//! write itself against a [`ByteCursor`]:
//! - Leaves hold a single value: [`Int`], [`Float`], [`FixedText`] and [`ByteOrderMark`]
//! - Composites hold child nodes in wire order, declared with [`composite!`]
//! - Arrays hold a sequence of nodes of the same type: [`NodeArray`], [`read_array`] and
//!   [`write_array`]
//!
//! Encoding walks the children of a composite in declaration order and appends each one at
//! the cursor position. Decoding walks the same children in the same order. The core never
//! inserts padding, alignment or length prefixes.
//!
//! # Byte Order
//!
//! Fixed-width numbers are little-endian unless the cursor is configured otherwise (see
//! [`CursorCfg`]). A [`ByteOrderMark`] can be read first to detect the byte order of what
//! follows.
//!
//! # Errors
//!
//! Every read and write returns a [`Result`]. A failed read never moves the cursor and never
//! changes the node being read, including composites and arrays that fail part way through.
//!
//! # Example
//!
//! ```
//! use binary_parser::{composite, read_array, write_array, ByteCursor, Node, U16, U32};
//!
//! composite! {
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub struct Point {
//!         pub x: U32,
//!         pub y: U32,
//!     }
//! }
//!
//! let points = vec![
//!     Point { x: U32::new(1), y: U32::new(2) },
//!     Point { x: U32::new(3), y: U32::new(4) },
//! ];
//!
//! // Length-prefixed array: a count leaf followed by the items
//! let mut cursor = ByteCursor::default();
//! U16::new(points.len() as u16).write(&mut cursor).unwrap();
//! write_array(&mut cursor, &points).unwrap();
//! assert_eq!(cursor.len(), 2 + 2 * 8);
//!
//! cursor.set_position(0);
//! let mut count = U16::default();
//! count.read(&mut cursor).unwrap();
//! let decoded = read_array(&mut cursor, count.value as usize, Point::default).unwrap();
//! assert_eq!(decoded, points);
//! ```

pub mod array;
pub mod composite;
pub mod config;
pub mod cursor;
pub mod error;
pub mod node;
pub mod types;

// Re-export main types and traits
pub use array::{read_array, write_array, NodeArray};
pub use composite::Composite;
pub use config::{ByteOrder, CursorCfg};
pub use cursor::ByteCursor;
pub use error::Error;
pub use node::{Decode, Encode, Node};
pub use types::{
    bom::{ByteOrderMark, Endianness, UtfWidth},
    primitives::{
        Float, FloatingPoint, Int, Integer, Primitive, F32, F64, I128, I16, I32, I64, I8, U128,
        U16, U32, U64, U8,
    },
    text::FixedText,
};
