//! Leaf [crate::Node] implementations.
//!
//! Leaves hold exactly one value and delegate directly to the [crate::ByteCursor]:
//! - [primitives]: fixed-width integers and floats
//! - [text]: UTF-8 text stored in a fixed number of bytes
//! - [bom]: Unicode byte-order marks, used to detect the endianness of what follows

pub mod bom;
pub mod primitives;
pub mod text;
