//! Leaf nodes for fixed-width numeric types.
//!
//! # Supported Kinds
//!
//! The set of numeric kinds is closed (see [`Primitive`]):
//!
//! | Kind | Width |
//! |------|-------|
//! | `u8`, `i8` | 1 |
//! | `u16`, `i16` | 2 |
//! | `u32`, `i32`, `f32` | 4 |
//! | `u64`, `i64`, `f64` | 8 |
//! | `u128`, `i128` | 16 |
//!
//! Values are converted explicitly to and from bytes in the byte order configured on the
//! [`ByteCursor`] (little-endian unless changed). The in-memory representation of a value is
//! never reinterpreted, so the output does not depend on the host.

use crate::{ByteCursor, ByteOrder, Error, Node};
use bytes::{Buf, BufMut};
use paste::paste;
use std::fmt::Debug;

mod private {
    pub trait Sealed {}
}

/// A fixed-width numeric kind that can be stored on the wire.
///
/// This trait is sealed.
pub trait Primitive: private::Sealed + Copy + Default + PartialEq + Debug {
    /// The number of bytes of the encoded value.
    const SIZE: usize;

    /// Takes `SIZE` bytes from `buf`.
    ///
    /// Panics if `buf` has fewer than `SIZE` bytes remaining.
    fn get(buf: &mut impl Buf, order: ByteOrder) -> Self;

    /// Puts `SIZE` bytes into `buf`.
    ///
    /// Panics if `buf` has room for fewer than `SIZE` bytes.
    fn put(self, buf: &mut impl BufMut, order: ByteOrder);
}

/// A fixed-width integer kind.
pub trait Integer: Primitive {}

/// A fixed-width IEEE 754 floating point kind.
pub trait FloatingPoint: Primitive {}

/// A leaf holding a fixed-width integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Int<T: Integer> {
    pub value: T,
}

/// A leaf holding a fixed-width float.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Float<T: FloatingPoint> {
    pub value: T,
}

// Leaf implementation
macro_rules! impl_leaf {
    ($leaf:ident, $bound:ident) => {
        impl<T: $bound> $leaf<T> {
            /// Creates a leaf holding `value`.
            pub const fn new(value: T) -> Self {
                Self { value }
            }
        }

        impl<T: $bound> From<T> for $leaf<T> {
            fn from(value: T) -> Self {
                Self::new(value)
            }
        }

        impl<T: $bound> Node for $leaf<T> {
            #[inline]
            fn encode_size(&self) -> usize {
                T::SIZE
            }

            #[inline]
            fn read(&mut self, cursor: &mut ByteCursor) -> Result<(), Error> {
                self.value = cursor.read_fixed()?;
                Ok(())
            }

            #[inline]
            fn write(&self, cursor: &mut ByteCursor) -> Result<(), Error> {
                cursor.write_fixed(self.value)
            }
        }
    };
}

impl_leaf!(Int, Integer);
impl_leaf!(Float, FloatingPoint);

// Numeric types implementation
macro_rules! impl_primitive {
    (@single $type:ident, $leaf:ident, $marker:ident) => {
        paste! {
            impl private::Sealed for $type {}

            impl Primitive for $type {
                const SIZE: usize = 1;

                #[inline]
                fn get(buf: &mut impl Buf, _: ByteOrder) -> Self {
                    buf.[<get_ $type>]()
                }

                #[inline]
                fn put(self, buf: &mut impl BufMut, _: ByteOrder) {
                    buf.[<put_ $type>](self);
                }
            }

            impl $marker for $type {}

            #[doc = concat!("A [`", stringify!($leaf), "`] holding a `", stringify!($type), "`.")]
            pub type [<$type:upper>] = $leaf<$type>;
        }
    };
    ($type:ident, $leaf:ident, $marker:ident) => {
        paste! {
            impl private::Sealed for $type {}

            impl Primitive for $type {
                const SIZE: usize = std::mem::size_of::<$type>();

                #[inline]
                fn get(buf: &mut impl Buf, order: ByteOrder) -> Self {
                    match order {
                        ByteOrder::Little => buf.[<get_ $type _le>](),
                        ByteOrder::Big => buf.[<get_ $type>](),
                    }
                }

                #[inline]
                fn put(self, buf: &mut impl BufMut, order: ByteOrder) {
                    match order {
                        ByteOrder::Little => buf.[<put_ $type _le>](self),
                        ByteOrder::Big => buf.[<put_ $type>](self),
                    }
                }
            }

            impl $marker for $type {}

            #[doc = concat!("A [`", stringify!($leaf), "`] holding a `", stringify!($type), "`.")]
            pub type [<$type:upper>] = $leaf<$type>;
        }
    };
}

impl_primitive!(@single u8, Int, Integer);
impl_primitive!(u16, Int, Integer);
impl_primitive!(u32, Int, Integer);
impl_primitive!(u64, Int, Integer);
impl_primitive!(u128, Int, Integer);
impl_primitive!(@single i8, Int, Integer);
impl_primitive!(i16, Int, Integer);
impl_primitive!(i32, Int, Integer);
impl_primitive!(i64, Int, Integer);
impl_primitive!(i128, Int, Integer);
impl_primitive!(f32, Float, FloatingPoint);
impl_primitive!(f64, Float, FloatingPoint);
