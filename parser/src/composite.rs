//! Ordered aggregates of nodes.
//!
//! A [`Composite`] exposes its children in declaration order, which is also their order on the
//! wire. Size, reads and writes are defined recursively over the children by [`encode_size`],
//! [`read`] and [`write`]. No padding, alignment or length prefixes are inserted.
//!
//! The [`composite!`](crate::composite!) macro declares a struct whose fields are nodes and
//! implements [`Composite`], [`Node`] and [`Default`] for it, so the child list is visible in
//! the type declaration itself.

use crate::{ByteCursor, Error, Node};
use tracing::debug;

/// A node made of child nodes.
pub trait Composite {
    /// Returns the children in wire order.
    fn children(&self) -> Vec<&dyn Node>;

    /// Returns the children in wire order, mutably.
    ///
    /// MUST yield the same children, in the same order, as [`Composite::children`].
    fn children_mut(&mut self) -> Vec<&mut dyn Node>;
}

/// Returns the sum of the encoded sizes of the children of `composite`.
pub fn encode_size<C: Composite + ?Sized>(composite: &C) -> usize {
    composite
        .children()
        .iter()
        .map(|child| child.encode_size())
        .sum()
}

/// Reads every child of `composite` in order.
///
/// Children are read into a copy of `composite`, which replaces it only once every child has
/// been read. If a child fails, `composite` is left unchanged, the cursor is moved back to where
/// it was before the call and the error is returned.
pub fn read<C: Composite + Clone>(
    composite: &mut C,
    cursor: &mut ByteCursor,
) -> Result<(), Error> {
    let start = cursor.position();
    let mut next = composite.clone();
    for (index, child) in next.children_mut().into_iter().enumerate() {
        if let Err(err) = child.read(cursor) {
            debug!(start, index, ?err, "failed to read child");
            cursor.set_position(start);
            return Err(err);
        }
    }
    *composite = next;
    Ok(())
}

/// Writes every child of `composite` in order.
///
/// If a child fails, the cursor is moved back to where it was before the call and the error is
/// returned. Bytes written by earlier children remain in the buffer.
pub fn write<C: Composite + ?Sized>(
    composite: &C,
    cursor: &mut ByteCursor,
) -> Result<(), Error> {
    let start = cursor.position();
    for (index, child) in composite.children().into_iter().enumerate() {
        if let Err(err) = child.write(cursor) {
            debug!(start, index, ?err, "failed to write child");
            cursor.set_position(start);
            return Err(err);
        }
    }
    Ok(())
}

/// Declares a struct of nodes and implements [`Composite`], [`Node`] and [`Default`] for it.
///
/// Fields are children in declaration order. A field may be followed by `= expr` to give the
/// initial value used by [`Default`]; otherwise the field type's own [`Default`] is used. Leaves
/// that need a parameter at construction (such as [`crate::FixedText`]) must be given one.
///
/// The struct must implement [`Clone`] (usually derived), since [`read`] decodes into a copy.
///
/// # Example
///
/// ```
/// use binary_parser::{composite, Decode, Encode, FixedText, Node, F32, U8};
///
/// composite! {
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Person {
///         pub magic: FixedText = FixedText::with_size(4),
///         pub header: U8,
///         pub age: U8,
///         pub height: F32,
///     }
/// }
///
/// let mut person = Person::default();
/// person.magic.value = "TEST".into();
/// person.header.value = 10;
/// person.age.value = 20;
/// person.height.value = 5.9;
/// assert_eq!(person.encode_size(), 10);
///
/// let encoded = person.encode().unwrap();
/// assert_eq!(
///     encoded,
///     &[0x54, 0x45, 0x53, 0x54, 0x0A, 0x14, 0xCD, 0xCC, 0xBC, 0x40][..]
/// );
/// assert_eq!(Person::decode(&encoded).unwrap(), person);
/// ```
#[macro_export]
macro_rules! composite {
    (@init $ty:ty) => {
        <$ty as ::core::default::Default>::default()
    };
    (@init $ty:ty, $init:expr) => {
        $init
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(= $init:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $( $field: $crate::composite!(@init $ty $(, $init)?), )*
                }
            }
        }

        impl $crate::Composite for $name {
            fn children(&self) -> ::std::vec::Vec<&dyn $crate::Node> {
                ::std::vec![$( &self.$field as &dyn $crate::Node ),*]
            }

            fn children_mut(&mut self) -> ::std::vec::Vec<&mut dyn $crate::Node> {
                ::std::vec![$( &mut self.$field as &mut dyn $crate::Node ),*]
            }
        }

        impl $crate::Node for $name {
            fn encode_size(&self) -> usize {
                $crate::composite::encode_size(self)
            }

            fn read(
                &mut self,
                cursor: &mut $crate::ByteCursor,
            ) -> ::core::result::Result<(), $crate::Error> {
                $crate::composite::read(self, cursor)
            }

            fn write(
                &self,
                cursor: &mut $crate::ByteCursor,
            ) -> ::core::result::Result<(), $crate::Error> {
                $crate::composite::write(self, cursor)
            }
        }
    };
}
