//! Homogeneous arrays of nodes.
//!
//! The number of elements is never stored by these helpers. Layouts with a length prefix model
//! it explicitly as a count leaf followed by the array, reading the count first and passing it
//! to [`read_array`] or [`NodeArray::with_len`].

use crate::{ByteCursor, Error, Node};
use std::ops::{Deref, DerefMut};
use tracing::debug;

/// Reads `count` nodes in sequence, each created by `factory`.
///
/// If any node fails, the cursor is moved back to where it was before the call and the error is
/// returned.
pub fn read_array<T, F>(
    cursor: &mut ByteCursor,
    count: usize,
    mut factory: F,
) -> Result<Vec<T>, Error>
where
    T: Node,
    F: FnMut() -> T,
{
    let start = cursor.position();
    let mut items = Vec::with_capacity(count.min(cursor.remaining()));
    for index in 0..count {
        let mut item = factory();
        if let Err(err) = item.read(cursor) {
            debug!(start, index, count, ?err, "failed to read array item");
            cursor.set_position(start);
            return Err(err);
        }
        items.push(item);
    }
    Ok(items)
}

/// Writes every node of `items` in sequence.
///
/// If any node fails, the cursor is moved back to where it was before the call and the error is
/// returned.
pub fn write_array<T: Node>(cursor: &mut ByteCursor, items: &[T]) -> Result<(), Error> {
    let start = cursor.position();
    for (index, item) in items.iter().enumerate() {
        if let Err(err) = item.write(cursor) {
            debug!(start, index, ?err, "failed to write array item");
            cursor.set_position(start);
            return Err(err);
        }
    }
    Ok(())
}

/// A homogeneous array that is itself a [`Node`].
///
/// Reading fills the items the array already holds, so the length must be set (for example with
/// [`NodeArray::with_len`]) before reading. Items are read into a copy, so a failed read leaves
/// the array unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeArray<T> {
    items: Vec<T>,
}

impl<T: Node> NodeArray<T> {
    /// Creates an array from `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Creates an array of `len` items, each created by `factory`.
    pub fn with_len(len: usize, factory: impl FnMut() -> T) -> Self {
        Self {
            items: std::iter::repeat_with(factory).take(len).collect(),
        }
    }

    /// Consumes the array, returning its items.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for NodeArray<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for NodeArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T: Node> From<Vec<T>> for NodeArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Node + Clone> Node for NodeArray<T> {
    fn encode_size(&self) -> usize {
        self.items.iter().map(Node::encode_size).sum()
    }

    fn read(&mut self, cursor: &mut ByteCursor) -> Result<(), Error> {
        let start = cursor.position();
        let mut items = self.items.clone();
        for (index, item) in items.iter_mut().enumerate() {
            if let Err(err) = item.read(cursor) {
                debug!(start, index, ?err, "failed to read array item");
                cursor.set_position(start);
                return Err(err);
            }
        }
        self.items = items;
        Ok(())
    }

    fn write(&self, cursor: &mut ByteCursor) -> Result<(), Error> {
        write_array(cursor, &self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{composite, Encode, FixedText, U16, U8};

    composite! {
        #[derive(Debug, Clone, PartialEq)]
        struct Entry {
            id: U16,
            name: FixedText = FixedText::with_size(3),
        }
    }

    fn entry(id: u16, name: &str) -> Entry {
        Entry {
            id: U16::new(id),
            name: FixedText::new(name, 3),
        }
    }

    #[test]
    fn test_round_trip() {
        for count in [0, 1, 2, 5] {
            let items: Vec<Entry> = (0..count).map(|i| entry(i as u16, "abc")).collect();
            let mut cursor = ByteCursor::default();
            write_array(&mut cursor, &items).unwrap();
            assert_eq!(cursor.len(), count * 5);

            cursor.set_position(0);
            let decoded = read_array(&mut cursor, count, Entry::default).unwrap();
            assert_eq!(decoded, items);
            assert_eq!(cursor.position(), count * 5);
        }
    }

    #[test]
    fn test_read_too_many() {
        let mut cursor = ByteCursor::default();
        write_array(&mut cursor, &[entry(1, "a"), entry(2, "b")]).unwrap();
        cursor.set_position(0);
        assert!(matches!(
            read_array(&mut cursor, 3, Entry::default),
            Err(Error::ReadOutOfBounds { .. })
        ));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_factory_called_per_item() {
        let mut cursor = ByteCursor::new([1, 2, 3]);
        let mut created = 0;
        let items = read_array(&mut cursor, 3, || {
            created += 1;
            U8::default()
        })
        .unwrap();
        assert_eq!(created, 3);
        let values: Vec<u8> = items.iter().map(|item| item.value).collect();
        assert_eq!(values, [1, 2, 3]);
    }

    #[test]
    fn test_node_array() {
        let array = NodeArray::new(vec![entry(1, "one"), entry(2, "two")]);
        assert_eq!(array.encode_size(), 10);
        let encoded = array.encode().unwrap();
        assert_eq!(encoded, &b"\x01\x00one\x02\x00two"[..]);

        let mut decoded = NodeArray::with_len(2, Entry::default);
        decoded.read(&mut ByteCursor::new(&encoded)).unwrap();
        assert_eq!(decoded, array);
        assert_eq!(decoded.into_inner()[1].name.value, "two");
    }

    #[test]
    fn test_empty_node_array() {
        let mut array: NodeArray<U8> = NodeArray::default();
        assert_eq!(array.encode_size(), 0);
        assert!(array.encode().unwrap().is_empty());
        let mut cursor = ByteCursor::new([9]);
        array.read(&mut cursor).unwrap();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_node_array_failed_read() {
        let mut array = NodeArray::with_len(2, U16::default);
        let mut cursor = ByteCursor::new([1, 0, 2]);
        assert!(array.read(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);
        assert_eq!(array[0].value, 0);
        assert_eq!(array[1].value, 0);

        cursor.set_position(3);
        cursor.write_fixed(0u8).unwrap();
        cursor.set_position(0);
        array.read(&mut cursor).unwrap();
        assert_eq!(array[0].value, 1);
        assert_eq!(array[1].value, 2);
    }

    #[test]
    fn test_read_array_capacity_is_bounded() {
        // A huge count over a short buffer fails without allocating for every item
        let mut cursor = ByteCursor::new([1, 2]);
        assert!(read_array(&mut cursor, usize::MAX, U8::default).is_err());
        assert_eq!(cursor.position(), 0);
    }
}
