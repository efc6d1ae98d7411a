use super::Value;
use crate::OutOfBoundsError;
use core::{fmt, slice};
use std::sync::Arc;

/// A persistent, ordered sequence of [`Value`]s.
///
/// Every "mutating" method takes `&self` and returns a new `List`. The
/// original is left untouched; the new list holds a shallow copy of the
/// element slots, so each element is shared (reference-counted) between the
/// two.
#[derive(Clone, Default, PartialEq)]
pub struct List(Arc<Vec<Value>>);

impl List {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Returns the last element, if any.
    pub fn last(&self) -> Option<&Value> {
        self.0.last()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Returns a list with the element at `index` replaced by `value`.
    ///
    /// If `value` is the very node already stored at `index` (see
    /// [`Value::ptr_eq`]), `self` is returned without copying.
    ///
    /// # Errors
    /// Returns [`OutOfBoundsError`] if `index >= len`.
    pub fn set(&self, index: usize, value: Value) -> Result<Self, OutOfBoundsError> {
        let current = self
            .0
            .get(index)
            .ok_or_else(|| OutOfBoundsError::new(self.len(), index))?;
        if current.ptr_eq(&value) {
            return Ok(self.clone());
        }
        Ok(self.edit(|items| items[index] = value))
    }

    /// Returns a list with `value` inserted at `index`, shifting all elements
    /// after it to the right.
    ///
    /// # Errors
    /// Returns [`OutOfBoundsError`] if `index > len`.
    pub fn insert(&self, index: usize, value: Value) -> Result<Self, OutOfBoundsError> {
        if index > self.len() {
            return Err(OutOfBoundsError::new(self.len(), index));
        }
        Ok(self.edit(|items| items.insert(index, value)))
    }

    /// Returns a list with `value` appended.
    pub fn push(&self, value: Value) -> Self {
        self.edit(|items| items.push(value))
    }

    /// Returns a list without the element at `index`, shifting all elements
    /// after it to the left.
    ///
    /// # Errors
    /// Returns [`OutOfBoundsError`] if `index >= len`.
    pub fn remove(&self, index: usize) -> Result<Self, OutOfBoundsError> {
        if index >= self.len() {
            return Err(OutOfBoundsError::new(self.len(), index));
        }
        Ok(self.edit(|items| {
            items.remove(index);
        }))
    }

    /// Returns `true` if both lists share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // The clone keeps `self` alive, so `make_mut` always copies the slots
    // rather than writing through shared storage.
    fn edit(&self, f: impl FnOnce(&mut Vec<Value>)) -> Self {
        let mut next = Arc::clone(&self.0);
        f(Arc::make_mut(&mut next));
        Self(next)
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self(Arc::new(items))
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().collect()))
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[i64]) -> List {
        items.iter().copied().map(Value::from).collect()
    }

    #[test]
    fn insert() {
        let original = list(&[1, 3]);
        assert_eq!(original.insert(1, Value::from(2)), Ok(list(&[1, 2, 3])));
        assert_eq!(original.insert(2, Value::from(4)), Ok(list(&[1, 3, 4])));
        assert_eq!(
            original.insert(3, Value::from(4)),
            Err(OutOfBoundsError {
                length: 2,
                index: 3
            })
        );
        assert_eq!(original, list(&[1, 3]));
    }

    #[test]
    fn remove() {
        let original = list(&[0, 1, 2]);
        assert_eq!(original.remove(0), Ok(list(&[1, 2])));
        assert_eq!(original.remove(2), Ok(list(&[0, 1])));
        assert!(original.remove(3).is_err());
        assert!(List::new().remove(0).is_err());
        assert_eq!(original, list(&[0, 1, 2]));
    }

    #[test]
    fn set() {
        let original = list(&[0, 1]);
        assert_eq!(original.set(1, Value::from(5)), Ok(list(&[0, 5])));
        assert!(original.set(2, Value::from(5)).is_err());
        assert_eq!(original, list(&[0, 1]));
    }

    #[test]
    fn set_same_node_is_noop() {
        let inner = Value::from(vec![Value::from(1)]);
        let original = List::from(vec![inner.clone(), Value::Null]);
        let updated = original.set(0, inner).unwrap();
        assert!(updated.ptr_eq(&original));
    }

    #[test]
    fn edits_share_elements() {
        let inner = Value::from(vec![Value::from("shared")]);
        let original = List::from(vec![inner, Value::from(1)]);
        let pushed = original.push(Value::Null);
        assert!(!pushed.ptr_eq(&original));
        assert!(pushed.get(0).unwrap().ptr_eq(original.get(0).unwrap()));
    }
}
