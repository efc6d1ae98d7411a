//! The five path operations: [`get`], [`has`], [`replace`], [`remove`] and
//! [`add`].
//!
//! The editing operations reduce to [`update`](crate::update): they locate the
//! parent of the addressed node and rewrite it with a transform chosen by the
//! parent's kind. The read-only operations walk the tree directly, each with
//! its own policy for segments that lead nowhere:
//!
//! | operation | bad list index      | missing key | scalar/`Null` mid-path |
//! | --------- | ------------------- | ----------- | ---------------------- |
//! | `get`     | `Ok(None)`          | `Ok(None)`  | `Err(NotContainer)`    |
//! | `has`     | `false`             | `false`     | `true`                 |
//! | `remove`  | `Err(InvalidIndex)` | no-op       | `Err(NotContainer)`    |
//! | `add`     | `Err(InvalidIndex)` | inserts     | `Err(NotContainer)`    |
//!
//! A list index that is out of range is `Err(IndexOutOfBounds)` for both
//! `remove` and `add`. For `add` this includes negative positions such as
//! `-1`, while `remove` rejects them as `Err(InvalidIndex)`.


use crate::{
    update::update_at, value::NULL, EditError, Index, OutOfBoundsError, Path, Segment, Value,
};
use log::{debug, trace};

/// Looks up the node at `path`.
///
/// Lists are indexed by segments parsed as non-negative integers; a segment
/// that does not parse, or that is out of range, means the node does not
/// exist. Maps are indexed by key.
///
/// The root path returns [`Value::Null`], not `root`: it stands for "the whole
/// value" rather than yielding it.
///
/// ## Example
/// ```rust
/// use treeptr::{get, Path, Value};
///
/// let data: Value = [("key", Value::from(vec![Value::from("item")]))]
///     .into_iter()
///     .collect();
/// assert_eq!(get(&data, Path::from_static("/key/0")).unwrap().unwrap(), "item");
/// assert_eq!(get(&data, Path::from_static("/key/1")).unwrap(), None);
/// assert_eq!(get(&data, Path::from_static("/key/x")).unwrap(), None);
/// assert!(get(&data, Path::from_static("/key/0/deeper")).is_err());
/// assert!(get(&data, Path::root()).unwrap().unwrap().is_null());
/// ```
///
/// # Errors
/// Returns [`EditError::NotContainer`] if a segment remains when a scalar or
/// `Null` is reached.
pub fn get<'v>(root: &'v Value, path: &Path) -> Result<Option<&'v Value>, EditError> {
    trace!("get at \"{path}\"");
    if path.is_root() {
        return Ok(Some(&NULL));
    }
    let mut node = root;
    let mut offset = 0;
    for segment in path.segments() {
        let next = match node {
            Value::List(list) => segment
                .to_index()
                .ok()
                .and_then(|index| list.get(index.for_len_unchecked(list.len()))),
            Value::Map(map) => map.get(segment.as_str()),
            Value::Null | Value::Scalar(_) => {
                let err = EditError::NotContainer {
                    offset,
                    found: node.kind(),
                };
                debug!("get at \"{path}\" failed: {err}");
                return Err(err);
            }
        };
        let Some(next) = next else {
            return Ok(None);
        };
        node = next;
        offset += 1 + segment.as_str().len();
    }
    Ok(Some(node))
}

/// Tests whether a node exists at `path`.
///
/// Returns `false` as soon as a list segment is not a valid index of an
/// existing element or a map has no entry for the segment, and `true` once
/// every segment has been followed. The root path always exists.
///
/// Reaching a scalar or `Null` while segments remain returns `true`: the walk
/// stops there and reports success, unlike [`get`] which fails. Callers that
/// need to tell the two apart should use [`get`].
///
/// ## Example
/// ```rust
/// use treeptr::{has, Path, Value};
///
/// let data: Value = [("k", Value::from("v"))].into_iter().collect();
/// assert!(has(&data, Path::from_static("/k")));
/// assert!(!has(&data, Path::from_static("/missing")));
/// assert!(has(&data, Path::from_static("/k/beyond/scalar")));
/// ```
pub fn has(root: &Value, path: &Path) -> bool {
    trace!("has at \"{path}\"");
    let mut node = root;
    for segment in path.segments() {
        node = match node {
            Value::List(list) => match segment
                .to_index()
                .ok()
                .and_then(|index| list.get(index.for_len_unchecked(list.len())))
            {
                Some(next) => next,
                None => return false,
            },
            Value::Map(map) => match map.get(segment.as_str()) {
                Some(next) => next,
                None => return false,
            },
            Value::Null | Value::Scalar(_) => return true,
        };
    }
    true
}

/// Replaces the node at `path` with `value`, returning the new root.
///
/// The root path replaces the whole tree. Every node on the path must exist.
///
/// ## Example
/// ```rust
/// use treeptr::{replace, Path, Value};
///
/// let data: Value = [("k1", Value::from(1))].into_iter().collect();
/// let updated = replace(&data, Path::from_static("/k1"), Value::from("3")).unwrap();
/// assert_eq!(updated, [("k1", Value::from("3"))].into_iter().collect::<Value>());
/// ```
///
/// # Errors
/// Returns the traversal errors of [`update`](crate::update).
pub fn replace(root: &Value, path: &Path, value: Value) -> Result<Value, EditError> {
    trace!("replace at \"{path}\"");
    update_at(root, path, |_| Ok(value))
        .inspect_err(|err| debug!("replace at \"{path}\" failed: {err}"))
}

/// Removes the node at `path`, returning the new root.
///
/// - The root path yields [`Value::Null`].
/// - In a map, the entry for the last segment is removed; removing an absent
///   key is a no-op.
/// - In a list, `-` removes the last element and an index removes that
///   element, shifting later elements to the left.
///
/// ## Example
/// ```rust
/// use treeptr::{remove, Path, Value};
///
/// let data: Value = (0..3).map(Value::from).collect();
/// let updated = remove(&data, Path::from_static("/0")).unwrap();
/// assert_eq!(updated, (1..3).map(Value::from).collect::<Value>());
/// let updated = remove(&data, Path::from_static("/-")).unwrap();
/// assert_eq!(updated, (0..2).map(Value::from).collect::<Value>());
/// ```
///
/// # Errors
/// - The traversal errors of [`update`](crate::update) for the parent path.
/// - [`EditError::InvalidIndex`] if the parent is a list and the last segment
///   is neither an integer nor `-`.
/// - [`EditError::IndexOutOfBounds`] if the parent is a list and the index is
///   not below its length, or the segment is `-` and the list is empty.
/// - [`EditError::NotContainer`] if the parent is a scalar or `Null`.
pub fn remove(root: &Value, path: &Path) -> Result<Value, EditError> {
    trace!("remove at \"{path}\"");
    let Some((parent, last)) = path.split_back() else {
        return Ok(Value::Null);
    };
    let offset = parent.as_str().len();
    update_at(root, parent, |node| remove_child(node, last, offset))
        .inspect_err(|err| debug!("remove at \"{path}\" failed: {err}"))
}

/// Inserts `value` at `path`, returning the new root.
///
/// - The root path yields `value`, just like [`replace`].
/// - In a map, `value` is stored under the last segment, overwriting any
///   existing entry.
/// - In a list, `-` appends `value` and an index inserts it at that position,
///   shifting later elements to the right.
///
/// ## Example
/// ```rust
/// use treeptr::{add, Path, Value};
///
/// let data = Value::from(vec![Value::from(2)]);
/// let front = add(&data, Path::from_static("/0"), Value::from(1)).unwrap();
/// assert_eq!(front, Value::from(vec![Value::from(1), Value::from(2)]));
/// let back = add(&data, Path::from_static("/-"), Value::from(1)).unwrap();
/// assert_eq!(back, Value::from(vec![Value::from(2), Value::from(1)]));
/// ```
///
/// # Errors
/// - The traversal errors of [`update`](crate::update) for the parent path.
/// - [`EditError::InvalidIndex`] if the parent is a list and the last segment
///   is neither an integer nor `-`.
/// - [`EditError::IndexOutOfBounds`] if the parent is a list and the index is
///   negative or greater than its length.
/// - [`EditError::NotContainer`] if the parent is a scalar or `Null`.
pub fn add(root: &Value, path: &Path, value: Value) -> Result<Value, EditError> {
    trace!("add at \"{path}\"");
    let Some((parent, last)) = path.split_back() else {
        return Ok(value);
    };
    let offset = parent.as_str().len();
    update_at(root, parent, |node| insert_child(node, last, offset, value))
        .inspect_err(|err| debug!("add at \"{path}\" failed: {err}"))
}

fn remove_child(node: &Value, segment: Segment<'_>, offset: usize) -> Result<Value, EditError> {
    match node {
        Value::Map(map) => Ok(Value::Map(map.remove(segment.as_str()))),
        Value::List(list) => {
            let index = match segment
                .to_index()
                .map_err(|source| EditError::InvalidIndex { offset, source })?
            {
                // `-` is the last element here, not the append position
                Index::Next => list.len().saturating_sub(1),
                Index::Num(index) => index,
            };
            list.remove(index)
                .map(Value::List)
                .map_err(|source| EditError::IndexOutOfBounds { offset, source })
        }
        Value::Null | Value::Scalar(_) => Err(EditError::NotContainer {
            offset,
            found: node.kind(),
        }),
    }
}

fn insert_child(
    node: &Value,
    segment: Segment<'_>,
    offset: usize,
    value: Value,
) -> Result<Value, EditError> {
    match node {
        Value::Map(map) => Ok(Value::Map(map.insert(segment.as_str(), value))),
        Value::List(list) => {
            let out_of_bounds =
                |source: OutOfBoundsError| EditError::IndexOutOfBounds { offset, source };
            let index = match segment.to_index() {
                Ok(index) => index.for_len_incl(list.len()).map_err(out_of_bounds)?,
                // a negative position is a bounds error, not a malformed index
                Err(source) => match segment.as_str().parse::<isize>() {
                    Ok(index) if index < 0 => {
                        return Err(out_of_bounds(OutOfBoundsError {
                            length: list.len(),
                            index,
                        }))
                    }
                    _ => return Err(EditError::InvalidIndex { offset, source }),
                },
            };
            list.insert(index, value)
                .map(Value::List)
                .map_err(out_of_bounds)
        }
        Value::Null | Value::Scalar(_) => Err(EditError::NotContainer {
            offset,
            found: node.kind(),
        }),
    }
}
