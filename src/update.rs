use crate::{EditError, List, Path, Segment, Value};
use log::{debug, trace};

/// Rewrites the node at `path` with `f`, returning the new root.
///
/// This is the primitive every editing operation is built on: it descends
/// along `path`, hands the addressed node to `f`, and rebuilds each ancestor
/// with the one child on the path replaced. All other children are shared
/// with `root`, which is left untouched.
///
/// - The root path hands `root` itself to `f`.
/// - A list segment must be an index of an existing element.
/// - A map segment must be the key of an existing entry.
///
/// ## Example
/// ```rust
/// use treeptr::{update, Path, Value};
///
/// let data: Value = [("count", Value::from(1))].into_iter().collect();
/// let path = Path::from_static("/count");
/// let bumped = update(&data, path, |v| {
///     let n = v.as_number().and_then(|n| n.as_u64()).unwrap_or(0);
///     Ok(Value::from(n + 1))
/// })
/// .unwrap();
/// assert_eq!(path.get(&bumped).unwrap(), Some(&Value::from(2)));
/// ```
///
/// # Errors
/// - [`EditError::NotContainer`] if a segment remains at a scalar or `Null`.
/// - [`EditError::InvalidIndex`] if a list segment is not a non-negative
///   integer or `-`.
/// - [`EditError::IndexOutOfBounds`] if a list segment does not address an
///   existing element (`-` never does).
/// - [`EditError::NotFound`] if a map has no entry for the segment.
/// - Any error returned by `f`.
pub fn update<F>(root: &Value, path: &Path, f: F) -> Result<Value, EditError>
where
    F: FnOnce(&Value) -> Result<Value, EditError>,
{
    trace!("update at \"{path}\"");
    update_at(root, path, f).inspect_err(|err| debug!("update at \"{path}\" failed: {err}"))
}

pub(crate) fn update_at<F>(root: &Value, path: &Path, f: F) -> Result<Value, EditError>
where
    F: FnOnce(&Value) -> Result<Value, EditError>,
{
    update_from(root, path, 0, f)
}

fn update_from<F>(node: &Value, path: &Path, offset: usize, f: F) -> Result<Value, EditError>
where
    F: FnOnce(&Value) -> Result<Value, EditError>,
{
    let Some((segment, tail)) = path.split_front() else {
        return f(node);
    };
    let next_offset = offset + 1 + segment.as_str().len();

    match node {
        Value::List(list) => {
            let (index, child) = child_of_list(list, segment, offset)?;
            let child = update_from(child, tail, next_offset, f)?;
            list.set(index, child)
                .map(Value::List)
                .map_err(|source| EditError::IndexOutOfBounds { offset, source })
        }
        Value::Map(map) => {
            let child = map
                .get(segment.as_str())
                .ok_or(EditError::NotFound { offset })?;
            let child = update_from(child, tail, next_offset, f)?;
            Ok(Value::Map(map.insert(segment.as_str(), child)))
        }
        Value::Null | Value::Scalar(_) => Err(EditError::NotContainer {
            offset,
            found: node.kind(),
        }),
    }
}

fn child_of_list<'v>(
    list: &'v List,
    segment: Segment<'_>,
    offset: usize,
) -> Result<(usize, &'v Value), EditError> {
    let index = segment
        .to_index()
        .map_err(|source| EditError::InvalidIndex { offset, source })?
        .for_len(list.len())
        .map_err(|source| EditError::IndexOutOfBounds { offset, source })?;
    Ok((index, &list.as_slice()[index]))
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::{Kind, OutOfBoundsError};
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn root_hands_over_the_whole_value() {
        let data = v(json!({"a": 1}));
        let result = update(&data, Path::root(), |node| {
            assert_eq!(node, &data);
            Ok(Value::Null)
        })
        .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn rebuilds_ancestors() {
        let data = v(json!({"a": [1, {"b": 2}], "c": [3]}));
        let path = Path::from_static("/a/1/b");
        let result = update(&data, path, |_| Ok(Value::from("x"))).unwrap();
        assert_eq!(result, v(json!({"a": [1, {"b": "x"}], "c": [3]})));
        assert_eq!(data, v(json!({"a": [1, {"b": 2}], "c": [3]})));
    }

    #[test]
    fn shares_untouched_siblings() {
        let data = v(json!({"a": [1, {"b": 2}], "c": [3]}));
        let result = update(&data, Path::from_static("/a/1/b"), |_| Ok(Value::Null)).unwrap();

        let before = data.as_map().unwrap();
        let after = result.as_map().unwrap();
        assert!(before.get("c").unwrap().ptr_eq(after.get("c").unwrap()));
        assert!(!before.get("a").unwrap().ptr_eq(after.get("a").unwrap()));
    }

    #[test]
    fn identity_update_shares_everything() {
        let data = v(json!({"a": {"b": [1, 2]}}));
        let result = update(&data, Path::from_static("/a/b"), |node| Ok(node.clone())).unwrap();
        assert!(result.ptr_eq(&data));
    }

    #[test]
    fn not_container() {
        let data = v(json!({"a": "scalar"}));
        let err = update(&data, Path::from_static("/a/b"), |_| Ok(Value::Null)).unwrap_err();
        assert_eq!(
            err,
            EditError::NotContainer {
                offset: 2,
                found: Kind::Scalar
            }
        );

        let err = update(&Value::Null, Path::from_static("/a"), |_| Ok(Value::Null)).unwrap_err();
        assert_eq!(
            err,
            EditError::NotContainer {
                offset: 0,
                found: Kind::Null
            }
        );
    }

    #[test]
    fn invalid_index() {
        let data = v(json!({"list": [0]}));
        let err = update(&data, Path::from_static("/list/x"), |_| Ok(Value::Null)).unwrap_err();
        assert!(err.is_invalid_index());
        assert_eq!(err.offset(), 5);
    }

    #[test]
    fn index_out_of_bounds() {
        let data = v(json!([0, 1]));
        let err = update(&data, Path::from_static("/2"), |_| Ok(Value::Null)).unwrap_err();
        assert_eq!(
            err,
            EditError::IndexOutOfBounds {
                offset: 0,
                source: OutOfBoundsError {
                    length: 2,
                    index: 2
                }
            }
        );

        let err = update(&data, Path::from_static("/-"), |_| Ok(Value::Null)).unwrap_err();
        assert!(err.is_index_out_of_bounds());
    }

    #[test]
    fn missing_key() {
        let data = v(json!({"a": {}}));
        let err = update(&data, Path::from_static("/a/b"), |_| Ok(Value::Null)).unwrap_err();
        assert_eq!(err, EditError::NotFound { offset: 2 });
    }

    #[test]
    fn updater_error_propagates() {
        let data = v(json!({"a": 1}));
        let err = update(&data, Path::from_static("/a"), |_| {
            Err(EditError::NotFound { offset: 9 })
        })
        .unwrap_err();
        assert_eq!(err, EditError::NotFound { offset: 9 });
    }
}
