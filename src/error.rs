use crate::{Kind, OutOfBoundsError, ParseIndexError};
use core::fmt;

/// Indicates that an edit or lookup could not follow its [`Path`](crate::Path).
///
/// Every variant carries the `offset` of the failing segment: the byte
/// position of the `/` which precedes it in the path.
/// ```text
/// "/foo/bar/invalid"
///          ↑
///          8
/// ```
///
/// No partial result exists when an `EditError` is returned. The original tree
/// is never modified, so there is nothing to roll back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The path attempts to descend through a scalar or `Null` node.
    ///
    /// ## Example
    /// ```rust
    /// # use treeptr::{Path, Value};
    /// let data = Value::from(vec![Value::from("bar")]);
    /// let err = Path::from_static("/0/baz").get(&data).unwrap_err();
    /// assert!(err.is_not_container());
    /// assert_eq!(err.offset(), 2);
    /// ```
    NotContainer {
        /// Offset of the partial path starting with the segment which could
        /// not be followed.
        offset: usize,
        /// Kind of the node which was found instead of a container.
        found: Kind,
    },

    /// A segment addressing a list is neither a non-negative integer nor the
    /// `-` token.
    ///
    /// ## Example
    /// ```rust
    /// # use treeptr::{Path, Value};
    /// let data = Value::from(vec![Value::from("bar")]);
    /// let err = Path::from_static("/first").remove(&data).unwrap_err();
    /// assert!(err.is_invalid_index());
    /// ```
    InvalidIndex {
        /// Offset of the partial path starting with the invalid index.
        offset: usize,
        /// The source [`ParseIndexError`]
        source: ParseIndexError,
    },

    /// A list index is outside the range allowed by the operation.
    ///
    /// ## Example
    /// ```rust
    /// # use treeptr::{Path, Value};
    /// let data = Value::from(vec![Value::from("bar")]);
    /// let err = Path::from_static("/2").add(&data, Value::Null).unwrap_err();
    /// assert!(err.is_index_out_of_bounds());
    /// ```
    IndexOutOfBounds {
        /// Offset of the partial path starting with the out of bounds index.
        offset: usize,
        /// The source [`OutOfBoundsError`]
        source: OutOfBoundsError,
    },

    /// A map on the way to the edited node has no entry for the segment.
    ///
    /// ## Example
    /// ```rust
    /// # use treeptr::{Path, Value};
    /// let data: Value = [("foo", Value::Null)].into_iter().collect();
    /// let err = Path::from_static("/bar/baz").replace(&data, Value::Null).unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    NotFound {
        /// Offset of the partial path starting with the missing key.
        offset: usize,
    },
}

impl EditError {
    /// Offset of the partial path starting with the segment which caused the
    /// error.
    pub fn offset(&self) -> usize {
        match self {
            Self::NotContainer { offset, .. }
            | Self::InvalidIndex { offset, .. }
            | Self::IndexOutOfBounds { offset, .. }
            | Self::NotFound { offset } => *offset,
        }
    }

    /// Returns `true` if this error is `NotContainer`; otherwise returns
    /// `false`.
    pub fn is_not_container(&self) -> bool {
        matches!(self, Self::NotContainer { .. })
    }

    /// Returns `true` if this error is `InvalidIndex`; otherwise returns
    /// `false`.
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Returns `true` if this error is `IndexOutOfBounds`; otherwise returns
    /// `false`.
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }

    /// Returns `true` if this error is `NotFound`; otherwise returns `false`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotContainer { offset, found } => {
                write!(
                    f,
                    "path segment at offset {offset} descends into a {found}, which is not a container"
                )
            }
            Self::InvalidIndex { offset, .. } => {
                write!(f, "failed to parse index at offset {offset}")
            }
            Self::IndexOutOfBounds { offset, .. } => {
                write!(f, "index at offset {offset} out of bounds")
            }
            Self::NotFound { offset } => {
                write!(f, "path segment at offset {offset} not found")
            }
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidIndex { source, .. } => Some(source),
            Self::IndexOutOfBounds { source, .. } => Some(source),
            Self::NotContainer { .. } | Self::NotFound { .. } => None,
        }
    }
}
