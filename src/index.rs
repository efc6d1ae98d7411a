//! Abstract index representation for list segments.
//!
//! A [`Segment`](crate::Segment) addressing a list element is either a
//! non-negative integer or the character `-`, which stands for the position
//! after the last element. What `-` means depends on the operation: [`add`]
//! appends at that position, while [`remove`] repurposes it to address the
//! last existing element.
//!
//! [`add`]: crate::add
//! [`remove`]: crate::remove
//!
//! ```
//! # use treeptr::{Index, Segment};
//! assert_eq!(Segment::new("1").to_index(), Ok(Index::Num(1)));
//! assert_eq!(Segment::new("-").to_index(), Ok(Index::Next));
//! assert!(Segment::new("a").to_index().is_err());
//!
//! assert_eq!(Index::Num(0).for_len(1), Ok(0));
//! assert!(Index::Num(1).for_len(1).is_err());
//! assert!(Index::Next.for_len(1).is_err());
//!
//! assert_eq!(Index::Num(1).for_len_incl(1), Ok(1));
//! assert_eq!(Index::Next.for_len_incl(1), Ok(1));
//! assert!(Index::Num(2).for_len_incl(1).is_err());
//!
//! assert_eq!(Index::Num(42).for_len_unchecked(30), 42);
//! assert_eq!(Index::Next.for_len_unchecked(30), 30);
//! ```

use crate::{OutOfBoundsError, ParseIndexError, Segment};
use core::fmt::Display;

/// Represents an abstract index into a list.
///
/// If provided an upper bound with [`Self::for_len`] or [`Self::for_len_incl`],
/// will produce a concrete numerical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Index {
    /// A non-negative integer value
    Num(usize),
    /// The `-` segment, the position of the next would-be item in the list
    Next,
}

impl Index {
    /// Bounds the index for a given list length (exclusive).
    ///
    /// Only indices that are less than the given length are accepted, so the
    /// resolved numerical index can be used to access an existing element.
    /// [`Self::Next`] is always *invalid*, since it resolves to the length
    /// itself.
    ///
    /// # Errors
    /// Returns [`OutOfBoundsError`] if the index is out of bounds.
    pub fn for_len(&self, length: usize) -> Result<usize, OutOfBoundsError> {
        match *self {
            Self::Num(index) if index < length => Ok(index),
            Self::Num(index) => Err(OutOfBoundsError::new(length, index)),
            Self::Next => Err(OutOfBoundsError::new(length, length)),
        }
    }

    /// Bounds the index for a given list length (inclusive).
    ///
    /// An index pointing to the position _after_ the last element is
    /// considered valid, which is what insertion needs. [`Self::Next`] is
    /// always valid.
    ///
    /// # Errors
    /// Returns [`OutOfBoundsError`] if the index is out of bounds.
    pub fn for_len_incl(&self, length: usize) -> Result<usize, OutOfBoundsError> {
        match *self {
            Self::Num(index) if index <= length => Ok(index),
            Self::Num(index) => Err(OutOfBoundsError::new(length, index)),
            Self::Next => Ok(length),
        }
    }

    /// Resolves the index for a given list length without bounds checks.
    pub fn for_len_unchecked(&self, length: usize) -> usize {
        match *self {
            Self::Num(idx) => idx,
            Self::Next => length,
        }
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Num(index) => write!(f, "{index}"),
            Self::Next => f.write_str("-"),
        }
    }
}

impl From<usize> for Index {
    fn from(value: usize) -> Self {
        Self::Num(value)
    }
}

impl TryFrom<&str> for Index {
    type Error = ParseIndexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == "-" {
            Ok(Index::Next)
        } else {
            Ok(value.parse::<usize>().map(Index::Num)?)
        }
    }
}

impl TryFrom<Segment<'_>> for Index {
    type Error = ParseIndexError;

    fn try_from(value: Segment<'_>) -> Result<Self, Self::Error> {
        Index::try_from(value.as_str())
    }
}

impl TryFrom<&String> for Index {
    type Error = ParseIndexError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        Index::try_from(value.as_str())
    }
}
