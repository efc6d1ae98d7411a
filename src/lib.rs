#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use core::{fmt, num::ParseIntError};

mod value;
pub use value::{Kind, List, Map, Number, Scalar, Value};

mod segment;
pub use segment::{Segment, Segments};

mod path;
pub use path::{Path, PathBuf};

pub mod index;
pub use index::Index;

mod update;
pub use update::update;

mod editor;
pub use editor::{add, get, has, remove, replace};

mod edit;
pub use edit::Edit;

mod error;
pub use error::EditError;

pub mod diagnostic;

#[cfg(any(feature = "json", feature = "toml"))]
mod convert;

#[cfg(test)]
mod arbitrary;

/// Indicates that a [`Path`] was malformed and unable to be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A non-root `Path` did not start with a slash (`'/'`).
    NoLeadingSlash,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLeadingSlash => {
                write!(
                    f,
                    "path is malformed as it is not empty and does not start with a slash ('/')"
                )
            }
        }
    }
}

impl ParseError {
    /// Returns `true` if this error is `NoLeadingSlash`; otherwise returns
    /// `false`.
    pub fn is_no_leading_slash(&self) -> bool {
        matches!(self, Self::NoLeadingSlash)
    }

    /// Offset of the character which caused the error. Always `0`, as the
    /// only structural requirement concerns the first character.
    pub fn offset(&self) -> usize {
        match self {
            Self::NoLeadingSlash => 0,
        }
    }
}

impl std::error::Error for ParseError {}

/// Indicates that a [`Segment`] could not be parsed as a list index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIndexError {
    /// The source `ParseIntError`
    pub source: ParseIntError,
}

impl From<ParseIntError> for ParseIndexError {
    fn from(source: ParseIntError) -> Self {
        Self { source }
    }
}

impl fmt::Display for ParseIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse segment as an integer")
    }
}

impl std::error::Error for ParseIndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Indicates that an [`Index`] is not within the given bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutOfBoundsError {
    /// The provided list length.
    ///
    /// If the range is inclusive, the resolved numerical index will be strictly
    /// less than this value, otherwise it could be equal to it.
    pub length: usize,

    /// The resolved numerical index.
    ///
    /// Note that [`Index::Next`] always resolves to the given list length,
    /// so it is only valid when the range is inclusive. A negative index is
    /// only reported when inserting.
    pub index: isize,
}

impl OutOfBoundsError {
    pub(crate) fn new(length: usize, index: usize) -> Self {
        Self {
            length,
            index: isize::try_from(index).unwrap_or(isize::MAX),
        }
    }
}

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds (limit: {})",
            self.index, self.length
        )
    }
}

impl std::error::Error for OutOfBoundsError {}
