use crate::{Index, ParseIndexError};
use core::{fmt, str::Split};

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   Segment                                    ║
║                                  ¯¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// A `Segment` is one component of a [`Path`](crate::Path), preceded by `'/'`.
///
/// A segment is used verbatim: as a key when the container is a map, or
/// parsed with [`Self::to_index`] when the container is a list. There are no
/// escape sequences, so a key containing `/` cannot be addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment<'a> {
    inner: &'a str,
}

impl<'a> Segment<'a> {
    /// Constructs a `Segment` from a string slice.
    ///
    /// No validation is performed. Pushing a segment which contains `/` onto a
    /// [`PathBuf`](crate::PathBuf) yields more than one segment.
    pub fn new(inner: &'a str) -> Self {
        Self { inner }
    }

    /// Returns the text of the segment.
    pub fn as_str(&self) -> &'a str {
        self.inner
    }

    /// Returns `true` if the segment is the append token `-`.
    pub fn is_next(&self) -> bool {
        self.inner == "-"
    }

    /// Attempts to parse the segment as a list [`Index`].
    ///
    /// # Errors
    /// Returns [`ParseIndexError`] if the segment is neither a non-negative
    /// integer nor `-`.
    pub fn to_index(&self) -> Result<Index, ParseIndexError> {
        Index::try_from(self.inner)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner)
    }
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(inner: &'a str) -> Self {
        Self::new(inner)
    }
}

impl AsRef<str> for Segment<'_> {
    fn as_ref(&self) -> &str {
        self.inner
    }
}

impl PartialEq<str> for Segment<'_> {
    fn eq(&self, other: &str) -> bool {
        self.inner == other
    }
}

impl PartialEq<&str> for Segment<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.inner == *other
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   Segments                                   ║
║                                  ¯¯¯¯¯¯¯¯¯¯                                  ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// An iterator over the [`Segment`]s of a [`Path`](crate::Path).
///
/// The root marker is not yielded: the root path has no segments, `"/"` has a
/// single empty segment.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: Option<Split<'a, char>>,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(path: &'a str) -> Self {
        Self {
            inner: path.strip_prefix('/').map(|rest| rest.split('/')),
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(Segment::new)
    }
}

impl DoubleEndedIterator for Segments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back().map(Segment::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_index() {
        assert_eq!(Segment::new("-").to_index(), Ok(Index::Next));
        assert_eq!(Segment::new("0").to_index(), Ok(Index::Num(0)));
        assert_eq!(Segment::new("2").to_index(), Ok(Index::Num(2)));
        assert!(Segment::new("a").to_index().is_err());
        assert!(Segment::new("-1").to_index().is_err());
    }

    #[test]
    fn is_next() {
        assert!(Segment::new("-").is_next());
        assert!(!Segment::new("--").is_next());
        assert!(!Segment::new("0").is_next());
    }

    #[test]
    fn segments() {
        let segments: Vec<_> = Segments::new("/a/b/-").collect();
        assert_eq!(segments, ["a", "b", "-"]);

        assert_eq!(Segments::new("").count(), 0);

        let segments: Vec<_> = Segments::new("/").collect();
        assert_eq!(segments, [""]);

        let segments: Vec<_> = Segments::new("//x").collect();
        assert_eq!(segments, ["", "x"]);
    }

    #[test]
    fn segments_rev() {
        let segments: Vec<_> = Segments::new("/a/b/c").rev().collect();
        assert_eq!(segments, ["c", "b", "a"]);
    }
}
