#[cfg(test)]
mod path_test;

use crate::{EditError, ParseError, Segment, Segments, Value};
use core::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                     Path                                     ║
║                                    ¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// A slash-delimited path to a node within a [`Value`].
///
/// The empty string is the root, the whole value. Every other path starts
/// with `/` followed by its [`Segment`]s: `"/foo/0/-"` has the segments
/// `foo`, `0` and `-`.
///
/// Unlike an RFC 6901 JSON Pointer there are no escape sequences: the text
/// between two slashes is the segment, verbatim. As a consequence, map keys
/// containing `/` cannot be addressed, and `~0`/`~1` have no special meaning.
///
/// This is an unsized type, like [`str`]; the owned counterpart is
/// [`PathBuf`].
///
/// ## Example
/// ```rust
/// use treeptr::{Path, Value};
///
/// let list = Value::from(vec![Value::from("a"), Value::from("c")]);
/// let path = Path::from_static("/1");
///
/// let updated = path.add(&list, Value::from("b")).unwrap();
/// assert_eq!(path.get(&updated).unwrap().unwrap(), "b");
/// // the original is untouched
/// assert_eq!(list.as_list().unwrap().len(), 2);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Path(str);

impl Path {
    /// Private constructor for strings that are known to be correctly
    /// formatted.
    ///
    /// # Safety
    /// The input must be empty or start with `/`.
    unsafe fn new_unchecked<S: AsRef<str> + ?Sized>(s: &S) -> &Self {
        &*(core::ptr::from_ref::<str>(s.as_ref()) as *const Self)
    }

    /// Constant reference to the root path, `""`.
    pub const fn root() -> &'static Self {
        Self::from_static("")
    }

    /// Attempts to parse a string into a `Path`.
    ///
    /// The only requirement is structural: a non-root path must start with
    /// `/`. Segments are not validated here; a segment which is not a valid
    /// list index is only detected when it is used against a list.
    ///
    /// # Errors
    /// Returns [`ParseError::NoLeadingSlash`] if `s` is not empty and does not
    /// start with `/`.
    pub fn parse<S: AsRef<str> + ?Sized>(s: &S) -> Result<&Self, ParseError> {
        let s = s.as_ref();
        if is_well_formed(s) {
            // SAFETY: validated above
            Ok(unsafe { Self::new_unchecked(s) })
        } else {
            Err(ParseError::NoLeadingSlash)
        }
    }

    /// Creates a static `Path` from a string.
    ///
    /// # Panics
    /// Will panic if the string is not empty and does not start with `/`.
    ///
    /// ## Example
    /// ```rust
    /// use treeptr::Path;
    ///
    /// const PATH: &Path = Path::from_static("/foo/bar");
    /// assert_eq!(PATH.count(), 2);
    /// ```
    pub const fn from_static(s: &'static str) -> &'static Self {
        assert!(
            is_well_formed(s),
            "path must be empty or start with a slash ('/')"
        );
        // SAFETY: validated above
        unsafe { &*(s as *const str as *const Self) }
    }

    /// The encoded string representation of this path.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts into an owned [`PathBuf`].
    pub fn to_buf(&self) -> PathBuf {
        PathBuf(self.0.to_string())
    }

    /// Returns `true` if this is the root path, `""`.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the [`Segment`]s of this path.
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.0)
    }

    /// Returns the number of segments in this path.
    pub fn count(&self) -> usize {
        self.segments().count()
    }

    /// Returns the first segment, or `None` for the root path.
    pub fn first(&self) -> Option<Segment<'_>> {
        self.segments().next()
    }

    /// Returns the last segment, or `None` for the root path.
    pub fn last(&self) -> Option<Segment<'_>> {
        self.segments().next_back()
    }

    /// Splits the path into its first segment and the remainder.
    ///
    /// Returns `None` for the root path.
    ///
    /// ## Example
    /// ```rust
    /// # use treeptr::{Path, Segment};
    /// let path = Path::from_static("/foo/bar/baz");
    /// let (head, tail) = path.split_front().unwrap();
    /// assert_eq!(head, "foo");
    /// assert_eq!(tail, "/bar/baz");
    /// ```
    pub fn split_front(&self) -> Option<(Segment<'_>, &Self)> {
        let rest = self.0.strip_prefix('/')?;
        Some(match rest.find('/') {
            // SAFETY: the tail starts at a `/`
            Some(i) => (Segment::new(&rest[..i]), unsafe {
                Self::new_unchecked(&rest[i..])
            }),
            None => (Segment::new(rest), Self::root()),
        })
    }

    /// Splits the path into the path of the parent and the last segment.
    ///
    /// Returns `None` for the root path.
    ///
    /// ## Example
    /// ```rust
    /// # use treeptr::{Path, Segment};
    /// let path = Path::from_static("/foo/bar/baz");
    /// let (parent, last) = path.split_back().unwrap();
    /// assert_eq!(parent, "/foo/bar");
    /// assert_eq!(last, "baz");
    /// ```
    pub fn split_back(&self) -> Option<(&Self, Segment<'_>)> {
        let (front, back) = self.0.rsplit_once('/')?;
        // SAFETY: `front` is either empty or starts with the leading `/`
        Some((unsafe { Self::new_unchecked(front) }, Segment::new(back)))
    }

    /// Returns the path of the parent node, or `None` for the root path.
    pub fn parent(&self) -> Option<&Self> {
        self.split_back().map(|(parent, _)| parent)
    }

    /// Looks up the node at this path. See [`get`](crate::get).
    ///
    /// # Errors
    /// Returns [`EditError::NotContainer`] if the path descends through a
    /// scalar or `Null`.
    pub fn get<'v>(&self, root: &'v Value) -> Result<Option<&'v Value>, EditError> {
        crate::get(root, self)
    }

    /// Tests whether the node at this path exists. See [`has`](crate::has).
    pub fn has(&self, root: &Value) -> bool {
        crate::has(root, self)
    }

    /// Replaces the node at this path. See [`replace`](crate::replace).
    ///
    /// # Errors
    /// Returns an [`EditError`] if an intermediate segment cannot be followed.
    pub fn replace(&self, root: &Value, value: Value) -> Result<Value, EditError> {
        crate::replace(root, self, value)
    }

    /// Removes the node at this path. See [`remove`](crate::remove).
    ///
    /// # Errors
    /// Returns an [`EditError`] if the path cannot be followed or the last
    /// segment is not a valid list index.
    pub fn remove(&self, root: &Value) -> Result<Value, EditError> {
        crate::remove(root, self)
    }

    /// Inserts a node at this path. See [`add`](crate::add).
    ///
    /// # Errors
    /// Returns an [`EditError`] if the path cannot be followed or the last
    /// segment is not a valid insertion index.
    pub fn add(&self, root: &Value, value: Value) -> Result<Value, EditError> {
        crate::add(root, self, value)
    }

    /// Rewrites the node at this path with `f`. See [`update`](crate::update).
    ///
    /// # Errors
    /// Returns an [`EditError`] if the path cannot be followed or `f` fails.
    pub fn update<F>(&self, root: &Value, f: F) -> Result<Value, EditError>
    where
        F: FnOnce(&Value) -> Result<Value, EditError>,
    {
        crate::update(root, self, f)
    }
}

const fn is_well_formed(s: &str) -> bool {
    s.is_empty() || s.as_bytes()[0] == b'/'
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl ToOwned for Path {
    type Owned = PathBuf;

    fn to_owned(&self) -> Self::Owned {
        self.to_buf()
    }
}

impl<'p> TryFrom<&'p str> for &'p Path {
    type Error = ParseError;

    fn try_from(s: &'p str) -> Result<Self, Self::Error> {
        Path::parse(s)
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        &self.0 == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        &self.0 == *other
    }
}

impl PartialEq<PathBuf> for Path {
    fn eq(&self, other: &PathBuf) -> bool {
        self.0 == other.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de: 'p, 'p> serde::Deserialize<'de> for &'p Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct PathVisitor;

        impl<'a> Visitor<'a> for PathVisitor {
            type Value = &'a Path;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a borrowed Path")
            }

            fn visit_borrowed_str<E>(self, v: &'a str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Path::parse(v).map_err(|err| {
                    Error::custom(format!("failed to parse path\n\ncaused by:\n{err}"))
                })
            }
        }

        deserializer.deserialize_str(PathVisitor)
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                   PathBuf                                    ║
║                                  ¯¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// An owned, mutable [`Path`] (akin to `String`).
///
/// This type provides methods like [`PathBuf::push_back`] and
/// [`PathBuf::parse`] for building paths. It also implements [`Deref`] to
/// [`Path`], so every method on [`Path`] is available.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathBuf(String);

impl PathBuf {
    /// Creates a new `PathBuf` pointing to the root.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Attempts to parse a string into a `PathBuf`.
    ///
    /// # Errors
    /// Returns [`ParseError::NoLeadingSlash`] if `s` is not empty and does not
    /// start with `/`.
    pub fn parse(s: impl Into<String>) -> Result<Self, ParseError> {
        let s = s.into();
        Path::parse(&s)?;
        Ok(Self(s))
    }

    /// Creates a new `PathBuf` from a sequence of segments.
    ///
    /// ## Example
    /// ```rust
    /// # use treeptr::PathBuf;
    /// let path = PathBuf::from_segments(["key", "0", "-"]);
    /// assert_eq!(path, "/key/0/-");
    /// ```
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut path = Self::new();
        for segment in segments {
            path.push_back(segment);
        }
        path
    }

    /// Pushes a segment onto the back of this path.
    ///
    /// The text is appended verbatim after a `/`; if it contains `/` itself,
    /// the path gains more than one segment.
    pub fn push_back(&mut self, segment: impl AsRef<str>) {
        self.0.push('/');
        self.0.push_str(segment.as_ref());
    }

    /// Removes and returns the last segment, if any.
    pub fn pop_back(&mut self) -> Option<String> {
        let idx = self.0.rfind('/')?;
        let segment = self.0[idx + 1..].to_string();
        self.0.truncate(idx);
        Some(segment)
    }

    /// Clears the path, setting it to root (`""`).
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Coerces to a [`Path`] slice.
    pub fn as_path(&self) -> &Path {
        // SAFETY: a `PathBuf` is always well formed
        unsafe { Path::new_unchecked(&self.0) }
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.as_path()
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&Path> for PathBuf {
    fn from(value: &Path) -> Self {
        value.to_buf()
    }
}

impl From<PathBuf> for String {
    fn from(value: PathBuf) -> Self {
        value.0
    }
}

impl TryFrom<&str> for PathBuf {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for PathBuf {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for PathBuf {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PathBuf {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathBuf {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Path> for PathBuf {
    fn eq(&self, other: &Path) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<&Path> for PathBuf {
    fn eq(&self, other: &&Path) -> bool {
        self.0 == other.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathBuf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathBuf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        PathBuf::parse(s).map_err(D::Error::custom)
    }
}
