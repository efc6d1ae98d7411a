use crate::{EditError, Path, Value};

/// Edit is implemented by types which can be read and rewritten by [`Path`],
/// producing a new value rather than mutating in place.
///
/// ## Example
/// ```rust
/// use treeptr::{Edit, Path, Value};
///
/// let a = Value::Null;
/// let b = a.replace_at(Path::root(), Value::Map(Default::default())).unwrap();
/// let c = b.add_at(Path::from_static("/key"), Value::from("text_value")).unwrap();
/// let d = c.replace_at(Path::from_static("/key"), Value::from(vec![])).unwrap();
/// let e = d.add_at(Path::from_static("/key/0"), Value::from("array_item_1")).unwrap();
/// let f = e.add_at(Path::from_static("/key/-"), Value::from("array_item_2")).unwrap();
///
/// assert_eq!(
///     f.value_at(Path::from_static("/key/1")).unwrap().unwrap(),
///     "array_item_2"
/// );
/// // every intermediate tree is still intact
/// assert_eq!(c.value_at(Path::from_static("/key")).unwrap().unwrap(), "text_value");
/// ```
pub trait Edit: Sized {
    /// Error associated with `Edit`
    type Error;

    /// Looks up the node at `path`. See [`get`](crate::get).
    ///
    /// # Errors
    /// See [`get`](crate::get).
    fn value_at(&self, path: &Path) -> Result<Option<&Self>, Self::Error>;

    /// Tests whether a node exists at `path`. See [`has`](crate::has).
    fn has_at(&self, path: &Path) -> bool;

    /// Returns a copy with the node at `path` replaced. See
    /// [`replace`](crate::replace).
    ///
    /// # Errors
    /// See [`replace`](crate::replace).
    fn replace_at(&self, path: &Path, value: Self) -> Result<Self, Self::Error>;

    /// Returns a copy with the node at `path` removed. See
    /// [`remove`](crate::remove).
    ///
    /// # Errors
    /// See [`remove`](crate::remove).
    fn remove_at(&self, path: &Path) -> Result<Self, Self::Error>;

    /// Returns a copy with `value` inserted at `path`. See [`add`](crate::add).
    ///
    /// # Errors
    /// See [`add`](crate::add).
    fn add_at(&self, path: &Path, value: Self) -> Result<Self, Self::Error>;

    /// Returns a copy with the node at `path` rewritten by `f`. See
    /// [`update`](crate::update).
    ///
    /// # Errors
    /// See [`update`](crate::update).
    fn update_at<F>(&self, path: &Path, f: F) -> Result<Self, Self::Error>
    where
        F: FnOnce(&Self) -> Result<Self, Self::Error>;
}

impl Edit for Value {
    type Error = EditError;

    fn value_at(&self, path: &Path) -> Result<Option<&Self>, Self::Error> {
        crate::get(self, path)
    }

    fn has_at(&self, path: &Path) -> bool {
        crate::has(self, path)
    }

    fn replace_at(&self, path: &Path, value: Self) -> Result<Self, Self::Error> {
        crate::replace(self, path, value)
    }

    fn remove_at(&self, path: &Path) -> Result<Self, Self::Error> {
        crate::remove(self, path)
    }

    fn add_at(&self, path: &Path, value: Self) -> Result<Self, Self::Error> {
        crate::add(self, path, value)
    }

    fn update_at<F>(&self, path: &Path, f: F) -> Result<Self, Self::Error>
    where
        F: FnOnce(&Self) -> Result<Self, Self::Error>,
    {
        crate::update(self, path, f)
    }
}
