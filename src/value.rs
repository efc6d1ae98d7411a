//! The immutable tree value edited through [`Path`](crate::Path)s.
//!
//! A [`Value`] is `Null`, a [`Scalar`], a [`List`] or a [`Map`]. Containers
//! keep their children behind an [`Arc`], so cloning a `Value` never copies a
//! subtree and every edit shares all untouched children with the original.

mod list;
pub use list::List;

mod map;
pub use map::Map;

#[cfg(feature = "serde")]
mod ser;

use core::fmt;
use std::sync::Arc;

/// A JSON-like tree value.
///
/// Values are never mutated once constructed. Editing operations such as
/// [`add`](crate::add) return a new root which shares every subtree not on
/// the edited path with the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    /// An opaque leaf: a string, number or boolean.
    Scalar(Scalar),
    /// An ordered sequence of values.
    List(List),
    /// String keys mapped to values.
    Map(Map),
}

/// Leaf payload of a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `true` or `false`
    Bool(bool),
    /// A number
    Number(Number),
    /// A string
    String(Arc<str>),
}

/// A numeric scalar.
///
/// Non-negative integers are always stored as [`Number::UInt`] so that equal
/// integers compare equal regardless of how they were constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A non-negative integer
    UInt(u64),
    /// A negative integer
    Int(i64),
    /// A floating point number
    Float(f64),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Null`]
    Null,
    /// [`Value::Scalar`]
    Scalar,
    /// [`Value::List`]
    List,
    /// [`Value::Map`]
    Map,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Scalar => "scalar",
            Self::List => "list",
            Self::Map => "map",
        })
    }
}

pub(crate) static NULL: Value = Value::Null;

impl Value {
    /// Returns the [`Kind`] of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Scalar(_) => Kind::Scalar,
            Self::List(_) => Kind::List,
            Self::Map(_) => Kind::Map,
        }
    }

    /// Returns `true` if the value is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is a `List` or a `Map`.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Returns the inner [`List`] if this value is a list.
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the inner [`Map`] if this value is a map.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the inner [`Scalar`] if this value is a scalar.
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the string slice if this value is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this value is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns the [`Number`] if this value is a numeric scalar.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Scalar(Scalar::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if both values are the same node.
    ///
    /// Containers are compared by the identity of their shared storage, so two
    /// deep-equal lists built independently are not `ptr_eq`. `Null` is
    /// identical to `Null`; scalars are only identical when they share the
    /// same string allocation.
    ///
    /// This never affects the outcome of an edit; it exists to observe and
    /// exploit structural sharing.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Scalar(Scalar::String(a)), Self::Scalar(Scalar::String(b))) => {
                Arc::ptr_eq(a, b)
            }
            (Self::List(a), Self::List(b)) => a.ptr_eq(b),
            (Self::Map(a), Self::Map(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Number {
    /// Returns the number as an `f64`, possibly losing precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::UInt(n) => n as f64,
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }

    /// Returns the number as an `i64` if it is an integer in range.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::UInt(n) => i64::try_from(n).ok(),
            Self::Int(n) => Some(n),
            Self::Float(_) => None,
        }
    }

    /// Returns the number as a `u64` if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::UInt(n) => Some(n),
            Self::Int(_) | Self::Float(_) => None,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        u64::try_from(n).map_or(Self::Int(n), Self::UInt)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Self::UInt(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                  From impls                                  ║
║                                 ¯¯¯¯¯¯¯¯¯¯¯¯                                 ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Scalar(Scalar::Number(n))
    }
}

macro_rules! from_number {
    ($($t:ty => $via:ty),+ $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Scalar(Scalar::Number(Number::from(<$via>::from(n))))
                }
            }
        )*
    };
}

from_number!(
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i64,
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u64,
    f32 => f64,
    f64 => f64,
);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::String(s.into()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::String(s.into()))
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::Scalar(Scalar::String(s))
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Map(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(List::from(items))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().collect())
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}
