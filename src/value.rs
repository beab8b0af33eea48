//! The values a host passes across the construction boundary.
//!
//! A [`Value`] is either a [`Primitive`] or an opaque reference to a host
//! object. Only primitives may be stored inside a [`Tuple`].

use alloc::sync::Arc;
use core::fmt;

use num_bigint::BigInt;

use crate::builtins::core::{equality, Tuple};

/// An opaque reference to an object owned by the host.
///
/// The crate never dereferences a handle, it only uses it to recognise
/// non-primitive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectHandle(u64);

impl ObjectHandle {
    /// Creates a handle from a host assigned identifier.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the host assigned identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.0
    }
}

/// A symbol primitive.
///
/// Symbols compare by identity: two symbols with the same description are
/// still distinct unless they share an `id`.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    #[must_use]
    pub fn new(id: u64, description: Option<&str>) -> Self {
        Self {
            id,
            description: description.map(Arc::from),
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

/// A value without reference identity.
///
/// `PartialEq`, `Eq`, and `Hash` follow `SameValueZero`, so `NaN` is equal to
/// itself and `-0` is equal to `+0`.
#[derive(Debug, Clone, Default)]
pub enum Primitive {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt(BigInt),
    String(Arc<str>),
    Symbol(Symbol),
    Tuple(Tuple),
}

impl Primitive {
    /// Returns the `typeof` name of this primitive.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "object",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::BigInt(_) => "bigint",
            Self::String(_) => "string",
            Self::Symbol(_) => "symbol",
            Self::Tuple(_) => "tuple",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Self::Tuple(t) => Some(t),
            _ => None,
        }
    }

    /// `IsStrictlyEqual`, where `NaN` is never equal to anything.
    #[must_use]
    pub fn strict_equals(&self, other: &Self) -> bool {
        equality::strict_equals(self, other)
    }

    /// `SameValueZero`
    #[must_use]
    pub fn same_value_zero(&self, other: &Self) -> bool {
        equality::same_value_zero(self, other)
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Self) -> bool {
        equality::same_value_zero(self, other)
    }
}

impl Eq for Primitive {}

impl core::hash::Hash for Primitive {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        equality::hash_primitive(self, state);
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::BigInt(b) => write!(f, "{b}n"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(sym) => match sym.description() {
                Some(d) => write!(f, "Symbol({d})"),
                None => f.write_str("Symbol()"),
            },
            Self::Tuple(t) => fmt::Display::fmt(t, f),
        }
    }
}

impl From<bool> for Primitive {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Primitive {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for Primitive {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<BigInt> for Primitive {
    fn from(value: BigInt) -> Self {
        Self::BigInt(value)
    }
}

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Self::String(Arc::from(value))
    }
}

impl From<Symbol> for Primitive {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<Tuple> for Primitive {
    fn from(value: Tuple) -> Self {
        Self::Tuple(value)
    }
}

/// Any value a caller may hand to a constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Primitive(Primitive),
    Object(ObjectHandle),
}

impl Value {
    /// Returns whether this value carries no reference identity.
    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// `Tuple.isTuple`
    #[inline]
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Self::Primitive(Primitive::Tuple(_)))
    }

    /// Returns the primitive, or `None` for an object reference.
    #[inline]
    #[must_use]
    pub fn into_primitive(self) -> Option<Primitive> {
        match self {
            Self::Primitive(p) => Some(p),
            Self::Object(_) => None,
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

macro_rules! impl_value_from_primitive {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Primitive(Primitive::from(value))
                }
            }
        )+
    };
}

impl_value_from_primitive!(bool, i32, f64, BigInt, &str, Symbol, Tuple);

impl From<ObjectHandle> for Value {
    fn from(value: ObjectHandle) -> Self {
        Self::Object(value)
    }
}
