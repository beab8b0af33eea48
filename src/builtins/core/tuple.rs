//! This module implements `Tuple`, the deeply immutable ordered value.

use alloc::{sync::Arc, vec::Vec};
use core::{cmp::Ordering, fmt, hash::Hash, slice};

use crate::{
    builtins::core::equality::{self, StructuralEq},
    value::{Primitive, Value},
    ValueError, ValueResult, ValueUnwrap,
};


const NON_PRIMITIVE_MESSAGE: &str = "Tuples cannot contain non-primitive values";

/// Checks that `value` carries no reference identity.
fn to_element(value: Value) -> ValueResult<Primitive> {
    value
        .into_primitive()
        .ok_or_else(|| ValueError::r#type().with_message(NON_PRIMITIVE_MESSAGE))
}

/// Resolves a relative index against `len`, counting negative indices from
/// the end and clamping into `0..=len`.
fn relative_index(index: i64, len: usize) -> usize {
    if index < 0 {
        let from_end = index.unsigned_abs();
        (len as u64).saturating_sub(from_end) as usize
    } else {
        (index as u64).min(len as u64) as usize
    }
}

/// The native Rust implementation of a `Tuple`.
///
/// A `Tuple` is a fixed-length, ordered sequence of [`Primitive`]s. Nothing
/// can be added, removed, or replaced after construction; every derivation
/// returns a new `Tuple`. Clones share storage.
///
/// Equality and hashing are structural (see [`StructuralEq`]).
///
/// ```rust
/// use immutable_values::{ObjectHandle, Primitive, Tuple, Value};
///
/// let tuple = Tuple::try_from_values([Value::from(1), Value::from("a"), Value::from(true)]).unwrap();
/// assert_eq!(tuple.len(), 3);
///
/// let err = Tuple::try_from_values([Value::from(1), Value::from(ObjectHandle::new(0))]).unwrap_err();
/// assert!(err.is_type());
/// ```
#[derive(Debug, Clone)]
pub struct Tuple(Arc<[Primitive]>);

// ==== Construction ====

impl Tuple {
    fn from_vec(elements: Vec<Primitive>) -> Self {
        Self(Arc::from(elements))
    }

    /// Creates an empty `Tuple`.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Creates a `Tuple` from host values, rejecting any non-primitive with
    /// a `TypeError`.
    pub fn try_from_values<I>(values: I) -> ValueResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        values
            .into_iter()
            .map(to_element)
            .collect::<ValueResult<Vec<_>>>()
            .map(Self::from_vec)
    }

    /// `Tuple.of`
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Primitive>,
    {
        elements.into_iter().collect()
    }

    /// `Tuple.from` with a mapping function.
    ///
    /// `mapper` receives every item with its index. Construction stops at the
    /// first error, and any non-primitive result is a `TypeError`.
    pub fn from_fn_mapped<I, F>(items: I, mut mapper: F) -> ValueResult<Self>
    where
        I: IntoIterator,
        F: FnMut(I::Item, usize) -> ValueResult<Value>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| mapper(item, i).and_then(to_element))
            .collect::<ValueResult<Vec<_>>>()
            .map(Self::from_vec)
    }
}

impl FromIterator<Primitive> for Tuple {
    fn from_iter<T: IntoIterator<Item = Primitive>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl Default for Tuple {
    fn default() -> Self {
        Self::empty()
    }
}

// ==== Queries ====

impl Tuple {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Primitive> {
        self.0.get(index)
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Primitive] {
        &self.0
    }

    /// Iterates the elements in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Primitive> {
        self.0.iter()
    }

    /// Returns whether both tuples share the same storage.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// `Tuple.prototype.includes`, using `SameValueZero`.
    #[must_use]
    pub fn includes(&self, value: &Primitive) -> bool {
        self.iter().any(|e| e.same_value_zero(value))
    }

    /// `Tuple.prototype.indexOf`, using strict equality.
    #[must_use]
    pub fn index_of(&self, value: &Primitive) -> Option<usize> {
        self.iter().position(|e| e.strict_equals(value))
    }

    /// `Tuple.prototype.lastIndexOf`, using strict equality.
    #[must_use]
    pub fn last_index_of(&self, value: &Primitive) -> Option<usize> {
        self.iter().rposition(|e| e.strict_equals(value))
    }
}

// ==== Derivations ====

impl Tuple {
    /// `Tuple.prototype.pushed`
    pub fn pushed<I>(&self, values: I) -> ValueResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut elements = self.0.to_vec();
        for value in values {
            elements.push(to_element(value)?);
        }
        Ok(Self::from_vec(elements))
    }

    /// `Tuple.prototype.popped`
    #[must_use]
    pub fn popped(&self) -> Self {
        match self.0.split_last() {
            Some((_, rest)) => Self::from(rest),
            None => Self::empty(),
        }
    }

    /// `Tuple.prototype.shifted`
    #[must_use]
    pub fn shifted(&self) -> Self {
        match self.0.split_first() {
            Some((_, rest)) => Self::from(rest),
            None => Self::empty(),
        }
    }

    /// `Tuple.prototype.unshifted`
    pub fn unshifted<I>(&self, values: I) -> ValueResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut elements = values
            .into_iter()
            .map(to_element)
            .collect::<ValueResult<Vec<_>>>()?;
        elements.extend_from_slice(&self.0);
        Ok(Self::from_vec(elements))
    }

    /// `Tuple.prototype.reversed`
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// `Tuple.prototype.slice`
    ///
    /// Negative indices count from the end. A missing `end` means the length.
    #[must_use]
    pub fn slice(&self, start: i64, end: Option<i64>) -> Self {
        let len = self.len();
        let start = relative_index(start, len);
        let end = end.map_or(len, |end| relative_index(end, len));
        if start >= end {
            return Self::empty();
        }
        Self::from(&self.0[start..end])
    }

    /// `Tuple.prototype.spliced`
    ///
    /// With no `start`, the result holds the same elements. With a `start`
    /// and no `delete_count`, every element from `start` on is removed.
    /// Otherwise `delete_count` is clamped to the elements available.
    pub fn spliced<I>(
        &self,
        start: Option<i64>,
        delete_count: Option<i64>,
        items: I,
    ) -> ValueResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let Some(start) = start else {
            return Ok(self.clone());
        };
        let len = self.len();
        let start = relative_index(start, len);
        let available = len - start;
        let delete_count = match delete_count {
            None => available,
            Some(count) => count.clamp(0, available as i64) as usize,
        };

        let mut elements = Vec::with_capacity(len);
        elements.extend_from_slice(&self.0[..start]);
        for item in items {
            elements.push(to_element(item)?);
        }
        elements.extend_from_slice(&self.0[start + delete_count..]);
        Ok(Self::from_vec(elements))
    }

    /// `Tuple.prototype.concat`
    ///
    /// Tuple arguments are spread into the result. Other primitives are
    /// appended as is.
    pub fn concat<I>(&self, values: I) -> ValueResult<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut elements = self.0.to_vec();
        for value in values {
            match to_element(value)? {
                Primitive::Tuple(t) => elements.extend_from_slice(&t.0),
                other => elements.push(other),
            }
        }
        Ok(Self::from_vec(elements))
    }

    /// `Tuple.prototype.with`
    ///
    /// Replaces the element at `index`. An index outside `0..len` is a
    /// `RangeError`.
    pub fn with(&self, index: i64, value: Value) -> ValueResult<Self> {
        let index = usize::try_from(index)
            .ok()
            .filter(|i| *i < self.len())
            .ok_or_else(|| ValueError::range().with_message("Index out of range"))?;
        let value = to_element(value)?;
        let mut elements = self.0.to_vec();
        *elements.get_mut(index).value_unwrap()? = value;
        Ok(Self::from_vec(elements))
    }

    /// `Tuple.prototype.sorted`
    ///
    /// The sort is stable. `undefined` elements are never passed to
    /// `compare` and always sort last.
    #[must_use]
    pub fn sorted_by<F>(&self, mut compare: F) -> Self
    where
        F: FnMut(&Primitive, &Primitive) -> Ordering,
    {
        let mut elements = self.0.to_vec();
        elements.sort_by(|a, b| match (a.is_undefined(), b.is_undefined()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => compare(a, b),
        });
        Self::from_vec(elements)
    }

    /// `Tuple.prototype.flat`
    ///
    /// Nested tuples are spread into the result up to `depth` levels.
    #[must_use]
    pub fn flat(&self, depth: usize) -> Self {
        let mut elements = Vec::with_capacity(self.len());
        flatten_into(&mut elements, self, depth);
        Self::from_vec(elements)
    }

    /// `Tuple.prototype.map`
    pub fn map<F>(&self, mut mapper: F) -> ValueResult<Self>
    where
        F: FnMut(&Primitive, usize) -> ValueResult<Value>,
    {
        Self::from_fn_mapped(self.iter(), |element, i| mapper(element, i))
    }

    /// `Tuple.prototype.filter`
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Primitive, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|(i, element)| predicate(element, *i))
            .map(|(_, element)| element.clone())
            .collect()
    }
}

fn flatten_into(target: &mut Vec<Primitive>, source: &Tuple, depth: usize) {
    for element in source.iter() {
        match element {
            Primitive::Tuple(inner) if depth > 0 => flatten_into(target, inner, depth - 1),
            other => target.push(other.clone()),
        }
    }
}

impl From<&[Primitive]> for Tuple {
    fn from(value: &[Primitive]) -> Self {
        Self(Arc::from(value))
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Primitive;
    type IntoIter = slice::Iter<'a, Primitive>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.structural_eq(other)
    }
}

impl Eq for Tuple {}

impl Hash for Tuple {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        equality::hash_tuple(self, state);
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#[")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}
