//! Structural equality and hashing for primitives and built-in values.
//!
//! Equality is `SameValueZero` applied element by element: `NaN` equals
//! `NaN` and `-0` equals `+0`. Hashing canonicalises numbers the same way,
//! so `a == b` always implies `hash(a) == hash(b)`.

use core::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::{
    builtins::core::{Duration, PlainDate, PlainMonthDay, PlainTime, PlainYearMonth, Tuple},
    value::Primitive,
};

const HASH_TAG_UNDEFINED: u8 = 0;
const HASH_TAG_NULL: u8 = 1;
const HASH_TAG_BOOL: u8 = 2;
const HASH_TAG_NUMBER: u8 = 3;
const HASH_TAG_BIGINT: u8 = 4;
const HASH_TAG_STRING: u8 = 5;
const HASH_TAG_SYMBOL: u8 = 6;
const HASH_TAG_TUPLE: u8 = 7;

/// Canonical bits for a number: `-0` and `+0` share one pattern, as do all NaNs.
fn normalize_float_bits(n: f64) -> u64 {
    if n == 0.0 {
        0
    } else if n.is_nan() {
        0x7FF8_0000_0000_0000
    } else {
        n.to_bits()
    }
}

/// `IsStrictlyEqual` for two primitives.
///
/// Numbers use IEEE comparison, so `NaN` is unequal to itself. Tuples have no
/// identity and are compared structurally.
pub(crate) fn strict_equals(a: &Primitive, b: &Primitive) -> bool {
    match (a, b) {
        (Primitive::Number(x), Primitive::Number(y)) => x == y,
        (Primitive::Tuple(x), Primitive::Tuple(y)) => tuples_equal(x, y),
        _ => same_kind_equal(a, b),
    }
}

/// `SameValueZero` for two primitives.
pub(crate) fn same_value_zero(a: &Primitive, b: &Primitive) -> bool {
    match (a, b) {
        (Primitive::Number(x), Primitive::Number(y)) => {
            (x.is_nan() && y.is_nan()) || x == y
        }
        (Primitive::Tuple(x), Primitive::Tuple(y)) => tuples_equal(x, y),
        _ => same_kind_equal(a, b),
    }
}

// Non-numeric, non-tuple kinds agree under every equality algorithm.
fn same_kind_equal(a: &Primitive, b: &Primitive) -> bool {
    match (a, b) {
        (Primitive::Undefined, Primitive::Undefined) | (Primitive::Null, Primitive::Null) => true,
        (Primitive::Boolean(x), Primitive::Boolean(y)) => x == y,
        (Primitive::BigInt(x), Primitive::BigInt(y)) => x == y,
        (Primitive::String(x), Primitive::String(y)) => x == y,
        (Primitive::Symbol(x), Primitive::Symbol(y)) => x == y,
        _ => false,
    }
}

fn tuples_equal(a: &Tuple, b: &Tuple) -> bool {
    a.ptr_eq(b)
        || (a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| same_value_zero(x, y)))
}

/// Feeds a primitive into `state`, consistent with [`same_value_zero`].
pub(crate) fn hash_primitive<H: Hasher>(value: &Primitive, state: &mut H) {
    match value {
        Primitive::Undefined => HASH_TAG_UNDEFINED.hash(state),
        Primitive::Null => HASH_TAG_NULL.hash(state),
        Primitive::Boolean(b) => {
            HASH_TAG_BOOL.hash(state);
            b.hash(state);
        }
        Primitive::Number(n) => {
            HASH_TAG_NUMBER.hash(state);
            normalize_float_bits(*n).hash(state);
        }
        Primitive::BigInt(b) => {
            HASH_TAG_BIGINT.hash(state);
            b.hash(state);
        }
        Primitive::String(s) => {
            HASH_TAG_STRING.hash(state);
            s.hash(state);
        }
        Primitive::Symbol(sym) => {
            HASH_TAG_SYMBOL.hash(state);
            sym.id().hash(state);
        }
        Primitive::Tuple(t) => hash_tuple(t, state),
    }
}

// Length first, then elements in order, so permutations and prefixes diverge.
pub(crate) fn hash_tuple<H: Hasher>(tuple: &Tuple, state: &mut H) {
    HASH_TAG_TUPLE.hash(state);
    tuple.len().hash(state);
    for element in tuple.iter() {
        hash_primitive(element, state);
    }
}

/// Value equality and hashing for built-in values.
///
/// `structural_eq` compares the observable content of a value, never its
/// identity. `structural_hash` is stable across calls and processes, and
/// `a.structural_eq(&b)` implies `a.structural_hash() == b.structural_hash()`.
pub trait StructuralEq {
    /// Returns whether `self` and `other` hold the same observable content.
    fn structural_eq(&self, other: &Self) -> bool;

    /// Feeds the observable content into `state`.
    fn hash_into<H: Hasher>(&self, state: &mut H);

    /// Returns a hash derived from the observable content.
    fn structural_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash_into(&mut hasher);
        hasher.finish()
    }
}

impl StructuralEq for Tuple {
    fn structural_eq(&self, other: &Self) -> bool {
        tuples_equal(self, other)
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        hash_tuple(self, state);
    }
}

impl StructuralEq for Primitive {
    fn structural_eq(&self, other: &Self) -> bool {
        same_value_zero(self, other)
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        hash_primitive(self, state);
    }
}

impl StructuralEq for PlainDate {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

impl StructuralEq for PlainTime {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }
}

// The reference day is an anchor and does not take part.
impl StructuralEq for PlainYearMonth {
    fn structural_eq(&self, other: &Self) -> bool {
        self.same_year_month(other)
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.iso.year.hash(state);
        self.iso.month.hash(state);
        self.calendar().hash(state);
    }
}

// The reference year is an anchor and does not take part.
impl StructuralEq for PlainMonthDay {
    fn structural_eq(&self, other: &Self) -> bool {
        self.same_month_day(other)
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.iso.month.hash(state);
        self.iso.day.hash(state);
        self.calendar().hash(state);
    }
}

impl StructuralEq for Duration {
    fn structural_eq(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.fields().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::{same_value_zero, strict_equals, StructuralEq};
    use crate::{
        Calendar, Duration, PlainDate, PlainMonthDay, PlainTime, PlainYearMonth, Primitive,
        Symbol, Tuple,
    };

    fn numbers(values: &[i32]) -> Tuple {
        values.iter().copied().map(Primitive::from).collect()
    }

    #[test]
    fn tuple_order_is_identity() {
        let a = numbers(&[1, 2, 3]);
        let b = numbers(&[1, 2, 3]);
        let c = numbers(&[3, 2, 1]);
        assert!(a.structural_eq(&b));
        assert!(!a.structural_eq(&c));
        assert_eq!(a.structural_hash(), b.structural_hash());
        assert_eq!(a.structural_hash(), a.structural_hash());
        assert_ne!(
            numbers(&[1, 2]).structural_hash(),
            numbers(&[2, 1]).structural_hash()
        );
    }

    #[test]
    fn zero_and_nan_normalisation() {
        let pos = Tuple::of([Primitive::from(0.0), Primitive::from(f64::NAN)]);
        let neg = Tuple::of([Primitive::from(-0.0), Primitive::from(f64::NAN)]);
        assert!(pos.structural_eq(&neg));
        assert_eq!(pos.structural_hash(), neg.structural_hash());

        let nan = Primitive::from(f64::NAN);
        assert!(same_value_zero(&nan, &nan));
        assert!(!strict_equals(&nan, &nan));
        assert!(strict_equals(&Primitive::from(0.0), &Primitive::from(-0.0)));
    }

    #[test]
    fn kinds_never_mix() {
        let cases = [
            (Primitive::Undefined, Primitive::Null),
            (Primitive::from(1), Primitive::from("1")),
            (Primitive::from(1), Primitive::from(BigInt::from(1))),
            (Primitive::from(true), Primitive::from(1)),
            (Primitive::from(Tuple::empty()), Primitive::Undefined),
        ];
        for (a, b) in cases {
            assert!(!same_value_zero(&a, &b), "{a} vs {b}");
            assert!(!strict_equals(&a, &b), "{a} vs {b}");
        }
        assert!(same_value_zero(
            &Primitive::from(BigInt::from(7)),
            &Primitive::from(BigInt::from(7))
        ));
    }

    #[test]
    fn nested_tuples_compare_structurally() {
        let inner = numbers(&[1, 2]);
        let a = Tuple::of([Primitive::from(inner.clone()), Primitive::from("x")]);
        let b = Tuple::of([Primitive::from(numbers(&[1, 2])), Primitive::from("x")]);
        assert!(a.structural_eq(&b));
        assert_eq!(a.structural_hash(), b.structural_hash());
        assert!(strict_equals(&Primitive::from(a), &Primitive::from(b)));

        // A nested empty tuple is not the same as an empty outer tuple.
        let wrapped = Tuple::of([Primitive::from(Tuple::empty())]);
        assert!(!wrapped.structural_eq(&Tuple::empty()));
    }

    #[test]
    fn symbols_hash_by_identity() {
        let a = Primitive::from(Symbol::new(1, Some("s")));
        let b = Primitive::from(Symbol::new(1, None));
        assert!(a.structural_eq(&b));
        assert_eq!(a.structural_hash(), b.structural_hash());
    }

    #[test]
    fn temporal_values() {
        let cal = Calendar::default();
        let d1 = PlainDate::try_new(2024, 3, 1, cal).unwrap();
        let d2 = PlainDate::try_new(2024, 3, 1, cal).unwrap();
        assert!(d1.structural_eq(&d2));
        assert_eq!(d1.structural_hash(), d2.structural_hash());

        let t1 = PlainTime::try_new(1, 2, 3, 4, 5, 6).unwrap();
        let t2 = PlainTime::try_new(1, 2, 3, 4, 5, 7).unwrap();
        assert!(!t1.structural_eq(&t2));

        let ym1 = PlainYearMonth::try_new(2024, 3, Some(1), cal).unwrap();
        let ym2 = PlainYearMonth::try_new(2024, 3, Some(15), cal).unwrap();
        assert!(ym1.structural_eq(&ym2));
        assert_eq!(ym1.structural_hash(), ym2.structural_hash());

        let md1 = PlainMonthDay::try_new(3, 1, cal, Some(1972)).unwrap();
        let md2 = PlainMonthDay::try_new(3, 1, cal, Some(2001)).unwrap();
        assert!(md1.structural_eq(&md2));
        assert_eq!(md1.structural_hash(), md2.structural_hash());

        let dur1 = Duration::new(0, 0, 0, 1, 0, 0, 0, 0, 0, 0).unwrap();
        let dur2 = Duration::new(0, 0, 0, 0, 24, 0, 0, 0, 0, 0).unwrap();
        assert!(!dur1.structural_eq(&dur2));
        assert!(dur1.structural_eq(&dur1.negated().negated()));
    }
}
