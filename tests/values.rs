//! End to end construction through a `Realm`.

use std::{cell::RefCell, collections::HashSet};

use immutable_values::{
    calendar::CalendarRules,
    host::{BuiltinValue, HostHooks},
    iso::IsoDate,
    options::ArithmeticOverflow,
    Calendar, CalendarRegistry, ObjectHandle, PlainYearMonth, Primitive, Realm, StructuralEq,
    Tuple, Value,
};

/// Records every payload it is asked to wrap.
#[derive(Default)]
struct RecordingHooks {
    wrapped: RefCell<Vec<&'static str>>,
}

impl HostHooks for RecordingHooks {
    type Object = BuiltinValue;

    fn wrap(&self, value: BuiltinValue) -> BuiltinValue {
        self.wrapped.borrow_mut().push(value.type_name());
        value
    }
}

fn days_in_month(year: i32, month: u8) -> u8 {
    Calendar::default().rules().days_in_month(year, month)
}

#[test]
fn accepted_dates_are_in_range() {
    let calendar = Calendar::default();
    for year in [-271_821, -1, 0, 1900, 1970, 2000, 2001, 2024, 275_760] {
        for month in -1..=14 {
            for day in -1..=33 {
                let accepted = calendar.is_valid_date(year, month, day);
                let in_range = (1..=12).contains(&month)
                    && day >= 1
                    && day <= i32::from(days_in_month(year, month as u8));
                assert_eq!(accepted, in_range, "{year}-{month}-{day}");
            }
        }
    }
}

#[test]
fn leap_year_boundaries() {
    let realm = Realm::new();
    assert!(realm.construct_plain_date(2000.0, 2.0, 29.0, None).is_ok());
    assert!(realm.construct_plain_date(1900.0, 2.0, 29.0, None).is_err());
    assert!(realm.construct_plain_date(2004.0, 2.0, 29.0, None).is_ok());
    assert!(realm.construct_plain_date(2001.0, 2.0, 29.0, None).is_err());
}

#[test]
fn validation_is_idempotent() {
    let calendar = Calendar::default();
    for (y, m, d) in [(2000, 2, 29), (1900, 2, 29), (2024, 4, 31), (2024, 12, 31)] {
        let first = calendar.is_valid_date(y, m, d);
        for _ in 0..16 {
            assert_eq!(calendar.is_valid_date(y, m, d), first);
        }
    }
}

#[test]
fn plain_time_bounds() {
    let realm = Realm::new();
    let time = realm
        .construct_plain_time(23.0, 59.0, 59.0, 999.0, 999.0, 999.0)
        .unwrap();
    let time = time.as_plain_time().unwrap();
    assert_eq!((time.hour(), time.nanosecond()), (23, 999));

    assert!(realm.construct_plain_time(24.0, 0.0, 0.0, 0.0, 0.0, 0.0).is_err());
    let err = realm
        .construct_plain_time(0.0, 60.0, 0.0, 0.0, 0.0, 0.0)
        .unwrap_err();
    assert!(err.is_range());
    assert_eq!(err.message(), "Not a valid time.");
    assert!(realm.construct_plain_time(0.0, 0.0, 0.0, -1.0, 0.0, 0.0).is_err());
}

#[test]
fn duration_sign_rule() {
    let realm = Realm::new();
    let mut fields = [0.0; 10];
    assert!(realm.construct_duration(fields).is_ok());

    fields[0] = 1.0;
    fields[1] = 2.0;
    let duration = realm.construct_duration(fields).unwrap();
    assert_eq!(duration.as_duration().map(|d| d.months()), Some(2));

    fields[1] = -2.0;
    let err = realm.construct_duration(fields).unwrap_err();
    assert!(err.is_range());

    // Zero never violates the sign rule, whatever its sign bit.
    let negative_zero = [-1.0, -0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -3.0];
    assert!(realm.construct_duration(negative_zero).is_ok());
}

#[test]
fn tuple_holds_primitives_only() {
    let realm = Realm::new();
    let ok = realm.construct_tuple([Value::from(1), Value::from("a"), Value::from(true)]);
    assert!(ok.unwrap().is_tuple());

    let err = realm
        .construct_tuple([Value::from(1), Value::from(ObjectHandle::new(1)), Value::from(true)])
        .unwrap_err();
    assert!(err.is_type());
}

#[test]
fn tuple_structural_equality() {
    let tuple = |values: [i32; 3]| Tuple::of(values.map(Primitive::from));
    let a = tuple([1, 2, 3]);
    assert_eq!(a, tuple([1, 2, 3]));
    assert_ne!(a, tuple([3, 2, 1]));

    let pair = |x: i32, y: i32| Tuple::of([Primitive::from(x), Primitive::from(y)]);
    let first = pair(1, 2).structural_hash();
    for _ in 0..8 {
        assert_eq!(pair(1, 2).structural_hash(), first);
    }
    assert_ne!(first, pair(2, 1).structural_hash());

    let mut set = HashSet::new();
    set.insert(pair(1, 2));
    set.insert(pair(1, 2));
    set.insert(pair(2, 1));
    assert_eq!(set.len(), 2);
}

#[test]
fn calendar_resolution() {
    let registry = CalendarRegistry::default();
    assert_eq!(registry.resolve("iso8601").unwrap().identifier(), "iso8601");
    let err = registry.resolve("gregorian").unwrap_err();
    assert!(err.is_range());
    assert_eq!(err.message(), "Given calendar id not supported.");
}

#[test]
fn month_day_reference_year_is_an_anchor() {
    let realm = Realm::new();
    let a = realm
        .construct_plain_month_day(3.0, 1.0, None, Some(1972.0))
        .unwrap();
    let b = realm
        .construct_plain_month_day(3.0, 1.0, None, Some(2001.0))
        .unwrap();
    assert_eq!(a, b);
    let (a, b) = (a.as_plain_month_day().unwrap(), b.as_plain_month_day().unwrap());
    assert!(a.same_month_day(b));
    assert!(a.structural_eq(b));

    assert!(realm
        .construct_plain_month_day(2.0, 29.0, None, Some(2001.0))
        .is_err());
}

#[test]
fn year_month_anchor_day() {
    let ym = PlainYearMonth::new_with_overflow(
        2023,
        2,
        Some(31),
        Calendar::default(),
        ArithmeticOverflow::Constrain,
    )
    .unwrap();
    assert_eq!(ym.reference_day(), 28);
    assert_eq!(ym.days_in_month(), 28);
    assert!(PlainYearMonth::try_new(2023, 2, Some(31), Calendar::default()).is_err());
}

#[test]
fn hooks_see_only_valid_payloads() {
    let realm = Realm::with_hooks(RecordingHooks::default());
    let _ = realm.construct_plain_date(2024.0, 1.0, 31.0, None);
    let _ = realm.construct_plain_date(2024.0, 2.0, 31.0, None);
    let _ = realm.construct_plain_year_month(2024.0, 13.0, None, None);
    let _ = realm.construct_plain_year_month(2024.0, 12.0, None, None);
    let _ = realm.construct_tuple([Value::from(ObjectHandle::new(3))]);
    let _ = realm.construct_tuple([]);
    assert_eq!(
        *realm.hooks().wrapped.borrow(),
        ["Temporal.PlainDate", "Temporal.PlainYearMonth", "Tuple"]
    );
}

#[test]
fn iso_records_round_trip_through_dates() {
    let realm = Realm::new();
    let date = realm.construct_plain_date(1970.0, 1.0, 1.0, None).unwrap();
    let date = date.as_plain_date().unwrap();
    assert_eq!(date.epoch_days(), 0);
    let iso = IsoDate::default();
    assert_eq!(
        (date.iso_year(), date.iso_month(), date.iso_day()),
        (iso.year, iso.month, iso.day)
    );
    assert_eq!(iso.to_epoch_days(), date.epoch_days());
}
