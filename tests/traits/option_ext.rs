use std::cell::Cell;

use value_rail::{Absent, OptionExt};

#[test]
fn zip_with_combines_only_when_both_present() {
    assert_eq!(Some(3).zip_with(Some(4), |a, b| a * b), Some(12));
    assert_eq!(Some(3).zip_with(None::<i32>, |a, b| a * b), None);
    assert_eq!(None::<i32>.zip_with(Some(4), |a, b| a * b), None);
}

#[test]
fn zip_with_never_calls_combiner_on_absence() {
    let calls = Cell::new(0);
    let _ = None::<i32>.zip_with(Some(1), |a, b| {
        calls.set(calls.get() + 1);
        a + b
    });
    assert_eq!(calls.get(), 0);
}

#[test]
fn match_with_runs_exactly_one_branch() {
    let some_hits = Cell::new(0);
    let none_hits = Cell::new(0);

    let len = Some("four").match_with(
        |s| {
            some_hits.set(some_hits.get() + 1);
            s.len()
        },
        || {
            none_hits.set(none_hits.get() + 1);
            0
        },
    );
    assert_eq!(len, 4);
    assert_eq!((some_hits.get(), none_hits.get()), (1, 0));

    let len = None::<&str>.match_with(|s| s.len(), || 99);
    assert_eq!(len, 99);
}

#[test]
fn match_with_supports_side_effect_only_branches() {
    let mut log = Vec::new();
    Some(1).match_with(|v| log.push(format!("some {v}")), || {});
    None::<i32>.match_with(|_| {}, || log.push("none".to_string()));
    assert_eq!(log, vec!["some 1".to_string(), "none".to_string()]);
}

#[test]
fn inspect_none_runs_only_on_absence() {
    let hits = Cell::new(0);
    let kept = Some(5).inspect_none(|| hits.set(hits.get() + 1));
    assert_eq!(kept, Some(5));
    assert_eq!(hits.get(), 0);

    let kept = None::<i32>.inspect_none(|| hits.set(hits.get() + 1));
    assert_eq!(kept, None);
    assert_eq!(hits.get(), 1);
}

#[test]
fn into_result_uses_absent_marker() {
    assert_eq!(Some("x").into_result(), Ok("x"));
    assert_eq!(None::<&str>.into_result(), Err(Absent));
}

#[test]
fn contains_value_compares_payload() {
    assert!(Some(String::from("abc")).contains_value(&"abc"));
    assert!(!Some(1).contains_value(&2));
    assert!(!None::<i32>.contains_value(&1));
}

#[test]
fn std_combinators_cover_the_remaining_option_algebra() {
    let some = Some(2);
    let none: Option<i32> = None;

    assert_eq!(some.map_or(0, |v| v * 10), 20);
    assert_eq!(none.map_or_else(|| -1, |v| v * 10), -1);
    assert_eq!(some.filter(|v| *v > 5), None);
    assert_eq!(none.or(Some(9)), Some(9));
    assert_eq!(some.and(Some("right")), Some("right"));
    assert_eq!(none.and(Some("right")), None);
    assert_eq!(some.xor(none), Some(2));
    assert_eq!(some.xor(Some(3)), None);
    assert_eq!(some.zip(Some('a')), Some((2, 'a')));
    assert!(some.is_some_and(|v| v == 2));
    assert!(none.is_none_or(|v| v == 100));
    assert_eq!(Some(Some(1)).flatten(), Some(1));
    assert_eq!(none.unwrap_or(7), 7);
    assert_eq!(none.unwrap_or_else(|| 8), 8);
}

#[test]
fn or_else_is_lazy_on_present_values() {
    let hits = Cell::new(0);
    let kept = Some(1).or_else(|| {
        hits.set(1);
        Some(2)
    });
    assert_eq!(kept, Some(1));
    assert_eq!(hits.get(), 0);
}

#[test]
fn unwrap_on_present_value_returns_it() {
    assert_eq!(Some(5).unwrap(), 5);
    assert_eq!(Some(5).expect("present"), 5);
}

#[test]
#[should_panic]
fn unwrap_on_absent_value_panics() {
    let none: Option<i32> = None;
    none.unwrap();
}

#[test]
#[should_panic(expected = "config key missing")]
fn expect_on_absent_value_reports_message() {
    let none: Option<i32> = None;
    none.expect("config key missing");
}
