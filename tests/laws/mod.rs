use std::cell::Cell;

use value_rail::{FlattenResult, OptionExt, ResultExt};

fn double(x: i32) -> i32 {
    x * 2
}

fn inc(x: i32) -> i32 {
    x + 1
}

fn half(x: i32) -> Option<i32> {
    (x % 2 == 0).then_some(x / 2)
}

fn checked_half(x: i32) -> Result<i32, String> {
    half(x).ok_or_else(|| format!("{x} is odd"))
}

fn below_ten(x: i32) -> Result<i32, String> {
    if x < 10 {
        Ok(x)
    } else {
        Err(format!("{x} is too large"))
    }
}

const OPTIONS: [Option<i32>; 4] = [Some(0), Some(4), Some(7), None];

fn results() -> Vec<Result<i32, String>> {
    vec![Ok(0), Ok(4), Ok(7), Err("boom".to_string())]
}

#[test]
fn option_map_identity_and_composition() {
    for value in OPTIONS {
        assert_eq!(value.map(|x| x), value);
        assert_eq!(value.map(double).map(inc), value.map(|x| inc(double(x))));
    }
}

#[test]
fn result_map_identity_and_composition() {
    for value in results() {
        assert_eq!(value.clone().map(|x| x), value);
        assert_eq!(
            value.clone().map(double).map(inc),
            value.clone().map(|x| inc(double(x)))
        );
        assert_eq!(value.clone().select(double), value.map(double));
    }
}

#[test]
fn map_err_identity_and_composition() {
    for value in results() {
        assert_eq!(value.clone().map_err(|e| e), value);
        assert_eq!(
            value.clone().map_err(|e| e.len()).map_err(|n| n + 1),
            value.map_err(|e| e.len() + 1)
        );
    }
}

#[test]
fn option_bind_laws() {
    for x in [0, 4, 7] {
        assert_eq!(Some(x).and_then(half), half(x));
    }
    for value in OPTIONS {
        assert_eq!(value.and_then(Some), value);
        assert_eq!(
            value.and_then(half).and_then(half),
            value.and_then(|x| half(x).and_then(half))
        );
    }
}

#[test]
fn result_bind_laws() {
    for x in [0, 4, 7, 12] {
        assert_eq!(Ok(x).and_then(checked_half), checked_half(x));
    }
    for value in results() {
        assert_eq!(value.clone().and_then(Ok), value);
        assert_eq!(
            value.clone().and_then(checked_half).and_then(below_ten),
            value.and_then(|x| checked_half(x).and_then(below_ten))
        );
    }
}

#[test]
fn flatten_agrees_with_bind_on_identity() {
    let nested: Vec<Result<Result<i32, String>, String>> = vec![
        Ok(Ok(1)),
        Ok(Err("inner".to_string())),
        Err("outer".to_string()),
    ];
    for value in nested {
        assert_eq!(value.clone().flatten_result(), value.and_then(|inner| inner));
    }
}

#[test]
fn negative_variants_short_circuit_without_calling_closures() {
    let calls = Cell::new(0);
    let count = |x: i32| {
        calls.set(calls.get() + 1);
        x
    };

    assert_eq!(None::<i32>.map(count), None);
    assert_eq!(None::<i32>.and_then(|x| Some(count(x))), None);
    assert_eq!(None::<i32>.filter(|x| count(*x) > 0), None);
    assert_eq!(None::<i32>.zip_with(Some(1), |a, b| count(a + b)), None);

    let err = Err::<i32, &str>("e");
    assert_eq!(err.map(count), Err("e"));
    assert_eq!(err.and_then(|x| Ok::<i32, &str>(count(x))), Err("e"));
    assert_eq!(err.select(count), Err("e"));
    assert_eq!(err.filter(|x| count(*x) > 0, "rejected"), Err("e"));
    assert_eq!(
        err.select_many(|x| Ok(count(*x)), |a, b| count(a + b)),
        Err("e")
    );

    assert_eq!(calls.get(), 0);
}

#[test]
fn positive_variants_leave_error_handlers_alone() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        0
    };

    assert_eq!(Some(3).unwrap_or_else(fallback), 3);
    assert_eq!(Ok::<i32, &str>(3).unwrap_or_else(|_| fallback()), 3);
    assert_eq!(Ok::<i32, &str>(3).map_err(|_| fallback()), Ok(3));
    assert_eq!(Some(3).or_else(|| Some(fallback())), Some(3));

    assert_eq!(calls.get(), 0);
}

#[test]
fn match_with_is_total() {
    for value in OPTIONS {
        let folded = value.match_with(|x| x, || -1);
        assert_eq!(folded, value.unwrap_or(-1));
    }
    for value in results() {
        let folded = value.clone().match_with(|x| x, |e| -(e.len() as i32));
        assert_eq!(folded, value.unwrap_or(-4));
    }
}
