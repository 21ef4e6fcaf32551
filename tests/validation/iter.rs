use value_rail::validation::Validation;

#[test]
fn iter_yields_valid_value_once() {
    let valid = Validation::<&str, i32>::valid(3);
    let values: Vec<_> = valid.iter().collect();
    assert_eq!(values, vec![&3]);

    let invalid = Validation::<&str, i32>::invalid("no");
    assert_eq!(invalid.iter().count(), 0);
}

#[test]
fn iter_mut_allows_updating_valid_value() {
    let mut valid = Validation::<&str, i32>::valid(3);
    if let Some(value) = valid.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(valid.into_value(), Some(4));
}

#[test]
fn into_iter_and_ref_iter_work_in_for_loops() {
    let valid = Validation::<&str, String>::valid("hello".to_string());
    let mut seen = Vec::new();
    for value in &valid {
        seen.push(value.len());
    }
    for value in valid {
        seen.push(value.len() * 10);
    }
    assert_eq!(seen, vec![5, 50]);
}

#[test]
fn iter_errors_walks_in_report_order() {
    let validation: Validation<&str, i32> = Validation::invalid_many("x", ["y", "z"]);
    let collected: Vec<_> = validation.iter_errors().copied().collect();
    assert_eq!(collected, vec!["x", "y", "z"]);

    let valid = Validation::<&str, i32>::valid(1);
    assert_eq!(valid.iter_errors().count(), 0);
}

#[test]
fn iter_errors_mut_rewrites_errors_in_place() {
    let mut validation: Validation<String, i32> =
        Validation::invalid_many("a".to_string(), ["b".to_string()]);
    for error in validation.iter_errors_mut() {
        error.push('!');
    }
    let errors: Vec<_> = validation.iter_errors().cloned().collect();
    assert_eq!(errors, vec!["a!".to_string(), "b!".to_string()]);
}
