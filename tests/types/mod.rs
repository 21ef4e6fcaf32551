use value_rail::{Absent, IndexOutOfBounds, UnknownVariant};

#[test]
fn error_types_display_their_details() {
    let lookup = IndexOutOfBounds { index: 4, len: 3 };
    assert_eq!(lookup.to_string(), "index 4 out of bounds for length 3");

    let variant = UnknownVariant { input: "teal".to_string(), type_name: "Color" };
    assert_eq!(variant.to_string(), "'teal' is not a variant of Color");
}

#[test]
fn absent_converts_from_and_into_unit() {
    let absent: Absent = ().into();
    assert_eq!(absent, Absent);
    let (): () = Absent.into();
}

#[test]
#[cfg(feature = "serde")]
fn absent_serde_round_trip() {
    let serialized = serde_json::to_string(&Absent).unwrap();
    let deserialized: Absent = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, Absent);

    let missing: Result<i32, Absent> = Err(Absent);
    let serialized = serde_json::to_string(&missing).unwrap();
    let deserialized: Result<i32, Absent> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, missing);
}

#[test]
#[cfg(feature = "serde")]
fn index_out_of_bounds_serde_round_trip() {
    let error = IndexOutOfBounds { index: 7, len: 2 };
    let serialized = serde_json::to_string(&error).unwrap();
    assert_eq!(serialized, r#"{"index":7,"len":2}"#);

    let deserialized: IndexOutOfBounds = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, error);
}

#[test]
#[cfg(feature = "serde")]
fn unknown_variant_serializes_input_and_type_name() {
    let error = UnknownVariant { input: "teal".to_string(), type_name: "Color" };
    let value = serde_json::to_value(&error).unwrap();
    assert_eq!(value, serde_json::json!({ "input": "teal", "type_name": "Color" }));
}

#[test]
#[cfg(all(feature = "serde", feature = "std"))]
fn fault_serde_round_trip() {
    use value_rail::{catching, Fault};

    let fault = catching(|| -> u8 { panic!("disk full") }).unwrap_err();
    let serialized = serde_json::to_string(&fault).unwrap();
    let deserialized: Fault = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, fault);
    assert_eq!(deserialized.message(), "disk full");
}
