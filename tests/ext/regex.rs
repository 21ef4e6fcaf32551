use value_rail::ext::regex::compile;
use value_rail::RegexExt;

#[test]
fn compile_reports_syntax_errors_as_values() {
    assert!(compile(r"[a-z]+").is_ok());
    assert!(compile(r"[a-z").is_err());
}

#[test]
fn captures_are_absent_without_a_match() {
    let re = compile(r"v(\d+)\.(\d+)").unwrap();
    assert_eq!(re.capture("release v2.14", 1), Some("2"));
    assert_eq!(re.capture("release v2.14", 2), Some("14"));
    assert_eq!(re.capture("release v2.14", 3), None);
    assert_eq!(re.capture("no version", 1), None);
}

#[test]
fn named_and_parsed_captures() {
    let re = compile(r"(?P<host>[a-z.]+):(?P<port>\d+)").unwrap();
    assert_eq!(re.capture_named("example.org:8080", "host"), Some("example.org"));
    assert_eq!(re.capture_named("example.org:8080", "user"), None);
    assert_eq!(re.parse_capture::<u16>("example.org:8080", 2), Some(8080));
    assert_eq!(re.parse_capture::<u8>("example.org:8080", 2), None);
}
