use value_rail::{catching, catching_into, Fault};

#[derive(Debug, PartialEq)]
enum JobError {
    Rejected(&'static str),
    Crashed(String),
}

impl From<Fault> for JobError {
    fn from(fault: Fault) -> Self {
        JobError::Crashed(fault.into_message())
    }
}

#[test]
fn normal_return_becomes_ok() {
    assert_eq!(catching(|| "done"), Ok("done"));
}

#[test]
fn static_str_panic_is_captured() {
    let fault = catching(|| -> u8 { panic!("static message") }).unwrap_err();
    assert_eq!(fault.message(), "static message");
    assert_eq!(fault.to_string(), "panicked: static message");
}

#[test]
fn formatted_panic_is_captured() {
    let id = 7;
    let fault = catching(|| -> u8 { panic!("job {id} failed") }).unwrap_err();
    assert_eq!(fault.message(), "job 7 failed");
}

#[test]
fn non_string_payload_gets_placeholder() {
    let fault = catching(|| -> u8 { std::panic::panic_any(42_u32) }).unwrap_err();
    assert_eq!(fault.message(), Fault::OPAQUE_PAYLOAD);
}

#[test]
fn unwrap_on_none_is_captured_as_fault() {
    let fault = catching(|| None::<i32>.unwrap()).unwrap_err();
    assert!(fault.message().contains("None"));
}

#[test]
fn unwrap_on_err_fault_mentions_the_error() {
    let fault = catching(|| Err::<i32, &str>("x").unwrap()).unwrap_err();
    assert!(fault.message().contains("\"x\""));
}

#[test]
fn catching_into_keeps_domain_errors_and_folds_panics() {
    let ok: Result<u8, JobError> = catching_into(|| Ok(1));
    assert_eq!(ok, Ok(1));

    let rejected: Result<u8, JobError> = catching_into(|| Err(JobError::Rejected("quota")));
    assert_eq!(rejected, Err(JobError::Rejected("quota")));

    let crashed: Result<u8, JobError> = catching_into(|| -> Result<u8, JobError> { panic!("worker died") });
    assert_eq!(crashed, Err(JobError::Crashed("worker died".to_string())));
}
