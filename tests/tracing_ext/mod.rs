use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;
use value_rail::TraceExt;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a subscriber that records every event as plain text.
fn capture<R>(f: impl FnOnce() -> R) -> (R, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let _guard = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .set_default();
    let value = f();
    (value, captured.contents())
}

#[test]
fn err_is_logged_at_warn_with_label_and_error() {
    let (value, logs) = capture(|| Err::<i32, &str>("bad port").traced("reading config"));

    assert_eq!(value, Err("bad port"));
    assert_eq!(logs.lines().count(), 1);
    assert!(logs.contains("WARN"), "{logs}");
    assert!(logs.contains("value_rail"), "{logs}");
    assert!(logs.contains("reading config"), "{logs}");
    assert!(logs.contains("bad port"), "{logs}");
    assert!(logs.contains("result is Err"), "{logs}");
}

#[test]
fn none_is_logged_at_debug_with_label() {
    let (value, logs) = capture(|| None::<char>.traced("user lookup"));

    assert_eq!(value, None);
    assert_eq!(logs.lines().count(), 1);
    assert!(logs.contains("DEBUG"), "{logs}");
    assert!(logs.contains("value_rail"), "{logs}");
    assert!(logs.contains("user lookup"), "{logs}");
    assert!(logs.contains("option is None"), "{logs}");
}

#[test]
fn ok_and_some_emit_nothing() {
    let ((ok, some), logs) = capture(|| {
        let ok = Ok::<i32, &str>(1).traced("ok path");
        let some = Some('a').traced("lookup");
        (ok, some)
    });

    assert_eq!(ok, Ok(1));
    assert_eq!(some, Some('a'));
    assert!(logs.is_empty(), "{logs}");
}
