
#[cfg(feature = "regex")]
pub mod regex;
