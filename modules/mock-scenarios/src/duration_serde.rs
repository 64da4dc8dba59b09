//! Serde support for human-readable durations (`"300ms"`, `"3s"`).
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Foo {
//!     #[serde(with = "mock_scenarios::duration_serde")]
//!     timeout: Duration,
//! }
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserializer, Serializer, de};

/// Serializes a `Duration` as a humantime string.
///
/// # Errors
/// Returns the serializer's error if writing the string fails.
#[allow(clippy::trivially_copy_pass_by_ref)] // serde requires &T signature
pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&humantime::format_duration(*value))
}

/// Deserializes a `Duration` from a humantime string.
///
/// # Errors
/// Returns an error if the input is not a string or cannot be parsed.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    struct V;

    impl de::Visitor<'_> for V {
        type Value = Duration;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a duration such as \"300ms\" or \"3s\"")
        }

        fn visit_str<E>(self, v: &str) -> Result<Duration, E>
        where
            E: de::Error,
        {
            humantime::parse_duration(v)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_str(V)
}
