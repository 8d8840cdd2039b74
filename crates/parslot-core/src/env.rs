//! Environment variable parsing with defaults
//!
//! All parslot knobs are optional; unset or malformed values silently
//! fall back to the caller's default so a bad environment can never
//! fail a call.

use std::str::FromStr;

/// Spellings accepted as "true" by [`env_get_bool`]
const TRUE_WORDS: [&str; 4] = ["1", "true", "yes", "on"];

/// Read `key` and parse it as `T`, falling back to `default` when the
/// variable is unset or does not parse. Surrounding whitespace is
/// ignored.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or(default),
        Err(_) => default,
    }
}

/// Read `key` as a flag.
///
/// Any of the [`TRUE_WORDS`] spellings (case-insensitive) counts as
/// true; every other set value is false. Unset returns `default`.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(raw) => {
            let raw = raw.trim();
            TRUE_WORDS.iter().any(|w| raw.eq_ignore_ascii_case(w))
        }
        Err(_) => default,
    }
}
