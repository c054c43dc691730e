//! Linear key lookup over a static dataset.
//!
//! Keys arrive from the HTTP layer as text and are coerced to the numeric key
//! type before comparison, so `"101"`, `" 101 "`, `"101.0"` and `"0x65"` all
//! address the record with id `101`.

use thiserror::Error;

/// A record that can be addressed by a numeric key.
pub trait Keyed {
    /// What a successful lookup hands back to the caller.
    type Projection;

    /// Static message returned when no record matches. Names the valid key
    /// range and is not derived from the data.
    const INVALID_KEY_MESSAGE: &'static str;

    fn key(&self) -> u64;

    fn project(&self) -> Self::Projection;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No record carries the key, or the key was not a valid number.
    #[error("{message}")]
    KeyNotFound { message: &'static str },
}

impl LookupError {
    pub fn message(&self) -> &'static str {
        match self {
            LookupError::KeyNotFound { message } => *message,
        }
    }
}

pub type LookupResult<T> = Result<T, LookupError>;

/// Coerces a textual key to the numeric key type.
///
/// Accepts plain unsigned integers, unsigned `0x`/`0o`/`0b` literals, and any
/// finite decimal notation whose value is a non-negative whole number (`"1e2"`
/// is `100`). Everything else, including signed radix literals, is `None`.
pub fn coerce_key(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some((radix, digits)) = split_radix_prefix(trimmed) {
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok();
    }
    if let Ok(n) = trimmed.parse::<u64>() {
        return Some(n);
    }
    let f = trimmed.parse::<f64>().ok()?;
    if !f.is_finite() || f < 0.0 || f.fract() != 0.0 || f > u64::MAX as f64 {
        return None;
    }
    Some(f as u64)
}

fn split_radix_prefix(s: &str) -> Option<(u32, &str)> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

/// Looks up `raw_key` in `dataset`, returning the first matching record's projection.
pub fn lookup<R: Keyed>(dataset: &[R], raw_key: &str) -> LookupResult<R::Projection> {
    match coerce_key(raw_key) {
        Some(key) => lookup_by_key(dataset, key),
        None => Err(LookupError::KeyNotFound {
            message: R::INVALID_KEY_MESSAGE,
        }),
    }
}

pub fn lookup_by_key<R: Keyed>(dataset: &[R], key: u64) -> LookupResult<R::Projection> {
    dataset
        .iter()
        .find(|record| record.key() == key)
        .map(R::project)
        .ok_or(LookupError::KeyNotFound {
            message: R::INVALID_KEY_MESSAGE,
        })
}
