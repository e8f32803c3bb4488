//! Constrained value wrappers enforcing their invariant at construction.
//!
//! Each wrapper takes the underlying primitive through `new` and either
//! returns the wrapped value or fails with
//! [`Error::InvariantViolation`](crate::Error::InvariantViolation). The
//! wrapped primitive is exposed read-only; no wrapper can be constructed in
//! an invalid state.

use std::fmt;

use crate::{Error, Result};

/// A value strictly greater than zero.
///
/// Used for pixel widths and heights, tile sizes and grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Positive<T>(T);

impl<T> Positive<T>
where
    T: Copy + PartialOrd + Default + fmt::Debug,
{
    /// Wraps `value`, failing unless `value > 0`.
    pub fn new(value: T) -> Result<Self> {
        if value > T::default() {
            Ok(Self(value))
        } else {
            Err(Error::InvariantViolation(format!(
                "expected a positive value, got {value:?}"
            )))
        }
    }

    /// Returns the wrapped primitive.
    #[must_use]
    pub fn get(self) -> T {
        self.0
    }
}

/// A value greater than or equal to zero.
///
/// Used for counts, spacing, margin and animation frame durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNegative<T>(T);

impl<T> NonNegative<T>
where
    T: Copy + PartialOrd + Default + fmt::Debug,
{
    /// Wraps `value`, failing unless `value >= 0`.
    pub fn new(value: T) -> Result<Self> {
        if value >= T::default() {
            Ok(Self(value))
        } else {
            Err(Error::InvariantViolation(format!(
                "expected a non-negative value, got {value:?}"
            )))
        }
    }

    /// Returns the wrapped primitive.
    #[must_use]
    pub fn get(self) -> T {
        self.0
    }
}

/// A floating-point value in `[0, 1]`, used for layer opacity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UnitInterval(f32);

impl UnitInterval {
    /// Fully opaque, the default layer opacity.
    pub const ONE: Self = Self(1.0);

    /// Wraps `value`, failing unless `0 <= value <= 1`. NaN is rejected.
    pub fn new(value: f32) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvariantViolation(format!(
                "expected a value in [0, 1], got {value:?}"
            )))
        }
    }

    /// Returns the wrapped primitive.
    #[must_use]
    pub fn get(self) -> f32 {
        self.0
    }
}

/// A string with at least one character, used for property names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Wraps `value`, failing when it is empty.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            Err(Error::InvariantViolation(
                "expected a non-empty string".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the wrapped string.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the owned string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
