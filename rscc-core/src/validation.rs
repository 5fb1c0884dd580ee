//! Precondition checks shared by the credit methods.
//!
//! Every check runs before any arithmetic so a rejected input never produces a
//! partial result.

use crate::errors::{RSCCError, RSCCResult};
use crate::types::FloatValue;

/// Require a finite value that is zero or greater.
pub fn require_non_negative(field: &str, value: FloatValue) -> RSCCResult<FloatValue> {
    if !value.is_finite() {
        return Err(RSCCError::invalid_input(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(RSCCError::invalid_input(field, value, "must not be negative"));
    }
    Ok(value)
}

/// Require a finite value strictly greater than zero.
///
/// Used for quantities that appear as a divisor or exponent denominator.
pub fn require_positive(field: &str, value: FloatValue) -> RSCCResult<FloatValue> {
    if !value.is_finite() {
        return Err(RSCCError::invalid_input(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(RSCCError::invalid_input(
            field,
            value,
            "must be greater than zero",
        ));
    }
    Ok(value)
}

/// Require a computed quantity to be representable.
///
/// Inputs that are each finite can still overflow once multiplied together.
pub fn require_finite_result(field: &str, value: FloatValue) -> RSCCResult<FloatValue> {
    if !value.is_finite() {
        return Err(RSCCError::invalid_input(
            field,
            value,
            "result is not representable as a finite number",
        ));
    }
    Ok(value)
}
