//! The three sample operations: greeting, summation and user lookup.
//!
//! Each operation is stateless. Validation failures are returned as
//! [`SampleError`] before any log event is emitted, so a failed call leaves
//! no trace in the log stream.

use std::fmt::Display;

use serde_json::Value;
use tracing::{debug, info};

use crate::constants::GREETING;
use crate::error::SampleError;
use crate::models::UserRecord;

const NOT_A_LIST: &str = "Input must be a list";
const NOT_INTEGERS: &str = "All elements must be integers";
const SUM_OVERFLOW: &str = "Sum overflows a 64-bit integer";
const NON_POSITIVE_ID: &str = "User ID must be positive";

/// Return the fixed greeting message.
pub fn hello_world() -> &'static str {
    info!("Generated greeting: {GREETING}");
    GREETING
}

/// Sum a dynamically typed list of integers.
///
/// `input` must be a JSON array whose elements are all integers. Floats are
/// rejected even when whole (`2.0`), as are strings, booleans and nested
/// values. Elements may lie outside the `i64` range as long as the total
/// does not.
///
/// # Errors
///
/// - [`SampleError::TypeMismatch`] if `input` is not an array.
/// - [`SampleError::ValueConstraint`] if any element is not an integer, or
///   the total does not fit in an `i64`.
pub fn calculate_sum(input: &Value) -> Result<i64, SampleError> {
    let numbers = integers_from(input)?;
    total_of(&numbers)
}

/// Sum a typed slice of integers.
///
/// The slice type already rules out non-integers; only the total is range
/// checked, so `[i64::MAX, 1, -1]` is fine.
pub fn sum_integers(numbers: &[i64]) -> Result<i64, SampleError> {
    let wide: Vec<i128> = numbers.iter().map(|&n| i128::from(n)).collect();
    total_of(&wide)
}

/// Build the simulated user record for `user_id`.
///
/// # Errors
///
/// [`SampleError::ValueConstraint`] if `user_id` is zero or negative.
pub fn get_user_info(user_id: i64) -> Result<UserRecord, SampleError> {
    if user_id <= 0 {
        return Err(SampleError::value_constraint(NON_POSITIVE_ID));
    }

    let user = UserRecord::for_id(user_id);

    info!("Retrieved user info for ID {user_id}");
    Ok(user)
}

/// Check that `input` is an array of JSON integers and extract them.
///
/// Every JSON integer fits in an `i128` (`i64` or `u64` range).
pub fn integers_from(input: &Value) -> Result<Vec<i128>, SampleError> {
    let items = input
        .as_array()
        .ok_or_else(|| SampleError::type_mismatch(NOT_A_LIST))?;

    items
        .iter()
        .map(|item| {
            item.as_i64()
                .map(i128::from)
                .or_else(|| item.as_u64().map(i128::from))
                .ok_or_else(|| SampleError::value_constraint(NOT_INTEGERS))
        })
        .collect()
}

/// Add up validated integers and narrow the total to `i64`.
pub(crate) fn total_of(numbers: &[i128]) -> Result<i64, SampleError> {
    let total = numbers
        .iter()
        .try_fold(0i128, |acc, &n| acc.checked_add(n))
        .and_then(|wide| i64::try_from(wide).ok())
        .ok_or_else(|| SampleError::value_constraint(SUM_OVERFLOW))?;

    debug!("Calculated sum of {}: {total}", format_numbers(numbers));
    Ok(total)
}

/// Render numbers as `[1, 2, 3]`.
pub fn format_numbers<T: Display>(numbers: &[T]) -> String {
    let joined: Vec<String> = numbers.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}
