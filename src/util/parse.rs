use std::num::NonZeroU64;

use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake from a string slice
///
/// Zero is rejected: serenity's ID constructors panic on it.
///
/// # Arguments
/// - `value` - The string to attempt to parse
///
/// # Returns
/// - `Ok(NonZeroU64)` - Successfully parsed string
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a non-zero u64
pub fn parse_id_from_string(value: &str) -> Result<NonZeroU64, AppError> {
    let result = value
        .trim()
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result)
}
