use crate::utils::error::{LotteryError, Result, SelectionError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(LotteryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Parses one line of operator input as a ball number.
///
/// Negative integers parse and are left for the range check to reject;
/// anything that is not an integer at all is `NotANumber`.
pub fn parse_number(input: &str) -> std::result::Result<i64, SelectionError> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|_| SelectionError::NotANumber {
        input: trimmed.to_string(),
    })
}

pub fn validate_range(value: i64, min: u32, max: u32) -> std::result::Result<u32, SelectionError> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(SelectionError::OutOfRange { value, min, max });
    }
    // in range, so it fits
    Ok(value as u32)
}

/// Checks a candidate against the numbers already accepted for the same
/// participant. Runs before the range check, same as the prompt loop.
pub fn validate_unique(value: i64, accepted: &[u32]) -> std::result::Result<(), SelectionError> {
    if let Some(&dup) = accepted.iter().find(|&&n| i64::from(n) == value) {
        return Err(SelectionError::DuplicateSelection { value: dup });
    }
    Ok(())
}
