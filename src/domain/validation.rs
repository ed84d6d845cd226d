use super::*;
use regex::Regex;

/// All phone numbers entered must match this mask.
pub const PHONE_MASK: &str = r"^\+?\d{1,11}$";
pub const MAX_NAME_LEN: usize = 60;

pub fn name_is_valid(name: &str) -> bool {
    // Length counted in characters, not bytes
    (1..=MAX_NAME_LEN).contains(&name.chars().count())
}

pub fn phone_is_valid(phone: &str) -> Result<bool, AppError> {
    let re = Regex::new(PHONE_MASK)?;
    Ok(re.is_match(phone))
}

/// Checks every field that was provided and returns the problems found.
///
/// Absent fields are skipped, so `validate(None, None)` is always clean.
/// An empty result means the input may be handed to the phone book.
pub fn validate(name: Option<&str>, phone: Option<&str>) -> Result<Vec<ValidationError>, AppError> {
    let mut problems = Vec::new();

    if let Some(name) = name
        && !name_is_valid(name)
    {
        problems.push(ValidationError::NameLength);
    }

    if let Some(phone) = phone
        && !phone_is_valid(phone)?
    {
        problems.push(ValidationError::BadNumber);
    }

    Ok(problems)
}
