//! Input validation for a prediction request.
//!
//! Fail-fast: the first rule that fails wins, matching the order the form
//! checks fields. Pure — no I/O happens before validation passes.

use thiserror::Error;

use crate::models::input::{Category, IndiaState, RequestInput};

/// Maximum attainable NEET score.
pub const MAX_SCORE: u16 = 720;

/// A raw form submission, all fields as the strings the client posted.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawSubmission {
    pub score: String,
    pub category: String,
    pub state: String,
    pub mobile: String,
}

/// User-correctable input errors. Display strings are shown to the user
/// verbatim, so they carry the full form copy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your NEET score.")]
    EmptyScore,
    #[error("Please enter a valid NEET score between 0 and 720.")]
    InvalidScore,
    #[error("Please enter a valid 10-digit mobile number.")]
    InvalidMobile,
    #[error("Please select a valid category.")]
    InvalidCategory,
    #[error("Please select a valid state.")]
    InvalidState,
}

/// Validates a raw submission into a [`RequestInput`].
///
/// Rules, in order, first failure wins:
/// 1. score non-empty;
/// 2. score an integer in 0..=720;
/// 3. mobile exactly 10 ASCII digits;
/// 4. category a member of the closed category list;
/// 5. state a member of the closed state list.
pub fn validate(raw: &RawSubmission) -> Result<RequestInput, ValidationError> {
    let score_text = raw.score.trim();
    if score_text.is_empty() {
        return Err(ValidationError::EmptyScore);
    }

    let score: u16 = score_text
        .parse::<i64>()
        .ok()
        .filter(|s| (0..=i64::from(MAX_SCORE)).contains(s))
        .map(|s| s as u16)
        .ok_or(ValidationError::InvalidScore)?;

    if !is_valid_mobile(&raw.mobile) {
        return Err(ValidationError::InvalidMobile);
    }

    let category: Category = raw
        .category
        .parse()
        .map_err(|_| ValidationError::InvalidCategory)?;

    let state: IndiaState = raw
        .state
        .parse()
        .map_err(|_| ValidationError::InvalidState)?;

    Ok(RequestInput {
        score,
        category,
        state,
        mobile: raw.mobile.clone(),
    })
}

/// `^\d{10}$` — exactly ten ASCII digits, nothing else.
fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(score: &str, mobile: &str) -> RawSubmission {
        RawSubmission {
            score: score.to_string(),
            category: "OBC".to_string(),
            state: "Uttar Pradesh".to_string(),
            mobile: mobile.to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let input = validate(&raw("580", "9876543210")).unwrap();
        assert_eq!(input.score, 580);
        assert_eq!(input.category, Category::Obc);
        assert_eq!(input.state, IndiaState::UttarPradesh);
        assert_eq!(input.mobile, "9876543210");
    }

    #[test]
    fn test_score_bounds_are_inclusive() {
        assert_eq!(validate(&raw("0", "9876543210")).unwrap().score, 0);
        assert_eq!(validate(&raw("720", "9876543210")).unwrap().score, 720);
    }

    #[test]
    fn test_empty_score() {
        assert_eq!(
            validate(&raw("", "9876543210")),
            Err(ValidationError::EmptyScore)
        );
        assert_eq!(
            validate(&raw("   ", "9876543210")),
            Err(ValidationError::EmptyScore)
        );
    }

    #[test]
    fn test_score_out_of_range() {
        assert_eq!(
            validate(&raw("721", "9876543210")),
            Err(ValidationError::InvalidScore)
        );
        assert_eq!(
            validate(&raw("-1", "9876543210")),
            Err(ValidationError::InvalidScore)
        );
        assert_eq!(
            validate(&raw("9999", "9876543210")),
            Err(ValidationError::InvalidScore)
        );
    }

    #[test]
    fn test_score_must_be_an_integer() {
        assert_eq!(
            validate(&raw("580.5", "9876543210")),
            Err(ValidationError::InvalidScore)
        );
        assert_eq!(
            validate(&raw("abc", "9876543210")),
            Err(ValidationError::InvalidScore)
        );
    }

    #[test]
    fn test_mobile_must_be_ten_digits() {
        assert_eq!(
            validate(&raw("580", "12345")),
            Err(ValidationError::InvalidMobile)
        );
        assert_eq!(
            validate(&raw("580", "98765432101")),
            Err(ValidationError::InvalidMobile)
        );
        assert_eq!(
            validate(&raw("580", "98765abc10")),
            Err(ValidationError::InvalidMobile)
        );
        assert_eq!(
            validate(&raw("580", "")),
            Err(ValidationError::InvalidMobile)
        );
        // +91 prefix is not accepted — digits only
        assert_eq!(
            validate(&raw("580", "+919876543")),
            Err(ValidationError::InvalidMobile)
        );
    }

    #[test]
    fn test_score_checked_before_mobile() {
        // Both fields invalid — score error wins.
        assert_eq!(
            validate(&raw("9000", "12345")),
            Err(ValidationError::InvalidScore)
        );
    }

    #[test]
    fn test_unknown_category_and_state() {
        let mut bad = raw("580", "9876543210");
        bad.category = "NRI".to_string();
        assert_eq!(validate(&bad), Err(ValidationError::InvalidCategory));

        let mut bad = raw("580", "9876543210");
        bad.state = "Atlantis".to_string();
        assert_eq!(validate(&bad), Err(ValidationError::InvalidState));
    }

    #[test]
    fn test_error_copy_is_user_facing() {
        assert_eq!(
            ValidationError::InvalidMobile.to_string(),
            "Please enter a valid 10-digit mobile number."
        );
        assert_eq!(
            ValidationError::InvalidScore.to_string(),
            "Please enter a valid NEET score between 0 and 720."
        );
    }
}
