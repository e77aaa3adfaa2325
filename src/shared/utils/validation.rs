use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_user_id(user_id: i32) -> Result<(), AppError> {
        if user_id <= 0 {
            return Err(AppError::ValidationError(
                "user_id must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_movie_id(movie_id: i32) -> Result<(), AppError> {
        if movie_id <= 0 {
            return Err(AppError::ValidationError(
                "movie_id must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_rating_value(rating_value: i32) -> Result<(), AppError> {
        if !(0..=10).contains(&rating_value) {
            return Err(AppError::ValidationError(
                "rating_value must be between 0 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_review(review: &str) -> Result<(), AppError> {
        if review.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Review cannot be empty".to_string(),
            ));
        }
        if review.len() > 4000 {
            return Err(AppError::ValidationError(
                "Review too long (max 4000 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        if email.is_empty() {
            return Err(AppError::ValidationError(
                "Email cannot be empty".to_string(),
            ));
        }
        if email.len() > 255 {
            return Err(AppError::ValidationError(
                "Email too long (max 255 characters)".to_string(),
            ));
        }

        // Shape check only; deliverability is not our concern.
        let re = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
        if !re.is_match(email) {
            return Err(AppError::ValidationError(
                "Email address is malformed".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_age(age: i32) -> Result<(), AppError> {
        if !(0..=150).contains(&age) {
            return Err(AppError::ValidationError(
                "Age must be between 0 and 150".to_string(),
            ));
        }
        Ok(())
    }
}
