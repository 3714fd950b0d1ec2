use serde::{Deserialize, Serialize};

use super::{require, Identified};
use crate::error::{ApiError, FieldErrors};

/// The role a user must hold before listing or selling a car.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CarOwner {
    pub id: i64,
    pub user: i64,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

impl Identified for CarOwner {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /store/carowners/`. The backend attaches the signed-in user.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewCarOwner {
    pub phone: String,
    pub address: String,
}

impl NewCarOwner {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        check_phone(&mut errors, &self.phone);
        require(&mut errors, "address", &self.address);
        errors.into_result()
    }
}

/// Accepts digits with the usual separators, 7 to 15 digits long.
pub(crate) fn check_phone(errors: &mut FieldErrors, phone: &str) {
    let phone = phone.trim();
    if phone.is_empty() {
        errors.add("phone", super::REQUIRED);
        return;
    }
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !allowed || !(7..=15).contains(&digits) {
        errors.add("phone", "Enter a valid phone number.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers() {
        for ok in ["+1 (555) 010-2030", "0712345678"] {
            let mut errors = FieldErrors::new();
            check_phone(&mut errors, ok);
            assert!(errors.is_empty(), "{ok} rejected");
        }
        for bad in ["12345", "call me", "+1 555 010 2030 4455 66"] {
            let mut errors = FieldErrors::new();
            check_phone(&mut errors, bad);
            assert!(!errors.is_empty(), "{bad} accepted");
        }
    }

    #[test]
    fn owner_needs_address() {
        let owner = NewCarOwner {
            phone: "0712345678".into(),
            address: String::new(),
        };
        assert_eq!(
            owner.validate().unwrap_err().display_message(),
            "address: This field is required."
        );
    }
}
