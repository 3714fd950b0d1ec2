use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::car_owner::check_phone;
use super::Identified;
use crate::error::{ApiError, FieldErrors};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub user: i64,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl Identified for Customer {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerDraft {
    pub phone: String,
    pub birth_date: String,
}

impl CustomerDraft {
    pub fn into_new_customer(self) -> Result<NewCustomer, ApiError> {
        self.into_new_customer_on(Utc::now().date_naive())
    }

    fn into_new_customer_on(self, today: NaiveDate) -> Result<NewCustomer, ApiError> {
        let mut errors = FieldErrors::new();
        check_phone(&mut errors, &self.phone);

        let birth_date = match self.birth_date.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) if date <= today => Some(date),
                Ok(_) => {
                    errors.add("birth_date", "Birth date cannot be in the future.");
                    None
                }
                Err(_) => {
                    errors.add("birth_date", "Enter a valid date (YYYY-MM-DD).");
                    None
                }
            },
        };

        errors.into_result()?;
        Ok(NewCustomer {
            phone: self.phone.trim().to_string(),
            birth_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn birth_date_is_optional() {
        let customer = CustomerDraft {
            phone: "0712345678".into(),
            birth_date: String::new(),
        }
        .into_new_customer_on(today())
        .unwrap();
        assert_eq!(customer.birth_date, None);
        assert_eq!(
            serde_json::to_string(&customer).unwrap(),
            r#"{"phone":"0712345678","birth_date":null}"#
        );
    }

    #[test]
    fn birth_date_must_parse_and_be_past() {
        let err = CustomerDraft {
            phone: "0712345678".into(),
            birth_date: "19/10/1990".into(),
        }
        .into_new_customer_on(today())
        .unwrap_err();
        assert_eq!(
            err.display_message(),
            "birth_date: Enter a valid date (YYYY-MM-DD)."
        );

        let err = CustomerDraft {
            phone: "0712345678".into(),
            birth_date: "2030-01-01".into(),
        }
        .into_new_customer_on(today())
        .unwrap_err();
        assert_eq!(
            err.display_message(),
            "birth_date: Birth date cannot be in the future."
        );
    }
}
