use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::{decimal_string, require, Identified};
use crate::error::{ApiError, FieldErrors};

/// Year of the first production automobile; anything earlier is a typo.
pub const EARLIEST_YEAR: i32 = 1886;

/// Upper bound on prices, well inside what cents fit in an `i64`.
const MAX_PRICE: f64 = 1e13;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub model: String,
    pub year: i32,
    #[serde(deserialize_with = "decimal_string")]
    pub price: String,
    #[serde(default)]
    pub mileage: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: Option<i64>,
    #[serde(default)]
    pub car_owner: Option<i64>,
    #[serde(default)]
    pub dealership: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Identified for Car {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Car {
    pub fn title(&self) -> String {
        if self.model.is_empty() {
            format!("{} ({})", self.name, self.year)
        } else {
            format!("{} {} ({})", self.name, self.model, self.year)
        }
    }

    pub fn display_price(&self) -> String {
        format_price(&self.price)
    }
}

/// Body of `POST /store/cars/`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewCar {
    pub name: String,
    pub model: String,
    pub year: i32,
    pub price: String,
    pub mileage: u32,
    pub description: String,
    pub company: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealership: Option<i64>,
}

impl NewCar {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "model", &self.model);
        check_year(&mut errors, self.year, Utc::now().year());
        check_price(&mut errors, &self.price);
        errors.into_result()
    }
}

/// Raw form input for a new listing, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarDraft {
    pub name: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub mileage: String,
    pub description: String,
    pub company: Option<i64>,
    pub dealership: Option<i64>,
}

impl CarDraft {
    /// Parses and validates the draft, collecting every problem at once.
    pub fn into_new_car(self) -> Result<NewCar, ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "model", &self.model);

        let year = match self.year.trim().parse::<i32>() {
            Ok(year) => {
                check_year(&mut errors, year, Utc::now().year());
                year
            }
            Err(_) => {
                errors.add("year", "Enter a whole number.");
                0
            }
        };

        let price = self.price.trim().replace(',', "");
        check_price(&mut errors, &price);

        let mileage = match self.mileage.trim() {
            "" => 0,
            raw => raw.replace(',', "").parse::<u32>().unwrap_or_else(|_| {
                errors.add("mileage", "Enter a whole number.");
                0
            }),
        };

        let company = self.company.unwrap_or_else(|| {
            errors.add("company", "Select a company.");
            0
        });

        errors.into_result()?;
        Ok(NewCar {
            name: self.name.trim().to_string(),
            model: self.model.trim().to_string(),
            year,
            price,
            mileage,
            description: self.description.trim().to_string(),
            company,
            dealership: self.dealership,
        })
    }
}

fn check_year(errors: &mut FieldErrors, year: i32, current_year: i32) {
    if year < EARLIEST_YEAR || year > current_year + 1 {
        errors.add(
            "year",
            format!("Enter a year between {} and {}.", EARLIEST_YEAR, current_year + 1),
        );
    }
}

/// Parses a decimal price. `inf`, `NaN` and out-of-range values are refused.
fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && value.abs() < MAX_PRICE)
}

fn check_price(errors: &mut FieldErrors, raw: &str) {
    if !parse_price(raw).is_some_and(|price| price > 0.0) {
        errors.add("price", "Enter a price greater than zero.");
    }
}

/// `"24999.5"` → `"$24,999.50"`. Unparseable input is shown as-is.
pub fn format_price(raw: &str) -> String {
    let Some(value) = parse_price(raw) else {
        return raw.to_string();
    };
    let cents = (value * 100.0).round() as i64;
    let (sign, cents) = if cents < 0 { ("-", -cents) } else { ("", cents) };
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CarDraft {
        CarDraft {
            name: "Toyota".into(),
            model: "Corolla".into(),
            year: "2019".into(),
            price: "12,500".into(),
            mileage: "48000".into(),
            description: " Single owner ".into(),
            company: Some(2),
            dealership: None,
        }
    }

    #[test]
    fn decodes_backend_payload() {
        let car: Car = serde_json::from_str(
            r#"{"id": 7, "name": "Volvo", "model": "XC60", "year": 2021,
                "price": "41999.00", "mileage": 12000, "description": "",
                "company": 3, "car_owner": 5, "dealership": null, "image": null}"#,
        )
        .unwrap();
        assert_eq!(car.price, "41999.00");
        assert_eq!(car.car_owner, Some(5));
        assert_eq!(car.title(), "Volvo XC60 (2021)");
        assert_eq!(car.display_price(), "$41,999.00");
    }

    #[test]
    fn numeric_prices_are_accepted() {
        let car: Car =
            serde_json::from_str(r#"{"id": 1, "name": "Fiat", "year": 2010, "price": 3500}"#)
                .unwrap();
        assert_eq!(car.price, "3500");
        assert_eq!(car.title(), "Fiat (2010)");
    }

    #[test]
    fn non_finite_prices_are_refused() {
        for raw in ["inf", "-inf", "NaN", "1e300"] {
            assert_eq!(format_price(raw), raw);
            let err = CarDraft {
                price: raw.into(),
                ..draft()
            }
            .into_new_car()
            .unwrap_err();
            let ApiError::Validation(errors) = err else {
                panic!("expected validation error for {raw}");
            };
            assert!(errors.get("price").is_some());
        }

        let car = NewCar {
            price: "inf".into(),
            ..draft().into_new_car().unwrap()
        };
        assert!(car.validate().is_err());
        assert_eq!(format_price("-1250.5"), "-$1,250.50");
    }

    #[test]
    fn valid_draft_becomes_payload() {
        let car = draft().into_new_car().unwrap();
        assert_eq!(car.price, "12500");
        assert_eq!(car.mileage, 48000);
        assert_eq!(car.description, "Single owner");
        assert!(car.validate().is_ok());

        let body = serde_json::to_value(&car).unwrap();
        assert!(body.get("dealership").is_none());
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let err = CarDraft {
            company: None,
            ..CarDraft::default()
        }
        .into_new_car()
        .unwrap_err();

        let ApiError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        for field in ["name", "model", "year", "price", "company"] {
            assert!(errors.get(field).is_some(), "no error for {field}");
        }
        assert!(errors.get("mileage").is_none());
    }

    #[test]
    fn implausible_years_are_rejected() {
        let mut errors = FieldErrors::new();
        check_year(&mut errors, 1850, 2026);
        check_year(&mut errors, 2028, 2026);
        assert_eq!(errors.get("year").map(<[String]>::len), Some(2));

        let mut errors = FieldErrors::new();
        check_year(&mut errors, 2027, 2026);
        assert!(errors.is_empty());
    }

    #[test]
    fn prices_are_grouped() {
        assert_eq!(format_price("950"), "$950.00");
        assert_eq!(format_price("1234567.891"), "$1,234,567.89");
        assert_eq!(format_price("call us"), "call us");
    }
}
