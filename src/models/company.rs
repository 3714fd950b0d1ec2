use serde::{Deserialize, Serialize};

use super::{require, Identified};
use crate::error::{ApiError, FieldErrors};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub description: String,
}

impl Identified for Company {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub country: String,
    pub description: String,
}

impl NewCompany {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "country", &self.country);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_country_are_required() {
        let err = NewCompany {
            name: "  ".into(),
            ..NewCompany::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(
            err.display_message(),
            "country: This field is required.; name: This field is required."
        );
    }
}
