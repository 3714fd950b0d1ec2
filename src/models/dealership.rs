use serde::{Deserialize, Serialize};

use super::car_owner::check_phone;
use super::{require, Identified};
use crate::error::{ApiError, FieldErrors};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Dealership {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: Option<i64>,
}

impl Identified for Dealership {
    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct NewDealership {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<i64>,
}

impl NewDealership {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "address", &self.address);
        check_phone(&mut errors, &self.phone);
        errors.into_result()
    }
}
