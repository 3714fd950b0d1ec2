//! Client-side copies of the backend's REST resources.
//!
//! Nothing here is authoritative: lists are fetched on mount and replaced
//! wholesale on refetch. Create payloads validate their required fields before
//! any request is sent, using the same `{"field": [..]}` shape the backend
//! answers with.
use serde::{Deserialize, Deserializer};

use crate::error::FieldErrors;

pub mod car;
pub mod car_owner;
pub mod checkout;
pub mod company;
pub mod customer;
pub mod dealership;
pub mod review;
pub mod user;

pub use car::{Car, CarDraft, NewCar};
pub use car_owner::{CarOwner, NewCarOwner};
pub use checkout::{CheckoutRequest, CheckoutSession, PaymentStatus};
pub use company::{Company, NewCompany};
pub use customer::{Customer, CustomerDraft, NewCustomer};
pub use dealership::{Dealership, NewDealership};
pub use review::{NewReview, Review, ReviewDraft};
pub use user::{Credentials, Registration, TokenPair, User};

pub(crate) const REQUIRED: &str = "This field is required.";

/// Resources carrying a backend-assigned id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Puts a freshly created item at the top of a visible list.
pub fn prepend<T>(list: &mut Vec<T>, item: T) {
    list.insert(0, item);
}

/// Drops the item with `id`, returning whether anything was removed.
pub fn remove_by_id<T: Identified>(list: &mut Vec<T>, id: i64) -> bool {
    let before = list.len();
    list.retain(|item| item.id() != id);
    list.len() != before
}

/// List endpoints answer either with a bare array or with a paginated
/// `{"count": .., "results": [..]}` envelope.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Page { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Page { results } => results,
            Listing::Plain(items) => items,
        }
    }
}

/// Records `REQUIRED` for `field` when `value` is blank.
pub(crate) fn require(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
    }
}

/// Decimal fields arrive as strings (`"24999.00"`) but some endpoints send
/// plain numbers; keep them as text either way.
pub(crate) fn decimal_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Decimal::deserialize(deserializer)? {
        Decimal::Text(text) => text,
        Decimal::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(i64);

    impl Identified for Row {
        fn id(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn created_items_go_first() {
        let mut rows = vec![Row(1), Row(2)];
        prepend(&mut rows, Row(3));
        assert_eq!(rows, vec![Row(3), Row(1), Row(2)]);
    }

    #[test]
    fn remove_by_id_reports_misses() {
        let mut rows = vec![Row(1), Row(2)];
        assert!(remove_by_id(&mut rows, 1));
        assert!(!remove_by_id(&mut rows, 7));
        assert_eq!(rows, vec![Row(2)]);
    }

    #[test]
    fn listing_accepts_both_shapes() {
        let plain: Listing<i64> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(plain.into_vec(), vec![1, 2]);

        let page: Listing<i64> =
            serde_json::from_str(r#"{"count": 2, "next": null, "results": [4, 5]}"#).unwrap();
        assert_eq!(page.into_vec(), vec![4, 5]);
    }
}
