use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{require, Identified};
use crate::error::{ApiError, FieldErrors};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i64,
    pub car: i64,
    pub name: String,
    pub description: String,
    pub rating: u8,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl Identified for Review {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Body of `POST /store/cars/{id}/reviews/`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub name: String,
    pub description: String,
    pub rating: u8,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name);
        require(&mut errors, "description", &self.description);
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            errors.add(
                "rating",
                format!("Choose a rating from {} to {}.", MIN_RATING, MAX_RATING),
            );
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub name: String,
    pub description: String,
    pub rating: String,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            rating: MAX_RATING.to_string(),
        }
    }
}

impl ReviewDraft {
    pub fn into_new_review(self) -> Result<NewReview, ApiError> {
        let review = NewReview {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            rating: self.rating.trim().parse::<u8>().unwrap_or(0),
        };
        review.validate()?;
        Ok(review)
    }
}

/// Mean rating rounded to one decimal place, `None` without reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = total as f32 / reviews.len() as f32;
    Some((mean * 10.0).round() / 10.0)
}

/// `3` → `"★★★☆☆"`.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: i64, rating: u8) -> Review {
        Review {
            id,
            car: 1,
            name: "Sam".into(),
            description: "Smooth ride".into(),
            rating,
            date: None,
        }
    }

    #[test]
    fn average_is_rounded() {
        assert_eq!(average_rating(&[]), None);
        assert_eq!(
            average_rating(&[review(1, 5), review(2, 4), review(3, 4)]),
            Some(4.3)
        );
    }

    #[test]
    fn rating_out_of_range() {
        let err = ReviewDraft {
            name: "Sam".into(),
            description: "Great".into(),
            rating: "9".into(),
        }
        .into_new_review()
        .unwrap_err();
        assert_eq!(err.display_message(), "rating: Choose a rating from 1 to 5.");
    }

    #[test]
    fn review_dates_decode() {
        let review: Review = serde_json::from_str(
            r#"{"id": 1, "car": 4, "name": "Ana", "description": "Ok", "rating": 3, "date": "2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(review.date, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn star_strings() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
