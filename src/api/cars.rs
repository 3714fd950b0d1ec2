use futures::future;

use super::{path, with_query, ApiClient};
use crate::error::ApiError;
use crate::models::{Car, NewCar, NewReview, Review};

impl ApiClient {
    /// `GET /store/cars/`, optionally filtered by the backend's `search`.
    pub async fn list_cars(&self, search: Option<&str>) -> Result<Vec<Car>, ApiError> {
        let path = with_query(&path(&["store", "cars"]), &[("search", search.unwrap_or(""))]);
        self.get_list(&path).await
    }

    pub async fn get_car(&self, id: i64) -> Result<Car, ApiError> {
        self.get(&path(&["store", "cars", &id.to_string()])).await
    }

    pub async fn create_car(&self, car: &NewCar) -> Result<Car, ApiError> {
        car.validate()?;
        self.require_session()?;
        self.post(&path(&["store", "cars"]), car).await
    }

    pub async fn delete_car(&self, id: i64) -> Result<(), ApiError> {
        self.require_session()?;
        self.delete(&path(&["store", "cars", &id.to_string()])).await
    }

    pub async fn list_reviews(&self, car_id: i64) -> Result<Vec<Review>, ApiError> {
        self.get_list(&path(&["store", "cars", &car_id.to_string(), "reviews"]))
            .await
    }

    pub async fn create_review(&self, car_id: i64, review: &NewReview) -> Result<Review, ApiError> {
        review.validate()?;
        self.post(
            &path(&["store", "cars", &car_id.to_string(), "reviews"]),
            review,
        )
        .await
    }

    /// Fetches a car and its reviews concurrently. Both must succeed.
    pub async fn car_with_reviews(&self, id: i64) -> Result<(Car, Vec<Review>), ApiError> {
        future::try_join(self.get_car(id), self.list_reviews(id)).await
    }
}
