//! Companies, car owners, customers and dealerships: plain list + create
//! resources.
use super::{path, ApiClient};
use crate::error::ApiError;
use crate::models::{
    CarOwner, Company, Customer, Dealership, NewCarOwner, NewCompany, NewCustomer, NewDealership,
};

impl ApiClient {
    pub async fn list_companies(&self) -> Result<Vec<Company>, ApiError> {
        self.get_list(&path(&["store", "companies"])).await
    }

    pub async fn create_company(&self, company: &NewCompany) -> Result<Company, ApiError> {
        company.validate()?;
        self.require_session()?;
        self.post(&path(&["store", "companies"]), company).await
    }

    pub async fn list_car_owners(&self) -> Result<Vec<CarOwner>, ApiError> {
        self.get_list(&path(&["store", "carowners"])).await
    }

    /// Registers the signed-in user as a car owner.
    pub async fn create_car_owner(&self, owner: &NewCarOwner) -> Result<CarOwner, ApiError> {
        owner.validate()?;
        self.require_session()?;
        self.post(&path(&["store", "carowners"]), owner).await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.require_session()?;
        self.get_list(&path(&["store", "customers"])).await
    }

    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, ApiError> {
        self.require_session()?;
        self.post(&path(&["store", "customers"]), customer).await
    }

    pub async fn list_dealerships(&self) -> Result<Vec<Dealership>, ApiError> {
        self.get_list(&path(&["store", "dealerships"])).await
    }

    pub async fn create_dealership(
        &self,
        dealership: &NewDealership,
    ) -> Result<Dealership, ApiError> {
        dealership.validate()?;
        self.require_session()?;
        self.post(&path(&["store", "dealerships"]), dealership).await
    }
}
