pub mod car_detail;
pub mod car_list;
pub mod car_owners;
pub mod companies;
pub mod customers;
pub mod dealerships;
pub mod login;
pub mod not_found;
pub mod payment;
pub mod register;
pub mod sell_car;

pub use car_detail::CarDetailPage;
pub use car_list::CarListPage;
pub use car_owners::CarOwnersPage;
pub use companies::CompaniesPage;
pub use customers::CustomersPage;
pub use dealerships::DealershipsPage;
pub use login::LoginPage;
pub use not_found::NotFound;
pub use payment::{PaymentCancelPage, PaymentSuccessPage};
pub use register::RegisterPage;
pub use sell_car::SellCarPage;
