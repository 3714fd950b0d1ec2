pub mod car_form;
pub mod cars_list;
pub mod checkout_button;
pub mod company_picker;
pub mod navbar;
pub mod notification_banner;
pub mod owner_form;
pub mod review_form;
pub mod reviews_list;
pub mod text_field;

pub use car_form::CarForm;
pub use cars_list::CarsList;
pub use checkout_button::CheckoutButton;
pub use company_picker::{CompanyPicker, DealershipPicker, IdSelect};
pub use navbar::Navbar;
pub use notification_banner::NotificationBanner;
pub use owner_form::OwnerForm;
pub use review_form::ReviewForm;
pub use reviews_list::ReviewsList;
pub use text_field::TextField;
