/// Main application entry point for CarMarket.
/// Provides the shared config, session and notification handles, then routes
/// between the marketplace pages.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{Navbar, NotificationBanner};
use crate::config::AppConfig;
use crate::notify::Notifier;
use crate::pages::*;
use crate::session::Auth;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_env();
    Notifier::provide(config.notify_ms);
    provide_context(config);
    Auth::provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/carmarket.css" />
        <Title text="CarMarket" />
        <Router>
            <Navbar />
            <NotificationBanner />
            <main>
                <Routes>
                    <Route path="/" view=CarListPage />
                    <Route path="/cars/:id" view=CarDetailPage />
                    <Route path="/sell" view=SellCarPage />
                    <Route path="/companies" view=CompaniesPage />
                    <Route path="/carowners" view=CarOwnersPage />
                    <Route path="/customers" view=CustomersPage />
                    <Route path="/dealerships" view=DealershipsPage />
                    <Route path="/login" view=LoginPage />
                    <Route path="/register" view=RegisterPage />
                    <Route path="/payment/success" view=PaymentSuccessPage />
                    <Route path="/payment/cancel" view=PaymentCancelPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}
