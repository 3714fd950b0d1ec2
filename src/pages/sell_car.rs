use leptos::*;
use leptos_router::A;

use crate::api::use_api;
use crate::components::{CarForm, CarsList, CheckoutButton, OwnerForm};
use crate::models::{prepend, remove_by_id, Car, CarOwner};
use crate::notify::use_notifier;
use crate::session::{login_path, use_auth};
use crate::utils::leptos_owner::with_owner_safe;
use crate::workflow::{owner_for, seller_step, SellerAction, SellerStep};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OwnersLoad {
    Loading,
    Loaded,
    Failed,
}

/// The owner list decides every step after sign-in; until it has loaded the
/// step is not shown.
fn blocked_by(step: SellerStep, load: OwnersLoad) -> Option<OwnersLoad> {
    (step != SellerStep::SignIn && load != OwnersLoad::Loaded).then_some(load)
}

/// The seller journey: become a car owner, list a car, pay for the listing.
#[component]
pub fn SellCarPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let notifier = use_notifier();

    let (owners, set_owners) = create_signal(Vec::<CarOwner>::new());
    let (owners_load, set_owners_load) = create_signal(OwnersLoad::Loading);
    let (reload, set_reload) = create_signal(0_u32);
    let (pending, set_pending) = create_signal(None::<i64>);
    let (my_cars, set_my_cars) = create_signal(Vec::<Car>::new());

    let step = create_memo(move |_| {
        owners.with(|list| seller_step(auth.user_id(), list, pending.get()))
    });
    let my_owner_id = create_memo(move |_| {
        auth.user_id()
            .and_then(|user_id| owners.with(|list| owner_for(user_id, list).map(|o| o.id)))
    });

    let page_owner = Owner::current();

    // A failed owner lookup keeps the journey on hold.
    create_effect(move |_| {
        let _ = reload.get();
        if auth.session().is_none() {
            return;
        }
        set_owners_load.set(OwnersLoad::Loading);
        let client = api.client();
        spawn_local(async move {
            match client.list_car_owners().await {
                Ok(list) => {
                    set_owners.set(list);
                    set_owners_load.set(OwnersLoad::Loaded);
                }
                Err(err) => {
                    notifier.error(&err);
                    set_owners_load.set(OwnersLoad::Failed);
                }
            }
        });
    });

    create_effect(move |_| {
        let Some(owner_id) = my_owner_id.get() else {
            return;
        };
        let client = api.client();
        spawn_local(async move {
            match client.list_cars(None).await {
                Ok(cars) => set_my_cars.set(
                    cars.into_iter()
                        .filter(|car| car.car_owner == Some(owner_id))
                        .collect(),
                ),
                Err(err) => notifier.error(&err),
            }
        });
    });

    let on_owner_created = Callback::new(move |owner: CarOwner| {
        set_owners.update(|list| prepend(list, owner));
    });

    let on_car_created = Callback::new(move |car: Car| {
        set_pending.set(Some(car.id));
        set_my_cars.update(|list| prepend(list, car));
    });

    let remove_listing = Callback::new(move |car_id: i64| {
        let client = api.client();
        spawn_local(async move {
            match client.delete_car(car_id).await {
                Ok(()) => {
                    notifier.success("Listing removed.");
                    with_owner_safe(page_owner, "listing removed", || {
                        set_my_cars.update(|list| {
                            remove_by_id(list, car_id);
                        });
                        if pending.try_get_untracked().flatten() == Some(car_id) {
                            set_pending.set(None);
                        }
                    });
                }
                Err(err) => notifier.error(&err),
            }
        });
    });

    let owner_gate = Signal::derive(move || step.get().permits(SellerAction::BecomeOwner));
    let listing_gate = Signal::derive(move || step.get().permits(SellerAction::CreateListing));
    let pay_gate = Signal::derive(move || step.get().permits(SellerAction::Pay));

    let current_step = move || {
        let current = step.get();
        match blocked_by(current, owners_load.get()) {
            None => {}
            Some(OwnersLoad::Failed) => {
                return view! {
                    <p>"Your owner profile could not be checked."</p>
                    <button class="secondary" on:click=move |_| set_reload.update(|n| *n += 1)>
                        "Try again"
                    </button>
                }
                .into_view();
            }
            Some(_) => {
                return view! { <p class="loading">"Checking your owner profile..."</p> }
                    .into_view();
            }
        }
        match current {
            SellerStep::SignIn => view! {
                <p>"Sign in to start selling."</p>
                <A href=login_path("/sell")>"Sign in"</A>
            }
            .into_view(),
            SellerStep::BecomeOwner => view! {
                <p>"Only registered car owners can list cars."</p>
                <OwnerForm on_created=on_owner_created gate=owner_gate />
            }
            .into_view(),
            SellerStep::CreateListing => view! {
                <CarForm on_created=on_car_created gate=listing_gate />
            }
            .into_view(),
            SellerStep::Pay { car_id } => view! {
                <p>"Your listing is saved. Pay the listing fee to publish it."</p>
                <CheckoutButton car_id=car_id label="Pay listing fee" gate=pay_gate />
                <button class="secondary" on:click=move |_| remove_listing.call(car_id)>
                    "Discard listing"
                </button>
            }
            .into_view(),
        }
    };

    view! {
        <section class="sell-page">
            <h1>"Sell a car"</h1>
            <ol class="progress">
                {SellerStep::all()
                    .into_iter()
                    .map(|s| {
                        let class = move || {
                            let now = step.get().index();
                            if s.index() < now {
                                "done"
                            } else if s.index() == now {
                                "current"
                            } else {
                                "todo"
                            }
                        };
                        view! { <li class=class>{s.label()}</li> }
                    })
                    .collect_view()}
            </ol>
            {current_step}
            <Show when=move || my_owner_id.get().is_some()>
                <h2>"Your listings"</h2>
                <CarsList cars=my_cars on_remove=remove_listing />
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_owner_lookup_does_not_offer_the_owner_form() {
        // With no owners loaded the derived step is BecomeOwner.
        let step = seller_step(Some(4), &[], None);
        assert_eq!(step, SellerStep::BecomeOwner);
        assert_eq!(blocked_by(step, OwnersLoad::Failed), Some(OwnersLoad::Failed));
        assert_eq!(blocked_by(step, OwnersLoad::Loading), Some(OwnersLoad::Loading));
        assert_eq!(blocked_by(step, OwnersLoad::Loaded), None);
    }

    #[test]
    fn signed_out_visitors_are_never_blocked() {
        assert_eq!(blocked_by(SellerStep::SignIn, OwnersLoad::Failed), None);
    }
}
