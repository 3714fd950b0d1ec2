use leptos::ev::SubmitEvent;
use leptos::*;

use crate::api::use_api;
use crate::components::company_picker::{CompanyPicker, DealershipPicker};
use crate::components::text_field::TextField;
use crate::error::ApiError;
use crate::models::{Car, CarDraft};
use crate::notify::use_notifier;
use crate::utils::leptos_owner::with_owner_safe;
use crate::workflow::GateError;

/// Form for a new listing. Validates locally, posts it, then hands the
/// created car to `on_created` and clears itself. An optional `gate` blocks
/// submission while it holds an error.
#[component]
pub fn CarForm(
    #[prop(into)] on_created: Callback<Car>,
    #[prop(optional, into)] gate: Option<Signal<Result<(), GateError>>>,
) -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let owner = Owner::current();

    let name = create_rw_signal(String::new());
    let model = create_rw_signal(String::new());
    let year = create_rw_signal(String::new());
    let price = create_rw_signal(String::new());
    let mileage = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let company = create_rw_signal(None::<i64>);
    let dealership = create_rw_signal(None::<i64>);
    let (submitting, set_submitting) = create_signal(false);

    let reset = move || {
        for field in [name, model, year, price, mileage, description] {
            field.set(String::new());
        }
        company.set(None);
        dealership.set(None);
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if let Some(Err(gate)) = gate.map(|gate| gate.get_untracked()) {
            notifier.error(&ApiError::from(gate));
            return;
        }

        let draft = CarDraft {
            name: name.get_untracked(),
            model: model.get_untracked(),
            year: year.get_untracked(),
            price: price.get_untracked(),
            mileage: mileage.get_untracked(),
            description: description.get_untracked(),
            company: company.get_untracked(),
            dealership: dealership.get_untracked(),
        };
        let car = match draft.into_new_car() {
            Ok(car) => car,
            Err(err) => {
                notifier.error(&err);
                return;
            }
        };

        set_submitting.set(true);
        let client = api.client();
        spawn_local(async move {
            match client.create_car(&car).await {
                Ok(created) => {
                    notifier.success(&format!("{} is listed.", created.title()));
                    with_owner_safe(owner, "listing created", move || {
                        reset();
                        on_created.call(created);
                    });
                }
                Err(err) => notifier.error(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="car-form" on:submit=handle_submit>
            <h3>"List a car"</h3>
            <TextField label="Make" value=name placeholder="Toyota" />
            <TextField label="Model" value=model placeholder="Corolla" />
            <TextField label="Year" value=year input_type="number" />
            <TextField label="Price" value=price placeholder="12500.00" />
            <TextField label="Mileage (km)" value=mileage input_type="number" />
            <TextField label="Description" value=description multiline=true />
            <CompanyPicker selected=company />
            <DealershipPicker selected=dealership />
            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Saving..." } else { "Create listing" }}
            </button>
        </form>
    }
}
