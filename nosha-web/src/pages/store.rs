use crate::api::{InFlight, NoshaClient};
use crate::forms::{FieldSpec, FormState, Rule};
use crate::models::app_state::AppState;
use crate::session::SessionStore;
use serde_json::json;
use shared::models::VendorProfile;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

fn store_form(profile: Option<&VendorProfile>) -> FormState {
    let mut form = FormState::new(vec![
        FieldSpec::new("marketName", "Market Name", vec![Rule::Required]),
        FieldSpec::new("marketLocation", "Market Location", vec![Rule::Required]),
    ]);
    if let Some(profile) = profile {
        form.set_value("marketName", profile.market_name.clone().unwrap_or_default());
        form.set_value(
            "marketLocation",
            profile.market_location.clone().unwrap_or_default(),
        );
    }
    form
}

fn updated_profile(profile: &VendorProfile, form: &FormState) -> VendorProfile {
    VendorProfile {
        market_name: Some(form.value("marketName").trim().to_string()),
        market_location: Some(form.value("marketLocation").trim().to_string()),
        ..profile.clone()
    }
}

/// Storefront settings.
#[allow(clippy::too_many_lines)]
#[function_component(StoreSettingsPage)]
pub fn store_settings_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let profile = state.session.user.clone();
    let form = use_state(|| store_form(profile.as_ref()));
    let in_flight = use_memo((), |_| InFlight::default());
    let saving = use_state(|| false);
    let notice = use_state(|| None::<Result<String, String>>);

    let onsubmit = {
        let form = form.clone();
        let in_flight = in_flight.clone();
        let saving = saving.clone();
        let notice = notice.clone();
        let dispatch = dispatch;
        let profile = profile.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next_form = (*form).clone();
            next_form.touch_all();
            if !next_form.is_valid() {
                form.set(next_form);
                return;
            }

            let Some(current) = profile.clone() else {
                return;
            };
            // Claimed synchronously; the saving handle lags a render behind.
            if !in_flight.begin() {
                return;
            }
            let updated = updated_profile(&current, &next_form);
            let token = state.session.token.clone().unwrap_or_default();
            form.set(next_form);
            saving.set(true);
            notice.set(None);

            let in_flight = in_flight.clone();
            let saving = saving.clone();
            let notice = notice.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let payload = json!({
                    "marketName": updated.market_name,
                    "marketLocation": updated.market_location,
                });
                let result = NoshaClient::shared()
                    .update_vendor_settings(current.id, "store", &payload)
                    .await;
                match result {
                    Ok(_) => {
                        if SessionStore::set_session(&token, &updated).is_ok() {
                            dispatch.reduce_mut(|state| {
                                state.session.user = Some(updated.clone());
                            });
                        }
                        notice.set(Some(Ok("Store settings saved.".to_string())));
                    }
                    Err(error) => notice.set(Some(Err(error.to_string()))),
                }
                in_flight.finish();
                saving.set(false);
            });
        })
    };

    let on_input = |name: &'static str| {
        let form = form.clone();
        let notice = notice.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_value(name, input.value());
                form.set(next);
                if notice.is_some() {
                    notice.set(None);
                }
            }
        })
    };

    let on_blur = |name: &'static str| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.touch(name);
            form.set(next);
        })
    };

    let field = |name: &'static str, label: &str| {
        let error = form.error(name);
        html! {
            <div class="form-control">
                <label class="label" for={name}>
                    <span class="label-text">{label.to_string()}</span>
                </label>
                <input
                    id={name}
                    class={classes!("input", "input-bordered", error.is_some().then_some("input-error"))}
                    type="text"
                    value={form.value(name).to_string()}
                    oninput={on_input(name)}
                    onblur={on_blur(name)}
                />
                if let Some(message) = error {
                    <p class="mt-1 text-xs text-error">{message}</p>
                }
            </div>
        }
    };

    let preview_name = profile
        .as_ref()
        .map_or("My Store", VendorProfile::market_display_name)
        .to_string();

    html! {
        <div class="p-6 max-w-xl">
            <h1 class="text-2xl font-bold mb-2">{"Store Settings"}</h1>
            <p class="text-base-content/70 mb-6">
                {format!("Customers currently see your store as \"{preview_name}\".")}
            </p>
            <div class="card bg-base-100 shadow">
                <form class="card-body" {onsubmit}>
                    {
                        match &*notice {
                            Some(Ok(message)) => html! {
                                <div class="alert alert-success"><span>{message.clone()}</span></div>
                            },
                            Some(Err(message)) => html! {
                                <div class="alert alert-error"><span>{message.clone()}</span></div>
                            },
                            None => Html::default(),
                        }
                    }
                    {field("marketName", "Market Name")}
                    {field("marketLocation", "Market Location")}
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" type="submit" disabled={*saving}>
                            {if *saving { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> VendorProfile {
        VendorProfile {
            id: 1,
            first_name: "Ahmed".to_string(),
            last_name: "Amer".to_string(),
            email: "ahmed.amer@gmail.com".to_string(),
            market_name: None,
            market_location: None,
        }
    }

    #[test]
    fn form_is_empty_for_unset_market() {
        let form = store_form(Some(&profile()));
        assert_eq!(form.value("marketName"), "");
        assert!(!form.is_valid());
    }

    #[test]
    fn update_fills_market_fields() {
        let mut form = store_form(Some(&profile()));
        form.set_value("marketName", "Teddy store");
        form.set_value("marketLocation", "Cairo, Egypt");
        let updated = updated_profile(&profile(), &form);
        assert_eq!(updated.market_name.as_deref(), Some("Teddy store"));
        assert_eq!(updated.market_display_name(), "Teddy store");
        assert_eq!(updated.email, "ahmed.amer@gmail.com");
    }
}
