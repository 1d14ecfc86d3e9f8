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

fn account_form(profile: Option<&VendorProfile>) -> FormState {
    let mut form = FormState::new(vec![
        FieldSpec::new(
            "firstName",
            "First Name",
            vec![Rule::Required, Rule::MinLength(2)],
        ),
        FieldSpec::new(
            "lastName",
            "Last Name",
            vec![Rule::Required, Rule::MinLength(2)],
        ),
        FieldSpec::new("email", "Email", vec![Rule::Required, Rule::Email]),
    ]);
    if let Some(profile) = profile {
        form.set_value("firstName", profile.first_name.clone());
        form.set_value("lastName", profile.last_name.clone());
        form.set_value("email", profile.email.clone());
    }
    form
}

/// Apply the form's values over an existing profile.
fn updated_profile(profile: &VendorProfile, form: &FormState) -> VendorProfile {
    VendorProfile {
        first_name: form.value("firstName").trim().to_string(),
        last_name: form.value("lastName").trim().to_string(),
        email: form.value("email").trim().to_string(),
        ..profile.clone()
    }
}

/// Personal account settings.
#[allow(clippy::too_many_lines)]
#[function_component(AccountSettingsPage)]
pub fn account_settings_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let profile = state.session.user.clone();
    let form = use_state(|| account_form(profile.as_ref()));
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
                    "firstName": updated.first_name,
                    "lastName": updated.last_name,
                    "email": updated.email,
                });
                let result = NoshaClient::shared()
                    .update_vendor_settings(current.id, "account", &payload)
                    .await;
                match result {
                    Ok(_) => {
                        // Keep the cached profile in step with the backend.
                        if SessionStore::set_session(&token, &updated).is_ok() {
                            dispatch.reduce_mut(|state| {
                                state.session.user = Some(updated.clone());
                            });
                        }
                        notice.set(Some(Ok("Account settings saved.".to_string())));
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

    let field = |name: &'static str, label: &str, input_type: &str| {
        let error = form.error(name);
        html! {
            <div class="form-control">
                <label class="label" for={name}>
                    <span class="label-text">{label.to_string()}</span>
                </label>
                <input
                    id={name}
                    class={classes!("input", "input-bordered", error.is_some().then_some("input-error"))}
                    type={input_type.to_string()}
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

    html! {
        <div class="p-6 max-w-xl">
            <h1 class="text-2xl font-bold mb-6">{"Account Settings"}</h1>
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
                    <div class="grid grid-cols-2 gap-4">
                        {field("firstName", "First Name", "text")}
                        {field("lastName", "Last Name", "text")}
                    </div>
                    {field("email", "Email", "email")}
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
