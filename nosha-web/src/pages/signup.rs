use crate::api::{ClientError, InFlight, NoshaClient};
use crate::forms::{FieldSpec, FormState, Rule};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session::{Session, SessionStore};
use crate::wizard::{StepSpec, Wizard};
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

fn signup_form() -> FormState {
    FormState::new(vec![
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
        FieldSpec::new("marketName", "Market Name", vec![Rule::Required]),
        FieldSpec::new("marketLocation", "Market Location", vec![Rule::Required]),
        FieldSpec::new(
            "password",
            "Password",
            vec![Rule::Required, Rule::MinLength(8), Rule::PasswordStrength],
        ),
        FieldSpec::new(
            "confirmPassword",
            "Confirm Password",
            vec![Rule::Required, Rule::Matches("password")],
        ),
    ])
}

fn signup_wizard() -> Wizard {
    Wizard::new(vec![
        StepSpec::new("Personal Info", vec!["firstName", "lastName", "email"]),
        StepSpec::new("Your Market", vec!["marketName", "marketLocation"]),
        StepSpec::new("Security", vec!["password", "confirmPassword"]),
    ])
}

fn register_payload(form: &FormState) -> RegisterRequest {
    RegisterRequest {
        first_name: form.value("firstName").to_string(),
        last_name: form.value("lastName").to_string(),
        email: form.value("email").to_string(),
        password: form.value("password").to_string(),
        market_name: form.value("marketName").to_string(),
        market_location: form.value("marketLocation").to_string(),
    }
}

fn signup_error_message(error: &ClientError) -> String {
    match error {
        ClientError::Network { .. } => error.to_string(),
        ClientError::Api { message, .. } => message.clone(),
    }
}

/// Three-step registration wizard.
#[allow(clippy::too_many_lines)]
#[function_component(SignUpPage)]
pub fn sign_up_page() -> Html {
    let form = use_state(signup_form);
    let wizard = use_state(signup_wizard);
    let in_flight = use_memo((), |_| InFlight::default());
    let submitting = use_state(|| false);
    let banner = use_state(|| None::<String>);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let on_next = {
        let form = form.clone();
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next_form = (*form).clone();
            let mut next_wizard = (*wizard).clone();
            let _ = next_wizard.next(&mut next_form);
            form.set(next_form);
            wizard.set(next_wizard);
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next_wizard = (*wizard).clone();
            next_wizard.back();
            wizard.set(next_wizard);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let wizard = wizard.clone();
        let in_flight = in_flight.clone();
        let submitting = submitting.clone();
        let banner = banner.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next_form = (*form).clone();
            let next_wizard = (*wizard).clone();
            if !next_wizard.on_last_step() {
                return;
            }
            if !next_wizard.current_step_valid(&next_form) {
                next_form.touch_fields(&next_wizard.current_step().fields);
                form.set(next_form);
                return;
            }

            // Claimed synchronously, before the async call is spawned;
            // the disabled button cannot stop a re-trigger this early.
            if !in_flight.begin() {
                return;
            }
            let payload = register_payload(&next_form);
            form.set(next_form);
            submitting.set(true);
            banner.set(None);

            let in_flight = in_flight.clone();
            let submitting = submitting.clone();
            let banner = banner.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = NoshaClient::shared();
                match client.register(&payload).await {
                    Ok(response) => {
                        match SessionStore::set_session(&response.token, &response.user) {
                            Ok(()) => {
                                SessionStore::mark_new_user();
                                dispatch.set(AppState {
                                    session: Session::authenticated(
                                        response.token,
                                        response.user,
                                    ),
                                    is_new_user: true,
                                });
                                if let Some(ref navigator) = navigator {
                                    navigator.push(&MainRoute::Welcome);
                                }
                            }
                            Err(_) => {
                                banner.set(Some(
                                    "Could not save your session. Please try again.".to_string(),
                                ));
                            }
                        }
                    }
                    Err(error) => {
                        banner.set(Some(signup_error_message(&error)));
                    }
                }
                in_flight.finish();
                submitting.set(false);
            });
        })
    };

    let on_input = |name: &'static str| {
        let form = form.clone();
        let banner = banner.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_value(name, input.value());
                form.set(next);
                if banner.is_some() {
                    banner.set(None);
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

    let step_body = match wizard.current_index() {
        0 => html! {
            <>
                <div class="grid grid-cols-2 gap-4">
                    {field("firstName", "First Name", "text")}
                    {field("lastName", "Last Name", "text")}
                </div>
                {field("email", "Email", "email")}
            </>
        },
        1 => html! {
            <>
                {field("marketName", "Market Name", "text")}
                {field("marketLocation", "Market Location", "text")}
            </>
        },
        _ => html! {
            <>
                {field("password", "Password", "password")}
                {field("confirmPassword", "Confirm Password", "password")}
            </>
        },
    };

    let is_busy = *submitting;
    let step_number = wizard.current_index() + 1;
    let step_count = wizard.step_count();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-lg shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Create Your Account"}</h2>
                    <div class="flex items-center justify-between mb-2">
                        <span class="text-sm text-base-content/70">
                            {format!("Step {step_number} of {step_count}: {}", wizard.current_step().title)}
                        </span>
                        <progress
                            class="progress progress-primary w-32"
                            value={step_number.to_string()}
                            max={step_count.to_string()}
                        />
                    </div>
                    if let Some(message) = &*banner {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    {step_body}
                    <div class="flex justify-between mt-6">
                        if wizard.current_index() > 0 {
                            <button type="button" class="btn btn-ghost" onclick={on_back} disabled={is_busy}>
                                {"Back"}
                            </button>
                        } else {
                            <span />
                        }
                        if wizard.on_last_step() {
                            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                                {if is_busy { "Creating Account..." } else { "Create Account" }}
                            </button>
                        } else {
                            <button type="button" class="btn btn-primary" onclick={on_next}>
                                {"Next"}
                            </button>
                        }
                    </div>
                    <p class="text-center text-sm mt-4">
                        {"Already have an account? "}
                        <yew_router::prelude::Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </yew_router::prelude::Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        let mut form = signup_form();
        form.set_value("firstName", "Ahmed");
        form.set_value("lastName", "Amer");
        form.set_value("email", "ahmed.amer@gmail.com");
        form.set_value("marketName", "Teddy store");
        form.set_value("marketLocation", "Cairo, Egypt");
        form.set_value("password", "Password123");
        form.set_value("confirmPassword", "Password123");
        form
    }

    #[test]
    fn wizard_walks_all_three_steps_when_valid() {
        let mut form = filled_form();
        let mut wizard = signup_wizard();
        assert!(wizard.next(&mut form));
        assert!(wizard.next(&mut form));
        assert!(wizard.on_last_step());
        assert!(wizard.current_step_valid(&form));
    }

    #[test]
    fn short_first_name_blocks_step_one() {
        let mut form = filled_form();
        form.set_value("firstName", "A");
        let mut wizard = signup_wizard();
        assert!(!wizard.next(&mut form));
        assert_eq!(wizard.current_index(), 0);
        assert_eq!(
            form.error("firstName").as_deref(),
            Some("First Name must be at least 2 characters")
        );
    }

    #[test]
    fn mismatched_confirmation_blocks_final_step() {
        let mut form = filled_form();
        form.set_value("confirmPassword", "Password124");
        let mut wizard = signup_wizard();
        wizard.next(&mut form);
        wizard.next(&mut form);
        assert!(wizard.on_last_step());
        assert!(!wizard.current_step_valid(&form));
    }

    #[test]
    fn payload_carries_every_field() {
        let form = filled_form();
        let payload = register_payload(&form);
        assert_eq!(payload.first_name, "Ahmed");
        assert_eq!(payload.market_location, "Cairo, Egypt");
        assert_eq!(payload.password, "Password123");
    }
}
