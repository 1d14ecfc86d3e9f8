use crate::api::{ClientError, InFlight, NoshaClient};
use crate::forms::{FieldSpec, FormState, Rule};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session::SessionStore;
use shared::models::LoginRequest;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::navigator::Navigator;
use yewdux::Dispatch;
use yewdux::prelude::use_store;

const DEMO_EMAIL: &str = "ahmed.amer@gmail.com";
const DEMO_PASSWORD: &str = "Password123";

fn login_form() -> FormState {
    FormState::new(vec![
        FieldSpec::new("email", "Email", vec![Rule::Required, Rule::Email]),
        FieldSpec::new("password", "Password", vec![Rule::Required]),
    ])
}

/// Map an API failure to the banner text the form shows.
fn login_error_message(error: &ClientError) -> String {
    match error {
        ClientError::Network { .. } => error.to_string(),
        ClientError::Api { message, .. } if message.contains("Invalid email or password") => {
            "Invalid email or password. Please try again.".to_string()
        }
        ClientError::Api { message, .. } => message.clone(),
    }
}

/// The shared login routine. Both the submit button and the demo sign-in
/// call this directly; nothing dispatches synthetic form events.
fn attempt_login(
    email: String,
    password: String,
    in_flight: Rc<InFlight>,
    submitting: UseStateHandle<bool>,
    banner: UseStateHandle<Option<String>>,
    dispatch: Dispatch<AppState>,
    navigator: Option<Navigator>,
) {
    // The latch flips synchronously; the submitting handle only updates on
    // the next render and cannot stop a second trigger in the same task.
    if !in_flight.begin() {
        return;
    }
    submitting.set(true);
    banner.set(None);

    spawn_local(async move {
        let client = NoshaClient::shared();
        let request = LoginRequest { email, password };
        match client.login(&request).await {
            Ok(response) => match SessionStore::set_session(&response.token, &response.user) {
                Ok(()) => {
                    dispatch.set(AppState {
                        session: crate::session::Session::authenticated(
                            response.token,
                            response.user,
                        ),
                        is_new_user: false,
                    });
                    if let Some(ref navigator) = navigator {
                        navigator.push(&MainRoute::Dashboard);
                    }
                }
                Err(_) => {
                    banner.set(Some(
                        "Could not save your session. Please try again.".to_string(),
                    ));
                }
            },
            Err(error) => {
                banner.set(Some(login_error_message(&error)));
            }
        }
        in_flight.finish();
        submitting.set(false);
    });
}

/// Sign-in page.
#[allow(clippy::too_many_lines)]
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let form = use_state(login_form);
    let in_flight = use_memo((), |_| InFlight::default());
    let submitting = use_state(|| false);
    let banner = use_state(|| None::<String>);
    let navigator = use_navigator();
    let (_state, dispatch) = use_store::<AppState>();

    let onsubmit = {
        let form = form.clone();
        let in_flight = in_flight.clone();
        let submitting = submitting.clone();
        let banner = banner.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next = (*form).clone();
            next.touch_all();
            let valid = next.is_valid();
            let email = next.value("email").to_string();
            let password = next.value("password").to_string();
            form.set(next);
            if !valid {
                return;
            }
            attempt_login(
                email,
                password,
                in_flight.clone(),
                submitting.clone(),
                banner.clone(),
                dispatch.clone(),
                navigator.clone(),
            );
        })
    };

    let on_demo_login = {
        let form = form.clone();
        let in_flight = in_flight.clone();
        let submitting = submitting.clone();
        let banner = banner.clone();
        let dispatch = dispatch;
        let navigator = navigator;
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.set_value("email", DEMO_EMAIL);
            next.set_value("password", DEMO_PASSWORD);
            form.set(next);
            attempt_login(
                DEMO_EMAIL.to_string(),
                DEMO_PASSWORD.to_string(),
                in_flight.clone(),
                submitting.clone(),
                banner.clone(),
                dispatch.clone(),
                navigator.clone(),
            );
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
                // Typing clears the submission banner so stale failures
                // don't linger over corrected input.
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

    let is_busy = *submitting;

    let field = |name: &'static str, label: &str, input_type: &str, placeholder: &str| {
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
                    placeholder={placeholder.to_string()}
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
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign In"}</h2>
                    if let Some(message) = &*banner {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    {field("email", "Email", "email", "ahmed.amer@gmail.com")}
                    {field("password", "Password", "password", "••••••••••••")}
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={is_busy}>
                            {if is_busy { "Signing In..." } else { "Sign In" }}
                        </button>
                    </div>
                    <div class="text-center mt-2">
                        <button type="button" class="link link-primary text-sm" onclick={on_demo_login}>
                            {"Use demo account for testing"}
                        </button>
                    </div>
                    <p class="text-center text-sm mt-4">
                        {"New to Nosha? "}
                        <yew_router::prelude::Link<MainRoute> to={MainRoute::SignUp} classes="link link-primary">
                            {"Create an account"}
                        </yew_router::prelude::Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
