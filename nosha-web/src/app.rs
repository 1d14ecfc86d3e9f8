use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session::SessionStore;
use yew::{Callback, Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Application shell: hydrates the store from the persisted session once on
/// mount, then hands routing to the switch. Pages never read storage
/// directly; they observe the store.
#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            let session = SessionStore::session();
            let is_new_user = session.is_authenticated && SessionStore::is_new_user();
            dispatch.set(AppState {
                session,
                is_new_user,
            });
            || ()
        });
    }

    let logout_callback = {
        let dispatch = dispatch;
        Callback::from(move |()| {
            SessionStore::clear_session();
            dispatch.set(AppState::default());
        })
    };

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())} />
        </BrowserRouter>
    }
}
