use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Top navigation bar: store name on the left, the signed-in vendor's
/// dropdown on the right.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let navigator = use_navigator();
    let session = use_selector(|state: &AppState| state.session.clone());
    let user = session.user.clone();

    let logout_button = {
        let navigator = navigator;
        let on_logout = props.on_logout.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            // Clearing the session is local; there is no logout endpoint.
            if let Some(callback) = on_logout.clone() {
                callback.emit(());
            }
            if let Some(ref navigator) = navigator {
                navigator.push(&MainRoute::Login);
            }
        });
        html! {
            <li><a {onclick}>{"Sign out"}</a></li>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    {
                        user.as_ref()
                            .map_or("Nosha", |vendor| vendor.market_display_name())
                            .to_string()
                    }
                </Link<MainRoute>>
            </a>
            {
                if let Some(vendor) = user {
                    html! {
                        <div class="dropdown dropdown-end">
                            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-6 h-6" />
                            </div>
                            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                                <li class="px-2 py-1 text-left">
                                    <div class="text-sm font-semibold text-base-content">{ vendor.full_name() }</div>
                                    <div class="text-xs text-base-content/70">{ vendor.email.clone() }</div>
                                </li>
                                <div class="divider my-0"></div>
                                <li>
                                    <Link<MainRoute> to={MainRoute::Account}>{"Account settings"}</Link<MainRoute>>
                                </li>
                                {logout_button}
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
