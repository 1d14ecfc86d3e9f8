use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session::SessionStore;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

/// One onboarding step the new vendor can jump to.
struct SetupCard {
    title: &'static str,
    blurb: &'static str,
    action: &'static str,
    route: MainRoute,
}

fn setup_cards() -> Vec<SetupCard> {
    vec![
        SetupCard {
            title: "Complete Your Profile",
            blurb: "Add your personal details so customers know who runs the store.",
            action: "Go to Account",
            route: MainRoute::Account,
        },
        SetupCard {
            title: "Set Up Your Store",
            blurb: "Name your market and tell customers where to find it.",
            action: "Go to Store",
            route: MainRoute::Store,
        },
        SetupCard {
            title: "Add Your Products",
            blurb: "Stock your catalog so orders can start coming in.",
            action: "Go to Products",
            route: MainRoute::Products,
        },
    ]
}

/// Onboarding screen shown once after registration.
#[function_component(WelcomePage)]
pub fn welcome_page() -> Html {
    let navigator = use_navigator();
    let (state, dispatch) = use_store::<AppState>();

    let vendor_name = state
        .session
        .user
        .as_ref()
        .map_or_else(|| "there".to_string(), shared::models::VendorProfile::full_name);
    let market_name = state
        .session
        .user
        .as_ref()
        .map_or("My Store", shared::models::VendorProfile::market_display_name)
        .to_string();

    // Every exit from this page finishes onboarding; the new-user guard
    // would otherwise bounce the navigation straight back here.
    let go_to = |route: MainRoute| {
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            SessionStore::complete_onboarding();
            dispatch.reduce_mut(|state| state.is_new_user = false);
            if let Some(ref navigator) = navigator {
                navigator.push(&route);
            }
        })
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-3xl shadow-lg bg-base-100">
                <div class="card-body items-center text-center">
                    <h1 class="card-title text-3xl">{format!("Welcome, {vendor_name}!")}</h1>
                    <p class="text-base-content/70 mt-2">
                        {format!("{market_name} is ready. Finish setting up to start selling:")}
                    </p>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-6 w-full">
                        {
                            for setup_cards().into_iter().map(|card| html! {
                                <div class="card bg-base-200 shadow">
                                    <div class="card-body items-center text-center p-4">
                                        <h3 class="card-title text-lg">{card.title}</h3>
                                        <p class="text-sm text-base-content/70">{card.blurb}</p>
                                        <div class="card-actions mt-2">
                                            <button
                                                class="btn btn-sm btn-outline"
                                                onclick={go_to(card.route)}
                                            >
                                                {card.action}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                    <div class="card-actions mt-6">
                        <button class="btn btn-primary btn-wide" onclick={go_to(MainRoute::Dashboard)}>
                            {"Go to Dashboard"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_cards_reach_profile_store_and_products() {
        let routes: Vec<MainRoute> = setup_cards().iter().map(|card| card.route).collect();
        assert_eq!(
            routes,
            vec![MainRoute::Account, MainRoute::Store, MainRoute::Products]
        );
    }

    #[test]
    fn setup_cards_carry_distinct_titles() {
        let cards = setup_cards();
        let mut titles: Vec<&str> = cards.iter().map(|card| card.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), cards.len());
    }
}
