use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    SignUp,
    #[at("/welcome")]
    Welcome,
    #[at("/dashboard")]
    Dashboard,
    #[at("/account")]
    Account,
    #[at("/store")]
    Store,
    #[at("/requests")]
    Requests,
    #[at("/products")]
    Products,
    #[at("/services")]
    Services,
    #[at("/delivery")]
    Delivery,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Title shown in the sidebar and page chrome.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Welcome => "Welcome",
            Self::Dashboard => "Dashboard",
            Self::Account => "Account Settings",
            Self::Store => "Store Settings",
            Self::Requests => "Requests",
            Self::Products => "Market Products",
            Self::Services => "Merchant Services",
            Self::Delivery => "Delivery Addresses",
            Self::NotFound => "Not Found",
        }
    }

    /// Sidebar icon for navigable routes.
    #[must_use]
    pub fn icon(self) -> IconId {
        match self {
            Self::Dashboard => IconId::HeroiconsOutlineChartBar,
            Self::Requests => IconId::HeroiconsOutlineInbox,
            Self::Products => IconId::HeroiconsOutlineShoppingBag,
            Self::Services => IconId::HeroiconsOutlineWrenchScrewdriver,
            Self::Delivery => IconId::HeroiconsOutlineTruck,
            Self::Account => IconId::HeroiconsOutlineUserCircle,
            Self::Store => IconId::HeroiconsOutlineBuildingStorefront,
            _ => IconId::HeroiconsOutlineHome,
        }
    }

    /// The routes listed in the sidebar, in display order.
    #[must_use]
    pub fn sidebar_entries() -> Vec<Self> {
        Self::iter()
            .filter(|route| {
                matches!(
                    route,
                    Self::Dashboard
                        | Self::Requests
                        | Self::Products
                        | Self::Services
                        | Self::Delivery
                        | Self::Account
                        | Self::Store
                )
            })
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

/// Applies the access rules before rendering a route: unauthenticated
/// visitors are sent to the login page, authenticated new users are routed
/// through onboarding before any console page.
#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let state = use_selector(|state: &AppState| (state.is_authenticated(), state.is_new_user));
    let (is_authenticated, is_new_user) = *state;
    let on_logout = props.on_logout.clone();

    let console_page = |route: MainRoute, body: Html| -> Html {
        if !is_authenticated {
            return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
        }
        if is_new_user {
            return html! { <Redirect<MainRoute> to={MainRoute::Welcome} /> };
        }
        html! {
            <Layout current_route={route} on_logout={Some(on_logout.clone())}>
                {body}
            </Layout>
        }
    };

    match props.route {
        MainRoute::Home | MainRoute::NotFound => {
            if !is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
            } else if is_new_user {
                html! { <Redirect<MainRoute> to={MainRoute::Welcome} /> }
            } else {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            }
        }
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::SignUp => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <SignUpPage /> }
            }
        }
        MainRoute::Welcome => {
            if is_authenticated {
                html! { <WelcomePage /> }
            } else {
                html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
            }
        }
        MainRoute::Dashboard => console_page(MainRoute::Dashboard, html! { <DashboardPage /> }),
        MainRoute::Account => console_page(MainRoute::Account, html! { <AccountSettingsPage /> }),
        MainRoute::Store => console_page(MainRoute::Store, html! { <StoreSettingsPage /> }),
        MainRoute::Requests => console_page(MainRoute::Requests, html! { <RequestsPage /> }),
        MainRoute::Products => console_page(MainRoute::Products, html! { <ProductsPage /> }),
        MainRoute::Services => console_page(MainRoute::Services, html! { <ServicesPage /> }),
        MainRoute::Delivery => console_page(MainRoute::Delivery, html! { <DeliveryPage /> }),
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    html! { <MainRouteView {route} {on_logout} /> }
}
