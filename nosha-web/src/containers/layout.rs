use crate::containers::header::Header;
use crate::containers::sidebar::Sidebar;
use crate::routes::MainRoute;
use yew::{Callback, Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: MainRoute,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Frame around every console page: header on top, sidebar on the left,
/// page content and footer filling the rest.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-100">
            <Header on_logout={props.on_logout.clone()} />
            <div class="flex flex-grow">
                <Sidebar current_route={props.current_route} />
                <div class="flex-grow flex flex-col">
                    <main class="flex-grow p-6">
                        {props.children.clone()}
                    </main>
                    <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                        <div>
                            <p>{"© 2025 Nosha · Merchant Console"}</p>
                        </div>
                    </footer>
                </div>
            </div>
        </div>
    }
}
