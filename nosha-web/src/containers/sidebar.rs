use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::Icon;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_route: MainRoute,
}

/// Left-hand navigation for the console pages.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="w-56 bg-base-200 border-r border-base-300">
            <ul class="menu p-4 gap-1">
                {
                    for MainRoute::sidebar_entries().into_iter().map(|route| {
                        let active_class = if route == props.current_route { "active" } else { "" };
                        html! {
                            <li>
                                <Link<MainRoute> to={route} classes={classes!("gap-2", active_class)}>
                                    <Icon icon_id={route.icon()} class="w-5 h-5" />
                                    {route.title()}
                                </Link<MainRoute>>
                            </li>
                        }
                    })
                }
            </ul>
        </aside>
    }
}
