use crate::api::NoshaClient;
use crate::components::{Loading, RequestStatusBadge};
use crate::models::app_state::AppState;
use shared::models::DashboardData;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Landing page: headline figures, the sales chart and recent orders.
#[allow(clippy::too_many_lines)]
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (state, _dispatch) = use_store::<AppState>();
    let dashboard = use_state(|| None::<DashboardData>);
    let error = use_state(|| None::<String>);
    let reload = use_state(|| 0_u32);

    let vendor_id = state.session.user.as_ref().map(|user| user.id);

    {
        let dashboard = dashboard.clone();
        let error = error.clone();
        use_effect_with((vendor_id, *reload), move |(vendor_id, _)| {
            let alive = Rc::new(Cell::new(true));
            if let Some(vendor_id) = *vendor_id {
                let alive = alive.clone();
                spawn_local(async move {
                    let result = NoshaClient::shared().dashboard(vendor_id).await;
                    // The component may have unmounted (or refetched) while
                    // the call was in flight; a stale reply must not land.
                    if !alive.get() {
                        return;
                    }
                    match result {
                        Ok(response) => {
                            error.set(None);
                            dashboard.set(Some(response.dashboard));
                        }
                        Err(err) => error.set(Some(err.to_string())),
                    }
                });
            }
            move || alive.set(false)
        });
    }

    let on_retry = {
        let reload = reload.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            reload.set(*reload + 1);
        })
    };

    let greeting = state
        .session
        .user
        .as_ref()
        .map_or_else(String::new, |user| format!("Welcome back, {}!", user.first_name));

    let body = if let Some(message) = &*error {
        html! {
            <div class="alert alert-error">
                <span>{message.clone()}</span>
                <button class="btn btn-sm" onclick={on_retry}>{"Retry"}</button>
            </div>
        }
    } else if let Some(data) = &*dashboard {
        let max_sales = data
            .analytics
            .iter()
            .map(|point| point.sales)
            .fold(f64::EPSILON, f64::max);

        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div class="stat bg-base-100 rounded-lg shadow">
                        <div class="stat-title">{"Total Sales"}</div>
                        <div class="stat-value text-primary">
                            {format_currency(data.overview.total_sales)}
                        </div>
                    </div>
                    <div class="stat bg-base-100 rounded-lg shadow">
                        <div class="stat-title">{"Active Sales"}</div>
                        <div class="stat-value text-secondary">
                            {format_currency(data.overview.active_sales)}
                        </div>
                    </div>
                    <div class="stat bg-base-100 rounded-lg shadow">
                        <div class="stat-title">{"Product Revenue"}</div>
                        <div class="stat-value">
                            {format_currency(data.overview.product_revenue)}
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow mt-6">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"Sales Analytics"}</h3>
                        <div class="flex items-end gap-2 h-48">
                            {
                                for data.analytics.iter().map(|point| {
                                    let height = (point.sales / max_sales * 100.0).round();
                                    html! {
                                        <div class="flex flex-col items-center flex-1">
                                            <div
                                                class="w-full bg-primary rounded-t"
                                                style={format!("height: {height}%")}
                                                title={format!("{}: {}", point.name, point.sales)}
                                            />
                                            <span class="text-xs mt-1">{point.name.clone()}</span>
                                        </div>
                                    }
                                })
                            }
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow mt-6">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"Recent Orders"}</h3>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Order"}</th>
                                    <th>{"Product"}</th>
                                    <th>{"Customer"}</th>
                                    <th>{"Date"}</th>
                                    <th>{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    for data.last_orders.iter().map(|order| html! {
                                        <tr>
                                            <td>{format!("#{}", order.id)}</td>
                                            <td>{order.product.clone()}</td>
                                            <td>{order.customer.clone()}</td>
                                            <td>{order.date.format("%Y-%m-%d").to_string()}</td>
                                            <td><RequestStatusBadge status={order.status} /></td>
                                        </tr>
                                    })
                                }
                            </tbody>
                        </table>
                    </div>
                </div>
            </>
        }
    } else {
        html! { <Loading /> }
    };

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-bold mb-6">{greeting}</h1>
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_is_two_decimal_dollars() {
        assert_eq!(format_currency(50_000.0), "$50000.00");
        assert_eq!(format_currency(19.5), "$19.50");
    }
}
