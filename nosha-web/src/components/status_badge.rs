use shared::models::{RequestStatus, ServiceStatus};
use yew::prelude::*;

/// Badge colour for an order-request status, matching the console palette.
fn request_badge_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "badge-warning",
        RequestStatus::Approved => "badge-info",
        RequestStatus::Shipped => "badge-secondary",
        RequestStatus::Delivered => "badge-success",
    }
}

#[derive(Properties, PartialEq)]
pub struct RequestStatusBadgeProps {
    pub status: RequestStatus,
}

#[function_component(RequestStatusBadge)]
pub fn request_status_badge(props: &RequestStatusBadgeProps) -> Html {
    html! {
        <span class={classes!("badge", request_badge_class(props.status))}>
            {props.status.label()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceStatusBadgeProps {
    pub status: ServiceStatus,
}

#[function_component(ServiceStatusBadge)]
pub fn service_status_badge(props: &ServiceStatusBadgeProps) -> Html {
    let class = match props.status {
        ServiceStatus::Active => "badge-success",
        ServiceStatus::Inactive => "badge-ghost",
    };
    html! {
        <span class={classes!("badge", class)}>{props.status.label()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_request_status_has_a_distinct_badge() {
        let classes: Vec<&str> = RequestStatus::all()
            .into_iter()
            .map(request_badge_class)
            .collect();
        for class in &classes {
            assert!(class.starts_with("badge-"));
        }
        let mut unique = classes.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), classes.len());
    }
}
