use crate::components::{Pagination, ServiceStatusBadge};
use crate::query::{ALL, ListQuery, Listed, SortValue};
use shared::models::{ServiceOffering, ServiceStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const PAGE_SIZE: usize = 5;

impl Listed for ServiceOffering {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.description.clone()]
    }

    fn dimension(&self, name: &str) -> Option<String> {
        (name == "status").then(|| self.status.label().to_string())
    }

    fn sort_value(&self, _key: &str) -> SortValue {
        SortValue::Text(self.name.clone())
    }
}

fn sample_services() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            id: 1,
            name: "Gift Wrapping".into(),
            description: "Hand-wrapped with ribbon and a gift card".into(),
            status: ServiceStatus::Active,
        },
        ServiceOffering {
            id: 2,
            name: "Express Delivery".into(),
            description: "Same-day delivery within the city".into(),
            status: ServiceStatus::Active,
        },
        ServiceOffering {
            id: 3,
            name: "Custom Embroidery".into(),
            description: "Stitch a name onto any plush toy".into(),
            status: ServiceStatus::Inactive,
        },
        ServiceOffering {
            id: 4,
            name: "Repair Service".into(),
            description: "Fix seams and replace stuffing".into(),
            status: ServiceStatus::Active,
        },
        ServiceOffering {
            id: 5,
            name: "Bulk Orders".into(),
            description: "Discounted pricing for event quantities".into(),
            status: ServiceStatus::Inactive,
        },
        ServiceOffering {
            id: 6,
            name: "Toy Cleaning".into(),
            description: "Professional cleaning for pre-loved toys".into(),
            status: ServiceStatus::Active,
        },
    ]
}

/// Merchant services with search, status filter and activate/deactivate
/// toggles.
#[allow(clippy::too_many_lines)]
#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let services = use_state(sample_services);
    let query = use_state(|| ListQuery::new(PAGE_SIZE));

    let mut working = (*query).clone();
    let page = working.apply(&services);

    let on_search = {
        let query = query.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*query).clone();
                next.set_search_term(input.value());
                query.set(next);
            }
        })
    };

    let on_status_filter = {
        let query = query.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*query).clone();
                next.set_filter("status", select.value());
                query.set(next);
            }
        })
    };

    let on_sort = {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.toggle_sort("name");
            query.set(next);
        })
    };

    let on_page = {
        let query = query.clone();
        Callback::from(move |target: usize| {
            let mut next = (*query).clone();
            next.set_page(target);
            query.set(next);
        })
    };

    let on_toggle = |id: u64| {
        let services = services.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next: Vec<ServiceOffering> = (*services).clone();
            if let Some(service) = next.iter_mut().find(|service| service.id == id) {
                service.status = service.status.toggled();
            }
            services.set(next);
        })
    };

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-bold mb-6">{"Services"}</h1>

            <div class="flex flex-wrap gap-4 mb-4">
                <input
                    class="input input-bordered flex-1"
                    type="search"
                    placeholder="Search services"
                    value={query.search_term().to_string()}
                    oninput={on_search}
                />
                <select class="select select-bordered" onchange={on_status_filter}>
                    <option selected={query.filter("status") == ALL}>{ALL}</option>
                    {
                        for [ServiceStatus::Active, ServiceStatus::Inactive].into_iter().map(|status| html! {
                            <option selected={query.filter("status") == status.label()}>
                                {status.label()}
                            </option>
                        })
                    }
                </select>
            </div>

            <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="cursor-pointer" onclick={on_sort}>{"Service"}</th>
                            <th>{"Description"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for page.rows.iter().map(|service| {
                                let action = match service.status {
                                    ServiceStatus::Active => "Deactivate",
                                    ServiceStatus::Inactive => "Activate",
                                };
                                html! {
                                    <tr>
                                        <td>{service.name.clone()}</td>
                                        <td>{service.description.clone()}</td>
                                        <td><ServiceStatusBadge status={service.status} /></td>
                                        <td>
                                            <button class="btn btn-xs btn-ghost" onclick={on_toggle(service.id)}>
                                                {action}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                        }
                        if page.rows.is_empty() {
                            <tr>
                                <td colspan="4" class="text-center text-base-content/60">
                                    {"No services match your search."}
                                </td>
                            </tr>
                        }
                    </tbody>
                </table>
            </div>

            <Pagination
                page={page.page}
                page_count={page.page_count}
                total={page.total}
                page_size={PAGE_SIZE}
                on_page={on_page}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_uses_labels() {
        let source = sample_services();
        let mut query = ListQuery::new(PAGE_SIZE);
        query.set_filter("status", "Inactive");
        let page = query.apply(&source);
        assert_eq!(page.total, 2);
        assert!(page.rows.iter().all(|s| s.status == ServiceStatus::Inactive));
    }

    #[test]
    fn search_covers_descriptions() {
        let source = sample_services();
        let mut query = ListQuery::new(PAGE_SIZE);
        query.set_search_term("ribbon");
        let page = query.apply(&source);
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].name, "Gift Wrapping");
    }

    #[test]
    fn toggling_flips_only_the_target() {
        let mut services = sample_services();
        if let Some(service) = services.iter_mut().find(|s| s.id == 3) {
            service.status = service.status.toggled();
        }
        assert_eq!(services[2].status, ServiceStatus::Active);
        assert_eq!(services[4].status, ServiceStatus::Inactive);
    }
}
