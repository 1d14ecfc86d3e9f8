use crate::components::{Pagination, RequestStatusBadge};
use crate::query::{ALL, ListQuery, Listed, Selection, SortValue};
use shared::models::{OrderRequest, RequestStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const PAGE_SIZE: usize = 5;

impl Listed for OrderRequest {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.product.clone(), self.customer.clone()]
    }

    fn dimension(&self, name: &str) -> Option<String> {
        (name == "status").then(|| self.status.label().to_string())
    }

    #[allow(clippy::cast_precision_loss)]
    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "id" => SortValue::Number(self.id as f64),
            "date" => SortValue::Date(self.date),
            "customer" => SortValue::Text(self.customer.clone()),
            _ => SortValue::Text(self.product.clone()),
        }
    }
}

fn sample_requests() -> Vec<OrderRequest> {
    let date = |y, m, d| chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        OrderRequest { id: 1, product: "Teddy Bear XL".into(), customer: "Ahmed Mohamed".into(), date: date(2024, 5, 10), status: RequestStatus::Pending },
        OrderRequest { id: 2, product: "Plush Bunny".into(), customer: "Sara Hassan".into(), date: date(2024, 5, 9), status: RequestStatus::Approved },
        OrderRequest { id: 3, product: "Soft Elephant".into(), customer: "Omar Khaled".into(), date: date(2024, 5, 8), status: RequestStatus::Shipped },
        OrderRequest { id: 4, product: "Teddy Bear Small".into(), customer: "Nour Adel".into(), date: date(2024, 5, 7), status: RequestStatus::Delivered },
        OrderRequest { id: 5, product: "Plush Lion".into(), customer: "Youssef Ali".into(), date: date(2024, 5, 6), status: RequestStatus::Pending },
        OrderRequest { id: 6, product: "Cuddly Giraffe".into(), customer: "Laila Samir".into(), date: date(2024, 5, 5), status: RequestStatus::Approved },
        OrderRequest { id: 7, product: "Teddy Bear XL".into(), customer: "Karim Fawzy".into(), date: date(2024, 5, 4), status: RequestStatus::Shipped },
        OrderRequest { id: 8, product: "Soft Penguin".into(), customer: "Dina Magdy".into(), date: date(2024, 5, 3), status: RequestStatus::Delivered },
        OrderRequest { id: 9, product: "Plush Bunny".into(), customer: "Hana Tarek".into(), date: date(2024, 5, 2), status: RequestStatus::Pending },
        OrderRequest { id: 10, product: "Soft Elephant".into(), customer: "Mostafa Gamal".into(), date: date(2024, 5, 1), status: RequestStatus::Approved },
    ]
}

/// Incoming order requests with search, status filter, sorting, pagination
/// and bulk selection.
#[allow(clippy::too_many_lines)]
#[function_component(RequestsPage)]
pub fn requests_page() -> Html {
    let requests = use_state(sample_requests);
    let query = use_state(|| ListQuery::new(PAGE_SIZE));
    let selection = use_state(Selection::default);

    let mut working = (*query).clone();
    let page = working.apply(&requests);
    let visible_ids: Vec<u64> = page.rows.iter().map(|request| request.id).collect();
    let all_visible_selected =
        !visible_ids.is_empty() && visible_ids.iter().all(|id| selection.contains(*id));

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

    let on_sort = |key: &'static str| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.toggle_sort(key);
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

    let on_toggle_row = |id: u64| {
        let selection = selection.clone();
        Callback::from(move |_: Event| {
            let mut next = (*selection).clone();
            next.toggle(id);
            selection.set(next);
        })
    };

    let on_toggle_page = {
        let selection = selection.clone();
        let visible_ids = visible_ids.clone();
        Callback::from(move |_: Event| {
            let mut next = (*selection).clone();
            if visible_ids.iter().all(|id| next.contains(*id)) {
                // Unchecking releases this page only; selections made on
                // other pages survive.
                next.deselect_page(visible_ids.iter().copied());
            } else {
                next.select_page(visible_ids.iter().copied());
            }
            selection.set(next);
        })
    };

    let on_approve_selected = {
        let requests = requests.clone();
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next: Vec<OrderRequest> = (*requests).clone();
            for request in &mut next {
                if selection.contains(request.id) && request.status == RequestStatus::Pending {
                    request.status = RequestStatus::Approved;
                }
            }
            requests.set(next);
            let mut cleared = (*selection).clone();
            cleared.clear();
            selection.set(cleared);
        })
    };

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-bold mb-6">{"Order Requests"}</h1>

            <div class="flex flex-wrap gap-4 mb-4">
                <input
                    class="input input-bordered flex-1"
                    type="search"
                    placeholder="Search by order, product or customer"
                    value={query.search_term().to_string()}
                    oninput={on_search}
                />
                <select class="select select-bordered" onchange={on_status_filter}>
                    <option selected={query.filter("status") == ALL}>{ALL}</option>
                    {
                        for RequestStatus::all().into_iter().map(|status| html! {
                            <option selected={query.filter("status") == status.label()}>
                                {status.label()}
                            </option>
                        })
                    }
                </select>
                if !selection.is_empty() {
                    <button class="btn btn-primary" onclick={on_approve_selected}>
                        {format!("Approve Selected ({})", selection.len())}
                    </button>
                }
            </div>

            <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                <table class="table">
                    <thead>
                        <tr>
                            <th>
                                <input
                                    type="checkbox"
                                    class="checkbox"
                                    checked={all_visible_selected}
                                    onchange={on_toggle_page}
                                />
                            </th>
                            <th class="cursor-pointer" onclick={on_sort("id")}>{"Order"}</th>
                            <th class="cursor-pointer" onclick={on_sort("product")}>{"Product"}</th>
                            <th class="cursor-pointer" onclick={on_sort("customer")}>{"Customer"}</th>
                            <th class="cursor-pointer" onclick={on_sort("date")}>{"Date"}</th>
                            <th>{"Status"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for page.rows.iter().map(|request| html! {
                                <tr>
                                    <td>
                                        <input
                                            type="checkbox"
                                            class="checkbox"
                                            checked={selection.contains(request.id)}
                                            onchange={on_toggle_row(request.id)}
                                        />
                                    </td>
                                    <td>{format!("#{}", request.id)}</td>
                                    <td>{request.product.clone()}</td>
                                    <td>{request.customer.clone()}</td>
                                    <td>{request.date.format("%Y-%m-%d").to_string()}</td>
                                    <td><RequestStatusBadge status={request.status} /></td>
                                </tr>
                            })
                        }
                        if page.rows.is_empty() {
                            <tr>
                                <td colspan="6" class="text-center text-base-content/60">
                                    {"No requests match your search."}
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
    use crate::query::SortDirection;

    #[test]
    fn status_filter_matches_labels() {
        let source = sample_requests();
        let mut query = ListQuery::new(PAGE_SIZE);
        query.set_filter("status", "Pending");
        let page = query.apply(&source);
        assert_eq!(page.total, 3);
        assert!(page.rows.iter().all(|r| r.status == RequestStatus::Pending));
    }

    #[test]
    fn date_sort_orders_requests_chronologically() {
        let source = sample_requests();
        let mut query = ListQuery::new(100);
        query.set_sort("date", SortDirection::Ascending);
        let page = query.apply(&source);
        assert_eq!(page.rows.first().map(|r| r.id), Some(10));
        assert_eq!(page.rows.last().map(|r| r.id), Some(1));
    }

    #[test]
    fn search_finds_customers() {
        let source = sample_requests();
        let mut query = ListQuery::new(PAGE_SIZE);
        query.set_search_term("sara");
        let page = query.apply(&source);
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].customer, "Sara Hassan");
    }

    #[test]
    fn select_page_covers_only_visible_rows() {
        let source = sample_requests();
        let mut query = ListQuery::new(PAGE_SIZE);
        let page = query.apply(&source);
        let mut selection = Selection::default();
        selection.select_page(page.rows.iter().map(|r| r.id));
        assert_eq!(selection.len(), PAGE_SIZE);
        assert!(!selection.contains(10));
    }

    #[test]
    fn unchecking_the_header_releases_only_the_visible_page() {
        let source = sample_requests();
        let mut query = ListQuery::new(PAGE_SIZE);
        let mut selection = Selection::default();

        let first: Vec<u64> = query.apply(&source).rows.iter().map(|r| r.id).collect();
        selection.select_page(first.iter().copied());
        query.set_page(2);
        let second: Vec<u64> = query.apply(&source).rows.iter().map(|r| r.id).collect();
        selection.select_page(second.iter().copied());
        assert_eq!(selection.len(), 2 * PAGE_SIZE);

        selection.deselect_page(second);
        assert_eq!(selection.len(), PAGE_SIZE);
        assert!(first.iter().all(|id| selection.contains(*id)));
    }
}
