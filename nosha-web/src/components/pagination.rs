use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// Current (already clamped) page, 1-based.
    pub page: usize,
    /// Total pages, at least 1.
    pub page_count: usize,
    /// Total rows after filtering.
    pub total: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Invoked with the requested page number.
    pub on_page: Callback<usize>,
}

/// "Showing X to Y of Z" plus Previous / numbered / Next controls.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let PaginationProps {
        page,
        page_count,
        total,
        page_size,
        ..
    } = *props;

    let first_row = if total == 0 { 0 } else { (page - 1) * page_size + 1 };
    let last_row = (page * page_size).min(total);

    let go = |target: usize| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(target))
    };

    html! {
        <div class="flex justify-between items-center mt-4">
            <div class="text-sm text-base-content/70">
                {format!("Showing {first_row} to {last_row} of {total} results")}
            </div>
            <div class="join">
                <button
                    class="join-item btn btn-sm"
                    disabled={page <= 1}
                    onclick={go(page.saturating_sub(1).max(1))}
                >
                    {"Previous"}
                </button>
                {
                    for (1..=page_count).map(|n| {
                        let active = if n == page { "btn-primary" } else { "" };
                        html! {
                            <button class={classes!("join-item", "btn", "btn-sm", active)} onclick={go(n)}>
                                {n}
                            </button>
                        }
                    })
                }
                <button
                    class="join-item btn btn-sm"
                    disabled={page >= page_count}
                    onclick={go((page + 1).min(page_count))}
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}
