use crate::components::Pagination;
use crate::forms::{FieldSpec, FormState, Rule};
use crate::query::{ALL, ListQuery, Listed, SortValue};
use shared::models::Product;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const PAGE_SIZE: usize = 5;

impl Listed for Product {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.category.clone()]
    }

    fn dimension(&self, name: &str) -> Option<String> {
        (name == "category").then(|| self.category.clone())
    }

    fn sort_value(&self, key: &str) -> SortValue {
        match key {
            "price" => SortValue::Number(self.price),
            "stock" => SortValue::Number(f64::from(self.stock)),
            _ => SortValue::Text(self.name.clone()),
        }
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product { id: 1, name: "Teddy Bear XL".into(), price: 29.99, stock: 15, category: "Bears".into() },
        Product { id: 2, name: "Teddy Bear Small".into(), price: 14.99, stock: 32, category: "Bears".into() },
        Product { id: 3, name: "Plush Bunny".into(), price: 19.99, stock: 8, category: "Woodland".into() },
        Product { id: 4, name: "Soft Elephant".into(), price: 24.99, stock: 12, category: "Safari".into() },
        Product { id: 5, name: "Plush Lion".into(), price: 22.99, stock: 0, category: "Safari".into() },
        Product { id: 6, name: "Cuddly Giraffe".into(), price: 27.99, stock: 5, category: "Safari".into() },
        Product { id: 7, name: "Soft Penguin".into(), price: 17.99, stock: 20, category: "Arctic".into() },
        Product { id: 8, name: "Polar Bear Cub".into(), price: 21.99, stock: 9, category: "Arctic".into() },
    ]
}

fn product_form() -> FormState {
    FormState::new(vec![
        FieldSpec::new("name", "Name", vec![Rule::Required]),
        FieldSpec::new("price", "Price", vec![Rule::Required]),
        FieldSpec::new("stock", "Stock", vec![Rule::Required]),
        FieldSpec::new("category", "Category", vec![Rule::Required]),
    ])
}

/// Build a product from the editor form, if the numeric fields parse.
fn product_from_form(id: u64, form: &FormState) -> Option<Product> {
    let price = form.value("price").trim().parse::<f64>().ok()?;
    let stock = form.value("stock").trim().parse::<u32>().ok()?;
    Some(Product {
        id,
        name: form.value("name").trim().to_string(),
        price,
        stock,
        category: form.value("category").trim().to_string(),
    })
}

fn next_product_id(products: &[Product]) -> u64 {
    products.iter().map(|product| product.id).max().unwrap_or(0) + 1
}

fn categories(products: &[Product]) -> Vec<String> {
    let mut names: Vec<String> = products
        .iter()
        .map(|product| product.category.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Category names with how many products each holds, from the untouched
/// source so counts do not shrink while a filter is active.
fn category_counts(products: &[Product]) -> Vec<(String, usize)> {
    categories(products)
        .into_iter()
        .map(|category| {
            let count = products
                .iter()
                .filter(|product| product.category == category)
                .count();
            (category, count)
        })
        .collect()
}

/// Product catalog with search, category filter, sorting and a modal editor.
#[allow(clippy::too_many_lines)]
#[function_component(ProductsPage)]
pub fn products_page() -> Html {
    let products = use_state(sample_products);
    let query = use_state(|| ListQuery::new(PAGE_SIZE));
    // None: editor closed. Some(None): creating. Some(Some(id)): editing.
    let editing = use_state(|| None::<Option<u64>>);
    let form = use_state(product_form);

    let mut working = (*query).clone();
    let page = working.apply(&products);

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

    let pick_category = |value: String| {
        let query = query.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*query).clone();
            next.set_filter("category", value.clone());
            query.set(next);
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

    let open_create = {
        let editing = editing.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(product_form());
            editing.set(Some(None));
        })
    };

    let open_edit = |product: Product| {
        let editing = editing.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = product_form();
            next.set_value("name", product.name.clone());
            next.set_value("price", product.price.to_string());
            next.set_value("stock", product.stock.to_string());
            next.set_value("category", product.category.clone());
            form.set(next);
            editing.set(Some(Some(product.id)));
        })
    };

    let on_delete = |id: u64| {
        let products = products.clone();
        Callback::from(move |_: MouseEvent| {
            let next: Vec<Product> = products
                .iter()
                .filter(|product| product.id != id)
                .cloned()
                .collect();
            products.set(next);
        })
    };

    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let on_save = {
        let products = products.clone();
        let editing = editing.clone();
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let mut next_form = (*form).clone();
            next_form.touch_all();
            if !next_form.is_valid() {
                form.set(next_form);
                return;
            }

            let target = if let Some(Some(id)) = *editing {
                id
            } else {
                next_product_id(&products)
            };
            let Some(saved) = product_from_form(target, &next_form) else {
                form.set(next_form);
                return;
            };

            let mut next: Vec<Product> = (*products).clone();
            if let Some(existing) = next.iter_mut().find(|product| product.id == target) {
                *existing = saved;
            } else {
                next.push(saved);
            }
            products.set(next);
            editing.set(None);
        })
    };

    let on_input = |name: &'static str| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_value(name, input.value());
                form.set(next);
            }
        })
    };

    let on_blur = |name: &'static str| {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.touch(name);
            form.set(next);
        })
    };

    let field = |name: &'static str, label: &str, input_type: &str| {
        let error = form.error(name);
        html! {
            <div class="form-control">
                <label class="label" for={name}>
                    <span class="label-text">{label.to_string()}</span>
                </label>
                <input
                    id={name}
                    class={classes!("input", "input-bordered", error.is_some().then_some("input-error"))}
                    type={input_type.to_string()}
                    value={form.value(name).to_string()}
                    oninput={on_input(name)}
                    onblur={on_blur(name)}
                />
                if let Some(message) = error {
                    <p class="mt-1 text-xs text-error">{message}</p>
                }
            </div>
        }
    };

    let editor = editing.map(|target| {
        let heading = if target.is_some() { "Edit Product" } else { "Add Product" };
        html! {
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="text-lg font-bold">{heading}</h3>
                    <form onsubmit={on_save.clone()}>
                        {field("name", "Name", "text")}
                        <div class="grid grid-cols-2 gap-4">
                            {field("price", "Price", "number")}
                            {field("stock", "Stock", "number")}
                        </div>
                        {field("category", "Category", "text")}
                        <div class="modal-action">
                            <button type="button" class="btn btn-ghost" onclick={close_editor.clone()}>
                                {"Cancel"}
                            </button>
                            <button type="submit" class="btn btn-primary">{"Save"}</button>
                        </div>
                    </form>
                </div>
            </div>
        }
    });

    html! {
        <div class="p-6">
            <div class="flex justify-between items-center mb-6">
                <h1 class="text-2xl font-bold">{"Products"}</h1>
                <button class="btn btn-primary" onclick={open_create}>{"Add Product"}</button>
            </div>

            <div class="flex flex-wrap gap-4 mb-4">
                <input
                    class="input input-bordered flex-1"
                    type="search"
                    placeholder="Search products"
                    value={query.search_term().to_string()}
                    oninput={on_search}
                />
            </div>

            <div class="flex gap-4 items-start">
            <aside class="w-48 bg-base-100 rounded-lg shadow p-4">
                <h3 class="font-semibold mb-2">{"Categories"}</h3>
                <ul class="menu menu-sm p-0">
                    <li>
                        <a
                            class={if query.filter("category") == ALL { "active" } else { "" }}
                            onclick={pick_category(ALL.to_string())}
                        >
                            {format!("All ({})", products.len())}
                        </a>
                    </li>
                    {
                        for category_counts(&products).into_iter().map(|(category, count)| {
                            let active = query.filter("category") == category;
                            html! {
                                <li>
                                    <a
                                        class={if active { "active" } else { "" }}
                                        onclick={pick_category(category.clone())}
                                    >
                                        {format!("{category} ({count})")}
                                    </a>
                                </li>
                            }
                        })
                    }
                </ul>
            </aside>

            <div class="flex-1">
            <div class="overflow-x-auto bg-base-100 rounded-lg shadow">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="cursor-pointer" onclick={on_sort("name")}>{"Name"}</th>
                            <th class="cursor-pointer" onclick={on_sort("price")}>{"Price"}</th>
                            <th class="cursor-pointer" onclick={on_sort("stock")}>{"Stock"}</th>
                            <th>{"Category"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            for page.rows.iter().map(|product| {
                                let stock_class = if product.stock == 0 { "text-error" } else { "" };
                                html! {
                                    <tr>
                                        <td>{product.name.clone()}</td>
                                        <td>{format!("${:.2}", product.price)}</td>
                                        <td class={stock_class}>
                                            {if product.stock == 0 {
                                                "Out of stock".to_string()
                                            } else {
                                                product.stock.to_string()
                                            }}
                                        </td>
                                        <td>{product.category.clone()}</td>
                                        <td class="flex gap-2">
                                            <button
                                                class="btn btn-xs btn-ghost"
                                                onclick={open_edit((*product).clone())}
                                            >
                                                {"Edit"}
                                            </button>
                                            <button
                                                class="btn btn-xs btn-ghost text-error"
                                                onclick={on_delete(product.id)}
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                        }
                        if page.rows.is_empty() {
                            <tr>
                                <td colspan="5" class="text-center text-base-content/60">
                                    {"No products match your search."}
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
            </div>

            {editor.unwrap_or_default()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;

    #[test]
    fn form_parses_into_product() {
        let mut form = product_form();
        form.set_value("name", "Plush Owl");
        form.set_value("price", "18.50");
        form.set_value("stock", "7");
        form.set_value("category", "Woodland");
        let product = product_from_form(9, &form).unwrap();
        assert_eq!(product.id, 9);
        assert!((product.price - 18.5).abs() < f64::EPSILON);
        assert_eq!(product.stock, 7);
    }

    #[test]
    fn unparsable_numbers_are_rejected() {
        let mut form = product_form();
        form.set_value("name", "Plush Owl");
        form.set_value("price", "free");
        form.set_value("stock", "7");
        form.set_value("category", "Woodland");
        assert!(product_from_form(9, &form).is_none());
    }

    #[test]
    fn next_id_is_one_past_the_max() {
        assert_eq!(next_product_id(&sample_products()), 9);
        assert_eq!(next_product_id(&[]), 1);
    }

    #[test]
    fn category_filter_narrows_results() {
        let source = sample_products();
        let mut query = ListQuery::new(PAGE_SIZE);
        query.set_filter("category", "Safari");
        let page = query.apply(&source);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn stock_sort_is_numeric() {
        let source = sample_products();
        let mut query = ListQuery::new(100);
        query.set_sort("stock", SortDirection::Ascending);
        let stocks: Vec<u32> = query.apply(&source).rows.iter().map(|p| p.stock).collect();
        let mut sorted = stocks.clone();
        sorted.sort_unstable();
        assert_eq!(stocks, sorted);
    }

    #[test]
    fn categories_are_sorted_and_unique() {
        assert_eq!(
            categories(&sample_products()),
            vec!["Arctic", "Bears", "Safari", "Woodland"]
        );
    }

    #[test]
    fn category_counts_cover_the_whole_source() {
        let counts = category_counts(&sample_products());
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        assert_eq!(total, sample_products().len());
        assert!(counts.contains(&("Safari".to_string(), 3)));
    }
}
