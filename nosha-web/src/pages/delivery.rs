use crate::forms::{FieldSpec, FormState, Rule};
use shared::models::DeliveryAddress;
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn sample_addresses() -> Vec<DeliveryAddress> {
    vec![
        DeliveryAddress {
            id: 1,
            name: "Main Warehouse".into(),
            address: "123 Cairo St".into(),
            city: "Cairo".into(),
            country: "Egypt".into(),
            is_default: true,
        },
        DeliveryAddress {
            id: 2,
            name: "Downtown Pickup".into(),
            address: "45 Tahrir Square".into(),
            city: "Cairo".into(),
            country: "Egypt".into(),
            is_default: false,
        },
        DeliveryAddress {
            id: 3,
            name: "Alexandria Branch".into(),
            address: "8 Corniche Rd".into(),
            city: "Alexandria".into(),
            country: "Egypt".into(),
            is_default: false,
        },
    ]
}

fn address_form() -> FormState {
    FormState::new(vec![
        FieldSpec::new("name", "Name", vec![Rule::Required]),
        FieldSpec::new("address", "Address", vec![Rule::Required]),
        FieldSpec::new("city", "City", vec![Rule::Required]),
        FieldSpec::new("country", "Country", vec![Rule::Required]),
    ])
}

fn next_address_id(addresses: &[DeliveryAddress]) -> u64 {
    addresses.iter().map(|address| address.id).max().unwrap_or(0) + 1
}

/// Make exactly one address the default.
fn set_default(addresses: &mut [DeliveryAddress], id: u64) {
    for address in addresses {
        address.is_default = address.id == id;
    }
}

/// Remove an address. If it carried the default flag, the first remaining
/// address inherits it so there is never a moment without a default origin.
fn remove_address(addresses: &mut Vec<DeliveryAddress>, id: u64) {
    let was_default = addresses
        .iter()
        .any(|address| address.id == id && address.is_default);
    addresses.retain(|address| address.id != id);
    if was_default {
        if let Some(first) = addresses.first_mut() {
            first.is_default = true;
        }
    }
}

/// Pickup and delivery addresses, managed entirely client-side.
#[allow(clippy::too_many_lines)]
#[function_component(DeliveryPage)]
pub fn delivery_page() -> Html {
    let addresses = use_state(sample_addresses);
    // None: editor closed. Some(None): adding. Some(Some(id)): editing.
    let editing = use_state(|| None::<Option<u64>>);
    let form = use_state(address_form);

    let open_create = {
        let editing = editing.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(address_form());
            editing.set(Some(None));
        })
    };

    let open_edit = |target: DeliveryAddress| {
        let editing = editing.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = address_form();
            next.set_value("name", target.name.clone());
            next.set_value("address", target.address.clone());
            next.set_value("city", target.city.clone());
            next.set_value("country", target.country.clone());
            form.set(next);
            editing.set(Some(Some(target.id)));
        })
    };

    let close_editor = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let on_delete = |id: u64| {
        let addresses = addresses.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next: Vec<DeliveryAddress> = (*addresses).clone();
            remove_address(&mut next, id);
            addresses.set(next);
        })
    };

    let on_make_default = |id: u64| {
        let addresses = addresses.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next: Vec<DeliveryAddress> = (*addresses).clone();
            set_default(&mut next, id);
            addresses.set(next);
        })
    };

    let on_save = {
        let addresses = addresses.clone();
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

            let mut next: Vec<DeliveryAddress> = (*addresses).clone();
            if let Some(Some(id)) = *editing {
                if let Some(existing) = next.iter_mut().find(|address| address.id == id) {
                    existing.name = next_form.value("name").trim().to_string();
                    existing.address = next_form.value("address").trim().to_string();
                    existing.city = next_form.value("city").trim().to_string();
                    existing.country = next_form.value("country").trim().to_string();
                }
            } else {
                // The very first address becomes the default automatically.
                let is_default = next.is_empty();
                next.push(DeliveryAddress {
                    id: next_address_id(&next),
                    name: next_form.value("name").trim().to_string(),
                    address: next_form.value("address").trim().to_string(),
                    city: next_form.value("city").trim().to_string(),
                    country: next_form.value("country").trim().to_string(),
                    is_default,
                });
            }
            addresses.set(next);
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

    let field = |name: &'static str, label: &str| {
        let error = form.error(name);
        html! {
            <div class="form-control">
                <label class="label" for={name}>
                    <span class="label-text">{label.to_string()}</span>
                </label>
                <input
                    id={name}
                    class={classes!("input", "input-bordered", error.is_some().then_some("input-error"))}
                    type="text"
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
        let heading = if target.is_some() { "Edit Address" } else { "Add Address" };
        html! {
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="text-lg font-bold">{heading}</h3>
                    <form onsubmit={on_save.clone()}>
                        {field("name", "Name")}
                        {field("address", "Address")}
                        <div class="grid grid-cols-2 gap-4">
                            {field("city", "City")}
                            {field("country", "Country")}
                        </div>
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
                <h1 class="text-2xl font-bold">{"Delivery Addresses"}</h1>
                <button class="btn btn-primary" onclick={open_create}>{"Add Address"}</button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {
                    for addresses.iter().map(|address| html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <div class="flex justify-between items-start">
                                    <h3 class="card-title text-lg">{address.name.clone()}</h3>
                                    if address.is_default {
                                        <span class="badge badge-primary">{"Default"}</span>
                                    }
                                </div>
                                <p>{address.address.clone()}</p>
                                <p class="text-base-content/70">
                                    {format!("{}, {}", address.city, address.country)}
                                </p>
                                <div class="card-actions justify-end mt-2">
                                    if !address.is_default {
                                        <button
                                            class="btn btn-xs btn-ghost"
                                            onclick={on_make_default(address.id)}
                                        >
                                            {"Set as Default"}
                                        </button>
                                    }
                                    <button
                                        class="btn btn-xs btn-ghost"
                                        onclick={open_edit(address.clone())}
                                    >
                                        {"Edit"}
                                    </button>
                                    <button
                                        class="btn btn-xs btn-ghost text-error"
                                        onclick={on_delete(address.id)}
                                    >
                                        {"Delete"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    })
                }
            </div>
            if addresses.is_empty() {
                <p class="text-center text-base-content/60 mt-8">
                    {"No delivery addresses yet. Add one to get started."}
                </p>
            }

            {editor.unwrap_or_default()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flag_is_exclusive() {
        let mut addresses = sample_addresses();
        set_default(&mut addresses, 3);
        let defaults: Vec<u64> = addresses
            .iter()
            .filter(|a| a.is_default)
            .map(|a| a.id)
            .collect();
        assert_eq!(defaults, vec![3]);
    }

    #[test]
    fn deleting_the_default_promotes_the_first_remaining() {
        let mut addresses = sample_addresses();
        remove_address(&mut addresses, 1);
        assert_eq!(addresses.len(), 2);
        assert!(addresses[0].is_default);
    }

    #[test]
    fn deleting_a_non_default_keeps_the_default() {
        let mut addresses = sample_addresses();
        remove_address(&mut addresses, 3);
        assert!(addresses.iter().any(|a| a.id == 1 && a.is_default));
    }

    #[test]
    fn deleting_everything_is_safe() {
        let mut addresses = sample_addresses();
        for id in [1, 2, 3] {
            remove_address(&mut addresses, id);
        }
        assert!(addresses.is_empty());
    }

    #[test]
    fn ids_never_collide_after_deletions() {
        let mut addresses = sample_addresses();
        remove_address(&mut addresses, 2);
        assert_eq!(next_address_id(&addresses), 4);
    }
}
