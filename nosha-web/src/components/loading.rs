use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <span class="mt-3">{"Loading"}</span>
            </div>
        </div>
    }
}
