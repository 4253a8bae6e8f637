use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist or has been moved."</p>
            <button
                class="btn-primary"
                on:click=move |_| navigate("/", Default::default())
            >
                "Back to dashboard"
            </button>
        </div>
    }
}
