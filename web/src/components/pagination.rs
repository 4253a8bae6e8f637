use leptos::prelude::*;

/// Previous/next pager under every table. Hidden entirely for single-page
/// result sets.
#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u64>,
    #[prop(into)] total_pages: Signal<u64>,
    on_page: impl Fn(u64) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pager">
                <button
                    class="pager-button"
                    disabled=move || page.get() <= 1
                    on:click=move |_| {
                        if page.get() > 1 {
                            on_page(page.get() - 1);
                        }
                    }
                >
                    "← Previous"
                </button>

                <span class="pager-info">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>

                <button
                    class="pager-button"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| {
                        if page.get() < total_pages.get() {
                            on_page(page.get() + 1);
                        }
                    }
                >
                    "Next →"
                </button>
            </div>
        </Show>
    }
}
