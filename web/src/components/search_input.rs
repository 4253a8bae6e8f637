use leptos::prelude::*;
use std::time::Duration;

const SEARCH_DEBOUNCE_MS: u64 = 400;

/// Free-text search box that debounces URL writes so fast typing does not
/// fire a request per keystroke. Local input state re-syncs from the URL
/// (e.g. after a "Clear" button) only while the input is not focused, so
/// in-progress typing is never clobbered.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] placeholder: &'static str,
    on_search: impl Fn(String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let text = RwSignal::new(value.get_untracked());
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    let input_has_focus = move || -> bool {
        let Some(input) = input_ref.get_untracked() else {
            return false;
        };
        let Some(active) = document().active_element() else {
            return false;
        };
        let element: &web_sys::Element = input.as_ref();
        active == *element
    };

    // External URL changes re-sync the box unless the operator is typing.
    Effect::new(move |_| {
        let external = value.get();
        if !input_has_focus() {
            text.set(external);
        }
    });

    let handle_input = move |ev: web_sys::Event| {
        let next = event_target_value(&ev);
        text.set(next.clone());

        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
        let handle = set_timeout_with_handle(
            move || on_search(next.clone()),
            Duration::from_millis(SEARCH_DEBOUNCE_MS),
        )
        .ok();
        pending.set_value(handle);
    };

    view! {
        <input
            type="text"
            class="search-input"
            placeholder=placeholder
            prop:value=move || text.get()
            on:input=handle_input
            node_ref=input_ref
        />
    }
}
