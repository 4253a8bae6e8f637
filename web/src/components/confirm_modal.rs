use leptos::prelude::*;
use thaw::*;

/// Confirmation gate in front of every destructive call. The action closure
/// only ever runs from the confirm button; closing or clicking the backdrop
/// leaves the entity untouched.
#[component]
pub fn ConfirmModal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label.unwrap_or_else(|| "Delete".to_string()));

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal-container" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{title.clone()}</h2>
                    </div>
                    <div class="modal-body">
                        <p>{move || message.get()}</p>
                    </div>
                    <div class="modal-actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm()
                        >
                            {move || confirm_label.get_value()}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
