use crate::components::ConfirmModal;
use crate::components::toast::use_toaster;
use crate::server::{create_tag, delete_tag, list_tags, update_tag};
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::Tag;
use thaw::*;

/// News tags are a flat list with inline create/edit. No URL filters here;
/// the collection rarely exceeds a dozen entries.
#[component]
pub fn TagsManager() -> impl IntoView {
    let toaster = use_toaster();

    let tags = RwSignal::new(Vec::<Tag>::new());
    let loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        error_message.set(None);
        spawn_local(async move {
            match list_tags().await {
                Ok(list) => tags.set(list),
                Err(e) => error_message.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
    });

    let pending_delete = RwSignal::new(Option::<Tag>::None);
    let delete_open = RwSignal::new(false);
    let confirm_delete = move || {
        let Some(tag) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_tag(tag.id).await {
                Ok(()) => {
                    toaster.success(format!("Deleted tag {}", tag.name));
                    delete_open.set(false);
                    pending_delete.set(None);
                    load();
                }
                Err(e) => toaster.error(e.to_string()),
            }
        });
    };
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|tag| format!("Delete the tag {}? Posts keep their other tags.", tag.name))
            .unwrap_or_default()
    });

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Tag>::None);

    view! {
        <div class="manager tags-manager">
            <div class="manager-header">
                <h1>"Tags"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        editing.set(None);
                        form_open.set(true);
                    }
                >
                    "New Tag"
                </Button>
            </div>

            <Show when=move || error_message.get().is_some()>
                <MessageBar intent=MessageBarIntent::Error>
                    {move || error_message.get().unwrap_or_default()}
                </MessageBar>
            </Show>

            <Show
                when=move || loading.get()
                fallback=move || {
                    view! {
                        <div class="tag-list">
                            <For
                                each=move || tags.get()
                                key=|tag| tag.id
                                children=move |tag: Tag| {
                                    let row_edit = tag.clone();
                                    let row_delete = tag.clone();
                                    let swatch = tag
                                        .color
                                        .clone()
                                        .unwrap_or_else(|| "#888888".to_string());
                                    view! {
                                        <div class="tag-row">
                                            <span
                                                class="tag-swatch"
                                                style=format!("background-color: {}", swatch)
                                            ></span>
                                            <span class="tag-name">{tag.name.clone()}</span>
                                            <div class="row-actions">
                                                <button
                                                    class="row-action"
                                                    on:click=move |_| {
                                                        editing.set(Some(row_edit.clone()));
                                                        form_open.set(true);
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="row-action row-action--danger"
                                                    on:click=move |_| {
                                                        pending_delete.set(Some(row_delete.clone()));
                                                        delete_open.set(true);
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <Show when=move || tags.get().is_empty()>
                            <div class="empty-state">
                                <p>"No tags yet."</p>
                            </div>
                        </Show>
                    }
                }
            >
                <div class="manager-loading">
                    <Spinner />
                    <p>"Loading tags..."</p>
                </div>
            </Show>

            <ConfirmModal
                open=delete_open
                title="Delete tag"
                message=delete_message
                on_confirm=confirm_delete
            />

            <TagFormModal open=form_open editing=editing on_saved=load />
        </div>
    }
}

#[component]
fn TagFormModal(
    open: RwSignal<bool>,
    editing: RwSignal<Option<Tag>>,
    on_saved: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let toaster = use_toaster();

    let name = RwSignal::new(String::new());
    let color = RwSignal::new("#4f6df5".to_string());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get() {
            Some(tag) => {
                name.set(tag.name.clone());
                color.set(tag.color.clone().unwrap_or_else(|| "#4f6df5".to_string()));
            }
            None => {
                name.set(String::new());
                color.set("#4f6df5".to_string());
            }
        }
    });

    let submit = move |_| {
        let tag_name = name.get_untracked().trim().to_string();
        if tag_name.is_empty() {
            toaster.error("Tag name is required");
            return;
        }
        let tag_color = Some(color.get_untracked()).filter(|v| !v.is_empty());

        saving.set(true);
        spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(tag) => update_tag(tag.id, tag_name, tag_color).await.map(|_| ()),
                None => create_tag(tag_name, tag_color).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toaster.success(if editing.get_untracked().is_some() {
                        "Tag updated"
                    } else {
                        "Tag created"
                    });
                    open.set(false);
                    on_saved();
                }
                Err(e) => toaster.error(e.to_string()),
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal-container" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>
                            {move || if editing.get().is_some() { "Edit Tag" } else { "New Tag" }}
                        </h2>
                    </div>
                    <div class="modal-body form-grid">
                        <label>
                            "Name"
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Color"
                            <input
                                type="color"
                                prop:value=move || color.get()
                                on:input=move |ev| color.set(event_target_value(&ev))
                            />
                        </label>
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
                            disabled=saving
                            on_click=submit
                        >
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
