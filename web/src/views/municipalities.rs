use crate::api::pagination::{page_slice, total_pages, TABLE_PAGE_SIZE};
use crate::components::{ConfirmModal, Pager, SearchInput};
use crate::components::toast::use_toaster;
use crate::server::{
    create_municipality, delete_municipality, list_countries, list_municipalities,
    update_municipality,
};
use crate::utils::query::QueryState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use shared_types::{Country, Municipality};
use thaw::*;

const FILTER_KEYS: &[&str] = &["search", "page"];

/// Municipality search is client-side: the collection is tiny and the
/// backend exposes no search param on it.
#[component]
pub fn MunicipalitiesManager() -> impl IntoView {
    let query = use_query_map();
    let navigate = StoredValue::new_local(use_navigate());
    let toaster = use_toaster();

    let state = Memo::new(move |_| {
        let q = query.get();
        QueryState::from_pairs(
            FILTER_KEYS
                .iter()
                .filter_map(|&key| q.get(key).map(|value| (key.to_string(), value))),
        )
    });
    let apply = move |next: QueryState| {
        navigate.with_value(|nav| {
            nav(
                &next.href("/municipalities"),
                NavigateOptions {
                    scroll: false,
                    ..Default::default()
                },
            )
        });
    };
    let set_filter = move |key: &'static str, value: String| {
        apply(state.get_untracked().with_filter(key, Some(&value)));
    };

    let municipalities = RwSignal::new(Vec::<Municipality>::new());
    let countries = RwSignal::new(Vec::<Country>::new());
    let loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        error_message.set(None);
        spawn_local(async move {
            match list_municipalities().await {
                Ok(list) => municipalities.set(list),
                Err(e) => error_message.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        load();
        spawn_local(async move {
            if let Ok(list) = list_countries().await {
                countries.set(list);
            }
        });
    });

    let filtered = Memo::new(move |_| {
        let needle = state
            .get()
            .get("search")
            .unwrap_or_default()
            .to_lowercase();
        municipalities
            .get()
            .into_iter()
            .filter(|m| needle.is_empty() || m.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
    });
    let page = Signal::derive(move || state.get().page());
    let pages =
        Signal::derive(move || total_pages(filtered.get().len() as u64, TABLE_PAGE_SIZE));
    let visible = Memo::new(move |_| page_slice(&filtered.get(), page.get(), TABLE_PAGE_SIZE));

    let pending_delete = RwSignal::new(Option::<Municipality>::None);
    let delete_open = RwSignal::new(false);
    let confirm_delete = move || {
        let Some(municipality) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_municipality(municipality.id).await {
                Ok(()) => {
                    toaster.success(format!("Deleted {}", municipality.name));
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
            .map(|m| format!("Delete {}? Its clubs keep existing but lose the link.", m.name))
            .unwrap_or_default()
    });

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Municipality>::None);

    let search_value =
        Signal::derive(move || state.get().get("search").unwrap_or_default().to_string());

    view! {
        <div class="manager municipalities-manager">
            <div class="manager-header">
                <h1>"Municipalities"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        editing.set(None);
                        form_open.set(true);
                    }
                >
                    "New Municipality"
                </Button>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=search_value
                    placeholder="Search municipalities..."
                    on_search=move |text| set_filter("search", text)
                />
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
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Country"</th>
                                    <th>"Clubs"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|m| m.id
                                    children=move |municipality: Municipality| {
                                        let row_edit = municipality.clone();
                                        let row_delete = municipality.clone();
                                        let country = municipality
                                            .country_details
                                            .as_ref()
                                            .map(|c| c.name.clone())
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <tr>
                                                <td>{municipality.name.clone()}</td>
                                                <td>{country}</td>
                                                <td>
                                                    {municipality
                                                        .club_count
                                                        .map(|c| c.to_string())
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td class="row-actions">
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
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                        <div class="card-list">
                            <For
                                each=move || visible.get()
                                key=|m| m.id
                                children=move |municipality: Municipality| {
                                    let card_edit = municipality.clone();
                                    let card_delete = municipality.clone();
                                    let country = municipality
                                        .country_details
                                        .as_ref()
                                        .map(|c| c.name.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <div class="data-card">
                                            <div class="data-card__header">
                                                <span class="data-card__title">
                                                    {municipality.name.clone()}
                                                </span>
                                            </div>
                                            <div class="data-card__line">{country}</div>
                                            <div class="data-card__actions">
                                                <button
                                                    class="row-action"
                                                    on:click=move |_| {
                                                        editing.set(Some(card_edit.clone()));
                                                        form_open.set(true);
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="row-action row-action--danger"
                                                    on:click=move |_| {
                                                        pending_delete.set(Some(card_delete.clone()));
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
                        <Show when=move || visible.get().is_empty()>
                            <div class="empty-state">
                                <p>"No municipalities found."</p>
                            </div>
                        </Show>
                        <Pager
                            page=page
                            total_pages=pages
                            on_page=move |next| apply(state.get_untracked().with_page(next))
                        />
                    }
                }
            >
                <div class="manager-loading">
                    <Spinner />
                    <p>"Loading municipalities..."</p>
                </div>
            </Show>

            <ConfirmModal
                open=delete_open
                title="Delete municipality"
                message=delete_message
                on_confirm=confirm_delete
            />

            <MunicipalityFormModal
                open=form_open
                editing=editing
                countries=countries
                on_saved=load
            />
        </div>
    }
}

#[component]
fn MunicipalityFormModal(
    open: RwSignal<bool>,
    editing: RwSignal<Option<Municipality>>,
    countries: RwSignal<Vec<Country>>,
    on_saved: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let toaster = use_toaster();

    let name = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get() {
            Some(municipality) => {
                name.set(municipality.name.clone());
                country.set(
                    municipality
                        .country
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                );
            }
            None => {
                name.set(String::new());
                country.set(String::new());
            }
        }
    });

    let submit = move |_| {
        let municipality_name = name.get_untracked().trim().to_string();
        if municipality_name.is_empty() {
            toaster.error("Municipality name is required");
            return;
        }
        let country_id = country.get_untracked().parse().ok();

        saving.set(true);
        spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(municipality) => {
                    update_municipality(municipality.id, municipality_name, country_id)
                        .await
                        .map(|_| ())
                }
                None => create_municipality(municipality_name, country_id)
                    .await
                    .map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toaster.success(if editing.get_untracked().is_some() {
                        "Municipality updated"
                    } else {
                        "Municipality created"
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
                            {move || {
                                if editing.get().is_some() {
                                    "Edit Municipality"
                                } else {
                                    "New Municipality"
                                }
                            }}
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
                            "Country"
                            <select
                                prop:value=move || country.get()
                                on:change=move |ev| country.set(event_target_value(&ev))
                            >
                                <option value="">"None"</option>
                                <For
                                    each=move || countries.get()
                                    key=|c| c.id
                                    children=|c: Country| {
                                        view! {
                                            <option value=c.id.to_string()>{c.name.clone()}</option>
                                        }
                                    }
                                />
                            </select>
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
