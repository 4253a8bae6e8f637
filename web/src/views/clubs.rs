use crate::api::pagination::{page_slice, total_pages, TABLE_PAGE_SIZE};
use crate::components::{ConfirmModal, Pager, SearchInput};
use crate::components::toast::use_toaster;
use crate::server::{
    create_club, delete_club, list_clubs, list_municipalities, update_club,
};
use crate::utils::query::QueryState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use shared_types::{Club, ClubPayload, Municipality};
use thaw::*;

const FILTER_KEYS: &[&str] = &["search", "municipality", "page"];

/// Clubs are a small collection; the backend is drained once per filter
/// change and the municipality filter plus pagination run client-side.
#[component]
pub fn ClubsManager() -> impl IntoView {
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
                &next.href("/clubs"),
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
    let filter_value =
        move |key: &'static str| state.get().get(key).unwrap_or_default().to_string();

    let clubs = RwSignal::new(Vec::<Club>::new());
    let loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);
    let municipalities = RwSignal::new(Vec::<Municipality>::new());

    let load = move || {
        let search = state.get_untracked().get("search").map(str::to_string);
        loading.set(true);
        error_message.set(None);
        spawn_local(async move {
            match list_clubs(search).await {
                Ok(list) => clubs.set(list),
                Err(e) => error_message.set(Some(e.to_string())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        state.track();
        load();
    });

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = list_municipalities().await {
                municipalities.set(list);
            }
        });
    });

    let filtered = Memo::new(move |_| {
        let municipality = state.get().get_u64("municipality").map(|id| id as i64);
        clubs
            .get()
            .into_iter()
            .filter(|club| municipality.is_none() || club.municipality == municipality)
            .collect::<Vec<_>>()
    });
    let page = Signal::derive(move || state.get().page());
    let pages = Signal::derive(move || {
        total_pages(filtered.get().len() as u64, TABLE_PAGE_SIZE)
    });
    let visible = Memo::new(move |_| page_slice(&filtered.get(), page.get(), TABLE_PAGE_SIZE));

    let pending_delete = RwSignal::new(Option::<Club>::None);
    let delete_open = RwSignal::new(false);
    let confirm_delete = move || {
        let Some(club) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_club(club.id).await {
                Ok(()) => {
                    toaster.success(format!("Deleted {}", club.name));
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
            .map(|club| format!("Delete {}? Member assignments to it are cleared.", club.name))
            .unwrap_or_default()
    });

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Club>::None);

    let search_value = Signal::derive(move || filter_value("search"));

    view! {
        <div class="manager clubs-manager">
            <div class="manager-header">
                <h1>"Clubs"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        editing.set(None);
                        form_open.set(true);
                    }
                >
                    "New Club"
                </Button>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=search_value
                    placeholder="Search clubs..."
                    on_search=move |text| set_filter("search", text)
                />
                <select
                    class="filter-select"
                    prop:value=move || filter_value("municipality")
                    on:change=move |ev| set_filter("municipality", event_target_value(&ev))
                >
                    <option value="">"All municipalities"</option>
                    <For
                        each=move || municipalities.get()
                        key=|m| m.id
                        children=|m: Municipality| {
                            view! { <option value=m.id.to_string()>{m.name.clone()}</option> }
                        }
                    />
                </select>
                <button class="filter-clear" on:click=move |_| apply(QueryState::default())>
                    "Clear filters"
                </button>
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
                                    <th>"Municipality"</th>
                                    <th>"Address"</th>
                                    <th>"Contact"</th>
                                    <th>"Members"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visible.get()
                                    key=|club| club.id
                                    children=move |club: Club| {
                                        let row_edit = club.clone();
                                        let row_delete = club.clone();
                                        let municipality = club
                                            .municipality_details
                                            .as_ref()
                                            .map(|m| m.name.clone())
                                            .unwrap_or_else(|| "-".to_string());
                                        let contact = club
                                            .email
                                            .clone()
                                            .or_else(|| club.phone.clone())
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <tr>
                                                <td>{club.name.clone()}</td>
                                                <td>{municipality}</td>
                                                <td>
                                                    {club
                                                        .address
                                                        .clone()
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td>{contact}</td>
                                                <td>
                                                    {club
                                                        .member_count
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
                                key=|club| club.id
                                children=move |club: Club| {
                                    let card_edit = club.clone();
                                    let card_delete = club.clone();
                                    let municipality = club
                                        .municipality_details
                                        .as_ref()
                                        .map(|m| m.name.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    let contact = club
                                        .email
                                        .clone()
                                        .or_else(|| club.phone.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <div class="data-card">
                                            <div class="data-card__header">
                                                <span class="data-card__title">
                                                    {club.name.clone()}
                                                </span>
                                            </div>
                                            <div class="data-card__line">{municipality}</div>
                                            <div class="data-card__line">{contact}</div>
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
                                <p>"No clubs match the current filters."</p>
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
                    <p>"Loading clubs..."</p>
                </div>
            </Show>

            <ConfirmModal
                open=delete_open
                title="Delete club"
                message=delete_message
                on_confirm=confirm_delete
            />

            <ClubFormModal
                open=form_open
                editing=editing
                municipalities=municipalities
                on_saved=load
            />
        </div>
    }
}

#[component]
fn ClubFormModal(
    open: RwSignal<bool>,
    editing: RwSignal<Option<Club>>,
    municipalities: RwSignal<Vec<Municipality>>,
    on_saved: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let toaster = use_toaster();

    let name = RwSignal::new(String::new());
    let municipality = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get() {
            Some(club) => {
                name.set(club.name.clone());
                municipality.set(
                    club.municipality
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                );
                address.set(club.address.clone().unwrap_or_default());
                email.set(club.email.clone().unwrap_or_default());
                phone.set(club.phone.clone().unwrap_or_default());
            }
            None => {
                name.set(String::new());
                municipality.set(String::new());
                address.set(String::new());
                email.set(String::new());
                phone.set(String::new());
            }
        }
    });

    let submit = move |_| {
        let club_name = name.get_untracked().trim().to_string();
        if club_name.is_empty() {
            toaster.error("Club name is required");
            return;
        }

        let payload = ClubPayload {
            name: Some(club_name),
            municipality: municipality.get_untracked().parse().ok(),
            address: Some(address.get_untracked()).filter(|v| !v.is_empty()),
            email: Some(email.get_untracked()).filter(|v| !v.is_empty()),
            phone: Some(phone.get_untracked()).filter(|v| !v.is_empty()),
        };

        saving.set(true);
        spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(club) => update_club(club.id, payload).await.map(|_| ()),
                None => create_club(payload).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toaster.success(if editing.get_untracked().is_some() {
                        "Club updated"
                    } else {
                        "Club created"
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
                                if editing.get().is_some() { "Edit Club" } else { "New Club" }
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
                            "Municipality"
                            <select
                                prop:value=move || municipality.get()
                                on:change=move |ev| municipality.set(event_target_value(&ev))
                            >
                                <option value="">"None"</option>
                                <For
                                    each=move || municipalities.get()
                                    key=|m| m.id
                                    children=|m: Municipality| {
                                        view! {
                                            <option value=m.id.to_string()>{m.name.clone()}</option>
                                        }
                                    }
                                />
                            </select>
                        </label>
                        <label>
                            "Address"
                            <input
                                type="text"
                                prop:value=move || address.get()
                                on:input=move |ev| address.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Phone"
                            <input
                                type="tel"
                                prop:value=move || phone.get()
                                on:input=move |ev| phone.set(event_target_value(&ev))
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
