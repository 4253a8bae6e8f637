use crate::api::pagination::{total_pages, TABLE_PAGE_SIZE};
use crate::components::{ConfirmModal, Pager, SearchInput};
use crate::components::toast::use_toaster;
use crate::server::{
    create_user, delete_user, list_all_users, list_clubs, list_interests, list_municipalities,
    list_users_page, update_user, UserQuery,
};
use crate::utils::format::age_on;
use crate::utils::query::QueryState;
use crate::utils::stats::UserStats;
use chrono::{NaiveDate, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use shared_types::{Club, Interest, Municipality, Role, User, UserPayload, VerificationStatus};
use thaw::*;

/// Every query key the members manager round-trips through the URL.
const FILTER_KEYS: &[&str] = &[
    "search",
    "role",
    "assigned_municipality",
    "assigned_club",
    "legal_gender",
    "verification_status",
    "age_from",
    "age_to",
    "grade_from",
    "grade_to",
    "interest",
    "birthday_today",
    "page",
];

const GENDERS: &[(&str, &str)] = &[("MALE", "Male"), ("FEMALE", "Female"), ("OTHER", "Other")];

fn user_query(state: &QueryState) -> UserQuery {
    let take = |key: &str| state.get(key).map(str::to_string);
    UserQuery {
        search: take("search"),
        role: take("role"),
        assigned_municipality: take("assigned_municipality"),
        assigned_club: take("assigned_club"),
        legal_gender: take("legal_gender"),
        verification_status: take("verification_status"),
        age_from: take("age_from"),
        age_to: take("age_to"),
        grade_from: take("grade_from"),
        grade_to: take("grade_to"),
        interest: take("interest"),
        birthday_today: take("birthday_today"),
    }
}

#[component]
pub fn UsersManager() -> impl IntoView {
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
                &next.href("/users"),
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

    let users = RwSignal::new(Vec::<User>::new());
    let total = RwSignal::new(0u64);
    let loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);
    let stats = RwSignal::new(Option::<UserStats>::None);

    let municipalities = RwSignal::new(Vec::<Municipality>::new());
    let clubs = RwSignal::new(Vec::<Club>::new());
    let interests = RwSignal::new(Vec::<Interest>::new());

    let load = move || {
        let snapshot = state.get_untracked();
        let filters = user_query(&snapshot);
        let page = snapshot.page();
        loading.set(true);
        error_message.set(None);

        {
            let filters = filters.clone();
            spawn_local(async move {
                match list_users_page(filters, page).await {
                    Ok(result) => {
                        users.set(result.users);
                        total.set(result.count);
                    }
                    Err(e) => error_message.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        }

        // Analytics drain the whole filtered set; fired concurrently with
        // the table fetch and rendered whenever it lands.
        spawn_local(async move {
            match list_all_users(filters).await {
                Ok(all) => stats.set(Some(UserStats::compute(&all, Utc::now().date_naive()))),
                Err(_) => stats.set(None),
            }
        });
    };

    Effect::new(move |_| {
        state.track();
        load();
    });

    // Dropdown data, fetched once.
    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = list_municipalities().await {
                municipalities.set(list);
            }
        });
        spawn_local(async move {
            if let Ok(list) = list_clubs(None).await {
                clubs.set(list);
            }
        });
        spawn_local(async move {
            if let Ok(list) = list_interests().await {
                interests.set(list);
            }
        });
    });

    let pending_delete = RwSignal::new(Option::<User>::None);
    let delete_open = RwSignal::new(false);
    let confirm_delete = move || {
        let Some(user) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_user(user.id).await {
                Ok(()) => {
                    toaster.success(format!("Deleted {}", user.full_name()));
                    delete_open.set(false);
                    pending_delete.set(None);
                    load();
                }
                // Modal stays open so the operator can retry.
                Err(e) => toaster.error(e.to_string()),
            }
        });
    };
    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|user| {
                format!(
                    "Delete {}? Their registrations and visit history are removed as well.",
                    user.full_name()
                )
            })
            .unwrap_or_default()
    });

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<User>::None);

    let search_value = Signal::derive(move || filter_value("search"));
    let page = Signal::derive(move || state.get().page());
    let pages = Signal::derive(move || total_pages(total.get(), TABLE_PAGE_SIZE));

    view! {
        <div class="manager users-manager">
            <div class="manager-header">
                <h1>"Members"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        editing.set(None);
                        form_open.set(true);
                    }
                >
                    "New Member"
                </Button>
            </div>

            <UserStatsPanel stats=stats />

            <div class="filter-bar">
                <SearchInput
                    value=search_value
                    placeholder="Search name or email..."
                    on_search=move |text| set_filter("search", text)
                />

                <select
                    class="filter-select"
                    prop:value=move || filter_value("role")
                    on:change=move |ev| set_filter("role", event_target_value(&ev))
                >
                    <option value="">"All roles"</option>
                    {Role::ALL
                        .into_iter()
                        .map(|role| {
                            view! {
                                <option value=role.as_query_value()>{role.label()}</option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    class="filter-select"
                    prop:value=move || filter_value("verification_status")
                    on:change=move |ev| set_filter("verification_status", event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {VerificationStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option value=status.as_query_value()>{status.label()}</option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    class="filter-select"
                    prop:value=move || filter_value("legal_gender")
                    on:change=move |ev| set_filter("legal_gender", event_target_value(&ev))
                >
                    <option value="">"All genders"</option>
                    {GENDERS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>

                <select
                    class="filter-select"
                    prop:value=move || filter_value("assigned_municipality")
                    on:change=move |ev| set_filter("assigned_municipality", event_target_value(&ev))
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

                <select
                    class="filter-select"
                    prop:value=move || filter_value("assigned_club")
                    on:change=move |ev| set_filter("assigned_club", event_target_value(&ev))
                >
                    <option value="">"All clubs"</option>
                    <For
                        each=move || clubs.get()
                        key=|c| c.id
                        children=|c: Club| {
                            view! { <option value=c.id.to_string()>{c.name.clone()}</option> }
                        }
                    />
                </select>

                <select
                    class="filter-select"
                    prop:value=move || filter_value("interest")
                    on:change=move |ev| set_filter("interest", event_target_value(&ev))
                >
                    <option value="">"All interests"</option>
                    <For
                        each=move || interests.get()
                        key=|i| i.id
                        children=|i: Interest| {
                            view! { <option value=i.id.to_string()>{i.name.clone()}</option> }
                        }
                    />
                </select>

                <input
                    type="number"
                    class="filter-number"
                    placeholder="Age from"
                    prop:value=move || filter_value("age_from")
                    on:change=move |ev| set_filter("age_from", event_target_value(&ev))
                />
                <input
                    type="number"
                    class="filter-number"
                    placeholder="Age to"
                    prop:value=move || filter_value("age_to")
                    on:change=move |ev| set_filter("age_to", event_target_value(&ev))
                />
                <input
                    type="number"
                    class="filter-number"
                    placeholder="Grade from"
                    prop:value=move || filter_value("grade_from")
                    on:change=move |ev| set_filter("grade_from", event_target_value(&ev))
                />
                <input
                    type="number"
                    class="filter-number"
                    placeholder="Grade to"
                    prop:value=move || filter_value("grade_to")
                    on:change=move |ev| set_filter("grade_to", event_target_value(&ev))
                />

                <label class="filter-checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || filter_value("birthday_today") == "true"
                        on:change=move |ev| {
                            let value = if event_target_checked(&ev) { "true" } else { "" };
                            set_filter("birthday_today", value.to_string());
                        }
                    />
                    "Birthday today"
                </label>

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
                        <UserTable
                            users=users
                            on_edit=move |user: User| {
                                editing.set(Some(user));
                                form_open.set(true);
                            }
                            on_delete=move |user: User| {
                                pending_delete.set(Some(user));
                                delete_open.set(true);
                            }
                        />
                        <Show when=move || users.get().is_empty()>
                            <div class="empty-state">
                                <p>"No members match the current filters."</p>
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
                    <p>"Loading members..."</p>
                </div>
            </Show>

            <ConfirmModal
                open=delete_open
                title="Delete member"
                message=delete_message
                on_confirm=confirm_delete
            />

            <UserFormModal
                open=form_open
                editing=editing
                municipalities=municipalities
                clubs=clubs
                interests=interests
                on_saved=load
            />
        </div>
    }
}

#[component]
fn UserStatsPanel(stats: RwSignal<Option<UserStats>>) -> impl IntoView {
    view! {
        <Show when=move || stats.get().is_some()>
            {move || {
                let s = stats.get().unwrap_or_default();
                let genders = s
                    .by_gender
                    .iter()
                    .map(|(gender, count)| format!("{}: {}", gender, count))
                    .collect::<Vec<_>>()
                    .join("  ");
                view! {
                    <div class="stats-panel">
                        <div class="stat-card">
                            <span class="stat-value">{s.total}</span>
                            <span class="stat-label">"Total members"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{s.new_last_7_days}</span>
                            <span class="stat-label">"New this week"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{s.new_last_30_days}</span>
                            <span class="stat-label">"New this month"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">
                                {format!("{} / {} / {}", s.verified, s.pending, s.unverified)}
                            </span>
                            <span class="stat-label">"Verified / pending / unverified"</span>
                        </div>
                        <div class="stat-card">
                            <span class="stat-value">{genders}</span>
                            <span class="stat-label">"By gender"</span>
                        </div>
                    </div>
                }
            }}
        </Show>
    }
}

/// Same fetched rows rendered twice: a table for wide viewports and a card
/// list for narrow ones, toggled in CSS.
#[component]
fn UserTable(
    users: RwSignal<Vec<User>>,
    on_edit: impl Fn(User) + 'static + Copy + Send + Sync,
    on_delete: impl Fn(User) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let today = Utc::now().date_naive();

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Club"</th>
                    <th>"Municipality"</th>
                    <th>"Age"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || users.get()
                    key=|user| user.id
                    children=move |user: User| {
                        let row_edit = user.clone();
                        let row_delete = user.clone();
                        let club = user
                            .assigned_club_details
                            .as_ref()
                            .map(|c| c.name.clone())
                            .unwrap_or_else(|| "-".to_string());
                        let municipality = user
                            .assigned_municipality_details
                            .as_ref()
                            .map(|m| m.name.clone())
                            .unwrap_or_else(|| "-".to_string());
                        let age = user
                            .date_of_birth
                            .map(|dob| age_on(dob, today).to_string())
                            .unwrap_or_else(|| "-".to_string());
                        let status = user
                            .verification_status
                            .map(|s| s.label())
                            .unwrap_or("Unverified");

                        view! {
                            <tr>
                                <td>{user.full_name()}</td>
                                <td>{user.email.clone().unwrap_or_else(|| "-".to_string())}</td>
                                <td>{user.role.label()}</td>
                                <td>{club}</td>
                                <td>{municipality}</td>
                                <td>{age}</td>
                                <td>
                                    <span class=format!(
                                        "status-badge status-badge--{}",
                                        status.to_lowercase(),
                                    )>{status}</span>
                                </td>
                                <td class="row-actions">
                                    <button
                                        class="row-action"
                                        on:click=move |_| on_edit(row_edit.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="row-action row-action--danger"
                                        on:click=move |_| on_delete(row_delete.clone())
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
                each=move || users.get()
                key=|user| user.id
                children=move |user: User| {
                    let card_edit = user.clone();
                    let card_delete = user.clone();
                    let club = user
                        .assigned_club_details
                        .as_ref()
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| "-".to_string());
                    let age = user
                        .date_of_birth
                        .map(|dob| age_on(dob, today).to_string())
                        .unwrap_or_else(|| "-".to_string());
                    let status = user
                        .verification_status
                        .map(|s| s.label())
                        .unwrap_or("Unverified");

                    view! {
                        <div class="data-card">
                            <div class="data-card__header">
                                <span class="data-card__title">{user.full_name()}</span>
                                <span class=format!(
                                    "status-badge status-badge--{}",
                                    status.to_lowercase(),
                                )>{status}</span>
                            </div>
                            <div class="data-card__line">
                                {user.email.clone().unwrap_or_else(|| "-".to_string())}
                            </div>
                            <div class="data-card__line">
                                {format!("{}  {}  Age {}", user.role.label(), club, age)}
                            </div>
                            <div class="data-card__actions">
                                <button
                                    class="row-action"
                                    on:click=move |_| on_edit(card_edit.clone())
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="row-action row-action--danger"
                                    on:click=move |_| on_delete(card_delete.clone())
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn UserFormModal(
    open: RwSignal<bool>,
    editing: RwSignal<Option<User>>,
    municipalities: RwSignal<Vec<Municipality>>,
    clubs: RwSignal<Vec<Club>>,
    interests: RwSignal<Vec<Interest>>,
    on_saved: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let toaster = use_toaster();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::YouthMember.as_query_value().to_string());
    let club = RwSignal::new(String::new());
    let municipality = RwSignal::new(String::new());
    let gender = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let grade = RwSignal::new(String::new());
    let verification = RwSignal::new(String::new());
    let interest_ids = RwSignal::new(Vec::<i64>::new());
    let saving = RwSignal::new(false);

    // Re-seed the form every time the modal opens.
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get() {
            Some(user) => {
                first_name.set(user.first_name.clone());
                last_name.set(user.last_name.clone());
                email.set(user.email.clone().unwrap_or_default());
                role.set(user.role.as_query_value().to_string());
                club.set(
                    user.assigned_club
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                );
                municipality.set(
                    user.assigned_municipality
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                );
                gender.set(user.legal_gender.clone().unwrap_or_default());
                date_of_birth.set(
                    user.date_of_birth
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                );
                grade.set(user.grade.map(|g| g.to_string()).unwrap_or_default());
                verification.set(
                    user.verification_status
                        .map(|s| s.as_query_value().to_string())
                        .unwrap_or_default(),
                );
                interest_ids.set(user.interests.clone());
            }
            None => {
                first_name.set(String::new());
                last_name.set(String::new());
                email.set(String::new());
                role.set(Role::YouthMember.as_query_value().to_string());
                club.set(String::new());
                municipality.set(String::new());
                gender.set(String::new());
                date_of_birth.set(String::new());
                grade.set(String::new());
                verification.set(String::new());
                interest_ids.set(Vec::new());
            }
        }
    });

    let submit = move |_| {
        let first = first_name.get_untracked().trim().to_string();
        let last = last_name.get_untracked().trim().to_string();
        if first.is_empty() || last.is_empty() {
            toaster.error("First and last name are required");
            return;
        }

        let payload = UserPayload {
            first_name: Some(first),
            last_name: Some(last),
            email: Some(email.get_untracked()).filter(|v| !v.is_empty()),
            role: Role::from_query_value(&role.get_untracked()),
            assigned_club: club.get_untracked().parse().ok(),
            assigned_municipality: municipality.get_untracked().parse().ok(),
            verification_status: VerificationStatus::from_query_value(
                &verification.get_untracked(),
            ),
            legal_gender: Some(gender.get_untracked()).filter(|v| !v.is_empty()),
            date_of_birth: date_of_birth.get_untracked().parse::<NaiveDate>().ok(),
            grade: grade.get_untracked().parse().ok(),
            interests: Some(interest_ids.get_untracked()),
        };

        saving.set(true);
        spawn_local(async move {
            let result = match editing.get_untracked() {
                Some(user) => update_user(user.id, payload).await.map(|_| ()),
                None => create_user(payload).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toaster.success(if editing.get_untracked().is_some() {
                        "Member updated"
                    } else {
                        "Member created"
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
                <div class="modal-container modal-container--wide" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>
                            {move || {
                                if editing.get().is_some() { "Edit Member" } else { "New Member" }
                            }}
                        </h2>
                    </div>
                    <div class="modal-body form-grid">
                        <label>
                            "First name"
                            <input
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| first_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Last name"
                            <input
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| last_name.set(event_target_value(&ev))
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
                            "Role"
                            <select
                                prop:value=move || role.get()
                                on:change=move |ev| role.set(event_target_value(&ev))
                            >
                                {Role::ALL
                                    .into_iter()
                                    .map(|r| {
                                        view! {
                                            <option value=r.as_query_value()>{r.label()}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Club"
                            <select
                                prop:value=move || club.get()
                                on:change=move |ev| club.set(event_target_value(&ev))
                            >
                                <option value="">"None"</option>
                                <For
                                    each=move || clubs.get()
                                    key=|c| c.id
                                    children=|c: Club| {
                                        view! {
                                            <option value=c.id.to_string()>{c.name.clone()}</option>
                                        }
                                    }
                                />
                            </select>
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
                            "Legal gender"
                            <select
                                prop:value=move || gender.get()
                                on:change=move |ev| gender.set(event_target_value(&ev))
                            >
                                <option value="">"Not set"</option>
                                {GENDERS
                                    .iter()
                                    .map(|(value, label)| {
                                        view! { <option value=*value>{*label}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <label>
                            "Date of birth"
                            <input
                                type="date"
                                prop:value=move || date_of_birth.get()
                                on:change=move |ev| date_of_birth.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Grade"
                            <input
                                type="number"
                                prop:value=move || grade.get()
                                on:input=move |ev| grade.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Verification status"
                            <select
                                prop:value=move || verification.get()
                                on:change=move |ev| verification.set(event_target_value(&ev))
                            >
                                <option value="">"Not set"</option>
                                {VerificationStatus::ALL
                                    .into_iter()
                                    .map(|s| {
                                        view! {
                                            <option value=s.as_query_value()>{s.label()}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <div class="form-interests">
                            <span>"Interests"</span>
                            <For
                                each=move || interests.get()
                                key=|i| i.id
                                children=move |interest: Interest| {
                                    let id = interest.id;
                                    view! {
                                        <label class="filter-checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    interest_ids.get().contains(&id)
                                                }
                                                on:change=move |_| {
                                                    interest_ids
                                                        .update(|ids| {
                                                            if let Some(pos) = ids
                                                                .iter()
                                                                .position(|&i| i == id)
                                                            {
                                                                ids.remove(pos);
                                                            } else {
                                                                ids.push(id);
                                                            }
                                                        });
                                                }
                                            />
                                            {interest.name.clone()}
                                        </label>
                                    }
                                }
                            />
                        </div>
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
