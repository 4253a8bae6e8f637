use crate::api::pagination::{total_pages, TABLE_PAGE_SIZE};
use crate::components::{Pager, SearchInput};
use crate::server::list_clubs;
use crate::server_visits::{list_visits_page, VisitQuery};
use crate::utils::format::{short_datetime, time_of_day, visit_duration};
use crate::utils::query::QueryState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use shared_types::{Club, Visit};
use thaw::*;

const FILTER_KEYS: &[&str] = &["search", "club", "date", "page"];

#[component]
pub fn VisitsManager() -> impl IntoView {
    let query = use_query_map();
    let navigate = StoredValue::new_local(use_navigate());

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
                &next.href("/visits"),
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

    let visits = RwSignal::new(Vec::<Visit>::new());
    let total = RwSignal::new(0u64);
    let loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);
    let clubs = RwSignal::new(Vec::<Club>::new());

    let load = move || {
        let snapshot = state.get_untracked();
        let filters = VisitQuery {
            search: snapshot.get("search").map(str::to_string),
            club: snapshot.get("club").map(str::to_string),
            date: snapshot.get("date").map(str::to_string),
        };
        let page = snapshot.page();
        loading.set(true);
        error_message.set(None);
        spawn_local(async move {
            match list_visits_page(filters, page).await {
                Ok(result) => {
                    visits.set(result.visits);
                    total.set(result.count);
                }
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
            if let Ok(list) = list_clubs(None).await {
                clubs.set(list);
            }
        });
    });

    let search_value = Signal::derive(move || filter_value("search"));
    let page = Signal::derive(move || state.get().page());
    let pages = Signal::derive(move || total_pages(total.get(), TABLE_PAGE_SIZE));

    view! {
        <div class="manager visits-manager">
            <div class="manager-header">
                <h1>"Visits"</h1>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=search_value
                    placeholder="Search members..."
                    on_search=move |text| set_filter("search", text)
                />
                <select
                    class="filter-select"
                    prop:value=move || filter_value("club")
                    on:change=move |ev| set_filter("club", event_target_value(&ev))
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
                <input
                    type="date"
                    class="filter-select"
                    prop:value=move || filter_value("date")
                    on:change=move |ev| set_filter("date", event_target_value(&ev))
                />
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
                                    <th>"Member"</th>
                                    <th>"Club"</th>
                                    <th>"Checked in"</th>
                                    <th>"Checked out"</th>
                                    <th>"Duration"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || visits.get()
                                    key=|visit| visit.id
                                    children=move |visit: Visit| {
                                        let member = visit
                                            .user_details
                                            .as_ref()
                                            .map(|u| u.name.clone())
                                            .unwrap_or_else(|| format!("Member #{}", visit.user));
                                        let club = visit
                                            .club_details
                                            .as_ref()
                                            .map(|c| c.name.clone())
                                            .unwrap_or_else(|| "-".to_string());
                                        let check_out = visit
                                            .check_out_at
                                            .map(time_of_day)
                                            .unwrap_or_else(|| "-".to_string());
                                        let duration = visit_duration(&visit);
                                        view! {
                                            <tr>
                                                <td>{member}</td>
                                                <td>{club}</td>
                                                <td>{short_datetime(visit.check_in_at)}</td>
                                                <td>{check_out}</td>
                                                <td>
                                                    <span class=if visit.check_out_at.is_none() {
                                                        "duration duration--active"
                                                    } else {
                                                        "duration"
                                                    }>{duration}</span>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                        <div class="card-list">
                            <For
                                each=move || visits.get()
                                key=|visit| visit.id
                                children=move |visit: Visit| {
                                    let member = visit
                                        .user_details
                                        .as_ref()
                                        .map(|u| u.name.clone())
                                        .unwrap_or_else(|| format!("Member #{}", visit.user));
                                    let club = visit
                                        .club_details
                                        .as_ref()
                                        .map(|c| c.name.clone())
                                        .unwrap_or_else(|| "-".to_string());
                                    let duration = visit_duration(&visit);
                                    view! {
                                        <div class="data-card">
                                            <div class="data-card__header">
                                                <span class="data-card__title">{member}</span>
                                                <span class=if visit.check_out_at.is_none() {
                                                    "duration duration--active"
                                                } else {
                                                    "duration"
                                                }>{duration}</span>
                                            </div>
                                            <div class="data-card__line">{club}</div>
                                            <div class="data-card__line">
                                                {short_datetime(visit.check_in_at)}
                                            </div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                        <Show when=move || visits.get().is_empty()>
                            <div class="empty-state">
                                <p>"No visits match the current filters."</p>
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
                    <p>"Loading visits..."</p>
                </div>
            </Show>
        </div>
    }
}
