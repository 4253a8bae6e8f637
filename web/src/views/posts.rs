use crate::api::pagination::{page_slice, total_pages, TABLE_PAGE_SIZE};
use crate::components::{ConfirmModal, Pager, SearchInput};
use crate::components::toast::use_toaster;
use crate::server_posts::{delete_post, list_all_posts, list_posts_page, PostQuery};
use crate::utils::format::{post_scope_label, short_date};
use crate::utils::query::QueryState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use shared_types::{Post, PostStatus, PostType};
use thaw::*;

const FILTER_KEYS: &[&str] = &["search", "status", "type", "scope", "page"];

const SCOPES: &[(&str, &str)] = &[
    ("GLOBAL", "Global"),
    ("CLUB", "Clubs"),
    ("MUNICIPALITY", "Municipalities"),
];

/// Whether a post falls into a scope filter bucket. The backend has no such
/// param because scope is computed from `is_global` plus the target
/// relations, so this runs over a full scan.
fn post_in_scope(post: &Post, scope: &str) -> bool {
    match scope {
        "GLOBAL" => post.is_global,
        "CLUB" => !post.is_global && !post.target_clubs.is_empty(),
        "MUNICIPALITY" => {
            !post.is_global
                && post.target_clubs.is_empty()
                && !post.target_municipalities.is_empty()
        }
        _ => true,
    }
}

#[component]
pub fn PostsManager() -> impl IntoView {
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
                &next.href("/posts"),
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

    let posts = RwSignal::new(Vec::<Post>::new());
    let total = RwSignal::new(0u64);
    let loading = RwSignal::new(true);
    let error_message = RwSignal::new(Option::<String>::None);

    // With a scope filter the whole collection is drained and filtered plus
    // paginated client-side; otherwise the backend paginates.
    let load = move || {
        let snapshot = state.get_untracked();
        let filters = PostQuery {
            search: snapshot.get("search").map(str::to_string),
            status: snapshot.get("status").map(str::to_string),
            post_type: snapshot.get("type").map(str::to_string),
        };
        let scope = snapshot.get("scope").map(str::to_string);
        let page = snapshot.page();
        loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match scope {
                Some(scope) => match list_all_posts(filters).await {
                    Ok(all) => {
                        let matching: Vec<Post> = all
                            .into_iter()
                            .filter(|post| post_in_scope(post, &scope))
                            .collect();
                        total.set(matching.len() as u64);
                        posts.set(page_slice(&matching, page, TABLE_PAGE_SIZE));
                    }
                    Err(e) => error_message.set(Some(e.to_string())),
                },
                None => match list_posts_page(filters, page).await {
                    Ok(result) => {
                        posts.set(result.posts);
                        total.set(result.count);
                    }
                    Err(e) => error_message.set(Some(e.to_string())),
                },
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        state.track();
        load();
    });

    let pending_delete = RwSignal::new(Option::<Post>::None);
    let delete_open = RwSignal::new(false);
    let confirm_delete = move || {
        let Some(post) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_post(post.id).await {
                Ok(()) => {
                    toaster.success(format!("Deleted \"{}\"", post.title));
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
            .map(|post| format!("Delete \"{}\"? Its comments are removed as well.", post.title))
            .unwrap_or_default()
    });

    let search_value = Signal::derive(move || filter_value("search"));
    let page = Signal::derive(move || state.get().page());
    let pages = Signal::derive(move || total_pages(total.get(), TABLE_PAGE_SIZE));

    view! {
        <div class="manager posts-manager">
            <div class="manager-header">
                <h1>"Posts"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        navigate.with_value(|nav| nav("/posts/new", Default::default()));
                    }
                >
                    "New Post"
                </Button>
            </div>

            <div class="filter-bar">
                <SearchInput
                    value=search_value
                    placeholder="Search posts..."
                    on_search=move |text| set_filter("search", text)
                />

                <select
                    class="filter-select"
                    prop:value=move || filter_value("status")
                    on:change=move |ev| set_filter("status", event_target_value(&ev))
                >
                    <option value="">"All statuses"</option>
                    {PostStatus::ALL
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
                    prop:value=move || filter_value("type")
                    on:change=move |ev| set_filter("type", event_target_value(&ev))
                >
                    <option value="">"All types"</option>
                    {PostType::ALL
                        .into_iter()
                        .map(|post_type| {
                            view! {
                                <option value=post_type.as_query_value()>
                                    {post_type.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>

                <select
                    class="filter-select"
                    prop:value=move || filter_value("scope")
                    on:change=move |ev| set_filter("scope", event_target_value(&ev))
                >
                    <option value="">"All scopes"</option>
                    {SCOPES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
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
                                    <th>"Title"</th>
                                    <th>"Type"</th>
                                    <th>"Status"</th>
                                    <th>"Scope"</th>
                                    <th>"Published"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || posts.get()
                                    key=|post| post.id
                                    children=move |post: Post| {
                                        let post_id = post.id;
                                        let row_delete = post.clone();
                                        let scope = post_scope_label(&post);
                                        let published = post
                                            .published_at
                                            .map(short_date)
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <tr>
                                                <td>{post.title.clone()}</td>
                                                <td>{post.post_type.label()}</td>
                                                <td>
                                                    <span class=format!(
                                                        "status-badge status-badge--{}",
                                                        post.status.label().to_lowercase(),
                                                    )>{post.status.label()}</span>
                                                </td>
                                                <td>
                                                    <span class="scope-badge">{scope}</span>
                                                </td>
                                                <td>{published}</td>
                                                <td class="row-actions">
                                                    <button
                                                        class="row-action"
                                                        on:click=move |_| {
                                                            navigate.with_value(|nav| {
                                                                nav(
                                                                    &format!("/posts/{}/edit", post_id),
                                                                    Default::default(),
                                                                )
                                                            });
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
                                each=move || posts.get()
                                key=|post| post.id
                                children=move |post: Post| {
                                    let post_id = post.id;
                                    let card_delete = post.clone();
                                    let scope = post_scope_label(&post);
                                    let published = post
                                        .published_at
                                        .map(short_date)
                                        .unwrap_or_else(|| "-".to_string());
                                    view! {
                                        <div class="data-card">
                                            <div class="data-card__header">
                                                <span class="data-card__title">
                                                    {post.title.clone()}
                                                </span>
                                                <span class=format!(
                                                    "status-badge status-badge--{}",
                                                    post.status.label().to_lowercase(),
                                                )>{post.status.label()}</span>
                                            </div>
                                            <div class="data-card__line">
                                                {post.post_type.label()}
                                                " "
                                                <span class="scope-badge">{scope}</span>
                                            </div>
                                            <div class="data-card__line">{published}</div>
                                            <div class="data-card__actions">
                                                <button
                                                    class="row-action"
                                                    on:click=move |_| {
                                                        navigate.with_value(|nav| {
                                                            nav(
                                                                &format!("/posts/{}/edit", post_id),
                                                                Default::default(),
                                                            )
                                                        });
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
                        <Show when=move || posts.get().is_empty()>
                            <div class="empty-state">
                                <p>"No posts match the current filters."</p>
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
                    <p>"Loading posts..."</p>
                </div>
            </Show>

            <ConfirmModal
                open=delete_open
                title="Delete post"
                message=delete_message
                on_confirm=confirm_delete
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::NamedRef;

    fn post(is_global: bool, clubs: &[i64], municipalities: &[i64]) -> Post {
        Post {
            id: 1,
            title: "t".into(),
            content: String::new(),
            post_type: PostType::Text,
            status: PostStatus::Published,
            is_global,
            target_municipalities: municipalities.to_vec(),
            target_municipalities_details: municipalities
                .iter()
                .map(|&id| NamedRef {
                    id,
                    name: format!("m{}", id),
                })
                .collect(),
            target_clubs: clubs.to_vec(),
            target_clubs_details: clubs
                .iter()
                .map(|&id| NamedRef {
                    id,
                    name: format!("c{}", id),
                })
                .collect(),
            target_groups: vec![],
            age_from: None,
            age_to: None,
            grades: vec![],
            genders: vec![],
            interests: vec![],
            custom_fields: Default::default(),
            images: vec![],
            published_at: None,
            created_at: None,
        }
    }

    #[test]
    fn scope_buckets_are_disjoint_and_global_wins() {
        let global = post(true, &[1], &[2]);
        let club = post(false, &[1], &[2]);
        let municipality = post(false, &[], &[2]);

        assert!(post_in_scope(&global, "GLOBAL"));
        assert!(!post_in_scope(&global, "CLUB"));
        assert!(!post_in_scope(&global, "MUNICIPALITY"));

        assert!(post_in_scope(&club, "CLUB"));
        assert!(!post_in_scope(&club, "GLOBAL"));
        assert!(!post_in_scope(&club, "MUNICIPALITY"));

        assert!(post_in_scope(&municipality, "MUNICIPALITY"));
        assert!(!post_in_scope(&municipality, "CLUB"));
    }

    #[test]
    fn unknown_scope_matches_everything() {
        let p = post(false, &[], &[]);
        assert!(post_in_scope(&p, ""));
        assert!(post_in_scope(&p, "WHATEVER"));
    }
}
