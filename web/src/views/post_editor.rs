use crate::components::ConfirmModal;
use crate::components::toast::use_toaster;
use crate::server::{list_clubs, list_custom_fields, list_groups, list_interests, list_municipalities};
use crate::server_posts::{
    create_post, delete_post_comment, get_post, list_post_comments, update_post,
    upload_post_image,
};
use crate::utils::auth::use_authenticated_role;
use crate::utils::format::short_datetime;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use shared_types::{
    Club, CustomField, Group, Interest, Municipality, Post, PostComment, PostPayload, PostStatus,
    PostType, Role,
};
use std::collections::HashMap;
use thaw::*;

const GENDERS: &[(&str, &str)] = &[("MALE", "Male"), ("FEMALE", "Female"), ("OTHER", "Other")];

/// Blocking browser alert, used only for the stale-edit redirect.
fn blocking_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            fn alert(s: &str);
        }

        alert(message);
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

#[cfg(feature = "hydrate")]
async fn selected_file(input: &web_sys::HtmlInputElement) -> Option<(String, Vec<u8>)> {
    let file = input.files()?.get(0)?;
    let name = file.name();
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .ok()?;
    Some((name, js_sys::Uint8Array::new(&buffer).to_vec()))
}

/// Create/edit form for a post. Rendered at `/posts/new` (no id param) and
/// `/posts/{id}/edit`; editing a post that was deleted in the meantime
/// alerts and falls back to the list.
#[component]
pub fn PostEditor() -> impl IntoView {
    let params = use_params_map();
    let navigate = StoredValue::new_local(use_navigate());
    let toaster = use_toaster();
    let role = use_authenticated_role();

    let post_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|value| value.parse::<i64>().ok())
    });

    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let post_type = RwSignal::new(PostType::Text.as_query_value().to_string());
    let status = RwSignal::new(PostStatus::Draft.as_query_value().to_string());
    let is_global = RwSignal::new(false);
    let target_clubs = RwSignal::new(Vec::<i64>::new());
    let target_municipalities = RwSignal::new(Vec::<i64>::new());
    let target_groups = RwSignal::new(Vec::<i64>::new());
    let age_from = RwSignal::new(String::new());
    let age_to = RwSignal::new(String::new());
    let grades = RwSignal::new(String::new());
    let genders = RwSignal::new(Vec::<String>::new());
    let interest_ids = RwSignal::new(Vec::<i64>::new());
    let custom_values = RwSignal::new(HashMap::<String, String>::new());
    let images = RwSignal::new(Vec::<String>::new());

    let clubs = RwSignal::new(Vec::<Club>::new());
    let municipalities = RwSignal::new(Vec::<Municipality>::new());
    let groups = RwSignal::new(Vec::<Group>::new());
    let interests = RwSignal::new(Vec::<Interest>::new());
    let custom_fields = RwSignal::new(Vec::<CustomField>::new());

    let comments = RwSignal::new(Vec::<PostComment>::new());

    let load_comments = move |id: i64| {
        spawn_local(async move {
            if let Ok(list) = list_post_comments(id).await {
                comments.set(list);
            }
        });
    };

    Effect::new(move |_| {
        let Some(id) = post_id.get() else {
            loading.set(false);
            return;
        };
        spawn_local(async move {
            match get_post(id).await {
                Ok(post) => {
                    title.set(post.title);
                    content.set(post.content);
                    post_type.set(post.post_type.as_query_value().to_string());
                    status.set(post.status.as_query_value().to_string());
                    is_global.set(post.is_global);
                    target_clubs.set(post.target_clubs);
                    target_municipalities.set(post.target_municipalities);
                    target_groups.set(post.target_groups);
                    age_from.set(post.age_from.map(|a| a.to_string()).unwrap_or_default());
                    age_to.set(post.age_to.map(|a| a.to_string()).unwrap_or_default());
                    grades.set(
                        post.grades
                            .iter()
                            .map(|g| g.to_string())
                            .collect::<Vec<_>>()
                            .join(", "),
                    );
                    genders.set(post.genders);
                    interest_ids.set(post.interests);
                    custom_values.set(post.custom_fields);
                    images.set(post.images);
                    loading.set(false);
                    load_comments(id);
                }
                Err(_) => {
                    blocking_alert("This post no longer exists.");
                    navigate.with_value(|nav| nav("/posts", Default::default()));
                }
            }
        });
    });

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(list) = list_clubs(None).await {
                clubs.set(list);
            }
        });
        spawn_local(async move {
            if let Ok(list) = list_municipalities().await {
                municipalities.set(list);
            }
        });
        spawn_local(async move {
            if let Ok(list) = list_groups().await {
                groups.set(list);
            }
        });
        spawn_local(async move {
            if let Ok(list) = list_interests().await {
                interests.set(list);
            }
        });
        spawn_local(async move {
            if let Ok(list) = list_custom_fields().await {
                custom_fields.set(list);
            }
        });
    });

    let toggle_id = move |list: RwSignal<Vec<i64>>, id: i64| {
        list.update(|ids| {
            if let Some(pos) = ids.iter().position(|&i| i == id) {
                ids.remove(pos);
            } else {
                ids.push(id);
            }
        });
    };

    let upload = move |ev: web_sys::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            spawn_local(async move {
                let Some((name, bytes)) = selected_file(&input).await else {
                    return;
                };
                match upload_post_image(name, bytes).await {
                    Ok(url) => images.update(|list| list.push(url)),
                    Err(e) => toaster.error(e.to_string()),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let submit = move |_| {
        let post_title = title.get_untracked().trim().to_string();
        if post_title.is_empty() {
            toaster.error("Title is required");
            return;
        }

        let parsed_grades = grades
            .get_untracked()
            .split(',')
            .filter_map(|g| g.trim().parse::<i32>().ok())
            .collect::<Vec<_>>();

        let payload = PostPayload {
            title: Some(post_title),
            content: Some(content.get_untracked()),
            post_type: PostType::from_query_value(&post_type.get_untracked()),
            status: PostStatus::from_query_value(&status.get_untracked()),
            is_global: Some(is_global.get_untracked()),
            target_municipalities: Some(target_municipalities.get_untracked()),
            target_clubs: Some(target_clubs.get_untracked()),
            target_groups: Some(target_groups.get_untracked()),
            age_from: age_from.get_untracked().parse().ok(),
            age_to: age_to.get_untracked().parse().ok(),
            grades: Some(parsed_grades),
            genders: Some(genders.get_untracked()),
            interests: Some(interest_ids.get_untracked()),
            custom_fields: Some(
                custom_values
                    .get_untracked()
                    .into_iter()
                    .filter(|(_, v)| !v.is_empty())
                    .collect(),
            ),
        };

        saving.set(true);
        spawn_local(async move {
            let result = match post_id.get_untracked() {
                Some(id) => update_post(id, payload).await.map(|_| ()),
                None => create_post(payload).await.map(|_| ()),
            };
            saving.set(false);
            match result {
                Ok(()) => {
                    toaster.success(if post_id.get_untracked().is_some() {
                        "Post updated"
                    } else {
                        "Post created"
                    });
                    navigate.with_value(|nav| nav("/posts", Default::default()));
                }
                Err(e) => toaster.error(e.to_string()),
            }
        });
    };

    let pending_comment = RwSignal::new(Option::<PostComment>::None);
    let comment_delete_open = RwSignal::new(false);
    let confirm_comment_delete = move || {
        let Some(comment) = pending_comment.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_post_comment(comment.id).await {
                Ok(()) => {
                    toaster.success("Comment deleted");
                    comment_delete_open.set(false);
                    pending_comment.set(None);
                    if let Some(id) = post_id.get_untracked() {
                        load_comments(id);
                    }
                }
                Err(e) => toaster.error(e.to_string()),
            }
        });
    };
    let comment_delete_message = Signal::derive(move || {
        pending_comment
            .get()
            .map(|comment| {
                let author = comment
                    .author_details
                    .as_ref()
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| "this member".to_string());
                format!("Delete the comment by {}?", author)
            })
            .unwrap_or_default()
    });

    view! {
        <div class="manager post-editor">
            <div class="manager-header">
                <h1>
                    {move || if post_id.get().is_some() { "Edit Post" } else { "New Post" }}
                </h1>
                <button
                    class="filter-clear"
                    on:click=move |_| navigate.with_value(|nav| nav("/posts", Default::default()))
                >
                    "Back to posts"
                </button>
            </div>

            <Show
                when=move || loading.get()
                fallback=move || {
                    view! {
                        <div class="editor-form">
                            <label>
                                "Title"
                                <input
                                    type="text"
                                    prop:value=move || title.get()
                                    on:input=move |ev| title.set(event_target_value(&ev))
                                />
                            </label>

                            <label>
                                "Content"
                                <textarea
                                    rows=10
                                    prop:value=move || content.get()
                                    on:input=move |ev| content.set(event_target_value(&ev))
                                ></textarea>
                            </label>

                            <div class="editor-row">
                                <label>
                                    "Type"
                                    <select
                                        prop:value=move || post_type.get()
                                        on:change=move |ev| post_type.set(event_target_value(&ev))
                                    >
                                        {PostType::ALL
                                            .into_iter()
                                            .map(|t| {
                                                view! {
                                                    <option value=t.as_query_value()>{t.label()}</option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </label>
                                <label>
                                    "Status"
                                    <select
                                        prop:value=move || status.get()
                                        on:change=move |ev| status.set(event_target_value(&ev))
                                    >
                                        {PostStatus::ALL
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <option value=s.as_query_value()>{s.label()}</option>
                                                }
                                            })
                                            .collect_view()}
                                    </select>
                                </label>
                            </div>

                            <fieldset class="editor-scope">
                                <legend>"Distribution"</legend>

                                // Global distribution is a super-admin call;
                                // the backend rejects it for everyone else
                                // anyway, this just hides the checkbox.
                                <Show when=move || role.get() == Some(Role::SuperAdmin)>
                                    <label class="filter-checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || is_global.get()
                                            on:change=move |ev| {
                                                is_global.set(event_target_checked(&ev))
                                            }
                                        />
                                        "Global (all clubs)"
                                    </label>
                                </Show>

                                <Show when=move || !is_global.get()>
                                    <div class="editor-targets">
                                        <div class="target-column">
                                            <span>"Clubs"</span>
                                            <For
                                                each=move || clubs.get()
                                                key=|c| c.id
                                                children=move |club: Club| {
                                                    let id = club.id;
                                                    view! {
                                                        <label class="filter-checkbox">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    target_clubs.get().contains(&id)
                                                                }
                                                                on:change=move |_| toggle_id(target_clubs, id)
                                                            />
                                                            {club.name.clone()}
                                                        </label>
                                                    }
                                                }
                                            />
                                        </div>
                                        <div class="target-column">
                                            <span>"Municipalities"</span>
                                            <For
                                                each=move || municipalities.get()
                                                key=|m| m.id
                                                children=move |municipality: Municipality| {
                                                    let id = municipality.id;
                                                    view! {
                                                        <label class="filter-checkbox">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    target_municipalities.get().contains(&id)
                                                                }
                                                                on:change=move |_| {
                                                                    toggle_id(target_municipalities, id)
                                                                }
                                                            />
                                                            {municipality.name.clone()}
                                                        </label>
                                                    }
                                                }
                                            />
                                        </div>
                                        <div class="target-column">
                                            <span>"Groups"</span>
                                            <For
                                                each=move || groups.get()
                                                key=|g| g.id
                                                children=move |group: Group| {
                                                    let id = group.id;
                                                    view! {
                                                        <label class="filter-checkbox">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=move || {
                                                                    target_groups.get().contains(&id)
                                                                }
                                                                on:change=move |_| toggle_id(target_groups, id)
                                                            />
                                                            {group.name.clone()}
                                                        </label>
                                                    }
                                                }
                                            />
                                        </div>
                                    </div>
                                </Show>
                            </fieldset>

                            <fieldset class="editor-audience">
                                <legend>"Audience"</legend>
                                <div class="editor-row">
                                    <label>
                                        "Age from"
                                        <input
                                            type="number"
                                            prop:value=move || age_from.get()
                                            on:input=move |ev| age_from.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label>
                                        "Age to"
                                        <input
                                            type="number"
                                            prop:value=move || age_to.get()
                                            on:input=move |ev| age_to.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <label>
                                        "Grades (comma separated)"
                                        <input
                                            type="text"
                                            prop:value=move || grades.get()
                                            on:input=move |ev| grades.set(event_target_value(&ev))
                                        />
                                    </label>
                                </div>

                                <div class="editor-row">
                                    {GENDERS
                                        .iter()
                                        .map(|(value, label)| {
                                            let value = value.to_string();
                                            let checked_value = value.clone();
                                            view! {
                                                <label class="filter-checkbox">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            genders.get().contains(&checked_value)
                                                        }
                                                        on:change=move |_| {
                                                            let value = value.clone();
                                                            genders
                                                                .update(|list| {
                                                                    if let Some(pos) = list
                                                                        .iter()
                                                                        .position(|g| *g == value)
                                                                    {
                                                                        list.remove(pos);
                                                                    } else {
                                                                        list.push(value);
                                                                    }
                                                                });
                                                        }
                                                    />
                                                    {*label}
                                                </label>
                                            }
                                        })
                                        .collect_view()}
                                </div>

                                <div class="editor-row">
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
                                                        on:change=move |_| toggle_id(interest_ids, id)
                                                    />
                                                    {interest.name.clone()}
                                                </label>
                                            }
                                        }
                                    />
                                </div>

                                <For
                                    each=move || custom_fields.get()
                                    key=|f| f.id
                                    children=move |field: CustomField| {
                                        let field_name = field.name.clone();
                                        let value_name = field.name.clone();
                                        view! {
                                            <label>
                                                {field.name.clone()}
                                                <input
                                                    type="text"
                                                    prop:value=move || {
                                                        custom_values
                                                            .get()
                                                            .get(&value_name)
                                                            .cloned()
                                                            .unwrap_or_default()
                                                    }
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        let key = field_name.clone();
                                                        custom_values
                                                            .update(|map| {
                                                                map.insert(key, value);
                                                            });
                                                    }
                                                />
                                            </label>
                                        }
                                    }
                                />
                            </fieldset>

                            <fieldset class="editor-images">
                                <legend>"Images"</legend>
                                <input type="file" accept="image/*" on:change=upload />
                                <For
                                    each=move || images.get()
                                    key=|url| url.clone()
                                    children=move |url: String| {
                                        let remove_url = url.clone();
                                        view! {
                                            <div class="image-row">
                                                <img src=url.clone() class="image-thumb" />
                                                <button
                                                    class="row-action row-action--danger"
                                                    on:click=move |_| {
                                                        let target = remove_url.clone();
                                                        images
                                                            .update(|list| {
                                                                list.retain(|existing| *existing != target)
                                                            });
                                                    }
                                                >
                                                    "Remove"
                                                </button>
                                            </div>
                                        }
                                    }
                                />
                            </fieldset>

                            <div class="editor-actions">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=saving
                                    on_click=submit
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save Post" }}
                                </Button>
                            </div>

                            <Show when=move || post_id.get().is_some()>
                                <div class="comments-panel">
                                    <h2>"Comments"</h2>
                                    <Show when=move || comments.get().is_empty()>
                                        <p class="empty-state">"No comments on this post."</p>
                                    </Show>
                                    <For
                                        each=move || comments.get()
                                        key=|comment| comment.id
                                        children=move |comment: PostComment| {
                                            let row_delete = comment.clone();
                                            let author = comment
                                                .author_details
                                                .as_ref()
                                                .map(|a| a.name.clone())
                                                .unwrap_or_else(|| "Unknown".to_string());
                                            let when = comment
                                                .created_at
                                                .map(short_datetime)
                                                .unwrap_or_default();
                                            view! {
                                                <div class="comment-row">
                                                    <div class="comment-meta">
                                                        <span class="comment-author">{author}</span>
                                                        <span class="comment-date">{when}</span>
                                                    </div>
                                                    <p class="comment-content">
                                                        {comment.content.clone()}
                                                    </p>
                                                    <button
                                                        class="row-action row-action--danger"
                                                        on:click=move |_| {
                                                            pending_comment.set(Some(row_delete.clone()));
                                                            comment_delete_open.set(true);
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            }
                                        }
                                    />
                                </div>
                            </Show>
                        </div>
                    }
                }
            >
                <div class="manager-loading">
                    <Spinner />
                    <p>"Loading post..."</p>
                </div>
            </Show>

            <ConfirmModal
                open=comment_delete_open
                title="Delete comment"
                message=comment_delete_message
                on_confirm=confirm_comment_delete
            />
        </div>
    }
}
