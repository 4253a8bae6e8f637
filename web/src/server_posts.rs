use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{Post, PostComment, PostPayload};

#[cfg(feature = "ssr")]
use crate::api::client;
#[cfg(feature = "ssr")]
use crate::api::pagination::TABLE_PAGE_SIZE;

/// Server-supported post filters. The computed "scope" filter is not here on
/// purpose: it is derived from `is_global` plus the target relations, so the
/// posts manager switches to full-scan mode when it is active.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PostQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub post_type: Option<String>,
}

#[cfg(feature = "ssr")]
impl PostQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|v| !v.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(status) = self.status.as_deref().filter(|v| !v.is_empty()) {
            params.push(("status", status.to_string()));
        }
        if let Some(post_type) = self.post_type.as_deref().filter(|v| !v.is_empty()) {
            params.push(("type", post_type.to_string()));
        }
        params
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub count: u64,
}

#[server]
pub async fn list_posts_page(query: PostQuery, page: u64) -> Result<PostPage, ServerFnError> {
    let result = client::list_page::<Post>("/posts/", page, TABLE_PAGE_SIZE, &query.to_params())
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch posts: {}", e)))?;
    Ok(PostPage {
        posts: result.items,
        count: result.count,
    })
}

/// Full scan for scope filtering, which the backend cannot evaluate.
#[server]
pub async fn list_all_posts(query: PostQuery) -> Result<Vec<Post>, ServerFnError> {
    client::list_all::<Post>("/posts/", &query.to_params())
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch posts: {}", e)))
}

#[server]
pub async fn get_post(post_id: i64) -> Result<Post, ServerFnError> {
    client::get_one::<Post>(&format!("/posts/{}/", post_id))
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch post: {}", e)))
}

#[server]
pub async fn create_post(payload: PostPayload) -> Result<Post, ServerFnError> {
    client::create::<Post, _>("/posts/", &payload)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to create post: {}", e)))
}

#[server]
pub async fn update_post(post_id: i64, payload: PostPayload) -> Result<Post, ServerFnError> {
    client::patch::<Post, _>(&format!("/posts/{}/", post_id), &payload)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to update post: {}", e)))
}

#[server]
pub async fn delete_post(post_id: i64) -> Result<(), ServerFnError> {
    client::delete(&format!("/posts/{}/", post_id))
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete post: {}", e)))
}

#[server]
pub async fn list_post_comments(post_id: i64) -> Result<Vec<PostComment>, ServerFnError> {
    let params = vec![("post", post_id.to_string())];
    client::list_all::<PostComment>("/post-comments/", &params)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch comments: {}", e)))
}

#[server]
pub async fn delete_post_comment(comment_id: i64) -> Result<(), ServerFnError> {
    client::delete(&format!("/post-comments/{}/", comment_id))
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete comment: {}", e)))
}

/// Multipart image upload; returns the stored image URL.
#[server]
pub async fn upload_post_image(file_name: String, data: Vec<u8>) -> Result<String, ServerFnError> {
    let body = client::upload_file("/posts/images/", "image", file_name, data)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to upload image: {}", e)))?;
    body.get("url")
        .and_then(|url| url.as_str())
        .map(str::to_string)
        .ok_or_else(|| ServerFnError::new("Upload response did not include a URL".to_string()))
}
