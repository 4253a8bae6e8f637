use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{
    Club, ClubPayload, Country, CustomField, Group, Interest, Municipality, Tag, User, UserPayload,
};

#[cfg(feature = "ssr")]
use crate::api::client;
#[cfg(feature = "ssr")]
use crate::api::pagination::TABLE_PAGE_SIZE;

/// Server-supported user list filters, mirroring the URL query keys.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UserQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub assigned_municipality: Option<String>,
    pub assigned_club: Option<String>,
    pub legal_gender: Option<String>,
    pub verification_status: Option<String>,
    pub age_from: Option<String>,
    pub age_to: Option<String>,
    pub grade_from: Option<String>,
    pub grade_to: Option<String>,
    pub interest: Option<String>,
    pub birthday_today: Option<String>,
}

#[cfg(feature = "ssr")]
impl UserQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let mut push = |key: &'static str, value: &Option<String>| {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.push((key, value.to_string()));
            }
        };
        push("search", &self.search);
        push("role", &self.role);
        push("assigned_municipality", &self.assigned_municipality);
        push("assigned_club", &self.assigned_club);
        push("legal_gender", &self.legal_gender);
        push("verification_status", &self.verification_status);
        push("age_from", &self.age_from);
        push("age_to", &self.age_to);
        push("grade_from", &self.grade_from);
        push("grade_to", &self.grade_to);
        push("interest", &self.interest);
        push("birthday_today", &self.birthday_today);
        params
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub count: u64,
}

#[server]
pub async fn list_users_page(query: UserQuery, page: u64) -> Result<UserPage, ServerFnError> {
    let result = client::list_page::<User>("/users/", page, TABLE_PAGE_SIZE, &query.to_params())
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch users: {}", e)))?;
    Ok(UserPage {
        users: result.items,
        count: result.count,
    })
}

/// Drains the whole user collection for the analytics panel and any filter
/// the backend cannot evaluate.
#[server]
pub async fn list_all_users(query: UserQuery) -> Result<Vec<User>, ServerFnError> {
    client::list_all::<User>("/users/", &query.to_params())
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch users: {}", e)))
}

#[server]
pub async fn create_user(payload: UserPayload) -> Result<User, ServerFnError> {
    client::create::<User, _>("/users/", &payload)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to create user: {}", e)))
}

#[server]
pub async fn update_user(user_id: i64, payload: UserPayload) -> Result<User, ServerFnError> {
    client::patch::<User, _>(&format!("/users/{}/", user_id), &payload)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to update user: {}", e)))
}

#[server]
pub async fn delete_user(user_id: i64) -> Result<(), ServerFnError> {
    client::delete(&format!("/users/{}/", user_id))
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete user: {}", e)))
}

/// Small type-ahead search used when picking a member for a booking.
#[server]
pub async fn search_users(search: String) -> Result<Vec<User>, ServerFnError> {
    let params = vec![("search", search)];
    let result = client::list_page::<User>("/users/", 1, 10, &params)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to search users: {}", e)))?;
    Ok(result.items)
}

#[server]
pub async fn list_clubs(search: Option<String>) -> Result<Vec<Club>, ServerFnError> {
    let mut params = Vec::new();
    if let Some(search) = search.filter(|s| !s.is_empty()) {
        params.push(("search", search));
    }
    client::list_all::<Club>("/clubs/", &params)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch clubs: {}", e)))
}

#[server]
pub async fn create_club(payload: ClubPayload) -> Result<Club, ServerFnError> {
    client::create::<Club, _>("/clubs/", &payload)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to create club: {}", e)))
}

#[server]
pub async fn update_club(club_id: i64, payload: ClubPayload) -> Result<Club, ServerFnError> {
    client::patch::<Club, _>(&format!("/clubs/{}/", club_id), &payload)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to update club: {}", e)))
}

#[server]
pub async fn delete_club(club_id: i64) -> Result<(), ServerFnError> {
    client::delete(&format!("/clubs/{}/", club_id))
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete club: {}", e)))
}

#[server]
pub async fn list_municipalities() -> Result<Vec<Municipality>, ServerFnError> {
    client::list_all::<Municipality>("/municipalities/", &[])
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch municipalities: {}", e)))
}

#[server]
pub async fn create_municipality(
    name: String,
    country: Option<i64>,
) -> Result<Municipality, ServerFnError> {
    let body = serde_json::json!({ "name": name, "country": country });
    client::create::<Municipality, _>("/municipalities/", &body)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to create municipality: {}", e)))
}

#[server]
pub async fn update_municipality(
    municipality_id: i64,
    name: String,
    country: Option<i64>,
) -> Result<Municipality, ServerFnError> {
    let body = serde_json::json!({ "name": name, "country": country });
    client::patch::<Municipality, _>(&format!("/municipalities/{}/", municipality_id), &body)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to update municipality: {}", e)))
}

#[server]
pub async fn delete_municipality(municipality_id: i64) -> Result<(), ServerFnError> {
    client::delete(&format!("/municipalities/{}/", municipality_id))
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete municipality: {}", e)))
}

#[server]
pub async fn list_countries() -> Result<Vec<Country>, ServerFnError> {
    client::list_all::<Country>("/countries/", &[])
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch countries: {}", e)))
}

#[server]
pub async fn list_tags() -> Result<Vec<Tag>, ServerFnError> {
    client::list_all::<Tag>("/news_tags/", &[])
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch tags: {}", e)))
}

#[server]
pub async fn create_tag(name: String, color: Option<String>) -> Result<Tag, ServerFnError> {
    let body = serde_json::json!({ "name": name, "color": color });
    client::create::<Tag, _>("/news_tags/", &body)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to create tag: {}", e)))
}

#[server]
pub async fn update_tag(
    tag_id: i64,
    name: String,
    color: Option<String>,
) -> Result<Tag, ServerFnError> {
    let body = serde_json::json!({ "name": name, "color": color });
    client::patch::<Tag, _>(&format!("/news_tags/{}/", tag_id), &body)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to update tag: {}", e)))
}

#[server]
pub async fn delete_tag(tag_id: i64) -> Result<(), ServerFnError> {
    client::delete(&format!("/news_tags/{}/", tag_id))
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete tag: {}", e)))
}

#[server]
pub async fn list_interests() -> Result<Vec<Interest>, ServerFnError> {
    client::list_all::<Interest>("/interests/", &[])
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch interests: {}", e)))
}

#[server]
pub async fn list_groups() -> Result<Vec<Group>, ServerFnError> {
    client::list_all::<Group>("/groups/", &[])
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch groups: {}", e)))
}

#[server]
pub async fn list_custom_fields() -> Result<Vec<CustomField>, ServerFnError> {
    client::list_all::<CustomField>("/custom-fields/", &[])
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch custom fields: {}", e)))
}
