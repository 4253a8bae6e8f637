use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

use shared_types::CheckinOutcome;

use super::error::{extract_error_message, ApiError};
use super::pagination::{parse_collection, CollectionPage, ScanCursor, SCAN_PAGE_SIZE};
use crate::checkin::state::invalid_qr_message;

static API: OnceLock<ApiHandle> = OnceLock::new();

struct ApiHandle {
    client: Client,
    base_url: String,
}

/// Reads `KLUBB_API_URL` once and builds the shared HTTP client. Call from
/// `main` before serving.
pub fn init_client() -> Result<(), ApiError> {
    let base_url = std::env::var("KLUBB_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000/api".to_string());

    let handle = ApiHandle {
        client: Client::new(),
        base_url: base_url.trim_end_matches('/').to_string(),
    };

    API.set(handle)
        .map_err(|_| ApiError::Config("API client already initialized".to_string()))
}

fn handle() -> &'static ApiHandle {
    API.get()
        .expect("API client not initialized. Call init_client() first.")
}

async fn send(
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&Value>,
) -> Result<(StatusCode, String), ApiError> {
    let api = handle();
    let url = format!("{}{}", api.base_url, path);
    tracing::debug!(%method, %url, "backend request");

    let mut request = api.client.request(method, &url).query(query);
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok((status, text))
}

/// Sends and maps non-2xx responses through the error-message fallback chain.
async fn send_checked(
    method: Method,
    path: &str,
    query: &[(&str, String)],
    body: Option<&Value>,
) -> Result<String, ApiError> {
    let (status, text) = send(method, path, query, body).await?;
    if status.is_success() {
        return Ok(text);
    }
    let message = extract_error_message(&text)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    tracing::warn!(status = status.as_u16(), %path, %message, "backend error");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

fn decode_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

pub async fn get_one<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let text = send_checked(Method::GET, path, &[], None).await?;
    Ok(serde_json::from_str(&text)?)
}

/// Server-side pagination: one page, trusting the envelope's `count`/`next`.
pub async fn list_page<T: DeserializeOwned>(
    path: &str,
    page: u64,
    page_size: u64,
    filters: &[(&str, String)],
) -> Result<CollectionPage<T>, ApiError> {
    let mut query: Vec<(&str, String)> = filters.to_vec();
    query.push(("page", page.to_string()));
    query.push(("page_size", page_size.to_string()));

    let text = send_checked(Method::GET, path, &query, None).await?;
    let body = decode_body(&text)?;
    parse_collection(body).map_err(|e| {
        tracing::warn!(%path, error = %e, "unexpected collection shape");
        e.into()
    })
}

/// Full-scan mode: drains every page of a collection so the caller can
/// filter/aggregate in memory. `ScanCursor` owns the stop decision.
pub async fn list_all<T: DeserializeOwned>(
    path: &str,
    filters: &[(&str, String)],
) -> Result<Vec<T>, ApiError> {
    let mut cursor = ScanCursor::new();
    let mut all: Vec<T> = Vec::new();

    loop {
        let page: CollectionPage<T> = list_page(
            path,
            cursor.page as u64,
            SCAN_PAGE_SIZE as u64,
            filters,
        )
        .await?;
        let keep_going = cursor.advance(&page);
        all.extend(page.items);
        if !keep_going {
            break;
        }
    }

    tracing::debug!(%path, records = all.len(), pages = cursor.page, "collection drained");
    Ok(all)
}

pub async fn create<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_value(body)?;
    let text = send_checked(Method::POST, path, &[], Some(&body)).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn patch<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let body = serde_json::to_value(body)?;
    let text = send_checked(Method::PATCH, path, &[], Some(&body)).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send_checked(Method::DELETE, path, &[], None).await?;
    Ok(())
}

/// POST to an action sub-path (`/approve/`, `/reject/`, `/cancel/`) with an
/// optional JSON body.
pub async fn post_action(path: &str, body: Option<Value>) -> Result<(), ApiError> {
    send_checked(Method::POST, path, &[], body.as_ref()).await?;
    Ok(())
}

/// Multipart upload for post images.
pub async fn upload_file(
    path: &str,
    field: &str,
    file_name: String,
    bytes: Vec<u8>,
) -> Result<Value, ApiError> {
    let api = handle();
    let url = format!("{}{}", api.base_url, path);

    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new().part(field.to_string(), part);

    let response = api
        .client
        .post(&url)
        .multipart(form)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !status.is_success() {
        let message = extract_error_message(&text)
            .unwrap_or_else(|| format!("Upload failed with status {}", status.as_u16()));
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }
    decode_body(&text)
}

#[derive(serde::Deserialize)]
struct ScanResponse {
    #[serde(default)]
    member_name: Option<String>,
    #[serde(default)]
    club_name: Option<String>,
}

#[derive(serde::Deserialize, Default)]
struct ClosedBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    next_opening: Option<String>,
}

/// Runs a QR check-in and classifies the response into a `CheckinOutcome`.
/// Only transport failures surface as `Err`; every HTTP status maps to an
/// outcome the scanner state machine understands.
pub async fn scan_checkin(code: String) -> Result<CheckinOutcome, ApiError> {
    let body = serde_json::json!({ "code": code });
    let (status, text) = send(Method::POST, "/visits/scan/", &[], Some(&body)).await?;

    if status.is_success() {
        let parsed: ScanResponse = serde_json::from_str(&text).unwrap_or(ScanResponse {
            member_name: None,
            club_name: None,
        });
        return Ok(CheckinOutcome::Success {
            member_name: parsed.member_name.unwrap_or_else(|| "Member".to_string()),
            club_name: parsed.club_name.unwrap_or_else(|| "the club".to_string()),
        });
    }

    let outcome = match status {
        StatusCode::BAD_REQUEST => {
            let raw = extract_error_message(&text).unwrap_or_default();
            CheckinOutcome::InvalidQr {
                message: invalid_qr_message(&raw),
            }
        }
        StatusCode::NOT_FOUND => CheckinOutcome::ClubNotFound,
        StatusCode::FORBIDDEN => {
            let parsed: ClosedBody = serde_json::from_str(&text).unwrap_or_default();
            let structured_closed = parsed.code.as_deref() == Some("CLUB_CLOSED")
                || parsed.next_opening.is_some();
            if structured_closed {
                CheckinOutcome::ClubClosed {
                    next_opening: parsed.next_opening,
                }
            } else if text.trim().is_empty() {
                // The backend sometimes answers a closed club with a bare
                // 403. Treat it as closed, but log it: it can also mask a
                // real permission error.
                tracing::warn!("empty 403 from /visits/scan/, assuming club closed");
                CheckinOutcome::ClubClosed { next_opening: None }
            } else {
                CheckinOutcome::Error {
                    message: extract_error_message(&text)
                        .unwrap_or_else(|| "Check-in was not permitted".to_string()),
                }
            }
        }
        other => CheckinOutcome::Error {
            message: extract_error_message(&text)
                .unwrap_or_else(|| format!("Check-in failed with status {}", other.as_u16())),
        },
    };
    Ok(outcome)
}
