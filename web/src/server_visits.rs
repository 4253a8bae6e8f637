use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{CheckinOutcome, Visit};

#[cfg(feature = "ssr")]
use crate::api::client;
#[cfg(feature = "ssr")]
use crate::api::pagination::TABLE_PAGE_SIZE;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VisitQuery {
    pub search: Option<String>,
    pub club: Option<String>,
    pub date: Option<String>,
}

#[cfg(feature = "ssr")]
impl VisitQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = self.search.as_deref().filter(|v| !v.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(club) = self.club.as_deref().filter(|v| !v.is_empty()) {
            params.push(("club", club.to_string()));
        }
        if let Some(date) = self.date.as_deref().filter(|v| !v.is_empty()) {
            params.push(("date", date.to_string()));
        }
        params
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VisitPage {
    pub visits: Vec<Visit>,
    pub count: u64,
}

#[server]
pub async fn list_visits_page(query: VisitQuery, page: u64) -> Result<VisitPage, ServerFnError> {
    let result =
        client::list_page::<Visit>("/visits/history/", page, TABLE_PAGE_SIZE, &query.to_params())
            .await
            .map_err(|e| ServerFnError::new(format!("Failed to fetch visits: {}", e)))?;
    Ok(VisitPage {
        visits: result.items,
        count: result.count,
    })
}

/// Runs a QR check-in. Always `Ok` for classified outcomes; only transport
/// failures surface as errors so the scanner can show its generic toast.
#[server]
pub async fn checkin_scan(code: String) -> Result<CheckinOutcome, ServerFnError> {
    client::scan_checkin(code)
        .await
        .map_err(|e| ServerFnError::new(format!("Check-in request failed: {}", e)))
}
