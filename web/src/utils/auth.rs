use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use shared_types::Role;

use super::storage::local_get;

pub const AUTH_TOKEN_KEY: &str = "klubb_auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Claims {
    role: Role,
}

/// Role of the signed-in admin, taken from the JWT payload in localStorage.
/// The payload is only decoded, never verified. The backend enforces the
/// real permissions; this only drives UI gating like hiding the global
/// post scope from non-super admins.
pub fn get_authenticated_role() -> Option<Role> {
    let token = local_get(AUTH_TOKEN_KEY)?;
    decode_jwt_claims(&token).map(|claims| claims.role)
}

/// Hook form: resolves after hydration, `None` during SSR.
pub fn use_authenticated_role() -> Signal<Option<Role>> {
    let role = RwSignal::new(None::<Role>);

    Effect::new(move |_| {
        role.set(get_authenticated_role());
    });

    role.into()
}

/// Decodes the JWT payload (second segment) without verifying the signature.
fn decode_jwt_claims(token: &str) -> Option<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload = parts[1];

    // Add padding if needed for base64 decoding
    let padded_payload = match payload.len() % 4 {
        2 => format!("{}==", payload),
        3 => format!("{}=", payload),
        _ => payload.to_string(),
    };

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            // atob throws on malformed base64, hence the catch.
            #[wasm_bindgen(js_name = atob, catch)]
            fn base64_decode(data: &str) -> Result<String, JsValue>;
        }

        if let Ok(decoded) = base64_decode(&padded_payload) {
            if let Ok(claims) = serde_json::from_str::<Claims>(&decoded) {
                return Some(claims);
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = padded_payload;
    }

    None
}
