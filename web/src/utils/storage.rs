/// localStorage wrappers. Browser-only; on the server both are no-ops so
/// SSR renders fall back to defaults until hydration.

pub fn local_get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn getItem(key: &str) -> Option<String>;
        }

        return getItem(key).filter(|v| !v.is_empty());
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

pub fn local_set(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn setItem(key: &str, value: &str);
        }

        setItem(key, value);
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn local_remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = localStorage)]
            fn removeItem(key: &str);
        }

        removeItem(key);
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

/// Last-selected resource filter on the booking calendar, persisted across
/// reloads (one key per calendar scope).
pub fn calendar_resource_key(scope: &str) -> String {
    format!("klubb_calendar_resource_{}", scope)
}
