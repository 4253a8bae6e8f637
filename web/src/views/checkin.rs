use crate::checkin::state::{invalid_qr_message, transition, ScanEvent, ScannerState};
use crate::server_visits::checkin_scan;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::CheckinOutcome;
use std::time::Duration;
use thaw::*;

/// Element the scanner library mounts its camera preview into.
const SCANNER_ELEMENT_ID: &str = "qr-reader";

/// How long an unclassified error stays on screen before the kiosk reloads
/// itself back into scanning.
const ERROR_RELOAD_DELAY_MS: u64 = 4000;

/// Wires the html5-qrcode library to a Rust callback. The library calls
/// `window.__klubbOnScan(text)` once per decoded frame; the page-level state
/// machine decides whether the decode is acted on.
#[cfg(feature = "hydrate")]
fn start_scanner(on_decode: impl Fn(String) + 'static) {
    use wasm_bindgen::prelude::*;

    let callback = Closure::wrap(Box::new(on_decode) as Box<dyn Fn(String)>);
    let window = web_sys::window().expect("no global `window` exists");
    let _ = js_sys::Reflect::set(
        &window,
        &JsValue::from_str("__klubbOnScan"),
        callback.as_ref(),
    );
    callback.forget();

    let js_code = format!(
        r#"(function() {{
            function boot() {{
                const scanner = new Html5Qrcode('{id}');
                scanner.start(
                    {{ facingMode: 'environment' }},
                    {{ fps: 10, qrbox: {{ width: 250, height: 250 }} }},
                    (decodedText) => {{
                        if (window.__klubbOnScan) {{
                            window.__klubbOnScan(decodedText);
                        }}
                    }},
                    () => {{}}
                );
            }}
            if (typeof Html5Qrcode !== 'undefined') {{
                boot();
            }} else {{
                const script = document.createElement('script');
                script.src = 'https://unpkg.com/html5-qrcode@2.3.8/html5-qrcode.min.js';
                script.onload = boot;
                document.body.appendChild(script);
            }}
        }})();"#,
        id = SCANNER_ELEMENT_ID
    );
    let _ = js_sys::eval(&js_code);
}

/// The camera stream cannot be re-armed in place after the library stops it,
/// so dismissing a result reloads the page back into `Scanning`.
fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

#[component]
pub fn CheckinScanner() -> impl IntoView {
    let state = RwSignal::new(ScannerState::Scanning);

    let handle_decode = move |code: String| {
        let next = transition(&state.get_untracked(), ScanEvent::QrDecoded);
        if next == state.get_untracked() {
            return;
        }
        state.set(next);

        spawn_local(async move {
            let outcome = match checkin_scan(code).await {
                Ok(outcome) => outcome,
                Err(e) => CheckinOutcome::Error {
                    message: e.to_string(),
                },
            };
            state.set(transition(&state.get_untracked(), ScanEvent::Outcome(outcome)));
        });
    };

    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        start_scanner(handle_decode);
        #[cfg(not(feature = "hydrate"))]
        let _ = handle_decode;
    });

    Effect::new(move |_| {
        if state.get().auto_reloads() {
            set_timeout(reload_page, Duration::from_millis(ERROR_RELOAD_DELAY_MS));
        }
    });

    let result_view = move || match state.get() {
        ScannerState::Scanning | ScannerState::Processing => None,
        ScannerState::Success {
            member_name,
            club_name,
        } => Some(view! {
            <div class="scan-result scan-result--success">
                <h2>"Welcome!"</h2>
                <p class="scan-member">{member_name}</p>
                <p>{format!("Checked in at {}", club_name)}</p>
            </div>
        }
        .into_any()),
        ScannerState::Closed { next_opening } => Some(view! {
            <div class="scan-result scan-result--closed">
                <h2>"The club is closed"</h2>
                <p>
                    {match next_opening {
                        Some(next) => format!("Next opening: {}", next),
                        None => "No upcoming opening hours are scheduled.".to_string(),
                    }}
                </p>
            </div>
        }
        .into_any()),
        ScannerState::ClubNotFound => Some(view! {
            <div class="scan-result scan-result--error">
                <h2>"Club not found"</h2>
                <p>"This QR code does not belong to any club on the platform."</p>
            </div>
        }
        .into_any()),
        ScannerState::InvalidQr { message } => Some(view! {
            <div class="scan-result scan-result--error">
                <h2>"Invalid QR code"</h2>
                <p>{invalid_qr_message(&message)}</p>
            </div>
        }
        .into_any()),
        ScannerState::GenericError { message } => Some(view! {
            <div class="scan-result scan-result--error">
                <h2>"Something went wrong"</h2>
                <p>{message}</p>
            </div>
        }
        .into_any()),
    };

    view! {
        <div class="checkin-page">
            <h1>"Check-in"</h1>
            <p class="checkin-hint">"Point the camera at a member's QR code."</p>

            <div id=SCANNER_ELEMENT_ID class="qr-reader"></div>

            <Show when=move || state.get() == ScannerState::Processing>
                <div class="checkin-processing">
                    <Spinner size=SpinnerSize::Large />
                    <p>"Checking in..."</p>
                </div>
            </Show>

            <Show when=move || state.get().is_terminal()>
                <div class="modal-backdrop">
                    <div class="modal-container scan-modal">
                        {result_view}
                        <div class="modal-actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| reload_page()
                            >
                                "Scan next"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
