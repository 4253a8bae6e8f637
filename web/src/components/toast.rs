use leptos::prelude::*;
use std::time::Duration;

const TOAST_DISMISS_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// App-wide toast queue. Provided once at the root; any manager can push
/// success/error notifications after a mutation.
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<ToastMessage>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastKind::Error, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(ToastMessage { id, kind, text });
        });

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|list| list.retain(|toast| toast.id != id));
            },
            Duration::from_millis(TOAST_DISMISS_MS),
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|toast| toast.id != id));
    }
}

pub fn provide_toaster() {
    provide_context(Toaster {
        toasts: RwSignal::new(Vec::new()),
        next_id: RwSignal::new(0),
    });
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts;

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: ToastMessage| {
                    let id = toast.id;
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=kind_class on:click=move |_| toaster.dismiss(id)>
                            <span class="toast-text">{toast.text.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
