//! Transient success/error notifications.
//!
//! Provided once via context from `App`; any view model can push a toast.
//! Toasts auto-dismiss after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.toasts.update(|t| t.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|t| t.retain(|x| x.id != id));
        });
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService context not found");

    view! {
        <div class="toast-host">
            <For
                each=move || service.toasts().get()
                key=|t| t.id
                children=move |toast: Toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! { <div class=class>{toast.message}</div> }
                }
            />
        </div>
    }
}
