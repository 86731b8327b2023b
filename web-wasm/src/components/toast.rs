//! 画面上部に一定時間だけ出る通知

use gloo::timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Warning => "toast toast-warning",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    level: ToastLevel,
    text: String,
}

/// 通知キュー（contextで共有）
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, level: ToastLevel, text: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                level,
                text: text.into(),
            })
        });

        let items = self.items;
        Timeout::new(TOAST_DURATION_MS, move || {
            items.update(|v| v.retain(|t| t.id != id));
        })
        .forget();
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastLevel::Success, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(ToastLevel::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(ToastLevel::Error, text);
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=|toast| view! { <div class=toast.level.class()>{toast.text}</div> }
            />
        </div>
    }
}
