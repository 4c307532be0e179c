//! Toast notifications

use leptos::*;
use mediscan_core::{Notification, NotificationLevel};
use std::time::Duration;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// App-wide notification stack, shared through context
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn push(self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => tracing::info!(text = %notification, "toast"),
            NotificationLevel::Error => tracing::warn!(text = %notification, "toast"),
        }

        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        if let Err(err) = set_timeout_with_handle(move || self.dismiss(id), TOAST_LIFETIME) {
            tracing::error!(?err, "failed to schedule toast dismissal");
        }
    }

    pub fn dismiss(self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let (style, icon) = match toast.notification.level {
                        NotificationLevel::Success => ("bg-green-50 border-green-200 text-green-800", "✓"),
                        NotificationLevel::Error => ("bg-red-50 border-red-200 text-red-800", "✕"),
                    };
                    view! {
                        <div
                            class=format!("flex items-center gap-2 p-4 rounded-lg border shadow-lg cursor-pointer {}", style)
                            on:click=move |_| toaster.dismiss(id)
                        >
                            <span class="font-bold">{icon}</span>
                            <span class="text-sm font-medium">{toast.notification.message.to_string()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
