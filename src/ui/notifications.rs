//! Toast notifications
//!
//! Transient notices shown in the top-right corner: gateway errors, action
//! confirmations. The context is installed at the app root so the HTTP
//! layer's presentation hooks can push into it from anywhere.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::ui::icon::{Icon, icons};

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// How long a toast stays up before auto-dismissing
const AUTO_DISMISS_MS: u32 = 6_000;

/// Kind of notice, drives color and icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A single toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Reactive notification queue provided at the app root.
#[derive(Clone, Copy)]
pub struct NotificationContext {
    notices: RwSignal<VecDeque<Notice>>,
    next_id: StoredValue<u64>,
}

/// Append a notice, dropping the oldest entries beyond the cap.
fn push_notice(queue: &mut VecDeque<Notice>, notice: Notice) {
    queue.push_back(notice);
    while queue.len() > MAX_NOTIFICATIONS {
        queue.pop_front();
    }
}

impl NotificationContext {
    pub fn push(&self, kind: NoticeKind, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let notice = Notice {
            id,
            kind,
            message: message.into(),
        };
        self.notices.update(|queue| push_notice(queue, notice));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|queue| {
            queue.retain(|notice| notice.id != id);
        });
    }
}

/// Provide the notification context to the component tree
pub fn provide_notification_context() -> NotificationContext {
    let ctx = NotificationContext {
        notices: RwSignal::new(VecDeque::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(ctx);
    ctx
}

/// Get the notification context from the component tree
pub fn use_notifications() -> NotificationContext {
    expect_context::<NotificationContext>()
}

/// Notifications container component, placed once at the app root.
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let ctx = use_notifications();

    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                ctx.notices.get().into_iter().map(|notice| {
                    view! {
                        <NotificationToast notice=notice />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast with auto-dismiss.
#[component]
fn NotificationToast(notice: Notice) -> impl IntoView {
    let ctx = use_notifications();
    let id = notice.id;

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            ctx.dismiss(id);
        });
    }

    let (border_class, icon_class, icon_name) = match notice.kind {
        NoticeKind::Success => ("border-green-500/30", "text-green-400", icons::CHECK),
        NoticeKind::Error => ("border-red-500/30", "text-red-400", icons::WARNING),
        NoticeKind::Info => ("border-blue-500/30", "text-blue-400", icons::TICKET),
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border bg-theme-secondary backdrop-blur-sm shadow-lg {}",
        border_class
    );

    view! {
        <div class=container_class>
            <div class=icon_class>
                <Icon name=icon_name class="w-5 h-5" />
            </div>
            <p class="flex-1 min-w-0 text-sm text-theme-primary">{notice.message.clone()}</p>
            <button
                class="text-theme-tertiary hover:text-theme-primary transition-colors"
                on:click=move |_| ctx.dismiss(id)
            >
                <Icon name=icons::X class="w-4 h-4" />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u64, message: &str) -> Notice {
        Notice {
            id,
            kind: NoticeKind::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn queue_is_capped_and_drops_oldest() {
        let mut queue = VecDeque::new();
        for i in 0..(MAX_NOTIFICATIONS as u64 + 2) {
            push_notice(&mut queue, notice(i, &format!("n{i}")));
        }

        assert_eq!(queue.len(), MAX_NOTIFICATIONS);
        assert_eq!(queue.front().map(|n| n.message.as_str()), Some("n2"));
        assert_eq!(queue.back().map(|n| n.message.as_str()), Some("n6"));
    }

    #[test]
    fn ids_stay_in_arrival_order() {
        let mut queue = VecDeque::new();
        push_notice(&mut queue, notice(0, "boom"));
        push_notice(&mut queue, notice(1, "ok"));

        queue.retain(|n| n.id != 0);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.front().map(|n| n.message.as_str()), Some("ok"));
    }
}
