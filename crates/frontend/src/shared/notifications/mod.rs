use contracts::checklist::NotificationLevel;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Delay before a new notification slides in.
const SHOW_DELAY_MS: u32 = 100;
/// Time left for the hide transition before the element goes away.
const REMOVE_DELAY_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq)]
struct Notification {
    id: u64,
    level: NotificationLevel,
    message: String,
    shown: bool,
}

/// Transient messages shown in the corner of the page.
///
/// Every message dismisses itself after `dismiss_ms`.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
    dismiss_ms: u32,
}

impl NotificationService {
    pub fn new(dismiss_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            dismiss_ms,
        }
    }

    pub fn push(&self, level: NotificationLevel, message: &str) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push(Notification {
                id,
                level,
                message: message.to_string(),
                shown: false,
            })
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(SHOW_DELAY_MS).await;
            svc.set_shown(id, true);
            TimeoutFuture::new(svc.dismiss_ms).await;
            svc.set_shown(id, false);
            TimeoutFuture::new(REMOVE_DELAY_MS).await;
            svc.items.update(|items| items.retain(|n| n.id != id));
        });
    }

    fn set_shown(&self, id: u64, shown: bool) {
        self.items.update(|items| {
            if let Some(n) = items.iter_mut().find(|n| n.id == id) {
                n.shown = shown;
            }
        });
    }

    fn class_of(&self, id: u64) -> String {
        self.items.with(|items| {
            items
                .iter()
                .find(|n| n.id == id)
                .map(|n| {
                    let show = if n.shown { " show" } else { "" };
                    format!("notification notification--{}{}", n.level.as_str(), show)
                })
                .unwrap_or_default()
        })
    }
}

/// Renders the notification stack.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>().expect("NotificationService not provided");

    view! {
        <div id="notificationContainer" class="notification-container" aria-live="polite">
            <For
                each=move || svc.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=move || svc.class_of(id)>{n.message}</div>
                    }
                }
            />
        </div>
    }
}
