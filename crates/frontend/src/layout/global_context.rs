use chrono::{DateTime, Utc};
use contracts::checklist::{
    AppEvent, Checklist, ChecklistConfig, ControlSurface, FormControl, Host, NotificationLevel,
    Notifier, SectionId, Shortcut,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, KeyboardEvent, VisibilityState};

use crate::shared::browser::{BrowserControl, BrowserDom, BrowserSessionStore, BrowserTimer};
use crate::shared::date_utils;
use crate::shared::export;
use crate::shared::notifications::NotificationService;

pub type BrowserChecklist = Checklist<BrowserSessionStore, BrowserTimer>;

/// Progress figures rendered by the layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChecklistStatus {
    pub completed: Vec<SectionId>,
    pub progress: f64,
    pub last_saved: Option<String>,
}

impl ChecklistStatus {
    fn of(app: &BrowserChecklist) -> Self {
        let state = app.state();
        Self {
            completed: SectionId::ALL
                .into_iter()
                .filter(|id| state.is_completed(*id))
                .collect(),
            progress: state.progress_percent(),
            last_saved: state.last_saved.clone(),
        }
    }
}

/// The one running checklist, shared with every component through context.
#[derive(Clone, Copy)]
pub struct ChecklistContext {
    app: StoredValue<BrowserChecklist, LocalStorage>,
    pub status: RwSignal<ChecklistStatus>,
    pub saved_feedback: RwSignal<bool>,
    pub notifications: NotificationService,
}

impl ChecklistContext {
    pub fn new(config: ChecklistConfig) -> Self {
        let notifications = NotificationService::new(config.notifications.dismiss_ms);
        Self {
            app: StoredValue::new_local(Checklist::new(config, BrowserSessionStore::open())),
            status: RwSignal::new(ChecklistStatus::default()),
            saved_feedback: RwSignal::new(false),
            notifications,
        }
    }

    /// Run once the checklist markup is mounted.
    pub fn start(&self) {
        let Some(mut dom) = BrowserDom::current() else {
            log::error!("No document, checklist not started");
            return;
        };

        let today = date_utils::today_iso();
        for field in dom.controls_named("completionDate") {
            field.set_text(&today);
        }

        let mut host = BrowserHost { ctx: *self };
        let status = self.app.try_update_value(|app| {
            app.start(&mut dom, &mut host);
            ChecklistStatus::of(app)
        });
        if let Some(status) = status {
            self.status.set(status);
        }

        self.install_page_listeners();
    }

    /// Hand one event to the checklist and refresh the status.
    pub fn dispatch(&self, event: AppEvent<BrowserControl>) {
        let Some(mut dom) = BrowserDom::current() else {
            return;
        };
        let mut host = BrowserHost { ctx: *self };
        let status = self.app.try_update_value(|app| {
            app.dispatch(event, &mut dom, &mut host);
            ChecklistStatus::of(app)
        });
        if let Some(status) = status {
            self.status.set(status);
        }
    }

    pub fn navigate(&self, section: SectionId) {
        self.dispatch(AppEvent::Navigate(section.as_str().to_string()));
    }

    /// Log the full state and offer it as a JSON download.
    pub fn export(&self) {
        let host = BrowserHost { ctx: *self };
        let Some(snapshot) = self.app.try_with_value(|app| app.export_snapshot(&host)) else {
            return;
        };
        let json = match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Export failed: {}", e);
                return;
            }
        };
        log::info!("SFBB Data Export: {}", json);

        let filename = format!("sfbb-export-{}.json", date_utils::date_part(&snapshot.export_date));
        if let Err(e) = export::download_json(&json, &filename) {
            log::error!("Export download failed: {}", e);
            self.notifications
                .push(NotificationLevel::Error, "Could not download export");
        }
    }

    fn install_page_listeners(&self) {
        let Some(win) = window() else {
            return;
        };
        let ctx = *self;

        let on_keydown = Closure::wrap(Box::new(move |ev: KeyboardEvent| {
            if let Some(shortcut) = Shortcut::from_key(&ev.key(), ev.alt_key(), ev.ctrl_key()) {
                ev.prevent_default();
                ctx.dispatch(AppEvent::Shortcut(shortcut));
            }
        }) as Box<dyn FnMut(_)>);
        let _ = win.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget(); // Keep the closure alive

        let on_unload = Closure::wrap(Box::new(move |_: web_sys::Event| {
            ctx.dispatch(AppEvent::BeforeUnload);
        }) as Box<dyn FnMut(_)>);
        let _ = win.add_event_listener_with_callback("beforeunload", on_unload.as_ref().unchecked_ref());
        on_unload.forget();

        if let Some(document) = win.document() {
            let on_visibility = Closure::wrap(Box::new(move |_: web_sys::Event| {
                let hidden = window()
                    .and_then(|w| w.document())
                    .is_some_and(|d| d.visibility_state() == VisibilityState::Hidden);
                if hidden {
                    ctx.dispatch(AppEvent::PageHidden);
                }
            }) as Box<dyn FnMut(_)>);
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                on_visibility.as_ref().unchecked_ref(),
            );
            on_visibility.forget();
        }
    }
}

/// Side effects requested by the checklist while it handles an event.
struct BrowserHost {
    ctx: ChecklistContext,
}

impl Notifier for BrowserHost {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        self.ctx.notifications.push(level, message);
    }
}

impl Host for BrowserHost {
    type Timer = BrowserTimer;

    fn start_autosave_timer(&mut self, delay_ms: u32, generation: u64) -> BrowserTimer {
        let ctx = self.ctx;
        BrowserTimer::start(delay_ms, move || {
            ctx.dispatch(AppEvent::AutosaveDue(generation));
        })
    }

    fn request_print(&mut self, delay_ms: u32) {
        spawn_local(async move {
            // let the notification render before the dialog blocks the page
            TimeoutFuture::new(delay_ms).await;
            if let Some(w) = window() {
                if let Err(e) = w.print() {
                    log::error!("Print failed: {:?}", e);
                }
            }
        });
    }

    fn show_saved_feedback(&mut self, duration_ms: u32) {
        let flag = self.ctx.saved_feedback;
        flag.set(true);
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            flag.set(false);
        });
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
