use contracts::checklist::AppEvent;
use leptos::prelude::*;
use web_sys::EventTarget;

use super::schema::SECTIONS;
use super::section::SectionView;
use crate::layout::global_context::ChecklistContext;
use crate::shared::browser::BrowserControl;

/// All seven sections. Only the active one is visible.
///
/// Field events bubble up to this element, so controls added later
/// (supplier entries) are captured without their own listeners.
#[component]
pub fn ChecklistPage() -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext not found");

    let capture = move |target: Option<EventTarget>| {
        if let Some(control) = target.and_then(BrowserControl::from_event_target) {
            ctx.dispatch(AppEvent::FieldChanged(control));
        }
    };

    view! {
        <form
            class="checklist"
            on:input=move |ev| capture(ev.target())
            on:change=move |ev| capture(ev.target())
            on:submit=|ev| ev.prevent_default()
        >
            {SECTIONS
                .iter()
                .map(|spec| view! { <SectionView spec=spec /> })
                .collect_view()}
        </form>
    }
}
