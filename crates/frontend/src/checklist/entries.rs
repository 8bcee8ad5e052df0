use contracts::checklist::{AppEvent, EntryTemplate};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::layout::global_context::ChecklistContext;

/// Container for dynamic entries. Entries are inserted by the checklist
/// ahead of the add button; removal is caught here by delegation.
#[component]
pub fn EntryList(container: &'static str, title: &'static str) -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext not found");
    let noun = EntryTemplate::for_container(container)
        .map(|t| t.title())
        .unwrap_or_else(|| "Entry".to_string());

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(ordinal) = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(".remove-entry").ok().flatten())
            .and_then(|button| button.get_attribute("data-ordinal"))
            .and_then(|v| v.parse::<u32>().ok())
        else {
            return;
        };
        ev.prevent_default();
        ctx.dispatch(AppEvent::RemoveEntry {
            container: container.to_string(),
            ordinal,
        });
    };

    view! {
        <div class="suppliers-form">
            <h3 class="form-title">{title}</h3>
            <div id=container class="entries-list" on:click=on_click>
                <button
                    type="button"
                    class="btn btn--secondary add-entry"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        ctx.dispatch(AppEvent::AddEntry(container.to_string()));
                    }
                >
                    {format!("Add {}", noun)}
                </button>
            </div>
        </div>
    }
}
