use crate::layout::global_context::ChecklistContext;
use crate::layout::Shell;
use contracts::checklist::ChecklistConfig;
use leptos::prelude::*;

/// Element in index.html that may carry TOML overrides for the defaults.
const CONFIG_ELEMENT_ID: &str = "sfbb-config";

fn page_config() -> ChecklistConfig {
    let overrides = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty());

    ChecklistConfig::load(overrides.as_deref()).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        ChecklistConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = ChecklistContext::new(page_config());

    // Provide the checklist and its notifications to the whole app via context.
    provide_context(ctx);
    provide_context(ctx.notifications);

    // Runs once, after the sections are in the document.
    Effect::new(move |_| ctx.start());

    view! {
        <Shell />
    }
}
