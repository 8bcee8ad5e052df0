use contracts::checklist::AppEvent;
use leptos::prelude::*;

use super::schema::TabSpec;
use super::section::FormView;
use crate::layout::global_context::ChecklistContext;

/// Tab buttons followed by their panels. The checklist marks the active
/// button and panel; nothing here tracks selection.
#[component]
pub fn TabGroup(group: &'static str, tabs: &'static [TabSpec]) -> impl IntoView {
    let ctx = use_context::<ChecklistContext>().expect("ChecklistContext not found");

    view! {
        <div class="methods-tabs" data-group=group>
            {tabs
                .iter()
                .map(|tab| view! {
                    <button
                        type="button"
                        class="tab-btn"
                        data-tab=tab.id
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.dispatch(AppEvent::SwitchTab {
                                group: group.to_string(),
                                tab: tab.id.to_string(),
                            });
                        }
                    >
                        {tab.label}
                    </button>
                })
                .collect_view()}
        </div>
        <div class="tab-content">
            {tabs
                .iter()
                .map(|tab| view! {
                    <div class="tab-panel" id=tab.id>
                        {tab.forms.iter().map(|form| view! { <FormView form=form /> }).collect_view()}
                    </div>
                })
                .collect_view()}
        </div>
    }
}
