use crate::layout::global_context::ChecklistContext;
use crate::shared::components::ui::Button;
use contracts::checklist::AppEvent;
use leptos::prelude::*;

/// Save button face while the "Saved!" feedback is (or is not) showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SaveButtonState {
    label: &'static str,
    disabled: bool,
}

impl SaveButtonState {
    fn new(showing_feedback: bool) -> Self {
        if showing_feedback {
            Self { label: "Saved!", disabled: true }
        } else {
            Self { label: "Save", disabled: false }
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<ChecklistContext>()
        .expect("ChecklistContext context not found");

    let save_state = move || SaveButtonState::new(ctx.saved_feedback.get());

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">"Safer Food, Better Business"</span>
                <span class="header__subtitle">"Food safety management pack"</span>
            </div>
            <div class="header__actions">
                <Button
                    class="save-btn"
                    title="Save progress (Ctrl+S)"
                    disabled=Signal::derive(move || save_state().disabled)
                    on_click=Callback::new(move |_| ctx.dispatch(AppEvent::ManualSave))
                >
                    {move || save_state().label}
                </Button>
                <Button
                    variant="secondary"
                    title="Print (Ctrl+P)"
                    on_click=Callback::new(move |_| ctx.dispatch(AppEvent::Print))
                >
                    "Print"
                </Button>
                <Button
                    variant="outline"
                    title="Download answers as JSON"
                    on_click=Callback::new(move |_| ctx.export())
                >
                    "Export"
                </Button>
            </div>
        </header>
    }
}
