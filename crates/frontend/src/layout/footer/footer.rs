use crate::layout::global_context::ChecklistContext;
use crate::shared::date_utils::format_time;
use contracts::checklist::SectionId;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = leptos::context::use_context::<ChecklistContext>()
        .expect("ChecklistContext context not found");
    let status = ctx.status;

    let completed_text = move || {
        format!(
            "{} of {} sections completed",
            status.get().completed.len(),
            SectionId::ALL.len()
        )
    };
    let saved_text = move || match status.get().last_saved {
        Some(saved) => format!("Last saved at {}", format_time(&saved)),
        None => "Not saved yet".to_string(),
    };

    view! {
        <footer data-zone="footer" class="status-bar">
            <div class="progress">
                <div
                    class="progress-indicator"
                    style:width=move || format!("{:.0}%", status.get().progress)
                ></div>
            </div>
            <span class="status-bar__completed">{completed_text}</span>
            <span class="status-bar__saved">{saved_text}</span>
        </footer>
    }
}
