use crate::layout::global_context::ChecklistContext;
use contracts::checklist::SectionId;
use leptos::prelude::*;

/// Section links. `active` and `completed` classes are managed by the
/// checklist, so the class attribute is never re-rendered here.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<ChecklistContext>()
        .expect("ChecklistContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {SectionId::ALL.into_iter().enumerate().map(|(i, section)| {
                    view! {
                        <li>
                            <a
                                class="nav-item"
                                href=format!("#{}", section.as_str())
                                data-section=section.as_str()
                                title=section.display_name()
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(section);
                                }
                            >
                                <span class="nav-item__number">{i + 1}</span>
                                <span>{section.display_name()}</span>
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
