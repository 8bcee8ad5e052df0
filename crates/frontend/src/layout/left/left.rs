use leptos::prelude::*;

use super::navbar::Navbar;

#[component]
pub fn Left() -> impl IntoView {
    view! {
        <aside data-zone="left" class="left">
            <Navbar />
        </aside>
    }
}
