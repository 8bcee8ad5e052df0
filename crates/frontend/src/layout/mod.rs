pub mod center;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod left;

use crate::checklist::ChecklistPage;
use crate::shared::notifications::NotificationHost;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                Header                     |
/// +------------------------------------------+
/// |  Navbar   |          Sections             |
/// |  (Left)   |          (Center)             |
/// +------------------------------------------+
/// |        Footer (progress, last saved)      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <div class="app-body">
                <left::Left />
                <center::Center>
                    <ChecklistPage />
                </center::Center>
            </div>
            <footer::Footer />
            <NotificationHost />
        </div>
    }
}
