//! The checklist page: sections built from [`schema`] plus the handlers
//! that turn DOM events into checklist events.

pub mod entries;
pub mod page;
pub mod schema;
pub mod section;
pub mod tabs;

pub use page::ChecklistPage;
