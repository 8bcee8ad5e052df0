//! Browser implementations of the checklist's page, storage and timer seams.

pub mod control;
pub mod dom;
pub mod storage;
pub mod timer;

pub use control::BrowserControl;
pub use dom::BrowserDom;
pub use storage::BrowserSessionStore;
pub use timer::BrowserTimer;
