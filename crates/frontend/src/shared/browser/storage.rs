use contracts::checklist::{ChecklistError, ChecklistResult, MemoryStore, SessionStore};
use web_sys::window;

/// `sessionStorage`, or an in-memory stand-in when the browser refuses it
/// (private mode, sandboxed iframes).
pub enum BrowserSessionStore {
    Session(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserSessionStore {
    pub fn open() -> Self {
        match window().and_then(|w| w.session_storage().ok().flatten()) {
            Some(storage) => BrowserSessionStore::Session(storage),
            None => {
                log::warn!("sessionStorage unavailable, progress will not survive a reload");
                BrowserSessionStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn storage_error(e: wasm_bindgen::JsValue) -> ChecklistError {
    ChecklistError::Storage(format!("{:?}", e))
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> ChecklistResult<Option<String>> {
        match self {
            BrowserSessionStore::Session(storage) => storage.get_item(key).map_err(storage_error),
            BrowserSessionStore::Memory(store) => store.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> ChecklistResult<()> {
        match self {
            BrowserSessionStore::Session(storage) => {
                storage.set_item(key, value).map_err(storage_error)
            }
            BrowserSessionStore::Memory(store) => store.set_item(key, value),
        }
    }
}
