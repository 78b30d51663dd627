use dioxus::prelude::*;
use gloo_storage::LocalStorage;
use gloo_storage::Storage;

pub static SESSION_STORE: GlobalSignal<SessionStore> = Signal::global(SessionStore::new);

const TOKEN_LOCALSTORAGE: &'static str = "token";
const NAME_LOCALSTORAGE: &'static str = "welcomeName";

/// The single read/write boundary over browser storage. Views never
/// touch local storage directly; navigation guards and the request
/// layer read the token from here.
#[derive(Clone, Debug)]
pub struct SessionStore {
    pub token: Signal<Option<String>>,
    pub name: Signal<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            token: Signal::new(LocalStorage::get(TOKEN_LOCALSTORAGE).ok()),
            name: Signal::new(LocalStorage::get(NAME_LOCALSTORAGE).ok()),
        }
    }

    /// Presence check only. An expired-but-present token looks
    /// authenticated until a request fails.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.token.with(|v| v.clone())
    }

    pub fn display_name(&self) -> String {
        self.name
            .with(|v| v.clone())
            .unwrap_or_else(|| "Guest".to_string())
    }

    /// Both fields are written together on login.
    pub fn set_session(&mut self, token: String, name: String) {
        LocalStorage::set(TOKEN_LOCALSTORAGE, token.clone()).unwrap();
        LocalStorage::set(NAME_LOCALSTORAGE, name.clone()).unwrap();
        self.token.with_mut(|v| *v = Some(token));
        self.name.with_mut(|v| *v = Some(name));
    }

    /// Both fields are cleared together on logout.
    pub fn clear_session(&mut self) {
        LocalStorage::delete(TOKEN_LOCALSTORAGE);
        LocalStorage::delete(NAME_LOCALSTORAGE);
        self.token.with_mut(|v| *v = None);
        self.name.with_mut(|v| *v = None);
    }
}
