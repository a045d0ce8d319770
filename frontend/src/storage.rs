use web_sys::{window, Storage};
use wheel_shared::gating::PlayLedger;

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

/// Keeps the last play date in the browser's local storage so the daily
/// limit survives page reloads on the kiosk.
#[derive(Debug, Clone)]
pub struct LocalStorageLedger {
    key: String,
}

impl LocalStorageLedger {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl PlayLedger for LocalStorageLedger {
    fn last_played(&self) -> Option<String> {
        local_storage().and_then(|s| s.get_item(&self.key).ok().flatten())
    }

    fn record_play(&mut self, date: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(&self.key, date).is_err() {
                    log::warn!("Could not persist play date under {}", self.key);
                }
            }
            None => log::warn!("Local storage unavailable, play date not persisted"),
        }
    }
}
