use leptos::{create_rw_signal, RwSignal, SignalGetUntracked, SignalSet, SignalWith};
use mission_core::passport::Passport;

const PASSPORT_KEY: &str = "passport";

/// The signed-in identity, held in a signal and mirrored to `localStorage`
/// so a reload keeps the session. Passed to views as explicit context.
#[derive(Clone, Copy)]
pub struct Session {
    passport: RwSignal<Option<Passport>>,
}

impl Session {
    pub fn load() -> Self {
        let stored = local_storage()
            .and_then(|storage| storage.get_item(PASSPORT_KEY).ok().flatten())
            .and_then(|json| serde_json::from_str(&json).ok());
        Self {
            passport: create_rw_signal(stored),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.passport.with(|p| p.is_some())
    }

    pub fn display_name(&self) -> Option<String> {
        self.passport.with(|p| p.as_ref().map(|p| p.display_name.clone()))
    }

    pub fn user_id(&self) -> Option<i32> {
        self.passport.with(|p| p.as_ref().map(|p| p.id))
    }

    pub fn token(&self) -> Option<String> {
        self.passport
            .get_untracked()
            .map(|passport| passport.token)
    }

    pub fn signin(&self, passport: Passport) {
        if let Some(storage) = local_storage() {
            if let Ok(json) = serde_json::to_string(&passport) {
                let _ = storage.set_item(PASSPORT_KEY, &json);
            }
        }
        self.passport.set(Some(passport));
    }

    pub fn logout(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(PASSPORT_KEY);
        }
        self.passport.set(None);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
