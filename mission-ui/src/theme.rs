use leptos::{create_rw_signal, RwSignal, SignalGet, SignalGetUntracked, SignalSet};

const THEME_KEY: &str = "theme";

/// Dark-mode flag persisted to `localStorage`, with the body class kept in
/// step so the stylesheet can theme everything.
#[derive(Clone, Copy)]
pub struct Theme {
    is_dark: RwSignal<bool>,
}

impl Theme {
    pub fn load() -> Self {
        let saved = local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
        let is_dark = saved.as_deref() == Some("dark");
        if is_dark {
            set_body_class(true);
        }
        Self {
            is_dark: create_rw_signal(is_dark),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark.get()
    }

    pub fn toggle(&self) {
        let next = !self.is_dark.get_untracked();
        self.is_dark.set(next);
        set_body_class(next);
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, if next { "dark" } else { "light" });
        }
    }
}

fn set_body_class(dark: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let _ = if dark {
        body.class_list().add_1("dark-mode")
    } else {
        body.class_list().remove_1("dark-mode")
    };
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
