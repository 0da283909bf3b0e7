use std::rc::Rc;
use dioxus::prelude::*;
use crate::utils::theme_state::ThemeState;
use crate::utils::theme_store::ThemePreferenceStore;

/// Shared handle to the app's one theme store.
///
/// The signal mirrors the store so every component reading the theme
/// re-renders when any of them toggles it.
#[derive(Clone)]
pub struct ThemeContext {
    store: Rc<ThemePreferenceStore>,
    state: Signal<ThemeState>,
}

impl ThemeContext {
    pub fn new(store: ThemePreferenceStore) -> Self {
        let state = Signal::new(store.state());
        Self {
            store: Rc::new(store),
            state,
        }
    }

    pub fn state(&self) -> ThemeState {
        *self.state.read()
    }

    pub fn is_dark(&self) -> bool {
        self.state().is_dark
    }

    pub fn toggle(&mut self) {
        let next = self.store.toggle();
        self.state.set(next);
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
