//! Single owner of the dark/light preference.
//!
//! Built once at startup with [`ThemePreferenceStore::initialize`], which
//! resolves the starting state (stored token, then platform preference, then
//! light) and synchronizes it straight away. After that the state only changes
//! through [`ThemePreferenceStore::toggle`], and every change is mirrored into
//! the document root class and local storage before the call returns.

use std::cell::Cell;
use std::rc::Rc;
use crate::configs::ThemeConfig;
use crate::utils::environment::ThemeEnvironment;
use crate::utils::theme_state::ThemeState;

pub struct ThemePreferenceStore {
    environment: Rc<dyn ThemeEnvironment>,
    config: ThemeConfig,
    state: Cell<ThemeState>,
}

impl ThemePreferenceStore {
    pub fn initialize(environment: Rc<dyn ThemeEnvironment>, config: ThemeConfig) -> Self {
        let state = Self::resolve(environment.as_ref(), &config);
        let store = Self {
            environment,
            config,
            state: Cell::new(state),
        };
        store.synchronize(state);
        store
    }

    /// Reads the starting state without writing anything back. An empty
    /// stored token counts as no token.
    pub fn resolve(environment: &dyn ThemeEnvironment, config: &ThemeConfig) -> ThemeState {
        match environment.read_token(&config.storage_key).filter(|token| !token.is_empty()) {
            Some(token) => {
                let state = ThemeState::from_token(&token);
                log::info!("Restored theme \"{}\" from stored token \"{}\"", state, token);
                state
            }
            None => {
                let state = ThemeState {
                    is_dark: environment.matches_media(&config.color_scheme_query),
                };
                log::info!("No stored theme, using platform preference \"{}\"", state);
                state
            }
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    pub fn is_dark(&self) -> bool {
        self.state.get().is_dark
    }

    pub fn synchronize(&self, state: ThemeState) {
        self.state.set(state);
        self.environment.set_root_class(&self.config.dark_class, state.is_dark);
        self.environment.write_token(&self.config.storage_key, state.token());
        log::debug!("Synchronized theme \"{}\"", state);
    }

    pub fn toggle(&self) -> ThemeState {
        let next = self.state.get().toggled();
        self.synchronize(next);
        next
    }
}
