//! Platform capabilities the theme store depends on.
//!
//! The store never touches `web_sys` directly. It talks to a
//! [`ThemeEnvironment`], chosen once at startup by [`detect`]: the browser
//! implementation when a `window` exists, otherwise a detached no-op one.

use std::rc::Rc;

pub trait ThemeEnvironment {
    /// Persisted token under `key`, if any.
    fn read_token(&self, key: &str) -> Option<String>;

    fn write_token(&self, key: &str, token: &str);

    /// Whether the platform reports a match for `query`. An unavailable
    /// signal reads as `false`.
    fn matches_media(&self, query: &str) -> bool;

    /// Adds `class` to the document root when `present`, removes it otherwise.
    fn set_root_class(&self, class: &str, present: bool);
}

/// Used when there is no document or storage to talk to.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedEnvironment;

impl ThemeEnvironment for DetachedEnvironment {
    fn read_token(&self, _key: &str) -> Option<String> {
        None
    }

    fn write_token(&self, _key: &str, _token: &str) {}

    fn matches_media(&self, _query: &str) -> bool {
        false
    }

    fn set_root_class(&self, _class: &str, _present: bool) {}
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserEnvironment;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::ThemeEnvironment;
    use crate::error::EnvironmentError;
    use web_sys::{ Element, Storage, Window };

    pub struct BrowserEnvironment {
        window: Window,
    }

    impl BrowserEnvironment {
        pub fn detect() -> Option<Self> {
            web_sys::window().map(|window| Self { window })
        }

        fn storage(&self) -> Result<Storage, EnvironmentError> {
            self.window
                .local_storage()?
                .ok_or_else(|| EnvironmentError::Unavailable("localStorage".to_string()))
        }

        fn root(&self) -> Result<Element, EnvironmentError> {
            self.window
                .document()
                .and_then(|document| document.document_element())
                .ok_or_else(|| EnvironmentError::Unavailable("document root".to_string()))
        }

        fn try_read(&self, key: &str) -> Result<Option<String>, EnvironmentError> {
            self.storage()?
                .get_item(key)
                .map_err(|e| EnvironmentError::Storage(format!("{:?}", e)))
        }

        fn try_write(&self, key: &str, token: &str) -> Result<(), EnvironmentError> {
            self.storage()?
                .set_item(key, token)
                .map_err(|e| EnvironmentError::Storage(format!("{:?}", e)))
        }

        fn try_match(&self, query: &str) -> Result<bool, EnvironmentError> {
            let list = self.window
                .match_media(query)
                .map_err(|e| EnvironmentError::MediaQuery(format!("{:?}", e)))?
                .ok_or_else(|| EnvironmentError::Unavailable("matchMedia".to_string()))?;
            Ok(list.matches())
        }

        fn try_set_class(&self, class: &str, present: bool) -> Result<(), EnvironmentError> {
            self.root()?.class_list().toggle_with_force(class, present)?;
            Ok(())
        }
    }

    impl ThemeEnvironment for BrowserEnvironment {
        fn read_token(&self, key: &str) -> Option<String> {
            self.try_read(key).unwrap_or_else(|e| {
                log::debug!("Skipping theme read: {}", e);
                None
            })
        }

        fn write_token(&self, key: &str, token: &str) {
            if let Err(e) = self.try_write(key, token) {
                log::warn!("Could not persist theme \"{}\": {}", token, e);
            }
        }

        fn matches_media(&self, query: &str) -> bool {
            self.try_match(query).unwrap_or_else(|e| {
                log::debug!("Treating {} as unmatched: {}", query, e);
                false
            })
        }

        fn set_root_class(&self, class: &str, present: bool) {
            if let Err(e) = self.try_set_class(class, present) {
                log::debug!("Skipping root class update: {}", e);
            }
        }
    }
}

pub fn detect() -> Rc<dyn ThemeEnvironment> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(browser) = BrowserEnvironment::detect() {
            log::info!("Theme environment: browser");
            return Rc::new(browser);
        }
    }

    log::info!("Theme environment: detached, theme changes will not persist");
    Rc::new(DetachedEnvironment)
}
