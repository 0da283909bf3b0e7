use std::cell::{ Cell, RefCell };
use std::collections::{ HashMap, HashSet };
use crate::utils::ThemeEnvironment;

/// In-memory stand-in for local storage, the document root and `matchMedia`.
#[derive(Default)]
pub struct MemoryEnvironment {
    pub storage: RefCell<HashMap<String, String>>,
    pub root_classes: RefCell<HashSet<String>>,
    /// `None` models a platform without a color-scheme signal.
    pub prefers_dark: Option<bool>,
    pub writes: Cell<usize>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let env = Self::new();
        env.storage.borrow_mut().insert("theme".to_string(), token.to_string());
        env
    }

    pub fn with_preference(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Some(prefers_dark),
            ..Self::default()
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.borrow().get("theme").cloned()
    }

    pub fn has_dark_class(&self) -> bool {
        self.root_classes.borrow().contains("dark")
    }
}

impl ThemeEnvironment for MemoryEnvironment {
    fn read_token(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    fn write_token(&self, key: &str, token: &str) {
        self.writes.set(self.writes.get() + 1);
        self.storage.borrow_mut().insert(key.to_string(), token.to_string());
    }

    fn matches_media(&self, _query: &str) -> bool {
        self.prefers_dark.unwrap_or(false)
    }

    fn set_root_class(&self, class: &str, present: bool) {
        let mut classes = self.root_classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}
