pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeConfig {
    /// Local storage key holding the persisted token.
    pub storage_key: String,
    /// Class toggled on the document root while dark mode is active.
    pub dark_class: String,
    pub color_scheme_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_class: DEFAULT_DARK_CLASS.to_string(),
            color_scheme_query: DEFAULT_COLOR_SCHEME_QUERY.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Browser builds have no process environment, so this yields the defaults there.
    pub fn from_env() -> Self {
        Self {
            storage_key: env_or("THEME_STORAGE_KEY", DEFAULT_STORAGE_KEY),
            dark_class: env_or("THEME_DARK_CLASS", DEFAULT_DARK_CLASS),
            color_scheme_query: env_or("THEME_COLOR_SCHEME_QUERY", DEFAULT_COLOR_SCHEME_QUERY),
        }
    }
}

pub(crate) fn env_or(name: &str, fallback: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            log::info!("Using {} from environment: {}", name, value.trim());
            value.trim().to_string()
        }
        Ok(_) => {
            log::warn!("{} is blank, falling back to \"{}\"", name, fallback);
            fallback.to_string()
        }
        Err(_) => fallback.to_string(),
    }
}
