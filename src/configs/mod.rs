mod theme_config;

pub use theme_config::{
    ThemeConfig,
    DEFAULT_COLOR_SCHEME_QUERY,
    DEFAULT_DARK_CLASS,
    DEFAULT_STORAGE_KEY,
};
#[cfg(test)]
pub(crate) use theme_config::env_or;
