pub mod environment;
mod random_id;
mod theme_context;
mod theme_state;
mod theme_store;

pub use environment::{ detect, DetachedEnvironment, ThemeEnvironment };
pub use random_id::{ fallback_uuid, random_uuid };
pub use theme_context::{ use_theme, ThemeContext };
pub use theme_state::{ ThemeState, DARK_TOKEN, LIGHT_TOKEN };
pub use theme_store::ThemePreferenceStore;
