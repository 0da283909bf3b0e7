use std::rc::Rc;
use crate::configs::ThemeConfig;
use crate::error::EnvironmentError;
use crate::tests::common::setup;
use crate::utils::{ detect, DetachedEnvironment, ThemeEnvironment, ThemePreferenceStore, ThemeState };

#[test]
fn test_detached_environment_is_silent() {
    let env = DetachedEnvironment;
    env.write_token("theme", "dark");
    env.set_root_class("dark", true);
    assert_eq!(env.read_token("theme"), None);
    assert!(!env.matches_media("(prefers-color-scheme: dark)"));
}

#[test]
fn test_store_over_detached_environment() {
    setup();
    let store = ThemePreferenceStore::initialize(Rc::new(DetachedEnvironment), ThemeConfig::default());
    assert_eq!(store.state(), ThemeState::LIGHT);
    assert_eq!(store.toggle(), ThemeState::DARK);
    assert!(store.is_dark());
}

#[test]
fn test_native_detect_is_detached() {
    setup();
    let env = detect();
    env.write_token("theme", "dark");
    assert_eq!(env.read_token("theme"), None);
}

#[test]
fn test_environment_error_display() {
    assert_eq!(
        EnvironmentError::Unavailable("localStorage".to_string()).to_string(),
        "Unavailable: localStorage"
    );
    assert_eq!(
        EnvironmentError::Storage("QuotaExceededError".to_string()).to_string(),
        "Storage Error: QuotaExceededError"
    );
}

#[test]
fn test_theme_state_tokens() {
    assert_eq!(ThemeState::from_token("dark"), ThemeState::DARK);
    assert_eq!(ThemeState::from_token("light"), ThemeState::LIGHT);
    assert_eq!(ThemeState::DARK.token(), "dark");
    assert_eq!(ThemeState::LIGHT.to_string(), "light");
    assert_eq!(ThemeState::default(), ThemeState::LIGHT);
}
