use crate::configs::{ env_or, ThemeConfig, DEFAULT_COLOR_SCHEME_QUERY, DEFAULT_DARK_CLASS, DEFAULT_STORAGE_KEY };
use crate::tests::common::setup;

#[test]
fn test_default_config() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.dark_class, "dark");
    assert_eq!(config.color_scheme_query, "(prefers-color-scheme: dark)");
    assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(config.dark_class, DEFAULT_DARK_CLASS);
    assert_eq!(config.color_scheme_query, DEFAULT_COLOR_SCHEME_QUERY);
}

#[test]
fn test_env_or_reads_and_trims() {
    setup();
    std::env::set_var("LLM_PLAYGROUND_TEST_SET", "  ui-theme ");
    assert_eq!(env_or("LLM_PLAYGROUND_TEST_SET", "theme"), "ui-theme");
}

#[test]
fn test_env_or_falls_back() {
    setup();
    std::env::set_var("LLM_PLAYGROUND_TEST_BLANK", "   ");
    assert_eq!(env_or("LLM_PLAYGROUND_TEST_BLANK", "theme"), "theme");
    assert_eq!(env_or("LLM_PLAYGROUND_TEST_UNSET", "dark"), "dark");
}
