//! Tests for global configuration

use serial_test::serial;
use tempfile::TempDir;

use limbah::config::GlobalConfig;

fn with_temp_home<T>(test: impl FnOnce() -> T) -> T {
    let temp = TempDir::new().unwrap();
    // SAFETY: tests touching HOME are serialized via #[serial]
    unsafe { std::env::set_var("HOME", temp.path()) };
    test()
}

#[test]
#[serial]
fn test_defaults() {
    with_temp_home(|| {
        let config = GlobalConfig::load();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.label.default_size, "800x480");
        assert!(config.label.output_dir.is_none());
    });
}

#[test]
#[serial]
fn test_save_and_reload() {
    with_temp_home(|| {
        let mut config = GlobalConfig::load();
        assert!(config.set("api.base-url", "https://limbah.example.com/api/"));
        assert!(config.set("label.default-size", "1200x720"));
        config.save().unwrap();

        let reloaded = GlobalConfig::load();
        // Trailing slash is normalized away
        assert_eq!(reloaded.api.base_url, "https://limbah.example.com/api");
        assert_eq!(reloaded.label.default_size, "1200x720");
    });
}

#[test]
#[serial]
fn test_unknown_key_is_refused() {
    with_temp_home(|| {
        let mut config = GlobalConfig::load();
        assert!(!config.set("api.timeout", "30"));
    });
}

#[test]
#[serial]
fn test_malformed_config_falls_back_to_default() {
    with_temp_home(|| {
        let dir = GlobalConfig::config_dir();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(GlobalConfig::config_path(), "not valid toml [[[").unwrap();

        let config = GlobalConfig::load();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
    });
}
