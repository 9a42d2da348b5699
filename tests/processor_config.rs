use std::sync::Mutex;

use tempfile::NamedTempFile;

use ai_model::config::{ProcessorConfig, BACKEND_ENV, CONFIG_ENV};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    for key in [CONFIG_ENV, BACKEND_ENV] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_to_stub_backend() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = ProcessorConfig::load().expect("load config");
    assert_eq!(cfg.backend, "stub");
}

#[test]
fn loads_config_from_file_and_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let mut file = NamedTempFile::new().expect("temp config");
    std::io::Write::write_all(&mut file, br#"{"backend": "Stub"}"#).expect("write config");
    std::env::set_var(CONFIG_ENV, file.path());

    let cfg = ProcessorConfig::load().expect("load config");
    assert_eq!(cfg.backend, "stub");

    std::env::set_var(BACKEND_ENV, "experimental");
    let cfg = ProcessorConfig::load().expect("load config");
    assert_eq!(cfg.backend, "experimental");

    clear_env();
}

#[test]
fn rejects_unreadable_or_malformed_config() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    std::env::set_var(CONFIG_ENV, "/nonexistent/ai_model.json");
    let err = ProcessorConfig::load().unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));

    let mut file = NamedTempFile::new().expect("temp config");
    std::io::Write::write_all(&mut file, br#"{"backend": "stub", "threshold": 0.5}"#)
        .expect("write config");
    std::env::set_var(CONFIG_ENV, file.path());
    let err = ProcessorConfig::load().unwrap_err();
    assert!(err.to_string().contains("invalid config file"));

    clear_env();
}
