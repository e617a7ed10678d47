use std::sync::{Mutex, MutexGuard};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialises tests that mutate process env.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Caller must hold [`env_guard`].
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_URL");
        std::env::remove_var("PROXY_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _guard = env_guard();
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.backend_url, "http://127.0.0.1:8080");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(30));
}

#[test]
fn from_env_parses_overrides() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "8000");
        std::env::set_var("BACKEND_URL", "https://calc.example.test/");
        std::env::set_var("PROXY_TIMEOUT_SECS", "5");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.backend_url, "https://calc.example.test");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));

    unsafe { clear_server_env() };
}

#[test]
fn from_env_falls_back_on_garbage_numbers() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PORT", "eighty");
        std::env::set_var("PROXY_TIMEOUT_SECS", "-3");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));

    unsafe { clear_server_env() };
}

#[test]
fn zero_timeout_is_raised_to_one_second() {
    let _guard = env_guard();
    unsafe {
        clear_server_env();
        std::env::set_var("PROXY_TIMEOUT_SECS", "0");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(1));

    unsafe { clear_server_env() };
}

#[test]
fn backend_url_must_be_http() {
    assert_eq!(
        parse_backend_url(Some("localhost:8080")),
        Err(ConfigError::InvalidBackendUrl("localhost:8080".into()))
    );
    assert_eq!(parse_backend_url(Some("   ")).unwrap(), DEFAULT_BACKEND_URL);
    assert_eq!(parse_backend_url(None).unwrap(), DEFAULT_BACKEND_URL);
}
