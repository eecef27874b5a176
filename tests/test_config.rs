//! Environment-driven configuration.
//!
//! Kept to a single test so the env mutations cannot race each other.

use produtos_api::infra::config::{DEFAULT_HOST, DEFAULT_PORT};
use produtos_api::AppConfig;
use std::env;

#[test]
fn config_reads_host_and_port_from_env() {
    env::remove_var("HOST");
    env::remove_var("PORT");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.bind_addr(), format!("{DEFAULT_HOST}:{DEFAULT_PORT}"));

    env::set_var("HOST", "127.0.0.1");
    env::set_var("PORT", "8081");
    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8081);
    assert_eq!(config.bind_addr(), "127.0.0.1:8081");

    for bad in ["abc", "70000", "-1", ""] {
        env::set_var("PORT", bad);
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"), "PORT={bad:?}: {err}");
    }

    env::remove_var("HOST");
    env::remove_var("PORT");
}
