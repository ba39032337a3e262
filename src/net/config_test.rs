use super::*;

#[test]
fn from_env_yields_nonempty_settings() {
    let cfg = BackendConfig::from_env();
    assert!(!cfg.base_url.is_empty());
    assert!(!cfg.anon_key.is_empty());
}

#[test]
fn trimmed_base_strips_trailing_slashes() {
    let cfg = BackendConfig {
        base_url: "https://backend.example.com/",
        anon_key: "key",
    };
    assert_eq!(cfg.trimmed_base(), "https://backend.example.com");

    let bare = BackendConfig {
        base_url: "https://backend.example.com",
        anon_key: "key",
    };
    assert_eq!(bare.trimmed_base(), "https://backend.example.com");
}
