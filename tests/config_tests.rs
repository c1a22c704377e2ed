use sehatkan::auth::{Credentials, Session};
use sehatkan::config::{Config, migrate};
use sehatkan::errors::AppError;
use sehatkan::messaging::MessageField;
use std::fs;

mod common;
use common::scratch_dir;

const OLD_CONFIG: &str = "\
store: /data/register.csv
credentials:
  username: nurse
thresholds:
  oxygen_normal_from: 96
";

#[test]
fn test_old_config_loads_with_defaults() {
    let dir = scratch_dir("config_old");
    let path = dir.join("sehatkan.conf");
    fs::write(&path, OLD_CONFIG).expect("write config");

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.store, "/data/register.csv");
    assert_eq!(cfg.credentials.username, "nurse");
    assert_eq!(cfg.credentials.password, "admin123");
    assert_eq!(cfg.thresholds.oxygen_normal_from, 96.0);
    assert_eq!(cfg.thresholds.fever_above, 37.5);
    assert_eq!(cfg.messaging.country_code, "62");
    assert_eq!(
        cfg.messaging.fields,
        vec![
            MessageField::BloodPressure,
            MessageField::Temperature,
            MessageField::Oxygen,
            MessageField::Alcohol
        ]
    );
}

#[test]
fn test_missing_and_empty_config_are_defaults() {
    let dir = scratch_dir("config_missing");
    let path = dir.join("sehatkan.conf");

    assert_eq!(Config::load_from(&path).expect("missing"), Config::default());

    fs::write(&path, "").expect("write empty");
    assert_eq!(Config::load_from(&path).expect("empty"), Config::default());
}

#[test]
fn test_broken_yaml_is_an_error() {
    let dir = scratch_dir("config_broken");
    let path = dir.join("sehatkan.conf");
    fs::write(&path, "store: [unclosed").expect("write config");

    assert!(matches!(
        Config::load_from(&path),
        Err(AppError::ConfigLoad(_))
    ));
}

#[test]
fn test_missing_keys_are_dotted_paths() {
    let missing = migrate::missing_keys(OLD_CONFIG).expect("check");

    assert!(missing.contains(&"photo_dir".to_string()));
    assert!(missing.contains(&"credentials.password".to_string()));
    assert!(missing.contains(&"thresholds.fever_above".to_string()));
    assert!(missing.contains(&"messaging".to_string()));
    assert!(!missing.contains(&"store".to_string()));
    assert!(!missing.contains(&"thresholds.oxygen_normal_from".to_string()));

    let full = serde_yaml::to_string(&Config::default()).expect("serialize");
    assert!(migrate::missing_keys(&full).expect("check full").is_empty());
}

#[test]
fn test_migrate_file_keeps_values_and_adds_keys() {
    let dir = scratch_dir("config_migrate");
    let path = dir.join("sehatkan.conf");
    fs::write(&path, OLD_CONFIG).expect("write config");

    let added = migrate::migrate_file(&path).expect("migrate");
    assert!(added.contains(&"credentials.password".to_string()));

    let cfg = Config::load_from(&path).expect("reload");
    assert_eq!(cfg.store, "/data/register.csv");
    assert_eq!(cfg.credentials.username, "nurse");
    assert_eq!(cfg.thresholds.oxygen_normal_from, 96.0);

    let content = fs::read_to_string(&path).expect("read migrated");
    assert!(migrate::missing_keys(&content).expect("check").is_empty());

    // second run has nothing to do
    assert!(migrate::migrate_file(&path).expect("migrate again").is_empty());
}

#[test]
fn test_config_save_and_reload() {
    let dir = scratch_dir("config_save");
    let path = dir.join("nested").join("sehatkan.conf");

    let cfg = Config {
        photo_dir: "/srv/photos".to_string(),
        thresholds: sehatkan::engine::Thresholds {
            temperature_status: false,
            oxygen_normal_from: 96.0,
            ..Default::default()
        },
        ..Config::default()
    };
    cfg.save_to(&path).expect("save");

    assert_eq!(Config::load_from(&path).expect("reload"), cfg);
}

#[test]
fn test_session_login() {
    let creds = Credentials::default();

    let session = Session::login(&creds, "admin", "admin123").expect("login");
    assert_eq!(session.operator(), "admin");

    assert!(matches!(
        Session::login(&creds, "admin", "wrong"),
        Err(AppError::AccessDenied)
    ));
    assert!(matches!(
        Session::from_args(&creds, Some("admin"), None),
        Err(AppError::AccessDenied)
    ));
    assert!(Session::from_args(&creds, Some("admin"), Some("admin123")).is_ok());
}
