use rc_lock_supply::{types::HashType, ConfigError, HelperConfig};
use std::io::Write;

const CONFIG_YAML: &str = r#"
rc_lock:
  code_hash: "0x9f3aeaf2fc439549cbc870c653374943af96a0658bd6b51be8d8983183e6f52f"
  hash_type: type
sudt_type:
  code_hash: "0x5e7a36a77e68eecc013dfa2fe6a23f3b6c344b04005808694ae6dd45eea4cfd5"
  hash_type: data1
"#;

#[test]
fn parse_yaml() {
    let config = HelperConfig::from_yaml_str(CONFIG_YAML).unwrap();
    assert_eq!(config.rc_lock.hash_type, HashType::Type);
    assert_eq!(config.rc_lock.code_hash[0], 0x9f);
    assert_eq!(config.sudt_type.hash_type, HashType::Data1);
    assert_eq!(config.sudt_type.code_hash[31], 0xd5);
}

#[test]
fn yaml_roundtrip() {
    let config = HelperConfig::from_yaml_str(CONFIG_YAML).unwrap();
    let yaml = config.to_yaml_string().unwrap();
    assert_eq!(HelperConfig::from_yaml_str(&yaml).unwrap(), config);
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG_YAML.as_bytes()).unwrap();
    let config = HelperConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config, HelperConfig::from_yaml_str(CONFIG_YAML).unwrap());
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = HelperConfig::from_yaml_file(dir.path().join("missing.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn missing_template() {
    let yaml = CONFIG_YAML.split("sudt_type").next().unwrap();
    let err = HelperConfig::from_yaml_str(yaml).unwrap_err();
    assert!(matches!(err, ConfigError::Yaml(_)));
    assert!(err.to_string().contains("sudt_type"));
}

#[test]
fn unknown_hash_type() {
    let yaml = CONFIG_YAML.replace("data1", "data9");
    assert!(matches!(
        HelperConfig::from_yaml_str(&yaml),
        Err(ConfigError::Yaml(_))
    ));
}
