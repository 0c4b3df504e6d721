use nsidenum_domain::{
    AddressFamily, CliOverrides, ConfigError, DomainError, EnumeratorConfig, OutputFormat,
    Verbosity,
};
use std::time::Duration;

fn config_for(target: &str) -> EnumeratorConfig {
    EnumeratorConfig::load(
        None,
        CliOverrides {
            target: Some(target.to_string()),
            ..Default::default()
        },
    )
    .unwrap()
}

#[test]
fn test_config_default_values() {
    let config = EnumeratorConfig::default();

    assert!(config.target.is_none());
    assert_eq!(config.query.name, ".");
    assert_eq!(config.query.record_type, "A");
    assert_eq!(config.query.record_class, "IN");
    assert!(!config.query.identity_probe);
    assert!(config.query.edns);
    assert_eq!(config.query.payload_size, 4096);
    assert_eq!(config.sweep.timeout_secs, 1.0);
    assert_eq!(config.sweep.source_port, 12345);
    assert_eq!(config.sweep.dest_port, 53);
    assert!(config.sweep.enumerate.is_none());
    assert_eq!(config.sweep.concurrency, 1);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.log_level(), "info");
}

#[test]
fn test_config_from_toml_sections() {
    let toml_str = r#"
        target = "ns.example"

        [query]
        name = "example.com."
        record_type = "aaaa"

        [sweep]
        timeout_secs = 0.25
        enumerate = 9
        concurrency = 4

        [network]
        ipv6_only = true

        [output]
        format = "json"
    "#;

    let config = EnumeratorConfig::from_toml(toml_str).unwrap();
    config.validate().unwrap();

    assert_eq!(config.target.as_deref(), Some("ns.example"));
    assert_eq!(config.query.record_class, "IN");
    assert_eq!(config.sweep.timeout(), Duration::from_millis(250));
    assert_eq!(config.port_range().unwrap().len(), 10);
    assert_eq!(config.address_family().unwrap(), AddressFamily::V6);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_config_parse_error() {
    let result = EnumeratorConfig::from_toml("[sweep]\ntimeout_secs = \"soon\"");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_missing_file() {
    let result = EnumeratorConfig::load(Some("/nonexistent/nsidenum.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_cli_overrides_win_over_file_values() {
    let mut config = EnumeratorConfig::from_toml("[sweep]\nsource_port = 2000").unwrap();
    assert_eq!(config.sweep.source_port, 2000);

    config = EnumeratorConfig::load(
        None,
        CliOverrides {
            target: Some("192.0.2.53".into()),
            source_port: Some(3000),
            enumerate: Some(2),
            ..Default::default()
        },
    )
    .unwrap();

    let ports: Vec<u16> = config.port_range().unwrap().ports().collect();
    assert_eq!(ports, vec![3000, 3001, 3002]);
}

#[test]
fn test_validate_requires_target() {
    let config = EnumeratorConfig::default();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_target_host_from_file_is_trimmed() {
    let config = EnumeratorConfig::from_toml(r#"target = "  ns.example ""#).unwrap();
    assert_eq!(config.target_host().unwrap(), "ns.example");

    let blank = EnumeratorConfig::from_toml(r#"target = "   ""#).unwrap();
    assert!(blank.target_host().is_err());
    assert!(matches!(blank.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_verbose_and_quiet() {
    let mut config = config_for("192.0.2.53");
    config.output.verbose = true;
    config.output.quiet = true;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("mutually exclusive"));
    assert!(matches!(
        Verbosity::from_flags(true, true),
        Err(DomainError::ConfigError(_))
    ));
}

#[test]
fn test_validate_rejects_both_families() {
    let mut config = config_for("192.0.2.53");
    config.network.ipv4_only = true;
    config.network.ipv6_only = true;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_timeouts() {
    for timeout in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut config = config_for("192.0.2.53");
        config.sweep.timeout_secs = timeout;
        assert!(config.validate().is_err(), "timeout {} accepted", timeout);
    }
}

#[test]
fn test_validate_rejects_port_overflow() {
    let mut config = config_for("192.0.2.53");
    config.sweep.source_port = 65500;
    config.sweep.enumerate = Some(100);
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_ports_and_concurrency() {
    let mut config = config_for("192.0.2.53");
    config.sweep.dest_port = 0;
    assert!(config.validate().is_err());

    let mut config = config_for("192.0.2.53");
    config.sweep.source_port = 0;
    assert!(config.validate().is_err());

    let mut config = config_for("192.0.2.53");
    config.sweep.concurrency = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_small_payload_only_with_edns() {
    let mut config = config_for("192.0.2.53");
    config.query.payload_size = 100;
    assert!(config.validate().is_err());

    config.query.edns = false;
    assert!(config.validate().is_ok());
}

#[test]
fn test_log_level_follows_verbosity() {
    let mut config = config_for("192.0.2.53");
    config.output.quiet = true;
    assert_eq!(config.log_level(), "warn");

    config.output.quiet = false;
    config.output.verbose = true;
    assert_eq!(config.log_level(), "debug");

    config.logging.level = Some("trace".into());
    assert_eq!(config.log_level(), "trace");
}
