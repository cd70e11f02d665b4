use config::{Environment, Map};
use stringscope::settings::{Settings, ENV_PREFIX};
use stringscope::StringscopeError;

// Environment variables are injected as a map so that tests never touch the
// process environment other tests run in.
fn environment(pairs: &[(&str, &str)]) -> Environment {
    let vars: Map<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Environment::with_prefix(ENV_PREFIX).source(Some(vars))
}

fn config_file(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!("stringscope-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, contents).expect("write config file");
    path.to_string_lossy().into_owned()
}

#[test]
fn defaults_apply_without_any_source() {
    let settings = Settings::layered("no-such-stringscope-file", environment(&[]), None).expect("settings");
    assert_eq!(
        settings,
        Settings { host: "0.0.0.0".into(), port: 8080, log_level: "info".into() }
    );
    assert_eq!(settings.address(), "0.0.0.0:8080");
}

#[test]
fn port_variable_overrides_the_default() {
    let settings =
        Settings::layered("no-such-stringscope-file", environment(&[]), Some("3000".into())).unwrap();
    assert_eq!(settings.port, 3000);
    assert_eq!(settings.host, "0.0.0.0");
}

#[test]
fn later_sources_win() {
    let file = config_file("layers", "host = \"127.0.0.1\"\nport = 9000\nlog_level = \"debug\"\n");

    let from_file = Settings::layered(&file, environment(&[]), None).unwrap();
    assert_eq!(
        from_file,
        Settings { host: "127.0.0.1".into(), port: 9000, log_level: "debug".into() }
    );

    let env = environment(&[("STRINGSCOPE_PORT", "9100"), ("STRINGSCOPE_LOG_LEVEL", "warn")]);
    let from_env = Settings::layered(&file, env, None).unwrap();
    assert_eq!(from_env.port, 9100);
    assert_eq!(from_env.log_level, "warn");
    assert_eq!(from_env.host, "127.0.0.1");

    let env = environment(&[("STRINGSCOPE_PORT", "9100")]);
    let from_port = Settings::layered(&file, env, Some("9200".into())).unwrap();
    assert_eq!(from_port.port, 9200);

    let _ = std::fs::remove_file(&file);
}

#[test]
fn unusable_port_is_a_config_error() {
    let err = Settings::layered("no-such-stringscope-file", environment(&[]), Some("not a port".into()))
        .unwrap_err();
    assert!(matches!(err, StringscopeError::Config(_)), "got {err:?}");
}
