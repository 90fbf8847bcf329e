//! Library integration tests.

use stackprobe::StackprobeError;

#[test]
fn error_types_are_public() {
    let err = StackprobeError::Other(anyhow::anyhow!("boom"));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> stackprobe::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn config_types_are_public() {
    use clap::Parser;
    use stackprobe::config::Config;

    let config = Config::parse_from(["stackprobe", "--mysql-user", "probe"]);
    assert_eq!(config.mysql.user, "probe");
}
