use nsidenum_domain::{CliOverrides, EnumeratorConfig};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<EnumeratorConfig> {
    let config = EnumeratorConfig::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
