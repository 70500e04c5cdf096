use crate::config::AppConfig;
use anyhow::{Context, Result};
use std::fs;

pub fn load_config(path: &str) -> Result<AppConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("failed to parse config file {}", path))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = serde_yaml::from_str(contents)?;
    Ok(config)
}
