//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set and persist one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    let mut text = format!("{}\n\n", "Configuration:".cyan().bold());
    text.push_str(&format!("{}: {}\n", "api_url".cyan(), config.api_url));
    text.push_str(&format!(
        "{}: {}s\n",
        "request_timeout".cyan(),
        config.request_timeout
    ));
    text.push_str(&format!(
        "{}: {}\n",
        "timezone".cyan(),
        config.timezone.as_deref().unwrap_or("(system)")
    ));
    text.push_str(&format!(
        "\n{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json!({
        "api_url": config.api_url,
        "request_timeout": config.request_timeout,
        "timezone": config.timezone,
        "config_file": path.to_string_lossy(),
    }))
    .with_text(text)
    .print(output_json)
}

pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    let value = Config::load()?.get(key)?;
    CommandOutput::new(json!({ "key": key, "value": value }))
        .with_text(value.clone())
        .print(output_json)
}

pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    CommandOutput::new(json!({ "key": key, "value": value, "action": "set" }))
        .with_text(format!("Set {} = {}", key.cyan(), value))
        .print(output_json)
}
