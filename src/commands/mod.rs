mod config;
mod create;
mod dashboard;
mod delete;
mod ls;
mod message;
mod metrics;
mod show;
mod status;
mod topic;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::{CreateOptions, cmd_create};
pub use dashboard::cmd_dashboard;
pub use delete::cmd_delete;
pub use ls::cmd_ls;
pub use message::{cmd_message, cmd_whatsapp};
pub use metrics::cmd_metrics;
pub use show::cmd_show;
pub use status::{cmd_status, cmd_toggle};
pub use topic::cmd_topic;

use serde::Serialize;

use crate::api::HttpTicketService;
use crate::config::Config;
use crate::error::Result;

/// Result of a command, printable as JSON or as human-readable text
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested, otherwise the text (falling back to JSON)
    pub fn print(self, output_json: bool) -> Result<()> {
        match (output_json, self.text) {
            (false, Some(text)) => println!("{}", text),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// HTTP client for the configured ticket service
pub(crate) fn service(config: &Config) -> Result<HttpTicketService> {
    HttpTicketService::from_config(config)
}
