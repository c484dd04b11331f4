//! Support dashboard command (`multidesk dashboard`)
//!
//! Full-screen TUI over the ticket service with background refresh.

use std::sync::Arc;

use iocraft::prelude::*;

use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::logging::{self, LogTarget};
use crate::tui::Dashboard;

/// Launch the dashboard TUI. Logs go to a file while the terminal is in use.
pub async fn cmd_dashboard(config: &Config, verbose: bool) -> Result<()> {
    let log_path = logging::log_file_in(&Config::data_dir()?);
    logging::init(&LogTarget::File(log_path.clone()), verbose)?;

    let service = Arc::new(super::service(config)?);
    let timezone = config.timezone()?;
    tracing::info!(api_url = %service.base_url(), log = %log_path.display(), "starting dashboard");

    element!(Dashboard(service: Some(service), timezone: Some(timezone)))
        .fullscreen()
        .await
        .map_err(|e| DeskError::Tui(e.to_string()))
}
