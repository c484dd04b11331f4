use serde_json::json;

use super::{CommandOutput, service};
use crate::api::TicketService;
use crate::config::Config;
use crate::display::{format_status_colored, status_label};
use crate::error::Result;
use crate::mutations::next_status;
use crate::types::TicketStatus;

async fn update_status(
    config: &Config,
    id: &str,
    previous: Option<TicketStatus>,
    new_status: TicketStatus,
    output_json: bool,
) -> Result<()> {
    let ticket = service(config)?
        .update_ticket_status(id, new_status)
        .await?;
    tracing::info!(ticket = %ticket.id, status = %new_status, "status updated");

    CommandOutput::new(json!({
        "id": ticket.id,
        "action": "status_changed",
        "previous_status": previous.map(|s| s.to_string()),
        "new_status": new_status.to_string(),
    }))
    .with_text(format!(
        "Atualizado {} -> {}",
        ticket.id,
        format_status_colored(new_status)
    ))
    .print(output_json)
}

/// Resolve an open ticket, or reopen a resolved one
pub async fn cmd_toggle(config: &Config, id: &str, output_json: bool) -> Result<()> {
    let ticket = service(config)?.get_ticket(id).await?;
    let target = next_status(ticket.status);
    tracing::debug!(
        ticket = %ticket.id,
        from = status_label(ticket.status),
        to = status_label(target),
        "toggling status"
    );
    update_status(config, &ticket.id, Some(ticket.status), target, output_json).await
}

/// Set a ticket's status to an arbitrary value
pub async fn cmd_status(
    config: &Config,
    id: &str,
    status: TicketStatus,
    output_json: bool,
) -> Result<()> {
    update_status(config, id, None, status, output_json).await
}
