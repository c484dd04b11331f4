use serde_json::json;

use super::{CommandOutput, service};
use crate::api::TicketService;
use crate::config::Config;
use crate::error::Result;

pub async fn cmd_delete(config: &Config, id: &str, output_json: bool) -> Result<()> {
    service(config)?.delete_ticket(id).await?;
    tracing::info!(ticket = %id, "ticket deleted");

    CommandOutput::new(json!({
        "id": id,
        "action": "deleted",
    }))
    .with_text(format!("Removido {}", id))
    .print(output_json)
}
