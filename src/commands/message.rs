use serde_json::json;

use super::{CommandOutput, service};
use crate::api::TicketService;
use crate::config::Config;
use crate::display::origin_label;
use crate::error::{DeskError, Result};

fn non_empty_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DeskError::Other("message text cannot be empty".to_string()));
    }
    Ok(trimmed)
}

/// Append a message to a ticket, from the client unless `from_agent`
pub async fn cmd_message(
    config: &Config,
    id: &str,
    text: &str,
    from_agent: bool,
    output_json: bool,
) -> Result<()> {
    let text = non_empty_text(text)?;
    let from_client = !from_agent;
    service(config)?.add_message(id, text, from_client).await?;

    CommandOutput::new(json!({
        "id": id,
        "action": "message_added",
        "fromClient": from_client,
        "message": text,
    }))
    .with_text(format!(
        "Mensagem adicionada a {} ({})",
        id,
        origin_label(from_client)
    ))
    .print(output_json)
}

/// Send an outbound WhatsApp message through the service integration
pub async fn cmd_whatsapp(config: &Config, to: &str, text: &str, output_json: bool) -> Result<()> {
    let text = non_empty_text(text)?;
    service(config)?.send_whatsapp_message(to, text).await?;

    CommandOutput::new(json!({
        "to": to,
        "action": "whatsapp_sent",
        "message": text,
    }))
    .with_text(format!("Mensagem de WhatsApp enviada para {}", to))
    .print(output_json)
}
