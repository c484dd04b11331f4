use serde_json::json;

use super::{CommandOutput, service};
use crate::api::TicketService;
use crate::config::Config;
use crate::display::topic_label;
use crate::error::Result;
use crate::types::TicketDraft;

/// Change a ticket's topic; nothing is sent when the topic is unchanged
pub async fn cmd_topic(config: &Config, id: &str, topic: &str, output_json: bool) -> Result<()> {
    let service = service(config)?;
    let ticket = service.get_ticket(id).await?;
    let previous = ticket.effective_topic().to_string();

    if previous == topic {
        return CommandOutput::new(json!({
            "id": ticket.id,
            "action": "unchanged",
            "topic": previous,
        }))
        .with_text(format!(
            "{} já está no tópico {}",
            ticket.id,
            topic_label(topic)
        ))
        .print(output_json);
    }

    let updated = service
        .update_ticket(&ticket.id, &TicketDraft::topic(topic))
        .await?;

    CommandOutput::new(json!({
        "id": updated.id,
        "action": "topic_changed",
        "previous_topic": previous,
        "new_topic": topic,
    }))
    .with_text(format!(
        "Atualizado {}: {} -> {}",
        updated.id,
        topic_label(&previous),
        topic_label(topic)
    ))
    .print(output_json)
}
