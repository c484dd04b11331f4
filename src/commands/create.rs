use serde_json::json;

use super::{CommandOutput, service};
use crate::api::TicketService;
use crate::config::Config;
use crate::error::Result;
use crate::types::{Channel, TicketDraft, TicketPriority, TicketStatus};

/// Options for creating a new ticket
pub struct CreateOptions {
    pub subject: String,
    pub channel: Channel,
    pub priority: TicketPriority,
    pub client_name: Option<String>,
    pub topic: Option<String>,
}

impl CreateOptions {
    fn into_draft(self) -> TicketDraft {
        TicketDraft {
            client_name: self.client_name,
            subject: Some(self.subject),
            channel: Some(self.channel),
            status: Some(TicketStatus::Novo),
            priority: Some(self.priority),
            topic: self.topic,
        }
    }
}

/// Create a new ticket and print its ID
pub async fn cmd_create(config: &Config, options: CreateOptions, output_json: bool) -> Result<()> {
    let draft = options.into_draft();
    let ticket = service(config)?.create_ticket(&draft).await?;
    tracing::info!(ticket = %ticket.id, "ticket created");

    CommandOutput::new(json!(ticket))
        .with_text(ticket.id.clone())
        .print(output_json)
}
