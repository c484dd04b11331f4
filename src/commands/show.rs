use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, service};
use crate::api::TicketService;
use crate::config::Config;
use crate::detail::ClientPanel;
use crate::display::{
    channel_label, format_channel_colored, format_priority_colored, format_status_colored,
    origin_label, topic_label,
};
use crate::error::Result;
use crate::history::{HistoryItem, HistoryView};

const EMPTY_HISTORY: &str = "Nenhuma interação registrada até o momento.";

fn format_history_item(item: &HistoryItem) -> String {
    let origin = if item.from_client {
        origin_label(true).blue().to_string()
    } else {
        origin_label(false).magenta().to_string()
    };
    format!(
        "  {} {} {}\n    {}",
        item.timestamp.dimmed(),
        channel_label(item.channel),
        origin,
        item.message
    )
}

/// Show the client panel and interaction history of a ticket
pub async fn cmd_show(config: &Config, id: &str, all: bool, output_json: bool) -> Result<()> {
    let tz = config.timezone()?;
    let ticket = service(config)?.get_ticket(id).await?;
    let panel = ClientPanel::from_ticket(&ticket, &tz);
    let view = HistoryView::new(panel.history.clone(), all);

    let mut text = String::new();
    text.push_str(&format!(
        "{} {}\n",
        panel.client_name.bold(),
        format_status_colored(panel.status)
    ));
    if let Some(email) = &panel.client_email {
        text.push_str(&format!("  E-mail:   {}\n", email));
    }
    if let Some(phone) = &panel.client_phone {
        text.push_str(&format!("  Telefone: {}\n", phone));
    }
    text.push_str(&format!(
        "  {} {} | {} | Tópico: {}\n",
        ticket.id.cyan(),
        format_channel_colored(ticket.channel),
        format_priority_colored(ticket.priority),
        topic_label(&panel.topic)
    ));
    text.push_str(&format!("  {}\n\n", ticket.subject));

    text.push_str(&format!("{}\n", "Histórico do cliente".cyan().bold()));
    if view.items.is_empty() {
        text.push_str(&format!("  {}", EMPTY_HISTORY.dimmed()));
    } else {
        if view.has_more() && !view.expanded {
            text.push_str(&format!(
                "  {}\n",
                "Mostrando a última mensagem. Use --all para ver todo o histórico.".dimmed()
            ));
        }
        let lines: Vec<String> = view.visible().iter().map(format_history_item).collect();
        text.push_str(&lines.join("\n"));
    }

    CommandOutput::new(json!({
        "ticket": ticket,
        "panel": panel,
    }))
    .with_text(text)
    .print(output_json)
}
