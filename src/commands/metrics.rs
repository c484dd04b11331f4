use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, service};
use crate::api::TicketService;
use crate::config::Config;
use crate::error::Result;
use crate::metrics::{TicketMetrics, metric_cards};
use crate::types::Channel;

/// Print the dashboard metric cards for the current ticket list
pub async fn cmd_metrics(config: &Config, output_json: bool) -> Result<()> {
    let tickets = service(config)?.list_tickets().await?;
    let metrics = TicketMetrics::compute(&tickets);
    let cards = metric_cards(&metrics, None);

    let mut text = String::new();
    for card in &cards {
        text.push_str(&format!("{:<18} {}\n", card.title, card.value.bold()));
    }
    text.push('\n');
    let channels: Vec<String> = Channel::ALL
        .iter()
        .map(|c| {
            format!(
                "{}: {}",
                crate::display::channel_label(*c),
                metrics.channel_count(*c)
            )
        })
        .collect();
    text.push_str(&channels.join(" | ").dimmed().to_string());

    CommandOutput::new(json!({
        "cards": cards,
        "counts": metrics,
    }))
    .with_text(text)
    .print(output_json)
}
