use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{print_json, service};
use crate::api::TicketService;
use crate::config::Config;
use crate::display::{channel_label, priority_label, status_label};
use crate::error::Result;
use crate::listing::{ChannelFilter, TicketRow, build_rows};
use crate::types::Channel;

/// A row in the ticket list table
#[derive(Tabled)]
struct LsRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Cliente")]
    client: String,
    #[tabled(rename = "Assunto")]
    subject: String,
    #[tabled(rename = "Canal")]
    channel: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Prioridade")]
    priority: String,
    #[tabled(rename = "Atualizado")]
    updated: String,
}

impl From<&TicketRow> for LsRow {
    fn from(row: &TicketRow) -> Self {
        let subject = match &row.topic_badge {
            Some(badge) => format!("{} [{}]", row.subject, badge),
            None => row.subject.clone(),
        };
        let client = match &row.contact_info {
            Some(contact) => format!("{}\n{}", row.display_name, contact),
            None => row.display_name.clone(),
        };
        Self {
            id: row.id.clone(),
            client,
            subject,
            channel: channel_label(row.channel).to_string(),
            status: status_label(row.status).to_string(),
            priority: priority_label(row.priority).to_string(),
            updated: row.last_update.clone(),
        }
    }
}

/// List tickets by most recent activity, optionally filtered by channel and search query
pub async fn cmd_ls(
    config: &Config,
    channel: Option<Channel>,
    search: Option<&str>,
    output_json: bool,
) -> Result<()> {
    let tz = config.timezone()?;
    let tickets = service(config)?.list_tickets().await?;
    let rows = build_rows(
        &tickets,
        ChannelFilter::from(channel),
        search.unwrap_or(""),
        &tz,
    );

    if output_json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        println!("{}", "Nenhum ticket encontrado.".dimmed());
        return Ok(());
    }

    let table_rows: Vec<LsRow> = rows.iter().map(LsRow::from).collect();
    let mut table = Table::new(table_rows);
    table.with(Style::modern());
    println!("{}", table);
    Ok(())
}
