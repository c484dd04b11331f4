//! Unified client-interaction history for a ticket.
//!
//! History is never stored: it is derived from the ticket's `messages` every
//! time it is displayed.

use jiff::tz::TimeZone;
use serde::Serialize;

use crate::display::{format_timestamp, non_blank, timestamp_millis};
use crate::types::{Channel, Ticket, TicketStatus};

/// Display-ready representation of one message in a ticket's timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// `{ticket_id}-{index}`, index in the ticket's original message order
    pub id: String,
    pub channel: Channel,
    pub message: String,
    /// Already formatted for display
    pub timestamp: String,
    /// Current status of the parent ticket
    pub status: TicketStatus,
    pub from_client: bool,
}

/// Derive the history of `ticket`, most recent first.
///
/// Messages without a parseable timestamp sort by the ticket's `updatedAt`,
/// and by the epoch when that is missing too.
pub fn derive_history(ticket: &Ticket, tz: &TimeZone) -> Vec<HistoryItem> {
    let fallback_key = timestamp_millis(ticket.updated_at.as_deref(), tz).unwrap_or(0);

    let mut keyed: Vec<(i64, HistoryItem)> = ticket
        .messages
        .iter()
        .enumerate()
        .map(|(index, msg)| {
            let sort_key =
                timestamp_millis(msg.timestamp.as_deref(), tz).unwrap_or(fallback_key);
            let shown =
                non_blank(msg.timestamp.as_deref()).or(non_blank(ticket.updated_at.as_deref()));
            let item = HistoryItem {
                id: format!("{}-{}", ticket.id, index),
                channel: ticket.channel,
                message: msg.message.clone(),
                timestamp: format_timestamp(shown, tz),
                status: ticket.status,
                from_client: msg.from_client,
            };
            (sort_key, item)
        })
        .collect();

    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Truncate-then-expand presentation of a history.
///
/// Only the most recent item is visible until the agent expands the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryView {
    pub items: Vec<HistoryItem>,
    pub expanded: bool,
}

impl HistoryView {
    pub fn new(items: Vec<HistoryItem>, expanded: bool) -> Self {
        Self { items, expanded }
    }

    pub fn has_more(&self) -> bool {
        self.items.len() > 1
    }

    pub fn visible(&self) -> &[HistoryItem] {
        if self.expanded {
            &self.items
        } else {
            &self.items[..self.items.len().min(1)]
        }
    }

    /// Flip expansion; does nothing when there is nothing to expand
    pub fn toggle(&mut self) {
        if self.has_more() {
            self.expanded = !self.expanded;
        }
    }

    /// Hint line shown above a multi-message history
    pub fn hint(&self) -> Option<&'static str> {
        match (self.has_more(), self.expanded) {
            (false, _) => None,
            (true, false) => {
                Some("Mostrando a última mensagem. Pressione Espaço para ver todo o histórico.")
            }
            (true, true) => Some(
                "Exibindo todas as mensagens deste atendimento. Pressione Espaço para ocultar novamente.",
            ),
        }
    }
}
