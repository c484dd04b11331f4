//! Client panel shown next to the ticket list for the selected ticket.

use jiff::tz::TimeZone;
use serde::Serialize;

use crate::display::{TopicOption, status_label, toggle_action_label, topic_options};
use crate::history::{HistoryItem, derive_history};
use crate::types::{Ticket, TicketStatus};

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Everything the client panel renders for one ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPanel {
    pub ticket_id: String,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub status: TicketStatus,
    pub status_label: &'static str,
    pub toggle_label: &'static str,
    /// Effective topic (`geral` when unset)
    pub topic: String,
    #[serde(skip)]
    pub topic_options: Vec<TopicOption>,
    pub history: Vec<HistoryItem>,
}

impl ClientPanel {
    pub fn from_ticket(ticket: &Ticket, tz: &TimeZone) -> Self {
        let client = ticket.client.as_ref();

        let client_name = non_empty(client.and_then(|c| c.name.as_deref()))
            .or(non_empty(Some(ticket.client_name.as_str())))
            .or(non_empty(client.and_then(|c| c.whatsapp.as_deref())))
            .unwrap_or("Cliente")
            .to_string();

        let client_email = non_empty(client.and_then(|c| c.email.as_deref())).map(str::to_string);

        let client_phone = non_empty(client.and_then(|c| c.whatsapp.as_deref()))
            .or_else(|| client.and_then(|c| c.phones.first()).map(String::as_str))
            .map(str::to_string);

        let topic = ticket.effective_topic().to_string();

        Self {
            ticket_id: ticket.id.clone(),
            client_name,
            client_email,
            client_phone,
            status: ticket.status,
            status_label: status_label(ticket.status),
            toggle_label: toggle_action_label(ticket.status),
            topic_options: topic_options(&topic),
            topic,
            history: derive_history(ticket, tz),
        }
    }

    /// Index of the current topic in `topic_options`
    pub fn topic_index(&self) -> usize {
        self.topic_options
            .iter()
            .position(|o| o.value == self.topic)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Channel, Client, Message, TicketPriority};

    fn ticket() -> Ticket {
        Ticket {
            id: "A".to_string(),
            client_name: "Maria".to_string(),
            subject: "Entrega atrasada".to_string(),
            channel: Channel::WhatsApp,
            status: TicketStatus::Novo,
            priority: TicketPriority::Alta,
            last_update: None,
            topic: None,
            messages: vec![Message {
                message: "hi".to_string(),
                timestamp: Some("2024-01-01T10:00:00Z".to_string()),
                from_client: true,
            }],
            created_at: None,
            updated_at: None,
            client: None,
        }
    }

    #[test]
    fn test_panel_without_client() {
        let panel = ClientPanel::from_ticket(&ticket(), &TimeZone::UTC);
        assert_eq!(panel.client_name, "Maria");
        assert_eq!(panel.client_email, None);
        assert_eq!(panel.client_phone, None);
        assert_eq!(panel.status_label, "Novo");
        assert_eq!(panel.toggle_label, "Marcar como resolvido");
        assert_eq!(panel.topic, "geral");
        assert_eq!(panel.topic_index(), 0);
        assert_eq!(panel.history.len(), 1);
    }

    #[test]
    fn test_panel_prefers_client_record() {
        let mut t = ticket();
        t.client = Some(Client {
            id: "c1".to_string(),
            name: Some("Maria Silva".to_string()),
            email: Some("maria@example.com".to_string()),
            phones: vec!["+55 11 4000-0000".to_string()],
            ..Default::default()
        });
        let panel = ClientPanel::from_ticket(&t, &TimeZone::UTC);
        assert_eq!(panel.client_name, "Maria Silva");
        assert_eq!(panel.client_email.as_deref(), Some("maria@example.com"));
        assert_eq!(panel.client_phone.as_deref(), Some("+55 11 4000-0000"));

        t.client.as_mut().unwrap().whatsapp = Some("+5511999990000".to_string());
        let panel = ClientPanel::from_ticket(&t, &TimeZone::UTC);
        assert_eq!(panel.client_phone.as_deref(), Some("+5511999990000"));
    }

    #[test]
    fn test_panel_name_falls_back_to_whatsapp_then_default() {
        let mut t = ticket();
        t.client_name = String::new();
        assert_eq!(ClientPanel::from_ticket(&t, &TimeZone::UTC).client_name, "Cliente");

        t.client = Some(Client {
            id: "c1".to_string(),
            whatsapp: Some("+5511".to_string()),
            ..Default::default()
        });
        assert_eq!(ClientPanel::from_ticket(&t, &TimeZone::UTC).client_name, "+5511");
    }

    #[test]
    fn test_panel_custom_topic_is_selectable() {
        let mut t = ticket();
        t.topic = Some("garantia".to_string());
        t.status = TicketStatus::Resolvido;
        let panel = ClientPanel::from_ticket(&t, &TimeZone::UTC);
        assert_eq!(panel.topic_options.len(), 5);
        assert_eq!(panel.topic_index(), 4);
        assert_eq!(panel.toggle_label, "Reabrir ticket");
    }
}
