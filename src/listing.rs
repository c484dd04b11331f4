//! Ticket list view model: channel tabs, ordering and fuzzy search.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use jiff::tz::TimeZone;
use serde::Serialize;

use crate::display::{format_timestamp, timestamp_millis, topic_has_badge, topic_label};
use crate::types::{Channel, Ticket, TicketPriority, TicketStatus};

/// Channel tab of the ticket list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    Only(Channel),
}

impl ChannelFilter {
    /// Tabs in display order
    pub const TABS: [ChannelFilter; 4] = [
        ChannelFilter::All,
        ChannelFilter::Only(Channel::WhatsApp),
        ChannelFilter::Only(Channel::Email),
        ChannelFilter::Only(Channel::Chat),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChannelFilter::All => "Todos",
            ChannelFilter::Only(channel) => crate::display::channel_label(*channel),
        }
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            ChannelFilter::All => true,
            ChannelFilter::Only(channel) => ticket.channel == *channel,
        }
    }

    fn position(&self) -> usize {
        Self::TABS.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::TABS[(self.position() + 1) % Self::TABS.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::TABS.len();
        Self::TABS[(self.position() + len - 1) % len]
    }
}

impl From<Option<Channel>> for ChannelFilter {
    fn from(channel: Option<Channel>) -> Self {
        channel.map(ChannelFilter::Only).unwrap_or_default()
    }
}

/// Keep tickets of the tab's channel, in server order
pub fn filter_by_channel(tickets: &[Ticket], filter: ChannelFilter) -> Vec<Ticket> {
    tickets
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

/// Sort by last activity (`lastUpdate`, then `updatedAt`), most recent first.
///
/// Tickets without a parseable activity timestamp go last; the sort is stable.
pub fn order_tickets(tickets: &[Ticket], tz: &TimeZone) -> Vec<Ticket> {
    let mut keyed: Vec<(i64, &Ticket)> = tickets
        .iter()
        .map(|t| (timestamp_millis(t.last_activity(), tz).unwrap_or(0), t))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, t)| t.clone()).collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Name shown for a ticket in the list
pub fn display_name(ticket: &Ticket) -> String {
    let client = ticket.client.as_ref();
    non_empty(client.and_then(|c| c.name.as_deref()))
        .or(non_empty(Some(ticket.client_name.as_str())))
        .or(non_empty(client.and_then(|c| c.whatsapp.as_deref())))
        .or(non_empty(client.and_then(|c| c.email.as_deref())))
        .unwrap_or("Cliente")
        .to_string()
}

/// Secondary contact line shown under the name
pub fn contact_info(ticket: &Ticket) -> Option<String> {
    let client = ticket.client.as_ref()?;
    non_empty(client.email.as_deref())
        .or(non_empty(client.whatsapp.as_deref()))
        .map(str::to_string)
}

/// One display-ready row of the ticket list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRow {
    pub id: String,
    pub display_name: String,
    pub contact_info: Option<String>,
    pub subject: String,
    pub channel: Channel,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    /// Topic label, only for topics that get a badge
    pub topic_badge: Option<String>,
    pub last_update: String,
    #[serde(skip)]
    pub score: i64,
}

impl TicketRow {
    pub fn from_ticket(ticket: &Ticket, tz: &TimeZone) -> Self {
        Self {
            id: ticket.id.clone(),
            display_name: display_name(ticket),
            contact_info: contact_info(ticket),
            subject: ticket.subject.clone(),
            channel: ticket.channel,
            status: ticket.status,
            priority: ticket.priority,
            topic_badge: ticket
                .topic
                .as_deref()
                .filter(|t| topic_has_badge(t))
                .map(topic_label),
            last_update: format_timestamp(ticket.last_activity(), tz),
            score: 0,
        }
    }

    fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.display_name,
            self.subject,
            self.contact_info.as_deref().unwrap_or("")
        )
    }
}

/// Rows of one tab: channel filter, then activity order, then fuzzy search.
///
/// An empty query keeps activity order; otherwise rows are ranked by score.
pub fn build_rows(
    tickets: &[Ticket],
    filter: ChannelFilter,
    query: &str,
    tz: &TimeZone,
) -> Vec<TicketRow> {
    let ordered = order_tickets(&filter_by_channel(tickets, filter), tz);
    let rows: Vec<TicketRow> = ordered
        .iter()
        .map(|t| TicketRow::from_ticket(t, tz))
        .collect();

    let query = query.trim();
    if query.is_empty() {
        return rows;
    }

    let matcher = SkimMatcherV2::default().smart_case();
    let mut matched: Vec<TicketRow> = rows
        .into_iter()
        .filter_map(|mut row| {
            let score = matcher.fuzzy_match(&row.search_text(), query)?;
            row.score = score;
            Some(row)
        })
        .collect();
    matched.sort_by(|a, b| b.score.cmp(&a.score));
    matched
}

/// Ticket count of every tab, in tab order
pub fn tab_counts(tickets: &[Ticket]) -> Vec<(ChannelFilter, usize)> {
    ChannelFilter::TABS
        .iter()
        .map(|tab| (*tab, tickets.iter().filter(|t| tab.matches(t)).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Client;

    fn ticket(id: &str, channel: Channel, last_update: Option<&str>) -> Ticket {
        Ticket {
            id: id.to_string(),
            client_name: format!("Cliente {id}"),
            subject: format!("Assunto {id}"),
            channel,
            status: TicketStatus::Novo,
            priority: TicketPriority::Baixa,
            last_update: last_update.map(str::to_string),
            topic: None,
            messages: vec![],
            created_at: None,
            updated_at: None,
            client: None,
        }
    }

    fn ids(rows: &[TicketRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(ChannelFilter::All.next(), ChannelFilter::Only(Channel::WhatsApp));
        assert_eq!(ChannelFilter::Only(Channel::Chat).next(), ChannelFilter::All);
        assert_eq!(ChannelFilter::All.prev(), ChannelFilter::Only(Channel::Chat));
        assert_eq!(ChannelFilter::All.label(), "Todos");
        assert_eq!(ChannelFilter::Only(Channel::Chat).label(), "Chat Web");
    }

    #[test]
    fn test_filter_by_channel_keeps_order() {
        let tickets = vec![
            ticket("1", Channel::Email, None),
            ticket("2", Channel::WhatsApp, None),
            ticket("3", Channel::Email, None),
        ];
        let email = filter_by_channel(&tickets, ChannelFilter::Only(Channel::Email));
        let ids: Vec<&str> = email.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(filter_by_channel(&tickets, ChannelFilter::All).len(), 3);
    }

    #[test]
    fn test_order_by_last_activity() {
        let mut updated_only = ticket("u", Channel::Chat, None);
        updated_only.updated_at = Some("2024-02-01T00:00:00Z".to_string());
        let tickets = vec![
            ticket("old", Channel::Chat, Some("2024-01-01T00:00:00Z")),
            ticket("none", Channel::Chat, None),
            ticket("new", Channel::Chat, Some("2024-03-01T00:00:00Z")),
            updated_only,
        ];
        let ordered = order_tickets(&tickets, &TimeZone::UTC);
        let ids: Vec<&str> = ordered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "u", "old", "none"]);
    }

    #[test]
    fn test_display_name_fallback_chain() {
        let mut t = ticket("1", Channel::WhatsApp, None);
        t.client_name = String::new();
        assert_eq!(display_name(&t), "Cliente");

        t.client = Some(Client {
            id: "c".to_string(),
            email: Some("ana@example.com".to_string()),
            ..Default::default()
        });
        assert_eq!(display_name(&t), "ana@example.com");

        t.client.as_mut().unwrap().whatsapp = Some("+5511999990000".to_string());
        assert_eq!(display_name(&t), "+5511999990000");

        t.client_name = "Ana Souza".to_string();
        assert_eq!(display_name(&t), "Ana Souza");

        t.client.as_mut().unwrap().name = Some("Ana".to_string());
        assert_eq!(display_name(&t), "Ana");
    }

    #[test]
    fn test_contact_info_prefers_email() {
        let mut t = ticket("1", Channel::WhatsApp, None);
        assert_eq!(contact_info(&t), None);
        t.client = Some(Client {
            id: "c".to_string(),
            whatsapp: Some("+55".to_string()),
            ..Default::default()
        });
        assert_eq!(contact_info(&t).as_deref(), Some("+55"));
        t.client.as_mut().unwrap().email = Some("a@b.c".to_string());
        assert_eq!(contact_info(&t).as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_topic_badge() {
        let mut t = ticket("1", Channel::Chat, None);
        assert_eq!(TicketRow::from_ticket(&t, &TimeZone::UTC).topic_badge, None);
        t.topic = Some("geral".to_string());
        assert_eq!(TicketRow::from_ticket(&t, &TimeZone::UTC).topic_badge, None);
        t.topic = Some("comercial".to_string());
        assert_eq!(
            TicketRow::from_ticket(&t, &TimeZone::UTC).topic_badge.as_deref(),
            Some("Comercial")
        );
    }

    #[test]
    fn test_row_last_update_formatting() {
        let t = ticket("1", Channel::Chat, Some("2024-05-10T15:30:00Z"));
        assert_eq!(
            TicketRow::from_ticket(&t, &TimeZone::UTC).last_update,
            "10/05/2024, 15:30"
        );
        let t = ticket("2", Channel::Chat, None);
        assert_eq!(TicketRow::from_ticket(&t, &TimeZone::UTC).last_update, "--");
    }

    #[test]
    fn test_build_rows_search() {
        let mut boleto = ticket("1", Channel::Email, Some("2024-01-01T00:00:00Z"));
        boleto.subject = "Segunda via do boleto".to_string();
        let mut senha = ticket("2", Channel::Email, Some("2024-02-01T00:00:00Z"));
        senha.subject = "Troca de senha".to_string();
        let tickets = vec![boleto, senha];

        let all = build_rows(&tickets, ChannelFilter::All, "", &TimeZone::UTC);
        assert_eq!(ids(&all), vec!["2", "1"]);

        let found = build_rows(&tickets, ChannelFilter::All, "boleto", &TimeZone::UTC);
        assert_eq!(ids(&found), vec!["1"]);

        let none = build_rows(
            &tickets,
            ChannelFilter::Only(Channel::Chat),
            "boleto",
            &TimeZone::UTC,
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_tab_counts() {
        let tickets = vec![
            ticket("1", Channel::Email, None),
            ticket("2", Channel::WhatsApp, None),
            ticket("3", Channel::Email, None),
        ];
        let counts = tab_counts(&tickets);
        assert_eq!(counts[0], (ChannelFilter::All, 3));
        assert_eq!(counts[1], (ChannelFilter::Only(Channel::WhatsApp), 1));
        assert_eq!(counts[2], (ChannelFilter::Only(Channel::Email), 2));
        assert_eq!(counts[3], (ChannelFilter::Only(Channel::Chat), 0));
    }
}
