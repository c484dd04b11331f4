//! Aggregate metric cards computed from the current ticket snapshot.

use serde::Serialize;

use crate::types::{Channel, Ticket, TicketPriority, TicketStatus};

/// Raw counts behind the metric cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketMetrics {
    pub total: usize,
    pub active: usize,
    pub new: usize,
    pub resolved: usize,
    pub high_priority: usize,
    pub whatsapp: usize,
    pub email: usize,
    pub chat: usize,
}

impl TicketMetrics {
    pub fn compute(tickets: &[Ticket]) -> Self {
        let mut metrics = TicketMetrics {
            total: tickets.len(),
            ..Default::default()
        };

        for ticket in tickets {
            match ticket.status {
                TicketStatus::Novo => metrics.new += 1,
                TicketStatus::EmAndamento => {}
                TicketStatus::Resolvido => metrics.resolved += 1,
            }
            if !ticket.status.is_resolved() {
                metrics.active += 1;
                if ticket.priority == TicketPriority::Alta {
                    metrics.high_priority += 1;
                }
            }
            match ticket.channel {
                Channel::WhatsApp => metrics.whatsapp += 1,
                Channel::Email => metrics.email += 1,
                Channel::Chat => metrics.chat += 1,
            }
        }

        metrics
    }

    /// Share of resolved tickets, rounded to a whole percent
    pub fn resolved_percent(&self) -> u64 {
        if self.total == 0 {
            return 0;
        }
        ((self.resolved as f64 / self.total as f64) * 100.0).round() as u64
    }

    pub fn channel_count(&self, channel: Channel) -> usize {
        match channel {
            Channel::WhatsApp => self.whatsapp,
            Channel::Email => self.email,
            Channel::Chat => self.chat,
        }
    }
}

/// Change relative to the previous snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// Signed percent change
    pub value: i64,
    /// Whether the change is good news for the team
    pub is_positive: bool,
}

impl Trend {
    pub fn text(&self) -> String {
        let sign = if self.value > 0 { "+" } else { "" };
        format!("{}{}% em relação ao período anterior", sign, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

fn percent_change(previous: u64, current: u64) -> Option<i64> {
    if previous == 0 || previous == current {
        return None;
    }
    let change = (current as f64 - previous as f64) / previous as f64 * 100.0;
    Some(change.round() as i64)
}

/// `higher_is_better` decides the colour of the trend, not its sign
fn trend(previous: Option<u64>, current: u64, higher_is_better: bool) -> Option<Trend> {
    let value = percent_change(previous?, current)?;
    Some(Trend {
        value,
        is_positive: (value > 0) == higher_is_better,
    })
}

/// Build the four dashboard cards, with trends when a previous snapshot exists.
pub fn metric_cards(current: &TicketMetrics, previous: Option<&TicketMetrics>) -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Tickets Ativos",
            value: current.active.to_string(),
            trend: trend(previous.map(|p| p.active as u64), current.active as u64, false),
        },
        MetricCard {
            title: "Novos",
            value: current.new.to_string(),
            trend: trend(previous.map(|p| p.new as u64), current.new as u64, false),
        },
        MetricCard {
            title: "Resolvidos",
            value: format!("{}%", current.resolved_percent()),
            trend: trend(
                previous.map(TicketMetrics::resolved_percent),
                current.resolved_percent(),
                true,
            ),
        },
        MetricCard {
            title: "Alta Prioridade",
            value: current.high_priority.to_string(),
            trend: trend(
                previous.map(|p| p.high_priority as u64),
                current.high_priority as u64,
                false,
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(channel: Channel, status: TicketStatus, priority: TicketPriority) -> Ticket {
        Ticket {
            id: "T".to_string(),
            client_name: String::new(),
            subject: String::new(),
            channel,
            status,
            priority,
            last_update: None,
            topic: None,
            messages: vec![],
            created_at: None,
            updated_at: None,
            client: None,
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let metrics = TicketMetrics::compute(&[]);
        assert_eq!(metrics, TicketMetrics::default());
        let cards = metric_cards(&metrics, None);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[2].value, "0%");
        assert!(cards.iter().all(|c| c.trend.is_none()));
    }

    #[test]
    fn test_counts() {
        let tickets = vec![
            ticket(Channel::WhatsApp, TicketStatus::Novo, TicketPriority::Alta),
            ticket(Channel::WhatsApp, TicketStatus::EmAndamento, TicketPriority::Baixa),
            ticket(Channel::Email, TicketStatus::Resolvido, TicketPriority::Alta),
            ticket(Channel::Chat, TicketStatus::Novo, TicketPriority::Media),
        ];
        let metrics = TicketMetrics::compute(&tickets);
        assert_eq!(metrics.total, 4);
        assert_eq!(metrics.active, 3);
        assert_eq!(metrics.new, 2);
        assert_eq!(metrics.resolved, 1);
        // Resolved high-priority tickets are not counted
        assert_eq!(metrics.high_priority, 1);
        assert_eq!(metrics.channel_count(Channel::WhatsApp), 2);
        assert_eq!(metrics.channel_count(Channel::Email), 1);
        assert_eq!(metrics.resolved_percent(), 25);

        let cards = metric_cards(&metrics, None);
        assert_eq!(cards[0].title, "Tickets Ativos");
        assert_eq!(cards[0].value, "3");
        assert_eq!(cards[2].value, "25%");
    }

    #[test]
    fn test_trend_against_previous() {
        let previous = TicketMetrics {
            total: 4,
            active: 4,
            new: 2,
            ..Default::default()
        };
        let current = TicketMetrics {
            total: 4,
            active: 3,
            new: 2,
            resolved: 1,
            ..Default::default()
        };
        let cards = metric_cards(&current, Some(&previous));

        let active = cards[0].trend.unwrap();
        assert_eq!(active.value, -25);
        assert!(active.is_positive);
        assert_eq!(active.text(), "-25% em relação ao período anterior");

        // Unchanged metric has no trend
        assert!(cards[1].trend.is_none());
        // Previous zero has no baseline
        assert!(cards[2].trend.is_none());
    }

    #[test]
    fn test_trend_text_positive_sign() {
        let trend = Trend {
            value: 12,
            is_positive: false,
        };
        assert_eq!(trend.text(), "+12% em relação ao período anterior");
    }
}
