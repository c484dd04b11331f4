//! Human-facing labels for ticket enumerations.
//!
//! Every lookup is an exhaustive match, so adding a variant to one of the
//! enums in `types` fails to compile until it has a label here.

use crate::types::{Channel, DEFAULT_TOPIC, TicketPriority, TicketStatus};

/// A selectable topic with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOption {
    pub value: String,
    pub label: String,
}

impl TopicOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Topics offered by the topic picker, in display order
pub const KNOWN_TOPICS: &[(&str, &str)] = &[
    (DEFAULT_TOPIC, "Geral"),
    ("suporte", "Suporte"),
    ("comercial", "Comercial"),
    ("financeiro", "Financeiro"),
];

/// Topic values that never get a badge in the ticket list
const UNBADGED_TOPICS: &[&str] = &[DEFAULT_TOPIC, "whatsapp", "email", "chat"];

pub fn status_label(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Novo => "Novo",
        TicketStatus::EmAndamento => "Em Andamento",
        TicketStatus::Resolvido => "Resolvido",
    }
}

pub fn priority_label(priority: TicketPriority) -> &'static str {
    match priority {
        TicketPriority::Baixa => "Baixa",
        TicketPriority::Media => "Média",
        TicketPriority::Alta => "Alta",
    }
}

pub fn channel_label(channel: Channel) -> &'static str {
    match channel {
        Channel::WhatsApp => "WhatsApp",
        Channel::Email => "E-mail",
        Channel::Chat => "Chat Web",
    }
}

/// Badge telling whether a message came from the client or from the team
pub fn origin_label(from_client: bool) -> &'static str {
    if from_client { "Cliente" } else { "Equipe" }
}

/// Label of the status toggle action for a ticket in `status`
pub fn toggle_action_label(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Resolvido => "Reabrir ticket",
        TicketStatus::Novo | TicketStatus::EmAndamento => "Marcar como resolvido",
    }
}

/// Label for a topic value, falling back to the raw value
pub fn topic_label(topic: &str) -> String {
    KNOWN_TOPICS
        .iter()
        .find(|(value, _)| *value == topic)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| topic.to_string())
}

/// Whether the ticket list shows a badge for this topic
pub fn topic_has_badge(topic: &str) -> bool {
    !topic.is_empty() && !UNBADGED_TOPICS.contains(&topic)
}

/// Topic picker options for a ticket whose effective topic is `current`.
///
/// A topic outside the known set is appended so the picker can still show it.
pub fn topic_options(current: &str) -> Vec<TopicOption> {
    let mut options: Vec<TopicOption> = KNOWN_TOPICS
        .iter()
        .map(|(value, label)| TopicOption::new(*value, *label))
        .collect();

    if !options.iter().any(|o| o.value == current) {
        options.push(TopicOption::new(current, current));
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(TicketStatus::Novo), "Novo");
        assert_eq!(status_label(TicketStatus::EmAndamento), "Em Andamento");
        assert_eq!(status_label(TicketStatus::Resolvido), "Resolvido");
    }

    #[test]
    fn test_priority_and_channel_labels() {
        assert_eq!(priority_label(TicketPriority::Media), "Média");
        assert_eq!(channel_label(Channel::Email), "E-mail");
        assert_eq!(channel_label(Channel::Chat), "Chat Web");
    }

    #[test]
    fn test_origin_label() {
        assert_eq!(origin_label(true), "Cliente");
        assert_eq!(origin_label(false), "Equipe");
    }

    #[test]
    fn test_toggle_action_label() {
        assert_eq!(toggle_action_label(TicketStatus::Resolvido), "Reabrir ticket");
        assert_eq!(
            toggle_action_label(TicketStatus::Novo),
            "Marcar como resolvido"
        );
    }

    #[test]
    fn test_topic_label_fallback() {
        assert_eq!(topic_label("financeiro"), "Financeiro");
        assert_eq!(topic_label("garantia"), "garantia");
    }

    #[test]
    fn test_topic_badge_visibility() {
        assert!(!topic_has_badge("geral"));
        assert!(!topic_has_badge("whatsapp"));
        assert!(!topic_has_badge(""));
        assert!(topic_has_badge("suporte"));
        assert!(topic_has_badge("garantia"));
    }

    #[test]
    fn test_topic_options_appends_unknown_current() {
        let known = topic_options("suporte");
        assert_eq!(known.len(), 4);

        let custom = topic_options("garantia");
        assert_eq!(custom.len(), 5);
        assert_eq!(custom[4], TopicOption::new("garantia", "garantia"));
    }
}
