use crate::types::{Channel, TicketPriority, TicketStatus};
use owo_colors::OwoColorize;

pub mod labels;
pub mod timestamp;

pub use labels::*;
pub use timestamp::*;

pub fn format_status_colored(status: TicketStatus) -> String {
    format_status_colored_with_format(status, |s| format!("[{}]", s))
}

pub fn format_status_colored_with_format<F>(status: TicketStatus, format_fn: F) -> String
where
    F: Fn(&str) -> String,
{
    let badge = format_fn(status_label(status));
    match status {
        TicketStatus::Novo => badge.yellow().to_string(),
        TicketStatus::EmAndamento => badge.cyan().to_string(),
        TicketStatus::Resolvido => badge.green().to_string(),
    }
}

pub fn format_priority_colored(priority: TicketPriority) -> String {
    let label = priority_label(priority);
    match priority {
        TicketPriority::Baixa => label.dimmed().to_string(),
        TicketPriority::Media => label.yellow().to_string(),
        TicketPriority::Alta => label.red().to_string(),
    }
}

pub fn format_channel_colored(channel: Channel) -> String {
    let label = channel_label(channel);
    match channel {
        Channel::WhatsApp => label.green().to_string(),
        Channel::Email => label.blue().to_string(),
        Channel::Chat => label.magenta().to_string(),
    }
}
