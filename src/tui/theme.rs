//! Theme system for TUI colors and styles
//!
//! Colors match the CLI output in `display`.

use iocraft::prelude::Color;

use crate::types::{Channel, TicketPriority, TicketStatus};

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_novo: Color,
    pub status_em_andamento: Color,
    pub status_resolvido: Color,

    // Priority colors
    pub priority_baixa: Color,
    pub priority_media: Color,
    pub priority_alta: Color,

    // Channel colors
    pub channel_whatsapp: Color,
    pub channel_email: Color,
    pub channel_chat: Color,

    // Message origin
    pub origin_client: Color,
    pub origin_agent: Color,

    // Trend
    pub trend_positive: Color,
    pub trend_negative: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_novo: Color::Yellow,
            status_em_andamento: Color::Cyan,
            status_resolvido: Color::Green,

            priority_baixa: GREY,
            priority_media: Color::Yellow,
            priority_alta: Color::Red,

            channel_whatsapp: Color::Green,
            channel_email: Color::Blue,
            channel_chat: Color::Magenta,

            origin_client: Color::Blue,
            origin_agent: Color::Magenta,

            trend_positive: Color::Green,
            trend_negative: Color::Red,

            border: GREY,
            border_focused: Color::Blue,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Novo => self.status_novo,
            TicketStatus::EmAndamento => self.status_em_andamento,
            TicketStatus::Resolvido => self.status_resolvido,
        }
    }

    pub fn priority_color(&self, priority: TicketPriority) -> Color {
        match priority {
            TicketPriority::Baixa => self.priority_baixa,
            TicketPriority::Media => self.priority_media,
            TicketPriority::Alta => self.priority_alta,
        }
    }

    pub fn channel_color(&self, channel: Channel) -> Color {
        match channel {
            Channel::WhatsApp => self.channel_whatsapp,
            Channel::Email => self.channel_email,
            Channel::Chat => self.channel_chat,
        }
    }

    pub fn origin_color(&self, from_client: bool) -> Color {
        if from_client {
            self.origin_client
        } else {
            self.origin_agent
        }
    }

    pub fn trend_color(&self, is_positive: bool) -> Color {
        if is_positive {
            self.trend_positive
        } else {
            self.trend_negative
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
