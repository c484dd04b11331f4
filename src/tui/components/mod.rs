//! Dashboard TUI components

pub mod client_history;
pub mod footer;
pub mod header;
pub mod metric_cards;
pub mod tab_bar;
pub mod ticket_list;

pub use client_history::{ClientHistory, ClientHistoryProps};
pub use footer::{
    Footer, FooterProps, Shortcut, dashboard_shortcuts, search_shortcuts, topic_picker_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use metric_cards::{MetricCards, MetricCardsProps};
pub use tab_bar::{TabBar, TabBarProps};
pub use ticket_list::{TicketList, TicketListProps, TicketListRow, TicketListRowProps};
