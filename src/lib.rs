pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detail;
pub mod display;
pub mod error;
pub mod history;
pub mod listing;
pub mod logging;
pub mod metrics;
pub mod mutations;
pub mod refresh;
pub mod store;
pub mod tui;
pub mod types;

#[cfg(test)]
pub(crate) mod test_guards;

pub use api::{HttpTicketService, TicketService};
pub use config::Config;
pub use error::{DeskError, Result};
pub use store::{DashboardState, DashboardStore, StoreAction};
pub use types::{Channel, Client, Message, Ticket, TicketDraft, TicketPriority, TicketStatus};
