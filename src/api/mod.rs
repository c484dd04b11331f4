//! Ticket service client.
//!
//! The dashboard and CLI only talk to the service through [`TicketService`],
//! so tests can substitute an in-memory implementation.

mod error;
#[cfg(test)]
pub(crate) mod fake;
mod http;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Ticket, TicketDraft, TicketStatus};

pub use error::check_response;
pub use http::HttpTicketService;

/// Body of `PATCH /tickets/{id}/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: TicketStatus,
}

/// Body of `POST /tickets/{id}/messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub message: String,
    pub from_client: bool,
}

/// Body of `POST /integrations/whatsapp/send`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WhatsAppMessage {
    pub to: String,
    pub message: String,
}

/// Operations offered by the remote ticket service
pub trait TicketService: Send + Sync {
    /// Fetch every ticket, in server order
    fn list_tickets(&self) -> impl Future<Output = Result<Vec<Ticket>>> + Send;

    fn get_ticket(&self, id: &str) -> impl Future<Output = Result<Ticket>> + Send;

    fn create_ticket(&self, draft: &TicketDraft) -> impl Future<Output = Result<Ticket>> + Send;

    /// Partial update; only the fields set on `draft` are sent
    fn update_ticket(
        &self,
        id: &str,
        draft: &TicketDraft,
    ) -> impl Future<Output = Result<Ticket>> + Send;

    fn update_ticket_status(
        &self,
        id: &str,
        status: TicketStatus,
    ) -> impl Future<Output = Result<Ticket>> + Send;

    fn delete_ticket(&self, id: &str) -> impl Future<Output = Result<()>> + Send;

    fn add_message(
        &self,
        id: &str,
        message: &str,
        from_client: bool,
    ) -> impl Future<Output = Result<()>> + Send;

    fn send_whatsapp_message(
        &self,
        to: &str,
        message: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}
