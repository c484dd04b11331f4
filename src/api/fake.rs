//! In-memory `TicketService` that records every call.

use std::sync::Mutex;

use super::TicketService;
use crate::error::{DeskError, Result};
use crate::types::{Ticket, TicketDraft, TicketStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Get(String),
    Create(TicketDraft),
    Update(String, TicketDraft),
    UpdateStatus(String, TicketStatus),
    Delete(String),
    AddMessage(String, String, bool),
    SendWhatsApp(String, String),
}

#[derive(Debug, Default)]
pub struct FakeTicketService {
    pub tickets: Mutex<Vec<Ticket>>,
    pub calls: Mutex<Vec<Call>>,
    /// When set, every call fails with `DeskError::Api { status: 500 }`
    pub fail: Mutex<bool>,
}

impl FakeTicketService {
    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self {
            tickets: Mutex::new(tickets),
            ..Default::default()
        }
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    pub fn set_tickets(&self, tickets: Vec<Ticket>) {
        *self.tickets.lock().unwrap() = tickets;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if *self.fail.lock().unwrap() {
            return Err(DeskError::Api {
                status: 500,
                message: "unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn find(&self, id: &str) -> Result<Ticket> {
        self.tickets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| DeskError::TicketNotFound(id.to_string()))
    }

    fn modify(&self, id: &str, f: impl FnOnce(&mut Ticket)) -> Result<Ticket> {
        let mut tickets = self.tickets.lock().unwrap();
        let ticket = tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DeskError::TicketNotFound(id.to_string()))?;
        f(ticket);
        Ok(ticket.clone())
    }
}

impl TicketService for FakeTicketService {
    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.record(Call::List)?;
        Ok(self.tickets.lock().unwrap().clone())
    }

    async fn get_ticket(&self, id: &str) -> Result<Ticket> {
        self.record(Call::Get(id.to_string()))?;
        self.find(id)
    }

    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket> {
        self.record(Call::Create(draft.clone()))?;
        Err(DeskError::Other("create is not supported".to_string()))
    }

    async fn update_ticket(&self, id: &str, draft: &TicketDraft) -> Result<Ticket> {
        self.record(Call::Update(id.to_string(), draft.clone()))?;
        self.modify(id, |t| {
            if let Some(topic) = &draft.topic {
                t.topic = Some(topic.clone());
            }
        })
    }

    async fn update_ticket_status(&self, id: &str, status: TicketStatus) -> Result<Ticket> {
        self.record(Call::UpdateStatus(id.to_string(), status))?;
        self.modify(id, |t| t.status = status)
    }

    async fn delete_ticket(&self, id: &str) -> Result<()> {
        self.record(Call::Delete(id.to_string()))?;
        self.tickets.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn add_message(&self, id: &str, message: &str, from_client: bool) -> Result<()> {
        self.record(Call::AddMessage(
            id.to_string(),
            message.to_string(),
            from_client,
        ))
    }

    async fn send_whatsapp_message(&self, to: &str, message: &str) -> Result<()> {
        self.record(Call::SendWhatsApp(to.to_string(), message.to_string()))
    }
}

pub fn ticket(id: &str, status: TicketStatus) -> Ticket {
    Ticket {
        id: id.to_string(),
        client_name: format!("Cliente {id}"),
        subject: format!("Assunto {id}"),
        channel: crate::types::Channel::WhatsApp,
        status,
        priority: crate::types::TicketPriority::Media,
        last_update: None,
        topic: None,
        messages: vec![],
        created_at: None,
        updated_at: None,
        client: None,
    }
}
