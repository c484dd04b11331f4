//! Status and topic changes for the selected ticket.
//!
//! Mutations are pessimistic: the store is never patched locally. After the
//! request (successful or not) the ticket list is re-fetched with the loading
//! indicator visible, then the mutation flag is cleared.

use crate::api::TicketService;
use crate::refresh::{FetchMode, fetch_tickets};
use crate::store::{DashboardStore, StoreAction};
use crate::types::{TicketDraft, TicketStatus};

/// What a mutation command ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Precondition not met; no request was sent
    Skipped,
    Applied,
    /// Request failed; the message is the logged error
    Failed(String),
}

/// Status a ticket moves to when its status is toggled
pub fn next_status(current: TicketStatus) -> TicketStatus {
    match current {
        TicketStatus::Resolvido => TicketStatus::EmAndamento,
        TicketStatus::Novo | TicketStatus::EmAndamento => TicketStatus::Resolvido,
    }
}

/// Resolve or reopen the selected ticket.
pub async fn toggle_status<S: TicketService>(
    service: &S,
    store: &DashboardStore,
) -> MutationOutcome {
    let snapshot = store.snapshot();
    let Some(ticket) = snapshot.selected_ticket() else {
        return MutationOutcome::Skipped;
    };
    let id = ticket.id.clone();
    let target = next_status(ticket.status);

    store.dispatch(StoreAction::StatusMutationStarted);
    let outcome = match service.update_ticket_status(&id, target).await {
        Ok(_) => {
            tracing::info!(ticket = %id, status = %target, "ticket status updated");
            MutationOutcome::Applied
        }
        Err(e) => {
            tracing::error!(ticket = %id, error = %e, "failed to update ticket status");
            MutationOutcome::Failed(e.to_string())
        }
    };
    fetch_tickets(service, store, FetchMode::Spinner).await;
    store.dispatch(StoreAction::StatusMutationFinished);
    outcome
}

/// Change the selected ticket's topic; no request when it is already `topic`.
pub async fn change_topic<S: TicketService>(
    service: &S,
    store: &DashboardStore,
    topic: &str,
) -> MutationOutcome {
    let snapshot = store.snapshot();
    let Some(ticket) = snapshot.selected_ticket() else {
        return MutationOutcome::Skipped;
    };
    if ticket.effective_topic() == topic {
        return MutationOutcome::Skipped;
    }
    let id = ticket.id.clone();

    store.dispatch(StoreAction::TopicMutationStarted);
    let outcome = match service.update_ticket(&id, &TicketDraft::topic(topic)).await {
        Ok(_) => {
            tracing::info!(ticket = %id, topic, "ticket topic updated");
            MutationOutcome::Applied
        }
        Err(e) => {
            tracing::error!(ticket = %id, error = %e, "failed to update ticket topic");
            MutationOutcome::Failed(e.to_string())
        }
    };
    fetch_tickets(service, store, FetchMode::Spinner).await;
    store.dispatch(StoreAction::TopicMutationFinished);
    outcome
}
