//! Dashboard state container.
//!
//! State transitions are a pure reducer (`reduce`) so they can be tested
//! without a runtime; `DashboardStore` wraps the state in a tokio `watch`
//! channel so the UI is notified of every dispatch.

use tokio::sync::watch;

use crate::types::Ticket;

/// Shared dashboard state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    /// Last ticket list returned by the service, in server order
    pub tickets: Vec<Ticket>,
    pub selected_ticket_id: Option<String>,
    /// True during the first fetch and during spinner-visible refreshes
    pub loading: bool,
    pub status_loading: bool,
    pub topic_loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tickets: Vec::new(),
            selected_ticket_id: None,
            loading: true,
            status_loading: false,
            topic_loading: false,
        }
    }
}

impl DashboardState {
    /// The selected ticket, if it is still part of the current snapshot
    pub fn selected_ticket(&self) -> Option<&Ticket> {
        let id = self.selected_ticket_id.as_deref()?;
        self.tickets.iter().find(|t| t.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    FetchStarted,
    TicketsLoaded(Vec<Ticket>),
    FetchFinished,
    Select(String),
    StatusMutationStarted,
    StatusMutationFinished,
    TopicMutationStarted,
    TopicMutationFinished,
}

/// Apply `action` to `state`.
pub fn reduce(mut state: DashboardState, action: StoreAction) -> DashboardState {
    match action {
        StoreAction::FetchStarted => state.loading = true,
        StoreAction::FetchFinished => state.loading = false,
        StoreAction::TicketsLoaded(tickets) => {
            state.tickets = tickets;
            // Auto-select the first ticket only when nothing is selected yet
            if state.selected_ticket_id.is_none()
                && let Some(first) = state.tickets.first()
            {
                state.selected_ticket_id = Some(first.id.clone());
            }
        }
        StoreAction::Select(id) => {
            if state.selected_ticket_id.as_deref() != Some(id.as_str()) {
                state.selected_ticket_id = Some(id);
                state.status_loading = false;
                state.topic_loading = false;
            }
        }
        StoreAction::StatusMutationStarted => state.status_loading = true,
        StoreAction::StatusMutationFinished => state.status_loading = false,
        StoreAction::TopicMutationStarted => state.topic_loading = true,
        StoreAction::TopicMutationFinished => state.topic_loading = false,
    }
    state
}

/// Observable wrapper around `DashboardState`.
#[derive(Debug)]
pub struct DashboardStore {
    tx: watch::Sender<DashboardState>,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new(DashboardState::default())
    }
}

impl DashboardStore {
    pub fn new(initial: DashboardState) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn dispatch(&self, action: StoreAction) {
        tracing::trace!(?action, "dispatch");
        self.tx.send_modify(|state| {
            let current = std::mem::take(state);
            *state = reduce(current, action);
        });
    }

    /// Receiver that is marked changed after every dispatch
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> DashboardState {
        self.tx.borrow().clone()
    }
}
