//! Polling refresh of the dashboard ticket list.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::api::TicketService;
use crate::store::{DashboardStore, StoreAction};

/// Period between silent background refreshes
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Whether a fetch toggles the loading indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Spinner,
    Silent,
}

/// Replace the store's tickets with the server's list.
///
/// Failures are logged and the previous snapshot is kept. Returns whether
/// the fetch succeeded.
pub async fn fetch_tickets<S: TicketService>(
    service: &S,
    store: &DashboardStore,
    mode: FetchMode,
) -> bool {
    if mode == FetchMode::Spinner {
        store.dispatch(StoreAction::FetchStarted);
    }

    let ok = match service.list_tickets().await {
        Ok(tickets) => {
            tracing::debug!(count = tickets.len(), ?mode, "tickets refreshed");
            store.dispatch(StoreAction::TicketsLoaded(tickets));
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch tickets");
            false
        }
    };

    if mode == FetchMode::Spinner {
        store.dispatch(StoreAction::FetchFinished);
    }
    ok
}

/// Spinner fetch, then silent fetches every `period` until the future is dropped.
///
/// Ticks never overlap a running fetch; late ticks are delayed rather than
/// fired in a burst.
pub async fn run_refresh_loop<S: TicketService>(
    service: &S,
    store: &DashboardStore,
    period: Duration,
) {
    fetch_tickets(service, store, FetchMode::Spinner).await;

    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        ticker.tick().await;
        fetch_tickets(service, store, FetchMode::Silent).await;
    }
}

/// Background refresh task; aborted when dropped
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn spawn_refresh_loop<S>(service: Arc<S>, store: Arc<DashboardStore>) -> RefreshHandle
where
    S: TicketService + 'static,
{
    spawn_refresh_loop_every(service, store, POLL_INTERVAL)
}

pub fn spawn_refresh_loop_every<S>(
    service: Arc<S>,
    store: Arc<DashboardStore>,
    period: Duration,
) -> RefreshHandle
where
    S: TicketService + 'static,
{
    let task = tokio::spawn(async move {
        run_refresh_loop(service.as_ref(), store.as_ref(), period).await;
    });
    RefreshHandle { task }
}
