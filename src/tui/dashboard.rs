//! Full-screen support dashboard
//!
//! Server data lives in a [`DashboardStore`] owned by the component. A single
//! background future runs the refresh loop and mirrors every store change
//! into component state; dropping the component (quitting) cancels both.

#![allow(clippy::clone_on_copy)]

use std::sync::Arc;

use futures::future::join;
use iocraft::prelude::*;
use jiff::tz::TimeZone;

use crate::api::HttpTicketService;
use crate::detail::ClientPanel;
use crate::listing::{build_rows, tab_counts};
use crate::metrics::{TicketMetrics, metric_cards};
use crate::mutations::{change_topic, toggle_status};
use crate::refresh::{FetchMode, POLL_INTERVAL, fetch_tickets, run_refresh_loop};
use crate::store::{DashboardState, DashboardStore, StoreAction};
use crate::tui::components::{
    ClientHistory, Footer, Header, MetricCards, TabBar, TicketList, dashboard_shortcuts,
    search_shortcuts, topic_picker_shortcuts,
};
use crate::tui::model::{UiContext, UiEffect, UiState, key_to_action, reduce_ui_state};

/// Rows taken by everything except the ticket list body:
/// header, metric cards, tab bar, list borders, footer
const CHROME_HEIGHT: u16 = 11;

#[derive(Default, Props)]
pub struct DashboardProps {
    /// Ticket service; without one the dashboard only renders the empty store
    pub service: Option<Arc<HttpTicketService>>,
    /// Zone used to display timestamps (UTC when absent)
    pub timezone: Option<TimeZone>,
}

#[component]
pub fn Dashboard(props: &DashboardProps, mut hooks: Hooks) -> impl Into<AnyElement<'static>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let tz = props.timezone.clone().unwrap_or(TimeZone::UTC);

    let store: State<Arc<DashboardStore>> =
        hooks.use_state(|| Arc::new(DashboardStore::default()));
    let snapshot: State<DashboardState> = hooks.use_state(DashboardState::default);
    let previous_metrics: State<Option<TicketMetrics>> = hooks.use_state(|| None);
    let mut ui: State<UiState> = hooks.use_state(UiState::default);

    // Refresh loop and store mirror, cancelled together on unmount
    hooks.use_future({
        let store = store.read().clone();
        let service = props.service.clone();
        let mut snapshot = snapshot.clone();
        let mut previous_metrics = previous_metrics.clone();
        async move {
            let mut rx = store.subscribe();
            let mirror = async {
                let mut last_loaded: Option<TicketMetrics> = None;
                loop {
                    let state = rx.borrow_and_update().clone();
                    if !state.loading {
                        let current = TicketMetrics::compute(&state.tickets);
                        if let Some(last) = last_loaded
                            && last != current
                        {
                            previous_metrics.set(Some(last));
                        }
                        last_loaded = Some(current);
                    }
                    snapshot.set(state);
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            };
            match service {
                Some(service) => {
                    join(
                        run_refresh_loop(service.as_ref(), store.as_ref(), POLL_INTERVAL),
                        mirror,
                    )
                    .await;
                }
                None => mirror.await,
            }
        }
    });

    let toggle_handler: Handler<()> = hooks.use_async_handler({
        let store = store.read().clone();
        let service = props.service.clone();
        move |()| {
            let store = store.clone();
            let service = service.clone();
            async move {
                if let Some(service) = service {
                    toggle_status(service.as_ref(), &store).await;
                }
            }
        }
    });

    let topic_handler: Handler<String> = hooks.use_async_handler({
        let store = store.read().clone();
        let service = props.service.clone();
        move |topic: String| {
            let store = store.clone();
            let service = service.clone();
            async move {
                if let Some(service) = service {
                    change_topic(service.as_ref(), &store, &topic).await;
                }
            }
        }
    });

    let refresh_handler: Handler<()> = hooks.use_async_handler({
        let store = store.read().clone();
        let service = props.service.clone();
        move |()| {
            let store = store.clone();
            let service = service.clone();
            async move {
                if let Some(service) = service {
                    fetch_tickets(service.as_ref(), &store, FetchMode::Spinner).await;
                }
            }
        }
    });

    let list_height = height.saturating_sub(CHROME_HEIGHT) as usize;
    let state = snapshot.read().clone();
    let mut ui_now = ui.read().clone();

    let rows = build_rows(&state.tickets, ui_now.tab, &ui_now.search_query, &tz);
    ui_now.clamp(rows.len(), list_height);

    let panel = state
        .selected_ticket()
        .map(|ticket| ClientPanel::from_ticket(ticket, &tz));
    let expanded = panel
        .as_ref()
        .is_some_and(|p| ui_now.history_expanded(&p.ticket_id));

    let ctx = UiContext {
        row_ids: rows.iter().map(|r| r.id.clone()).collect(),
        list_height,
        selected_id: state.selected_ticket_id.clone(),
        topic_values: panel
            .as_ref()
            .map(|p| p.topic_options.iter().map(|o| o.value.clone()).collect())
            .unwrap_or_default(),
        current_topic_index: panel.as_ref().map(ClientPanel::topic_index).unwrap_or(0),
        history_len: panel.as_ref().map_or(0, |p| p.history.len()),
        status_loading: state.status_loading,
        topic_loading: state.topic_loading,
    };

    hooks.use_terminal_events({
        let store = store.read().clone();
        let toggle_handler = toggle_handler.clone();
        let topic_handler = topic_handler.clone();
        let refresh_handler = refresh_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mut current = ui.read().clone();
                current.clamp(ctx.row_ids.len(), ctx.list_height);
                let Some(action) = key_to_action(code, modifiers, &current) else {
                    return;
                };
                tracing::trace!(?action, "dashboard key");

                let (next, effect) = reduce_ui_state(current, action, &ctx);
                ui.set(next);
                match effect {
                    Some(UiEffect::Select(id)) => store.dispatch(StoreAction::Select(id)),
                    Some(UiEffect::ToggleStatus) => toggle_handler.clone()(()),
                    Some(UiEffect::ChangeTopic(topic)) => topic_handler.clone()(topic),
                    Some(UiEffect::Refresh) => refresh_handler.clone()(()),
                    None => {}
                }
            }
            _ => {}
        }
    });

    if ui.read().should_exit {
        system.exit();
    }

    let shortcuts = if ui_now.topic_picker.is_some() {
        topic_picker_shortcuts()
    } else if ui_now.search_focused {
        search_shortcuts()
    } else {
        dashboard_shortcuts()
    };
    let cards = metric_cards(
        &TicketMetrics::compute(&state.tickets),
        previous_metrics.get().as_ref(),
    );

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
        ) {
            Header(
                title: Some("Central de Atendimento"),
                subtitle: Some("Gestão unificada de tickets e clientes"),
                ticket_count: Some(state.tickets.len()),
                loading: state.loading,
            )
            MetricCards(cards)
            TabBar(
                active: ui_now.tab,
                counts: tab_counts(&state.tickets),
                query: ui_now.search_query.clone(),
                search_focused: ui_now.search_focused,
            )
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Row,
            ) {
                View(width: 55pct, height: 100pct) {
                    TicketList(
                        rows,
                        cursor: ui_now.cursor,
                        scroll_offset: ui_now.scroll,
                        selected_id: state.selected_ticket_id.clone(),
                        visible_height: list_height,
                        loading: state.loading,
                        has_focus: ui_now.topic_picker.is_none() && !ui_now.search_focused,
                    )
                }
                View(width: 45pct, height: 100pct) {
                    ClientHistory(
                        panel,
                        expanded,
                        topic_picker: ui_now.topic_picker,
                        status_loading: state.status_loading,
                        topic_loading: state.topic_loading,
                    )
                }
            }
            Footer(shortcuts)
        }
    }
}
