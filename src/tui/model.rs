//! Dashboard UI state, separate from the ticket store
//!
//! The store owns server data and the selected ticket. Everything here is
//! view-only (active tab, cursor, search, history expansion, topic picker)
//! and is reduced without any iocraft rendering, so it can be unit tested.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::listing::ChannelFilter;

/// View-only state of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub tab: ChannelFilter,
    /// Index of the highlighted row in the current tab
    pub cursor: usize,
    pub scroll: usize,
    pub search_query: String,
    pub search_focused: bool,
    /// Ticket whose history is expanded; collapses when another ticket is selected
    pub expanded_for: Option<String>,
    /// Highlighted option while the topic picker is open
    pub topic_picker: Option<usize>,
    pub should_exit: bool,
}

impl UiState {
    pub fn history_expanded(&self, ticket_id: &str) -> bool {
        self.expanded_for.as_deref() == Some(ticket_id)
    }

    /// Keep cursor and scroll inside a list that may have shrunk since the last event
    pub fn clamp(&mut self, row_count: usize, list_height: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
        self.scroll = adjust_scroll(self.scroll.min(self.cursor), self.cursor, list_height);
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Quit,

    // Tabs
    NextTab,
    PrevTab,
    SelectTab(usize),

    // List
    MoveUp,
    MoveDown,
    Select,

    // Client panel
    ToggleHistory,
    ToggleStatus,
    OpenTopicPicker,
    TopicPickerUp,
    TopicPickerDown,
    ConfirmTopic,
    CancelTopicPicker,

    Refresh,

    // Search
    FocusSearch,
    SearchInput(char),
    SearchBackspace,
    ExitSearch,
    ClearSearchAndExit,
}

/// Work the reducer asks the component to perform against the store or server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    Select(String),
    ToggleStatus,
    ChangeTopic(String),
    Refresh,
}

/// Data the reducer needs from the current render
#[derive(Debug, Clone, Default)]
pub struct UiContext {
    /// Ticket ids of the visible rows, in display order
    pub row_ids: Vec<String>,
    pub list_height: usize,
    pub selected_id: Option<String>,
    /// Topic values offered by the picker for the selected ticket
    pub topic_values: Vec<String>,
    pub current_topic_index: usize,
    /// History length of the selected ticket; expanding needs more than one item
    pub history_len: usize,
    pub status_loading: bool,
    pub topic_loading: bool,
}

pub fn reduce_ui_state(
    mut state: UiState,
    action: UiAction,
    ctx: &UiContext,
) -> (UiState, Option<UiEffect>) {
    let row_count = ctx.row_ids.len();
    let mut effect = None;

    match action {
        UiAction::Quit => state.should_exit = true,

        UiAction::NextTab => {
            state.tab = state.tab.next();
            state.reset_cursor();
        }
        UiAction::PrevTab => {
            state.tab = state.tab.prev();
            state.reset_cursor();
        }
        UiAction::SelectTab(index) => {
            if let Some(tab) = ChannelFilter::TABS.get(index)
                && *tab != state.tab
            {
                state.tab = *tab;
                state.reset_cursor();
            }
        }

        UiAction::MoveUp => {
            state.cursor = state.cursor.saturating_sub(1);
            state.scroll = adjust_scroll(state.scroll, state.cursor, ctx.list_height);
        }
        UiAction::MoveDown => {
            if row_count > 0 {
                state.cursor = (state.cursor + 1).min(row_count - 1);
                state.scroll = adjust_scroll(state.scroll, state.cursor, ctx.list_height);
            }
        }
        UiAction::Select => {
            if let Some(id) = ctx.row_ids.get(state.cursor)
                && ctx.selected_id.as_ref() != Some(id)
            {
                state.topic_picker = None;
                effect = Some(UiEffect::Select(id.clone()));
            }
        }

        UiAction::ToggleHistory => {
            if let Some(id) = &ctx.selected_id
                && ctx.history_len > 1
            {
                state.expanded_for = if state.history_expanded(id) {
                    None
                } else {
                    Some(id.clone())
                };
            }
        }
        UiAction::ToggleStatus => {
            if ctx.selected_id.is_some() && !ctx.status_loading {
                effect = Some(UiEffect::ToggleStatus);
            }
        }
        UiAction::OpenTopicPicker => {
            if ctx.selected_id.is_some() && !ctx.topic_loading && !ctx.topic_values.is_empty() {
                state.topic_picker = Some(ctx.current_topic_index);
            }
        }
        UiAction::TopicPickerUp => {
            if let Some(index) = state.topic_picker {
                state.topic_picker = Some(index.saturating_sub(1));
            }
        }
        UiAction::TopicPickerDown => {
            if let Some(index) = state.topic_picker {
                let last = ctx.topic_values.len().saturating_sub(1);
                state.topic_picker = Some((index + 1).min(last));
            }
        }
        UiAction::ConfirmTopic => {
            if let Some(index) = state.topic_picker.take()
                && let Some(topic) = ctx.topic_values.get(index)
            {
                effect = Some(UiEffect::ChangeTopic(topic.clone()));
            }
        }
        UiAction::CancelTopicPicker => state.topic_picker = None,

        UiAction::Refresh => effect = Some(UiEffect::Refresh),

        UiAction::FocusSearch => state.search_focused = true,
        UiAction::SearchInput(c) => {
            state.search_query.push(c);
            state.reset_cursor();
        }
        UiAction::SearchBackspace => {
            if state.search_query.pop().is_some() {
                state.reset_cursor();
            }
        }
        UiAction::ExitSearch => state.search_focused = false,
        UiAction::ClearSearchAndExit => {
            state.search_query.clear();
            state.search_focused = false;
            state.reset_cursor();
        }
    }

    (state, effect)
}

/// Scroll offset that keeps `selected_index` inside a window of `list_height` rows
pub fn adjust_scroll(scroll_offset: usize, selected_index: usize, list_height: usize) -> usize {
    if list_height == 0 {
        return 0;
    }
    if selected_index < scroll_offset {
        return selected_index;
    }
    if selected_index >= scroll_offset + list_height {
        return selected_index.saturating_sub(list_height - 1);
    }
    scroll_offset
}

/// Map a key press to an action; the topic picker and search box capture input first.
pub fn key_to_action(code: KeyCode, modifiers: KeyModifiers, state: &UiState) -> Option<UiAction> {
    if state.topic_picker.is_some() {
        return match code {
            KeyCode::Char('j') | KeyCode::Down => Some(UiAction::TopicPickerDown),
            KeyCode::Char('k') | KeyCode::Up => Some(UiAction::TopicPickerUp),
            KeyCode::Enter => Some(UiAction::ConfirmTopic),
            KeyCode::Esc => Some(UiAction::CancelTopicPicker),
            _ => None,
        };
    }

    if state.search_focused {
        return search_key_to_action(code, modifiers);
    }

    normal_key_to_action(code, modifiers)
}

fn search_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<UiAction> {
    match (code, modifiers) {
        (KeyCode::Esc, _) => Some(UiAction::ClearSearchAndExit),
        (KeyCode::Enter | KeyCode::Tab, _) => Some(UiAction::ExitSearch),
        (KeyCode::Backspace, _) => Some(UiAction::SearchBackspace),
        (KeyCode::Char('q'), m) if m.contains(KeyModifiers::CONTROL) => Some(UiAction::Quit),
        (KeyCode::Char(_), m) if m.contains(KeyModifiers::CONTROL) => None,
        (KeyCode::Char(c), _) => Some(UiAction::SearchInput(c)),
        _ => None,
    }
}

fn normal_key_to_action(code: KeyCode, modifiers: KeyModifiers) -> Option<UiAction> {
    match (code, modifiers) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(UiAction::Quit),
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(UiAction::Quit),

        (KeyCode::Tab, KeyModifiers::NONE) => Some(UiAction::NextTab),
        (KeyCode::BackTab, _) => Some(UiAction::PrevTab),
        (KeyCode::Char(c @ '1'..='4'), KeyModifiers::NONE) => {
            Some(UiAction::SelectTab(c as usize - '1' as usize))
        }

        (KeyCode::Char('j') | KeyCode::Down, KeyModifiers::NONE) => Some(UiAction::MoveDown),
        (KeyCode::Char('k') | KeyCode::Up, KeyModifiers::NONE) => Some(UiAction::MoveUp),
        (KeyCode::Enter, _) => Some(UiAction::Select),

        (KeyCode::Char(' '), _) => Some(UiAction::ToggleHistory),
        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(UiAction::ToggleStatus),
        (KeyCode::Char('t'), KeyModifiers::NONE) => Some(UiAction::OpenTopicPicker),
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(UiAction::Refresh),
        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(UiAction::FocusSearch),
        _ => None,
    }
}
