//! Scrollable ticket list component
//!
//! Displays the rows of the active channel tab with cursor highlighting,
//! a marker on the selected ticket and scroll indicators.

use iocraft::prelude::*;

use crate::display::status_label;
use crate::listing::TicketRow;
use crate::tui::theme::theme;

/// Props for the TicketList component
#[derive(Default, Props)]
pub struct TicketListProps {
    pub rows: Vec<TicketRow>,
    /// Index of the highlighted row
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Ticket shown in the client panel
    pub selected_id: Option<String>,
    /// Number of rows that fit, passed from the parent for the "more above/below" indicators
    pub visible_height: usize,
    pub loading: bool,
    pub has_focus: bool,
}

#[component]
pub fn TicketList(props: &TicketListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    if props.loading || props.rows.is_empty() {
        let message = if props.loading {
            "Carregando..."
        } else {
            "Nenhum ticket encontrado."
        };
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: border_color,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
            ) {
                Text(content: message, color: theme.text_dimmed)
            }
        };
    }

    let total = props.rows.len();
    let start = props.scroll_offset.min(total);
    let has_more_above = start > 0;
    let above_lines = usize::from(has_more_above);

    let tentative_end = (start + props.visible_height.saturating_sub(above_lines)).min(total);
    let below_lines = usize::from(tentative_end < total);

    let available_rows = props
        .visible_height
        .saturating_sub(above_lines + below_lines);
    let end = (start + available_rows).min(total);
    let has_more_below = end < total;

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
        ) {
            #(has_more_above.then(|| element! {
                View(height: 1, padding_left: 1) {
                    Text(
                        content: format!("  {} acima", start),
                        color: theme.text_dimmed,
                    )
                }
            }))

            #(props.rows[start..end].iter().enumerate().map(|(i, row)| {
                let is_selected = props.selected_id.as_deref() == Some(row.id.as_str());
                element! {
                    TicketListRow(
                        row: Some(row.clone()),
                        is_cursor: start + i == props.cursor,
                        is_selected,
                    )
                }
            }))

            #(has_more_below.then(|| element! {
                View(height: 1, padding_left: 1) {
                    Text(
                        content: format!("  {} abaixo", total - end),
                        color: theme.text_dimmed,
                    )
                }
            }))
        }
    }
}

#[derive(Default, Props)]
pub struct TicketListRowProps {
    pub row: Option<TicketRow>,
    pub is_cursor: bool,
    pub is_selected: bool,
}

/// Single ticket row: marker, client, subject with topic badge, status, last update
#[component]
pub fn TicketListRow(props: &TicketListRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(row) = &props.row else {
        return element!(View);
    };

    let bg_color = props.is_cursor.then_some(theme.highlight);
    let text_color = if props.is_cursor {
        theme.highlight_text
    } else {
        theme.text
    };
    let marker = if props.is_selected { ">" } else { " " };
    let subject = match &row.topic_badge {
        Some(badge) => format!("{} [{}]", row.subject, badge),
        None => row.subject.clone(),
    };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            background_color: bg_color,
        ) {
            View(width: 2, flex_shrink: 0.0) {
                Text(content: marker, color: text_color)
            }
            View(width: 3, flex_shrink: 0.0) {
                Text(
                    content: "●",
                    color: if props.is_cursor { theme.highlight_text } else { theme.channel_color(row.channel) },
                )
            }
            View(width: 20, flex_shrink: 0.0, overflow: Overflow::Hidden) {
                Text(
                    content: row.display_name.clone(),
                    color: text_color,
                    weight: Weight::Bold,
                )
            }
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(content: format!(" {}", subject), color: text_color)
            }
            View(width: 14, flex_shrink: 0.0) {
                Text(
                    content: status_label(row.status),
                    color: if props.is_cursor { theme.highlight_text } else { theme.status_color(row.status) },
                )
            }
            View(width: 18, flex_shrink: 0.0, justify_content: JustifyContent::End) {
                Text(
                    content: row.last_update.clone(),
                    color: if props.is_cursor { theme.highlight_text } else { theme.text_dimmed },
                )
            }
        }
    }
}
