//! Channel tab bar with per-channel ticket counts

use iocraft::prelude::*;

use crate::listing::ChannelFilter;
use crate::tui::theme::theme;

/// Props for the TabBar component
#[derive(Default, Props)]
pub struct TabBarProps {
    pub active: ChannelFilter,
    /// Ticket count of every tab, in tab order
    pub counts: Vec<(ChannelFilter, usize)>,
    /// Current search query, shown on the right when not empty
    pub query: String,
    pub search_focused: bool,
}

#[component]
pub fn TabBar(props: &TabBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let search_text = if props.search_focused {
        Some(format!("Buscar: {}_", props.query))
    } else if !props.query.is_empty() {
        Some(format!("Buscar: {}", props.query))
    } else {
        None
    };

    element! {
        View(
            width: 100pct,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            border_edges: Edges::Bottom,
            border_style: BorderStyle::Single,
            border_color: theme.border,
        ) {
            #(props.counts.iter().enumerate().map(|(i, (tab, count))| {
                let active = *tab == props.active;
                element! {
                    Text(
                        content: if active {
                            format!("[{} {} ({})]", i + 1, tab.label(), count)
                        } else {
                            format!(" {} {} ({}) ", i + 1, tab.label(), count)
                        },
                        color: if active { theme.border_focused } else { theme.text_dimmed },
                        weight: if active { Weight::Bold } else { Weight::Normal },
                    )
                }
            }))
            View(flex_grow: 1.0)
            #(search_text.map(|text| element! {
                Text(
                    content: text,
                    color: if props.search_focused { theme.highlight } else { theme.status_novo },
                )
            }))
        }
    }
}
