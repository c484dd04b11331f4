//! Client panel: contact details, status and topic controls, interaction history

use iocraft::prelude::*;

use crate::detail::ClientPanel;
use crate::display::{channel_label, origin_label, topic_label};
use crate::history::HistoryView;
use crate::tui::theme::theme;

const NO_SELECTION: &str = "Selecione um ticket para ver o histórico do cliente";
const EMPTY_HISTORY: &str = "Nenhuma interação registrada até o momento.";

#[derive(Default, Props)]
pub struct ClientHistoryProps {
    pub panel: Option<ClientPanel>,
    pub expanded: bool,
    /// Highlighted option when the topic picker is open
    pub topic_picker: Option<usize>,
    pub status_loading: bool,
    pub topic_loading: bool,
}

#[component]
pub fn ClientHistory(props: &ClientHistoryProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(panel) = &props.panel else {
        return element! {
            View(
                width: 100pct,
                height: 100pct,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: 1,
            ) {
                Text(content: NO_SELECTION, color: theme.text_dimmed)
            }
        };
    };

    let view = HistoryView::new(panel.history.clone(), props.expanded);
    let status_action = if props.status_loading {
        "Atualizando...".to_string()
    } else {
        format!("[s] {}", panel.toggle_label)
    };
    let topic_text = if props.topic_loading {
        format!("Tópico: {} (alterando...)", topic_label(&panel.topic))
    } else {
        format!("Tópico: {}  [t] alterar", topic_label(&panel.topic))
    };

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
            overflow: Overflow::Hidden,
        ) {
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween) {
                Text(content: panel.client_name.clone(), color: theme.text, weight: Weight::Bold)
                Text(content: panel.status_label, color: theme.status_color(panel.status), weight: Weight::Bold)
            }
            #(panel.client_email.clone().map(|email| element! {
                Text(content: format!("E-mail: {}", email), color: theme.text_dimmed)
            }))
            #(panel.client_phone.clone().map(|phone| element! {
                Text(content: format!("Telefone: {}", phone), color: theme.text_dimmed)
            }))
            View(flex_direction: FlexDirection::Row, justify_content: JustifyContent::SpaceBetween, margin_top: 1) {
                Text(content: topic_text, color: theme.text)
                Text(content: status_action, color: theme.highlight)
            }

            #(props.topic_picker.map(|highlighted| element! {
                View(
                    flex_direction: FlexDirection::Column,
                    border_style: BorderStyle::Single,
                    border_color: theme.border_focused,
                    padding_left: 1,
                ) {
                    #(panel.topic_options.iter().enumerate().map(|(i, option)| {
                        let active = i == highlighted;
                        let current = option.value == panel.topic;
                        element! {
                            Text(
                                content: format!(
                                    "{} {}{}",
                                    if active { ">" } else { " " },
                                    option.label,
                                    if current { " (atual)" } else { "" }
                                ),
                                color: if active { theme.highlight } else { theme.text },
                                weight: if active { Weight::Bold } else { Weight::Normal },
                            )
                        }
                    }))
                }
            }))

            View(margin_top: 1) {
                Text(content: "Histórico do cliente", color: theme.id_color, weight: Weight::Bold)
            }
            #(view.hint().map(|hint| element! {
                Text(content: hint, color: theme.text_dimmed)
            }))
            #(view.items.is_empty().then(|| element! {
                Text(content: EMPTY_HISTORY, color: theme.text_dimmed)
            }))
            #(view.visible().iter().map(|item| element! {
                View(flex_direction: FlexDirection::Column, margin_top: 1) {
                    View(flex_direction: FlexDirection::Row, column_gap: 1) {
                        Text(content: item.timestamp.clone(), color: theme.text_dimmed)
                        Text(content: channel_label(item.channel), color: theme.channel_color(item.channel))
                        Text(
                            content: origin_label(item.from_client),
                            color: theme.origin_color(item.from_client),
                            weight: Weight::Bold,
                        )
                    }
                    Text(content: item.message.clone(), color: theme.text)
                }
            }))
        }
    }
}
