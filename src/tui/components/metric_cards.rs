//! Row of aggregate metric cards

use iocraft::prelude::*;

use crate::metrics::MetricCard;
use crate::tui::theme::theme;

#[derive(Default, Props)]
pub struct MetricCardsProps {
    pub cards: Vec<MetricCard>,
}

#[component]
pub fn MetricCards(props: &MetricCardsProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            column_gap: 1,
        ) {
            #(props.cards.iter().map(|card| {
                let trend = card.trend.map(|t| (t.text(), theme.trend_color(t.is_positive)));
                element! {
                    View(
                        flex_grow: 1.0,
                        flex_direction: FlexDirection::Column,
                        border_style: BorderStyle::Round,
                        border_color: theme.border,
                        padding_left: 1,
                        padding_right: 1,
                    ) {
                        Text(content: card.title, color: theme.text_dimmed)
                        Text(
                            content: card.value.clone(),
                            color: theme.text,
                            weight: Weight::Bold,
                        )
                        #(trend.map(|(text, color)| element! {
                            View(overflow: Overflow::Hidden, height: 1) {
                                Text(content: text, color: color)
                            }
                        }))
                    }
                }
            }))
        }
    }
}
