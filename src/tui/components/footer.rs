//! Shortcut hints along the bottom row

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub action: &'static str,
}

const NORMAL_MODE: &[(&str, &str)] = &[
    ("j/k", "Navegar"),
    ("Tab/1-4", "Canal"),
    ("Enter", "Selecionar"),
    ("Espaço", "Histórico"),
    ("s", "Resolver/Reabrir"),
    ("t", "Tópico"),
    ("r", "Atualizar"),
    ("/", "Buscar"),
    ("q", "Sair"),
];

const SEARCH_MODE: &[(&str, &str)] = &[
    ("Enter", "Aplicar"),
    ("Esc", "Limpar e sair"),
    ("C-q", "Sair"),
];

const TOPIC_PICKER_MODE: &[(&str, &str)] = &[
    ("j/k", "Navegar"),
    ("Enter", "Confirmar"),
    ("Esc", "Cancelar"),
];

fn from_table(table: &[(&'static str, &'static str)]) -> Vec<Shortcut> {
    table
        .iter()
        .map(|&(key, action)| Shortcut { key, action })
        .collect()
}

pub fn dashboard_shortcuts() -> Vec<Shortcut> {
    from_table(NORMAL_MODE)
}

pub fn search_shortcuts() -> Vec<Shortcut> {
    from_table(SEARCH_MODE)
}

pub fn topic_picker_shortcuts() -> Vec<Shortcut> {
    from_table(TOPIC_PICKER_MODE)
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let hints = props.shortcuts.iter().map(|shortcut| {
        element! {
            View(flex_direction: FlexDirection::Row, column_gap: 1) {
                Text(
                    content: shortcut.key.to_string(),
                    color: theme.highlight,
                    weight: Weight::Bold,
                )
                Text(content: shortcut.action.to_string(), color: theme.text)
            }
        }
    });

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            column_gap: 3,
            background_color: theme.border,
        ) {
            #(hints)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(shortcuts: &[Shortcut]) -> Vec<&'static str> {
        shortcuts.iter().map(|s| s.key).collect()
    }

    #[test]
    fn test_dashboard_shortcuts_cover_every_mutation_key() {
        let keys = keys(&dashboard_shortcuts());
        for key in ["Espaço", "s", "t", "r", "/", "q"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(keys.first(), Some(&"j/k"));
        assert_eq!(keys.last(), Some(&"q"));
    }

    #[test]
    fn test_mode_shortcuts() {
        assert_eq!(keys(&search_shortcuts()), vec!["Enter", "Esc", "C-q"]);
        assert_eq!(keys(&topic_picker_shortcuts()), vec!["j/k", "Enter", "Esc"]);
    }
}
