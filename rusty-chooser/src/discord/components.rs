//! Conversion of chooser controls into Discord message components.

use twilight_model::channel::message::component::{
    ActionRow, Button, ButtonStyle, Component, SelectMenu, SelectMenuOption, SelectMenuType,
};

use super::parse::parse_emoji;
use crate::controls::{ControlSet, NavButton, NavStyle};
use crate::item::ChoiceItem;

/// Build the select-menu row and, when present, the navigation button row.
pub fn build_components(controls: &ControlSet) -> Vec<Component> {
    let select_menu = Component::SelectMenu(SelectMenu {
        id: None,
        channel_types: None,
        custom_id: controls.select.custom_id.clone(),
        default_values: None,
        disabled: false,
        kind: SelectMenuType::Text,
        max_values: Some(1),
        min_values: Some(1),
        options: Some(controls.select.options.iter().map(select_option).collect()),
        placeholder: None,
        required: None,
    });

    let mut rows = vec![Component::ActionRow(ActionRow {
        id: None,
        components: vec![select_menu],
    })];

    if let Some(navigation) = &controls.navigation {
        rows.push(Component::ActionRow(ActionRow {
            id: None,
            components: vec![
                nav_button(&navigation.prev),
                nav_button(&navigation.indicator),
                nav_button(&navigation.next),
            ],
        }));
    }

    rows
}

fn select_option(item: &ChoiceItem) -> SelectMenuOption {
    SelectMenuOption {
        default: false,
        description: item.description.clone(),
        emoji: item.icon.as_deref().and_then(parse_emoji),
        label: item.label.clone(),
        value: item.value.clone(),
    }
}

fn nav_button(button: &NavButton) -> Component {
    Component::Button(Button {
        id: None,
        custom_id: Some(button.custom_id.clone()),
        disabled: button.disabled,
        emoji: None,
        label: Some(button.label.clone()),
        style: match button.style {
            NavStyle::Primary => ButtonStyle::Primary,
            NavStyle::Success => ButtonStyle::Success,
            NavStyle::Danger => ButtonStyle::Danger,
        },
        url: None,
        sku_id: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::build_controls;

    fn rows(components: &[Component]) -> Vec<&ActionRow> {
        components
            .iter()
            .filter_map(|component| match component {
                Component::ActionRow(row) => Some(row),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_page_renders_only_the_select_row() {
        let items = vec![ChoiceItem::new("Ace", "ace").icon("🂡")];
        let components = build_components(&build_controls("deck", &items, 0, 1, false));
        let rows = rows(&components);

        assert_eq!(rows.len(), 1);
        let Component::SelectMenu(menu) = &rows[0].components[0] else {
            panic!("expected a select menu");
        };
        assert_eq!(menu.custom_id, "deck");
        let options = menu.options.as_ref().expect("options");
        assert_eq!(options[0].value, "ace");
        assert!(options[0].emoji.is_some());
    }

    #[test]
    fn navigation_row_maps_styles_and_ids() {
        let items = vec![ChoiceItem::new("Ace", "ace")];
        let components = build_components(&build_controls("deck", &items, 0, 3, false));
        let rows = rows(&components);

        assert_eq!(rows.len(), 2);
        let buttons: Vec<&Button> = rows[1]
            .components
            .iter()
            .filter_map(|component| match component {
                Component::Button(button) => Some(button),
                _ => None,
            })
            .collect();

        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons[0].custom_id.as_deref(), Some("deck--prev"));
        assert_eq!(buttons[0].style, ButtonStyle::Danger);
        assert!(buttons[0].disabled);
        assert_eq!(buttons[1].custom_id.as_deref(), Some("deck--nothing"));
        assert_eq!(buttons[1].style, ButtonStyle::Success);
        assert_eq!(buttons[2].custom_id.as_deref(), Some("deck--next"));
        assert_eq!(buttons[2].style, ButtonStyle::Primary);
        assert!(!buttons[2].disabled);
    }
}
