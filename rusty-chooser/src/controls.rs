//! Platform-neutral description of the controls rendered for one page.

use crate::event::{next_id, nothing_id, prev_id};
use crate::item::ChoiceItem;

/// Visual emphasis of a navigation button.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavStyle {
    Primary,
    Success,
    /// Marks a button sitting at its page boundary.
    Danger,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavButton {
    pub custom_id: String,
    pub label: String,
    pub style: NavStyle,
    pub disabled: bool,
}

/// Previous / page indicator / next, in render order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NavigationRow {
    pub prev: NavButton,
    pub indicator: NavButton,
    pub next: NavButton,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectControl {
    pub custom_id: String,
    pub options: Vec<ChoiceItem>,
}

/// Everything a surface needs to draw one chooser page.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ControlSet {
    pub select: SelectControl,
    /// Present only when there is more than one page.
    pub navigation: Option<NavigationRow>,
}

/// Build the select menu and, for multi-page lists, the navigation row.
pub fn build_controls(
    control_id: &str,
    page_items: &[ChoiceItem],
    page: usize,
    page_count: usize,
    lock_indicator: bool,
) -> ControlSet {
    let select = SelectControl {
        custom_id: control_id.to_owned(),
        options: page_items.to_vec(),
    };

    if page_count <= 1 {
        return ControlSet {
            select,
            navigation: None,
        };
    }

    let at_first = page == 0;
    let at_last = page + 1 >= page_count;

    let navigation = NavigationRow {
        prev: NavButton {
            custom_id: prev_id(control_id),
            label: "«".to_owned(),
            style: boundary_style(at_first),
            disabled: at_first,
        },
        indicator: NavButton {
            custom_id: nothing_id(control_id),
            label: (page + 1).to_string(),
            style: NavStyle::Success,
            disabled: lock_indicator,
        },
        next: NavButton {
            custom_id: next_id(control_id),
            label: "»".to_owned(),
            style: boundary_style(at_last),
            disabled: at_last,
        },
    };

    ControlSet {
        select,
        navigation: Some(navigation),
    }
}

fn boundary_style(at_boundary: bool) -> NavStyle {
    if at_boundary {
        NavStyle::Danger
    } else {
        NavStyle::Primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<ChoiceItem> {
        (1..=count)
            .map(|n| ChoiceItem::new(format!("Item {n}"), format!("item-{n}")))
            .collect()
    }

    #[test]
    fn single_page_has_no_navigation_row() {
        let page = items(3);
        let controls = build_controls("pick", &page, 0, 1, false);

        assert_eq!(controls.select.custom_id, "pick");
        assert_eq!(controls.select.options, page);
        assert!(controls.navigation.is_none());
    }

    #[test]
    fn first_page_disables_previous_only() {
        let controls = build_controls("pick", &items(25), 0, 2, false);
        let nav = controls.navigation.expect("navigation row");

        assert!(nav.prev.disabled);
        assert_eq!(nav.prev.style, NavStyle::Danger);
        assert!(!nav.next.disabled);
        assert_eq!(nav.next.style, NavStyle::Primary);
        assert_eq!(nav.indicator.label, "1");
    }

    #[test]
    fn last_page_disables_next_only() {
        let controls = build_controls("pick", &items(5), 1, 2, false);
        let nav = controls.navigation.expect("navigation row");

        assert!(!nav.prev.disabled);
        assert_eq!(nav.prev.style, NavStyle::Primary);
        assert!(nav.next.disabled);
        assert_eq!(nav.next.style, NavStyle::Danger);
        assert_eq!(nav.indicator.label, "2");
    }

    #[test]
    fn middle_page_enables_both_directions() {
        let controls = build_controls("pick", &items(5), 1, 3, false);
        let nav = controls.navigation.expect("navigation row");

        assert!(!nav.prev.disabled);
        assert!(!nav.next.disabled);
    }

    #[test]
    fn navigation_ids_derive_from_control_id() {
        let nav = build_controls("pick", &items(5), 0, 2, false)
            .navigation
            .expect("navigation row");

        assert_eq!(nav.prev.custom_id, "pick--prev");
        assert_eq!(nav.indicator.custom_id, "pick--nothing");
        assert_eq!(nav.next.custom_id, "pick--next");
    }

    #[test]
    fn indicator_lock_disables_the_page_button() {
        let open = build_controls("pick", &items(5), 0, 2, false)
            .navigation
            .expect("navigation row");
        let locked = build_controls("pick", &items(5), 0, 2, true)
            .navigation
            .expect("navigation row");

        assert!(!open.indicator.disabled);
        assert!(locked.indicator.disabled);
        assert_eq!(locked.indicator.style, NavStyle::Success);
    }
}
