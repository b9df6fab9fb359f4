//! Custom id construction and classification of incoming component events.

const PREV_SUFFIX: &str = "--prev";
const NEXT_SUFFIX: &str = "--next";
const NOTHING_SUFFIX: &str = "--nothing";

/// Longest custom id Discord accepts on a component.
pub const CUSTOM_ID_MAX: usize = 100;

/// What an incoming component event means to a chooser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NavigationEvent {
    /// An option was picked from the select menu.
    Selected(String),
    PrevPressed,
    NextPressed,
    /// The page indicator was pressed.
    NoOpPressed,
    /// Not one of this chooser's controls.
    Unrecognized,
}

/// Raw data a surface extracts from a component event.
#[derive(Clone, Copy, Debug)]
pub struct EventPayload<'a> {
    pub custom_id: &'a str,
    pub values: &'a [String],
}

pub fn prev_id(control_id: &str) -> String {
    format!("{control_id}{PREV_SUFFIX}")
}

pub fn next_id(control_id: &str) -> String {
    format!("{control_id}{NEXT_SUFFIX}")
}

pub fn nothing_id(control_id: &str) -> String {
    format!("{control_id}{NOTHING_SUFFIX}")
}

/// Whether `control_id` can be used for a chooser.
///
/// It must be non-empty, must not end in a navigation suffix (it would
/// collide with another chooser's buttons), and must still fit the custom id
/// limit once the longest suffix is appended.
pub fn is_valid_control_id(control_id: &str) -> bool {
    !control_id.is_empty()
        && control_id.chars().count() + NOTHING_SUFFIX.len() <= CUSTOM_ID_MAX
        && ![PREV_SUFFIX, NEXT_SUFFIX, NOTHING_SUFFIX]
            .iter()
            .any(|suffix| control_id.ends_with(suffix))
}

/// Classify a component event against a chooser's control id.
pub fn classify(control_id: &str, payload: EventPayload<'_>) -> NavigationEvent {
    let Some(rest) = payload.custom_id.strip_prefix(control_id) else {
        return NavigationEvent::Unrecognized;
    };

    match rest {
        "" => payload
            .values
            .first()
            .cloned()
            .map_or(NavigationEvent::Unrecognized, NavigationEvent::Selected),
        PREV_SUFFIX => NavigationEvent::PrevPressed,
        NEXT_SUFFIX => NavigationEvent::NextPressed,
        NOTHING_SUFFIX => NavigationEvent::NoOpPressed,
        _ => NavigationEvent::Unrecognized,
    }
}
