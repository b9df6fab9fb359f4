//! Selectable options shown in the chooser's select menu.

use std::collections::HashSet;

use crate::error::ChooserError;

/// Discord's limit for select option labels, values and descriptions.
pub const OPTION_TEXT_MAX: usize = 100;

/// One selectable entry. Identity is `value`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ChoiceItem {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    /// Unicode emoji or a custom emoji mention (`<:name:id>`).
    pub icon: Option<String>,
}

impl ChoiceItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            icon: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Check the option list against the select-menu contract.
///
/// Values must be unique across the whole list, not just per page, because a
/// selection is resolved back to its item by value.
pub fn validate_items(items: &[ChoiceItem]) -> Result<(), ChooserError> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        let invalid = |reason| ChooserError::InvalidItem {
            value: item.value.clone(),
            reason,
        };

        if item.value.is_empty() {
            return Err(invalid("value is empty"));
        }
        if item.label.is_empty() {
            return Err(invalid("label is empty"));
        }
        if item.value.chars().count() > OPTION_TEXT_MAX {
            return Err(invalid("value is longer than 100 characters"));
        }
        if item.label.chars().count() > OPTION_TEXT_MAX {
            return Err(invalid("label is longer than 100 characters"));
        }
        if item
            .description
            .as_ref()
            .is_some_and(|description| description.chars().count() > OPTION_TEXT_MAX)
        {
            return Err(invalid("description is longer than 100 characters"));
        }

        if !seen.insert(item.value.as_str()) {
            return Err(ChooserError::DuplicateValue(item.value.clone()));
        }
    }

    Ok(())
}

/// Find the item a selected value refers to.
pub fn find_item<'a>(items: &'a [ChoiceItem], value: &str) -> Option<&'a ChoiceItem> {
    items.iter().find(|item| item.value == value)
}
