//! Paginated select-menu chooser.
//!
//! A [`PagedChooser`] renders one page of options with previous / page /
//! next buttons, waits for a single component interaction, and either moves
//! to another page or hands the picked option to the caller's callback.

/// Platform-neutral control descriptions for one page.
pub mod controls;
/// Twilight-backed interaction surface.
pub mod discord;
/// Precondition and render errors returned to the caller.
pub mod error;
/// Custom id construction and event classification.
pub mod event;
/// Choice items and list validation.
pub mod item;
/// Pure pagination math.
pub mod page;
/// Control ids held by live choosers.
pub mod registry;
/// The chooser loop and its builder.
pub mod session;
/// The seam between the chooser loop and a chat platform.
pub mod surface;

#[cfg(test)]
mod testing;

pub use controls::{ControlSet, NavButton, NavStyle, NavigationRow, SelectControl, build_controls};
pub use error::ChooserError;
pub use event::{EventPayload, NavigationEvent, classify};
pub use item::{ChoiceItem, validate_items};
pub use page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, chunk, page_count};
pub use registry::{ControlIdLease, ControlIdRegistry};
pub use session::{ChooserOutcome, PagedChooser, PagerState, Selection};
pub use surface::{InteractionSurface, Renderer};
