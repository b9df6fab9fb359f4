//! The chooser session: render a page, wait for one event, decide what next.

use std::{future::Future, sync::Arc};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::controls::build_controls;
use crate::error::ChooserError;
use crate::event::{NavigationEvent, classify, is_valid_control_id};
use crate::item::{ChoiceItem, find_item, validate_items};
use crate::page::{
    DEFAULT_PAGE_SIZE, chunk, next_page, page_count, previous_page, validate_page_size,
};
use crate::registry::{ControlIdLease, ControlIdRegistry};
use crate::surface::{InteractionSurface, Renderer};

/// Text shown above the select menu unless overridden.
pub const DEFAULT_DISPLAY_TEXT: &str = "Select an option:";
/// Notice rendered instead of a menu when there is nothing to choose from.
pub const NO_OPTIONS_MESSAGE: &str = "No options to select";
/// Private reply to a press on the page indicator.
pub const NOTHING_TO_DO_MESSAGE: &str =
    "Eh! I have a secret to tell you!\n\n||There is nothing to do here, this button only shows the page.||";

/// The final pick handed to the caller's callback.
#[derive(Debug)]
pub struct Selection<E> {
    pub value: String,
    pub item: ChoiceItem,
    /// Zero-based page the item was picked from.
    pub page: usize,
    /// The raw event, so the callback can answer it.
    pub event: E,
}

/// How a chooser session ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ChooserOutcome {
    Selected { value: String, page: usize },
    /// No items; only the notice was shown.
    Empty,
    /// An event for someone else's control arrived.
    Unrecognized { custom_id: String },
    /// The surface failed after the first render.
    Failed,
}

/// Per-render snapshot threaded through the loop.
///
/// Each transition builds a new state rather than mutating the old one.
#[derive(Clone, Debug)]
pub struct PagerState {
    pub items: Arc<[ChoiceItem]>,
    pub page_size: usize,
    pub page: usize,
    pub control_id: String,
    pub display_text: String,
    pub lock_indicator: bool,
}

impl PagerState {
    pub fn page_count(&self) -> usize {
        page_count(self.items.len(), self.page_size)
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// Paginated select-menu chooser bound to one interaction surface.
pub struct PagedChooser<S: InteractionSurface> {
    surface: Arc<S>,
    registry: ControlIdRegistry,
    control_id: String,
    page_size: usize,
    start_page: usize,
    display_text: String,
    lock_indicator: bool,
}

impl<S: InteractionSurface + 'static> PagedChooser<S> {
    pub fn new(surface: Arc<S>, registry: ControlIdRegistry, control_id: impl Into<String>) -> Self {
        Self {
            surface,
            registry,
            control_id: control_id.into(),
            page_size: DEFAULT_PAGE_SIZE,
            start_page: 0,
            display_text: DEFAULT_DISPLAY_TEXT.to_owned(),
            lock_indicator: false,
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn start_page(mut self, page: usize) -> Self {
        self.start_page = page;
        self
    }

    pub fn display_text(mut self, text: impl Into<String>) -> Self {
        self.display_text = text.into();
        self
    }

    /// Render the page indicator disabled, so it never produces a hint.
    pub fn lock_page_indicator(mut self, lock: bool) -> Self {
        self.lock_indicator = lock;
        self
    }

    /// Run the session to completion on the current task.
    ///
    /// Only precondition violations and a failed first render come back as
    /// errors. Later surface failures go to the fault sink and end the session
    /// as [`ChooserOutcome::Failed`]; `on_select` runs at most once.
    pub async fn present<F, Fut>(
        self,
        items: Vec<ChoiceItem>,
        on_select: F,
    ) -> Result<ChooserOutcome, ChooserError>
    where
        F: FnOnce(Selection<S::Event>) -> Fut + Send,
        Fut: Future<Output = anyhow::Result<()>> + Send,
    {
        let (surface, lease, state) = self.prepare(items)?;
        run(surface, lease, state, on_select).await
    }

    /// Validate, claim the control id, then drive the session on its own task.
    pub fn spawn<F, Fut>(
        self,
        items: Vec<ChoiceItem>,
        on_select: F,
    ) -> Result<JoinHandle<Result<ChooserOutcome, ChooserError>>, ChooserError>
    where
        F: FnOnce(Selection<S::Event>) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let (surface, lease, state) = self.prepare(items)?;
        Ok(tokio::spawn(run(surface, lease, state, on_select)))
    }

    fn prepare(
        self,
        items: Vec<ChoiceItem>,
    ) -> Result<(Arc<S>, ControlIdLease, PagerState), ChooserError> {
        validate_page_size(self.page_size)?;
        if !is_valid_control_id(&self.control_id) {
            return Err(ChooserError::InvalidControlId(self.control_id));
        }
        validate_items(&items)?;

        let pages = page_count(items.len(), self.page_size);
        if pages > 0 && self.start_page >= pages {
            return Err(ChooserError::PageOutOfRange {
                page: self.start_page,
                page_count: pages,
            });
        }

        let lease = self.registry.claim(&self.control_id)?;
        let state = PagerState {
            items: items.into(),
            page_size: self.page_size,
            page: self.start_page,
            control_id: self.control_id,
            display_text: self.display_text,
            lock_indicator: self.lock_indicator,
        };

        Ok((self.surface, lease, state))
    }
}

async fn run<S, F, Fut>(
    surface: Arc<S>,
    _lease: ControlIdLease,
    mut state: PagerState,
    on_select: F,
) -> Result<ChooserOutcome, ChooserError>
where
    S: InteractionSurface,
    F: FnOnce(Selection<S::Event>) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let items = Arc::clone(&state.items);
    let pages = chunk(&items, state.page_size)?;
    let page_total = pages.len();
    let mut renderer = Renderer::Fresh;

    if pages.is_empty() {
        surface
            .notify(&renderer, NO_OPTIONS_MESSAGE)
            .await
            .map_err(ChooserError::Render)?;
        debug!(control_id = %state.control_id, "chooser has no options");
        return Ok(ChooserOutcome::Empty);
    }

    loop {
        let controls = build_controls(
            &state.control_id,
            pages[state.page],
            state.page,
            page_total,
            state.lock_indicator,
        );
        let text = match renderer {
            Renderer::Hint(_) => NOTHING_TO_DO_MESSAGE,
            _ => state.display_text.as_str(),
        };

        debug!(
            control_id = %state.control_id,
            page = state.page,
            renderer = renderer.kind(),
            "rendering chooser page"
        );

        let message = match surface.render(&renderer, text, &controls).await {
            Ok(message) => message,
            Err(source) if matches!(renderer, Renderer::Fresh) => {
                return Err(ChooserError::Render(source));
            }
            Err(source) => {
                surface.report_fault(&state.control_id, &source);
                return Ok(ChooserOutcome::Failed);
            }
        };

        let event = match surface.await_event(&message).await {
            Ok(event) => event,
            Err(source) => {
                surface.report_fault(&state.control_id, &source);
                strip_controls(surface.as_ref(), &state.control_id, &message).await;
                return Ok(ChooserOutcome::Failed);
            }
        };

        let (navigation, custom_id) = match surface.payload(&event) {
            Some(payload) => (
                classify(&state.control_id, payload),
                payload.custom_id.to_owned(),
            ),
            None => (NavigationEvent::Unrecognized, String::new()),
        };

        match navigation {
            NavigationEvent::PrevPressed => {
                state = state.with_page(previous_page(state.page));
                renderer = Renderer::InPlace(event);
            }
            NavigationEvent::NextPressed => {
                state = state.with_page(next_page(state.page, page_total));
                renderer = Renderer::InPlace(event);
            }
            NavigationEvent::NoOpPressed => {
                renderer = Renderer::Hint(event);
            }
            NavigationEvent::Selected(value) => {
                let Some(item) = find_item(&items, &value).cloned() else {
                    debug!(
                        control_id = %state.control_id,
                        %value,
                        "selected value is not an option"
                    );
                    strip_controls(surface.as_ref(), &state.control_id, &message).await;
                    return Ok(ChooserOutcome::Unrecognized { custom_id });
                };

                info!(
                    control_id = %state.control_id,
                    %value,
                    page = state.page,
                    "chooser selection made"
                );

                let selection = Selection {
                    value: value.clone(),
                    item,
                    page: state.page,
                    event,
                };
                if let Err(source) = on_select(selection).await {
                    surface.report_fault(&state.control_id, &source);
                }

                return Ok(ChooserOutcome::Selected {
                    value,
                    page: state.page,
                });
            }
            NavigationEvent::Unrecognized => {
                debug!(
                    control_id = %state.control_id,
                    %custom_id,
                    "ignoring foreign component event"
                );
                strip_controls(surface.as_ref(), &state.control_id, &message).await;
                return Ok(ChooserOutcome::Unrecognized { custom_id });
            }
        }
    }
}

/// Leave no live controls behind on a page that stopped listening.
async fn strip_controls<S>(surface: &S, control_id: &str, message: &S::Message)
where
    S: InteractionSurface,
{
    if let Err(source) = surface.clear_controls(message).await {
        surface.report_fault(control_id, &source);
    }
}
