//! Pure pagination math for the chooser.

use crate::error::ChooserError;

/// Discord caps a select menu at 25 options.
pub const MAX_PAGE_SIZE: usize = 25;

/// Default number of options per page.
pub const DEFAULT_PAGE_SIZE: usize = MAX_PAGE_SIZE;

/// Compute the number of pages for `item_count` options.
///
/// Zero items yield zero pages.
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// Partition `items` into ordered pages of at most `page_size` entries.
pub fn chunk<T>(items: &[T], page_size: usize) -> Result<Vec<&[T]>, ChooserError> {
    if page_size == 0 {
        return Err(ChooserError::InvalidPageSize {
            got: page_size,
            max: MAX_PAGE_SIZE,
        });
    }

    Ok(items.chunks(page_size).collect())
}

/// Validate a page size against the select-menu limit.
pub fn validate_page_size(page_size: usize) -> Result<(), ChooserError> {
    if (1..=MAX_PAGE_SIZE).contains(&page_size) {
        Ok(())
    } else {
        Err(ChooserError::InvalidPageSize {
            got: page_size,
            max: MAX_PAGE_SIZE,
        })
    }
}

/// Step one page back, never below the first page.
pub fn previous_page(page: usize) -> usize {
    page.saturating_sub(1)
}

/// Step one page forward, never past the last page.
pub fn next_page(page: usize, page_count: usize) -> usize {
    page.saturating_add(1).min(page_count.saturating_sub(1))
}
