//! Windowed page-number sequences for table pagination controls.
//!
//! Page *labels* are one-based. The `current_page` argument everywhere in this
//! module is the zero-based page index held by the table state; it is also the
//! center of the visible run, which keeps the active label (`current_page + 1`)
//! inside the window.

use serde::{Serialize, Serializer};

/// Inner page slots shown between the two fixed endpoints.
const TOTAL_NUMBERS: usize = 5;
/// Inner slots plus the first and last page.
const TOTAL_BLOCKS: usize = TOTAL_NUMBERS + 2;

/// A single entry of a page window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// One-based page label.
    Page(usize),
    /// One or more hidden pages.
    Spacer,
}

impl PageToken {
    /// Returns the page label, or `None` for a spacer.
    pub fn page(self) -> Option<usize> {
        match self {
            PageToken::Page(page) => Some(page),
            PageToken::Spacer => None,
        }
    }

    pub fn is_spacer(self) -> bool {
        matches!(self, PageToken::Spacer)
    }
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(page) => serializer.serialize_u64(*page as u64),
            PageToken::Spacer => serializer.serialize_str("SPACER"),
        }
    }
}

/// Number of pages needed to show `total_count` rows, `page_size` at a time.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// Clamps a zero-based page index into `[0, total_pages - 1]`.
pub fn clamp_page_index(page_index: usize, total_pages: usize) -> usize {
    page_index.min(total_pages.saturating_sub(1))
}

/// Converts a signed count or index from table state, treating negatives as zero.
pub fn non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

fn pages(range: impl Iterator<Item = usize>) -> impl Iterator<Item = PageToken> {
    range.map(PageToken::Page)
}

/// Builds the window of page labels for a control with `total_pages` pages
/// while the page at zero-based index `current_page` is active.
///
/// Up to seven pages are listed in full. Beyond that the window keeps the
/// first and last page and a run of up to three pages around `current_page`,
/// hiding the rest behind at most one [`PageToken::Spacer`] per side.
pub fn compute_window(total_pages: usize, current_page: usize) -> Vec<PageToken> {
    if total_pages <= TOTAL_BLOCKS {
        return pages(1..=total_pages).collect();
    }

    let current_page = clamp_page_index(current_page, total_pages);

    let start_page = current_page.saturating_sub(1).max(2);
    let end_page = (total_pages - 1).min(current_page + 1);
    let inner_len = (end_page + 1).saturating_sub(start_page);

    let has_left_spill = start_page > 2;
    let has_right_spill = total_pages - end_page > 1;

    // Extra pages surfaced on the side without a spill; non-positive means none.
    let spill_offset = TOTAL_NUMBERS as isize - (inner_len as isize + 3);
    let spill_offset = usize::try_from(spill_offset).unwrap_or(0);

    let mut window = Vec::with_capacity(TOTAL_BLOCKS + 2);
    window.push(PageToken::Page(1));

    match (has_left_spill, has_right_spill) {
        (true, false) => {
            window.push(PageToken::Spacer);
            window.extend(pages(start_page.saturating_sub(spill_offset)..start_page));
            window.extend(pages(start_page..=end_page));
        }
        (false, true) => {
            window.extend(pages(start_page..=end_page));
            window.extend(pages(end_page + 1..=end_page + spill_offset));
            window.push(PageToken::Spacer);
        }
        _ => {
            window.push(PageToken::Spacer);
            window.extend(pages(start_page..=end_page));
            window.push(PageToken::Spacer);
        }
    }

    window.push(PageToken::Page(total_pages));
    window
}
