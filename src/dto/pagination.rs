//! Pagination control models rendered by templates and returned by the API.

use serde::{Deserialize, Serialize};

use crate::pagination::{PageToken, clamp_page_index, compute_window};

/// Query parameters accepted by the pagination endpoints.
///
/// Values are signed because table state can briefly go negative during a
/// reload; they are clamped, not rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    /// Number of rows reported by the backend (`totalCount`).
    pub total_count: Option<i64>,
    /// Rows per page; the configured default applies when absent.
    pub page_size: Option<i64>,
    /// Zero-based index of the active page in the table state.
    pub page_index: Option<i64>,
}

/// One rendered element of a pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageButton {
    /// Clickable page: shows `label`, jumps to zero-based `index`.
    Page {
        label: usize,
        index: usize,
        active: bool,
    },
    /// Inert marker for hidden pages.
    Ellipsis,
}

/// Everything a template needs to draw pagination for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControl {
    pub buttons: Vec<PageButton>,
    pub page_index: usize,
    pub total_pages: usize,
    /// Zero-based target of the "previous" control, `None` on the first page.
    pub previous: Option<usize>,
    /// Zero-based target of the "next" control, `None` on the last page.
    pub next: Option<usize>,
}

impl PaginationControl {
    pub fn new(total_pages: usize, page_index: usize) -> Self {
        let page_index = clamp_page_index(page_index, total_pages);

        let buttons = compute_window(total_pages, page_index)
            .into_iter()
            .map(|token| match token {
                PageToken::Page(label) => PageButton::Page {
                    label,
                    index: label - 1,
                    active: label - 1 == page_index,
                },
                PageToken::Spacer => PageButton::Ellipsis,
            })
            .collect();

        let previous = page_index.checked_sub(1);
        let next = Some(page_index + 1).filter(|&next| next < total_pages);

        Self {
            buttons,
            page_index,
            total_pages,
            previous,
            next,
        }
    }
}
