use crate::dto::pagination::{PaginationControl, PaginationQuery};
use crate::pagination::{non_negative, total_pages};

/// Upper bound on rows per page a caller may request.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Builds the pagination control for a table from its query state.
///
/// Out-of-range values are clamped rather than rejected: the table state can
/// lag behind a reload, and an off-by-some page index must still render.
pub fn load_pagination_control(
    query: &PaginationQuery,
    default_page_size: usize,
) -> PaginationControl {
    let page_size = query
        .page_size
        .map_or(default_page_size, non_negative)
        .clamp(1, MAX_PAGE_SIZE);
    let total_count = non_negative(query.total_count.unwrap_or(0));
    let page_index = non_negative(query.page_index.unwrap_or(0));

    PaginationControl::new(total_pages(total_count, page_size), page_index)
}
