use crate::error::QueryError;
use crate::query::types::{PageRequest, PageResult};

/// Slice one page out of an already ordered sequence.
///
/// Out-of-range page indexes clamp to the first or last page. Only a
/// non-positive page size is an error.
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Result<PageResult<T>, QueryError> {
    let page_size = request.validated_size()?;
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let page_index = clamp_index(request.page_index, total_pages);
    let start = page_index * page_size;
    let end = (start + page_size).min(total_items);

    let items: Vec<T> = items.into_iter().skip(start).take(end - start).collect();

    Ok(PageResult {
        items,
        total_items,
        total_pages,
        page_index,
        page_size,
        has_more: page_index + 1 < total_pages,
    })
}

fn clamp_index(requested: i64, total_pages: usize) -> usize {
    if total_pages == 0 || requested <= 0 {
        return 0;
    }
    let last = total_pages - 1;
    usize::try_from(requested).map_or(last, |i| i.min(last))
}
