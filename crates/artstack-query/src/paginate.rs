//! Pure slice pagination over sorted results.

/// Slice one page out of a result collection.
///
/// Pages are 1-based. A page beyond the available range — including page
/// 0 and a zero page size — yields an empty slice, never an error. The
/// caller owns its page number; this function keeps no state.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
