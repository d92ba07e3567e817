//! Pagination engine.
//!
//! [`paginate`] slices an ordered sequence into one page. It never panics on an
//! out-of-range page index: such a page is simply empty. [`PageState`] holds the
//! current index and size for one table and restricts the size to
//! [`PAGE_SIZE_OPTIONS`].

use crate::domain::error::{HrdeskError, Result};

/// Page sizes the table offers.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZE_OPTIONS[0];

/// Number of pages needed for `len` items, never less than one.
///
/// # Examples
///
/// ```
/// use hrdesk::engine::page_count;
///
/// assert_eq!(page_count(0, 5), 1);
/// assert_eq!(page_count(10, 5), 2);
/// assert_eq!(page_count(11, 5), 3);
/// ```
#[must_use]
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Returns the items of page `page_index` and the total page count.
///
/// The page covers `[page_index * page_size, page_index * page_size + page_size)`
/// clipped to the sequence bounds.
///
/// # Examples
///
/// ```
/// use hrdesk::engine::paginate;
///
/// let items: Vec<u32> = (1..=7).collect();
/// assert_eq!(paginate(&items, 1, 5), (&items[5..], 2));
/// assert_eq!(paginate(&items, 9, 5), (&items[..0], 2));
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> (&[T], usize) {
    let count = page_count(items.len(), page_size);
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    (&items[start..end], count)
}

/// Page index and size of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    index: usize,
    size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageState {
    /// Creates a state on page 0.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::InvalidPageSize`] if `size` is not an allowed size.
    pub fn new(size: usize) -> Result<Self> {
        let mut state = Self::default();
        state.set_size(size)?;
        Ok(state)
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Changes the page size and returns to the first page.
    ///
    /// # Errors
    ///
    /// Returns [`HrdeskError::InvalidPageSize`] and leaves the state unchanged if
    /// `size` is not one of [`PAGE_SIZE_OPTIONS`].
    pub fn set_size(&mut self, size: usize) -> Result<()> {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return Err(HrdeskError::InvalidPageSize(size));
        }
        self.size = size;
        self.index = 0;
        Ok(())
    }

    /// Moves to `index`, clamped to the last page of `len` items.
    pub fn go_to(&mut self, index: usize, len: usize) {
        self.index = index.min(page_count(len, self.size) - 1);
    }

    /// Pulls the index back onto the last page if the view shrank under it.
    pub fn clamp(&mut self, len: usize) {
        self.go_to(self.index, len);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_cover_sequence_exactly_once() {
        for len in 0..=30 {
            let items: Vec<usize> = (0..len).collect();
            for size in PAGE_SIZE_OPTIONS {
                let (_, count) = paginate(&items, 0, size);
                assert!(count >= 1);
                let total: usize = (0..count).map(|i| paginate(&items, i, size).0.len()).sum();
                assert_eq!(total, len, "len={len} size={size}");

                let flat: Vec<usize> = (0..count)
                    .flat_map(|i| paginate(&items, i, size).0.iter().copied())
                    .collect();
                assert_eq!(flat, items);
            }
        }
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items = [1, 2, 3];
        let (page, count) = paginate(&items, 4, 5);
        assert!(page.is_empty());
        assert_eq!(count, 1);

        let (page, _) = paginate(&items, usize::MAX, 5);
        assert!(page.is_empty());
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u8> = (0..12).collect();
        let (page, count) = paginate(&items, 2, 5);
        assert_eq!(page, &[10, 11]);
        assert_eq!(count, 3);
    }

    #[test]
    fn set_size_resets_index() {
        let mut state = PageState::default();
        state.go_to(1, 10);
        assert_eq!(state.index(), 1);

        state.set_size(10).unwrap();
        assert_eq!(state.index(), 0);
        assert_eq!(state.size(), 10);
    }

    #[test]
    fn rejects_unlisted_size() {
        let mut state = PageState::default();
        assert!(matches!(state.set_size(7), Err(HrdeskError::InvalidPageSize(7))));
        assert_eq!(state.size(), DEFAULT_PAGE_SIZE);
        assert!(PageState::new(0).is_err());
    }

    #[test]
    fn go_to_clamps_to_last_page() {
        let mut state = PageState::new(5).unwrap();
        state.go_to(8, 11);
        assert_eq!(state.index(), 2);

        state.clamp(4);
        assert_eq!(state.index(), 0);
    }
}
