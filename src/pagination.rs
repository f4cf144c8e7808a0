//! Pagination state consumed by the paginator and info regions

/// Pagination state for the page being rendered
///
/// The renderer trusts these values; it does not check that
/// `offset + length <= item_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
	/// Current page number (1-indexed)
	pub page: usize,
	/// Total number of pages
	pub page_count: usize,
	/// Total number of items across all pages
	pub item_count: usize,
	/// Index of the first item on this page (0-indexed)
	pub offset: usize,
	/// Number of items on this page
	pub length: usize,
}

impl PaginationState {
	/// Computes the state for `page` with `items_per_page` items per page
	///
	/// The page is clamped into `1..=page_count`; an empty data set still has
	/// one (empty) page.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_datagrid::pagination::PaginationState;
	///
	/// let state = PaginationState::new(3, 10, 25);
	/// assert_eq!(state.page_count, 3);
	/// assert_eq!(state.offset, 20);
	/// assert_eq!(state.length, 5);
	/// ```
	pub fn new(page: usize, items_per_page: usize, item_count: usize) -> Self {
		let items_per_page = items_per_page.max(1);
		let page_count = item_count.div_ceil(items_per_page).max(1);
		let page = page.clamp(1, page_count);
		let offset = (page - 1) * items_per_page;
		let length = items_per_page.min(item_count.saturating_sub(offset));
		Self {
			page,
			page_count,
			item_count,
			offset,
			length,
		}
	}

	/// Returns whether the current page is the first one
	pub fn is_first(&self) -> bool {
		self.page <= 1
	}

	/// Returns whether the current page is the last one
	pub fn is_last(&self) -> bool {
		self.page >= self.page_count
	}
}

impl Default for PaginationState {
	fn default() -> Self {
		Self::new(1, 10, 0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(1, 10, 0, 1, 0, 0)]
	#[case(1, 10, 25, 3, 0, 10)]
	#[case(3, 10, 25, 3, 20, 5)]
	#[case(9, 10, 25, 3, 20, 5)]
	#[case(0, 10, 25, 3, 0, 10)]
	fn test_new(
		#[case] page: usize,
		#[case] per_page: usize,
		#[case] items: usize,
		#[case] page_count: usize,
		#[case] offset: usize,
		#[case] length: usize,
	) {
		let state = PaginationState::new(page, per_page, items);
		assert_eq!(state.page_count, page_count);
		assert_eq!(state.offset, offset);
		assert_eq!(state.length, length);
	}

	#[rstest]
	fn test_boundaries() {
		let middle = PaginationState::new(2, 10, 25);
		assert!(!middle.is_first());
		assert!(!middle.is_last());

		let single = PaginationState::default();
		assert!(single.is_first());
		assert!(single.is_last());
	}
}
