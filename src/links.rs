//! Link generation for pagination and ordering

use crate::sorting::{SortDirection, SortState};

/// Builds the URLs the grid links to
///
/// The HTTP/routing layer owns URL construction; the renderer only asks for
/// page and ordering targets.
pub trait LinkGenerator {
	/// Link to page `page` (1-indexed)
	fn page(&self, page: usize) -> String;

	/// Link that orders the grid by `column`, given the current sort state
	fn order(&self, column: &str, sort: &SortState) -> String;
}

/// Query-string links relative to a base path
///
/// ## Example
///
/// ```
/// use reinhardt_datagrid::links::{LinkGenerator, QueryLinkGenerator};
/// use reinhardt_datagrid::sorting::SortState;
///
/// let links = QueryLinkGenerator::new("/users");
/// assert_eq!(links.page(2), "/users?page=2");
/// assert_eq!(links.order("name", &SortState::default()), "/users?order=name%3Da");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryLinkGenerator {
	base: String,
}

impl QueryLinkGenerator {
	/// Creates a generator for links under `base`
	pub fn new(base: impl Into<String>) -> Self {
		Self { base: base.into() }
	}

	fn with_query(&self, pairs: &[(&str, &str)]) -> String {
		let query = serde_urlencoded::to_string(pairs).unwrap_or_default();
		let separator = if self.base.contains('?') { '&' } else { '?' };
		format!("{}{separator}{query}", self.base)
	}
}

impl LinkGenerator for QueryLinkGenerator {
	fn page(&self, page: usize) -> String {
		self.with_query(&[("page", &page.to_string())])
	}

	/// An ascending column flips to descending; anything else sorts ascending.
	fn order(&self, column: &str, sort: &SortState) -> String {
		let direction = match sort.get(column) {
			Some(key) => key.direction.toggle(),
			None => SortDirection::Ascending,
		};
		let expression = serde_urlencoded::to_string([(column, direction.token())])
			.unwrap_or_default();
		self.with_query(&[("order", &expression)])
	}
}
