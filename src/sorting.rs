//! Sort-state decoding
//!
//! The grid's order expression is query-string shaped: `name=a&id=d` sorts by
//! `name` ascending first and `id` descending second.

use indexmap::IndexMap;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
	/// Ascending order
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Parses a direction token: anything starting with `a` is ascending
	pub fn from_token(token: &str) -> Self {
		if token.starts_with('a') {
			Self::Ascending
		} else {
			Self::Descending
		}
	}

	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Returns the CSS class used for header links (`asc` / `desc`)
	pub fn css_class(&self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}

	/// Returns the short token used in order expressions (`a` / `d`)
	pub fn token(&self) -> &'static str {
		match self {
			Self::Ascending => "a",
			Self::Descending => "d",
		}
	}
}

/// Sort entry for a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
	/// Direction of the sort
	pub direction: SortDirection,
	/// 1-based precedence within the expression
	pub rank: usize,
}

/// Decoded multi-column sort state, in precedence order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
	keys: IndexMap<String, SortKey>,
}

impl SortState {
	/// Decodes an order expression
	///
	/// Ranks follow the first occurrence of each field; a repeated field keeps
	/// its rank and takes the direction of its last occurrence. Pairs with an
	/// empty field name are ignored, and an undecodable expression yields an
	/// empty state.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_datagrid::sorting::{SortDirection, SortState};
	///
	/// let state = SortState::decode("a=asc&b=desc");
	/// assert_eq!(state.get("a").unwrap().rank, 1);
	/// assert_eq!(state.get("b").unwrap().direction, SortDirection::Descending);
	/// assert!(SortState::decode("").is_empty());
	/// ```
	pub fn decode(expr: &str) -> Self {
		let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(expr) {
			Ok(pairs) => pairs,
			Err(err) => {
				tracing::warn!(expression = %expr, error = %err, "ignoring undecodable order expression");
				Vec::new()
			}
		};

		let mut keys: IndexMap<String, SortKey> = IndexMap::new();
		for (field, direction) in pairs {
			if field.is_empty() {
				continue;
			}
			let direction = SortDirection::from_token(&direction);
			let rank = keys.len() + 1;
			keys.entry(field)
				.and_modify(|key| key.direction = direction)
				.or_insert(SortKey { direction, rank });
		}
		Self { keys }
	}

	/// Returns the entry for `column`, if it participates in the sort
	pub fn get(&self, column: &str) -> Option<&SortKey> {
		self.keys.get(column)
	}

	/// Number of sorted columns
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Returns whether no column is sorted
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Precedence badges are only shown when more than one column is sorted
	pub fn shows_precedence(&self) -> bool {
		self.keys.len() > 1
	}

	/// Iterates over `(column, key)` pairs in precedence order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &SortKey)> {
		self.keys.iter().map(|(column, key)| (column.as_str(), key))
	}
}
