//! Grid columns
//!
//! A column is either plain (its cells format the record value) or an action
//! column (its cells hold row-scoped action links). The distinction is a
//! tagged [`ColumnKind`], dispatched with `match`.

use crate::action::Action;
use crate::form::FormControl;
use crate::html::escape;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::{self, Debug};

/// Formats a raw record value into cell markup
///
/// Implemented for closures; the returned string is inserted verbatim, so
/// implementations are responsible for escaping.
pub trait CellFormatter {
	/// Formats `value` as cell markup
	fn format(&self, value: &Value) -> String;
}

impl<F> CellFormatter for F
where
	F: Fn(&Value) -> String,
{
	fn format(&self, value: &Value) -> String {
		self(value)
	}
}

/// Default formatter: escaped text, optionally truncated
///
/// ## Example
///
/// ```
/// use reinhardt_datagrid::column::{CellFormatter, TextFormatter};
/// use serde_json::json;
///
/// let formatter = TextFormatter::new().max_length(5);
/// assert_eq!(formatter.format(&json!("<b>Reinhardt</b>")), "&lt;b&gt;Re…");
/// assert_eq!(formatter.format(&json!(null)), "");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFormatter {
	max_length: Option<usize>,
}

impl TextFormatter {
	/// Creates a formatter without truncation
	pub fn new() -> Self {
		Self::default()
	}

	/// Truncates text longer than `max_length` characters, appending `…`
	pub fn max_length(mut self, max_length: usize) -> Self {
		self.max_length = Some(max_length);
		self
	}
}

impl CellFormatter for TextFormatter {
	fn format(&self, value: &Value) -> String {
		let text = value_to_text(value);
		match self.max_length {
			Some(max) if text.chars().count() > max => {
				let truncated: String = text.chars().take(max).collect();
				format!("{}…", escape(&truncated))
			}
			_ => escape(&text),
		}
	}
}

/// Renders a record value as plain text
///
/// Strings are used as-is, `null` becomes empty, everything else uses its
/// JSON representation.
pub fn value_to_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// Kind of filter control a column offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
	/// Free-text input
	Input,
	/// Drop-down of fixed choices
	Select,
}

/// Filter attached to a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
	kind: FilterKind,
	value: Option<String>,
	choices: Vec<(String, String)>,
}

impl ColumnFilter {
	/// Creates a text-input filter
	pub fn input() -> Self {
		Self {
			kind: FilterKind::Input,
			value: None,
			choices: Vec::new(),
		}
	}

	/// Creates a select filter from `(value, label)` choices
	pub fn select<I, V, L>(choices: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		Self {
			kind: FilterKind::Select,
			value: None,
			choices: choices
				.into_iter()
				.map(|(value, label)| (value.into(), label.into()))
				.collect(),
		}
	}

	/// Sets the currently applied filter value
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Returns the filter kind
	pub fn kind(&self) -> FilterKind {
		self.kind
	}

	/// Returns the applied value, if any
	pub fn current_value(&self) -> Option<&str> {
		self.value.as_deref()
	}

	/// Builds the form control for the filter of `column`
	pub fn control(&self, column: &str) -> FormControl {
		let name = format!("filters[{column}]");
		match self.kind {
			FilterKind::Input => FormControl::text_input(&name, None, self.value.as_deref()),
			FilterKind::Select => {
				FormControl::select(&name, None, &self.choices, self.value.as_deref())
			}
		}
	}
}

/// Column-kind specific data
pub enum ColumnKind {
	/// Cells show the record value through a formatter
	Plain {
		/// Formatter applied to the raw value
		formatter: Box<dyn CellFormatter>,
	},
	/// Cells show the configured row actions
	Action {
		/// Actions rendered in every row, in order
		actions: Vec<Action>,
	},
}

impl Debug for ColumnKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Plain { .. } => f.debug_struct("Plain").finish_non_exhaustive(),
			Self::Action { actions } => f.debug_struct("Action").field("actions", actions).finish(),
		}
	}
}

/// A column of the data grid
///
/// # Example
///
/// ```rust
/// use reinhardt_datagrid::action::Action;
/// use reinhardt_datagrid::column::{ColumnFilter, GridColumn};
///
/// let name = GridColumn::new("name", "Name").filter(ColumnFilter::input());
/// let actions = GridColumn::actions("actions", "Actions")
///     .action(Action::new("edit", "Edit", "/users/edit"));
///
/// assert!(name.is_orderable());
/// assert!(!actions.is_orderable());
/// assert_eq!(actions.get_actions().len(), 1);
/// ```
#[derive(Debug)]
pub struct GridColumn {
	name: String,
	caption: String,
	orderable: bool,
	filter: Option<ColumnFilter>,
	header_attrs: IndexMap<String, String>,
	cell_attrs: IndexMap<String, String>,
	kind: ColumnKind,
}

impl GridColumn {
	/// Creates a plain, orderable column using [`TextFormatter`]
	pub fn new(name: impl Into<String>, caption: impl Into<String>) -> Self {
		Self::with_kind(
			name,
			caption,
			true,
			ColumnKind::Plain {
				formatter: Box::new(TextFormatter::new()),
			},
		)
	}

	/// Creates an action column with no actions yet
	pub fn actions(name: impl Into<String>, caption: impl Into<String>) -> Self {
		Self::with_kind(
			name,
			caption,
			false,
			ColumnKind::Action {
				actions: Vec::new(),
			},
		)
	}

	fn with_kind(
		name: impl Into<String>,
		caption: impl Into<String>,
		orderable: bool,
		kind: ColumnKind,
	) -> Self {
		Self {
			name: name.into(),
			caption: caption.into(),
			orderable,
			filter: None,
			header_attrs: IndexMap::new(),
			cell_attrs: IndexMap::new(),
			kind,
		}
	}

	/// Replaces the formatter of a plain column; no effect on action columns
	pub fn formatter(mut self, formatter: impl CellFormatter + 'static) -> Self {
		if let ColumnKind::Plain { formatter: current } = &mut self.kind {
			*current = Box::new(formatter);
		}
		self
	}

	/// Appends an action; no effect on plain columns
	pub fn action(mut self, action: Action) -> Self {
		if let ColumnKind::Action { actions } = &mut self.kind {
			actions.push(action);
		}
		self
	}

	/// Sets whether the header links to ordering by this column
	pub fn orderable(mut self, orderable: bool) -> Self {
		self.orderable = orderable;
		self
	}

	/// Attaches a filter
	pub fn filter(mut self, filter: ColumnFilter) -> Self {
		self.filter = Some(filter);
		self
	}

	/// Adds an attribute to the header cell
	pub fn header_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.header_attrs.insert(name.into(), value.into());
		self
	}

	/// Adds an attribute to every body cell (content and filter rows)
	pub fn cell_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.cell_attrs.insert(name.into(), value.into());
		self
	}

	/// Returns the column name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the header caption
	pub fn caption(&self) -> &str {
		&self.caption
	}

	/// Returns whether the column can be ordered
	pub fn is_orderable(&self) -> bool {
		self.orderable
	}

	/// Returns the filter, if any
	pub fn get_filter(&self) -> Option<&ColumnFilter> {
		self.filter.as_ref()
	}

	/// Returns whether a filter is attached
	pub fn has_filter(&self) -> bool {
		self.filter.is_some()
	}

	/// Returns the header cell attributes
	pub fn header_attrs(&self) -> &IndexMap<String, String> {
		&self.header_attrs
	}

	/// Returns the body cell attributes
	pub fn cell_attrs(&self) -> &IndexMap<String, String> {
		&self.cell_attrs
	}

	/// Returns the column kind
	pub fn kind(&self) -> &ColumnKind {
		&self.kind
	}

	/// Returns whether this is an action column
	pub fn is_action(&self) -> bool {
		matches!(self.kind, ColumnKind::Action { .. })
	}

	/// Returns the actions of an action column (empty for plain columns)
	pub fn get_actions(&self) -> &[Action] {
		match &self.kind {
			ColumnKind::Action { actions } => actions,
			ColumnKind::Plain { .. } => &[],
		}
	}

	/// Formats a raw value for a plain column (empty for action columns)
	pub fn format_content(&self, value: &Value) -> String {
		match &self.kind {
			ColumnKind::Plain { formatter } => formatter.format(value),
			ColumnKind::Action { .. } => String::new(),
		}
	}
}
