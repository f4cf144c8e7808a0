//! Data grid state read by the renderer

use crate::column::GridColumn;
use crate::error::{DataGridError, Result};
use crate::form::{self, FormControl, FormError, GridForm};
use crate::links::{LinkGenerator, QueryLinkGenerator};
use crate::pagination::PaginationState;
use crate::sorting::SortState;
use crate::translation::Translator;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::{self, Debug};

/// One data row: field name → raw value
pub type Record = serde_json::Map<String, Value>;

/// Source of the rows shown on the current page
///
/// Query execution belongs to the application; the renderer only requires
/// that the source has been executed before rendering starts.
pub trait DataSource {
	/// Returns whether the underlying query has run
	fn is_executed(&self) -> bool {
		true
	}

	/// Streams the records of the current page
	fn rows(&self) -> Box<dyn Iterator<Item = Record> + '_>;
}

/// In-memory data source
///
/// ## Example
///
/// ```
/// use reinhardt_datagrid::grid::{DataSource, RecordSource};
/// use serde_json::json;
///
/// let source = RecordSource::from_values(vec![json!({"id": 1}), json!({"id": 2})]);
/// assert_eq!(source.rows().count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordSource {
	records: Vec<Record>,
	executed: bool,
}

impl RecordSource {
	/// Creates an executed source over `records`
	pub fn new(records: Vec<Record>) -> Self {
		Self {
			records,
			executed: true,
		}
	}

	/// Creates a source that still has to be executed
	pub fn deferred(records: Vec<Record>) -> Self {
		Self {
			records,
			executed: false,
		}
	}

	/// Creates an executed source from JSON values
	///
	/// Values that are not JSON objects cannot be rows; each one is skipped
	/// with a warning.
	pub fn from_values(values: Vec<Value>) -> Self {
		let records = values
			.into_iter()
			.enumerate()
			.filter_map(|(index, value)| match value {
				Value::Object(record) => Some(record),
				other => {
					tracing::warn!(index, value = %other, "skipping non-object record");
					None
				}
			})
			.collect();
		Self::new(records)
	}

	/// Marks the source as executed
	pub fn execute(&mut self) {
		self.executed = true;
	}
}

impl DataSource for RecordSource {
	fn is_executed(&self) -> bool {
		self.executed
	}

	fn rows(&self) -> Box<dyn Iterator<Item = Record> + '_> {
		Box::new(self.records.iter().cloned())
	}
}

/// A data grid: columns, data, pagination, ordering and bulk operations
///
/// # Example
///
/// ```rust
/// use reinhardt_datagrid::column::GridColumn;
/// use reinhardt_datagrid::grid::{DataGrid, RecordSource};
/// use serde_json::json;
///
/// let mut grid = DataGrid::new();
/// grid.add_column(GridColumn::new("id", "ID")).unwrap();
/// grid.add_column(GridColumn::new("name", "Name")).unwrap();
/// grid.set_data_source(RecordSource::from_values(vec![json!({"id": 1, "name": "Alice"})]));
///
/// assert_eq!(grid.columns().len(), 2);
/// assert!(!grid.has_operations());
/// ```
pub struct DataGrid {
	columns: Vec<GridColumn>,
	data_source: Option<Box<dyn DataSource>>,
	pagination: PaginationState,
	order: String,
	key_name: String,
	operations: IndexMap<String, String>,
	form_action: String,
	form_errors: Vec<FormError>,
	translator: Option<Box<dyn Translator>>,
	links: Box<dyn LinkGenerator>,
}

impl Default for DataGrid {
	fn default() -> Self {
		Self::new()
	}
}

impl DataGrid {
	/// Creates an empty grid keyed by `id`
	pub fn new() -> Self {
		Self {
			columns: Vec::new(),
			data_source: None,
			pagination: PaginationState::default(),
			order: String::new(),
			key_name: "id".to_string(),
			operations: IndexMap::new(),
			form_action: String::new(),
			form_errors: Vec::new(),
			translator: None,
			links: Box::new(QueryLinkGenerator::default()),
		}
	}

	/// Appends a column
	///
	/// # Errors
	///
	/// Returns [`DataGridError::DuplicateColumn`] if a column with the same
	/// name already exists.
	pub fn add_column(&mut self, column: GridColumn) -> Result<()> {
		if self.columns.iter().any(|existing| existing.name() == column.name()) {
			return Err(DataGridError::DuplicateColumn(column.name().to_string()));
		}
		self.columns.push(column);
		Ok(())
	}

	/// Returns the columns in display order
	pub fn columns(&self) -> &[GridColumn] {
		&self.columns
	}

	/// Attaches the data source
	pub fn set_data_source(&mut self, source: impl DataSource + 'static) {
		self.data_source = Some(Box::new(source));
	}

	/// Returns the attached data source
	pub fn data_source(&self) -> Option<&dyn DataSource> {
		self.data_source.as_deref()
	}

	/// Sets the pagination state
	pub fn set_pagination(&mut self, pagination: PaginationState) {
		self.pagination = pagination;
	}

	/// Returns the pagination state
	pub fn pagination(&self) -> &PaginationState {
		&self.pagination
	}

	/// Sets the order expression, e.g. `name=a&id=d`
	pub fn set_order(&mut self, order: impl Into<String>) {
		self.order = order.into();
	}

	/// Returns the raw order expression
	pub fn order(&self) -> &str {
		&self.order
	}

	/// Decodes the order expression
	pub fn sort_state(&self) -> SortState {
		SortState::decode(&self.order)
	}

	/// Sets the primary-key field used by row selection and actions
	pub fn set_key_name(&mut self, key_name: impl Into<String>) {
		self.key_name = key_name.into();
	}

	/// Returns the primary-key field name
	pub fn key_name(&self) -> &str {
		&self.key_name
	}

	/// Registers a bulk operation
	pub fn add_operation(&mut self, value: impl Into<String>, label: impl Into<String>) {
		self.operations.insert(value.into(), label.into());
	}

	/// Returns the bulk operations as value → label
	pub fn operations(&self) -> &IndexMap<String, String> {
		&self.operations
	}

	/// Returns whether bulk operations are enabled
	pub fn has_operations(&self) -> bool {
		!self.operations.is_empty()
	}

	/// Returns whether any action column has at least one action
	pub fn has_actions(&self) -> bool {
		self.columns
			.iter()
			.any(|column| !column.get_actions().is_empty())
	}

	/// Returns whether any column has a filter
	pub fn has_filters(&self) -> bool {
		self.columns.iter().any(GridColumn::has_filter)
	}

	/// Sets the URL the grid form submits to
	pub fn set_form_action(&mut self, action: impl Into<String>) {
		self.form_action = action.into();
	}

	/// Attaches a validation error to the grid form
	pub fn add_form_error(&mut self, error: impl Into<FormError>) {
		self.form_errors.push(error.into());
	}

	/// Sets the translator for labels and formats
	pub fn set_translator(&mut self, translator: impl Translator + 'static) {
		self.translator = Some(Box::new(translator));
	}

	/// Translates `message`, or returns it unchanged without a translator
	pub fn translate(&self, message: &str) -> String {
		match &self.translator {
			Some(translator) => translator.translate(message),
			None => message.to_string(),
		}
	}

	/// Replaces the link generator
	pub fn set_link_generator(&mut self, links: impl LinkGenerator + 'static) {
		self.links = Box::new(links);
	}

	/// Returns the link generator
	pub fn links(&self) -> &dyn LinkGenerator {
		self.links.as_ref()
	}

	/// Builds the grid form from the current state
	///
	/// A new form is built on every call; controls never carry state from a
	/// previous render.
	pub fn form(&self) -> GridForm {
		let mut grid_form = GridForm::new(self.form_action.clone());

		let page = self.pagination.page.to_string();
		grid_form.add_control(FormControl::text_input(
			form::PAGE,
			Some(&self.translate("Page")),
			Some(&page),
		));
		grid_form.add_control(FormControl::submit(
			form::PAGE_SUBMIT,
			&self.translate("Change page"),
		));

		if self.has_operations() {
			let choices: Vec<(String, String)> = self
				.operations
				.iter()
				.map(|(value, label)| (value.clone(), self.translate(label)))
				.collect();
			grid_form.add_control(FormControl::select(
				form::OPERATIONS,
				Some(&self.translate("Selected")),
				&choices,
				None,
			));
			grid_form.add_control(FormControl::submit(
				form::OPERATION_SUBMIT,
				&self.translate("Send"),
			));
		}

		if self.has_filters() {
			grid_form.add_control(FormControl::submit(
				form::FILTER_SUBMIT,
				&self.translate("Filter"),
			));
			for column in &self.columns {
				if let Some(filter) = column.get_filter() {
					grid_form.add_control(filter.control(column.name()));
				}
			}
		}

		for error in &self.form_errors {
			grid_form.add_error(error.clone());
		}
		grid_form
	}
}

impl Debug for DataGrid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DataGrid")
			.field("columns", &self.columns)
			.field("has_data_source", &self.data_source.is_some())
			.field("pagination", &self.pagination)
			.field("order", &self.order)
			.field("key_name", &self.key_name)
			.field("operations", &self.operations)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::action::Action;
	use crate::column::ColumnFilter;
	use crate::translation::MessageCatalog;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn grid() -> DataGrid {
		let mut grid = DataGrid::new();
		grid.add_column(GridColumn::new("id", "ID")).unwrap();
		grid.add_column(GridColumn::new("name", "Name")).unwrap();
		grid
	}

	#[rstest]
	fn test_duplicate_column_rejected(mut grid: DataGrid) {
		let result = grid.add_column(GridColumn::new("name", "Other"));
		assert!(matches!(result, Err(DataGridError::DuplicateColumn(name)) if name == "name"));
		assert_eq!(grid.columns().len(), 2);
	}

	#[rstest]
	fn test_feature_flags(mut grid: DataGrid) {
		assert!(!grid.has_operations());
		assert!(!grid.has_actions());
		assert!(!grid.has_filters());

		grid.add_operation("delete", "Delete");
		grid.add_column(
			GridColumn::actions("actions", "Actions").action(Action::new("edit", "Edit", "/edit")),
		)
		.unwrap();
		grid.add_column(GridColumn::new("email", "E-mail").filter(ColumnFilter::input()))
			.unwrap();

		assert!(grid.has_operations());
		assert!(grid.has_actions());
		assert!(grid.has_filters());
	}

	#[rstest]
	fn test_empty_action_column_does_not_enable_actions(mut grid: DataGrid) {
		grid.add_column(GridColumn::actions("actions", "Actions")).unwrap();
		assert!(!grid.has_actions());
	}

	#[rstest]
	fn test_form_controls_follow_state(mut grid: DataGrid) {
		let grid_form = grid.form();
		assert!(grid_form.control(form::PAGE).is_ok());
		assert!(grid_form.control(form::PAGE_SUBMIT).is_ok());
		assert!(grid_form.control(form::OPERATIONS).is_err());
		assert!(grid_form.control(form::FILTER_SUBMIT).is_err());

		grid.add_operation("delete", "Delete");
		grid.add_column(GridColumn::new("email", "E-mail").filter(ColumnFilter::input()))
			.unwrap();
		let grid_form = grid.form();
		assert!(grid_form.control(form::OPERATIONS).is_ok());
		assert!(grid_form.control(form::OPERATION_SUBMIT).is_ok());
		assert!(grid_form.control(form::FILTER_SUBMIT).is_ok());
		assert!(grid_form.control("filters[email]").is_ok());
	}

	#[rstest]
	fn test_form_is_translated(mut grid: DataGrid) {
		let mut catalog = MessageCatalog::new("cs");
		catalog.add_translation("Page", "Stránka");
		grid.set_translator(catalog);

		let grid_form = grid.form();
		assert_eq!(grid_form.control(form::PAGE).unwrap().title(), Some("Stránka"));
	}

	#[rstest]
	fn test_form_carries_errors(mut grid: DataGrid) {
		grid.add_form_error("No rows selected.");
		assert_eq!(grid.form().errors().len(), 1);
	}

	#[rstest]
	fn test_record_source() {
		let mut source = RecordSource::deferred(vec![]);
		assert!(!source.is_executed());
		source.execute();
		assert!(source.is_executed());

		let source = RecordSource::from_values(vec![json!({"id": 1}), json!("skipped")]);
		assert_eq!(source.rows().count(), 1);
	}

	#[rstest]
	fn test_translate_without_translator(grid: DataGrid) {
		assert_eq!(grid.translate("Next"), "Next");
	}

	#[rstest]
	fn test_from_values_warns_about_skipped_values() {
		use std::sync::{Arc, Mutex};
		use tracing_subscriber::layer::SubscriberExt as _;
		use tracing_subscriber::util::SubscriberInitExt as _;

		struct WarningCapture {
			warnings: Arc<Mutex<Vec<String>>>,
		}

		impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarningCapture {
			fn on_event(
				&self,
				event: &tracing::Event<'_>,
				_ctx: tracing_subscriber::layer::Context<'_, S>,
			) {
				struct Fields(String);

				impl tracing::field::Visit for Fields {
					fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn Debug) {
						self.0.push_str(&format!("{}={:?} ", field.name(), value));
					}
				}

				if *event.metadata().level() == tracing::Level::WARN {
					let mut fields = Fields(String::new());
					event.record(&mut fields);
					self.warnings.lock().unwrap().push(fields.0);
				}
			}
		}

		let warnings = Arc::new(Mutex::new(Vec::new()));
		let _guard = tracing_subscriber::registry()
			.with(WarningCapture {
				warnings: warnings.clone(),
			})
			.set_default();

		let source = RecordSource::from_values(vec![json!({"id": 1}), json!(42), json!({"id": 2})]);

		assert_eq!(source.rows().count(), 2);
		let warnings = warnings.lock().unwrap();
		assert_eq!(warnings.len(), 1);
		assert!(warnings[0].contains("skipping non-object record"));
		assert!(warnings[0].contains("index=1"));
	}
}
