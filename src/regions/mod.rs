//! Region generators
//!
//! One generator per grid region. Each reads the wrapper registry, the
//! element factory and a slice of grid state through [`RegionContext`] and
//! returns a freshly built element subtree.

pub(crate) mod content;
pub(crate) mod errors;
pub(crate) mod filter;
pub(crate) mod footer;
pub(crate) mod header;
pub(crate) mod info;
pub(crate) mod operations;
pub(crate) mod paginator;

use crate::config::RendererConfig;
use crate::element::{ElementFactory, ElementNode};
use crate::error::Result;
use crate::form::GridForm;
use crate::grid::DataGrid;

/// Everything a generator may read during one render call
pub(crate) struct RegionContext<'a> {
	pub(crate) config: &'a RendererConfig,
	pub(crate) factory: &'a ElementFactory,
	pub(crate) grid: &'a DataGrid,
	pub(crate) form: GridForm,
}

impl<'a> RegionContext<'a> {
	pub(crate) fn new(
		config: &'a RendererConfig,
		factory: &'a ElementFactory,
		grid: &'a DataGrid,
	) -> Self {
		Self {
			config,
			factory,
			grid,
			form: grid.form(),
		}
	}

	/// Instantiates the wrapper at `path`
	pub(crate) fn wrapper(&self, path: &str) -> Result<ElementNode> {
		self.config.wrappers.instantiate(self.factory, path)
	}

	/// Returns the raw wrapper value at `path` (e.g. a class name)
	pub(crate) fn value(&self, path: &str) -> Result<&'a str> {
		self.config.wrappers.markup(path)
	}

	pub(crate) fn translate(&self, message: &str) -> String {
		self.grid.translate(message)
	}
}

#[cfg(test)]
pub(crate) mod test_support {
	use super::RegionContext;
	use crate::column::GridColumn;
	use crate::config::RendererConfig;
	use crate::element::ElementFactory;
	use crate::grid::{DataGrid, RecordSource};
	use serde_json::json;

	/// Grid with `id` and `name` columns over two records
	pub(crate) fn simple_grid() -> DataGrid {
		let mut grid = DataGrid::new();
		grid.add_column(GridColumn::new("id", "ID")).unwrap();
		grid.add_column(GridColumn::new("name", "Name")).unwrap();
		grid.set_data_source(RecordSource::from_values(vec![
			json!({"id": 1, "name": "Alice"}),
			json!({"id": 2, "name": "Bob"}),
		]));
		grid
	}

	pub(crate) fn with_context<T>(
		grid: &DataGrid,
		body: impl FnOnce(&RegionContext<'_>) -> T,
	) -> T {
		let config = RendererConfig::default();
		let factory = ElementFactory::new();
		let ctx = RegionContext::new(&config, &factory, grid);
		body(&ctx)
	}
}
