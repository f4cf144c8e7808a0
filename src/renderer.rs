//! Data grid renderer
//!
//! [`DataGridRenderer`] turns a [`DataGrid`] into HTML. Each call builds a
//! fresh element tree from the renderer's [`RendererConfig`]; nothing is kept
//! between calls apart from the parsed markup specs.

use crate::config::RendererConfig;
use crate::element::ElementFactory;
use crate::error::{DataGridError, Result};
use crate::grid::DataGrid;
use crate::regions::{self, RegionContext};
use std::fmt;
use std::str::FromStr;

/// A region rendered on its own by [`DataGridRenderer::render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
	/// Opening form tag
	Begin,
	/// Closing form tag
	End,
	/// Validation error list
	Errors,
	/// The table itself
	Body,
	/// Paginator controls
	Paginator,
	/// Bulk-operation controls
	Operations,
	/// Item range info
	Info,
}

impl RenderMode {
	/// Every mode, in document order
	pub const ALL: [RenderMode; 7] = [
		Self::Begin,
		Self::Errors,
		Self::Body,
		Self::Paginator,
		Self::Operations,
		Self::Info,
		Self::End,
	];

	/// Returns the lowercase mode name
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Begin => "begin",
			Self::End => "end",
			Self::Errors => "errors",
			Self::Body => "body",
			Self::Paginator => "paginator",
			Self::Operations => "operations",
			Self::Info => "info",
		}
	}
}

impl fmt::Display for RenderMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RenderMode {
	type Err = DataGridError;

	fn from_str(s: &str) -> Result<Self> {
		Self::ALL
			.into_iter()
			.find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| DataGridError::UnknownMode(s.to_string()))
	}
}

/// Renders data grids to HTML
///
/// # Example
///
/// ```rust
/// use reinhardt_datagrid::{DataGrid, DataGridRenderer, GridColumn, RecordSource, RenderMode};
/// use serde_json::json;
///
/// let mut grid = DataGrid::new();
/// grid.add_column(GridColumn::new("name", "Name")).unwrap();
/// grid.set_data_source(RecordSource::from_values(vec![json!({"name": "Alice"})]));
///
/// let renderer = DataGridRenderer::new();
/// let body = renderer.render(&grid, None).unwrap();
/// assert!(body.starts_with(r#"<table class="grid">"#));
///
/// let info = renderer.render(&grid, Some(RenderMode::Info)).unwrap();
/// assert_eq!(info, r#"<span class="grid-info">Displaying items 0 - 0 of 0</span>"#);
/// ```
#[derive(Debug, Default)]
pub struct DataGridRenderer {
	config: RendererConfig,
	factory: ElementFactory,
}

impl DataGridRenderer {
	/// Creates a renderer with the built-in configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with a custom configuration
	pub fn with_config(config: RendererConfig) -> Self {
		Self {
			config,
			factory: ElementFactory::new(),
		}
	}

	/// Returns the configuration
	pub fn config(&self) -> &RendererConfig {
		&self.config
	}

	/// Returns the configuration for overriding before rendering
	pub fn config_mut(&mut self) -> &mut RendererConfig {
		&mut self.config
	}

	/// Renders one region, or the table body when `mode` is `None`
	///
	/// # Errors
	///
	/// Returns [`DataGridError::Precondition`] before producing any output
	/// when the grid has no executed data source, and propagates
	/// configuration and missing-key errors from the regions.
	pub fn render(&self, grid: &DataGrid, mode: Option<RenderMode>) -> Result<String> {
		tracing::debug!(
			mode = mode.map(|mode| mode.as_str()).unwrap_or("body"),
			columns = grid.columns().len(),
			"rendering data grid"
		);
		match mode.unwrap_or(RenderMode::Body) {
			RenderMode::Begin => self.render_begin(grid),
			RenderMode::End => self.render_end(grid),
			RenderMode::Errors => self.render_errors(grid),
			RenderMode::Body => self.render_body(grid),
			RenderMode::Paginator => self.render_paginator(grid),
			RenderMode::Operations => self.render_operations(grid),
			RenderMode::Info => self.render_info(grid),
		}
	}

	/// Renders the opening tag of the grid form
	///
	/// The form is rebuilt for every render, so no control is considered
	/// already rendered.
	pub fn render_begin(&self, grid: &DataGrid) -> Result<String> {
		let ctx = self.context(grid)?;
		let mut form = ctx.wrapper("form container")?;
		form.set_attr("action", ctx.form.action());
		form.set_attr("method", "post");
		Ok(form.start_tag())
	}

	/// Renders the closing tag of the grid form, followed by a newline
	pub fn render_end(&self, grid: &DataGrid) -> Result<String> {
		let ctx = self.context(grid)?;
		let form = ctx.wrapper("form container")?;
		Ok(format!("{}\n", form.end_tag()))
	}

	/// Renders the validation error list; empty when there are no errors
	pub fn render_errors(&self, grid: &DataGrid) -> Result<String> {
		let ctx = self.context(grid)?;
		Ok(regions::errors::generate(&ctx)?
			.map(|list| format!("\n{}", list.render(Some(0))))
			.unwrap_or_default())
	}

	/// Renders the table: header, optional filter row, one row per record and
	/// the footer
	pub fn render_body(&self, grid: &DataGrid) -> Result<String> {
		let ctx = self.context(grid)?;
		let mut table = ctx.wrapper("grid container")?;

		table.add_child(regions::header::generate(&ctx)?);
		if grid.has_filters() {
			table.add_child(regions::filter::generate(&ctx)?);
		}

		let source = grid
			.data_source()
			.ok_or_else(|| DataGridError::Precondition("data source not set".to_string()))?;
		for (index, record) in source.rows().enumerate() {
			table.add_child(regions::content::generate(&ctx, &record, index)?);
		}

		table.add_child(regions::footer::generate(&ctx)?);
		Ok(table.render(Some(0)))
	}

	/// Renders the paginator; empty when there is a single page
	pub fn render_paginator(&self, grid: &DataGrid) -> Result<String> {
		let ctx = self.context(grid)?;
		Ok(regions::paginator::generate(&ctx)?
			.map(|paginator| paginator.to_string())
			.unwrap_or_default())
	}

	/// Renders the bulk-operation controls; empty without operations
	pub fn render_operations(&self, grid: &DataGrid) -> Result<String> {
		let ctx = self.context(grid)?;
		Ok(regions::operations::generate(&ctx)?
			.map(|operations| operations.to_string())
			.unwrap_or_default())
	}

	/// Renders the item range info
	pub fn render_info(&self, grid: &DataGrid) -> Result<String> {
		let ctx = self.context(grid)?;
		Ok(regions::info::generate(&ctx)?.to_string())
	}

	fn context<'a>(&'a self, grid: &'a DataGrid) -> Result<RegionContext<'a>> {
		check_data_source(grid)?;
		Ok(RegionContext::new(&self.config, &self.factory, grid))
	}
}

fn check_data_source(grid: &DataGrid) -> Result<()> {
	match grid.data_source() {
		None => Err(DataGridError::Precondition("data source not set".to_string())),
		Some(source) if !source.is_executed() => Err(DataGridError::Precondition(
			"data source has not been executed".to_string(),
		)),
		Some(_) => Ok(()),
	}
}
