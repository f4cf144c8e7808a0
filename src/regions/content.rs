//! Content rows

use super::RegionContext;
use crate::column::{ColumnKind, value_to_text};
use crate::element::ElementNode;
use crate::error::{DataGridError, Result};
use crate::grid::Record;
use serde_json::Value;

/// Builds the row for `record`, the `index`-th (0-based) record of the page
///
/// Every second row is tagged with the `row.content .even` class. When the
/// grid has bulk operations or row actions, the record must carry the key
/// field; otherwise nothing is built.
pub(crate) fn generate(ctx: &RegionContext<'_>, record: &Record, index: usize) -> Result<ElementNode> {
	let grid = ctx.grid;
	let key = if grid.has_operations() || grid.has_actions() {
		let value = record
			.get(grid.key_name())
			.ok_or_else(|| DataGridError::MissingKey {
				key: grid.key_name().to_string(),
			})?;
		Some(value_to_text(value))
	} else {
		None
	};

	let mut row = ctx.wrapper("row.content container")?;
	if index % 2 == 1 {
		row.add_class(ctx.value("row.content .even")?);
	}

	if grid.has_operations()
		&& let Some(key) = &key
	{
		let mut cell = ctx.wrapper("row.content cell container")?;
		cell.add_class("checker");
		cell.add_child(ctx.form.checker(key).control());
		row.add_child(cell);
	}

	for column in grid.columns() {
		let mut cell = ctx.wrapper("row.content cell container")?;
		match (column.kind(), &key) {
			(ColumnKind::Action { actions }, Some(key)) => {
				let links: Vec<String> = actions
					.iter()
					.map(|action| {
						let mut link = action.element(&ctx.translate(action.title()), grid.key_name(), key);
						if action.is_ajax() {
							link.add_class(&ctx.config.ajax_class);
						}
						link.to_string()
					})
					.collect();
				cell.set_html(links.join(" "));
				cell.add_class("actions");
			}
			(ColumnKind::Action { .. }, None) => cell.add_class("actions"),
			(ColumnKind::Plain { .. }, _) => {
				let value = record.get(column.name()).unwrap_or(&Value::Null);
				cell.set_html(column.format_content(value));
			}
		}
		cell.merge_attrs(column.cell_attrs());
		row.add_child(cell);
	}

	tracing::trace!(index, "generated content row");
	Ok(row)
}
