//! Filter row

use super::RegionContext;
use crate::column::FilterKind;
use crate::element::ElementNode;
use crate::error::Result;
use crate::form;

/// Builds the filter row
///
/// The caller decides whether the row is shown at all; this only fills it.
pub(crate) fn generate(ctx: &RegionContext<'_>) -> Result<ElementNode> {
	let mut row = ctx.wrapper("row.filter container")?;

	for column in ctx.grid.columns() {
		let mut cell = ctx.wrapper("row.filter cell container")?;

		if column.is_action() {
			let mut submit = ctx.form.control(form::FILTER_SUBMIT)?.control();
			submit.add_class(ctx.value("row.filter control .submit")?);
			cell.add_child(submit);
			cell.add_class("actions");
		} else if let Some(filter) = column.get_filter() {
			let class_path = match filter.kind() {
				FilterKind::Select => "row.filter control .select",
				FilterKind::Input => "row.filter control .input",
			};
			let name = format!("filters[{}]", column.name());
			let mut control = ctx.form.control(&name)?.control();
			control.add_class(ctx.value(class_path)?);
			cell.add_child(control);
		} else {
			cell.set_html("&nbsp;");
		}

		cell.merge_attrs(column.cell_attrs());
		row.add_child(cell);
	}

	tracing::trace!(cells = row.child_elements().count(), "generated filter row");
	Ok(row)
}
