//! Bulk-operation controls

use super::RegionContext;
use crate::element::ElementNode;
use crate::error::Result;
use crate::form;

/// Builds the operation selector with its label and submit control, or
/// `None` when the grid has no bulk operations
pub(crate) fn generate(ctx: &RegionContext<'_>) -> Result<Option<ElementNode>> {
	if !ctx.grid.has_operations() {
		tracing::debug!("operations suppressed");
		return Ok(None);
	}

	let selector = ctx.form.control(form::OPERATIONS)?;
	let mut container = ctx.wrapper("operations container")?;
	if let Some(label) = selector.label() {
		container.add_child(label);
	}
	container.add_child(selector.control());
	container.add_child(ctx.form.control(form::OPERATION_SUBMIT)?.control());

	tracing::trace!(operations = ctx.grid.operations().len(), "generated operations");
	Ok(Some(container))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::regions::test_support::{simple_grid, with_context};
	use rstest::rstest;

	#[rstest]
	fn test_suppressed_without_operations() {
		let grid = simple_grid();
		assert!(with_context(&grid, |ctx| generate(ctx).unwrap()).is_none());
	}

	#[rstest]
	fn test_label_selector_and_submit() {
		let mut grid = simple_grid();
		grid.add_operation("delete", "Delete");
		grid.add_operation("archive", "Archive");
		let html = with_context(&grid, |ctx| generate(ctx).unwrap().unwrap().to_string());
		assert_eq!(
			html,
			concat!(
				r#"<span class="operations">"#,
				r#"<label for="frm-operations">Selected</label>"#,
				r#"<select name="operations" id="frm-operations">"#,
				r#"<option value="delete">Delete</option>"#,
				r#"<option value="archive">Archive</option>"#,
				"</select>",
				r#"<input type="submit" name="operationSubmit" id="frm-operationSubmit" value="Send" />"#,
				"</span>"
			)
		);
	}
}
