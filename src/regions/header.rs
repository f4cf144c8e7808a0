//! Header row

use super::RegionContext;
use crate::element::ElementNode;
use crate::error::Result;
use crate::html::escape;

/// Builds the header row: an optional checker cell, then one cell per column.
///
/// Orderable columns link to their ordering target and carry `asc`/`desc`
/// when sorted; a precedence badge is added only when several columns are
/// sorted.
pub(crate) fn generate(ctx: &RegionContext<'_>) -> Result<ElementNode> {
	let grid = ctx.grid;
	let mut row = ctx.wrapper("row.header container")?;

	if grid.has_operations() {
		let mut cell = ctx.wrapper("row.header cell container")?;
		cell.add_class("checker");
		if grid.has_filters() {
			cell.set_attr("rowspan", "2");
		}
		row.add_child(cell);
	}

	let sort = grid.sort_state();
	for column in grid.columns() {
		let mut cell = ctx.wrapper("row.header cell container")?;
		let mut text = escape(column.caption());

		if column.is_orderable() {
			let mut link = ElementNode::new("a")
				.attr("href", grid.links().order(column.name(), &sort))
				.class(&ctx.config.ajax_class);
			if let Some(key) = sort.get(column.name()) {
				link.add_class(key.direction.css_class());
				if sort.shows_precedence() {
					text.push_str(&format!("&nbsp;<span>{}</span>", key.rank));
				}
			}
			link.set_html(text);
			cell.set_html(link.to_string());
		} else {
			cell.set_html(text);
		}

		cell.merge_attrs(column.header_attrs());
		if column.is_action() {
			cell.add_class("actions");
		}
		row.add_child(cell);
	}

	tracing::trace!(cells = row.child_elements().count(), "generated header row");
	Ok(row)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::{ColumnFilter, GridColumn};
	use crate::regions::test_support::{simple_grid, with_context};
	use rstest::rstest;

	fn cells(row: &ElementNode) -> Vec<String> {
		row.child_elements().map(ElementNode::to_string).collect()
	}

	#[rstest]
	fn test_unsorted_header() {
		let grid = simple_grid();
		let row = with_context(&grid, |ctx| generate(ctx).unwrap());
		assert_eq!(
			cells(&row),
			vec![
				r#"<th><a href="?order=id%3Da" class="datagrid-ajax">ID</a></th>"#,
				r#"<th><a href="?order=name%3Da" class="datagrid-ajax">Name</a></th>"#,
			]
		);
		assert!(row.has_class("header"));
	}

	#[rstest]
	fn test_single_sorted_column_has_no_badge() {
		let mut grid = simple_grid();
		grid.set_order("name=a");
		let row = with_context(&grid, |ctx| generate(ctx).unwrap());
		assert_eq!(
			cells(&row)[1],
			r#"<th><a href="?order=name%3Dd" class="datagrid-ajax asc">Name</a></th>"#
		);
	}

	#[rstest]
	fn test_precedence_badges_follow_expression_order() {
		let mut grid = simple_grid();
		grid.set_order("name=d&id=a");
		let row = with_context(&grid, |ctx| generate(ctx).unwrap());
		let cells = cells(&row);
		assert!(cells[0].contains(r#"class="datagrid-ajax asc">ID&nbsp;<span>2</span></a>"#));
		assert!(cells[1].contains(r#"class="datagrid-ajax desc">Name&nbsp;<span>1</span></a>"#));
	}

	#[rstest]
	fn test_checker_cell_spans_filter_row() {
		let mut grid = simple_grid();
		grid.add_operation("delete", "Delete");
		let row = with_context(&grid, |ctx| generate(ctx).unwrap());
		assert_eq!(cells(&row)[0], r#"<th class="checker"></th>"#);

		grid.add_column(GridColumn::new("email", "E-mail").filter(ColumnFilter::input()))
			.unwrap();
		let row = with_context(&grid, |ctx| generate(ctx).unwrap());
		assert_eq!(cells(&row)[0], r#"<th class="checker" rowspan="2"></th>"#);
		assert_eq!(cells(&row).len(), 4);
	}

	#[rstest]
	fn test_action_and_unorderable_columns() {
		let mut grid = simple_grid();
		grid.add_column(
			GridColumn::actions("actions", "Actions <>").header_attr("width", "80"),
		)
		.unwrap();
		let row = with_context(&grid, |ctx| generate(ctx).unwrap());
		assert_eq!(
			cells(&row)[2],
			r#"<th width="80" class="actions">Actions &lt;&gt;</th>"#
		);
	}
}
