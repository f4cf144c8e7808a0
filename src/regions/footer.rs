//! Footer row

use super::{RegionContext, info, operations, paginator};
use crate::element::ElementNode;
use crate::error::Result;
use crate::html::substitute;

/// Separator characters stripped from both ends of the footer text
const SEPARATOR_CHARS: &[char] = &[' ', '|'];

/// Builds the footer row: one cell spanning the grid, holding the translated
/// footer format with the operations, paginator and info regions substituted
pub(crate) fn generate(ctx: &RegionContext<'_>) -> Result<ElementNode> {
	let grid = ctx.grid;
	let span = grid.columns().len() + usize::from(grid.has_operations());

	let operations = operations::generate(ctx)?
		.map(|node| node.to_string())
		.unwrap_or_default();
	let paginator = paginator::generate(ctx)?
		.map(|node| node.to_string())
		.unwrap_or_default();
	let info = info::generate(ctx)?.to_string();

	let format = ctx.translate(&ctx.config.footer_format);
	let text = substitute(
		&format,
		&[
			("operations", operations.as_str()),
			("paginator", paginator.as_str()),
			("info", info.as_str()),
		],
	);

	let mut cell = ctx.wrapper("row.footer cell container")?;
	cell.set_attr("colspan", span.to_string());
	cell.set_html(text.trim_matches(SEPARATOR_CHARS));

	let mut row = ctx.wrapper("row.footer container")?;
	row.add_child(cell);
	tracing::trace!(colspan = span, "generated footer row");
	Ok(row)
}
