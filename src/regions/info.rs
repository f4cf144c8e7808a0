//! Item range info

use super::RegionContext;
use crate::element::ElementNode;
use crate::error::Result;
use crate::html::substitute;

/// Builds the "items X - Y of Z" line from the translated info format
pub(crate) fn generate(ctx: &RegionContext<'_>) -> Result<ElementNode> {
	let pagination = ctx.grid.pagination();
	let from = if pagination.item_count != 0 {
		pagination.offset + 1
	} else {
		pagination.offset
	};
	let to = (pagination.offset + pagination.length).to_string();
	let from = from.to_string();
	let count = pagination.item_count.to_string();

	let format = ctx.translate(&ctx.config.info_format);
	let mut container = ctx.wrapper("info container")?;
	container.set_html(substitute(
		&format,
		&[
			("from", from.as_str()),
			("to", to.as_str()),
			("count", count.as_str()),
		],
	));
	Ok(container)
}
