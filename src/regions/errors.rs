//! Form validation errors

use super::RegionContext;
use crate::element::ElementNode;
use crate::error::Result;
use crate::form::FormError;

/// Builds the error list, or `None` when the form has no errors
pub(crate) fn generate(ctx: &RegionContext<'_>) -> Result<Option<ElementNode>> {
	let errors = ctx.form.errors();
	if errors.is_empty() {
		return Ok(None);
	}

	let mut list = ctx.wrapper("error container")?;
	for error in errors {
		let mut item = ctx.wrapper("error item")?;
		match error {
			FormError::Text(message) => item.set_text(message.as_str()),
			FormError::Html(markup) => item.set_html(markup.as_str()),
		}
		list.add_child(item);
	}
	Ok(Some(list))
}
