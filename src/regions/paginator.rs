//! Paginator

use super::RegionContext;
use crate::element::ElementNode;
use crate::error::Result;
use crate::form;
use crate::html::substitute;

/// Builds the paginator, or `None` when there is only one page
///
/// Each of the first/previous/next/last buttons is plain text at its
/// boundary and a link otherwise. The page input segment sits between the
/// previous and next buttons.
pub(crate) fn generate(ctx: &RegionContext<'_>) -> Result<Option<ElementNode>> {
	let pagination = ctx.grid.pagination();
	if pagination.page_count <= 1 {
		tracing::debug!(page_count = pagination.page_count, "paginator suppressed");
		return Ok(None);
	}

	let page = pagination.page;
	let buttons = [
		(
			format!("« {}", ctx.translate("First")),
			"paginator-first",
			pagination.is_first(),
			1,
		),
		(
			format!("« {}", ctx.translate("Previous")),
			"paginator-prev",
			pagination.is_first(),
			page.saturating_sub(1).max(1),
		),
		(
			format!("{} »", ctx.translate("Next")),
			"paginator-next",
			pagination.is_last(),
			(page + 1).min(pagination.page_count),
		),
		(
			format!("{} »", ctx.translate("Last")),
			"paginator-last",
			pagination.is_last(),
			pagination.page_count,
		),
	];

	let mut container = ctx.wrapper("paginator container")?;
	for (label, class, at_boundary, target) in buttons {
		let mut button = ctx.wrapper("paginator button container")?;
		button.add_class(class);
		if at_boundary {
			button.set_text(label);
		} else {
			let link = ElementNode::new("a")
				.attr("href", ctx.grid.links().page(target))
				.class(&ctx.config.ajax_class)
				.attr("title", label.as_str())
				.text(label);
			button.add_child(link);
		}
		container.add_child(button);

		if class == "paginator-prev" {
			container.add_child(page_segment(ctx)?);
		}
	}

	tracing::trace!(page, page_count = pagination.page_count, "generated paginator");
	Ok(Some(container))
}

/// Builds the "page N of M" input segment followed by its submit control
fn page_segment(ctx: &RegionContext<'_>) -> Result<ElementNode> {
	let input = ctx.form.control(form::PAGE)?;
	let label = input
		.label()
		.map(|label| label.to_string())
		.unwrap_or_default();
	let count = ctx.grid.pagination().page_count.to_string();
	let format = ctx.translate("%label% %input% of %count%");
	let control = input.control().to_string();
	let text = substitute(
		&format,
		&[
			("label", label.as_str()),
			("input", control.as_str()),
			("count", count.as_str()),
		],
	);

	let submit = ctx.form.control(form::PAGE_SUBMIT)?.control();
	Ok(ElementNode::fragment().html(text).child(submit))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::pagination::PaginationState;
	use crate::regions::test_support::{simple_grid, with_context};
	use rstest::rstest;

	#[rstest]
	#[case(1, 10, 0)]
	#[case(1, 10, 10)]
	fn test_single_page_is_suppressed(
		#[case] page: usize,
		#[case] per_page: usize,
		#[case] items: usize,
	) {
		let mut grid = simple_grid();
		grid.set_pagination(PaginationState::new(page, per_page, items));
		let paginator = with_context(&grid, |ctx| generate(ctx).unwrap());
		assert!(paginator.is_none());
	}

	#[rstest]
	fn test_middle_page_links_every_button() {
		let mut grid = simple_grid();
		grid.set_pagination(PaginationState::new(2, 10, 30));
		let html = with_context(&grid, |ctx| generate(ctx).unwrap().unwrap().to_string());

		assert!(html.starts_with(r#"<span class="paginator">"#));
		assert!(html.contains(
			r#"<span class="paginator-first"><a href="?page=1" class="datagrid-ajax" title="« First">« First</a></span>"#
		));
		assert!(html.contains(r#"<a href="?page=1" class="datagrid-ajax" title="« Previous">"#));
		assert!(html.contains(r#"<a href="?page=3" class="datagrid-ajax" title="Next »">"#));
		assert!(html.contains(r#"<a href="?page=3" class="datagrid-ajax" title="Last »">"#));
		assert!(html.contains(concat!(
			r#"<label for="frm-page">Page</label> "#,
			r#"<input type="text" name="page" id="frm-page" value="2" /> of 3"#
		)));
		assert!(html.contains(r#"name="pageSubmit""#));
	}

	#[rstest]
	fn test_boundaries_render_plain_text() {
		let mut grid = simple_grid();
		grid.set_pagination(PaginationState::new(1, 10, 30));
		let html = with_context(&grid, |ctx| generate(ctx).unwrap().unwrap().to_string());
		assert!(html.contains(r#"<span class="paginator-first">« First</span>"#));
		assert!(html.contains(r#"<span class="paginator-prev">« Previous</span>"#));
		assert!(html.contains(r#"<a href="?page=2" class="datagrid-ajax" title="Next »">"#));

		grid.set_pagination(PaginationState::new(3, 10, 30));
		let html = with_context(&grid, |ctx| generate(ctx).unwrap().unwrap().to_string());
		assert!(html.contains(r#"<span class="paginator-next">Next »</span>"#));
		assert!(html.contains(r#"<span class="paginator-last">Last »</span>"#));
	}

	#[rstest]
	fn test_labels_are_translated() {
		let mut grid = simple_grid();
		grid.set_pagination(PaginationState::new(2, 10, 30));
		grid.set_translator(|message: &str| match message {
			"First" => "První".to_string(),
			"%label% %input% of %count%" => "%label% %input% z %count%".to_string(),
			other => other.to_string(),
		});
		let html = with_context(&grid, |ctx| generate(ctx).unwrap().unwrap().to_string());
		assert!(html.contains("« První</a>"));
		assert!(html.contains("/> z 3"));
	}
}
