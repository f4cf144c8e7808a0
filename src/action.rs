//! Row-scoped actions rendered inside action columns

use crate::element::ElementNode;

/// A link applied to a single row, e.g. "edit" or "delete"
///
/// The target is built from the row's primary key:
/// `destination?<key name>=<key value>`.
///
/// ## Example
///
/// ```
/// use reinhardt_datagrid::action::Action;
///
/// let edit = Action::new("edit", "Edit", "/users/edit");
/// assert_eq!(edit.link("id", "7"), "/users/edit?id=7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
	name: String,
	title: String,
	destination: String,
	icon: Option<String>,
	ajax: bool,
}

impl Action {
	/// Creates an action with a text label
	pub fn new(
		name: impl Into<String>,
		title: impl Into<String>,
		destination: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			title: title.into(),
			destination: destination.into(),
			icon: None,
			ajax: false,
		}
	}

	/// Renders an icon (`<span class="icon icon-NAME">`) instead of the label
	pub fn icon(mut self, icon: impl Into<String>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	/// Marks the link for asynchronous handling
	pub fn ajax(mut self, ajax: bool) -> Self {
		self.ajax = ajax;
		self
	}

	/// Returns the action name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the untranslated title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Returns whether the link is handled asynchronously
	pub fn is_ajax(&self) -> bool {
		self.ajax
	}

	/// Builds the target URL for the row whose key is `key_value`
	pub fn link(&self, key_name: &str, key_value: &str) -> String {
		let query = serde_urlencoded::to_string([(key_name, key_value)]).unwrap_or_default();
		let separator = if self.destination.contains('?') { '&' } else { '?' };
		format!("{}{separator}{query}", self.destination)
	}

	/// Builds the link element for one row, using `title` as label and tooltip
	pub fn element(&self, title: &str, key_name: &str, key_value: &str) -> ElementNode {
		let mut link = ElementNode::new("a")
			.attr("href", self.link(key_name, key_value))
			.attr("title", title)
			.class(&format!("datagrid-action-{}", self.name));
		match &self.icon {
			Some(icon) => link.add_child(ElementNode::new("span").class(&format!("icon icon-{icon}"))),
			None => link.set_text(title),
		}
		link
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/users/delete", "/users/delete?id=3")]
	#[case("/users?confirm=1", "/users?confirm=1&id=3")]
	fn test_link(#[case] destination: &str, #[case] expected: &str) {
		let action = Action::new("delete", "Delete", destination);
		assert_eq!(action.link("id", "3"), expected);
	}

	#[rstest]
	fn test_link_encodes_key_value() {
		let action = Action::new("view", "View", "/files");
		assert_eq!(action.link("path", "a b&c"), "/files?path=a+b%26c");
	}

	#[rstest]
	fn test_text_element() {
		let action = Action::new("edit", "Edit", "/edit");
		assert_eq!(
			action.element("Upravit", "id", "1").to_string(),
			r#"<a href="/edit?id=1" title="Upravit" class="datagrid-action-edit">Upravit</a>"#
		);
	}

	#[rstest]
	fn test_icon_element() {
		let action = Action::new("delete", "Delete", "/delete").icon("trash");
		let element = action.element("Delete", "id", "9");
		assert_eq!(
			element.to_string(),
			r#"<a href="/delete?id=9" title="Delete" class="datagrid-action-delete"><span class="icon icon-trash"></span></a>"#
		);
	}
}
