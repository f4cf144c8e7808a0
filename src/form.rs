//! Form controls bound to the data grid
//!
//! The grid's form is rebuilt from grid state on every render, so controls
//! carry no render state between calls. Each control exposes its label,
//! its control element and its title.

use crate::element::ElementNode;
use crate::error::{DataGridError, Result};
use indexmap::IndexMap;

/// Name of the page-number input
pub const PAGE: &str = "page";
/// Name of the page-change submit button
pub const PAGE_SUBMIT: &str = "pageSubmit";
/// Name of the bulk-operation selector
pub const OPERATIONS: &str = "operations";
/// Name of the bulk-operation submit button
pub const OPERATION_SUBMIT: &str = "operationSubmit";
/// Name of the filter submit button
pub const FILTER_SUBMIT: &str = "filterSubmit";

/// A single form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
	name: String,
	label: Option<String>,
	title: Option<String>,
	element: ElementNode,
}

impl FormControl {
	fn base(element: ElementNode, name: &str, label: Option<&str>) -> Self {
		Self {
			name: name.to_string(),
			label: label.map(str::to_string),
			title: None,
			element: element.attr("name", name).attr("id", html_id(name)),
		}
	}

	/// Creates a text input
	pub fn text_input(name: &str, label: Option<&str>, value: Option<&str>) -> Self {
		let input = ElementNode::new("input").attr("type", "text");
		let mut control = Self::base(input, name, label);
		if let Some(value) = value {
			control.element.set_attr("value", value);
		}
		control
	}

	/// Creates a drop-down from `(value, label)` choices
	pub fn select(
		name: &str,
		label: Option<&str>,
		choices: &[(String, String)],
		selected: Option<&str>,
	) -> Self {
		let mut control = Self::base(ElementNode::new("select"), name, label);
		for (value, text) in choices {
			let mut option = ElementNode::new("option").attr("value", value.as_str());
			if selected == Some(value.as_str()) {
				option.set_flag("selected");
			}
			option.set_text(text.as_str());
			control.element.add_child(option);
		}
		control
	}

	/// Creates a submit button with `caption` as its value and title
	pub fn submit(name: &str, caption: &str) -> Self {
		let input = ElementNode::new("input").attr("type", "submit");
		let mut control = Self::base(input, name, None);
		control.element.set_attr("value", caption);
		control.title = Some(caption.to_string());
		control
	}

	/// Creates a checkbox
	pub fn checkbox(name: &str) -> Self {
		Self::base(ElementNode::new("input").attr("type", "checkbox"), name, None)
	}

	/// Returns the control name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the `<label>` element, if the control has a label
	pub fn label(&self) -> Option<ElementNode> {
		let text = self.label.as_deref()?;
		let mut label = ElementNode::new("label");
		if let Some(id) = self.element.get_attr("id") {
			label.set_attr("for", id);
		}
		label.set_text(text);
		Some(label)
	}

	/// Returns a fresh copy of the control element
	pub fn control(&self) -> ElementNode {
		self.element.clone()
	}

	/// Returns the title (the caption of buttons, otherwise the label)
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref().or(self.label.as_deref())
	}
}

/// Converts a control name such as `checker[5]` into an element id
fn html_id(name: &str) -> String {
	let mut id = String::from("frm");
	for part in name.split(['[', ']']).filter(|part| !part.is_empty()) {
		id.push('-');
		id.push_str(part);
	}
	id
}

/// Validation error attached to the grid form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
	/// Plain message, escaped on output
	Text(String),
	/// Pre-rendered markup, emitted verbatim
	Html(String),
}

impl From<&str> for FormError {
	fn from(message: &str) -> Self {
		Self::Text(message.to_string())
	}
}

impl From<String> for FormError {
	fn from(message: String) -> Self {
		Self::Text(message)
	}
}

/// The grid's form: its controls and validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridForm {
	action: String,
	controls: IndexMap<String, FormControl>,
	errors: Vec<FormError>,
}

impl GridForm {
	/// Creates an empty form submitting to `action`
	pub fn new(action: impl Into<String>) -> Self {
		Self {
			action: action.into(),
			..Self::default()
		}
	}

	/// Returns the form's target URL
	pub fn action(&self) -> &str {
		&self.action
	}

	/// Adds or replaces a control
	pub fn add_control(&mut self, control: FormControl) {
		self.controls.insert(control.name().to_string(), control);
	}

	/// Returns the control named `name`
	///
	/// # Errors
	///
	/// Returns [`DataGridError::MissingControl`] if the form has no such control.
	pub fn control(&self, name: &str) -> Result<&FormControl> {
		self.controls
			.get(name)
			.ok_or_else(|| DataGridError::MissingControl(name.to_string()))
	}

	/// Iterates over the controls in insertion order
	pub fn controls(&self) -> impl Iterator<Item = &FormControl> {
		self.controls.values()
	}

	/// Returns the row-selection checkbox for the row keyed `key`
	pub fn checker(&self, key: &str) -> FormControl {
		FormControl::checkbox(&format!("checker[{key}]"))
	}

	/// Attaches a validation error
	pub fn add_error(&mut self, error: impl Into<FormError>) {
		self.errors.push(error.into());
	}

	/// Returns the validation errors
	pub fn errors(&self) -> &[FormError] {
		&self.errors
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("page", "frm-page")]
	#[case("checker[5]", "frm-checker-5")]
	#[case("filters[created_at]", "frm-filters-created_at")]
	fn test_html_id(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(html_id(name), expected);
	}

	#[rstest]
	fn test_text_input_with_label() {
		let control = FormControl::text_input("page", Some("Page"), Some("2"));
		assert_eq!(
			control.label().unwrap().to_string(),
			r#"<label for="frm-page">Page</label>"#
		);
		assert_eq!(
			control.control().to_string(),
			r#"<input type="text" name="page" id="frm-page" value="2" />"#
		);
		assert_eq!(control.title(), Some("Page"));
	}

	#[rstest]
	fn test_submit_title_is_caption() {
		let control = FormControl::submit("pageSubmit", "Change page");
		assert!(control.label().is_none());
		assert_eq!(control.title(), Some("Change page"));
		assert_eq!(
			control.control().to_string(),
			r#"<input type="submit" name="pageSubmit" id="frm-pageSubmit" value="Change page" />"#
		);
	}

	#[rstest]
	fn test_checker() {
		let form = GridForm::new("/grid");
		assert_eq!(
			form.checker("7").control().to_string(),
			r#"<input type="checkbox" name="checker[7]" id="frm-checker-7" />"#
		);
	}

	#[rstest]
	fn test_missing_control() {
		let form = GridForm::new("/grid");
		assert!(matches!(
			form.control(OPERATIONS),
			Err(DataGridError::MissingControl(_))
		));
	}

	#[rstest]
	fn test_control_returns_fresh_copies() {
		let mut form = GridForm::new("/grid");
		form.add_control(FormControl::submit(FILTER_SUBMIT, "Filter"));
		let mut first = form.control(FILTER_SUBMIT).unwrap().control();
		first.add_class("button");
		let second = form.control(FILTER_SUBMIT).unwrap().control();
		assert!(second.classes().is_empty());
	}

	#[rstest]
	fn test_errors() {
		let mut form = GridForm::new("/grid");
		form.add_error("Select at least one row.");
		form.add_error(FormError::Html("<b>Failed</b>".into()));
		assert_eq!(form.errors().len(), 2);
		assert_eq!(form.errors()[0], FormError::Text("Select at least one row.".into()));
	}
}
