//! Element nodes and the markup-spec factory
//!
//! An [`ElementNode`] is a small, mutable HTML tree: a tag name, an ordered
//! attribute set (with a multi-valued `class`), and text/markup/element
//! children. Nodes are created from markup specs such as
//! `"table class=grid"` by [`ElementFactory`] and serialized with
//! [`ElementNode::render`].

use crate::error::{DataGridError, Result};
use crate::html::{escape, escape_attr};
use indexmap::IndexMap;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("tag pattern is valid"));

static ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"^\s*([A-Za-z_:][-A-Za-z0-9_:.]*)(?:=("[^"]*"|'[^']*'|[^\s"']+))?"#)
		.expect("attribute pattern is valid")
});

/// Elements serialized without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr",
];

/// Elements placed on their own line by indented rendering.
const BLOCK_ELEMENTS: &[&str] = &[
	"caption", "div", "fieldset", "form", "li", "ol", "p", "table", "tbody", "td", "tfoot", "th",
	"thead", "tr", "ul",
];

/// Value held by a single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
	/// `name="value"`
	Value(String),
	/// Bare boolean attribute, e.g. `checked`
	Flag,
	/// Accumulated class names
	Classes(Vec<String>),
}

/// A child of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// Text content, escaped on output
	Text(String),
	/// Pre-rendered markup, emitted verbatim
	Html(String),
	/// Nested element
	Element(ElementNode),
}

/// Mutable HTML element tree node
///
/// A node without a tag name is a fragment: it serializes only its children.
///
/// ## Example
///
/// ```
/// use reinhardt_datagrid::element::ElementNode;
///
/// let mut cell = ElementNode::new("td").class("checker");
/// cell.add_class("actions");
/// cell.set_text("a < b");
/// assert_eq!(cell.to_string(), r#"<td class="checker actions">a &lt; b</td>"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
	name: Option<String>,
	attrs: IndexMap<String, AttrValue>,
	children: Vec<Node>,
}

impl ElementNode {
	/// Creates an empty element with the given tag name
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Creates a fragment, which has no tag of its own
	pub fn fragment() -> Self {
		Self::default()
	}

	/// Parses a markup spec of the form `tagname[ key=value]*`
	///
	/// Values may be bare or quoted with `"` or `'`; a key without a value is a
	/// boolean attribute. `class` values accumulate.
	///
	/// # Errors
	///
	/// Returns [`DataGridError::InvalidSpec`] when the spec is empty, the tag
	/// name is not a valid element name, or the attribute list is malformed.
	pub fn from_spec(spec: &str) -> Result<Self> {
		let spec = spec.trim();
		if spec.is_empty() {
			return Err(DataGridError::InvalidSpec("empty markup spec".to_string()));
		}

		let (tag, mut rest) = spec
			.split_once(char::is_whitespace)
			.unwrap_or((spec, ""));
		if !TAG_REGEX.is_match(tag) {
			return Err(DataGridError::InvalidSpec(format!(
				"'{tag}' is not a valid tag name in '{spec}'"
			)));
		}

		let mut node = Self::new(tag);
		while !rest.trim_start().is_empty() {
			let caps = ATTR_REGEX.captures(rest).ok_or_else(|| {
				DataGridError::InvalidSpec(format!("malformed attributes near '{rest}' in '{spec}'"))
			})?;
			let name = &caps[1];
			match caps.get(2) {
				Some(value) => node.set_attr(name, unquote(value.as_str())),
				None => node.set_flag(name),
			}
			rest = &rest[caps[0].len()..];
		}
		Ok(node)
	}

	/// Returns the tag name, or `None` for a fragment
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns whether indented rendering puts this element on its own line
	pub fn is_block(&self) -> bool {
		self.name
			.as_deref()
			.is_some_and(|name| BLOCK_ELEMENTS.contains(&name.to_ascii_lowercase().as_str()))
	}

	/// Returns whether this element never has children (e.g. `<input>`)
	pub fn is_void(&self) -> bool {
		self.name
			.as_deref()
			.is_some_and(|name| VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str()))
	}

	/// Sets an attribute, replacing any previous value
	///
	/// Setting `class` adds the whitespace-separated names to the class list
	/// instead of replacing it.
	pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
		let value = value.into();
		if name == "class" {
			for class in value.split_whitespace() {
				self.add_class(class);
			}
			return;
		}
		self.attrs.insert(name.to_string(), AttrValue::Value(value));
	}

	/// Builder form of [`set_attr`](Self::set_attr)
	pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
		self.set_attr(name, value);
		self
	}

	/// Sets a boolean attribute such as `checked` or `disabled`
	pub fn set_flag(&mut self, name: &str) {
		self.attrs.insert(name.to_string(), AttrValue::Flag);
	}

	/// Returns the value of a single-valued attribute
	///
	/// For `class` use [`classes`](Self::classes).
	pub fn get_attr(&self, name: &str) -> Option<&str> {
		match self.attrs.get(name)? {
			AttrValue::Value(value) => Some(value),
			AttrValue::Flag => Some(""),
			AttrValue::Classes(_) => None,
		}
	}

	/// Adds a class name; empty names and duplicates are ignored
	pub fn add_class(&mut self, class: &str) {
		let class = class.trim();
		if class.is_empty() {
			return;
		}
		let entry = self
			.attrs
			.entry("class".to_string())
			.or_insert_with(|| AttrValue::Classes(Vec::new()));
		if let AttrValue::Classes(classes) = entry
			&& !classes.iter().any(|existing| existing == class)
		{
			classes.push(class.to_string());
		}
	}

	/// Builder form of [`add_class`](Self::add_class)
	pub fn class(mut self, class: &str) -> Self {
		for name in class.split_whitespace() {
			self.add_class(name);
		}
		self
	}

	/// Returns the class list in insertion order
	pub fn classes(&self) -> &[String] {
		match self.attrs.get("class") {
			Some(AttrValue::Classes(classes)) => classes,
			_ => &[],
		}
	}

	/// Returns whether the class list contains `class`
	pub fn has_class(&self, class: &str) -> bool {
		self.classes().iter().any(|existing| existing == class)
	}

	/// Applies a set of attributes on top of the current ones
	pub fn merge_attrs<'a, I>(&mut self, attrs: I)
	where
		I: IntoIterator<Item = (&'a String, &'a String)>,
	{
		for (name, value) in attrs {
			self.set_attr(name, value.clone());
		}
	}

	/// Replaces all children with escaped text
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.children = vec![Node::Text(text.into())];
	}

	/// Builder form of [`set_text`](Self::set_text)
	pub fn text(mut self, text: impl Into<String>) -> Self {
		self.set_text(text);
		self
	}

	/// Replaces all children with raw markup
	pub fn set_html(&mut self, html: impl Into<String>) {
		self.children = vec![Node::Html(html.into())];
	}

	/// Builder form of [`set_html`](Self::set_html)
	pub fn html(mut self, html: impl Into<String>) -> Self {
		self.set_html(html);
		self
	}

	/// Appends a child element
	pub fn add_child(&mut self, child: ElementNode) {
		self.children.push(Node::Element(child));
	}

	/// Builder form of [`add_child`](Self::add_child)
	pub fn child(mut self, child: ElementNode) -> Self {
		self.add_child(child);
		self
	}

	/// Returns the children
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Iterates over the element children, skipping text and markup
	pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
		self.children.iter().filter_map(|child| match child {
			Node::Element(element) => Some(element),
			_ => None,
		})
	}

	/// Renders the opening tag, including attributes
	pub fn start_tag(&self) -> String {
		let Some(name) = &self.name else {
			return String::new();
		};
		let mut tag = format!("<{name}");
		for (attr, value) in &self.attrs {
			match value {
				AttrValue::Value(value) => {
					tag.push_str(&format!(r#" {attr}="{}""#, escape_attr(value)));
				}
				AttrValue::Flag => {
					tag.push(' ');
					tag.push_str(attr);
				}
				AttrValue::Classes(classes) if !classes.is_empty() => {
					tag.push_str(&format!(r#" {attr}="{}""#, escape_attr(&classes.join(" "))));
				}
				AttrValue::Classes(_) => {}
			}
		}
		tag.push_str(if self.is_void() { " />" } else { ">" });
		tag
	}

	/// Renders the closing tag (empty for void elements and fragments)
	pub fn end_tag(&self) -> String {
		match &self.name {
			Some(name) if !self.is_void() => format!("</{name}>"),
			_ => String::new(),
		}
	}

	/// Serializes the node
	///
	/// With `Some(depth)`, every block child (`tr`, `td`, `li`, ...) starts on
	/// its own line, indented by `depth + 1` tabs, and the closing tag of a
	/// node that has such children is placed on its own line at `depth`.
	/// Inline children such as `input` or `a` stay in place. With `None` the
	/// output is a single line.
	pub fn render(&self, indent: Option<usize>) -> String {
		let mut out = String::new();
		self.write_to(&mut out, indent);
		out
	}

	fn write_to(&self, out: &mut String, indent: Option<usize>) {
		out.push_str(&self.start_tag());
		if self.is_void() {
			return;
		}

		let mut has_block = false;
		for child in &self.children {
			match child {
				Node::Text(text) => out.push_str(&escape(text)),
				Node::Html(html) => out.push_str(html),
				Node::Element(element) => match indent {
					Some(depth) if element.is_block() => {
						out.push('\n');
						out.push_str(&"\t".repeat(depth + 1));
						element.write_to(out, Some(depth + 1));
						has_block = true;
					}
					_ => element.write_to(out, None),
				},
			}
		}
		if has_block && let Some(depth) = indent {
			out.push('\n');
			out.push_str(&"\t".repeat(depth));
		}

		out.push_str(&self.end_tag());
	}
}

impl fmt::Display for ElementNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render(None))
	}
}

fn unquote(value: &str) -> &str {
	let bytes = value.as_bytes();
	if bytes.len() >= 2
		&& (bytes[0] == b'"' || bytes[0] == b'\'')
		&& bytes[bytes.len() - 1] == bytes[0]
	{
		&value[1..value.len() - 1]
	} else {
		value
	}
}

/// Instantiates element nodes from markup specs
///
/// Each distinct spec is parsed once; later requests receive clones of the
/// parsed prototype, so callers always own a fresh node.
#[derive(Debug, Default)]
pub struct ElementFactory {
	prototypes: RefCell<HashMap<String, ElementNode>>,
}

impl ElementFactory {
	/// Creates a factory with an empty prototype cache
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a fresh node for `spec`
	///
	/// # Errors
	///
	/// Returns [`DataGridError::InvalidSpec`] for empty or malformed specs.
	pub fn instantiate(&self, spec: &str) -> Result<ElementNode> {
		if let Some(prototype) = self.prototypes.borrow().get(spec) {
			return Ok(prototype.clone());
		}
		let node = ElementNode::from_spec(spec)?;
		self.prototypes
			.borrow_mut()
			.insert(spec.to_string(), node.clone());
		Ok(node)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("td", "<td></td>")]
	#[case("table class=grid", r#"<table class="grid"></table>"#)]
	#[case("span class=paginator", r#"<span class="paginator"></span>"#)]
	#[case(
		r#"a href="/x?y=1" title='Go there'"#,
		r#"<a href="/x?y=1" title="Go there"></a>"#
	)]
	#[case("input type=checkbox checked", r#"<input type="checkbox" checked />"#)]
	fn test_from_spec(#[case] spec: &str, #[case] expected: &str) {
		let node = ElementNode::from_spec(spec).unwrap();
		assert_eq!(node.render(None), expected);
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("class=gridform")]
	#[case("td =oops")]
	fn test_from_spec_rejects_malformed(#[case] spec: &str) {
		let result = ElementNode::from_spec(spec);
		assert!(matches!(result, Err(DataGridError::InvalidSpec(_))));
	}

	#[rstest]
	fn test_class_accumulates_other_attrs_overwrite() {
		let mut node = ElementNode::from_spec("td class=checker title=a").unwrap();
		node.set_attr("class", "actions");
		node.set_attr("title", "b");
		assert_eq!(node.classes(), ["checker", "actions"]);
		assert_eq!(node.get_attr("title"), Some("b"));
		assert_eq!(node.render(None), r#"<td class="checker actions" title="b"></td>"#);
	}

	#[rstest]
	fn test_empty_class_is_not_rendered() {
		let mut node = ElementNode::new("tr");
		node.add_class("");
		assert_eq!(node.render(None), "<tr></tr>");
	}

	#[rstest]
	fn test_text_is_escaped_html_is_not() {
		let text = ElementNode::new("li").text("<b>bold</b>");
		let html = ElementNode::new("li").html("<b>bold</b>");
		assert_eq!(text.to_string(), "<li>&lt;b&gt;bold&lt;/b&gt;</li>");
		assert_eq!(html.to_string(), "<li><b>bold</b></li>");
	}

	#[rstest]
	fn test_fragment_renders_only_children() {
		let node = ElementNode::fragment()
			.html("Page ")
			.child(ElementNode::new("b").text("2"));
		assert_eq!(node.render(None), "Page <b>2</b>");
	}

	#[rstest]
	fn test_indented_render() {
		let row = ElementNode::new("tr").child(ElementNode::new("td").text("1"));
		let table = ElementNode::new("table").class("grid").child(row);
		assert_eq!(
			table.render(Some(0)),
			"<table class=\"grid\">\n\t<tr>\n\t\t<td>1</td>\n\t</tr>\n</table>"
		);
	}

	#[rstest]
	fn test_indented_render_keeps_inline_children_in_place() {
		let checkbox = ElementNode::new("input").attr("type", "checkbox");
		let cell = ElementNode::new("td").class("checker").child(checkbox);
		let link = ElementNode::new("a").attr("href", "/next").text("Next");
		let row = ElementNode::new("tr")
			.child(cell)
			.child(ElementNode::new("td").child(link));
		assert_eq!(
			row.render(Some(0)),
			concat!(
				"<tr>\n",
				"\t<td class=\"checker\"><input type=\"checkbox\" /></td>\n",
				"\t<td><a href=\"/next\">Next</a></td>\n",
				"</tr>"
			)
		);
	}

	#[rstest]
	#[case("td", true)]
	#[case("LI", true)]
	#[case("input", false)]
	#[case("span", false)]
	fn test_is_block(#[case] name: &str, #[case] expected: bool) {
		assert_eq!(ElementNode::new(name).is_block(), expected);
		assert!(!ElementNode::fragment().is_block());
	}

	#[rstest]
	fn test_start_and_end_tag() {
		let form = ElementNode::from_spec("form class=gridform")
			.unwrap()
			.attr("method", "post");
		assert_eq!(form.start_tag(), r#"<form class="gridform" method="post">"#);
		assert_eq!(form.end_tag(), "</form>");
	}

	#[rstest]
	fn test_factory_returns_independent_clones() {
		let factory = ElementFactory::new();
		let mut first = factory.instantiate("td").unwrap();
		first.add_class("checker");
		let second = factory.instantiate("td").unwrap();
		assert!(second.classes().is_empty());
	}

	#[rstest]
	fn test_factory_propagates_parse_errors() {
		let factory = ElementFactory::new();
		assert!(factory.instantiate("").is_err());
	}
}
