//! Wrapper registry
//!
//! Maps grid regions to markup specs. Paths are space-joined keys of one to
//! three segments, e.g. `"grid container"` or `"row.header cell container"`.
//! Region names may themselves contain dots (`row.header`), which is why the
//! separator is a space.

use crate::element::{ElementFactory, ElementNode};
use crate::error::{DataGridError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of segments in a wrapper path.
const MAX_DEPTH: usize = 3;

/// A node in the wrapper tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WrapperSpec {
	/// Literal markup spec or plain value (e.g. a class name)
	Markup(String),
	/// Nested mapping of sub-keys
	Nested(IndexMap<String, WrapperSpec>),
}

impl WrapperSpec {
	/// Returns the markup string, or `None` for a mapping
	pub fn as_markup(&self) -> Option<&str> {
		match self {
			Self::Markup(markup) => Some(markup),
			Self::Nested(_) => None,
		}
	}
}

impl From<&str> for WrapperSpec {
	fn from(markup: &str) -> Self {
		Self::Markup(markup.to_string())
	}
}

impl From<String> for WrapperSpec {
	fn from(markup: String) -> Self {
		Self::Markup(markup)
	}
}

/// Parsed wrapper path of one to three keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperPath {
	segments: Vec<String>,
}

impl WrapperPath {
	/// Parses a space-joined path
	///
	/// # Errors
	///
	/// Returns [`DataGridError::InvalidPath`] for an empty path or one with more
	/// than three segments.
	pub fn parse(path: &str) -> Result<Self> {
		let segments: Vec<String> = path.split_whitespace().map(str::to_string).collect();
		if segments.is_empty() || segments.len() > MAX_DEPTH {
			return Err(DataGridError::InvalidPath(format!(
				"'{path}' must have between 1 and {MAX_DEPTH} segments"
			)));
		}
		Ok(Self { segments })
	}

	/// Returns the individual keys
	pub fn segments(&self) -> &[String] {
		&self.segments
	}
}

impl fmt::Display for WrapperPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join(" "))
	}
}

/// Nested region → sub-key → markup-spec configuration
///
/// Constructed with the built-in defaults, then optionally overridden by the
/// application before rendering. Overrides replace whole nodes; they never
/// merge with the previous value.
///
/// ## Example
///
/// ```
/// use reinhardt_datagrid::wrapper::WrapperRegistry;
///
/// let mut wrappers = WrapperRegistry::default();
/// assert_eq!(wrappers.markup("grid container").unwrap(), "table class=grid");
///
/// wrappers.set("grid container", "table class=data").unwrap();
/// assert_eq!(wrappers.markup("grid container").unwrap(), "table class=data");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WrapperRegistry {
	root: IndexMap<String, WrapperSpec>,
}

impl WrapperRegistry {
	/// Creates a registry with no entries at all
	pub fn empty() -> Self {
		Self {
			root: IndexMap::new(),
		}
	}

	/// Resolves a path to its node
	///
	/// # Errors
	///
	/// Returns [`DataGridError::Configuration`] when the path is malformed, any
	/// key along it is absent, or an intermediate node is a plain markup string.
	pub fn resolve(&self, path: &str) -> Result<&WrapperSpec> {
		let parsed = WrapperPath::parse(path).map_err(|err| {
			DataGridError::Configuration(format!("wrapper '{path}' cannot be resolved: {err}"))
		})?;
		let (first, rest) = parsed
			.segments()
			.split_first()
			.ok_or_else(|| unresolved(path, ""))?;

		let mut node = self.root.get(first).ok_or_else(|| unresolved(path, first))?;
		for key in rest {
			node = match node {
				WrapperSpec::Nested(children) => {
					children.get(key).ok_or_else(|| unresolved(path, key))?
				}
				WrapperSpec::Markup(_) => return Err(unresolved(path, key)),
			};
		}
		Ok(node)
	}

	/// Resolves a path that must end in a markup string
	///
	/// # Errors
	///
	/// Returns [`DataGridError::Configuration`] when the path is unresolved or
	/// resolves to a mapping.
	pub fn markup(&self, path: &str) -> Result<&str> {
		self.resolve(path)?.as_markup().ok_or_else(|| {
			DataGridError::Configuration(format!(
				"wrapper '{path}' is a mapping, expected a markup spec"
			))
		})
	}

	/// Resolves a path and instantiates its markup spec as a fresh element
	pub fn instantiate(&self, factory: &ElementFactory, path: &str) -> Result<ElementNode> {
		factory.instantiate(self.markup(path)?)
	}

	/// Replaces the node at `path`
	///
	/// Missing intermediate mappings are created; an intermediate markup string
	/// is replaced by a mapping. The replaced node's former children are
	/// discarded.
	pub fn set(&mut self, path: &str, spec: impl Into<WrapperSpec>) -> Result<()> {
		let parsed = WrapperPath::parse(path)?;
		let segments = parsed.segments();
		let (last, parents) = segments
			.split_last()
			.ok_or_else(|| DataGridError::InvalidPath(path.to_string()))?;

		let mut map = &mut self.root;
		for key in parents {
			let entry = map
				.entry(key.clone())
				.or_insert_with(|| WrapperSpec::Nested(IndexMap::new()));
			if let WrapperSpec::Markup(_) = entry {
				*entry = WrapperSpec::Nested(IndexMap::new());
			}
			map = match entry {
				WrapperSpec::Nested(children) => children,
				WrapperSpec::Markup(_) => unreachable!("intermediate node was just replaced"),
			};
		}
		map.insert(last.clone(), spec.into());
		Ok(())
	}

	/// Lists the path of every markup leaf, in definition order
	pub fn paths(&self) -> Vec<String> {
		fn walk(prefix: &str, map: &IndexMap<String, WrapperSpec>, out: &mut Vec<String>) {
			for (key, spec) in map {
				let path = if prefix.is_empty() {
					key.clone()
				} else {
					format!("{prefix} {key}")
				};
				match spec {
					WrapperSpec::Markup(_) => out.push(path),
					WrapperSpec::Nested(children) => walk(&path, children, out),
				}
			}
		}

		let mut out = Vec::new();
		walk("", &self.root, &mut out);
		out
	}
}

impl Default for WrapperRegistry {
	fn default() -> Self {
		let defaults: &[(&str, &str)] = &[
			("form container", "form class=gridform"),
			("error container", "ul class=error"),
			("error item", "li"),
			("grid container", "table class=grid"),
			("row.header container", "tr class=header"),
			("row.header cell container", "th"),
			("row.filter container", "tr class=filters"),
			("row.filter cell container", "td"),
			("row.filter control .input", "text"),
			("row.filter control .select", "select"),
			("row.filter control .submit", "button"),
			("row.content container", "tr"),
			("row.content .even", "even"),
			("row.content cell container", "td"),
			("row.footer container", "tr class=footer"),
			("row.footer cell container", "td"),
			("paginator container", "span class=paginator"),
			("paginator button container", "span"),
			("operations container", "span class=operations"),
			("info container", "span class=grid-info"),
		];

		let mut registry = Self::empty();
		for (path, markup) in defaults {
			registry
				.set(path, *markup)
				.expect("built-in wrapper paths are well formed");
		}
		registry
	}
}

fn unresolved(path: &str, key: &str) -> DataGridError {
	DataGridError::Configuration(format!("wrapper '{path}' is not defined (missing key '{key}')"))
}
