//! Renderer configuration
//!
//! [`RendererConfig`] bundles the wrapper registry with the footer and info
//! format strings. Configurations are plain values owned by a renderer; an
//! application that wants shared defaults clones one before any render.

use crate::error::Result;
use crate::wrapper::WrapperRegistry;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Default footer layout
pub const DEFAULT_FOOTER_FORMAT: &str = "%operations% | %paginator% | %info%";
/// Default info line
pub const DEFAULT_INFO_FORMAT: &str = "Displaying items %from% - %to% of %count%";
/// Default class marking links for asynchronous handling
pub const DEFAULT_AJAX_CLASS: &str = "datagrid-ajax";

/// Configuration consumed by [`DataGridRenderer`](crate::DataGridRenderer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
	/// Region → markup-spec tree
	pub wrappers: WrapperRegistry,
	/// Footer template with `%operations%`, `%paginator%` and `%info%`
	pub footer_format: String,
	/// Info template with `%from%`, `%to%` and `%count%`
	pub info_format: String,
	/// Class added to paginator and ordering links
	pub ajax_class: String,
}

impl Default for RendererConfig {
	fn default() -> Self {
		Self {
			wrappers: WrapperRegistry::default(),
			footer_format: DEFAULT_FOOTER_FORMAT.to_string(),
			info_format: DEFAULT_INFO_FORMAT.to_string(),
			ajax_class: DEFAULT_AJAX_CLASS.to_string(),
		}
	}
}

/// Overlay read from TOML; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigOverlay {
	footer_format: Option<String>,
	info_format: Option<String>,
	ajax_class: Option<String>,
	#[serde(default)]
	wrappers: IndexMap<String, String>,
}

impl RendererConfig {
	/// Applies a TOML overlay on top of the defaults
	///
	/// Keys of the `[wrappers]` table are space-joined wrapper paths; each
	/// value replaces the node at that path.
	///
	/// # Example
	///
	/// ```
	/// use reinhardt_datagrid::config::RendererConfig;
	///
	/// let config = RendererConfig::from_toml_str(r#"
	///     footer_format = "%paginator% | %info%"
	///
	///     [wrappers]
	///     "grid container" = "table class=data-grid"
	/// "#).unwrap();
	///
	/// assert_eq!(config.footer_format, "%paginator% | %info%");
	/// assert_eq!(config.wrappers.markup("grid container").unwrap(), "table class=data-grid");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let overlay: ConfigOverlay = toml::from_str(source)?;
		let mut config = Self::default();
		config.apply(overlay)?;
		Ok(config)
	}

	/// Reads a TOML overlay from `path`
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		tracing::debug!(path = %path.display(), "loading data grid renderer configuration");
		let source = std::fs::read_to_string(path)?;
		Self::from_toml_str(&source)
	}

	fn apply(&mut self, overlay: ConfigOverlay) -> Result<()> {
		if let Some(format) = overlay.footer_format {
			self.footer_format = format;
		}
		if let Some(format) = overlay.info_format {
			self.info_format = format;
		}
		if let Some(class) = overlay.ajax_class {
			self.ajax_class = class;
		}
		for (path, markup) in overlay.wrappers {
			self.wrappers.set(&path, markup)?;
		}
		Ok(())
	}
}
