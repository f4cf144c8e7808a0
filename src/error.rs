//! Error types for data grid rendering.
//!
//! Every variant is fatal for the render call that produced it. Nothing in
//! this crate catches and retries; errors propagate to the caller, which is
//! responsible for turning them into an error page.

use thiserror::Error;

/// Errors that can occur while configuring or rendering a data grid.
#[derive(Debug, Error)]
pub enum DataGridError {
	/// A wrapper path did not resolve to a markup spec.
	///
	/// This points at a missing default template and is a programming error.
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// Rendering was attempted without an attached, executed data source.
	#[error("Precondition failed: {0}")]
	Precondition(String),

	/// The declared primary-key field is absent from a row record.
	#[error(
		"Invalid name of key for group operations or actions: column '{key}' does not exist in data source"
	)]
	MissingKey {
		/// Name of the primary-key field that was looked up.
		key: String,
	},

	/// A markup spec was empty or could not be parsed.
	#[error("Invalid markup spec: {0}")]
	InvalidSpec(String),

	/// A wrapper path had no segments or more than three.
	#[error("Invalid wrapper path: {0}")]
	InvalidPath(String),

	/// Two columns were registered under the same name.
	#[error("Duplicate column: {0}")]
	DuplicateColumn(String),

	/// A named form control was requested but the form does not provide it.
	#[error("Form control not found: {0}")]
	MissingControl(String),

	/// A render mode name did not match any region.
	#[error("Unknown render mode: {0}")]
	UnknownMode(String),

	/// The configuration overlay could not be parsed.
	#[error("Config load error: {0}")]
	ConfigLoad(#[from] toml::de::Error),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for data grid operations.
pub type Result<T> = std::result::Result<T, DataGridError>;
