//! Translation of user-visible strings

use std::collections::HashMap;

/// Translates user-visible strings (labels, titles, format strings)
///
/// Implemented for closures and for [`MessageCatalog`]. A grid without a
/// translator renders the source strings unchanged.
pub trait Translator {
	/// Returns the translation of `message`
	fn translate(&self, message: &str) -> String;
}

impl<F> Translator for F
where
	F: Fn(&str) -> String,
{
	fn translate(&self, message: &str) -> String {
		self(message)
	}
}

/// A message catalog containing translations for a single locale
///
/// Messages without a translation fall back to the source string.
///
/// # Example
/// ```
/// use reinhardt_datagrid::translation::{MessageCatalog, Translator};
///
/// let mut catalog = MessageCatalog::new("fr");
/// catalog.add_translation("Next", "Suivant");
///
/// assert_eq!(catalog.translate("Next"), "Suivant");
/// assert_eq!(catalog.translate("Last"), "Last");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
	locale: String,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create a new message catalog for the given locale
	pub fn new(locale: &str) -> Self {
		Self {
			locale: locale.to_string(),
			messages: HashMap::new(),
		}
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> &str {
		&self.locale
	}

	/// Add a simple translation
	pub fn add_translation(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&String> {
		self.messages.get(message)
	}
}

impl Translator for MessageCatalog {
	fn translate(&self, message: &str) -> String {
		self.get(message)
			.cloned()
			.unwrap_or_else(|| message.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_closure_translator() {
		let upper = |message: &str| message.to_uppercase();
		assert_eq!(upper.translate("first"), "FIRST");
	}

	#[rstest]
	fn test_catalog_falls_back_to_source() {
		let catalog = MessageCatalog::new("cs");
		assert_eq!(catalog.locale(), "cs");
		assert_eq!(catalog.translate("Previous"), "Previous");
	}
}
