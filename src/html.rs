//! HTML escaping helpers

/// Escape HTML special characters in text content
///
/// # Examples
///
/// ```
/// use reinhardt_datagrid::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape an attribute value
///
/// Line breaks and tabs are encoded as character references so that the
/// value survives attribute-value normalization.
///
/// # Examples
///
/// ```
/// use reinhardt_datagrid::html::escape_attr;
///
/// assert_eq!(escape_attr("value with \"quotes\""), "value with &quot;quotes&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Replace `%name%` placeholders in `format` with the given values.
///
/// Values are inserted verbatim. Placeholders without a matching entry are
/// left untouched.
///
/// # Examples
///
/// ```
/// use reinhardt_datagrid::html::substitute;
///
/// let text = substitute("%from% - %to%", &[("from", "1"), ("to", "10")]);
/// assert_eq!(text, "1 - 10");
/// ```
pub fn substitute(format: &str, values: &[(&str, &str)]) -> String {
	values
		.iter()
		.fold(format.to_string(), |acc, (name, value)| {
			acc.replace(&format!("%{name}%"), value)
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case("<b>", "&lt;b&gt;")]
	#[case("a & b", "a &amp; b")]
	#[case("it's", "it&#x27;s")]
	#[case("plain", "plain")]
	fn test_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape(input), expected);
	}

	#[rstest]
	fn test_escape_attr_encodes_whitespace_controls() {
		assert_eq!(escape_attr("a\tb\r\n"), "a&#9;b&#13;&#10;");
	}

	#[rstest]
	fn test_substitute_leaves_unknown_placeholders() {
		assert_eq!(substitute("%a% %b%", &[("a", "x")]), "x %b%");
	}

	#[rstest]
	fn test_substitute_repeated_placeholder() {
		assert_eq!(substitute("%a%-%a%", &[("a", "1")]), "1-1");
	}

	proptest! {
		#[test]
		fn escaped_text_has_no_markup_characters(input in ".*") {
			let escaped = escape(&input);
			prop_assert!(!escaped.contains('<'));
			prop_assert!(!escaped.contains('>'));
			prop_assert!(!escaped.contains('"'));
		}
	}
}
