//! HTML entity decoding for free-text product fields.

/// Decodes the HTML entities Walmart embeds in names and descriptions.
///
/// Covers the full HTML5 named set, numeric references, and the legacy names that may omit the
/// trailing semicolon. Unknown entities are kept verbatim.
pub fn unescape_html(raw: &str) -> String {
	htmlize::unescape(raw).into_owned()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn named_and_numeric_entities_decode() {
		assert_eq!(unescape_html("Tom &amp; Jerry&#39;s &lt;b&gt;"), "Tom & Jerry's <b>");
		assert_eq!(unescape_html("5&#x27;&quot; TV&reg;"), "5'\" TV®");
		assert_eq!(unescape_html("Pok&eacute;mon"), "Pokémon");
		assert_eq!(unescape_html("I &hearts; it"), "I ♥ it");
	}

	#[test]
	fn legacy_entities_decode_without_semicolon() {
		assert_eq!(unescape_html("AT&amp T"), "AT& T");
		assert_eq!(unescape_html("&lt;p&gt;Slim"), "<p>Slim");
	}

	#[test]
	fn unknown_entities_are_kept() {
		assert_eq!(unescape_html("R&D; AT&T"), "R&D; AT&T");
		assert_eq!(unescape_html("trailing &"), "trailing &");
		assert_eq!(unescape_html("&bogus;"), "&bogus;");
	}
}
