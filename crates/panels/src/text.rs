//! Name transforms used for labels and DOM ids.

use heck::{ToKebabCase, ToTitleCase};

/// `"example_panel"` → `"Example Panel"`.
pub fn titleize(name: &str) -> String {
	name.to_title_case()
}

/// Lowercase, hyphen-separated slug with no underscores or whitespace.
///
/// Runs of non-alphanumeric characters collapse into a single hyphen and
/// leading or trailing separators are dropped. Case changes are not word
/// boundaries: `"myPanel"` becomes `"mypanel"`.
pub fn slugify(name: &str) -> String {
	name.to_lowercase().to_kebab_case()
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("source", "Source")]
	#[case("example_panel", "Example Panel")]
	#[case("with spaces", "With Spaces")]
	fn titleize_names(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(titleize(name), expected);
	}

	#[rstest]
	#[case("with spaces", "with-spaces")]
	#[case("symbol_with_underscores", "symbol-with-underscores")]
	#[case("UPPERCASE-mix", "uppercase-mix")]
	#[case("a  --  b", "a-b")]
	#[case("12324245", "12324245")]
	#[case("myPanel", "mypanel")]
	#[case("ABCTest", "abctest")]
	fn slugify_names(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(slugify(name), expected);
	}
}
