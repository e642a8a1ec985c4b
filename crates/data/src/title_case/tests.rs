use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("the lesser moon", "The Lesser Moon")]
#[case("company chocobo", "Company Chocobo")]
#[case("  leading  spaces", "  Leading  Spaces")]
#[case("o'kell's tea", "O'kell's Tea")]
#[case("dust-bunny", "Dust-bunny")]
#[case("wind-up\tcait sith", "Wind-up\tCait Sith")]
#[case("éclair", "Éclair")]
#[case("straße", "Straße")]
#[case("ß", "ß")]
#[case("", "")]
fn test_title_case(#[case] input: &str, #[case] expected: &str) {
	assert_eq!(to_title_case(input, 0), expected);
}

#[test]
fn test_always_capitalized_is_untouched() {
	assert_eq!(to_title_case("the lesser moon", ARTICLE_ALWAYS_CAPITALIZED), "the lesser moon");
	assert_eq!(to_title_case("Y'shtola", ARTICLE_ALWAYS_CAPITALIZED), "Y'shtola");
}

proptest! {
	#[test]
	fn prop_title_case_is_idempotent(input in "\\PC{0,40}", article in any::<i8>()) {
		let once = to_title_case(&input, article);
		let twice = to_title_case(&once, article);
		prop_assert_eq!(once, twice);
	}

	#[test]
	fn prop_title_case_preserves_char_count(input in "\\PC{0,40}") {
		prop_assert_eq!(to_title_case(&input, 0).chars().count(), input.chars().count());
	}
}
