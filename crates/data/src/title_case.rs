/// Article flag of sheet rows whose names are proper nouns already written the
/// way they should be displayed.
pub const ARTICLE_ALWAYS_CAPITALIZED: i8 = 1;

/// Title-cases a sheet name.
///
/// Rows flagged [`ARTICLE_ALWAYS_CAPITALIZED`] are returned unchanged. Otherwise
/// the first character of every whitespace-delimited word is upper-cased and all
/// other characters are kept as-is. Upper-casing is locale-invariant and only
/// applied when it maps to a single character, so the result has the same
/// number of characters as the input.
pub fn to_title_case(name: &str, article: i8) -> String {
	if article == ARTICLE_ALWAYS_CAPITALIZED {
		return name.to_string();
	}

	let mut out = String::with_capacity(name.len());
	let mut word_start = true;
	for c in name.chars() {
		if c.is_whitespace() {
			word_start = true;
			out.push(c);
		} else if word_start {
			word_start = false;
			out.push(single_uppercase(c));
		} else {
			out.push(c);
		}
	}
	out
}

fn single_uppercase(c: char) -> char {
	let mut upper = c.to_uppercase();
	match (upper.next(), upper.next()) {
		(Some(u), None) => u,
		_ => c,
	}
}

#[cfg(test)]
mod tests;
