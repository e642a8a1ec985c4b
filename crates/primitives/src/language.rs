use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Client language of the host; reference sheets are localized per language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClientLanguage {
	Japanese,
	#[default]
	English,
	German,
	French,
}

impl ClientLanguage {
	pub const ALL: [ClientLanguage; 4] = [Self::Japanese, Self::English, Self::German, Self::French];

	/// Two-letter code used in configuration and sheet dumps.
	pub const fn code(self) -> &'static str {
		match self {
			Self::Japanese => "ja",
			Self::English => "en",
			Self::German => "de",
			Self::French => "fr",
		}
	}
}

impl fmt::Display for ClientLanguage {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// A language code that is not one of [`ClientLanguage::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown client language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for ClientLanguage {
	type Err = UnknownLanguage;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownLanguage(s.to_string()))
	}
}
