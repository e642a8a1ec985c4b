//! Host reference sheets the name tables are built from.
//!
//! Only the columns the tables need are modelled. Hosts implement
//! [`ReferenceSheets`] over their own data files; [`SheetDump`] is a
//! serde-backed implementation over exported JSON dumps.

use core::fmt;

use actorid_primitives::ClientLanguage;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldRow {
	pub row_id: u32,
	pub name: String,
	#[serde(default)]
	pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MountRow {
	pub row_id: u32,
	pub singular: String,
	#[serde(default)]
	pub article: i8,
	/// Negative for mounts that are not obtainable.
	#[serde(default)]
	pub order: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanionRow {
	pub row_id: u32,
	pub singular: String,
	#[serde(default)]
	pub article: i8,
	/// `u16::MAX` marks unused companions.
	#[serde(default)]
	pub order: u16,
}

/// Row of the ornament, battle NPC name and event NPC resident sheets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NameRow {
	pub row_id: u32,
	pub singular: String,
	#[serde(default)]
	pub article: i8,
}

/// Reference sheets read by the table builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sheet {
	World,
	Mount,
	Companion,
	Ornament,
	BNpcName,
	ENpcResident,
}

impl Sheet {
	pub const fn name(self) -> &'static str {
		match self {
			Self::World => "World",
			Self::Mount => "Mount",
			Self::Companion => "Companion",
			Self::Ornament => "Ornament",
			Self::BNpcName => "BNpcName",
			Self::ENpcResident => "ENpcResident",
		}
	}
}

impl fmt::Display for Sheet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Reasons a reference sheet could not be turned into a table.
#[derive(Debug, Error)]
pub enum SheetError {
	#[error("sheet {sheet} is not available for language {language}")]
	Missing { sheet: Sheet, language: ClientLanguage },

	#[error("sheet {sheet} is incompatible: {reason}")]
	Incompatible { sheet: Sheet, reason: String },

	#[error("failed to parse sheet dump: {0}")]
	Json(#[from] serde_json::Error),
}

/// Source of localized reference rows.
pub trait ReferenceSheets {
	fn worlds(&self, language: ClientLanguage) -> Result<Vec<WorldRow>, SheetError>;
	fn mounts(&self, language: ClientLanguage) -> Result<Vec<MountRow>, SheetError>;
	fn companions(&self, language: ClientLanguage) -> Result<Vec<CompanionRow>, SheetError>;
	fn ornaments(&self, language: ClientLanguage) -> Result<Vec<NameRow>, SheetError>;
	fn bnpc_names(&self, language: ClientLanguage) -> Result<Vec<NameRow>, SheetError>;
	fn enpc_residents(&self, language: ClientLanguage) -> Result<Vec<NameRow>, SheetError>;
}

/// Sheets of a single language; absent sheets are reported as missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SheetSet {
	pub worlds: Option<Vec<WorldRow>>,
	pub mounts: Option<Vec<MountRow>>,
	pub companions: Option<Vec<CompanionRow>>,
	pub ornaments: Option<Vec<NameRow>>,
	pub bnpc_names: Option<Vec<NameRow>>,
	pub enpc_residents: Option<Vec<NameRow>>,
}

/// In-memory sheets keyed by language code.
///
/// ```json
/// { "en": { "worlds": [{ "row_id": 21, "name": "Ravana", "is_public": true }] } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SheetDump {
	languages: FxHashMap<String, SheetSet>,
}

impl SheetDump {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_json_str(json: &str) -> Result<Self, SheetError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn with_language(mut self, language: ClientLanguage, set: SheetSet) -> Self {
		self.languages.insert(language.code().to_string(), set);
		self
	}

	fn rows<T: Clone>(
		&self,
		language: ClientLanguage,
		sheet: Sheet,
		select: impl FnOnce(&SheetSet) -> Option<&Vec<T>>,
	) -> Result<Vec<T>, SheetError> {
		self.languages
			.get(language.code())
			.and_then(select)
			.cloned()
			.ok_or(SheetError::Missing { sheet, language })
	}
}

impl ReferenceSheets for SheetDump {
	fn worlds(&self, language: ClientLanguage) -> Result<Vec<WorldRow>, SheetError> {
		self.rows(language, Sheet::World, |set| set.worlds.as_ref())
	}

	fn mounts(&self, language: ClientLanguage) -> Result<Vec<MountRow>, SheetError> {
		self.rows(language, Sheet::Mount, |set| set.mounts.as_ref())
	}

	fn companions(&self, language: ClientLanguage) -> Result<Vec<CompanionRow>, SheetError> {
		self.rows(language, Sheet::Companion, |set| set.companions.as_ref())
	}

	fn ornaments(&self, language: ClientLanguage) -> Result<Vec<NameRow>, SheetError> {
		self.rows(language, Sheet::Ornament, |set| set.ornaments.as_ref())
	}

	fn bnpc_names(&self, language: ClientLanguage) -> Result<Vec<NameRow>, SheetError> {
		self.rows(language, Sheet::BNpcName, |set| set.bnpc_names.as_ref())
	}

	fn enpc_residents(&self, language: ClientLanguage) -> Result<Vec<NameRow>, SheetError> {
		self.rows(language, Sheet::ENpcResident, |set| set.enpc_residents.as_ref())
	}
}
