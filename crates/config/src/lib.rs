//! Configuration for the actor identity resolver.
//!
//! Configuration is written in KDL (v2) format. Every key is optional:
//!
//! ```kdl
//! // Client language the name tables are built for.
//! language "en"
//!
//! // Territory that counts as a mahjong table even without the intro addon.
//! mahjong-territory 831
//!
//! // Raw-memory offsets, see `ObjectLayout`.
//! layout "7.0" {
//!     entry-stride 8
//!     object-count 599
//!     name-offset 0x30
//! }
//! ```
//!
//! Unknown or repeated keys do not fail the parse; they are collected in
//! [`Config::warnings`] for the host to display.

pub mod error;
pub mod kdl_util;
pub mod layout;

use std::path::Path;

use actorid_primitives::{ClientLanguage, ObjectLayout};

pub use error::{ConfigError, ConfigWarning, Result};

/// Territory id of the mahjong parlor.
pub const DEFAULT_MAHJONG_TERRITORY: u16 = 831;

/// Parsed configuration from a KDL file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Language of the reference sheets.
	pub language: ClientLanguage,
	/// Territory in which the screen actors belong to a mahjong table.
	pub mahjong_territory: u16,
	/// Offsets used by the raw-memory adapter.
	pub layout: ObjectLayout,
	/// Non-fatal warnings encountered during parsing.
	pub warnings: Vec<ConfigWarning>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			language: ClientLanguage::default(),
			mahjong_territory: DEFAULT_MAHJONG_TERRITORY,
			layout: ObjectLayout::default(),
			warnings: Vec::new(),
		}
	}
}

impl Config {
	/// Parse a KDL string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let doc: kdl::KdlDocument = input.parse()?;
		let mut config = Config::default();
		let mut seen = Vec::new();

		for node in doc.nodes() {
			let key = node.name().value();
			kdl_util::note_key(&mut seen, key, &mut config.warnings);
			match key {
				"language" => {
					let code = kdl_util::string_arg(node)?;
					config.language = code
						.parse()
						.map_err(|_| ConfigError::InvalidLanguage(code.to_string()))?;
				}
				"mahjong-territory" => config.mahjong_territory = kdl_util::int_arg(node)?,
				"layout" => config.layout = layout::parse_layout_node(node, &mut config.warnings)?,
				_ => config.warnings.push(ConfigWarning::UnknownKey {
					key: key.to_string(),
					found_in: "top level",
				}),
			}
		}

		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::parse(&content)?;
		tracing::debug!(
			path = %path.display(),
			language = %config.language,
			layout = %config.layout.version,
			warnings = config.warnings.len(),
			"config loaded"
		);
		Ok(config)
	}
}

/// Shorthand for [`Config::parse`].
pub fn parse_config_str(input: &str) -> Result<Config> {
	Config::parse(input)
}

/// Shorthand for [`Config::load`].
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
	Config::load(path)
}
