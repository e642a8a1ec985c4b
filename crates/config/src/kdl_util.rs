//! KDL value helpers shared by the config sections.

use kdl::KdlNode;

use crate::error::{ConfigError, ConfigWarning, Result};

/// First argument of `node` as a string.
pub fn string_arg(node: &KdlNode) -> Result<&str> {
	node.get(0)
		.and_then(|v| v.as_string())
		.ok_or_else(|| invalid(node, "expected a string".to_string()))
}

/// First argument of `node` as an integer that fits `T`.
///
/// Accepts any KDL integer literal, including `0x` hex offsets.
pub fn int_arg<T: TryFrom<i128>>(node: &KdlNode) -> Result<T> {
	let raw = node
		.get(0)
		.and_then(|v| v.as_integer())
		.ok_or_else(|| invalid(node, "expected an integer".to_string()))?;
	T::try_from(raw).map_err(|_| invalid(node, format!("{raw} is out of range")))
}

fn invalid(node: &KdlNode, reason: String) -> ConfigError {
	ConfigError::InvalidValue {
		key: node.name().value().to_string(),
		reason,
	}
}

/// Records a [`ConfigWarning::DuplicateKey`] the second time `key` is seen.
pub fn note_key<'a>(seen: &mut Vec<&'a str>, key: &'a str, warnings: &mut Vec<ConfigWarning>) {
	if seen.contains(&key) {
		warnings.push(ConfigWarning::DuplicateKey { key: key.to_string() });
	} else {
		seen.push(key);
	}
}
