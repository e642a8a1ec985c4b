use core::fmt;
use std::borrow::Cow;

use smallvec::SmallVec;

/// Character name as raw host bytes.
///
/// Names are compared byte-for-byte and never normalized; two names are equal
/// only if the host produced identical bytes for them.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteName(SmallVec<[u8; 32]>);

impl ByteName {
	pub fn new(bytes: &[u8]) -> Self {
		Self(SmallVec::from_slice(bytes))
	}

	/// Reads a name from a fixed host buffer, stopping at the first NUL byte.
	pub fn from_nul_terminated(buffer: &[u8]) -> Self {
		let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
		Self::new(&buffer[..end])
	}

	#[inline]
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn to_string_lossy(&self) -> Cow<'_, str> {
		String::from_utf8_lossy(&self.0)
	}

	/// Checks the player naming rules of the host.
	///
	/// A valid name is a forename and a surname separated by a single space,
	/// 5 to 21 bytes in total. Each part starts with an ASCII capital followed by
	/// lowercase letters, apostrophes or hyphens; forenames are 2 to 15 bytes,
	/// surnames 2 to 18.
	pub fn is_valid_player_name(&self) -> bool {
		let name = self.as_bytes();
		if !(5..=21).contains(&name.len()) {
			return false;
		}

		let Some(split) = name.iter().position(|&b| b == b' ') else {
			return false;
		};
		let (forename, surname) = (&name[..split], &name[split + 1..]);
		if surname.contains(&b' ') {
			return false;
		}

		valid_name_part(forename, 2, 15) && valid_name_part(surname, 2, 18)
	}
}

fn valid_name_part(part: &[u8], min: usize, max: usize) -> bool {
	if !(min..=max).contains(&part.len()) || !part[0].is_ascii_uppercase() {
		return false;
	}

	let mut last = 0u8;
	for &current in &part[1..] {
		if !matches!(current, b'\'' | b'-' | b'a'..=b'z') {
			return false;
		}
		match (last, current) {
			(b'\'', b'-') | (b'-', b'-') | (b'-', b'\'') => return false,
			_ => {}
		}
		last = current;
	}

	part.last() != Some(&b'-')
}

impl From<&str> for ByteName {
	fn from(value: &str) -> Self {
		Self::new(value.as_bytes())
	}
}

impl From<&[u8]> for ByteName {
	fn from(value: &[u8]) -> Self {
		Self::new(value)
	}
}

impl fmt::Debug for ByteName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.to_string_lossy())
	}
}

impl fmt::Display for ByteName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_string_lossy())
	}
}
