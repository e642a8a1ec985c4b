use core::fmt;

/// Home world of a player character.
///
/// `0` means no world, `0xFFFF` is the display-only "any world" marker and is
/// never assigned to a real character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorldId(pub u16);

impl WorldId {
	/// No world; the result of failed world lookups.
	pub const NONE: Self = Self(0);
	/// Matches every world in UI contexts.
	pub const ANY: Self = Self(u16::MAX);

	#[inline]
	pub const fn as_u16(self) -> u16 {
		self.0
	}

	#[inline]
	pub const fn is_any(self) -> bool {
		self.0 == u16::MAX
	}

	#[inline]
	pub const fn is_none(self) -> bool {
		self.0 == 0
	}
}

impl From<u16> for WorldId {
	fn from(value: u16) -> Self {
		Self(value)
	}
}

impl fmt::Display for WorldId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
