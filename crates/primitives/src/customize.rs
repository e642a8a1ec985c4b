use core::fmt;

/// Size of the customize block of a character.
pub const CUSTOMIZE_LEN: usize = 26;

/// Appearance fingerprint of a character.
///
/// UI screens that render copies of a character into spare object slots keep
/// the customize block intact, so comparing it is how those copies are traced
/// back to the character they show.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Customize([u8; CUSTOMIZE_LEN]);

impl Customize {
	pub const fn new(bytes: [u8; CUSTOMIZE_LEN]) -> Self {
		Self(bytes)
	}

	/// Reads a customize block from the front of `bytes`.
	///
	/// Returns `None` when fewer than [`CUSTOMIZE_LEN`] bytes are available.
	pub fn from_slice(bytes: &[u8]) -> Option<Self> {
		let block = bytes.get(..CUSTOMIZE_LEN)?;
		let mut out = [0u8; CUSTOMIZE_LEN];
		out.copy_from_slice(block);
		Some(Self(out))
	}

	#[inline]
	pub fn as_bytes(&self) -> &[u8; CUSTOMIZE_LEN] {
		&self.0
	}
}

impl fmt::Debug for Customize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Customize(")?;
		for byte in &self.0 {
			write!(f, "{byte:02x}")?;
		}
		f.write_str(")")
	}
}
