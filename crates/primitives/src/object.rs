/// First object-table slot used for cutscene and GPose actors.
pub const CUTSCENE_START: u16 = 200;
/// One past the last cutscene slot; also the first screen-actor slot.
pub const CUTSCENE_END: u16 = 240;
/// One past the last screen-actor slot.
pub const SCREEN_END: u16 = 248;

/// Kind byte of a host game object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ObjectKind {
	None = 0,
	Player = 1,
	BattleNpc = 2,
	EventNpc = 3,
	Treasure = 4,
	Aetheryte = 5,
	GatheringPoint = 6,
	EventObj = 7,
	MountType = 8,
	Companion = 9,
	Retainer = 10,
	Area = 11,
	Housing = 12,
	Cutscene = 13,
	CardStand = 14,
	Ornament = 15,
}

impl ObjectKind {
	/// Decodes a raw kind byte; unknown values are `None`.
	pub const fn from_raw(raw: u8) -> Option<Self> {
		Some(match raw {
			0 => Self::None,
			1 => Self::Player,
			2 => Self::BattleNpc,
			3 => Self::EventNpc,
			4 => Self::Treasure,
			5 => Self::Aetheryte,
			6 => Self::GatheringPoint,
			7 => Self::EventObj,
			8 => Self::MountType,
			9 => Self::Companion,
			10 => Self::Retainer,
			11 => Self::Area,
			12 => Self::Housing,
			13 => Self::Cutscene,
			14 => Self::CardStand,
			15 => Self::Ornament,
			_ => return None,
		})
	}

	#[inline]
	pub const fn as_raw(self) -> u8 {
		self as u8
	}

	/// Kinds whose objects carry a character struct (and thus a customize block).
	pub const fn is_character(self) -> bool {
		matches!(
			self,
			Self::Player | Self::BattleNpc | Self::EventNpc | Self::MountType | Self::Companion | Self::Retainer | Self::Ornament
		)
	}
}

/// Object-table slots the host reserves for UI screens that render a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum ScreenActor {
	GPosePlayer = 201,
	CharacterScreen = 240,
	ExamineScreen = 241,
	FittingRoom = 242,
	DyePreview = 243,
	Portrait = 244,
	Card6 = 245,
	Card7 = 246,
	Card8 = 247,
}

impl ScreenActor {
	pub const fn from_index(index: u16) -> Option<Self> {
		Some(match index {
			201 => Self::GPosePlayer,
			240 => Self::CharacterScreen,
			241 => Self::ExamineScreen,
			242 => Self::FittingRoom,
			243 => Self::DyePreview,
			244 => Self::Portrait,
			245 => Self::Card6,
			246 => Self::Card7,
			247 => Self::Card8,
			_ => return None,
		})
	}

	/// Object-table slot of this screen actor.
	#[inline]
	pub const fn index(self) -> u16 {
		self as u16
	}

	/// Position relative to [`ScreenActor::CharacterScreen`], if at or after it.
	pub const fn screen_offset(self) -> Option<u16> {
		self.index().checked_sub(CUTSCENE_END)
	}
}

#[cfg(test)]
mod tests;
