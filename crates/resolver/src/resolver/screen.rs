//! Screen actors: the character previews UI windows render into reserved slots.
//!
//! Each query answers `(applies, identity)`. `applies` is `false` when the UI
//! context the query is about is not active (so the caller should try another
//! explanation for the slot); once it is `true` the identity is final even when
//! it is [`ActorIdentifier::Invalid`].

use actorid_primitives::{ActorIdentifier, ScreenActor};

use super::{ActorResolver, addons};

/// Object-table slots compared against the examine, fitting-room and dye
/// previews, in search order.
const EXAMINE_CANDIDATES: [u16; 3] = [2, 4, 6];
const FITTING_ROOM_CANDIDATES: [u16; 3] = [4, 2, 6];
const DYE_PREVIEW_CANDIDATES: [u16; 3] = [6, 2, 4];

/// Highest screen offset the party banner assigns.
const MAX_BANNER_SLOT: u16 = 7;

impl ActorResolver {
	/// Player shown at `screen` in the party banner (duty start, party list).
	///
	/// Offset 0 is the local player; offset `n` is party member `n - 1`.
	pub fn resolve_party_banner_player(&self, screen: ScreenActor) -> (bool, ActorIdentifier) {
		if !self.addon_open(addons::BANNER_PARTY) {
			return (false, ActorIdentifier::Invalid);
		}

		let Some(offset) = screen.screen_offset().filter(|&offset| offset <= MAX_BANNER_SLOT) else {
			return (true, ActorIdentifier::Invalid);
		};
		if offset == 0 {
			return (true, self.current_player());
		}

		let Ok(member) = u8::try_from(offset - 1) else {
			return (true, ActorIdentifier::Invalid);
		};
		let id = self
			.host
			.party
			.party_member(member)
			.map_or(ActorIdentifier::Invalid, |member| self.create_player(member.name, member.home_world));
		(true, id)
	}

	/// Player shown at `screen` while seated at a mahjong table.
	///
	/// The context applies inside the configured territory or while the mahjong
	/// intro window is open. Previews are traced back to the party slot whose
	/// customize block they copy.
	pub fn resolve_mahjong_player(&self, screen: ScreenActor) -> (bool, ActorIdentifier) {
		let ui = &self.host.ui;
		if ui.territory_type() != self.config.mahjong_territory && !self.addon_open(addons::MAHJONG_INTRO) {
			return (false, ActorIdentifier::Invalid);
		}

		let Some(source) = self.host.objects.get(screen.index()) else {
			tracing::trace!(slot = screen.index(), "screen actor slot empty");
			return (false, ActorIdentifier::Invalid);
		};

		let id = match screen {
			ScreenActor::CharacterScreen => self.current_player(),
			ScreenActor::ExamineScreen => self.search_customize(&source, &EXAMINE_CANDIDATES),
			ScreenActor::FittingRoom => self.search_customize(&source, &FITTING_ROOM_CANDIDATES),
			ScreenActor::DyePreview => self.search_customize(&source, &DYE_PREVIEW_CANDIDATES),
			ScreenActor::GPosePlayer
			| ScreenActor::Portrait
			| ScreenActor::Card6
			| ScreenActor::Card7
			| ScreenActor::Card8 => ActorIdentifier::Invalid,
		};
		(true, id)
	}

	/// Opponent shown at `screen` in the PvP match introduction.
	///
	/// The previews there copy the opponent, so the answer is the first player
	/// whose customize block differs from the preview's.
	pub fn resolve_pvp_banner_player(&self, screen: ScreenActor) -> (bool, ActorIdentifier) {
		if !self.addon_open(addons::PVP_INTRODUCTION) {
			return (false, ActorIdentifier::Invalid);
		}

		let Some(source) = self.host.objects.get(screen.index()) else {
			tracing::trace!(slot = screen.index(), "screen actor slot empty");
			return (false, ActorIdentifier::Invalid);
		};

		let id = match screen {
			ScreenActor::CharacterScreen
			| ScreenActor::ExamineScreen
			| ScreenActor::FittingRoom
			| ScreenActor::DyePreview
			| ScreenActor::Portrait => self.search_other_player(&source),
			ScreenActor::GPosePlayer | ScreenActor::Card6 | ScreenActor::Card7 | ScreenActor::Card8 => {
				ActorIdentifier::Invalid
			}
		};
		(true, id)
	}
}
