//! Identity queries over the host's live state.
//!
//! Every query is a pure read of the current host state: it holds no locks,
//! caches nothing between calls and never panics. A query that cannot reach a
//! confident answer returns [`ActorIdentifier::Invalid`]; the screen-actor
//! queries additionally report whether their UI context applied at all.

mod customize;
mod screen;

use actorid_config::Config;
use actorid_data::{ActorData, ReferenceSheets, SharedCache};
use actorid_primitives::{ActorIdentifier, ByteName, CUTSCENE_END, CUTSCENE_START, ObjectKind, WorldId};

use crate::host::{Host, LiveObject};

/// Names of the UI windows whose presence gates a query.
pub mod addons {
	pub const CHARACTER_INSPECT: &str = "CharacterInspect";
	pub const BANNER_PARTY: &str = "BannerParty";
	pub const MAHJONG_INTRO: &str = "EmjIntro";
	pub const PVP_INTRODUCTION: &str = "PvPMKSIntroduction";
	pub const GLAMOUR_PLATE: &str = "MiragePrismMiragePlate";
}

/// Resolver settings taken from [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
	pub mahjong_territory: u16,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			mahjong_territory: actorid_config::DEFAULT_MAHJONG_TERRITORY,
		}
	}
}

impl From<&Config> for ResolverConfig {
	fn from(config: &Config) -> Self {
		Self {
			mahjong_territory: config.mahjong_territory,
		}
	}
}

/// Maps live objects and UI contexts to [`ActorIdentifier`]s.
#[derive(Debug)]
pub struct ActorResolver {
	data: ActorData,
	host: Host,
	config: ResolverConfig,
}

impl ActorResolver {
	pub fn new(data: ActorData, host: Host) -> Self {
		Self {
			data,
			host,
			config: ResolverConfig::default(),
		}
	}

	/// Builds the name tables for the configured language and wires up `host`.
	pub fn from_config(cache: &SharedCache, sheets: &dyn ReferenceSheets, host: Host, config: &Config) -> Self {
		let data = ActorData::new(cache, sheets, config.language);
		let unavailable = data.unavailable_tags();
		if !unavailable.is_empty() {
			tracing::warn!(language = %config.language, ?unavailable, "resolver running with empty name tables");
		}
		Self::new(data, host).with_config(config.into())
	}

	pub fn with_config(mut self, config: ResolverConfig) -> Self {
		self.config = config;
		self
	}

	pub fn data(&self) -> &ActorData {
		&self.data
	}

	pub fn host(&self) -> &Host {
		&self.host
	}

	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	/// Releases the shared name tables.
	pub fn dispose(self) {
		self.data.dispose();
	}

	/// A player identity, if `name` is a valid player name and `world` a known world.
	///
	/// [`WorldId::ANY`] is accepted as a world.
	pub fn create_player(&self, name: ByteName, world: WorldId) -> ActorIdentifier {
		if !name.is_valid_player_name() || !self.data.verify_world(world) {
			return ActorIdentifier::Invalid;
		}
		ActorIdentifier::player_unchecked(name, world)
	}

	/// [`ActorResolver::create_player`] from user input; an empty world means any world.
	pub fn parse_player(&self, name: &str, world: &str) -> ActorIdentifier {
		self.create_player(ByteName::from(name.trim()), self.data.world_id(world.trim()))
	}

	/// The local player, from object-table slot 0.
	pub fn current_player(&self) -> ActorIdentifier {
		self.host
			.objects
			.get(0)
			.and_then(|object| Some(ActorIdentifier::player_unchecked(object.name?, object.home_world?)))
			.unwrap_or_default()
	}

	/// Identity of the object in slot `index`.
	pub fn from_index(&self, index: u16) -> ActorIdentifier {
		self.host
			.objects
			.get(index)
			.map_or(ActorIdentifier::Invalid, |object| self.from_object(&object))
	}

	/// Identity of a live object.
	///
	/// Cutscene and GPose copies resolve to the actor they were copied from when
	/// the host knows it. Mounts, companions and ornaments belong to the player
	/// in the slot right before them; battle NPCs name their owner by object id.
	pub fn from_object(&self, object: &LiveObject) -> ActorIdentifier {
		if (CUTSCENE_START..CUTSCENE_END).contains(&object.index)
			&& let Some(parent) = self.host.objects.cutscene_parent(object.index)
		{
			return self
				.host
				.objects
				.get(parent)
				.filter(|parent| !(CUTSCENE_START..CUTSCENE_END).contains(&parent.index))
				.map_or(ActorIdentifier::Invalid, |parent| self.identify(&parent));
		}
		self.identify(object)
	}

	fn identify(&self, object: &LiveObject) -> ActorIdentifier {
		let Some(kind) = object.kind else {
			return ActorIdentifier::Invalid;
		};

		match kind {
			ObjectKind::Player => player_of(object)
				.map_or(ActorIdentifier::Invalid, |(name, world)| {
					ActorIdentifier::player_unchecked(name, world)
				}),
			ObjectKind::MountType | ObjectKind::Companion | ObjectKind::Ornament => {
				let Some(data_id) = object.data_id else {
					return ActorIdentifier::Invalid;
				};
				let owner = object
					.index
					.checked_sub(1)
					.and_then(|index| self.host.objects.get(index))
					.and_then(|owner| player_of(&owner));
				match owner {
					Some((name, world)) => ActorIdentifier::owned_unchecked(name, world, kind, data_id),
					None => ActorIdentifier::npc(kind, data_id),
				}
			}
			ObjectKind::BattleNpc => {
				let Some(name_id) = object.name_id else {
					return ActorIdentifier::Invalid;
				};
				match object.owner_id.and_then(|owner_id| self.player_by_object_id(owner_id)) {
					Some((name, world)) => ActorIdentifier::owned_unchecked(name, world, kind, name_id),
					None => ActorIdentifier::npc(kind, name_id),
				}
			}
			ObjectKind::EventNpc => object
				.data_id
				.map_or(ActorIdentifier::Invalid, |data_id| ActorIdentifier::npc(kind, data_id)),
			ObjectKind::None
			| ObjectKind::Treasure
			| ObjectKind::Aetheryte
			| ObjectKind::GatheringPoint
			| ObjectKind::EventObj
			| ObjectKind::Retainer
			| ObjectKind::Area
			| ObjectKind::Housing
			| ObjectKind::Cutscene
			| ObjectKind::CardStand => ActorIdentifier::Invalid,
		}
	}

	fn player_by_object_id(&self, object_id: u32) -> Option<(ByteName, WorldId)> {
		(0..CUTSCENE_START)
			.filter_map(|index| self.host.objects.get(index))
			.find(|object| object.object_id == Some(object_id))
			.and_then(|owner| player_of(&owner))
	}

	/// The player shown in the examine window.
	pub fn inspect_player(&self) -> ActorIdentifier {
		if !self.addon_open(addons::CHARACTER_INSPECT) {
			return ActorIdentifier::Invalid;
		}
		let inspect = &self.host.inspect;
		match (inspect.inspect_name(), inspect.inspect_world()) {
			(Some(name), Some(world)) => self.create_player(name, world),
			_ => ActorIdentifier::Invalid,
		}
	}

	/// Title row of the examined character while the examine window is open.
	pub fn inspect_title(&self) -> Option<u16> {
		if !self.addon_open(addons::CHARACTER_INSPECT) {
			return None;
		}
		self.host.inspect.inspect_title()
	}

	/// The owner of the open adventurer plate.
	///
	/// Gated on the card agent holding data, not on a window being open.
	pub fn card_player(&self) -> ActorIdentifier {
		self.host
			.card
			.card_character()
			.map_or(ActorIdentifier::Invalid, |member| self.create_player(member.name, member.home_world))
	}

	/// The local player while the glamour plate window is open.
	pub fn glamour_player(&self) -> ActorIdentifier {
		if !self.addon_open(addons::GLAMOUR_PLATE) {
			return ActorIdentifier::Invalid;
		}
		self.current_player()
	}

	fn addon_open(&self, addon: &'static str) -> bool {
		let open = self.host.ui.addon_present(addon);
		if !open {
			tracing::trace!(addon, "addon not open");
		}
		open
	}
}

/// Name and home world of a player-kind object.
fn player_of(object: &LiveObject) -> Option<(ByteName, WorldId)> {
	if object.kind != Some(ObjectKind::Player) {
		return None;
	}
	Some((object.name.clone()?, object.home_world?))
}
