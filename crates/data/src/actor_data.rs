//! The six name tables of one client language.

use actorid_primitives::{ActorIdentifier, ClientLanguage, ObjectKind, WorldId};

use crate::builder::{build_companions, build_mounts, build_named, build_worlds};
use crate::shared::{SharedCache, SharedHandle};
use crate::sheets::{ReferenceSheets, Sheet};
use crate::tables::{NameTable, WorldTable};

/// Cache tags of the tables owned by [`ActorData`].
pub mod tags {
	pub const WORLDS: &str = "Worlds";
	pub const MOUNTS: &str = "Mounts";
	pub const COMPANIONS: &str = "Companions";
	pub const ORNAMENTS: &str = "Ornaments";
	pub const BNPCS: &str = "BNpcs";
	pub const ENPCS: &str = "ENpcs";

	pub const ALL: [&str; 6] = [WORLDS, MOUNTS, COMPANIONS, ORNAMENTS, BNPCS, ENPCS];
}

/// Returned by the name helpers when a lookup fails.
pub const INVALID_NAME: &str = "Invalid";
/// Display name of [`WorldId::ANY`].
pub const ANY_WORLD_NAME: &str = "Any World";

/// Event NPC resident rows of the mannequins placed in housing and retainer
/// wards. They are event NPCs to the host but dressed like players.
pub const MANNEQUIN_IDS: [u32; 15] = [
	1_026_228, 1_026_229, 1_026_986, 1_026_987, 1_026_988, 1_026_989, 1_032_291, 1_032_292, 1_032_293, 1_032_294,
	1_033_046, 1_033_047, 1_033_658, 1_033_659, 1_007_137,
];

/// Whether `data_id` is an event NPC row of a mannequin.
pub fn is_mannequin_id(data_id: u32) -> bool {
	MANNEQUIN_IDS.contains(&data_id)
}

/// Whether `id` names a mannequin: an event NPC whose row is in [`MANNEQUIN_IDS`].
pub fn is_mannequin(id: &ActorIdentifier) -> bool {
	matches!(
		id,
		ActorIdentifier::Npc {
			kind: ObjectKind::EventNpc,
			data_id,
		} if is_mannequin_id(*data_id)
	)
}

/// Name tables for one language, shared through a [`SharedCache`].
///
/// Each table is acquired independently; a table whose sheet is missing or
/// malformed is empty and every lookup into it fails, the others are unaffected.
/// Dropping or [disposing](ActorData::dispose) releases all six handles.
#[derive(Debug)]
pub struct ActorData {
	language: ClientLanguage,
	worlds: SharedHandle<WorldTable>,
	mounts: SharedHandle<NameTable>,
	companions: SharedHandle<NameTable>,
	ornaments: SharedHandle<NameTable>,
	bnpcs: SharedHandle<NameTable>,
	enpcs: SharedHandle<NameTable>,
}

impl ActorData {
	pub fn new(cache: &SharedCache, sheets: &dyn ReferenceSheets, language: ClientLanguage) -> Self {
		Self {
			language,
			worlds: cache.acquire(tags::WORLDS, language, || build_worlds(sheets.worlds(language)?)),
			mounts: cache.acquire(tags::MOUNTS, language, || build_mounts(sheets.mounts(language)?)),
			companions: cache.acquire(tags::COMPANIONS, language, || build_companions(sheets.companions(language)?)),
			ornaments: cache.acquire(tags::ORNAMENTS, language, || {
				build_named(Sheet::Ornament, sheets.ornaments(language)?)
			}),
			bnpcs: cache.acquire(tags::BNPCS, language, || build_named(Sheet::BNpcName, sheets.bnpc_names(language)?)),
			enpcs: cache.acquire(tags::ENPCS, language, || {
				build_named(Sheet::ENpcResident, sheets.enpc_residents(language)?)
			}),
		}
	}

	pub fn language(&self) -> ClientLanguage {
		self.language
	}

	pub fn worlds(&self) -> &WorldTable {
		&self.worlds
	}

	pub fn mounts(&self) -> &NameTable {
		&self.mounts
	}

	pub fn companions(&self) -> &NameTable {
		&self.companions
	}

	pub fn ornaments(&self) -> &NameTable {
		&self.ornaments
	}

	pub fn bnpcs(&self) -> &NameTable {
		&self.bnpcs
	}

	pub fn enpcs(&self) -> &NameTable {
		&self.enpcs
	}

	/// Tags whose builder failed and which are served as empty tables.
	pub fn unavailable_tags(&self) -> Vec<&'static str> {
		let handles = [
			(self.worlds.tag(), self.worlds.is_available()),
			(self.mounts.tag(), self.mounts.is_available()),
			(self.companions.tag(), self.companions.is_available()),
			(self.ornaments.tag(), self.ornaments.is_available()),
			(self.bnpcs.tag(), self.bnpcs.is_available()),
			(self.enpcs.tag(), self.enpcs.is_available()),
		];
		handles.into_iter().filter(|(_, ok)| !ok).map(|(tag, _)| tag).collect()
	}

	/// Whether the table cached under `tag` was built successfully.
	///
	/// Unknown tags are reported as unavailable.
	pub fn is_available(&self, tag: &str) -> bool {
		match tag {
			tags::WORLDS => self.worlds.is_available(),
			tags::MOUNTS => self.mounts.is_available(),
			tags::COMPANIONS => self.companions.is_available(),
			tags::ORNAMENTS => self.ornaments.is_available(),
			tags::BNPCS => self.bnpcs.is_available(),
			tags::ENPCS => self.enpcs.is_available(),
			_ => false,
		}
	}

	/// Name of the sheet row `data_id` for objects of `kind`.
	///
	/// Only mounts, companions, ornaments, battle NPCs and event NPCs have name
	/// tables; every other kind yields `None`.
	pub fn try_name(&self, kind: ObjectKind, data_id: u32) -> Option<&str> {
		let table = match kind {
			ObjectKind::MountType => &self.mounts,
			ObjectKind::Companion => &self.companions,
			ObjectKind::Ornament => &self.ornaments,
			ObjectKind::BattleNpc => &self.bnpcs,
			ObjectKind::EventNpc => &self.enpcs,
			ObjectKind::None
			| ObjectKind::Player
			| ObjectKind::Treasure
			| ObjectKind::Aetheryte
			| ObjectKind::GatheringPoint
			| ObjectKind::EventObj
			| ObjectKind::Retainer
			| ObjectKind::Area
			| ObjectKind::Housing
			| ObjectKind::Cutscene
			| ObjectKind::CardStand => return None,
		};
		table.get(data_id)
	}

	/// Like [`ActorData::try_name`], with `"Invalid"` for failed lookups.
	pub fn to_name(&self, kind: ObjectKind, data_id: u32) -> &str {
		self.try_name(kind, data_id).unwrap_or(INVALID_NAME)
	}

	/// World name, `"Any World"` for [`WorldId::ANY`], `"Invalid"` if unknown.
	pub fn world_name(&self, world: WorldId) -> &str {
		if world.is_any() {
			return ANY_WORLD_NAME;
		}
		self.worlds.name(world).unwrap_or(INVALID_NAME)
	}

	/// World id for a case-insensitive name.
	///
	/// An empty name means [`WorldId::ANY`]; an unknown name is [`WorldId::NONE`].
	pub fn world_id(&self, name: &str) -> WorldId {
		if name.is_empty() {
			return WorldId::ANY;
		}
		self.worlds.id(name).unwrap_or(WorldId::NONE)
	}

	/// Whether `world` may appear in a player identity.
	pub fn verify_world(&self, world: WorldId) -> bool {
		world.is_any() || self.worlds.contains(world)
	}

	/// Human-readable form of an identifier.
	pub fn display(&self, id: &ActorIdentifier) -> String {
		match id {
			ActorIdentifier::Invalid => INVALID_NAME.to_string(),
			ActorIdentifier::Player { name, home_world } => {
				format!("{name} ({})", self.world_name(*home_world))
			}
			ActorIdentifier::Owned {
				name,
				home_world,
				kind,
				data_id,
			} => format!(
				"{name}'s {} ({})",
				self.to_name(*kind, *data_id),
				self.world_name(*home_world)
			),
			ActorIdentifier::Npc { kind, data_id } => self.to_name(*kind, *data_id).to_string(),
		}
	}

	/// Releases every table handle.
	pub fn dispose(self) {
		drop(self);
	}
}

#[cfg(test)]
mod tests;
