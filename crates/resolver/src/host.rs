//! Capabilities the resolver needs from the host process.
//!
//! Everything the resolver knows about the running game arrives through these
//! traits. Every field of a [`LiveObject`] is optional: the host may be halfway
//! through updating a slot, and a value that cannot be read is treated as absent
//! rather than trusted.

use std::sync::Arc;

use actorid_primitives::{ByteName, Customize, ObjectKind, WorldId};

/// Owner id the host stores on characters nobody owns.
pub const NO_OWNER: u32 = 0xE000_0000;

/// Snapshot of one occupied object-table slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveObject {
	pub index: u16,
	pub kind: Option<ObjectKind>,
	pub name: Option<ByteName>,
	pub home_world: Option<WorldId>,
	/// Sheet row of the object (mount, companion, ornament, event NPC).
	pub data_id: Option<u32>,
	/// Battle NPC name row.
	pub name_id: Option<u32>,
	pub object_id: Option<u32>,
	/// Object id of the owning character; never [`NO_OWNER`].
	pub owner_id: Option<u32>,
	pub customize: Option<Customize>,
}

/// The host's table of live game objects.
pub trait ObjectTable: Send + Sync {
	/// Number of slots, occupied or not.
	fn capacity(&self) -> u16;

	/// The object in slot `index`, if the slot is occupied.
	fn get(&self, index: u16) -> Option<LiveObject>;

	/// Slot of the actor a cutscene or GPose copy was made from.
	fn cutscene_parent(&self, _index: u16) -> Option<u16> {
		None
	}
}

pub trait GameUi: Send + Sync {
	/// Whether the UI window (addon) called `name` is currently open.
	fn addon_present(&self, name: &str) -> bool;

	fn territory_type(&self) -> u16;
}

/// The character shown by the examine window.
pub trait InspectSource: Send + Sync {
	fn inspect_world(&self) -> Option<WorldId>;
	fn inspect_name(&self) -> Option<ByteName>;

	/// Title row of the examined character; `0` is no title.
	fn inspect_title(&self) -> Option<u16> {
		None
	}
}

/// Name and home world of a character the host only knows by record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyMember {
	pub name: ByteName,
	pub home_world: WorldId,
}

pub trait PartySource: Send + Sync {
	/// Party member `index`, not counting the local player.
	fn party_member(&self, index: u8) -> Option<PartyMember>;
}

/// The character of the currently open adventurer plate.
pub trait CharaCardSource: Send + Sync {
	fn card_character(&self) -> Option<PartyMember>;
}

/// Stand-in for capabilities the host does not provide.
#[derive(Debug, Clone, Copy, Default)]
pub struct Absent;

impl InspectSource for Absent {
	fn inspect_world(&self) -> Option<WorldId> {
		None
	}

	fn inspect_name(&self) -> Option<ByteName> {
		None
	}

	fn inspect_title(&self) -> Option<u16> {
		None
	}
}

impl PartySource for Absent {
	fn party_member(&self, _index: u8) -> Option<PartyMember> {
		None
	}
}

impl CharaCardSource for Absent {
	fn card_character(&self) -> Option<PartyMember> {
		None
	}
}

/// The set of host capabilities handed to the resolver.
#[derive(Clone)]
pub struct Host {
	pub objects: Arc<dyn ObjectTable>,
	pub ui: Arc<dyn GameUi>,
	pub inspect: Arc<dyn InspectSource>,
	pub party: Arc<dyn PartySource>,
	pub card: Arc<dyn CharaCardSource>,
}

impl Host {
	/// A host with an object table and UI only; inspect, party and card data are absent.
	pub fn new(objects: Arc<dyn ObjectTable>, ui: Arc<dyn GameUi>) -> Self {
		Self {
			objects,
			ui,
			inspect: Arc::new(Absent),
			party: Arc::new(Absent),
			card: Arc::new(Absent),
		}
	}

	pub fn with_inspect(mut self, inspect: Arc<dyn InspectSource>) -> Self {
		self.inspect = inspect;
		self
	}

	pub fn with_party(mut self, party: Arc<dyn PartySource>) -> Self {
		self.party = party;
		self
	}

	pub fn with_card(mut self, card: Arc<dyn CharaCardSource>) -> Self {
		self.card = card;
		self
	}
}

impl std::fmt::Debug for Host {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Host")
			.field("capacity", &self.objects.capacity())
			.field("territory", &self.ui.territory_type())
			.finish_non_exhaustive()
	}
}
