use core::fmt;

use crate::{ByteName, ObjectKind, WorldId};

/// Variant tag of an [`ActorIdentifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierType {
	Invalid,
	Player,
	Owned,
	Npc,
}

/// Stable, comparable identity of an actor.
///
/// Two identifiers are equal iff they have the same variant and all fields of
/// that variant are equal. [`ActorIdentifier::Invalid`] is only equal to itself.
///
/// The constructors here do not validate their input; they are meant for
/// callers that already hold the guarantee (e.g. names read from a live game
/// object). Checked construction goes through the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ActorIdentifier {
	#[default]
	Invalid,
	/// A player character.
	Player { name: ByteName, home_world: WorldId },
	/// An object owned by a player; `name` and `home_world` are the owner's.
	Owned {
		name: ByteName,
		home_world: WorldId,
		kind: ObjectKind,
		data_id: u32,
	},
	/// An unowned non-player object, identified by its sheet row.
	Npc { kind: ObjectKind, data_id: u32 },
}

impl ActorIdentifier {
	pub const INVALID: Self = Self::Invalid;

	pub fn player_unchecked(name: ByteName, home_world: WorldId) -> Self {
		Self::Player { name, home_world }
	}

	pub fn owned_unchecked(name: ByteName, home_world: WorldId, kind: ObjectKind, data_id: u32) -> Self {
		Self::Owned {
			name,
			home_world,
			kind,
			data_id,
		}
	}

	pub fn npc(kind: ObjectKind, data_id: u32) -> Self {
		Self::Npc { kind, data_id }
	}

	pub fn kind_tag(&self) -> IdentifierType {
		match self {
			Self::Invalid => IdentifierType::Invalid,
			Self::Player { .. } => IdentifierType::Player,
			Self::Owned { .. } => IdentifierType::Owned,
			Self::Npc { .. } => IdentifierType::Npc,
		}
	}

	#[inline]
	pub fn is_valid(&self) -> bool {
		!matches!(self, Self::Invalid)
	}

	/// Name of the player this identity belongs to, for players and owned objects.
	pub fn player_name(&self) -> Option<&ByteName> {
		match self {
			Self::Player { name, .. } | Self::Owned { name, .. } => Some(name),
			Self::Invalid | Self::Npc { .. } => None,
		}
	}

	pub fn home_world(&self) -> Option<WorldId> {
		match self {
			Self::Player { home_world, .. } | Self::Owned { home_world, .. } => Some(*home_world),
			Self::Invalid | Self::Npc { .. } => None,
		}
	}

	pub fn object_kind(&self) -> Option<ObjectKind> {
		match self {
			Self::Owned { kind, .. } | Self::Npc { kind, .. } => Some(*kind),
			Self::Player { .. } => Some(ObjectKind::Player),
			Self::Invalid => None,
		}
	}

	pub fn data_id(&self) -> Option<u32> {
		match self {
			Self::Owned { data_id, .. } | Self::Npc { data_id, .. } => Some(*data_id),
			Self::Invalid | Self::Player { .. } => None,
		}
	}
}

/// Raw form without table lookups; use the name tables for display strings.
impl fmt::Display for ActorIdentifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Invalid => f.write_str("Invalid"),
			Self::Player { name, home_world } => write!(f, "{name}@{home_world}"),
			Self::Owned {
				name,
				home_world,
				kind,
				data_id,
			} => write!(f, "{name}@{home_world}/{kind:?}#{data_id}"),
			Self::Npc { kind, data_id } => write!(f, "{kind:?}#{data_id}"),
		}
	}
}

#[cfg(test)]
mod tests;
