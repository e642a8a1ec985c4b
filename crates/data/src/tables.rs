//! Immutable id → name tables.

use actorid_primitives::WorldId;
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Display names by sheet row id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
	names: FxHashMap<u32, String>,
}

impl NameTable {
	#[inline]
	pub fn get(&self, id: u32) -> Option<&str> {
		self.names.get(&id).map(String::as_str)
	}

	#[inline]
	pub fn contains(&self, id: u32) -> bool {
		self.names.contains_key(&id)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
		self.names.iter().map(|(&id, name)| (id, name.as_str()))
	}

	/// Inserts unless `id` is taken; returns whether the row was inserted.
	pub(crate) fn insert_new(&mut self, id: u32, name: String) -> bool {
		match self.names.entry(id) {
			std::collections::hash_map::Entry::Occupied(_) => false,
			std::collections::hash_map::Entry::Vacant(slot) => {
				slot.insert(name);
				true
			}
		}
	}
}

/// World names by id, with a case-insensitive reverse index.
///
/// Row order is kept, and when several worlds share a name the first one in row
/// order owns it in the reverse index.
#[derive(Debug, Clone, Default)]
pub struct WorldTable {
	by_id: IndexMap<WorldId, String, FxBuildHasher>,
	by_name: FxHashMap<String, WorldId>,
}

impl WorldTable {
	#[inline]
	pub fn name(&self, id: WorldId) -> Option<&str> {
		self.by_id.get(&id).map(String::as_str)
	}

	/// Case-insensitive reverse lookup.
	pub fn id(&self, name: &str) -> Option<WorldId> {
		self.by_name.get(&fold_case(name)).copied()
	}

	#[inline]
	pub fn contains(&self, id: WorldId) -> bool {
		self.by_id.contains_key(&id)
	}

	pub fn len(&self) -> usize {
		self.by_id.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_id.is_empty()
	}

	/// Worlds in row order.
	pub fn iter(&self) -> impl Iterator<Item = (WorldId, &str)> {
		self.by_id.iter().map(|(&id, name)| (id, name.as_str()))
	}

	/// Inserts unless `id` is taken; returns whether the row was inserted.
	pub(crate) fn insert_new(&mut self, id: WorldId, name: String) -> bool {
		if self.by_id.contains_key(&id) {
			return false;
		}
		self.by_name.entry(fold_case(&name)).or_insert(id);
		self.by_id.insert(id, name);
		true
	}
}

fn fold_case(name: &str) -> String {
	name.to_lowercase()
}
