//! Host capabilities read straight out of process memory.
//!
//! # Role
//!
//! Plugins running inside the game have no API for the object table, the party
//! list or the adventurer plate; they read the game's own structures. This
//! module keeps those reads behind [`MemorySource`], a narrow byte accessor
//! where every read may fail, and interprets the bytes through an
//! [`ObjectLayout`] loaded from configuration.
//!
//! # Invariants
//!
//! - Address `0` is never read; a null pointer is an absent value.
//! - Multi-byte values are little-endian.
//! - A fixed-size read that runs past the readable range yields `None`, never a
//!   partial value. Names are the exception: a name cut off by the end of the
//!   readable range is returned as far as it could be read.
//! - [`LocalMemory::new`] is the only place raw process memory is admitted.

use std::ptr;

use actorid_primitives::{ByteName, CUSTOMIZE_LEN, Customize, ObjectKind, ObjectLayout, WorldId};

use crate::host::{CharaCardSource, InspectSource, LiveObject, NO_OWNER, ObjectTable, PartyMember, PartySource};

/// Longest name buffer read through a pointer.
pub const MAX_NAME_LEN: usize = 64;

/// Alignment and size of the chunks a NUL-terminated read fetches.
pub const NAME_CHUNK: usize = 16;

/// Byte-level access to an address space.
pub trait MemorySource: Send + Sync {
	/// Fills `buf` from `address`; returns `false` if any byte is unreadable.
	fn read_into(&self, address: usize, buf: &mut [u8]) -> bool;

	fn read_bytes(&self, address: usize, len: usize) -> Option<Vec<u8>> {
		if address == 0 {
			return None;
		}
		let mut buf = vec![0; len];
		self.read_into(address, &mut buf).then_some(buf)
	}

	fn read_u8(&self, address: usize) -> Option<u8> {
		read_array::<_, 1>(self, address).map(|[b]| b)
	}

	fn read_u16(&self, address: usize) -> Option<u16> {
		read_array(self, address).map(u16::from_le_bytes)
	}

	fn read_u32(&self, address: usize) -> Option<u32> {
		read_array(self, address).map(u32::from_le_bytes)
	}

	/// Reads a 64-bit pointer; null is `None`.
	fn read_ptr(&self, address: usize) -> Option<usize> {
		read_array(self, address)
			.map(u64::from_le_bytes)
			.and_then(|p| usize::try_from(p).ok())
			.filter(|&p| p != 0)
	}

	/// Reads a name from a buffer of at most `max` bytes, stopping at the first NUL.
	///
	/// Bytes are fetched in chunks that never cross a [`NAME_CHUNK`] boundary,
	/// so nothing past the page holding the terminator is touched. When a chunk
	/// is unreadable the read drops to single bytes and ends at the first byte
	/// that fails; the bytes read so far are the name. `None` only if the first
	/// byte is unreadable.
	fn read_nul_terminated(&self, address: usize, max: usize) -> Option<ByteName> {
		if address == 0 {
			return None;
		}
		let mut name = Vec::new();
		let mut chunk = [0; NAME_CHUNK];
		while name.len() < max {
			let Some(cursor) = address.checked_add(name.len()) else {
				break;
			};
			let len = (max - name.len()).min(NAME_CHUNK - cursor % NAME_CHUNK);
			let buf = if self.read_into(cursor, &mut chunk[..len]) {
				&chunk[..len]
			} else if self.read_into(cursor, &mut chunk[..1]) {
				&chunk[..1]
			} else {
				break;
			};
			match buf.iter().position(|&b| b == 0) {
				Some(nul) => {
					name.extend_from_slice(&buf[..nul]);
					return Some(ByteName::new(&name));
				}
				None => name.extend_from_slice(buf),
			}
		}
		(max == 0 || !name.is_empty()).then(|| ByteName::new(&name))
	}
}

fn read_array<M: MemorySource + ?Sized, const N: usize>(memory: &M, address: usize) -> Option<[u8; N]> {
	if address == 0 {
		return None;
	}
	let mut buf = [0; N];
	memory.read_into(address, &mut buf).then_some(buf)
}

#[inline]
fn at(base: usize, offset: usize) -> usize {
	base.saturating_add(offset)
}

/// A copy of a memory range, addressed as if it were still mapped at `base`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceMemory {
	base: usize,
	bytes: Vec<u8>,
}

impl SliceMemory {
	pub fn new(base: usize, bytes: Vec<u8>) -> Self {
		Self { base, bytes }
	}

	/// A zero-filled image of `len` bytes starting at `base`.
	pub fn zeroed(base: usize, len: usize) -> Self {
		Self::new(base, vec![0; len])
	}

	pub fn base(&self) -> usize {
		self.base
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Overwrites the image at `address`; returns `false` if it does not fit.
	pub fn write(&mut self, address: usize, data: &[u8]) -> bool {
		match self.range(address, data.len()) {
			Some(range) => {
				self.bytes[range].copy_from_slice(data);
				true
			}
			None => false,
		}
	}

	fn range(&self, address: usize, len: usize) -> Option<std::ops::Range<usize>> {
		let start = address.checked_sub(self.base)?;
		let end = start.checked_add(len)?;
		(end <= self.bytes.len()).then_some(start..end)
	}
}

impl MemorySource for SliceMemory {
	fn read_into(&self, address: usize, buf: &mut [u8]) -> bool {
		match self.range(address, buf.len()) {
			Some(range) => {
				buf.copy_from_slice(&self.bytes[range]);
				true
			}
			None => false,
		}
	}
}

/// The address space of the current process.
#[derive(Debug)]
pub struct LocalMemory {
	_private: (),
}

impl LocalMemory {
	/// # Safety
	///
	/// Every non-null address later passed to a read, together with the read
	/// length, must lie in memory that is mapped and readable for the lifetime of
	/// the returned value. Addresses are taken from the game's own pointers, so
	/// this holds as long as the game structures being read are live.
	pub unsafe fn new() -> Self {
		Self { _private: () }
	}
}

impl MemorySource for LocalMemory {
	fn read_into(&self, address: usize, buf: &mut [u8]) -> bool {
		if address == 0 || address.checked_add(buf.len()).is_none() {
			return false;
		}
		// SAFETY: the range is readable per the contract of `LocalMemory::new`,
		// and `buf` is a distinct allocation.
		unsafe { ptr::copy_nonoverlapping(address as *const u8, buf.as_mut_ptr(), buf.len()) };
		true
	}
}

type ParentLookup = Box<dyn Fn(u16) -> Option<u16> + Send + Sync>;

/// Object table as an array of object pointers at `base`.
pub struct RawObjectTable<M> {
	memory: M,
	base: usize,
	layout: ObjectLayout,
	parent: Option<ParentLookup>,
}

impl<M: MemorySource> RawObjectTable<M> {
	pub fn new(memory: M, base: usize, layout: ObjectLayout) -> Self {
		Self {
			memory,
			base,
			layout,
			parent: None,
		}
	}

	/// Maps cutscene slots to the slot of the actor they copy.
	pub fn with_parent_lookup(mut self, lookup: impl Fn(u16) -> Option<u16> + Send + Sync + 'static) -> Self {
		self.parent = Some(Box::new(lookup));
		self
	}

	pub fn layout(&self) -> &ObjectLayout {
		&self.layout
	}

	fn object_address(&self, index: u16) -> Option<usize> {
		if index >= self.layout.object_count {
			return None;
		}
		let slot = usize::from(index).checked_mul(self.layout.entry_stride)?;
		self.memory.read_ptr(self.base.checked_add(slot)?)
	}

	fn read_object(&self, index: u16, object: usize) -> LiveObject {
		let layout = &self.layout;
		let memory = &self.memory;
		let kind = memory
			.read_u8(at(object, layout.object_kind_offset))
			.and_then(ObjectKind::from_raw);
		let character = kind.is_some_and(ObjectKind::is_character);

		let mut live = LiveObject {
			index,
			kind,
			name: memory.read_nul_terminated(at(object, layout.name_offset), layout.name_len),
			object_id: memory.read_u32(at(object, layout.object_id_offset)),
			data_id: memory.read_u32(at(object, layout.data_id_offset)),
			..LiveObject::default()
		};

		if character {
			live.home_world = memory.read_u16(at(object, layout.home_world_offset)).map(WorldId);
			live.name_id = memory.read_u32(at(object, layout.name_id_offset));
			live.owner_id = memory
				.read_u32(at(object, layout.owner_id_offset))
				.filter(|&id| id != 0 && id != NO_OWNER);
			live.customize = memory
				.read_bytes(at(object, layout.customize_offset), CUSTOMIZE_LEN)
				.and_then(|bytes| Customize::from_slice(&bytes));
		}
		live
	}
}

impl<M: MemorySource> ObjectTable for RawObjectTable<M> {
	fn capacity(&self) -> u16 {
		self.layout.object_count
	}

	fn get(&self, index: u16) -> Option<LiveObject> {
		let object = self.object_address(index)?;
		Some(self.read_object(index, object))
	}

	fn cutscene_parent(&self, index: u16) -> Option<u16> {
		self.parent.as_ref().and_then(|lookup| lookup(index))
	}
}

/// Examine-window globals: a `u16` world id with the name buffer right after it,
/// and a `u16` title id at an address of its own.
#[derive(Debug)]
pub struct RawInspect<M> {
	memory: M,
	address: usize,
	title: Option<usize>,
}

impl<M: MemorySource> RawInspect<M> {
	/// `address` is where the scanned signature points: the world id field.
	pub fn new(memory: M, address: usize) -> Self {
		Self {
			memory,
			address,
			title: None,
		}
	}

	/// Sets the separately scanned address of the title id.
	pub fn with_title_address(mut self, address: usize) -> Self {
		self.title = Some(address);
		self
	}
}

impl<M: MemorySource> InspectSource for RawInspect<M> {
	fn inspect_world(&self) -> Option<WorldId> {
		self.memory.read_u16(self.address).map(WorldId)
	}

	fn inspect_name(&self) -> Option<ByteName> {
		self.memory
			.read_nul_terminated(at(self.address, 2), MAX_NAME_LEN)
			.filter(|name| !name.is_empty())
	}

	fn inspect_title(&self) -> Option<u16> {
		self.memory.read_u16(self.title?)
	}
}

/// The party member array of the group manager.
#[derive(Debug)]
pub struct RawParty<M> {
	memory: M,
	members: usize,
	layout: ObjectLayout,
}

impl<M: MemorySource> RawParty<M> {
	pub fn new(memory: M, members: usize, layout: ObjectLayout) -> Self {
		Self {
			memory,
			members,
			layout,
		}
	}
}

impl<M: MemorySource> PartySource for RawParty<M> {
	fn party_member(&self, index: u8) -> Option<PartyMember> {
		if index >= self.layout.party_member_count {
			return None;
		}
		let entry = self
			.members
			.checked_add(usize::from(index).checked_mul(self.layout.party_member_stride)?)?;
		let name = self
			.memory
			.read_nul_terminated(at(entry, self.layout.party_member_name_offset), MAX_NAME_LEN)
			.filter(|name| !name.is_empty())?;
		let home_world = WorldId(self.memory.read_u16(at(entry, self.layout.party_member_world_offset))?);
		Some(PartyMember { name, home_world })
	}
}

/// Chara-card agent, reached through the pointer to its data block.
#[derive(Debug)]
pub struct RawCharaCard<M> {
	memory: M,
	data_ptr: usize,
	layout: ObjectLayout,
}

impl<M: MemorySource> RawCharaCard<M> {
	/// `data_ptr` is the address of the agent's data pointer, which is null
	/// while no plate is open.
	pub fn new(memory: M, data_ptr: usize, layout: ObjectLayout) -> Self {
		Self {
			memory,
			data_ptr,
			layout,
		}
	}
}

impl<M: MemorySource> CharaCardSource for RawCharaCard<M> {
	fn card_character(&self) -> Option<PartyMember> {
		let data = self.memory.read_ptr(self.data_ptr)?;
		let name_ptr = self.memory.read_ptr(at(data, self.layout.card_name_ptr_offset))?;
		let name = self.memory.read_nul_terminated(name_ptr, MAX_NAME_LEN)?;
		let home_world = WorldId(self.memory.read_u16(at(data, self.layout.card_world_offset))?);
		Some(PartyMember { name, home_world })
	}
}
