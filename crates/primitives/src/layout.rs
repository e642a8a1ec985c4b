//! Byte offsets of the host structures the raw-memory adapter reads.
//!
//! The host reshuffles these between game versions, so they are data rather
//! than constants: a layout is loaded from configuration and handed to the
//! adapter. [`ObjectLayout::default`] describes the current client.

/// Offsets into the object table, game objects, party list and chara card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLayout {
	/// Game version this layout was taken from.
	pub version: String,
	/// Size of one object-table entry (a pointer).
	pub entry_stride: usize,
	/// Number of entries in the object table.
	pub object_count: u16,

	/// Fixed-size NUL-padded name buffer of a game object.
	pub name_offset: usize,
	pub name_len: usize,
	pub object_id_offset: usize,
	pub data_id_offset: usize,
	pub owner_id_offset: usize,
	pub object_kind_offset: usize,
	/// Name row of battle NPCs; only meaningful on characters.
	pub name_id_offset: usize,
	pub home_world_offset: usize,
	pub customize_offset: usize,

	pub party_member_stride: usize,
	pub party_member_count: u8,
	pub party_member_name_offset: usize,
	pub party_member_world_offset: usize,

	/// Pointer to the NUL-terminated name inside the chara-card data.
	pub card_name_ptr_offset: usize,
	pub card_world_offset: usize,
}

impl Default for ObjectLayout {
	fn default() -> Self {
		Self {
			version: "6.5".to_string(),
			entry_stride: 8,
			object_count: 599,

			name_offset: 0x30,
			name_len: 64,
			object_id_offset: 0x74,
			data_id_offset: 0x80,
			owner_id_offset: 0x84,
			object_kind_offset: 0x8C,
			name_id_offset: 0x1AC8,
			home_world_offset: 0x1AE4,
			customize_offset: 0x840,

			party_member_stride: 0x230,
			party_member_count: 8,
			party_member_name_offset: 0x1B4,
			party_member_world_offset: 0x210,

			card_name_ptr_offset: 0x58,
			card_world_offset: 0xC0,
		}
	}
}
