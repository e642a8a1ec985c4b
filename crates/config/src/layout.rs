//! The `layout` block: raw-memory offsets for one game version.
//!
//! ```kdl
//! layout "7.0" {
//!     entry-stride 8
//!     name-offset 0x30
//!     customize-offset 0x840
//! }
//! ```
//!
//! Fields left out keep their [`ObjectLayout::default`] value.

use actorid_primitives::ObjectLayout;
use kdl::KdlNode;

use crate::error::{ConfigWarning, Result};
use crate::kdl_util::{int_arg, note_key};

pub fn parse_layout_node(node: &KdlNode, warnings: &mut Vec<ConfigWarning>) -> Result<ObjectLayout> {
	let mut layout = ObjectLayout::default();
	if let Some(version) = node.get(0).and_then(|v| v.as_string()) {
		layout.version = version.to_string();
	}

	let Some(children) = node.children() else {
		return Ok(layout);
	};

	let mut seen = Vec::new();
	for child in children.nodes() {
		let key = child.name().value();
		note_key(&mut seen, key, warnings);
		match key {
			"entry-stride" => layout.entry_stride = int_arg(child)?,
			"object-count" => layout.object_count = int_arg(child)?,
			"name-offset" => layout.name_offset = int_arg(child)?,
			"name-len" => layout.name_len = int_arg(child)?,
			"object-id-offset" => layout.object_id_offset = int_arg(child)?,
			"data-id-offset" => layout.data_id_offset = int_arg(child)?,
			"owner-id-offset" => layout.owner_id_offset = int_arg(child)?,
			"object-kind-offset" => layout.object_kind_offset = int_arg(child)?,
			"name-id-offset" => layout.name_id_offset = int_arg(child)?,
			"home-world-offset" => layout.home_world_offset = int_arg(child)?,
			"customize-offset" => layout.customize_offset = int_arg(child)?,
			"party-member-stride" => layout.party_member_stride = int_arg(child)?,
			"party-member-count" => layout.party_member_count = int_arg(child)?,
			"party-member-name-offset" => layout.party_member_name_offset = int_arg(child)?,
			"party-member-world-offset" => layout.party_member_world_offset = int_arg(child)?,
			"card-name-ptr-offset" => layout.card_name_ptr_offset = int_arg(child)?,
			"card-world-offset" => layout.card_world_offset = int_arg(child)?,
			_ => warnings.push(ConfigWarning::UnknownKey {
				key: key.to_string(),
				found_in: "layout block",
			}),
		}
	}

	Ok(layout)
}
