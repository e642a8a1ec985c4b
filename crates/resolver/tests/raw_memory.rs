//! End to end: KDL config, a memory image laid out per that config, and the
//! resolver reading it through the raw adapters.

use std::sync::Arc;

use actorid_config::Config;
use actorid_data::{CompanionRow, SharedCache, SheetDump, SheetSet, WorldRow};
use actorid_primitives::{ActorIdentifier, ClientLanguage, ObjectKind, ObjectLayout, ScreenActor, WorldId};
use actorid_resolver::{ActorResolver, GameUi, Host, RawCharaCard, RawObjectTable, SliceMemory, addons};
use pretty_assertions::assert_eq;

const BASE: usize = 0x4000_0000;
const TABLE: usize = BASE;
const OBJECTS: usize = BASE + 0x1000;
const OBJECT_SIZE: usize = 0x100;
const CARD_AGENT: usize = BASE + 0x2_0000;

const CONFIG: &str = r#"
language "en"
mahjong-territory 831
layout "test" {
    object-count 248
    name-offset 0x10
    name-len 32
    object-id-offset 0x30
    data-id-offset 0x34
    owner-id-offset 0x38
    object-kind-offset 0x3C
    name-id-offset 0x40
    home-world-offset 0x44
    customize-offset 0x50
    card-name-ptr-offset 0x08
    card-world-offset 0x10
}
"#;

struct Ui {
	addons: Vec<&'static str>,
}

impl GameUi for Ui {
	fn addon_present(&self, name: &str) -> bool {
		self.addons.contains(&name)
	}

	fn territory_type(&self) -> u16 {
		132
	}
}

struct Image {
	memory: SliceMemory,
	layout: ObjectLayout,
	next_block: usize,
}

impl Image {
	fn new(layout: ObjectLayout) -> Self {
		Self {
			memory: SliceMemory::zeroed(BASE, 0x3_0000),
			layout,
			next_block: 0,
		}
	}

	fn object(&mut self, index: u16, kind: ObjectKind, name: &str) -> usize {
		let object = OBJECTS + self.next_block * OBJECT_SIZE;
		self.next_block += 1;
		let slot = TABLE + usize::from(index) * self.layout.entry_stride;
		assert!(self.memory.write(slot, &(object as u64).to_le_bytes()));
		assert!(self.memory.write(object + self.layout.object_kind_offset, &[kind.as_raw()]));
		assert!(self.memory.write(object + self.layout.name_offset, name.as_bytes()));
		object
	}

	fn player(&mut self, index: u16, name: &str, world: u16, customize: u8) -> usize {
		let object = self.object(index, ObjectKind::Player, name);
		self.u32(object + self.layout.object_id_offset, 0x1000_0000 + u32::from(index));
		assert!(self.memory.write(object + self.layout.home_world_offset, &world.to_le_bytes()));
		assert!(self.memory.write(object + self.layout.customize_offset, &[customize; 26]));
		object
	}

	fn u32(&mut self, address: usize, value: u32) {
		assert!(self.memory.write(address, &value.to_le_bytes()));
	}
}

fn sheets() -> SheetDump {
	SheetDump::new().with_language(
		ClientLanguage::English,
		SheetSet {
			worlds: Some(vec![WorldRow {
				row_id: 21,
				name: "Ravana".into(),
				is_public: true,
			}]),
			companions: Some(vec![CompanionRow {
				row_id: 12,
				singular: "wind-up cait sith".into(),
				article: 0,
				order: 3,
			}]),
			..SheetSet::default()
		},
	)
}

fn resolver(image: Image, config: &Config, addons: Vec<&'static str>) -> ActorResolver {
	let card = RawCharaCard::new(image.memory.clone(), CARD_AGENT, image.layout.clone());
	let objects = RawObjectTable::new(image.memory, TABLE, image.layout).with_parent_lookup(|index| (index == 201).then_some(0));
	let host = Host::new(Arc::new(objects), Arc::new(Ui { addons })).with_card(Arc::new(card));
	ActorResolver::from_config(&SharedCache::new(), &sheets(), host, config)
}

#[test]
fn test_config_layout_drives_object_reads() {
	let config = Config::parse(CONFIG).unwrap();
	assert!(config.warnings.is_empty());

	let mut image = Image::new(config.layout.clone());
	image.player(0, "Test Name", 21, 1);
	let pet = image.object(1, ObjectKind::Companion, "");
	image.u32(pet + config.layout.data_id_offset, 12);
	image.player(201, "Gpose Copy", 21, 1);

	let resolver = resolver(image, &config, Vec::new());
	let me = ActorIdentifier::player_unchecked("Test Name".into(), WorldId(21));

	assert_eq!(resolver.current_player(), me);
	assert_eq!(resolver.from_index(201), me);

	let companion = resolver.from_index(1);
	assert_eq!(
		companion,
		ActorIdentifier::owned_unchecked("Test Name".into(), WorldId(21), ObjectKind::Companion, 12)
	);
	assert_eq!(resolver.data().display(&companion), "Test Name's Wind-up Cait Sith (Ravana)");
	assert_eq!(resolver.from_index(2), ActorIdentifier::Invalid);
	assert_eq!(resolver.from_index(300), ActorIdentifier::Invalid);
}

#[test]
fn test_examine_preview_through_memory() {
	let config = Config::parse(CONFIG).unwrap();
	let mut image = Image::new(config.layout.clone());
	image.player(0, "Test Name", 21, 1);
	image.player(2, "Other Name", 21, 5);
	image.player(ScreenActor::ExamineScreen.index(), "Preview Copy", 21, 5);

	let resolver = resolver(image, &config, vec![addons::MAHJONG_INTRO]);

	assert_eq!(
		resolver.resolve_mahjong_player(ScreenActor::ExamineScreen),
		(true, ActorIdentifier::player_unchecked("Other Name".into(), WorldId(21)))
	);
}

#[test]
fn test_card_through_memory() {
	let config = Config::parse(CONFIG).unwrap();
	let mut image = Image::new(config.layout.clone());
	let data = CARD_AGENT + 0x100;
	let name = CARD_AGENT + 0x200;
	assert!(image.memory.write(CARD_AGENT, &(data as u64).to_le_bytes()));
	assert!(image.memory.write(data + config.layout.card_name_ptr_offset, &(name as u64).to_le_bytes()));
	assert!(image.memory.write(data + config.layout.card_world_offset, &21u16.to_le_bytes()));
	assert!(image.memory.write(name, b"Card Owner\0"));

	let resolver = resolver(image, &config, Vec::new());

	assert_eq!(
		resolver.card_player(),
		ActorIdentifier::player_unchecked("Card Owner".into(), WorldId(21))
	);
}
