use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;
use crate::sheets::{CompanionRow, MountRow, NameRow, SheetDump, SheetSet, WorldRow};
use crate::title_case::ARTICLE_ALWAYS_CAPITALIZED;

fn english_set() -> SheetSet {
	SheetSet {
		worlds: Some(vec![
			WorldRow {
				row_id: 21,
				name: "Ravana".into(),
				is_public: true,
			},
			WorldRow {
				row_id: 22,
				name: "Bismarck".into(),
				is_public: true,
			},
			WorldRow {
				row_id: 3,
				name: "Dev".into(),
				is_public: false,
			},
		]),
		mounts: Some(vec![MountRow {
			row_id: 1,
			singular: "company chocobo".into(),
			article: 0,
			order: 0,
		}]),
		companions: Some(vec![CompanionRow {
			row_id: 5,
			singular: "wind-up cait sith".into(),
			article: 0,
			order: 1,
		}]),
		ornaments: Some(vec![NameRow {
			row_id: 2,
			singular: "archangel wings".into(),
			article: 0,
		}]),
		bnpc_names: Some(vec![NameRow {
			row_id: 541,
			singular: "striking dummy".into(),
			article: 0,
		}]),
		enpc_residents: Some(vec![NameRow {
			row_id: 1_000_000,
			singular: "Alphinaud".into(),
			article: ARTICLE_ALWAYS_CAPITALIZED,
		}]),
	}
}

fn english_dump() -> SheetDump {
	SheetDump::new().with_language(ClientLanguage::English, english_set())
}

#[rstest]
#[case(ObjectKind::MountType, 1, Some("Company Chocobo"))]
#[case(ObjectKind::Companion, 5, Some("Wind-up Cait Sith"))]
#[case(ObjectKind::Ornament, 2, Some("Archangel Wings"))]
#[case(ObjectKind::BattleNpc, 541, Some("Striking Dummy"))]
#[case(ObjectKind::EventNpc, 1_000_000, Some("Alphinaud"))]
#[case(ObjectKind::BattleNpc, 1, None)]
#[case(ObjectKind::Player, 1, None)]
#[case(ObjectKind::Retainer, 541, None)]
fn test_try_name(#[case] kind: ObjectKind, #[case] data_id: u32, #[case] expected: Option<&str>) {
	let cache = SharedCache::new();
	let data = ActorData::new(&cache, &english_dump(), ClientLanguage::English);
	assert_eq!(data.try_name(kind, data_id), expected);
}

#[test]
fn test_to_name_falls_back_to_invalid() {
	let cache = SharedCache::new();
	let data = ActorData::new(&cache, &english_dump(), ClientLanguage::English);

	assert_eq!(data.to_name(ObjectKind::MountType, 1), "Company Chocobo");
	assert_eq!(data.to_name(ObjectKind::MountType, 999), "Invalid");
	assert_eq!(data.to_name(ObjectKind::Housing, 1), "Invalid");
}

#[test]
fn test_world_lookups() {
	let cache = SharedCache::new();
	let data = ActorData::new(&cache, &english_dump(), ClientLanguage::English);

	assert_eq!(data.world_name(WorldId(21)), "Ravana");
	assert_eq!(data.world_name(WorldId::ANY), "Any World");
	assert_eq!(data.world_name(WorldId(3)), "Invalid");

	assert_eq!(data.world_id("ravana"), WorldId(21));
	assert_eq!(data.world_id("BISMARCK"), WorldId(22));
	assert_eq!(data.world_id(""), WorldId::ANY);
	assert_eq!(data.world_id("Nowhere"), WorldId::NONE);
}

#[test]
fn test_verify_world() {
	let cache = SharedCache::new();
	let data = ActorData::new(&cache, &english_dump(), ClientLanguage::English);

	assert!(data.verify_world(WorldId(21)));
	assert!(data.verify_world(WorldId::ANY));
	assert!(!data.verify_world(WorldId::NONE));
	assert!(!data.verify_world(WorldId(3)));
}

#[test]
fn test_display() {
	let cache = SharedCache::new();
	let data = ActorData::new(&cache, &english_dump(), ClientLanguage::English);

	let player = ActorIdentifier::player_unchecked("Test Name".into(), WorldId(21));
	let owned = ActorIdentifier::owned_unchecked("Test Name".into(), WorldId(21), ObjectKind::Companion, 5);
	let npc = ActorIdentifier::npc(ObjectKind::BattleNpc, 541);

	assert_eq!(data.display(&player), "Test Name (Ravana)");
	assert_eq!(data.display(&owned), "Test Name's Wind-up Cait Sith (Ravana)");
	assert_eq!(data.display(&npc), "Striking Dummy");
	assert_eq!(data.display(&ActorIdentifier::Invalid), "Invalid");
}

/// Two instances for one language share every table and build each once.
#[test]
fn test_instances_share_tables() {
	let cache = SharedCache::new();
	let sheets = english_dump();

	let a = ActorData::new(&cache, &sheets, ClientLanguage::English);
	let b = ActorData::new(&cache, &sheets, ClientLanguage::English);

	assert!(a.worlds.ptr_eq(&b.worlds));
	assert!(a.enpcs.ptr_eq(&b.enpcs));
	assert_eq!(cache.len(), tags::ALL.len());
	for tag in [tags::MOUNTS, tags::COMPANIONS, tags::ORNAMENTS, tags::BNPCS, tags::ENPCS] {
		assert_eq!(cache.refcount::<NameTable>(tag, ClientLanguage::English), 2);
	}
	assert_eq!(cache.refcount::<WorldTable>(tags::WORLDS, ClientLanguage::English), 2);

	a.dispose();
	assert_eq!(cache.refcount::<WorldTable>(tags::WORLDS, ClientLanguage::English), 1);

	b.dispose();
	assert!(cache.is_empty());
}

#[test]
fn test_languages_are_independent() {
	let cache = SharedCache::new();
	let sheets = english_dump();

	let en = ActorData::new(&cache, &sheets, ClientLanguage::English);
	let de = ActorData::new(&cache, &sheets, ClientLanguage::German);

	assert_eq!(cache.len(), 2 * tags::ALL.len());
	assert!(en.unavailable_tags().is_empty());
	assert_eq!(de.unavailable_tags(), tags::ALL.to_vec());
	assert_eq!(de.world_name(WorldId(21)), "Invalid");
	assert_eq!(de.language(), ClientLanguage::German);
}

/// A broken sheet empties only its own table.
#[test]
fn test_failed_table_degrades_alone() {
	let mut set = english_set();
	set.mounts = None;
	set.bnpc_names = Some(vec![
		NameRow {
			row_id: 7,
			singular: "a".into(),
			article: 0,
		},
		NameRow {
			row_id: 7,
			singular: "b".into(),
			article: 0,
		},
	]);
	let sheets = SheetDump::new().with_language(ClientLanguage::English, set);
	let cache = SharedCache::new();
	let data = ActorData::new(&cache, &sheets, ClientLanguage::English);

	assert_eq!(data.unavailable_tags(), vec![tags::MOUNTS, tags::BNPCS]);
	assert!(!data.is_available(tags::MOUNTS));
	assert!(data.is_available(tags::WORLDS));
	assert!(!data.is_available("Emotes"));
	assert!(data.mounts().is_empty());
	assert!(data.bnpcs().is_empty());
	assert_eq!(data.try_name(ObjectKind::BattleNpc, 7), None);
	assert_eq!(data.try_name(ObjectKind::Companion, 5), Some("Wind-up Cait Sith"));
	assert_eq!(data.world_name(WorldId(22)), "Bismarck");
}

#[test]
fn test_is_available_by_tag() {
	let cache = SharedCache::new();
	let sheets = english_dump();
	let en = ActorData::new(&cache, &sheets, ClientLanguage::English);
	let de = ActorData::new(&cache, &sheets, ClientLanguage::German);

	for tag in tags::ALL {
		assert!(en.is_available(tag), "{tag}");
		assert!(!de.is_available(tag), "{tag}");
	}
	assert!(!en.is_available(""));
	assert!(!en.is_available("worlds"));
}

#[rstest]
#[case(ActorIdentifier::npc(ObjectKind::EventNpc, 1_026_228), true)]
#[case(ActorIdentifier::npc(ObjectKind::EventNpc, 1_007_137), true)]
#[case(ActorIdentifier::npc(ObjectKind::EventNpc, 1_000_000), false)]
#[case(ActorIdentifier::npc(ObjectKind::BattleNpc, 1_026_228), false)]
#[case(ActorIdentifier::owned_unchecked("Test Name".into(), WorldId(21), ObjectKind::Ornament, 1_026_228), false)]
#[case(ActorIdentifier::Invalid, false)]
fn test_is_mannequin(#[case] id: ActorIdentifier, #[case] expected: bool) {
	assert_eq!(is_mannequin(&id), expected);
}

#[test]
fn test_mannequin_ids_are_distinct_event_npc_rows() {
	let mut ids = MANNEQUIN_IDS.to_vec();
	ids.sort_unstable();
	ids.dedup();
	assert_eq!(ids.len(), MANNEQUIN_IDS.len());
	assert!(MANNEQUIN_IDS.iter().all(|&id| is_mannequin_id(id) && id >= 1_000_000));
	assert!(!is_mannequin_id(0));
}
