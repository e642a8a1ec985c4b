use std::collections::HashSet;

use super::*;

fn player(name: &str, world: u16) -> ActorIdentifier {
	ActorIdentifier::player_unchecked(ByteName::from(name), WorldId(world))
}

#[test]
fn test_players_equal_by_name_and_world() {
	assert_eq!(player("Test Name", 21), player("Test Name", 21));
	assert_ne!(player("Test Name", 21), player("Test Name", 22));
	assert_ne!(player("Test Name", 21), player("Test Namf", 21));
}

#[test]
fn test_invalid_only_equals_itself() {
	assert_eq!(ActorIdentifier::Invalid, ActorIdentifier::INVALID);
	assert_eq!(ActorIdentifier::default(), ActorIdentifier::Invalid);
	assert_ne!(ActorIdentifier::Invalid, player("Test Name", 21));
	assert_ne!(ActorIdentifier::Invalid, ActorIdentifier::npc(ObjectKind::None, 0));
}

#[test]
fn test_variant_tag_participates_in_equality() {
	let owned = ActorIdentifier::owned_unchecked(ByteName::from("Test Name"), WorldId(21), ObjectKind::MountType, 5);
	let npc = ActorIdentifier::npc(ObjectKind::MountType, 5);
	assert_ne!(owned, npc);
	assert_eq!(owned.kind_tag(), IdentifierType::Owned);
	assert_eq!(npc.kind_tag(), IdentifierType::Npc);
}

#[test]
fn test_identifiers_hash_consistently() {
	let mut set = HashSet::new();
	set.insert(player("Test Name", 21));
	set.insert(player("Test Name", 21));
	set.insert(ActorIdentifier::Invalid);
	set.insert(ActorIdentifier::Invalid);
	assert_eq!(set.len(), 2);
}

#[test]
fn test_accessors_follow_variant() {
	let owned = ActorIdentifier::owned_unchecked(ByteName::from("Test Name"), WorldId(21), ObjectKind::Companion, 9);
	assert_eq!(owned.player_name(), Some(&ByteName::from("Test Name")));
	assert_eq!(owned.home_world(), Some(WorldId(21)));
	assert_eq!(owned.object_kind(), Some(ObjectKind::Companion));
	assert_eq!(owned.data_id(), Some(9));

	assert_eq!(ActorIdentifier::Invalid.player_name(), None);
	assert!(!ActorIdentifier::Invalid.is_valid());
	assert_eq!(player("Test Name", 21).object_kind(), Some(ObjectKind::Player));
}

#[test]
fn test_display_is_raw() {
	assert_eq!(player("Test Name", 21).to_string(), "Test Name@21");
	assert_eq!(ActorIdentifier::npc(ObjectKind::EventNpc, 1000).to_string(), "EventNpc#1000");
	assert_eq!(ActorIdentifier::Invalid.to_string(), "Invalid");
}
