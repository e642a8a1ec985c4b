use rstest::rstest;

use super::*;

#[rstest]
#[case(ScreenActor::CharacterScreen, Some(0))]
#[case(ScreenActor::Portrait, Some(4))]
#[case(ScreenActor::Card8, Some(7))]
#[case(ScreenActor::GPosePlayer, None)]
fn test_screen_offset_counts_from_character_screen(#[case] actor: ScreenActor, #[case] expected: Option<u16>) {
	assert_eq!(actor.screen_offset(), expected);
}

#[test]
fn test_screen_slots_cover_cutscene_end_to_screen_end() {
	for index in CUTSCENE_END..SCREEN_END {
		let actor = ScreenActor::from_index(index).expect("screen slot");
		assert_eq!(actor.index(), index);
	}
	assert_eq!(ScreenActor::from_index(SCREEN_END), None);
	assert_eq!(ScreenActor::from_index(CUTSCENE_START), None);
}

#[test]
fn test_unknown_kind_bytes_are_rejected() {
	assert_eq!(ObjectKind::from_raw(15), Some(ObjectKind::Ornament));
	assert_eq!(ObjectKind::from_raw(16), None);
	assert_eq!(ObjectKind::from_raw(u8::MAX), None);
}
